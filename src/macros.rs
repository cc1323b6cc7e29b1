/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.saved_changes, false;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_device_url, check_response_status, extract_error_message, handle_request_error,
    is_response_success, map_http_error, parse_json_response, process_json_response,
    process_status_response, BASE_URL,
};

/// Macro for a single GET against the device API, expecting a JSON response.
///
/// Does not touch the loading state: the load join issues several of these
/// under one loading lock. The result lands as a domain response event.
///
/// # Example
/// ```ignore
/// device_fetch!(Settings, SettingsEvent, &model.device_uri, "/api/system/info",
///     InfoLoaded, "Load system info", DeviceInfo)
/// ```
#[macro_export]
macro_rules! device_fetch {
    ($domain:ident, $domain_event:ident, $uri:expr, $endpoint:expr, $response_event:ident, $action:expr, $response_type:ty) => {{
        $crate::HttpCmd::get($crate::build_device_url($uri, $endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_json_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    }};
}

/// Macro for submitting device actions under the loading lock.
///
/// # Patterns
///
/// Pattern 1: POST without body (status only)
/// ```ignore
/// device_submit!(Device, DeviceEvent, model, "/api/system/restart",
///     RestartResponse, "Restart device", method: post)
/// ```
///
/// Pattern 2: PATCH with JSON body (status only)
/// ```ignore
/// device_submit!(Settings, SettingsEvent, model, "/api/system",
///     SaveResponse, "Save settings", method: patch, body_json: &payload)
/// ```
#[macro_export]
macro_rules! device_submit {
    // Pattern 1: POST without body
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, method: post) => {{
        $model.start_loading();
        let url = $crate::build_device_url(&$model.device_uri, $endpoint);
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post(url).build().then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
        ])
    }};

    // Pattern 2: PATCH with JSON body
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, method: patch, body_json: $body:expr) => {{
        $model.start_loading();
        let url = $crate::build_device_url(&$model.device_uri, $endpoint);
        match $crate::HttpCmd::patch(url)
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::process_status_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};
}
