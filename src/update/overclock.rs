use crux_core::{render::render, Command};

use crate::events::{Event, OverclockEvent};
use crate::http_helpers::{build_device_url, process_status_response};
use crate::model::Model;
use crate::types::OverclockUpdate;
use crate::{Effect, HttpCmd};

/// Handle the overclock unlock state machine
pub fn handle(event: OverclockEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        OverclockEvent::Toggle(enabled) => {
            model.settings_unlocked = enabled;
            if enabled {
                log::info!("overclock mode enabled, custom frequency and voltage values are available");
            } else {
                log::info!("overclock mode disabled, using preset values only");
            }
            Command::all([
                render(),
                persist_unlock_flag(&model.device_uri, u8::from(enabled)),
            ])
        }

        // Persistence is best effort: failures are logged, the UI state is
        // not reverted.
        OverclockEvent::PersistResponse(result) => {
            match result {
                Ok(()) => log::debug!("overclock flag persisted"),
                Err(e) => log::error!("failed to persist overclock flag: {e}"),
            }
            Command::done()
        }
    }
}

/// Fire-and-forget persistence of the unlock flag to the device.
///
/// Runs outside the loading lock so it never blocks the action that
/// triggered it.
pub fn persist_unlock_flag(uri: &str, enabled: u8) -> Command<Effect, Event> {
    let payload = OverclockUpdate {
        overclock_enabled: enabled,
    };

    match HttpCmd::patch(build_device_url(uri, "/api/system"))
        .header("Content-Type", "application/json")
        .body_json(&payload)
    {
        Ok(builder) => builder.build().then_send(|result| {
            Event::Overclock(OverclockEvent::PersistResponse(process_status_response(
                "Persist overclock flag",
                result,
            )))
        }),
        Err(e) => {
            log::error!("failed to build overclock persist request: {e}");
            Command::done()
        }
    }
}
