use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::device_fetch;
use crate::device_submit;
use crate::events::{Event, SettingsEvent};
use crate::model::{Model, PendingLoad};
use crate::types::{DeviceInfo, OverheatMode, SettingsForm};
use crate::update::overclock;
use crate::Effect;

/// Handle the settings lifecycle: load join, form rules, submit
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::Initialize {
            device_uri,
            overclock_param,
        } => {
            model.device_uri = device_uri;

            let mut commands = vec![render()];

            if overclock_param {
                model.settings_unlocked = true;
                log::info!("overclock tunables unlocked via URL parameter");
                commands.push(overclock::persist_unlock_flag(&model.device_uri, 1));
            }

            model.start_loading();
            model.pending_load = Some(PendingLoad::default());

            commands.push(device_fetch!(
                Settings,
                SettingsEvent,
                &model.device_uri,
                "/api/system/info",
                InfoLoaded,
                "Load system info",
                DeviceInfo
            ));
            commands.push(device_fetch!(
                Settings,
                SettingsEvent,
                &model.device_uri,
                "/api/system/asic",
                AsicOptionsLoaded,
                "Load ASIC options",
                crate::types::AsicOptions
            ));
            commands.push(device_fetch!(
                Settings,
                SettingsEvent,
                &model.device_uri,
                "/api/system/asicmask",
                MaskOptionsLoaded,
                "Load ASIC mask options",
                crate::types::AsicMaskOptions
            ));

            Command::all(commands)
        }

        SettingsEvent::InfoLoaded(result) => {
            apply_load_slot(model, result, |pending, info| pending.info = Some(info))
        }
        SettingsEvent::AsicOptionsLoaded(result) => {
            apply_load_slot(model, result, |pending, asic| pending.asic = Some(asic))
        }
        SettingsEvent::MaskOptionsLoaded(result) => {
            apply_load_slot(model, result, |pending, masks| pending.masks = Some(masks))
        }

        SettingsEvent::FormChanged(mut form) => {
            form.apply_fan_mode();
            model.saved_changes = false;
            model.form = Some(form);
            model.refresh_dropdowns();
            render()
        }

        SettingsEvent::SetAutoFanSpeed(enabled) => {
            if let Some(form) = model.form.as_mut() {
                form.autofanspeed = enabled;
                form.apply_fan_mode();
                model.refresh_dropdowns();
                render()
            } else {
                Command::done()
            }
        }

        SettingsEvent::Save => submit_settings(model),

        SettingsEvent::DisableOverheatMode => {
            if let Some(form) = model.form.as_mut() {
                form.overheat_mode = OverheatMode::Off;
            }
            submit_settings(model)
        }

        SettingsEvent::SaveResponse(result) => {
            model.stop_loading();
            match result {
                Ok(()) => {
                    model.saved_changes = true;
                    model.success_message = Some(if model.device_uri.is_empty() {
                        "Saved settings".to_string()
                    } else {
                        format!("Saved settings for {}", model.device_uri)
                    });
                }
                Err(e) => {
                    model.saved_changes = false;
                    let message = if model.device_uri.is_empty() {
                        format!("Could not save settings. {e}")
                    } else {
                        format!("Could not save settings for {}. {e}", model.device_uri)
                    };
                    model.set_error(message);
                }
            }
            render()
        }

        SettingsEvent::Teardown => {
            model.pending_load = None;
            Command::done()
        }
    }
}

/// Store one load response in its staging slot.
///
/// A missing staging area means the view was torn down or an earlier fetch
/// already failed: the response is dropped. The first failure aborts the
/// whole join, so no partial form is ever shown.
fn apply_load_slot<T>(
    model: &mut Model,
    result: Result<T, String>,
    store: impl FnOnce(&mut PendingLoad, T),
) -> Command<Effect, Event> {
    let Some(pending) = model.pending_load.as_mut() else {
        return Command::done();
    };

    match result {
        Ok(value) => {
            store(pending, value);
            match model.pending_load.take_if(|pending| pending.is_complete()) {
                Some(loaded) => {
                    finish_load(model, loaded);
                    render()
                }
                None => Command::done(),
            }
        }
        Err(e) => {
            model.pending_load = None;
            model.set_error_and_render(e)
        }
    }
}

fn finish_load(model: &mut Model, loaded: PendingLoad) {
    let PendingLoad {
        info: Some(info),
        asic: Some(asic),
        masks: Some(masks),
    } = loaded
    else {
        return;
    };

    model.asic_model = info.asic_model;
    model.frequency_options = asic.frequency_options;
    model.voltage_options = asic.voltage_options;
    model.ticket_mask_diff_options = masks.ticket_mask_diff_options;
    model.version_mask_options = masks.version_mask_options;

    if info.overclock_enabled == 1 {
        model.settings_unlocked = true;
        log::info!("overclock tunables enabled from persisted device settings");
    }

    model.form = Some(SettingsForm::from_info(&info));
    model.refresh_dropdowns();
    model.stop_loading();
}

fn submit_settings(model: &mut Model) -> Command<Effect, Event> {
    let Some(form) = model.form.as_ref() else {
        return model.set_error_and_render("Settings have not been loaded yet".to_string());
    };

    if let Err(e) = form.validate() {
        return model.set_error_and_render(format!("Invalid settings: {e}"));
    }

    let payload = form.to_update();

    device_submit!(
        Settings,
        SettingsEvent,
        model,
        "/api/system",
        SaveResponse,
        "Save settings",
        method: patch,
        body_json: &payload
    )
}
