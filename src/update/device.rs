use crux_core::{render::render, Command};

use crate::device_submit;
use crate::events::{DeviceEvent, Event};
use crate::model::Model;
use crate::Effect;

/// Handle device actions outside the settings form
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::Restart => device_submit!(
            Device,
            DeviceEvent,
            model,
            "/api/system/restart",
            RestartResponse,
            "Restart device",
            method: post
        ),

        DeviceEvent::RestartResponse(result) => {
            model.stop_loading();
            match result {
                Ok(()) => {
                    model.success_message = Some(if model.device_uri.is_empty() {
                        "Device restarted".to_string()
                    } else {
                        format!("Device at {} restarted", model.device_uri)
                    });
                }
                Err(e) => {
                    let message = if model.device_uri.is_empty() {
                        format!("Failed to restart device. {e}")
                    } else {
                        format!("Failed to restart device at {}. {e}", model.device_uri)
                    };
                    model.set_error(message);
                }
            }
            render()
        }
    }
}
