mod device;
mod overclock;
mod settings;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Settings(event) => settings::handle(event, model),
        Event::Overclock(event) => overclock::handle(event, model),
        Event::Device(event) => device::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
