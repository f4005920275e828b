mod settings;
mod stream;
mod ui;

use crux_core::Command;

use crate::events::{Event, StreamEvent};
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization mounts the viewer
        Event::Initialize => stream::handle(StreamEvent::Reload, model),

        Event::Settings(settings_event) => settings::handle(settings_event, model),
        Event::Stream(stream_event) => stream::handle(stream_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
