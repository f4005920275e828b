pub mod commands;
pub mod events;
pub mod macros;
pub mod model;
pub mod settings_store;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::key_value::{KeyValueOperation, KeyValueOutput},
    events::{Event, SettingsEvent, StreamEvent, UiEvent},
    model::Model,
    settings_store::StorageError,
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    KeyValue(KeyValueOperation),
}

pub type SettingsCmd = crate::settings_store::SettingsStore<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
