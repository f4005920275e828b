//! WebAssembly FFI for the shell.
//!
//! The shell owns the key-value store, the embedded web view and the load
//! timer. It forwards user actions and web view callbacks as bincode
//! `Event`s, performs the returned effects and reads the view model back.
//! Bridge failures surface as JavaScript exceptions instead of aborting the
//! module.

use std::fmt::Display;

use lazy_static::lazy_static;
use log::{error, warn};
use wasm_bindgen::{prelude::wasm_bindgen, JsError};

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        warn!("console logger not installed: {e}");
    }
}

/// Feed a bincode-serialized `Event` into the core; returns the requested effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .map_err(|e| bridge_error("process event", e))?;
    Ok(effects)
}

/// Resolve effect `id` with the shell's bincode-serialized output
/// (`KeyValueOutput` for storage requests)
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.resolve(EffectId(id), response_bytes, &mut effects)
        .map_err(|e| bridge_error("resolve effect", e))?;
    Ok(effects)
}

/// The current bincode-serialized view model
#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsError> {
    let mut view_model = Vec::new();
    CORE.view(&mut view_model)
        .map_err(|e| bridge_error("render view model", e))?;
    Ok(view_model)
}

fn bridge_error(action: &str, e: impl Display) -> JsError {
    error!("failed to {action}: {e}");
    JsError::new(&format!("failed to {action}: {e}"))
}
