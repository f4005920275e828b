use serde::{Deserialize, Serialize};

use crate::types::SettingsRecord;

/// Settings screen events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// Settings screen mounted; fill the form from storage
    Load,
    UpdateDeviceAddress(String),
    UpdateStreamUrl(String),
    UpdateTimeout(String),
    Save,

    // Storage responses (internal events, skipped from serialization)
    #[serde(skip)]
    LoadResponse(Result<SettingsRecord, String>),
    #[serde(skip)]
    SaveResponse(Result<(), String>),
}

/// Stream viewer events
///
/// Browser surface callbacks echo the `session` of the view model they were
/// rendered from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Viewer mounted or the user asked to reload the stream
    Reload,
    ContentLoaded { session: u64 },
    ContentFailed { session: u64, description: String },
    LoadTimedOut { session: u64 },

    #[serde(skip)]
    SettingsResolved {
        session: u64,
        result: Result<SettingsRecord, String>,
    },
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Settings(SettingsEvent),
    Stream(StreamEvent),
    Ui(UiEvent),
}
