use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Settings screen state
    pub settings_form: SettingsForm,

    // Stream viewer state
    pub viewer: StreamViewer,

    // UI state (settings screen messages)
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Start a save (sets is_saving=true, clears messages)
    pub fn start_saving(&mut self) {
        self.settings_form.is_saving = true;
        self.error_message = None;
        self.success_message = None;
    }

    /// Stop saving and clear error
    pub fn stop_saving(&mut self) {
        self.settings_form.is_saving = false;
        self.error_message = None;
    }

    /// Set an error message and stop saving
    pub fn set_error(&mut self, error: String) {
        self.settings_form.is_saving = false;
        self.error_message = Some(error);
    }
}
