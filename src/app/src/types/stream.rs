use serde::{Deserialize, Serialize};

use super::SettingsRecord;

pub const MISSING_URL_MESSAGE: &str = "No URL found. Please set the stream URL in the settings.";
pub const STORAGE_ERROR_MESSAGE: &str = "Error loading URL from storage.";
pub const STREAM_ERROR_MESSAGE: &str = "Error loading stream. Please try reloading.";

pub fn load_timeout_message(timeout_ms: u64) -> String {
    format!("Stream did not load within {timeout_ms} ms. Please try reloading.")
}

/// What the viewer shows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ViewerState {
    /// Waiting for the settings store
    #[default]
    Loading,
    /// URL handed to the embedded browser surface
    Ready { url: String },
    Error { message: String },
}

/// Stream viewer state machine.
///
/// Every reload starts a new session. Storage completions and browser surface
/// callbacks carry the session they belong to and are dropped once a newer
/// session has started.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamViewer {
    pub state: ViewerState,
    pub session: u64,
    /// Loading indicator; cleared by the first load or error callback
    pub is_loading: bool,
    /// Set while `Ready` when the stored timeout is a positive number
    pub load_timeout_ms: Option<u64>,
}

impl StreamViewer {
    /// Start a new session and return its token
    pub fn begin_reload(&mut self) -> u64 {
        self.session = self.session.wrapping_add(1);
        self.state = ViewerState::Loading;
        self.is_loading = true;
        self.load_timeout_ms = None;
        self.session
    }

    pub fn is_current(&self, session: u64) -> bool {
        self.session == session
    }

    /// Apply the settings lookup of `session`.
    ///
    /// Returns false for stale sessions and when the viewer already left
    /// `Loading` (a browser surface error only clears on reload).
    pub fn resolve(&mut self, session: u64, result: Result<SettingsRecord, String>) -> bool {
        if !self.is_current(session) || self.state != ViewerState::Loading {
            return false;
        }

        match result {
            Ok(record) => match record.stream_url() {
                Some(url) => {
                    self.state = ViewerState::Ready {
                        url: url.to_string(),
                    };
                    self.load_timeout_ms = record.load_timeout_ms();
                }
                None => self.fail(MISSING_URL_MESSAGE),
            },
            Err(_) => self.fail(STORAGE_ERROR_MESSAGE),
        }
        true
    }

    /// The browser surface finished loading the stream
    pub fn content_loaded(&mut self, session: u64) -> bool {
        if !self.is_current(session) || !matches!(self.state, ViewerState::Ready { .. }) {
            return false;
        }
        self.is_loading = false;
        self.load_timeout_ms = None;
        true
    }

    /// The browser surface could not load the stream
    pub fn content_failed(&mut self, session: u64) -> bool {
        if !self.is_current(session) || matches!(self.state, ViewerState::Error { .. }) {
            return false;
        }
        self.fail(STREAM_ERROR_MESSAGE);
        true
    }

    /// The shell's load timer expired. Ignored once the stream has loaded.
    pub fn load_timed_out(&mut self, session: u64) -> bool {
        if !self.is_current(session) || !self.awaiting_content() {
            return false;
        }
        let Some(timeout_ms) = self.load_timeout_ms else {
            return false;
        };
        self.fail(&load_timeout_message(timeout_ms));
        true
    }

    /// True while the shell should keep a load timer armed.
    ///
    /// Not serialized; shells derive it as `state` is `Ready`, `isLoading`
    /// is set and `loadTimeoutMs` is present.
    pub fn awaiting_content(&self) -> bool {
        self.is_loading
            && self.load_timeout_ms.is_some()
            && matches!(self.state, ViewerState::Ready { .. })
    }

    /// The retry affordance is only offered in the error state.
    ///
    /// Not serialized; shells show the reload button when `state` is `Error`.
    pub fn retry_available(&self) -> bool {
        matches!(self.state, ViewerState::Error { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Ready { url } => Some(url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Error { message } => Some(message),
            _ => None,
        }
    }

    fn fail(&mut self, message: &str) {
        self.state = ViewerState::Error {
            message: message.to_string(),
        };
        self.is_loading = false;
        self.load_timeout_ms = None;
    }
}
