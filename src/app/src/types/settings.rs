use serde::{Deserialize, Serialize};

/// Storage key of the doorbell's network address
pub const DEVICE_ADDRESS_KEY: &str = "doorbellIp";
/// Storage key of the stream URL shown in the viewer
pub const STREAM_URL_KEY: &str = "streamUrl";
/// Storage key of the stream load timeout (milliseconds, free-form text)
pub const TIMEOUT_KEY: &str = "timeout";

/// Stream URL offered by the settings form before anything was saved
pub const DEFAULT_STREAM_URL: &str = "http://192.168.178.66:10001/stream.mjpg";

/// The persisted settings tuple.
///
/// All fields are stored as entered; no format or numeric validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub device_address: String,
    pub stream_url: String,
    pub timeout_ms: String,
}

impl SettingsRecord {
    /// Storage key / value pairs in write order
    pub fn into_entries(self) -> [(&'static str, String); 3] {
        [
            (DEVICE_ADDRESS_KEY, self.device_address),
            (STREAM_URL_KEY, self.stream_url),
            (TIMEOUT_KEY, self.timeout_ms),
        ]
    }

    /// The stream URL, if one is configured
    pub fn stream_url(&self) -> Option<&str> {
        Some(self.stream_url.as_str()).filter(|url| !url.is_empty())
    }

    /// The load timeout, if the stored text is a positive number of milliseconds
    pub fn load_timeout_ms(&self) -> Option<u64> {
        parse_timeout_ms(&self.timeout_ms)
    }
}

/// Parse a free-form timeout text. Empty, zero and non-numeric input disable the timeout.
pub fn parse_timeout_ms(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok().filter(|ms| *ms > 0)
}

/// Settings screen form state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    pub device_address: String,
    pub stream_url: String,
    pub timeout_ms: String,
    pub is_saving: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            device_address: String::new(),
            stream_url: DEFAULT_STREAM_URL.to_string(),
            timeout_ms: String::new(),
            is_saving: false,
        }
    }
}

impl SettingsForm {
    /// Fill the form from a loaded record.
    ///
    /// Empty stored values leave the current form value untouched, so a
    /// never-saved stream URL keeps showing the default.
    pub fn apply(&mut self, record: SettingsRecord) {
        if !record.device_address.is_empty() {
            self.device_address = record.device_address;
        }
        if !record.stream_url.is_empty() {
            self.stream_url = record.stream_url;
        }
        if !record.timeout_ms.is_empty() {
            self.timeout_ms = record.timeout_ms;
        }
    }

    pub fn to_record(&self) -> SettingsRecord {
        SettingsRecord {
            device_address: self.device_address.clone(),
            stream_url: self.stream_url.clone(),
            timeout_ms: self.timeout_ms.clone(),
        }
    }
}
