//! Reader limits for inbound `LogoutRequest` messages

use serde::{Deserialize, Serialize};

/// Maximum accepted XML document size (512 KB)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 512 * 1024;

/// Maximum length for the request ID attribute
pub const DEFAULT_MAX_ID_LENGTH: usize = 256;

/// Maximum length for the Issuer element value
pub const DEFAULT_MAX_ISSUER_LENGTH: usize = 1024;

/// Maximum length for the NameID element value
pub const DEFAULT_MAX_NAME_ID_LENGTH: usize = 4096;

/// Maximum length for the SessionIndex element value
pub const DEFAULT_MAX_SESSION_INDEX_LENGTH: usize = 256;

/// Configuration for reading and validating inbound logout requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequestConfig {
    /// Largest raw XML document accepted, in bytes.
    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,

    #[serde(default = "default_max_id_length")]
    pub max_id_length: usize,

    #[serde(default = "default_max_issuer_length")]
    pub max_issuer_length: usize,

    #[serde(default = "default_max_name_id_length")]
    pub max_name_id_length: usize,

    #[serde(default = "default_max_session_index_length")]
    pub max_session_index_length: usize,

    /// Tolerance in seconds added to `NotOnOrAfter` before the expiry check.
    /// Zero rejects any request whose `NotOnOrAfter` is before now.
    #[serde(default)]
    pub clock_skew_secs: u64,
}

fn default_max_message_size() -> usize {
    DEFAULT_MAX_MESSAGE_SIZE
}

fn default_max_id_length() -> usize {
    DEFAULT_MAX_ID_LENGTH
}

fn default_max_issuer_length() -> usize {
    DEFAULT_MAX_ISSUER_LENGTH
}

fn default_max_name_id_length() -> usize {
    DEFAULT_MAX_NAME_ID_LENGTH
}

fn default_max_session_index_length() -> usize {
    DEFAULT_MAX_SESSION_INDEX_LENGTH
}

impl Default for LogoutRequestConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_id_length: DEFAULT_MAX_ID_LENGTH,
            max_issuer_length: DEFAULT_MAX_ISSUER_LENGTH,
            max_name_id_length: DEFAULT_MAX_NAME_ID_LENGTH,
            max_session_index_length: DEFAULT_MAX_SESSION_INDEX_LENGTH,
            clock_skew_secs: 0,
        }
    }
}

impl LogoutRequestConfig {
    /// Create a config with a custom clock skew tolerance.
    #[must_use]
    pub fn with_clock_skew(clock_skew_secs: u64) -> Self {
        Self {
            clock_skew_secs,
            ..Default::default()
        }
    }

    /// Set the maximum accepted document size.
    #[must_use]
    pub fn max_message_size(mut self, bytes: usize) -> Self {
        self.max_message_size = bytes;
        self
    }
}
