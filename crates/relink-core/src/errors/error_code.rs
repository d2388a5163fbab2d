//! Stable error codes for machine-readable reporting.

/// A scan was started (or a repair requested) while another scan is active.
pub const SCAN_IN_PROGRESS: &str = "RELINK_SCAN_IN_PROGRESS";

/// Configuration file could not be read.
pub const CONFIG_IO: &str = "RELINK_CONFIG_IO";

/// Configuration file could not be parsed.
pub const CONFIG_PARSE: &str = "RELINK_CONFIG_PARSE";

/// Configuration value failed validation.
pub const CONFIG_INVALID: &str = "RELINK_CONFIG_INVALID";

/// Maps an error to its stable code.
pub trait RelinkErrorCode {
    fn error_code(&self) -> &'static str;
}
