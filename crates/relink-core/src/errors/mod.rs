//! Error handling for relink.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Per-asset failures (unloadable asset, unresolved sub-part type, dangling
//! field, failed save during repair) are findings or log events, never
//! errors: one bad asset must not stop processing of the rest.

pub mod config_error;
pub mod error_code;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::RelinkErrorCode;
pub use scan_error::ScanError;
