//! Scan session errors.

use crate::types::ScanPhase;

use super::error_code::{self, RelinkErrorCode};

/// Errors from driving the scan session.
///
/// Starting a scan while another is mid-flight is an explicit rejection, not
/// a silent no-op: the caller finds out and can retry once the active scan
/// completes or is cancelled.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("a scan is already in progress ({active})")]
    ScanInProgress { active: ScanPhase },
}

impl RelinkErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ScanInProgress { .. } => error_code::SCAN_IN_PROGRESS,
        }
    }
}
