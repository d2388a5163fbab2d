//! The scan session state machine and its cursor.

pub mod cursor;
pub mod session;

pub use cursor::ScanCursor;
pub use session::{Advance, ScanSession};
