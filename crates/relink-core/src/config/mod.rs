//! Configuration system for relink.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod relink_config;
pub mod repair_config;
pub mod scan_config;

pub use relink_config::{CliOverrides, RelinkConfig};
pub use repair_config::RepairConfig;
pub use scan_config::ScanConfig;
