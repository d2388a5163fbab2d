//! Content inspectors: reference-field scan and composite classification.

pub mod composite;
pub mod fields;

pub use composite::classify_composite;
pub use fields::scan_reference_fields;
