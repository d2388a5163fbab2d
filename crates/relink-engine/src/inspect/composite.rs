//! Composite classifier: structural and field problems on one loaded
//! composite object.

use relink_core::traits::{CompositeAsset, SubPartSlot};
use relink_core::types::{Problem, ProblemList};

use super::fields::scan_reference_fields;

/// Inspect a loaded composite root.
///
/// Two independent checks over the same depth-first sub-part enumeration:
/// a slot whose defining type failed to resolve is a problem on its own, and
/// every resolvable sub-part gets the reference-field scan. A root that
/// failed to load never reaches this function — the session records the load
/// failure itself.
pub fn classify_composite(root: &dyn CompositeAsset, include_inactive: bool) -> ProblemList {
    let mut problems = ProblemList::new();
    for (slot, sub_part) in root.sub_parts(include_inactive).iter().enumerate() {
        match sub_part {
            SubPartSlot::MissingType => problems.push(Problem::MissingSubPartType { slot }),
            SubPartSlot::Resolved(part) => problems.extend(scan_reference_fields(*part)),
        }
    }
    problems
}
