//! Field scanner: find dangling reference fields on one loaded object.

use relink_core::traits::ReferenceFields;
use relink_core::types::{Problem, ProblemList};

/// Walk every reference-typed field of `object` (including nested children)
/// and collect one problem per dangling link.
///
/// A field is dangling iff its reference resolves to no live object AND its
/// backing identifier is non-zero. An unresolved field with a zero backing
/// identifier was deliberately left empty and is never reported. Pure: no
/// side effects, the caller decides what to log.
pub fn scan_reference_fields(object: &dyn ReferenceFields) -> ProblemList {
    let mut problems = ProblemList::new();
    object.for_each_reference_field(&mut |field| {
        if field.is_dangling() {
            problems.push(Problem::DanglingReference {
                owner_type: object.type_name().to_string(),
                field: field.name.to_string(),
            });
        }
    });
    problems
}
