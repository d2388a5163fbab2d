//! The serialized-field walk and composite structure seams.
//!
//! The host's serialization facility knows how to enumerate an object's
//! fields; relink only needs the reference-typed ones. Instead of a runtime
//! reflection surface, the seam is a typed visitor: implementations call the
//! visitor once per reference field, including fields of nested structures,
//! in the representation's natural visitation order.

use crate::types::ObjectId;

/// One reference-typed field as seen by the walk.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    /// Serialized field name.
    pub name: &'a str,
    /// The stored identifier the field points at. Zero = deliberately empty.
    pub backing_id: ObjectId,
    /// Whether the identifier currently resolves to a live object.
    pub resolved: bool,
}

impl FieldRef<'_> {
    /// A dangling link: the field once pointed at something (non-zero
    /// backing identifier) and that something no longer resolves. An
    /// unresolved field with a zero identifier is intentional-empty, not a
    /// problem.
    pub fn is_dangling(&self) -> bool {
        !self.resolved && !self.backing_id.is_empty()
    }
}

/// A loaded object whose reference fields can be walked.
pub trait ReferenceFields {
    /// Name of the object's defining type, for diagnostics.
    fn type_name(&self) -> &str;

    /// Visit every reference-typed field reachable from this object,
    /// descending into nested/compound fields.
    fn for_each_reference_field(&self, visit: &mut dyn FnMut(FieldRef<'_>));
}

/// One attached sub-part slot of a composite object.
pub enum SubPartSlot<'a> {
    /// The slot is occupied but its defining type failed to resolve.
    MissingType,
    /// A resolvable sub-part whose fields can be inspected.
    Resolved(&'a dyn ReferenceFields),
}

/// A loaded composite object: a hierarchy of nodes carrying sub-parts.
pub trait CompositeAsset {
    /// Every sub-part slot in the subtree, depth-first. When
    /// `include_inactive` is set, disabled parts are enumerated too.
    fn sub_parts(&self, include_inactive: bool) -> Vec<SubPartSlot<'_>>;
}
