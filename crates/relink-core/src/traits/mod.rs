//! Collaborator seams: cancellation, the serialized-field walk, and the
//! asset store. The engine orchestrates; these traits are implemented by the
//! host (editor integration, test fixtures).

pub mod cancellation;
pub mod store;
pub mod walk;

pub use cancellation::{Cancellable, CancellationToken};
pub use store::{AssetStore, EditableComposite};
pub use walk::{CompositeAsset, FieldRef, ReferenceFields, SubPartSlot};
