//! Core types, traits, errors, config, and events for relink.
//!
//! relink scans a game-asset repository for broken object links: serialized
//! reference fields whose target no longer resolves, and composite-object
//! sub-parts whose defining type is gone. This crate holds the shared
//! vocabulary (paths, phases, findings, problems), the collaborator seams
//! (asset store, field walk, cancellation), the error enums, the layered
//! configuration, and the event system. The scan/repair engine itself lives
//! in `relink-engine`.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod traits;
pub mod types;
