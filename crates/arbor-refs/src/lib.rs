//! Reference model for arbor.
//!
//! References are named, mutable pointers into a versioned commit history.
//! The remote authority owns them; this crate describes their shape and the
//! interface used to query and mutate them.
//!
//! # Architecture
//!
//! - **Branches** are pointers expected to advance as commits land.
//! - **Tags** label a fixed commit, though they may be reassigned explicitly.
//! - Both kinds share the [`Reference`] shape and differ only in
//!   [`ReferenceKind`], which also routes create/delete/assign onto the
//!   matching [`ReferenceStore`] method.
//!
//! # Modules
//!
//! - [`error`] — Error taxonomy for reference operations
//! - [`types`] — Core types: [`Reference`], [`ReferenceKind`], [`CommitHash`]
//! - [`traits`] — The [`ReferenceStore`] trait defining the authority's interface
//! - [`names`] — Reference name validation
//! - [`memory`] — In-memory [`InMemoryReferenceStore`] for tests and local sessions

pub mod error;
pub mod memory;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RefError, Result};
pub use memory::InMemoryReferenceStore;
pub use names::validate_reference_name;
pub use traits::ReferenceStore;
pub use types::{CommitHash, Reference, ReferenceKind};
