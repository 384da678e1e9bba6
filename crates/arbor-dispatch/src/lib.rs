//! Reference operation dispatcher for arbor.
//!
//! Takes one [`ReferenceRequest`], resolves it to a single [`Action`], and
//! carries it out against a [`ReferenceStore`](arbor_refs::ReferenceStore):
//! list, delete, create, create from a commit, or force-assign.
//!
//! # Modules
//!
//! - [`request`] — The request record and its classification
//! - [`dispatcher`] — [`Dispatcher`] and [`Outcome`]
//! - [`render`] — JSON and table rendering for listings

pub mod dispatcher;
pub mod render;
pub mod request;

#[cfg(test)]
mod testing;

pub use dispatcher::{handle_request, Dispatcher, Outcome};
pub use render::{Listing, Table, TableRow};
pub use request::{Action, ReferenceRequest, Target};
