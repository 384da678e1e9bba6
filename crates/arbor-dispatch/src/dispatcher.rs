//! The reference operation dispatcher.
//!
//! [`Dispatcher::dispatch`] performs exactly one operation per request and
//! at most one store mutation. Store errors propagate unchanged; nothing is
//! retried and nothing is cached between calls.

use tracing::{debug, info};

use arbor_refs::{RefError, ReferenceKind, ReferenceStore, Result};

use crate::render::{filter_references, to_json, Listing, Table};
use crate::request::{Action, ReferenceRequest, Target};

/// Result of a dispatched request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation succeeded. There is no payload.
    Done,
    /// A listing was produced.
    Listing(Listing),
}

impl Outcome {
    /// The payload as plain text: empty for mutations.
    pub fn into_payload(self) -> String {
        match self {
            Outcome::Done => String::new(),
            Outcome::Listing(listing) => listing.into_payload(),
        }
    }
}

/// Routes requests onto a [`ReferenceStore`].
pub struct Dispatcher<'a, S: ReferenceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ReferenceStore + ?Sized> Dispatcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Classify and perform one request.
    pub fn dispatch(&self, request: &ReferenceRequest) -> Result<Outcome> {
        let action = request.action()?;
        debug!(?action, "dispatching reference request");

        match action {
            Action::List { kind, filter } => self
                .list(kind, filter.as_deref(), request.json, request.verbose)
                .map(Outcome::Listing),
            Action::Delete { kind, name } => {
                self.delete(kind, &name)?;
                Ok(Outcome::Done)
            }
            Action::Create { kind, name } => {
                kind.create(self.store, &name, None)?;
                info!(%kind, reference = %name, "created reference at head");
                Ok(Outcome::Done)
            }
            Action::Point { kind, name, target } => {
                match &target {
                    Target::StartingPoint(hash) => {
                        kind.create(self.store, &name, Some(hash))?;
                        info!(%kind, reference = %name, hash = %hash.short(), "created reference");
                    }
                    Target::AssignTarget(hash) => {
                        kind.assign(self.store, &name, hash)?;
                        info!(%kind, reference = %name, hash = %hash.short(), "assigned reference");
                    }
                }
                Ok(Outcome::Done)
            }
        }
    }

    /// Fetch the reference's current hash, then delete it guarded by that hash.
    fn delete(&self, kind: ReferenceKind, name: &str) -> Result<()> {
        let current = self.store.get_reference(name)?;
        debug!(%kind, reference = name, hash = %current.hash.short(), "fetched reference for delete");
        kind.delete(self.store, name, &current.hash)?;
        info!(%kind, reference = name, "deleted reference");
        Ok(())
    }

    fn list(
        &self,
        kind: ReferenceKind,
        filter: Option<&str>,
        json: bool,
        verbose: bool,
    ) -> Result<Listing> {
        let references = self.store.list_references()?;
        let kept = filter_references(references, kind, filter);
        debug!(%kind, count = kept.len(), "listing references");

        if json {
            return Ok(Listing::Json(to_json(&kept)?));
        }

        if kept.is_empty() {
            return Err(RefError::InvalidState("no references to display".into()));
        }
        let default_branch = self.store.default_branch()?;
        Ok(Listing::Table(Table::new(&kept, &default_branch, verbose)?))
    }
}

/// Dispatch a single request against `store`.
pub fn handle_request<S>(store: &S, request: &ReferenceRequest) -> Result<Outcome>
where
    S: ReferenceStore + ?Sized,
{
    Dispatcher::new(store).dispatch(request)
}
