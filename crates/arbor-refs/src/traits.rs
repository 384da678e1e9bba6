//! The [`ReferenceStore`] trait: the remote authority for references.
//!
//! Every call is a fresh query against the authority. Nothing here caches
//! reference state.

use crate::error::Result;
use crate::types::{CommitHash, Reference, ReferenceKind};

/// Client interface to the store that owns branch and tag state.
///
/// Implementations must be thread-safe (`Send + Sync`). Mutations are
/// all-or-nothing: a failed call leaves the authority unchanged.
pub trait ReferenceStore: Send + Sync {
    /// List every reference, of both kinds.
    fn list_references(&self) -> Result<Vec<Reference>>;

    /// Fetch one reference by name.
    ///
    /// Fails with `NotFound` if the name does not resolve.
    fn get_reference(&self, name: &str) -> Result<Reference>;

    /// Name of the store's default branch.
    fn default_branch(&self) -> Result<String>;

    /// Create a branch at `from`, or at the store's current head when `None`.
    fn create_branch(&self, name: &str, from: Option<&CommitHash>) -> Result<()>;

    /// Create a tag at `from`, or at the store's current head when `None`.
    fn create_tag(&self, name: &str, from: Option<&CommitHash>) -> Result<()>;

    /// Delete a branch if it still points at `expected`.
    ///
    /// Fails with `Conflict` when the branch has moved.
    fn delete_branch(&self, name: &str, expected: &CommitHash) -> Result<()>;

    /// Delete a tag if it still points at `expected`.
    fn delete_tag(&self, name: &str, expected: &CommitHash) -> Result<()>;

    /// Point an existing branch at `target`, unconditionally.
    fn assign_branch(&self, name: &str, target: &CommitHash) -> Result<()>;

    /// Point an existing tag at `target`, unconditionally.
    fn assign_tag(&self, name: &str, target: &CommitHash) -> Result<()>;
}

impl ReferenceKind {
    /// Create a reference of this kind.
    pub fn create<S>(self, store: &S, name: &str, from: Option<&CommitHash>) -> Result<()>
    where
        S: ReferenceStore + ?Sized,
    {
        match self {
            ReferenceKind::Branch => store.create_branch(name, from),
            ReferenceKind::Tag => store.create_tag(name, from),
        }
    }

    /// Delete a reference of this kind, guarded by its last-known hash.
    pub fn delete<S>(self, store: &S, name: &str, expected: &CommitHash) -> Result<()>
    where
        S: ReferenceStore + ?Sized,
    {
        match self {
            ReferenceKind::Branch => store.delete_branch(name, expected),
            ReferenceKind::Tag => store.delete_tag(name, expected),
        }
    }

    /// Move a reference of this kind to `target`.
    pub fn assign<S>(self, store: &S, name: &str, target: &CommitHash) -> Result<()>
    where
        S: ReferenceStore + ?Sized,
    {
        match self {
            ReferenceKind::Branch => store.assign_branch(name, target),
            ReferenceKind::Tag => store.assign_tag(name, target),
        }
    }
}
