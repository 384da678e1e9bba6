//! In-memory reference store for testing and ephemeral use.
//!
//! [`InMemoryReferenceStore`] keeps every reference in a `BTreeMap` behind a
//! `RwLock`. It plays the part of the remote authority: names share one
//! namespace across kinds, deletes are guarded by the caller's last-known
//! hash, and assigns overwrite unconditionally. Data is lost when the store
//! is dropped.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{RefError, Result};
use crate::names::validate_reference_name;
use crate::traits::ReferenceStore;
use crate::types::{CommitHash, Reference, ReferenceKind};

/// An in-memory implementation of [`ReferenceStore`].
#[derive(Debug)]
pub struct InMemoryReferenceStore {
    refs: RwLock<BTreeMap<String, Reference>>,
    default_branch: String,
}

impl InMemoryReferenceStore {
    /// Create a store whose default branch `name` points at `hash`.
    pub fn with_default_branch(name: &str, hash: CommitHash) -> Result<Self> {
        validate_reference_name(name)?;
        let mut refs = BTreeMap::new();
        refs.insert(name.to_string(), Reference::branch(name, hash));
        Ok(Self {
            refs: RwLock::new(refs),
            default_branch: name.to_string(),
        })
    }

    /// Seed a reference directly, replacing any reference of the same name
    /// and kind.
    ///
    /// A reference never changes kind, and the default branch stays a branch.
    pub fn insert(&self, reference: Reference) -> Result<()> {
        validate_reference_name(&reference.name)?;
        if reference.name == self.default_branch && reference.kind != ReferenceKind::Branch {
            return Err(RefError::invalid(
                &reference.name,
                "the default branch must be a branch",
            ));
        }

        let mut refs = self.write()?;
        if let Some(existing) = refs.get(&reference.name) {
            if existing.kind != reference.kind {
                return Err(RefError::invalid(
                    &reference.name,
                    format!("already exists as a {}", existing.kind),
                ));
            }
        }
        refs.insert(reference.name.clone(), reference);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Reference>>> {
        self.refs
            .read()
            .map_err(|e| RefError::InvalidState(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Reference>>> {
        self.refs
            .write()
            .map_err(|e| RefError::InvalidState(format!("lock poisoned: {e}")))
    }

    fn create(&self, kind: ReferenceKind, name: &str, from: Option<&CommitHash>) -> Result<()> {
        validate_reference_name(name)?;
        let mut refs = self.write()?;

        if refs.contains_key(name) {
            return Err(RefError::invalid(name, "reference already exists"));
        }

        let hash = match from {
            Some(hash) => hash.clone(),
            None => refs
                .get(&self.default_branch)
                .map(|head| head.hash.clone())
                .ok_or_else(|| RefError::NotFound {
                    name: self.default_branch.clone(),
                })?,
        };

        debug!(%kind, reference = name, hash = %hash.short(), "reference created");
        refs.insert(
            name.to_string(),
            Reference {
                name: name.to_string(),
                kind,
                hash,
            },
        );
        Ok(())
    }

    fn delete(&self, kind: ReferenceKind, name: &str, expected: &CommitHash) -> Result<()> {
        validate_reference_name(name)?;
        if kind == ReferenceKind::Branch && name == self.default_branch {
            return Err(RefError::invalid(name, "cannot delete the default branch"));
        }

        let mut refs = self.write()?;
        let current = refs
            .get(name)
            .filter(|r| r.kind == kind)
            .ok_or_else(|| RefError::NotFound {
                name: name.to_string(),
            })?;

        if &current.hash != expected {
            return Err(RefError::Conflict {
                name: name.to_string(),
                expected: expected.to_string(),
                actual: Some(current.hash.to_string()),
            });
        }

        debug!(%kind, reference = name, "reference deleted");
        refs.remove(name);
        Ok(())
    }

    fn assign(&self, kind: ReferenceKind, name: &str, target: &CommitHash) -> Result<()> {
        validate_reference_name(name)?;
        let mut refs = self.write()?;
        let current = refs
            .get_mut(name)
            .filter(|r| r.kind == kind)
            .ok_or_else(|| RefError::NotFound {
                name: name.to_string(),
            })?;

        debug!(%kind, reference = name, from = %current.hash.short(), to = %target.short(), "reference assigned");
        current.hash = target.clone();
        Ok(())
    }
}

impl ReferenceStore for InMemoryReferenceStore {
    fn list_references(&self) -> Result<Vec<Reference>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get_reference(&self, name: &str) -> Result<Reference> {
        validate_reference_name(name)?;
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| RefError::NotFound {
                name: name.to_string(),
            })
    }

    fn default_branch(&self) -> Result<String> {
        Ok(self.default_branch.clone())
    }

    fn create_branch(&self, name: &str, from: Option<&CommitHash>) -> Result<()> {
        self.create(ReferenceKind::Branch, name, from)
    }

    fn create_tag(&self, name: &str, from: Option<&CommitHash>) -> Result<()> {
        self.create(ReferenceKind::Tag, name, from)
    }

    fn delete_branch(&self, name: &str, expected: &CommitHash) -> Result<()> {
        self.delete(ReferenceKind::Branch, name, expected)
    }

    fn delete_tag(&self, name: &str, expected: &CommitHash) -> Result<()> {
        self.delete(ReferenceKind::Tag, name, expected)
    }

    fn assign_branch(&self, name: &str, target: &CommitHash) -> Result<()> {
        self.assign(ReferenceKind::Branch, name, target)
    }

    fn assign_tag(&self, name: &str, target: &CommitHash) -> Result<()> {
        self.assign(ReferenceKind::Tag, name, target)
    }
}
