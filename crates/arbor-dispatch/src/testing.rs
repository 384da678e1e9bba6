//! A [`ReferenceStore`] double that records every call it receives.

use std::sync::Mutex;

use arbor_refs::{CommitHash, InMemoryReferenceStore, Reference, ReferenceStore, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    DefaultBranch,
    CreateBranch(String, Option<CommitHash>),
    CreateTag(String, Option<CommitHash>),
    DeleteBranch(String, CommitHash),
    DeleteTag(String, CommitHash),
    AssignBranch(String, CommitHash),
    AssignTag(String, CommitHash),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::List | Call::Get(_) | Call::DefaultBranch)
    }
}

/// Wraps an [`InMemoryReferenceStore`] and logs calls in order.
pub struct RecordingStore {
    inner: InMemoryReferenceStore,
    calls: Mutex<Vec<Call>>,
    // Simulates another writer moving a reference right after it is read.
    move_after_get: Mutex<Option<(String, CommitHash)>>,
}

impl RecordingStore {
    /// Build a store holding `references`, the first of which named
    /// `default_branch` becomes the default.
    pub fn new(default_branch: &str, references: Vec<Reference>) -> Self {
        let head = references
            .iter()
            .find(|r| r.name == default_branch)
            .map(|r| r.hash.clone())
            .unwrap_or_else(|| CommitHash::parse("0000").unwrap());
        let inner = InMemoryReferenceStore::with_default_branch(default_branch, head).unwrap();
        for reference in references {
            inner.insert(reference).unwrap();
        }
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
            move_after_get: Mutex::new(None),
        }
    }

    /// Add a reference without recording a call.
    pub fn seed(&self, reference: Reference) {
        self.inner.insert(reference).unwrap();
    }

    /// After the next `get_reference(name)`, silently move `name` to `hash`.
    pub fn move_after_get(&self, name: &str, hash: CommitHash) {
        *self.move_after_get.lock().unwrap() = Some((name.to_string(), hash));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ReferenceStore for RecordingStore {
    fn list_references(&self) -> Result<Vec<Reference>> {
        self.record(Call::List);
        self.inner.list_references()
    }

    fn get_reference(&self, name: &str) -> Result<Reference> {
        self.record(Call::Get(name.to_string()));
        let found = self.inner.get_reference(name)?;
        let pending = self.move_after_get.lock().unwrap().take();
        if let Some((target, hash)) = pending {
            if target == name {
                self.inner.insert(Reference { hash, ..found.clone() })?;
            }
        }
        Ok(found)
    }

    fn default_branch(&self) -> Result<String> {
        self.record(Call::DefaultBranch);
        self.inner.default_branch()
    }

    fn create_branch(&self, name: &str, from: Option<&CommitHash>) -> Result<()> {
        self.record(Call::CreateBranch(name.to_string(), from.cloned()));
        self.inner.create_branch(name, from)
    }

    fn create_tag(&self, name: &str, from: Option<&CommitHash>) -> Result<()> {
        self.record(Call::CreateTag(name.to_string(), from.cloned()));
        self.inner.create_tag(name, from)
    }

    fn delete_branch(&self, name: &str, expected: &CommitHash) -> Result<()> {
        self.record(Call::DeleteBranch(name.to_string(), expected.clone()));
        self.inner.delete_branch(name, expected)
    }

    fn delete_tag(&self, name: &str, expected: &CommitHash) -> Result<()> {
        self.record(Call::DeleteTag(name.to_string(), expected.clone()));
        self.inner.delete_tag(name, expected)
    }

    fn assign_branch(&self, name: &str, target: &CommitHash) -> Result<()> {
        self.record(Call::AssignBranch(name.to_string(), target.clone()));
        self.inner.assign_branch(name, target)
    }

    fn assign_tag(&self, name: &str, target: &CommitHash) -> Result<()> {
        self.record(Call::AssignTag(name.to_string(), target.clone()));
        self.inner.assign_tag(name, target)
    }
}
