//! Core reference types.
//!
//! A reference is a named pointer into the commit history. Branches and tags
//! share one shape and differ only in their [`ReferenceKind`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RefError, Result};

/// Content address of a commit, as a hex string.
///
/// The remote authority decides the hash length; only the alphabet is
/// checked here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Parse a hash, rejecting empty or non-hex input.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(RefError::invalid(s, "commit hash must not be empty"));
        }
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(RefError::invalid(
                s,
                format!("commit hash contains non-hex character: {ch:?}"),
            ));
        }
        Ok(Self(s.to_string()))
    }

    /// The full hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 characters).
    pub fn short(&self) -> &str {
        let end = self.0.len().min(8);
        &self.0[..end]
    }
}

impl fmt::Debug for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitHash({})", self.short())
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CommitHash {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CommitHash {
    type Error = RefError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CommitHash> for String {
    fn from(hash: CommitHash) -> Self {
        hash.0
    }
}

/// Which namespace a reference lives in. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceKind {
    /// A mutable pointer expected to advance over time.
    Branch,
    /// A label for a fixed point, though it may be reassigned explicitly.
    Tag,
}

impl ReferenceKind {
    /// Map an `is_branch` flag onto a kind.
    pub fn from_is_branch(is_branch: bool) -> Self {
        if is_branch {
            ReferenceKind::Branch
        } else {
            ReferenceKind::Tag
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Branch => "branch",
            ReferenceKind::Tag => "tag",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named reference as reported by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Reference name, unique within its kind.
    pub name: String,
    /// Branch or tag.
    pub kind: ReferenceKind,
    /// Commit the reference currently points to.
    pub hash: CommitHash,
}

impl Reference {
    pub fn branch(name: impl Into<String>, hash: CommitHash) -> Self {
        Self {
            name: name.into(),
            kind: ReferenceKind::Branch,
            hash,
        }
    }

    pub fn tag(name: impl Into<String>, hash: CommitHash) -> Self {
        Self {
            name: name.into(),
            kind: ReferenceKind::Tag,
            hash,
        }
    }

    /// Returns `true` if this is a branch.
    pub fn is_branch(&self) -> bool {
        self.kind == ReferenceKind::Branch
    }

    /// Returns `true` if this is a tag.
    pub fn is_tag(&self) -> bool {
        self.kind == ReferenceKind::Tag
    }
}
