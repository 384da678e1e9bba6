//! The request record and its classification into a single [`Action`].

use arbor_refs::{validate_reference_name, CommitHash, RefError, ReferenceKind, Result};

/// One logical reference request.
///
/// The flags are mutually exclusive in intent; [`ReferenceRequest::action`]
/// resolves them by precedence (list, delete, create, create-from, assign).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceRequest {
    /// Explicit list request.
    pub list: bool,
    /// Explicit delete request.
    pub delete: bool,
    /// Target of create/delete/assign, or the name filter for a listing.
    pub name: Option<String>,
    /// Commit to create from, or to assign to when `force` is set.
    pub target: Option<String>,
    /// Branch semantics when `true`, tag semantics otherwise.
    pub is_branch: bool,
    /// Render listings as JSON instead of a table.
    pub json: bool,
    /// Move an existing reference instead of creating a new one.
    pub force: bool,
    /// Include the hash column in table output.
    pub verbose: bool,
}

impl ReferenceRequest {
    /// A request with branch semantics and nothing else set, i.e. a branch listing.
    pub fn branches() -> Self {
        Self {
            is_branch: true,
            ..Self::default()
        }
    }

    /// A request with tag semantics and nothing else set.
    pub fn tags() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> ReferenceKind {
        ReferenceKind::from_is_branch(self.is_branch)
    }

    /// Classify the request into exactly one action.
    ///
    /// Names and hashes are validated here, so a malformed request fails
    /// with `InvalidArgument` before the store is contacted.
    pub fn action(&self) -> Result<Action> {
        let kind = self.kind();
        let name = self.name.as_deref();
        let target = self.target.as_deref();

        if self.list || (!self.delete && name.is_none() && target.is_none()) {
            if let Some(filter) = name {
                validate_reference_name(filter)?;
            }
            return Ok(Action::List {
                kind,
                filter: name.map(str::to_string),
            });
        }

        let name = required_name(name)?;

        if self.delete {
            return Ok(Action::Delete { kind, name });
        }

        match target {
            None => Ok(Action::Create { kind, name }),
            Some(target) => {
                let hash = CommitHash::parse(target)?;
                let target = if self.force {
                    Target::AssignTarget(hash)
                } else {
                    Target::StartingPoint(hash)
                };
                Ok(Action::Point { kind, name, target })
            }
        }
    }
}

fn required_name(name: Option<&str>) -> Result<String> {
    let name = name.ok_or_else(|| RefError::InvalidArgument {
        name: String::new(),
        reason: "a reference name is required".into(),
    })?;
    validate_reference_name(name)?;
    Ok(name.to_string())
}

/// Where a create-from or assign should point the reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Create the reference at this commit.
    StartingPoint(CommitHash),
    /// Move the existing reference to this commit, overwriting its target.
    AssignTarget(CommitHash),
}

impl Target {
    pub fn hash(&self) -> &CommitHash {
        match self {
            Target::StartingPoint(hash) | Target::AssignTarget(hash) => hash,
        }
    }
}

/// The single operation a request resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// List references of one kind, optionally narrowed to one exact name.
    List {
        kind: ReferenceKind,
        filter: Option<String>,
    },
    /// Delete a reference, guarded by its freshly fetched hash.
    Delete { kind: ReferenceKind, name: String },
    /// Create a reference at the store's current head.
    Create { kind: ReferenceKind, name: String },
    /// Create at a starting point, or force-assign to a target.
    Point {
        kind: ReferenceKind,
        name: String,
        target: Target,
    },
}
