//! Error types for reference operations.

use thiserror::Error;

/// Errors that can occur during reference operations.
///
/// Store implementations report failures through this type and the
/// dispatcher propagates them unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefError {
    /// The reference name does not resolve.
    #[error("reference not found: {name}")]
    NotFound { name: String },

    /// The reference moved since the caller last read it.
    #[error("reference {name} changed: expected {expected}{}", actual_suffix(.actual))]
    Conflict {
        name: String,
        expected: String,
        actual: Option<String>,
    },

    /// The name or hash is malformed, or the name is already taken.
    #[error("invalid argument {name:?}: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A precondition for rendering or dispatch could not be satisfied.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The remote rejected the caller's credentials.
    #[error("not authorized: {0}")]
    NotAuthorized(String),

    /// The remote refused the operation for this caller.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other failure reported by the remote authority.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

fn actual_suffix(actual: &Option<String>) -> String {
    match actual {
        Some(actual) => format!(", found {actual}"),
        None => String::new(),
    }
}

impl RefError {
    /// Translate a remote status code into the error taxonomy.
    ///
    /// Network-backed [`ReferenceStore`](crate::ReferenceStore)
    /// implementations call this at their transport boundary.
    ///
    /// `message` carries the remote's explanation; for `404` it is taken to
    /// be the name that failed to resolve.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => RefError::InvalidArgument {
                name: String::new(),
                reason: message,
            },
            401 => RefError::NotAuthorized(message),
            403 => RefError::Forbidden(message),
            404 => RefError::NotFound { name: message },
            409 => RefError::Conflict {
                name: message,
                expected: String::new(),
                actual: None,
            },
            _ => RefError::Service { status, message },
        }
    }

    /// Returns `true` for [`RefError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RefError::NotFound { .. })
    }

    /// Returns `true` for [`RefError::Conflict`].
    pub fn is_conflict(&self) -> bool {
        matches!(self, RefError::Conflict { .. })
    }

    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        RefError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RefError {
    fn from(e: serde_json::Error) -> Self {
        RefError::Serialization(e.to_string())
    }
}

/// Convenience type alias for reference operations.
pub type Result<T> = std::result::Result<T, RefError>;
