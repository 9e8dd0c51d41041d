//! Error types for the declaration model.
//!
//! ## Error Hierarchy
//!
//! ```text
//! RegistrationError (returned by declaration constructors)
//! ├── InfoError    - Attribute tree lookups (reserved child names)
//! └── ExportError  - Failures raised by exporter collaborators
//! ```
//!
//! Missing or empty identity attributes (`name`, `include`) are not
//! validated here; they surface from whichever exporter first reads them.

use thiserror::Error;

use crate::DeclKind;

// ============================================================================
// Attribute Tree Errors
// ============================================================================

/// Errors raised while addressing nodes of the attribute tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    /// A reserved name was used as a child name.
    ///
    /// Names starting with `__` hold internal state and are never
    /// auto-created as children.
    #[error("'{name}' is a reserved name and cannot address a child declaration")]
    ReservedName { name: String },
}

// ============================================================================
// Exporter Errors
// ============================================================================

/// Errors raised by an exporter collaborator while it is being constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The exporter refused the declaration.
    #[error("{kind} exporter rejected the declaration: {message}")]
    Rejected { kind: DeclKind, message: String },
}

impl ExportError {
    /// Create a rejection for the given declaration kind.
    pub fn rejected(kind: DeclKind, message: impl Into<String>) -> Self {
        ExportError::Rejected {
            kind,
            message: message.into(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors returned when constructing a declaration.
///
/// A declaration whose construction fails is never appended to the
/// exporter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Info(#[from] InfoError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
