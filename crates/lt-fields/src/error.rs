//! Field error types.

use crate::catalog::ElementId;

/// Error type for field selection and catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// No element with this id exists in the catalog.
    #[error("Element not found: {0}")]
    NotFound(ElementId),
    /// Field reference not in `Set/Element` form.
    #[error("Invalid field reference '{0}': expected 'Set/Element'")]
    InvalidFieldRef(String),
    /// I/O error while reading a catalog.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed catalog JSON.
    #[error("Invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}
