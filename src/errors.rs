/*!
 * Error types for the textgrid model.
 *
 * Structural edits report failures through `ModelError`, defined with the
 * thiserror crate. "Not found" conditions on delete-by-key operations are
 * not errors and never surface here.
 */

use thiserror::Error;

/// Errors that can occur when editing a grid, a tier or an annotation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The operation is not defined for this annotation variant
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A positional edit was given an index outside the valid range
    #[error("Index out of range: {index} (length: {len})")]
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },
}

impl ModelError {
    /// Error raised when an independent start/end setter is used on a point
    pub(crate) fn point_setter(setter: &str) -> Self {
        Self::UnsupportedOperation(format!(
            "{} is not available on a point annotation, use set_time instead",
            setter
        ))
    }
}

/// Result alias for model operations
pub type ModelResult<T> = std::result::Result<T, ModelError>;
