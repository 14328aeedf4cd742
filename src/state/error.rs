//! State management-specific error types.

use crate::inventory::ValidationError;

/// Errors that can occur during state operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    /// The submitted form did not pass validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No row is selected in the item list
    #[error("No item selected")]
    NoItemSelected,

    /// Confirmation requested while no deletion is pending
    #[error("No deletion pending")]
    NoPendingDeletion,
}
