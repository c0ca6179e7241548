//! Library-wide error types.
//!
//! Caller contract violations surface as typed errors; validator failures
//! are ordinary data (`Validation` records) and never travel this channel.

/// Errors reported to the binding layer.
///
/// Every operation in this crate is synchronous and deterministic, so
/// these only arise from structurally invalid inputs, never from runtime
/// conditions.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// An action payload failed shape validation in its creator
    #[error("Invalid payload for {action}: {reason}")]
    InvalidPayload {
        action: &'static str,
        reason: String,
    },

    /// A field projection was requested for the tree root
    #[error("Field path must contain at least one segment")]
    EmptyPath,
}

/// Convenience type alias for Result with FormError
pub type FormResult<T> = Result<T, FormError>;
