//! Error types for the file table core.
//!
//! Every failure here is recoverable. Callers either surface it to the user
//! ([`WidgetError::DuplicateFile`]) or log it and carry on.

use thiserror::Error;

use crate::transfer::TransferState;

/// Errors produced by collections, the transfer coordinator and widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A record equal to an existing one was inserted.
    #[error("Already contains file: {name}")]
    DuplicateFile { name: String },

    /// A row index did not point at an existing record.
    #[error("row index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A coordinator call arrived out of the begin/claim/end order.
    #[error("{operation} not allowed while transfer is {state}")]
    InvalidTransferState {
        operation: &'static str,
        state: TransferState,
    },
}

impl WidgetError {
    /// Whether the error should be shown to the user rather than only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::DuplicateFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
