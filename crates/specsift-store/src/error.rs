//! Store error taxonomy

use thiserror::Error;

/// Errors from resolving and reading specification text
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier would resolve outside the storage root.
    /// Rejected before any filesystem access.
    #[error("invalid subject identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Valid identifier, but no specification text is stored for it
    #[error("no specification text for subject {0:?}")]
    NotFound(String),

    /// Underlying read error, propagated distinctly
    #[error("failed to read specification text")]
    Io(#[from] std::io::Error),
}
