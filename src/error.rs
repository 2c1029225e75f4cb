use thiserror::Error;

/// Errors that can occur during undo operations
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Undo was requested with no recorded snapshots
    #[error("nothing to undo")]
    NothingToUndo,

    /// The snapshot's page no longer exists in the document
    #[error("page {page} no longer exists")]
    PageGone { page: usize },
}

/// Errors that can occur during document serialization
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}
