use thiserror::Error;

/// Errors that abort a run before (or after) any scanning happens.
///
/// Per-port network failures are never represented here; a probe folds them
/// into a closed [`PortOutcome`](crate::types::PortOutcome).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid port: {token}")]
    InvalidPort { token: String },

    #[error("start-port ({start}) cannot be greater than end-port ({end})")]
    InvalidRange { start: u16, end: u16 },

    #[error("you must specify either --target or --targets")]
    MissingTarget,

    #[error("failed to render results: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
