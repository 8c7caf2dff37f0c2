use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger {operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        source: reqwest::Error,
    },
    #[error("ledger {operation} response could not be decoded: {source}")]
    Decode {
        operation: &'static str,
        source: reqwest::Error,
    },
    #[error("failed to render ledger document: {0}")]
    Render(#[from] serde_json::Error),
    #[error("invalid panel configuration: {0}")]
    Config(String),
    #[error("ledger {operation} task did not complete: {source}")]
    Task {
        operation: &'static str,
        source: tokio::task::JoinError,
    },
}

impl LedgerError {
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Transport { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Task { operation, .. } => Some(operation),
            Self::Render(_) | Self::Config(_) => None,
        }
    }
}
