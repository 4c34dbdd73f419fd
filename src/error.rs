use thiserror::Error;

/// Contract violations raised by the scoring core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing player data: {0}")]
    MissingPlayerData(String),
}

impl ScoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
