use thiserror::Error;

use crate::error::ScoreError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("form error: {0}")]
    Form(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Errors caused by what the user typed, as opposed to a missing resource.
    #[must_use]
    pub fn is_client_input(&self) -> bool {
        matches!(self, Self::Score(_) | Self::Form(_))
    }
}
