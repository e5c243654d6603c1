//! Core error taxonomy
//!
//! Only two things can go wrong inside the core: a video id that the catalog
//! does not know, and comment text that is empty. Both are recovered locally by
//! the caller; neither ever aborts the UI.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A video id did not resolve against the catalog
    #[error("video not found: {0}")]
    NotFound(String),

    /// Caller-supplied input was rejected without mutating any state
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// The message without the category prefix, for showing to the user
    pub fn detail(&self) -> &str {
        match self {
            CoreError::NotFound(detail) | CoreError::InvalidInput(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::NotFound("v9".to_string()).to_string(),
            "video not found: v9"
        );
        assert_eq!(
            CoreError::InvalidInput("comment is empty".to_string()).to_string(),
            "invalid input: comment is empty"
        );
    }

    #[test]
    fn test_detail_drops_prefix() {
        let err = CoreError::InvalidInput("Please enter a video title".to_string());
        assert_eq!(err.detail(), "Please enter a video title");
    }
}
