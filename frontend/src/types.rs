//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Load State** - Progress of the projects feed
//! - **Error Types** - Frontend error handling

use portfolio::{FeedError, SubmitError};
use std::fmt;

// =============================================================================
// Load State
// =============================================================================

/// Progress of the one-shot feed load on the projects page.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    /// User-facing message shown instead of the gallery.
    Failed(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Project feed could not be loaded; holds the message to display.
    Feed(String),
    /// Contact form dispatch failed.
    Submit(SubmitError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Feed(msg) => write!(f, "{}", msg),
            AppError::Submit(err) => write!(f, "Contact error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        log::error!("Project feed failed: {}", err);
        AppError::Feed(err.user_message())
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        AppError::Submit(err)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_becomes_display_message() {
        let err: AppError = FeedError::MissingUrl.into();
        assert!(err.to_string().starts_with("CSV URL missing"));
    }

    #[test]
    fn test_submit_error_wrapped() {
        let err: AppError = SubmitError::Status(500).into();
        assert_eq!(err, AppError::Submit(SubmitError::Status(500)));
        assert!(err.to_string().contains("500"));
    }
}
