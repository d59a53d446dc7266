//! Error types for the portfolio content pipeline.
//!
//! - [`CsvError`] - CSV reading errors
//! - [`FeedError`] - Loading the project feed (configuration, transport, parsing)
//! - [`SubmitError`] - Contact form dispatch failures
//!
//! Conversion is automatic via `From` implementations, so `?` works
//! across the reader and feed layers.
//!
//! Form validation failures are not errors in this sense: they are a
//! per-field map, see [`crate::contact::FieldErrors`].

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading a CSV document into raw rows.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed CSV (unbalanced quotes, invalid UTF-8 in a record, ...).
    #[error("Invalid CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Input had no content at all.
    #[error("CSV document is empty")]
    EmptyFile,

    /// First row is missing or contains no column names.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Bytes could not be decoded to text.
    #[error("Failed to decode CSV bytes: {0}")]
    Encoding(String),

    /// Failed to read a local file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CsvError::Parse {
            line,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Feed Errors
// =============================================================================

/// Errors while loading the project feed.
///
/// Every variant blocks the gallery; [`FeedError::user_message`] is the
/// single string shown in its place.
#[derive(Debug, Error)]
pub enum FeedError {
    /// No feed URL configured.
    #[error("CSV URL missing. Set PORTFOLIO_CSV_URL in .env")]
    MissingUrl,

    /// A feed setting has an unusable value.
    #[error("Invalid feed configuration: {0}")]
    InvalidConfig(String),

    /// Request could not be completed.
    #[error("Failed to fetch project feed: {0}")]
    Fetch(String),

    /// Feed host answered with a non-success status.
    #[error("Project feed returned HTTP {0}")]
    Status(u16),

    /// Feed body was not readable CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
}

impl FeedError {
    /// Message displayed in place of the gallery.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::MissingUrl | FeedError::InvalidConfig(_) => self.to_string(),
            FeedError::Csv(_) => "Failed to parse CSV from Google Sheets.".to_string(),
            FeedError::Fetch(_) | FeedError::Status(_) => {
                "Failed to load projects. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FeedError::Status(status.as_u16()),
            None => FeedError::Fetch(err.to_string()),
        }
    }
}

// =============================================================================
// Contact Submission Errors
// =============================================================================

/// Errors from the email dispatch request.
///
/// Both variants leave the form contents in place for a retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// Dispatch endpoint answered with a non-success status.
    #[error("Email service returned HTTP {0}")]
    Status(u16),

    /// Request never completed.
    #[error("Network error: {0}")]
    Network(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
