//! Feed configuration.
//!
//! Read from the environment (and `.env`) on native builds; the frontend
//! builds the same struct from values baked in at compile time.

use crate::error::{FeedError, FeedResult};
use crate::mapper::RowOrder;

/// Variable holding the published CSV URL of the projects sheet.
pub const CSV_URL_ENV: &str = "PORTFOLIO_CSV_URL";

/// Variable selecting [`RowOrder`] (`sheet` or `newest-first`).
pub const ROW_ORDER_ENV: &str = "PORTFOLIO_ROW_ORDER";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedConfig {
    /// `None` means the gallery cannot load at all.
    pub csv_url: Option<String>,
    pub order: RowOrder,
}

impl FeedConfig {
    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let order = match get(ROW_ORDER_ENV) {
            Some(raw) => raw.parse().map_err(FeedError::InvalidConfig)?,
            None => RowOrder::default(),
        };

        Ok(FeedConfig {
            csv_url: get(CSV_URL_ENV).map(|url| url.trim().to_string()),
            order,
        })
    }

    /// Load `.env` if present, then read the process environment.
    #[cfg(feature = "native")]
    pub fn from_env() -> FeedResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn require_url(&self) -> FeedResult<&str> {
        self.csv_url.as_deref().ok_or(FeedError::MissingUrl)
    }
}
