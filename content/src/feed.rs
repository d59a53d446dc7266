//! Project feed: CSV document to ordered gallery records.
//!
//! [`parse_feed`] works everywhere, including the browser, which fetches
//! the text itself. Native builds can also fetch the feed over HTTP or
//! read it from disk.

use crate::error::FeedResult;
use crate::mapper::{map_rows, RowOrder};
use crate::models::ProjectRecord;
use crate::parser::parse_str;

/// Parse fetched CSV text into records.
pub fn parse_feed(csv_text: &str, order: RowOrder) -> FeedResult<Vec<ProjectRecord>> {
    let parsed = parse_str(csv_text)?;
    log::debug!(
        "Parsed project feed: {} rows, columns [{}]",
        parsed.rows.len(),
        parsed.headers.join(", ")
    );
    Ok(map_rows(&parsed.rows, order))
}

#[cfg(feature = "native")]
pub use native::*;

#[cfg(feature = "native")]
mod native {
    use std::path::Path;

    use crate::config::FeedConfig;
    use crate::error::FeedResult;
    use crate::mapper::{map_rows, RowOrder};
    use crate::models::ProjectRecord;
    use crate::parser::{parse_bytes_auto, parse_csv_file_auto, ParseResult};

    /// Download the raw feed bytes.
    pub async fn fetch_feed(url: &str) -> FeedResult<Vec<u8>> {
        log::debug!("Fetching project feed from {}", url);
        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Fetch and map the feed named by `config`.
    pub async fn load_projects(config: &FeedConfig) -> FeedResult<Vec<ProjectRecord>> {
        let url = config.require_url()?;
        load_from_source(url, config.order).await.map(|(records, _)| records)
    }

    /// Load from an `http(s)://` URL or a local file path.
    ///
    /// Also returns the parse metadata for display.
    pub async fn load_from_source(
        source: &str,
        order: RowOrder,
    ) -> FeedResult<(Vec<ProjectRecord>, ParseResult)> {
        let parsed = if is_url(source) {
            let bytes = fetch_feed(source).await?;
            parse_bytes_auto(&bytes)?
        } else {
            parse_csv_file_auto(Path::new(source))?
        };

        let records = map_rows(&parsed.rows, order);
        if records.is_empty() {
            log::warn!("Project feed at {} has no data rows", source);
        }
        Ok((records, parsed))
    }

    fn is_url(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

}
