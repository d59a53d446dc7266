//! Project feed download.

use gloo_net::http::Request;
use portfolio::{parse_feed, FeedConfig, FeedError, ProjectRecord};

/// Fetch the sheet's CSV export and map it to gallery records.
pub async fn fetch_projects(config: &FeedConfig) -> Result<Vec<ProjectRecord>, FeedError> {
    let url = config.require_url()?;

    log::info!("📥 Loading projects from {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FeedError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FeedError::Fetch(e.to_string()))?;

    let records = parse_feed(&text, config.order)?;
    log::info!("✅ Loaded {} projects", records.len());
    Ok(records)
}
