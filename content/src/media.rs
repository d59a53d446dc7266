//! Media resolvers for the project detail panel.
//!
//! - [`resolve_video_embed`] turns YouTube page links into embed URLs
//! - [`VideoSource`] decides between an iframe embed and a `<video>` file
//! - [`collect_blocks`] assembles rich content blocks from row columns

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{cell, ContentBlock, RawRow};

/// Language tag for code cells without a `codeNLang` companion.
pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

/// Number of `imgN`/`pN` column pairs read from a row.
pub const IMAGE_PARAGRAPH_PAIRS: usize = 5;

/// Code columns and their language columns, in display order.
pub const CODE_COLUMNS: [(&str, &str); 2] = [("code1", "code1Lang"), ("code2", "code2Lang")];

/// Matches watch pages, embed pages, and youtu.be short links.
static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([^&?/]+)")
        .expect("YouTube pattern is valid")
});

/// Resolve a YouTube URL to its canonical embed URL.
///
/// Returns `None` for anything else; the caller then treats the URL as a
/// direct media file.
///
/// ```
/// use portfolio::media::resolve_video_embed;
///
/// assert_eq!(
///     resolve_video_embed("https://youtu.be/abc123").as_deref(),
///     Some("https://www.youtube.com/embed/abc123"),
/// );
/// assert_eq!(resolve_video_embed("https://cdn.example.com/demo.mp4"), None);
/// ```
pub fn resolve_video_embed(url: &str) -> Option<String> {
    let captures = YOUTUBE_ID.captures(url)?;
    let video_id = captures.get(1)?.as_str();
    Some(format!("https://www.youtube.com/embed/{}", video_id))
}

/// How a project video is played.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// Hosted video, rendered in an iframe.
    Embed(String),
    /// Direct media file, rendered in a `<video>` element.
    File(String),
}

impl VideoSource {
    pub fn classify(url: &str) -> Self {
        match resolve_video_embed(url) {
            Some(embed) => VideoSource::Embed(embed),
            None => VideoSource::File(url.to_string()),
        }
    }
}

/// Assemble content blocks from a row.
///
/// Reads `img1`/`p1` through `img5`/`p5` (image before paragraph at each
/// index), then `code1` and `code2`. Blank cells contribute nothing.
pub fn collect_blocks(row: &RawRow) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for n in 1..=IMAGE_PARAGRAPH_PAIRS {
        if let Some(src) = cell(row, &format!("img{}", n)) {
            blocks.push(ContentBlock::Image { src: src.to_string() });
        }
        if let Some(text) = cell(row, &format!("p{}", n)) {
            blocks.push(ContentBlock::Text { text: text.to_string() });
        }
    }

    for (code_column, lang_column) in CODE_COLUMNS {
        // Leading indentation is significant in code; only check blankness.
        let Some(code) = row.get(code_column).filter(|c| !c.trim().is_empty()) else {
            continue;
        };
        let language = cell(row, lang_column).unwrap_or(DEFAULT_CODE_LANGUAGE);
        blocks.push(ContentBlock::Code {
            code: code.trim_end().to_string(),
            language: language.to_string(),
        });
    }

    blocks
}
