//! Domain models for the project gallery.
//!
//! - [`RawRow`] - One spreadsheet row keyed by column header
//! - [`ProjectId`] - Sheet-supplied numeric id or a generated UUID
//! - [`ProjectRecord`] - Typed project as rendered by the gallery
//! - [`ContentBlock`] - Image, paragraph, or code snippet in a detail panel

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// One spreadsheet row: column header to cell text.
///
/// A column missing from the map is an absent cell.
pub type RawRow = BTreeMap<String, String>;

/// Trimmed cell text, or `None` when the column is absent or blank.
pub(crate) fn cell<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

// =============================================================================
// Project Identifier
// =============================================================================

/// Identifier of a project within one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    /// Id taken from the sheet's `id` column.
    Numeric(i64),
    /// Fresh id for rows without a usable `id` cell.
    Generated(Uuid),
}

impl ProjectId {
    /// Draw a new id from the process-wide UUID source.
    pub fn generate() -> Self {
        ProjectId::Generated(Uuid::new_v4())
    }

    /// Parse a base-10 integer cell, or generate a fresh id.
    ///
    /// Every failed parse yields a distinct id, so two rows with the
    /// same garbage in `id` never collide.
    pub fn parse_or_generate(cell: Option<&str>) -> Self {
        cell.and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(ProjectId::Numeric)
            .unwrap_or_else(ProjectId::generate)
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ProjectId::Generated(_))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Numeric(n) => write!(f, "{}", n),
            ProjectId::Generated(uuid) => write!(f, "{}", uuid),
        }
    }
}

// =============================================================================
// Content Blocks
// =============================================================================

/// One unit of rich content in an expanded project's detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Image reference (URL).
    Image { src: String },
    /// Paragraph of text.
    Text { text: String },
    /// Code snippet with a syntax-highlighting language tag.
    Code { code: String, language: String },
}

// =============================================================================
// Project Record
// =============================================================================

/// A gallery project built from one spreadsheet row.
///
/// Every field is always populated; absent cells are replaced by
/// defaults in [`crate::mapper`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    /// Category id, trimmed. Compared exactly against filter ids.
    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Card and detail header image URL.
    pub image: String,
    pub full_description: String,
    /// Highlight tiles shown under the full description.
    pub details: Vec<String>,
    pub video_url: Option<String>,
    /// glTF/GLB model for the 3D viewer.
    pub model_url: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_parsed() {
        assert_eq!(ProjectId::parse_or_generate(Some("42")), ProjectId::Numeric(42));
        assert_eq!(ProjectId::parse_or_generate(Some(" 7 ")), ProjectId::Numeric(7));
    }

    #[test]
    fn test_unparseable_ids_are_distinct() {
        let a = ProjectId::parse_or_generate(Some("abc"));
        let b = ProjectId::parse_or_generate(Some("abc"));
        let c = ProjectId::parse_or_generate(None);
        assert!(a.is_generated() && b.is_generated() && c.is_generated());
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_fractional_id_is_not_numeric() {
        assert!(ProjectId::parse_or_generate(Some("7.5")).is_generated());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ProjectRecord {
            id: ProjectId::Numeric(3),
            category: "electronics".into(),
            title: "Sensor".into(),
            subtitle: String::new(),
            description: String::new(),
            image: "img.png".into(),
            full_description: "Long".into(),
            details: vec!["ESP32".into()],
            video_url: None,
            model_url: Some("model.glb".into()),
            blocks: vec![ContentBlock::Code {
                code: "loop()".into(),
                language: "cpp".into(),
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["fullDescription"], "Long");
        assert_eq!(json["videoUrl"], serde_json::Value::Null);
        assert_eq!(json["modelUrl"], "model.glb");
        assert_eq!(json["blocks"][0]["type"], "code");
        assert_eq!(json["blocks"][0]["language"], "cpp");
    }
}
