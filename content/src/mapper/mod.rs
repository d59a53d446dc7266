//! Record mapper: spreadsheet rows to [`ProjectRecord`]s.
//!
//! Mapping never fails. Every absent or blank cell falls back to a
//! default, and an unusable `id` is replaced with a generated one.
//!
//! # Row order
//!
//! The sheet is usually appended to, so the display order is a
//! deliberate choice made through [`RowOrder`]:
//!
//! | Order                     | Display                          |
//! |---------------------------|----------------------------------|
//! | [`RowOrder::SheetOrder`]  | top row first (default)          |
//! | [`RowOrder::NewestFirst`] | last row first                   |

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::categories::FALLBACK_CATEGORY;
use crate::media::collect_blocks;
use crate::models::{cell, ProjectId, ProjectRecord, RawRow};

/// Title for rows without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Card image for rows without one.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/800/600?grayscale";

/// Separator inside the `details` cell. Not a comma, so cells survive CSV
/// export without quoting surprises.
pub const DETAILS_SEPARATOR: char = ';';

/// Display order of mapped rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Keep spreadsheet order.
    #[default]
    SheetOrder,
    /// Reverse, so the most recently added row comes first.
    NewestFirst,
}

impl FromStr for RowOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sheet" | "sheet-order" => Ok(RowOrder::SheetOrder),
            "newest-first" | "newest" | "reverse" => Ok(RowOrder::NewestFirst),
            other => Err(format!(
                "unknown row order '{}', expected 'sheet' or 'newest-first'",
                other
            )),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrder::SheetOrder => f.write_str("sheet"),
            RowOrder::NewestFirst => f.write_str("newest-first"),
        }
    }
}

/// Map one row to a record, applying defaults.
pub fn map_row(row: &RawRow) -> ProjectRecord {
    let text = |column: &str| cell(row, column).unwrap_or_default().to_string();
    let url = |column: &str| cell(row, column).map(str::to_string);

    ProjectRecord {
        id: ProjectId::parse_or_generate(cell(row, "id")),
        category: cell(row, "category")
            .unwrap_or(FALLBACK_CATEGORY.id())
            .to_string(),
        title: cell(row, "title").unwrap_or(DEFAULT_TITLE).to_string(),
        subtitle: text("subtitle"),
        description: text("description"),
        image: cell(row, "image").unwrap_or(PLACEHOLDER_IMAGE).to_string(),
        full_description: text("fullDescription"),
        details: split_details(cell(row, "details").unwrap_or_default()),
        video_url: url("videoUrl"),
        model_url: url("modelUrl"),
        blocks: collect_blocks(row),
    }
}

/// Map a whole dataset.
///
/// Ids are unique in the result: a numeric id already used by an earlier
/// row is replaced with a generated one.
pub fn map_rows(rows: &[RawRow], order: RowOrder) -> Vec<ProjectRecord> {
    let mut seen = HashSet::with_capacity(rows.len());

    let mut records: Vec<ProjectRecord> = rows
        .iter()
        .map(|row| {
            let mut record = map_row(row);
            if !seen.insert(record.id.clone()) {
                log::warn!(
                    "Duplicate project id {} ('{}'), assigning a generated id",
                    record.id,
                    record.title
                );
                record.id = ProjectId::generate();
                seen.insert(record.id.clone());
            }
            record
        })
        .collect();

    if order == RowOrder::NewestFirst {
        records.reverse();
    }

    records
}

/// Split a `details` cell into trimmed, non-empty entries.
pub fn split_details(raw: &str) -> Vec<String> {
    raw.split(DETAILS_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::resolve_video_embed;
    use crate::models::ContentBlock;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sensor_row_scenario() {
        let record = map_row(&row(&[
            ("id", "7"),
            ("category", " electronics "),
            ("title", "Sensor"),
            ("videoUrl", "https://youtu.be/abc123"),
        ]));

        assert_eq!(record.id, ProjectId::Numeric(7));
        assert_eq!(record.category, "electronics");
        assert_eq!(record.title, "Sensor");

        let embed = resolve_video_embed(record.video_url.as_deref().unwrap()).unwrap();
        assert!(embed.contains("abc123"));
    }

    #[test]
    fn test_empty_row_gets_all_defaults() {
        let record = map_row(&RawRow::new());

        assert!(record.id.is_generated());
        assert_eq!(record.category, "engineering");
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.subtitle, "");
        assert_eq!(record.description, "");
        assert_eq!(record.image, PLACEHOLDER_IMAGE);
        assert_eq!(record.full_description, "");
        assert!(record.details.is_empty());
        assert_eq!(record.video_url, None);
        assert_eq!(record.model_url, None);
        assert!(record.blocks.is_empty());
    }

    #[test]
    fn test_blank_cells_treated_as_absent() {
        let record = map_row(&row(&[
            ("category", "   "),
            ("title", ""),
            ("image", " "),
            ("videoUrl", "  "),
        ]));

        assert_eq!(record.category, "engineering");
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.image, PLACEHOLDER_IMAGE);
        assert_eq!(record.video_url, None);
    }

    #[test]
    fn test_details_split_on_semicolon() {
        let record = map_row(&row(&[("details", " Fusion 360; ; 3D printed ;PLA, PETG;")]));
        assert_eq!(record.details, vec!["Fusion 360", "3D printed", "PLA, PETG"]);
    }

    #[test]
    fn test_media_urls_trimmed() {
        let record = map_row(&row(&[
            ("videoUrl", " https://host/v.mp4 "),
            ("modelUrl", "\thttps://host/m.glb\n"),
        ]));
        assert_eq!(record.video_url.as_deref(), Some("https://host/v.mp4"));
        assert_eq!(record.model_url.as_deref(), Some("https://host/m.glb"));
    }

    #[test]
    fn test_blocks_attached() {
        let record = map_row(&row(&[("img1", "a.png"), ("code1", "print(1)"), ("code1Lang", "python")]));
        assert_eq!(
            record.blocks,
            vec![
                ContentBlock::Image { src: "a.png".into() },
                ContentBlock::Code { code: "print(1)".into(), language: "python".into() },
            ]
        );
    }

    #[test]
    fn test_unparseable_ids_distinct_across_dataset() {
        let rows = vec![
            row(&[("id", "n/a"), ("title", "A")]),
            row(&[("id", "n/a"), ("title", "B")]),
            row(&[("title", "C")]),
            row(&[("id", ""), ("title", "D")]),
        ];
        let records = map_rows(&rows, RowOrder::SheetOrder);

        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 4);
        assert!(records.iter().all(|r| r.id.is_generated()));
    }

    #[test]
    fn test_duplicate_numeric_id_reassigned() {
        let rows = vec![
            row(&[("id", "3"), ("title", "First")]),
            row(&[("id", "3"), ("title", "Second")]),
        ];
        let records = map_rows(&rows, RowOrder::SheetOrder);

        assert_eq!(records[0].id, ProjectId::Numeric(3));
        assert!(records[1].id.is_generated());
    }

    #[test]
    fn test_row_order() {
        let rows = vec![row(&[("title", "Old")]), row(&[("title", "New")])];

        let sheet = map_rows(&rows, RowOrder::SheetOrder);
        assert_eq!(sheet[0].title, "Old");

        let newest = map_rows(&rows, RowOrder::NewestFirst);
        assert_eq!(newest[0].title, "New");
        assert_eq!(newest[1].title, "Old");
    }

    #[test]
    fn test_row_order_parsing() {
        assert_eq!("sheet".parse::<RowOrder>(), Ok(RowOrder::SheetOrder));
        assert_eq!("Newest-First".parse::<RowOrder>(), Ok(RowOrder::NewestFirst));
        assert!("random".parse::<RowOrder>().is_err());
        assert_eq!(RowOrder::NewestFirst.to_string(), "newest-first");
    }
}
