//! The category index shared by the landing page and the gallery.
//!
//! Records carry their category as a plain string (whatever the sheet
//! says), so filtering goes through [`CategoryFilter`], which can also hold
//! an id outside the known set (e.g. from a `?category=` link).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ProjectRecord;

/// Id of the sentinel entry that matches every record.
pub const ALL_ID: &str = "all";

/// Display name of the sentinel entry.
pub const ALL_NAME: &str = "All Projects";

/// Category assigned to rows with no `category` cell.
pub const FALLBACK_CATEGORY: Category = Category::Engineering;

/// Known project categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[serde(rename = "3d-modeling")]
    Modeling3d,
    Electronics,
    Documentation,
    Engineering,
    Website,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Modeling3d,
        Category::Electronics,
        Category::Documentation,
        Category::Engineering,
        Category::Website,
    ];

    /// Id used in the sheet's `category` column and in `?category=` links.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Modeling3d => "3d-modeling",
            Category::Electronics => "electronics",
            Category::Documentation => "documentation",
            Category::Engineering => "engineering",
            Category::Website => "website",
        }
    }

    /// Tab label in the gallery.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Modeling3d => "3D Modeling",
            Category::Electronics => "Electronics",
            Category::Documentation => "Documentation",
            Category::Engineering => "Engineering",
            Category::Website => "Website",
        }
    }

    /// Landing-page tile heading.
    pub fn tile_title(&self) -> &'static str {
        match self {
            Category::Modeling3d => "3D Mechanical Design",
            Category::Electronics => "Circuit Design",
            Category::Documentation => "Engineering Reports",
            Category::Engineering => "Engineering Projects",
            Category::Website => "Websites",
        }
    }

    /// Landing-page tile blurb.
    pub fn tile_description(&self) -> &'static str {
        match self {
            Category::Modeling3d => "Advanced CAD designs and mechanical assemblies",
            Category::Electronics => "PCB layouts and electronic system designs",
            Category::Documentation => "Technical documentation and analysis reports",
            Category::Engineering => "Prototypes, builds, and hands-on fabrication",
            Category::Website => "Modern, responsive websites and web apps",
        }
    }

    /// CSS modifier for the tile and tab accent color.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Category::Modeling3d => "accent-blue",
            Category::Electronics => "accent-purple",
            Category::Documentation => "accent-orange",
            Category::Engineering => "accent-green",
            Category::Website => "accent-indigo",
        }
    }

    /// Look up a known category by id (exact, case-sensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Active gallery filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Matches every record.
    #[default]
    All,
    /// Matches records whose `category` equals this id exactly.
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from an id; `"all"` maps to the sentinel.
    ///
    /// Unknown ids are kept as-is and simply match nothing.
    pub fn from_id(id: &str) -> Self {
        if id == ALL_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_ID,
            CategoryFilter::Only(id) => id,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => record.category == *id,
        }
    }

    /// Records passing the filter, in their original order.
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category.id().to_string())
    }
}

/// One entry of the filter tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
    /// `None` for the "all" tab.
    pub category: Option<Category>,
}

/// Tab bar entries: "all" first, then every category in order.
pub fn filter_tabs() -> Vec<FilterTab> {
    std::iter::once(FilterTab {
        filter: CategoryFilter::All,
        label: ALL_NAME,
        category: None,
    })
    .chain(Category::ALL.into_iter().map(|category| FilterTab {
        filter: category.into(),
        label: category.display_name(),
        category: Some(category),
    }))
    .collect()
}
