//! Gallery view-state: active filter plus at most one expanded project.
//!
//! [`ViewState`] holds the pure transitions. [`Gallery`] pairs it with the
//! loaded records so expansion can only ever point at a loaded project.
//!
//! The visible list interleaves a detail entry right after the expanded
//! card, which lets the page render the detail panel inline in the grid:
//!
//! ```text
//! Card(1)  Card(2, expanded)  Detail(2)  Card(3)
//! ```

use crate::categories::CategoryFilter;
use crate::models::{ProjectId, ProjectRecord};

/// Filter and expansion selected by the visitor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub active: CategoryFilter,
    pub expanded: Option<ProjectId>,
}

impl ViewState {
    /// Initial state, honoring an arrival `?category=` hint.
    pub fn with_hint(hint: Option<&str>) -> Self {
        let mut state = ViewState::default();
        if let Some(hint) = hint {
            state.apply_hint(hint);
        }
        state
    }

    /// Set the filter from an arrival hint. Leaves expansion alone.
    pub fn apply_hint(&mut self, hint: &str) {
        self.active = CategoryFilter::from_id(hint);
    }

    /// Switch filters, collapsing any open detail panel.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.active = filter;
        self.expanded = None;
    }

    /// Collapse `id` if it is open, otherwise make it the one open project.
    pub fn toggle_expand(&mut self, id: &ProjectId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &ProjectId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Visible entries for `records` under this state.
    pub fn entries<'a>(&self, records: &'a [ProjectRecord]) -> Vec<GalleryEntry<'a>> {
        let mut entries = Vec::with_capacity(records.len() + 1);
        for record in records.iter().filter(|r| self.active.matches(r)) {
            let expanded = self.is_expanded(&record.id);
            entries.push(GalleryEntry::Card { record, expanded });
            if expanded {
                entries.push(GalleryEntry::Detail(record));
            }
        }
        entries
    }
}

/// One slot in the rendered gallery grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEntry<'a> {
    Card {
        record: &'a ProjectRecord,
        expanded: bool,
    },
    /// Full-width detail panel for the expanded card just before it.
    Detail(&'a ProjectRecord),
}

impl<'a> GalleryEntry<'a> {
    pub fn record(&self) -> &'a ProjectRecord {
        match self {
            GalleryEntry::Card { record, .. } => record,
            GalleryEntry::Detail(record) => record,
        }
    }

    /// Stable key for keyed list rendering.
    pub fn key(&self) -> String {
        match self {
            GalleryEntry::Card { record, .. } => format!("card-{}", record.id),
            GalleryEntry::Detail(record) => format!("expanded-{}", record.id),
        }
    }
}

/// Loaded records together with the visitor's view state.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    records: Vec<ProjectRecord>,
    view: ViewState,
}

impl Gallery {
    pub fn new(records: Vec<ProjectRecord>, view: ViewState) -> Self {
        let mut gallery = Gallery { records, view };
        gallery.drop_stale_expansion();
        gallery
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Swap in a freshly loaded dataset.
    ///
    /// The filter is kept; expansion is cleared if its project is gone.
    pub fn replace_records(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
        self.drop_stale_expansion();
    }

    pub fn apply_hint(&mut self, hint: &str) {
        self.view.apply_hint(hint);
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.view.select_category(filter);
    }

    /// Toggle expansion of a loaded project.
    ///
    /// Returns `false` (and changes nothing) for an id not in the dataset.
    pub fn toggle_expand(&mut self, id: &ProjectId) -> bool {
        if !self.contains(id) {
            log::warn!("Ignoring expand request for unknown project {}", id);
            return false;
        }
        self.view.toggle_expand(id);
        true
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    /// Records passing the active filter.
    pub fn visible(&self) -> Vec<&ProjectRecord> {
        self.view.active.apply(&self.records)
    }

    pub fn entries(&self) -> Vec<GalleryEntry<'_>> {
        self.view.entries(&self.records)
    }

    pub fn expanded_record(&self) -> Option<&ProjectRecord> {
        let id = self.view.expanded.as_ref()?;
        self.records.iter().find(|r| &r.id == id)
    }

    fn drop_stale_expansion(&mut self) {
        if let Some(id) = &self.view.expanded {
            if !self.contains(id) {
                self.view.expanded = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use crate::mapper::{map_rows, RowOrder};
    use crate::models::RawRow;

    fn records() -> Vec<ProjectRecord> {
        let rows: Vec<RawRow> = [
            ("1", "electronics", "Sensor"),
            ("2", "3d-modeling", "Gearbox"),
            ("3", "electronics", "Amplifier"),
        ]
        .iter()
        .map(|(id, category, title)| {
            [("id", *id), ("category", *category), ("title", *title)]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect();
        map_rows(&rows, RowOrder::SheetOrder)
    }

    fn id(n: i64) -> ProjectId {
        ProjectId::Numeric(n)
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut state = ViewState::default();
        state.toggle_expand(&id(1));
        assert!(state.is_expanded(&id(1)));
        state.toggle_expand(&id(1));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_second_toggle_replaces_first() {
        let mut state = ViewState::default();
        state.toggle_expand(&id(1));
        state.toggle_expand(&id(2));
        assert_eq!(state.expanded, Some(id(2)));
        assert!(!state.is_expanded(&id(1)));
    }

    #[test]
    fn test_select_category_clears_expansion() {
        let mut state = ViewState::default();
        state.toggle_expand(&id(3));
        state.select_category(Category::Electronics.into());
        assert_eq!(state.expanded, None);

        state.toggle_expand(&id(3));
        state.select_category(CategoryFilter::All);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_hint_sets_filter_without_touching_expansion() {
        let mut state = ViewState::default();
        state.toggle_expand(&id(1));
        state.apply_hint("electronics");
        assert_eq!(state.active, CategoryFilter::Only("electronics".into()));
        assert_eq!(state.expanded, Some(id(1)));

        assert_eq!(ViewState::with_hint(None).active, CategoryFilter::All);
        assert_eq!(ViewState::with_hint(Some("all")).active, CategoryFilter::All);
    }

    #[test]
    fn test_detail_interleaved_after_expanded_card() {
        let records = records();
        let mut state = ViewState::default();
        state.toggle_expand(&id(2));

        let keys: Vec<_> = state.entries(&records).iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["card-1", "card-2", "expanded-2", "card-3"]);

        let entries = state.entries(&records);
        assert!(matches!(entries[1], GalleryEntry::Card { expanded: true, .. }));
        assert!(matches!(entries[0], GalleryEntry::Card { expanded: false, .. }));
    }

    #[test]
    fn test_entries_respect_filter() {
        let records = records();
        let mut state = ViewState::default();
        state.select_category(Category::Electronics.into());

        let titles: Vec<_> = state
            .entries(&records)
            .iter()
            .map(|e| e.record().title.clone())
            .collect();
        assert_eq!(titles, vec!["Sensor", "Amplifier"]);
    }

    #[test]
    fn test_unknown_hint_shows_nothing() {
        let gallery = Gallery::new(records(), ViewState::with_hint(Some("robotics")));
        assert!(gallery.entries().is_empty());
        assert!(gallery.visible().is_empty());
    }

    #[test]
    fn test_gallery_rejects_unknown_id() {
        let mut gallery = Gallery::new(records(), ViewState::default());
        assert!(!gallery.toggle_expand(&id(99)));
        assert_eq!(gallery.view().expanded, None);

        assert!(gallery.toggle_expand(&id(3)));
        assert_eq!(gallery.expanded_record().map(|r| r.title.as_str()), Some("Amplifier"));
    }

    #[test]
    fn test_replace_records_drops_missing_expansion() {
        let mut gallery = Gallery::new(records(), ViewState::default());
        gallery.toggle_expand(&id(2));
        gallery.select_category(CategoryFilter::All);
        gallery.toggle_expand(&id(2));

        let kept: Vec<_> = records().into_iter().filter(|r| r.id != id(2)).collect();
        gallery.replace_records(kept);
        assert_eq!(gallery.view().expanded, None);
    }

    #[test]
    fn test_expanded_card_hidden_by_filter_has_no_detail() {
        let mut gallery = Gallery::new(records(), ViewState::with_hint(Some("3d-modeling")));
        gallery.toggle_expand(&id(1));

        let keys: Vec<_> = gallery.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["card-2"]);
    }
}
