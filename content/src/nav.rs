//! Landing-page navigation state: scroll-spy section, scrolled header,
//! and the mobile menu.
//!
//! The browser side measures section rectangles and feeds them to
//! [`NavState::on_scroll`]; nothing here touches the DOM.

use std::fmt;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Viewport line a section must span to count as active.
pub const ACTIVE_PROBE_Y: f64 = 100.0;

/// Landing-page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Viewport-relative vertical extent of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    fn spans_probe(&self) -> bool {
        self.top <= ACTIVE_PROBE_Y && self.bottom >= ACTIVE_PROBE_Y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub active_section: Section,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Update from a scroll event.
    ///
    /// `bounds` may be in any order and may omit sections not yet in the
    /// DOM; the first section in page order spanning the probe line wins.
    /// If none does, the active section is unchanged.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: &[SectionBounds]) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;

        let active = Section::ALL.into_iter().find(|section| {
            bounds
                .iter()
                .any(|b| b.section == *section && b.spans_probe())
        });
        if let Some(section) = active {
            self.active_section = section;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Jump to a section; closes the mobile menu.
    pub fn navigate_to(&mut self, _section: Section) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(section: Section, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds { section, top, bottom }
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::default();
        nav.on_scroll(50.0, &[]);
        assert!(!nav.scrolled);
        nav.on_scroll(51.0, &[]);
        assert!(nav.scrolled);
    }

    #[test]
    fn test_section_spanning_probe_is_active() {
        let mut nav = NavState::default();
        nav.on_scroll(
            900.0,
            &[
                bounds(Section::Home, -900.0, -100.0),
                bounds(Section::About, -100.0, 400.0),
                bounds(Section::Projects, 400.0, 1200.0),
            ],
        );
        assert_eq!(nav.active_section, Section::About);
    }

    #[test]
    fn test_page_order_breaks_ties() {
        let mut nav = NavState::default();
        nav.on_scroll(
            0.0,
            &[
                bounds(Section::Skills, 100.0, 300.0),
                bounds(Section::Projects, 0.0, 100.0),
            ],
        );
        assert_eq!(nav.active_section, Section::Projects);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut nav = NavState {
            active_section: Section::Skills,
            ..NavState::default()
        };
        nav.on_scroll(2000.0, &[bounds(Section::Contact, 300.0, 900.0)]);
        assert_eq!(nav.active_section, Section::Skills);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.navigate_to(Section::Contact);
        assert!(!nav.menu_open);
    }
}
