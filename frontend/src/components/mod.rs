//! UI Components for the portfolio site.
//!
//! # Landing Page
//! - [`NavBar`] - Fixed navigation with scroll-spy and mobile menu
//! - [`HeroSection`] - Name, degree, and calls to action
//! - [`AboutSection`] - Short biography
//! - [`ProjectTiles`] - One tile per category, linking into the gallery
//! - [`SkillsSection`] - Skill level bars
//! - [`ContactSection`] - Contact form
//! - [`Footer`] - Page footer
//!
//! # Projects Page
//! - [`ProjectsPage`] - Feed loading, filtering, and expansion
//! - [`CategoryTabs`] - Filter tab bar
//! - [`ProjectCard`] - Collapsed project card
//! - [`ProjectDetail`] - Full-width expanded project panel

mod nav_bar;
mod hero;
mod about;
mod project_tiles;
mod skills;
mod contact;
mod footer;
mod gallery;
mod category_tabs;
mod project_card;
mod project_detail;

pub use nav_bar::*;
pub use hero::*;
pub use about::*;
pub use project_tiles::*;
pub use skills::*;
pub use contact::*;
pub use footer::*;
pub use gallery::*;
pub use category_tabs::*;
pub use project_card::*;
pub use project_detail::*;
