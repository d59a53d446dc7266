//! # Portfolio content - spreadsheet-driven project gallery
//!
//! Turns a published spreadsheet (CSV export) into the records rendered
//! by the portfolio's projects page, and holds the view-state models the
//! site's pages are built on.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Sheet CSV  │────▶│   Parser    │────▶│   Mapper    │────▶│   Gallery   │
//! │ (published) │     │  (raw rows) │     │ (defaults)  │     │ (filter +   │
//! └─────────────┘     └─────────────┘     └─────────────┘     │  expansion) │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{parse_feed, Gallery, RowOrder, ViewState};
//!
//! let csv = "id,category,title\n1,electronics,Sensor\n2,3d-modeling,Gearbox";
//! let records = parse_feed(csv, RowOrder::SheetOrder).unwrap();
//!
//! let gallery = Gallery::new(records, ViewState::with_hint(Some("electronics")));
//! assert_eq!(gallery.visible().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Project records and content blocks
//! - [`parser`] - CSV reading with auto-detection
//! - [`mapper`] - Row to record mapping with defaults
//! - [`categories`] - Shared category index and filters
//! - [`gallery`] - Filter/expansion view-state
//! - [`media`] - Video embeds and content blocks
//! - [`contact`] - Contact form validation and submission state
//! - [`nav`] - Landing-page navigation state
//! - [`config`] - Feed configuration
//! - [`feed`] - Loading the project feed
//!
//! ## Features
//!
//! `native` (default) adds HTTP fetching, encoding detection, and the
//! `portfolio` CLI. The browser build disables it.

// Core modules
pub mod error;
pub mod models;

// Reading
pub mod parser;
pub mod mapper;
pub mod feed;
pub mod config;

// Presentation state
pub mod categories;
pub mod gallery;
pub mod media;
pub mod contact;
pub mod nav;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, FeedError, SubmitError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ContentBlock, ProjectId, ProjectRecord, RawRow};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use config::FeedConfig;
pub use feed::parse_feed;
pub use mapper::{map_row, map_rows, RowOrder};

#[cfg(feature = "native")]
pub use feed::{fetch_feed, load_from_source, load_projects};

// =============================================================================
// Re-exports - View state
// =============================================================================

pub use categories::{Category, CategoryFilter};
pub use contact::{ContactForm, ContactFormState, DispatchConfig, Field, SubmissionStatus};
pub use gallery::{Gallery, GalleryEntry, ViewState};
pub use media::{resolve_video_embed, VideoSource};
pub use nav::{NavState, Section, SectionBounds};
