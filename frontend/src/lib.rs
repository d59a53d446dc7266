//! Portfolio - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page site: a landing page with contact form, and
//! a project gallery fed by a published spreadsheet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Router                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/"          HomePage                                       │
//! │               ├── NavBar (scroll-spy, mobile menu)           │
//! │               ├── Hero / About / ProjectTiles / Skills       │
//! │               ├── ContactSection (EmailJS)                   │
//! │               └── Footer                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/projects"  ProjectsPage (?category=<id>)                  │
//! │               ├── CategoryTabs                               │
//! │               └── ProjectCard / ProjectDetail grid           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time feed URL and site constants
//! - [`types`] - Load state and errors
//! - [`components`] - UI components
//! - [`services`] - Feed download and contact dispatch

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Types
pub use types::{AppError, AppResult, LoadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Portfolio - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} | Portfolio", config::OWNER_NAME)/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/projects" view=ProjectsPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <NavBar/>
            <HeroSection/>
            <AboutSection/>
            <ProjectTiles/>
            <SkillsSection/>
            <ContactSection/>
            <Footer/>
        </div>
    }
}
