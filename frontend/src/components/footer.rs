//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::config::OWNER_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div>{format!("© {} {}", year, OWNER_NAME)}</div>
            <div class="footer-rust">"Built with " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
