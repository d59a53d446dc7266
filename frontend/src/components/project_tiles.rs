//! Landing-page project tiles, one per gallery category.

use leptos::*;
use leptos_router::A;
use portfolio::{Category, Section};

/// Gallery link that pre-selects `category`.
pub fn gallery_href(category: Category) -> String {
    format!("/projects?category={}", category.id())
}

#[component]
pub fn ProjectTiles() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="section">
            <h2 class="section-title">"My " <span class="highlight">"Projects"</span></h2>
            <div class="tile-grid">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <A href=gallery_href(category) class=format!("tile {}", category.accent_class())>
                                <h3 class="tile-title">{category.tile_title()}</h3>
                                <p class="tile-category">{category.display_name()}</p>
                                <p class="tile-description">{category.tile_description()}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
