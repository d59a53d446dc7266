//! Fixed landing-page navigation.

use leptos::*;
use portfolio::{NavState, Section, SectionBounds};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config::OWNER_INITIALS;

/// Smooth-scroll the page to a section.
pub fn scroll_to_section(section: Section) {
    let Some(element) = gloo_utils::document().get_element_by_id(section.anchor()) else {
        log::warn!("Section #{} not in the page", section.anchor());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current viewport rectangles of the sections present in the DOM.
fn measure_sections() -> Vec<SectionBounds> {
    let document = gloo_utils::document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let rect = document
                .get_element_by_id(section.anchor())?
                .get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Home",
        Section::About => "About",
        Section::Projects => "Projects",
        Section::Skills => "Skills",
        Section::Contact => "Contact",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = create_rw_signal(NavState::default());

    let handle = window_event_listener(ev::scroll, move |_| {
        let scroll_y = gloo_utils::window().scroll_y().unwrap_or_default();
        let bounds = measure_sections();
        nav.update(|n| n.on_scroll(scroll_y, &bounds));
    });
    on_cleanup(move || handle.remove());

    let go_to = move |section: Section| {
        nav.update(|n| n.navigate_to(section));
        scroll_to_section(section);
    };

    let links = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        class=class
                        class:active=move || nav.with(|n| n.active_section == section)
                        on:click=move |_| go_to(section)
                    >
                        {section_label(section)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav" class:scrolled=move || nav.with(|n| n.scrolled)>
            <div class="nav-inner">
                <div class="logo">{OWNER_INITIALS}</div>

                <div class="nav-links">{links("nav-link")}</div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="mobile-menu">{links("mobile-link")}</div>
            </Show>
        </nav>
    }
}
