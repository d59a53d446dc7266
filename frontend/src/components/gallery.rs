//! Projects page: loads the feed once, then filters and expands locally.
//!
//! The grid is a keyed list of gallery entries. An expanded card is
//! followed by its full-width detail panel, so opening a project never
//! reorders the other cards.

use leptos::*;
use leptos_router::{use_query_map, A};
use portfolio::{Gallery, GalleryEntry, ProjectId, ProjectRecord, ViewState};

use super::{CategoryTabs, ProjectCard, ProjectDetail};
use crate::config::{feed_config, OWNER_INITIALS};
use crate::services::fetch_projects;
use crate::types::{AppError, LoadState};

/// Owned copy of a [`GalleryEntry`] for keyed rendering.
#[derive(Clone, Debug, PartialEq)]
struct EntryView {
    key: String,
    record: ProjectRecord,
    detail: bool,
}

impl From<GalleryEntry<'_>> for EntryView {
    fn from(entry: GalleryEntry<'_>) -> Self {
        EntryView {
            key: entry.key(),
            record: entry.record().clone(),
            detail: matches!(entry, GalleryEntry::Detail(_)),
        }
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    // The arrival hint is read once; later tab clicks own the filter.
    let hint = use_query_map().with_untracked(|query| query.get("category").cloned());
    let gallery = create_rw_signal(Gallery::new(
        Vec::new(),
        ViewState::with_hint(hint.as_deref()),
    ));
    let (load_state, set_load_state) = create_signal(LoadState::Loading);

    spawn_local(async move {
        let result = match feed_config() {
            Ok(config) => fetch_projects(&config).await,
            Err(err) => Err(err),
        };

        match result.map_err(AppError::from) {
            Ok(records) => {
                gallery.update(|g| g.replace_records(records));
                set_load_state.set(LoadState::Ready);
            }
            Err(err) => set_load_state.set(LoadState::Failed(err.to_string())),
        }
    });

    let active = Signal::derive(move || gallery.with(|g| g.view().active.clone()));
    let on_select = Callback::new(move |filter| gallery.update(|g| g.select_category(filter)));
    let toggle = move |id: ProjectId| {
        gallery.update(|g| {
            g.toggle_expand(&id);
        })
    };

    let entries = move || {
        gallery.with(|g| g.entries().into_iter().map(EntryView::from).collect::<Vec<_>>())
    };

    view! {
        <div class="projects-page">
            <header class="projects-header">
                <div class="projects-header-inner">
                    <div class="projects-header-left">
                        <A href="/" class="back-link">"← Back to Home"</A>
                        <h1 class="projects-title">"My Projects"</h1>
                    </div>
                    <div class="logo">{OWNER_INITIALS}</div>
                </div>
                <CategoryTabs active=active on_select=on_select/>
            </header>

            <main class="projects-main">
                {move || match load_state.get() {
                    LoadState::Loading => view! { <p class="status-text">"Loading projects…"</p> }.into_view(),
                    LoadState::Failed(message) => view! { <p class="status-error">{message}</p> }.into_view(),
                    LoadState::Ready => view! {
                        <div class="project-grid">
                            <For
                                each=entries
                                key=|entry| entry.key.clone()
                                children=move |entry| {
                                    let id = entry.record.id.clone();
                                    let on_toggle = Callback::new(move |_| toggle(id.clone()));
                                    if entry.detail {
                                        view! { <ProjectDetail record=entry.record on_close=on_toggle/> }.into_view()
                                    } else {
                                        let card_id = entry.record.id.clone();
                                        let expanded = Signal::derive(move || {
                                            gallery.with(|g| g.view().is_expanded(&card_id))
                                        });
                                        view! {
                                            <ProjectCard record=entry.record expanded=expanded on_toggle=on_toggle/>
                                        }
                                        .into_view()
                                    }
                                }
                            />
                        </div>
                        <Show when=move || gallery.with(|g| g.visible().is_empty())>
                            <div class="empty-state">
                                <p>"No projects found in this category"</p>
                            </div>
                        </Show>
                    }
                    .into_view(),
                }}
            </main>
        </div>
    }
}
