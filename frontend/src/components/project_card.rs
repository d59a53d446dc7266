use leptos::*;
use portfolio::ProjectRecord;

/// Collapsed gallery card.
#[component]
pub fn ProjectCard(
    record: ProjectRecord,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="project-card" class:expanded=move || expanded.get()>
            <div class="card-image">
                <img src=record.image.clone() alt=record.title.clone() loading="lazy"/>
                <div class="card-overlay"></div>
                <h3 class="card-title">{record.title.clone()}</h3>
            </div>
            <div class="card-body">
                <p class="card-subtitle">{record.subtitle.clone()}</p>
                <p class="card-description">{record.description.clone()}</p>
                <button class="btn btn-primary btn-block" on:click=move |_| on_toggle.call(())>
                    {move || if expanded.get() { "Close ▲" } else { "View ▼" }}
                </button>
            </div>
        </div>
    }
}
