use leptos::*;
use portfolio::categories::filter_tabs;
use portfolio::CategoryFilter;

/// Filter tab bar for the gallery.
#[component]
pub fn CategoryTabs(
    #[prop(into)] active: Signal<CategoryFilter>,
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-tabs">
            {filter_tabs()
                .into_iter()
                .map(|tab| {
                    let accent = tab.category.map(|c| c.accent_class()).unwrap_or("accent-cyan");
                    let filter = tab.filter.clone();
                    let is_active = move || active.with(|a| *a == tab.filter);
                    view! {
                        <button
                            class=format!("tab {}", accent)
                            class:active=is_active
                            on:click=move |_| on_select.call(filter.clone())
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
