use leptos::prelude::*;

use crate::shared::icons::icon;

/// Collapsible filter panel with the pagination controls in its header.
/// The badge shows how many criteria are active; with every filter at
/// its sentinel no badge is rendered.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls slot
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter form fields slot
    #[prop(into)]
    filter_content: ViewFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
        </div>
    }
}

/// One labelled select box inside the filter panel. The `"all"` sentinel
/// option is always first. Options are a signal so dependent selects
/// (mandals under a district) stay current.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// (value, label) pairs after the sentinel
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Currently selected raw value ("all" for the sentinel)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="filter-field__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="all">"All"</option>
                {move || options.get().into_iter().map(|(option_value, option_label)| {
                    let selected_value = option_value.clone();
                    view! {
                        <option value={option_value} selected=move || value.get() == selected_value>
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// One labelled date input inside the filter panel.
#[component]
pub fn FilterDate(
    #[prop(into)] label: String,
    /// Current value in yyyy-mm-dd format, empty when unset
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <input
                type="date"
                class="filter-field__date"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
