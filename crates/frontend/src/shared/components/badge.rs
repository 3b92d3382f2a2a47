use leptos::prelude::*;

/// Status chip used in register tables and detail pages. `color` comes
/// from the status enum's `color()` lookup.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, color: &'static str) -> impl IntoView {
    view! {
        <span
            class="status-badge"
            style=format!(
                "display: inline-block; padding: 2px 10px; border-radius: 10px; font-size: 12px; font-weight: 600; color: {color}; border: 1px solid {color};"
            )
        >
            {label}
        </span>
    }
}
