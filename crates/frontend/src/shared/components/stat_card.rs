use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard stat card: label above, large value, optional subtitle.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Display value, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Accent colour for the icon bubble
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let accent = accent.unwrap_or("#3b82f6");

    view! {
        <div class="stat-card">
            <div
                class="stat-card__icon"
                style=format!("color: {accent}; background: {accent}1f;")
            >
                {icon(icon_name)}
            </div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle.map(|text| view! {
                    <div class="stat-card__subtitle">{text}</div>
                })}
            </div>
        </div>
    }
}
