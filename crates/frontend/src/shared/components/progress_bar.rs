use leptos::prelude::*;

/// Horizontal progress bar; `percent` is clamped to `[0, 100]`.
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let clamped = move || percent.get().clamp(0.0, 100.0);

    view! {
        <div class="progress">
            {label.map(|text| view! {
                <div class="progress__label">
                    <span>{text}</span>
                    <span>{move || format!("{:.0}%", clamped())}</span>
                </div>
            })}
            <div class="progress__track" style="background: #e2e8f0; border-radius: 6px; height: 8px; overflow: hidden;">
                <div
                    class="progress__fill"
                    style=move || format!(
                        "background: #3b82f6; height: 100%; width: {}%; transition: width 200ms;",
                        clamped()
                    )
                ></div>
            </div>
        </div>
    }
}
