//! Verification tolerance calculator embedded in the inspection page.
//! All three fields are raw text; an unparseable entry simply shows no
//! result instead of NaN.

use contracts::shared::tolerance::evaluate;
use leptos::prelude::*;

#[component]
pub fn VerificationCalculator() -> impl IntoView {
    let (expected, set_expected) = signal(String::new());
    let (observed, set_observed) = signal(String::new());
    let (tolerance, set_tolerance) = signal("2".to_string());

    let reading = Memo::new(move |_| evaluate(&expected.get(), &observed.get(), &tolerance.get()));

    view! {
        <div class="detail-card verification-calculator">
            <h2>"Verification check"</h2>
            <div class="verification-calculator__fields">
                <label class="filter-field">
                    <span class="filter-field__label">"Expected value"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || expected.get()
                        on:input=move |ev| set_expected.set(event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Observed value"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || observed.get()
                        on:input=move |ev| set_observed.set(event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Tolerance (%)"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || tolerance.get()
                        on:input=move |ev| set_tolerance.set(event_target_value(&ev))
                    />
                </label>
            </div>
            {move || match reading.get() {
                Some(reading) => view! {
                    <div class=if reading.passed {
                        "verification-result verification-result--pass"
                    } else {
                        "verification-result verification-result--fail"
                    }>
                        <span class="verification-result__variance">
                            {format!("Variance {}", reading.variance_label())}
                        </span>
                        <span class="verification-result__status">
                            {reading.status_label()}
                        </span>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="verification-result verification-result--empty">
                        "Enter expected, observed, and tolerance values."
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
