//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"applications--list"`
//!   - `data-page-category`  — `list`, `detail`, `dashboard`, `usecase`, or `system`

use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// Page category, drives the BEM modifier class.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        "detail" => "page page--detail",
        "dashboard" => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=base_class data-page-category=category>
            {children()}
        </div>
    }
}
