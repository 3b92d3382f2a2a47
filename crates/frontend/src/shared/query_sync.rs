//! Mirror a page's filter state into the URL query string so a filtered
//! view survives reload and can be shared as a link.

use contracts::shared::filter::FilterState;
use web_sys::window;

/// Restore the filter state encoded in the current URL (defaults for a
/// clean URL or unparseable query).
pub fn read_filter_from_url() -> FilterState {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Replace the current history entry with the given filter state. Only
/// updates the URL when it actually changed.
pub fn write_filter_to_url(state: &FilterState) {
    let Some(window) = window() else {
        return;
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();

    let query_string = serde_qs::to_string(state).unwrap_or_default();
    let new_url = if query_string.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query_string)
    };

    let current_search = location.search().unwrap_or_default();
    let current = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        current_search
    );
    if current == new_url {
        return;
    }

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
