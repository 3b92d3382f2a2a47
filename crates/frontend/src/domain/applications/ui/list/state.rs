use contracts::shared::filter::FilterState;
use leptos::prelude::*;

use crate::shared::query_sync::read_filter_from_url;

#[derive(Clone, Copy)]
pub struct ApplicationsListState {
    pub filter: RwSignal<FilterState>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

pub fn create_state() -> ApplicationsListState {
    ApplicationsListState {
        // A shared link restores its filters from the query string.
        filter: RwSignal::new(read_filter_from_url()),
        sort_field: RwSignal::new("id".to_string()),
        sort_ascending: RwSignal::new(true),
        page: RwSignal::new(1),
        page_size: RwSignal::new(10),
    }
}
