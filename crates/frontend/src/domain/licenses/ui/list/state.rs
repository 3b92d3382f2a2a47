use contracts::shared::filter::FilterState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LicensesListState {
    pub filter: RwSignal<FilterState>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

pub fn create_state() -> LicensesListState {
    LicensesListState {
        filter: RwSignal::new(FilterState::default()),
        sort_field: RwSignal::new("id".to_string()),
        sort_ascending: RwSignal::new(true),
        page: RwSignal::new(1),
        page_size: RwSignal::new(10),
    }
}
