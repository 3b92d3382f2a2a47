use contracts::shared::filter::FilterState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InspectionsListState {
    pub filter: RwSignal<FilterState>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

pub fn create_state() -> InspectionsListState {
    InspectionsListState {
        filter: RwSignal::new(FilterState::default()),
        page: RwSignal::new(1),
        page_size: RwSignal::new(10),
    }
}
