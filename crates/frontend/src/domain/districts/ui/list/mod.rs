use contracts::samples::{office_sites, sample_districts, sample_zones};
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use contracts::shared::geo::MapModel;
use leptos::prelude::*;

use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::list_utils::SearchInput;
use crate::shared::map::widget::OfficeMap;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn DistrictsList() -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());
    let (raw_items, _) = signal(sample_districts());

    // The zone select drives the status slot of the shared filter.
    let filtered = Memo::new(move |_| apply_filter(&raw_items.get(), &filter.get()));

    view! {
        <PageFrame page_id="districts--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Districts"</h1>
                    {move || (!filter.get().is_empty()).then(|| view! {
                        <span class="badge badge--primary">"Filtered"</span>
                    })}
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || filter.get().search)
                        on_change=Callback::new(move |term: String| {
                            filter.update(|f| f.search = term);
                        })
                        placeholder="Search district, mandal..."
                    />
                    <FilterSelect
                        label="Zone"
                        options={sample_zones().into_iter().map(|z| (z.name.clone(), z.name)).collect::<Vec<_>>()}
                        value=Signal::derive(move || filter.get().status.key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            filter.update(|f| f.status = Selection::parse(&raw));
                        })
                    />
                </div>
            </div>

            <div class="page__content">
                <div class="districts-layout">
                    <div class="districts-cards">
                        {move || filtered.get().into_iter().map(|district| {
                            view! {
                                <div class="district-card">
                                    <div class="district-card__header">
                                        <h2>{district.name.clone()}</h2>
                                        <span class="district-card__zone">{district.zone.clone()}</span>
                                    </div>
                                    <div class="district-card__mandals">
                                        {district.mandals.iter().map(|mandal| {
                                            view! {
                                                <span class="summary-chip">{mandal.clone()}</span>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    <div class="districts-map">
                        <h2>"District offices"</h2>
                        <OfficeMap model=MapModel::new(office_sites()) />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
