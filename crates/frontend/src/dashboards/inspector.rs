//! Inspector view: the officer's own schedule plus the district office
//! map.

use contracts::samples::{office_sites, sample_inspections};
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use contracts::shared::geo::MapModel;
use contracts::enums::statuses::InspectionStatus;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::badge::StatusBadge;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_naive_date;
use crate::shared::map::widget::OfficeMap;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn InspectorDashboard() -> impl IntoView {
    // The demo session is not tied to a real officer account; default to
    // the first officer on the schedule and let the select switch.
    let officers = {
        let mut officers: Vec<String> = sample_inspections()
            .iter()
            .map(|i| i.officer.clone())
            .collect();
        officers.sort();
        officers.dedup();
        officers
    };
    let initial = officers.first().cloned().unwrap_or_default();
    let officer = RwSignal::new(Selection::only(initial));

    let schedule = Memo::new(move |_| {
        let filter = FilterState {
            officer: officer.get(),
            ..FilterState::default()
        };
        apply_filter(&sample_inspections(), &filter)
    });

    let open_visits = Memo::new(move |_| {
        schedule
            .get()
            .iter()
            .filter(|i| i.status != InspectionStatus::Completed)
            .count()
    });

    let officer_options = officers
        .iter()
        .map(|o| (o.clone(), o.clone()))
        .collect::<Vec<_>>();

    view! {
        <PageFrame page_id="dashboard--inspector" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Field Schedule"</h1>
                </div>
                <div class="page__header-right">
                    <FilterSelect
                        label="Officer"
                        options=officer_options
                        value=Signal::derive(move || officer.get().key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            officer.set(Selection::parse(&raw));
                        })
                    />
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Assigned visits"
                        icon_name="clipboard"
                        value=Signal::derive(move || schedule.get().len().to_string())
                        accent="#3b82f6"
                    />
                    <StatCard
                        label="Open"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || open_visits.get().to_string())
                        accent="#f59e0b"
                    />
                </div>

                <h2 class="section-title">"Upcoming visits"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 560px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No"</TableHeaderCell>
                                <TableHeaderCell>"Establishment"</TableHeaderCell>
                                <TableHeaderCell>"Mandal"</TableHeaderCell>
                                <TableHeaderCell>"Scheduled"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || schedule.get().into_iter().map(|inspection| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{inspection.id.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{inspection.establishment.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{inspection.mandal.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_naive_date(inspection.scheduled_on)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge
                                                    label=inspection.status.label()
                                                    color=inspection.status.color()
                                                />
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <h2 class="section-title">"District offices"</h2>
                <OfficeMap model=MapModel::new(office_sites()) />
            </div>
        </PageFrame>
    }
}
