//! Supervisor view: officer workload rollup across applications and
//! inspections.

use contracts::enums::statuses::{ApplicationStatus, InspectionStatus};
use contracts::samples::{sample_applications, sample_inspections};
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn SupervisorDashboard() -> impl IntoView {
    let applications = sample_applications();
    let inspections = sample_inspections();

    let under_review = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::UnderReview)
        .count();
    let in_progress = inspections
        .iter()
        .filter(|i| i.status == InspectionStatus::InProgress)
        .count();

    // One row per officer, via the shared filter engine's officer slot.
    let officer_rows = {
        let mut officers: Vec<String> = applications.iter().map(|a| a.officer.clone()).collect();
        officers.extend(inspections.iter().map(|i| i.officer.clone()));
        officers.sort();
        officers.dedup();

        officers
            .into_iter()
            .map(|officer| {
                let filter = FilterState {
                    officer: Selection::only(officer.clone()),
                    ..FilterState::default()
                };
                let assigned = apply_filter(&applications, &filter);
                let open = assigned
                    .iter()
                    .filter(|a| a.status != ApplicationStatus::Approved
                        && a.status != ApplicationStatus::Rejected)
                    .count();
                let visits = apply_filter(&inspections, &filter);
                let completed = visits
                    .iter()
                    .filter(|i| i.status == InspectionStatus::Completed)
                    .count();
                (officer, assigned.len(), open, visits.len(), completed)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame page_id="dashboard--supervisor" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Supervision"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Under review"
                        icon_name="file-text"
                        value=Signal::derive(move || under_review.to_string())
                        accent="#3b82f6"
                    />
                    <StatCard
                        label="Inspections in progress"
                        icon_name="clipboard"
                        value=Signal::derive(move || in_progress.to_string())
                        accent="#f59e0b"
                    />
                </div>

                <h2 class="section-title">"Officer workload"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 640px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Officer"</TableHeaderCell>
                                <TableHeaderCell>"Applications"</TableHeaderCell>
                                <TableHeaderCell>"Open"</TableHeaderCell>
                                <TableHeaderCell>"Inspections"</TableHeaderCell>
                                <TableHeaderCell>"Completed"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {officer_rows.into_iter().map(|(officer, assigned, open, visits, completed)| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{officer}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{assigned}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{open}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{visits}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{completed}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
