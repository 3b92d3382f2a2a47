//! State-wide overview for the controller's office: headline counts, a
//! per-district summary derived through the shared filter engine, and an
//! approval-rate figure.

use contracts::enums::statuses::{ApplicationStatus, InspectionStatus, LicenseStatus};
use contracts::samples::{
    sample_applications, sample_districts, sample_inspections, sample_licenses,
};
use contracts::shared::filter::{apply_filter, percentage, FilterState, Selection};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn AdminDashboard() -> impl IntoView {
    // A single district selection scopes every figure on the page.
    let district = RwSignal::new(Selection::All);

    let scoped_filter = move || FilterState {
        district: district.get(),
        ..FilterState::default()
    };

    let applications = Memo::new(move |_| apply_filter(&sample_applications(), &scoped_filter()));
    let licenses = Memo::new(move |_| apply_filter(&sample_licenses(), &scoped_filter()));
    let inspections = Memo::new(move |_| apply_filter(&sample_inspections(), &scoped_filter()));

    let pending = Memo::new(move |_| {
        applications
            .get()
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count()
    });

    let approval_rate = Memo::new(move |_| {
        let items = applications.get();
        let approved = items
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .count();
        percentage(approved, items.len())
    });

    let active_licenses = Memo::new(move |_| {
        licenses
            .get()
            .iter()
            .filter(|l| l.status == LicenseStatus::Active)
            .count()
    });

    let overdue_inspections = Memo::new(move |_| {
        inspections
            .get()
            .iter()
            .filter(|i| i.status == InspectionStatus::Overdue)
            .count()
    });

    // Per-district rollup for the summary table (unscoped on purpose).
    let district_rows = move || {
        sample_districts()
            .into_iter()
            .map(|d| {
                let filter = FilterState {
                    district: Selection::only(d.name.clone()),
                    ..FilterState::default()
                };
                let apps = apply_filter(&sample_applications(), &filter);
                let approved = apps
                    .iter()
                    .filter(|a| a.status == ApplicationStatus::Approved)
                    .count();
                let rate = percentage(approved, apps.len());
                let inspections = apply_filter(&sample_inspections(), &filter).len();
                (d.name, apps.len(), inspections, rate)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame page_id="dashboard--admin" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"State Overview"</h1>
                </div>
                <div class="page__header-right">
                    <FilterSelect
                        label="District"
                        options={sample_districts().into_iter().map(|d| (d.name.clone(), d.name)).collect::<Vec<_>>()}
                        value=Signal::derive(move || district.get().key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            district.set(Selection::parse(&raw));
                        })
                    />
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Applications"
                        icon_name="file-text"
                        value=Signal::derive(move || applications.get().len().to_string())
                        accent="#3b82f6"
                    />
                    <StatCard
                        label="Pending"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || pending.get().to_string())
                        accent="#f59e0b"
                    />
                    <StatCard
                        label="Approval rate"
                        icon_name="check"
                        value=Signal::derive(move || format!("{:.0}%", approval_rate.get()))
                        accent="#16a34a"
                    />
                    <StatCard
                        label="Active licenses"
                        icon_name="award"
                        value=Signal::derive(move || active_licenses.get().to_string())
                        accent="#16a34a"
                    />
                    <StatCard
                        label="Overdue inspections"
                        icon_name="clipboard"
                        value=Signal::derive(move || overdue_inspections.get().to_string())
                        accent="#dc2626"
                    />
                </div>

                <h2 class="section-title">"District summary"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 560px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"District"</TableHeaderCell>
                                <TableHeaderCell>"Applications"</TableHeaderCell>
                                <TableHeaderCell>"Inspections"</TableHeaderCell>
                                <TableHeaderCell>"Approval rate"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {district_rows().into_iter().map(|(name, apps, inspections, rate)| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{apps}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{inspections}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format!("{:.0}%", rate)}</TableCellLayout></TableCell>
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
