pub mod state;

use contracts::enums::statuses::InspectionStatus;
use contracts::samples::{sample_districts, sample_inspections};
use contracts::shared::filter::{apply_filter, percentage, Pager, Selection};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use self::state::create_state;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::filter_panel::{FilterPanel, FilterSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_naive_date;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn InspectionsList() -> impl IntoView {
    let state = create_state();
    let toaster = ToasterInjection::expect_context();

    let (raw_items, _) = signal(sample_inspections());

    let filtered = Memo::new(move |_| apply_filter(&raw_items.get(), &state.filter.get()));

    let pager = Memo::new(move |_| {
        Pager {
            page: state.page.get(),
            page_size: state.page_size.get(),
        }
        .clamped(filtered.get().len())
    });

    let page_items = Memo::new(move |_| pager.get().slice(&filtered.get()).to_vec());

    // Compliance rate over the completed visits in the filtered set.
    let compliance_rate = Memo::new(move |_| {
        let items = filtered.get();
        let completed: Vec<_> = items.iter().filter(|i| i.compliant.is_some()).collect();
        let compliant = completed
            .iter()
            .filter(|i| i.compliant == Some(true))
            .count();
        percentage(compliant, completed.len())
    });

    let filter_expanded = RwSignal::new(false);

    let officer_options = move || {
        let mut officers: Vec<String> = raw_items.get().iter().map(|i| i.officer.clone()).collect();
        officers.sort();
        officers.dedup();
        officers.into_iter().map(|o| (o.clone(), o)).collect::<Vec<_>>()
    };

    let handle_export = {
        let toaster = toaster.clone();
        move |_| {
            let items = filtered.get();
            match download_csv(&items, "inspections") {
                Ok(()) => notify(
                    &toaster,
                    "Export started",
                    &format!("{} inspections written to CSV.", items.len()),
                ),
                Err(e) => notify(&toaster, "Export failed", &e),
            }
        }
    };

    view! {
        <PageFrame page_id="inspections--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inspections"</h1>
                    {move || (!state.filter.get().is_empty()).then(|| view! {
                        <span class="badge badge--primary">"Filtered"</span>
                    })}
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.filter.get().search)
                        on_change=Callback::new(move |term: String| {
                            state.filter.update(|f| f.search = term);
                        })
                        placeholder="Search number, establishment..."
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_export
                    >
                        {icon("download")}
                        " Export CSV"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="summary-chips">
                    <span class="summary-chip">
                        {move || format!("Scheduled: {}", filtered.get().iter()
                            .filter(|i| i.status == InspectionStatus::Scheduled).count())}
                    </span>
                    <span class="summary-chip">
                        {move || format!("Overdue: {}", filtered.get().iter()
                            .filter(|i| i.status == InspectionStatus::Overdue).count())}
                    </span>
                    <span class="summary-chip summary-chip--accent">
                        {move || format!("Compliance: {:.0}%", compliance_rate.get())}
                    </span>
                </div>

                <FilterPanel
                    is_expanded=filter_expanded
                    active_filters_count=Signal::derive(move || state.filter.get().active_count())
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || pager.get().page)
                            total_pages=Signal::derive(move || pager.get().page_count(filtered.get().len()))
                            total_count=Signal::derive(move || filtered.get().len())
                            page_size=Signal::derive(move || state.page_size.get())
                            on_page_change=Callback::new(move |page| state.page.set(page))
                            on_page_size_change=Callback::new(move |size| {
                                state.page_size.set(size);
                                state.page.set(1);
                            })
                        />
                    }.into_any()
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <FilterSelect
                                label="District"
                                options={sample_districts().into_iter().map(|d| (d.name.clone(), d.name)).collect::<Vec<_>>()}
                                value=Signal::derive(move || state.filter.get().district.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.district = Selection::parse(&raw));
                                })
                            />
                            <FilterSelect
                                label="Officer"
                                options=Signal::derive(officer_options)
                                value=Signal::derive(move || state.filter.get().officer.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.officer = Selection::parse(&raw));
                                })
                            />
                            <FilterSelect
                                label="Status"
                                options={InspectionStatus::all().into_iter()
                                    .map(|s| (s.as_str().to_string(), s.label().to_string()))
                                    .collect::<Vec<_>>()}
                                value=Signal::derive(move || state.filter.get().status.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.status = Selection::parse(&raw));
                                })
                            />
                        </div>
                    }.into_any()
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 860px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No"</TableHeaderCell>
                                <TableHeaderCell>"Establishment"</TableHeaderCell>
                                <TableHeaderCell>"District"</TableHeaderCell>
                                <TableHeaderCell>"Mandal"</TableHeaderCell>
                                <TableHeaderCell>"Officer"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Scheduled"</TableHeaderCell>
                                <TableHeaderCell>"Compliance"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page_items.get().into_iter().map(|inspection| {
                                    let detail_href = format!("/inspections/{}", inspection.id);
                                    let compliance_label = inspection.compliance_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A
                                                        href=detail_href
                                                        attr:class="table__link"
                                                    >
                                                        {inspection.id.clone()}
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{inspection.establishment.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{inspection.district.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{inspection.mandal.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{inspection.officer.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge
                                                        label=inspection.status.label()
                                                        color=inspection.status.color()
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_naive_date(inspection.scheduled_on)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{inspection.compliance_label()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
