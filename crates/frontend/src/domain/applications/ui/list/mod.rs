pub mod state;

use std::cmp::Ordering;

use contracts::domain::application::Application;
use contracts::enums::statuses::ApplicationStatus;
use contracts::samples::{sample_applications, sample_districts};
use contracts::shared::filter::{apply_filter, percentage, status_counts, Pager, Selection};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use self::state::{create_state, ApplicationsListState};
use crate::domain::applications::api::fetch_applications;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::filter_panel::{FilterDate, FilterPanel, FilterSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::query_sync::write_filter_to_url;
use crate::shared::toast::notify;

impl Sortable for Application {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "applicant" => self
                .applicant
                .to_lowercase()
                .cmp(&other.applicant.to_lowercase()),
            "establishment" => self
                .establishment
                .to_lowercase()
                .cmp(&other.establishment.to_lowercase()),
            "district" => self.district.cmp(&other.district),
            "officer" => self.officer.cmp(&other.officer),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "submitted_on" => self.submitted_on.cmp(&other.submitted_on),
            _ => Ordering::Equal,
        }
    }
}

fn sort_header(state: ApplicationsListState, field: &'static str) -> impl IntoView {
    let toggle = move |e: leptos::ev::MouseEvent| {
        e.stop_propagation();
        if state.sort_field.get() == field {
            state.sort_ascending.update(|a| *a = !*a);
        } else {
            state.sort_field.set(field.to_string());
            state.sort_ascending.set(true);
        }
    };

    view! {
        <span
            class=move || get_sort_class(&state.sort_field.get(), field)
            style="cursor: pointer; margin-left: 4px;"
            on:click=toggle
        >
            {move || get_sort_indicator(field, &state.sort_field.get(), state.sort_ascending.get())}
        </span>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ApplicationsList() -> impl IntoView {
    let state = create_state();
    let toaster = ToasterInjection::expect_context();

    // The embedded register is the page's dataset; a successful API call
    // replaces it, a failed one is logged and silently ignored.
    let (raw_items, set_raw_items) = signal(sample_applications());

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_applications().await {
                Ok(applications) => set_raw_items.set(applications),
                Err(e) => log::warn!("getapplications failed, showing embedded register: {e}"),
            }
        });
    });

    // Keep the URL shareable: every filter change rewrites the query.
    Effect::new(move |_| {
        write_filter_to_url(&state.filter.get());
    });

    let filtered = Memo::new(move |_| apply_filter(&raw_items.get(), &state.filter.get()));

    let sorted = Memo::new(move |_| {
        let mut items = filtered.get();
        sort_list(
            &mut items,
            &state.sort_field.get(),
            state.sort_ascending.get(),
        );
        items
    });

    // The pager clamps itself when the filtered set shrinks.
    let pager = Memo::new(move |_| {
        Pager {
            page: state.page.get(),
            page_size: state.page_size.get(),
        }
        .clamped(sorted.get().len())
    });

    let page_items = Memo::new(move |_| pager.get().slice(&sorted.get()).to_vec());

    let approval_rate = Memo::new(move |_| {
        let items = filtered.get();
        let approved = items
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .count();
        percentage(approved, items.len())
    });

    let filter_expanded = RwSignal::new(false);

    let district_options = || {
        sample_districts()
            .into_iter()
            .map(|d| (d.name.clone(), d.name))
            .collect::<Vec<_>>()
    };

    let mandal_options = move || {
        let district = state.filter.get().district;
        sample_districts()
            .into_iter()
            .filter(|d| district.matches(&d.name))
            .flat_map(|d| d.mandals)
            .map(|m| (m.clone(), m))
            .collect::<Vec<_>>()
    };

    let officer_options = move || {
        let mut officers: Vec<String> = raw_items.get().iter().map(|a| a.officer.clone()).collect();
        officers.sort();
        officers.dedup();
        officers.into_iter().map(|o| (o.clone(), o)).collect::<Vec<_>>()
    };

    let status_options = || {
        ApplicationStatus::all()
            .into_iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    };

    let handle_export = {
        let toaster = toaster.clone();
        move |_| {
            let items = sorted.get();
            match download_csv(&items, "applications") {
                Ok(()) => notify(
                    &toaster,
                    "Export started",
                    &format!("{} applications written to CSV.", items.len()),
                ),
                Err(e) => notify(&toaster, "Export failed", &e),
            }
        }
    };

    // "New Application" only toasts — nothing in the portal mutates data.
    let handle_create_new = {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                "Not available",
                "New applications are filed at the district office counter.",
            );
        }
    };

    view! {
        <PageFrame page_id="applications--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Applications"</h1>
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
                        placeholder="Search number, applicant, establishment..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_create_new
                    >
                        {icon("plus")}
                        " New Application"
                    </Button>
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
                    {move || {
                        status_counts(&filtered.get()).into_iter().map(|(key, count)| {
                            let label = ApplicationStatus::from_key(&key)
                                .map(|s| s.label().to_string())
                                .unwrap_or(key);
                            view! {
                                <span class="summary-chip">{format!("{label}: {count}")}</span>
                            }
                        }).collect_view()
                    }}
                    <span class="summary-chip summary-chip--accent">
                        {move || format!("Approval rate: {:.0}%", approval_rate.get())}
                    </span>
                </div>

                <FilterPanel
                    is_expanded=filter_expanded
                    active_filters_count=Signal::derive(move || state.filter.get().active_count())
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || pager.get().page)
                            total_pages=Signal::derive(move || pager.get().page_count(sorted.get().len()))
                            total_count=Signal::derive(move || sorted.get().len())
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
                                options=district_options()
                                value=Signal::derive(move || state.filter.get().district.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| {
                                        f.district = Selection::parse(&raw);
                                        // A stale mandal would never match the new district.
                                        f.mandal = Selection::All;
                                    });
                                })
                            />
                            <FilterSelect
                                label="Mandal"
                                options=Signal::derive(mandal_options)
                                value=Signal::derive(move || state.filter.get().mandal.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.mandal = Selection::parse(&raw));
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
                                options=status_options()
                                value=Signal::derive(move || state.filter.get().status.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.status = Selection::parse(&raw));
                                })
                            />
                            <FilterDate
                                label="Submitted from"
                                value=Signal::derive(move || state.filter.get().from
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| {
                                        f.from = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                                    });
                                })
                            />
                            <FilterDate
                                label="Submitted to"
                                value=Signal::derive(move || state.filter.get().to
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| {
                                        f.to = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                                    });
                                })
                            />
                        </div>
                    }.into_any()
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 980px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No" {sort_header(state, "id")}</TableHeaderCell>
                                <TableHeaderCell>"Applicant" {sort_header(state, "applicant")}</TableHeaderCell>
                                <TableHeaderCell>"Establishment" {sort_header(state, "establishment")}</TableHeaderCell>
                                <TableHeaderCell>"District" {sort_header(state, "district")}</TableHeaderCell>
                                <TableHeaderCell>"Mandal"</TableHeaderCell>
                                <TableHeaderCell>"Officer" {sort_header(state, "officer")}</TableHeaderCell>
                                <TableHeaderCell>"Status" {sort_header(state, "status")}</TableHeaderCell>
                                <TableHeaderCell>"Submitted" {sort_header(state, "submitted_on")}</TableHeaderCell>
                                <TableHeaderCell>"Fee"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page_items.get().into_iter().map(|app| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A
                                                        href=format!("/applications/{}", app.id)
                                                        attr:class="table__link"
                                                    >
                                                        {app.id.clone()}
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{app.applicant.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{app.establishment.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{app.district.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{app.mandal.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{app.officer.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge
                                                        label=app.status.label()
                                                        color=app.status.color()
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {crate::shared::date_utils::format_naive_date(app.submitted_on)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{app.fee.clone()}</TableCellLayout></TableCell>
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
