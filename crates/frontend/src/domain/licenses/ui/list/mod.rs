pub mod state;

use std::cmp::Ordering;

use contracts::domain::license::License;
use contracts::enums::statuses::LicenseStatus;
use contracts::samples::{sample_districts, sample_licenses};
use contracts::shared::filter::{apply_filter, Pager, Selection};
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
use crate::shared::list_utils::{sort_list, SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

impl Sortable for License {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "licensee" => self
                .licensee
                .to_lowercase()
                .cmp(&other.licensee.to_lowercase()),
            "district" => self.district.cmp(&other.district),
            "valid_until" => self.valid_until.cmp(&other.valid_until),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LicensesList() -> impl IntoView {
    let state = create_state();
    let toaster = ToasterInjection::expect_context();

    let items = sample_licenses();
    let (raw_items, _) = signal(items);

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

    let pager = Memo::new(move |_| {
        Pager {
            page: state.page.get(),
            page_size: state.page_size.get(),
        }
        .clamped(sorted.get().len())
    });

    let page_items = Memo::new(move |_| pager.get().slice(&sorted.get()).to_vec());

    let filter_expanded = RwSignal::new(false);

    let handle_export = {
        let toaster = toaster.clone();
        move |_| {
            let items = sorted.get();
            match download_csv(&items, "licenses") {
                Ok(()) => notify(
                    &toaster,
                    "Export started",
                    &format!("{} licenses written to CSV.", items.len()),
                ),
                Err(e) => notify(&toaster, "Export failed", &e),
            }
        }
    };

    view! {
        <PageFrame page_id="licenses--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Licenses"</h1>
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
                        placeholder="Search number, licensee..."
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
                                options={sample_districts().into_iter().map(|d| (d.name.clone(), d.name)).collect::<Vec<_>>()}
                                value=Signal::derive(move || state.filter.get().district.key().to_string())
                                on_change=Callback::new(move |raw: String| {
                                    state.filter.update(|f| f.district = Selection::parse(&raw));
                                })
                            />
                            <FilterSelect
                                label="Status"
                                options={LicenseStatus::all().into_iter()
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
                                <TableHeaderCell>"Licensee"</TableHeaderCell>
                                <TableHeaderCell>"Establishment"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"District"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Issued"</TableHeaderCell>
                                <TableHeaderCell>"Valid until"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page_items.get().into_iter().map(|license| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <A
                                                        href=format!("/licenses/{}", license.id)
                                                        attr:class="table__link"
                                                    >
                                                        {license.id.clone()}
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{license.licensee.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{license.establishment.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{license.category.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{license.district.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge
                                                        label=license.status.label()
                                                        color=license.status.color()
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_naive_date(license.issued_on)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_naive_date(license.valid_until)}</TableCellLayout></TableCell>
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
