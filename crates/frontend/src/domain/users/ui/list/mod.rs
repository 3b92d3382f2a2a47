use contracts::enums::role::Role;
use contracts::samples::{sample_districts, sample_users};
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn UsersList() -> impl IntoView {
    let toaster = ToasterInjection::expect_context();

    let filter = RwSignal::new(FilterState::default());
    let (raw_items, _) = signal(sample_users());

    // The role select drives the status slot of the shared filter.
    let filtered = Memo::new(move |_| apply_filter(&raw_items.get(), &filter.get()));

    let handle_invite = {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                "Not available",
                "Accounts are provisioned by the head office IT cell.",
            )
        }
    };

    view! {
        <PageFrame page_id="users--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
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
                        placeholder="Search name, email..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_invite
                    >
                        {icon("plus")}
                        " Invite user"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel__fields">
                    <FilterSelect
                        label="Role"
                        options={Role::all().into_iter()
                            .map(|r| (r.as_str().to_string(), r.label().to_string()))
                            .collect::<Vec<_>>()}
                        value=Signal::derive(move || filter.get().status.key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            filter.update(|f| f.status = Selection::parse(&raw));
                        })
                    />
                    <FilterSelect
                        label="District"
                        options={sample_districts().into_iter().map(|d| (d.name.clone(), d.name)).collect::<Vec<_>>()}
                        value=Signal::derive(move || filter.get().district.key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            filter.update(|f| f.district = Selection::parse(&raw));
                        })
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 760px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Id"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Rank"</TableHeaderCell>
                                <TableHeaderCell>"District"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>"Last login"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || filtered.get().into_iter().map(|user| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{user.id.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{user.name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{user.role.label()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {user.rank.map(|r| r.label()).unwrap_or("—")}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{user.district.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if user.active { "Yes" } else { "No" }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {user.last_login.map(format_naive_date).unwrap_or_else(|| "—".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
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
