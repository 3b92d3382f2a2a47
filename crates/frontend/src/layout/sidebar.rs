//! Sidebar with collapsible menu groups, filtered by the session role.

use contracts::enums::role::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    // (path, label, icon)
    items: Vec<(&'static str, &'static str, &'static str)>,
    /// `None` — visible to every role.
    roles: Option<Vec<Role>>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "dashboard",
            items: vec![("/", "My Dashboard", "dashboard")],
            roles: None,
        },
        MenuGroup {
            id: "registers",
            label: "Registers",
            icon: "file-text",
            items: vec![
                ("/applications", "Applications", "file-text"),
                ("/licenses", "Licenses", "award"),
                ("/inspections", "Inspections", "clipboard"),
            ],
            roles: None,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                ("/users", "Users", "users"),
                ("/districts", "Districts", "map-pin"),
            ],
            roles: Some(vec![Role::Admin, Role::Supervisor]),
        },
        MenuGroup {
            id: "communications",
            label: "Communications",
            icon: "bell",
            items: vec![
                ("/notifications", "Notifications", "bell"),
                ("/reports", "Reports", "bar-chart"),
            ],
            roles: None,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let (auth_state, _) = use_auth();

    let visible_groups = move || {
        let role = auth_state.get().role;
        get_menu_groups()
            .into_iter()
            .filter(|group| match (&group.roles, role) {
                (None, _) => true,
                (Some(roles), Some(role)) => roles.contains(&role),
                (Some(_), None) => false,
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            {move || visible_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_open = move || ctx.is_group_open(group_id);

                view! {
                    <div class="sidebar__group">
                        <button
                            class="sidebar__group-header"
                            on:click=move |_| ctx.toggle_group(group_id)
                        >
                            {icon(group.icon)}
                            <span class="sidebar__group-label">{group.label}</span>
                            <span class=move || {
                                if is_open() {
                                    "sidebar__chevron sidebar__chevron--open"
                                } else {
                                    "sidebar__chevron"
                                }
                            }>
                                {icon("chevron-down")}
                            </span>
                        </button>
                        <div class=move || {
                            if is_open() {
                                "sidebar__items"
                            } else {
                                "sidebar__items sidebar__items--collapsed"
                            }
                        }>
                            {group.items.into_iter().map(|(path, label, item_icon)| {
                                view! {
                                    <A href=path attr:class="sidebar__link">
                                        {icon(item_icon)}
                                        <span>{label}</span>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
