use contracts::samples::sample_notifications;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Static sample data, so counted once.
    let unread = sample_notifications().iter().filter(|n| !n.read).count();

    let handle_logout = move |_| {
        do_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Legal Metrology Portal"</span>
            </div>
            <div class="top-header__right">
                <A href="/notifications" attr:class="top-header__bell" attr:title="Notifications">
                    {icon("bell")}
                    {(unread > 0).then(|| view! {
                        <span class="top-header__badge">{unread}</span>
                    })}
                </A>
                <span class="top-header__user">
                    {move || {
                        let state = auth_state.get();
                        let name = state.display_name.unwrap_or_else(|| "Guest".to_string());
                        match state.role {
                            Some(role) => format!("{} · {}", name, role.label()),
                            None => name,
                        }
                    }}
                </span>
                <button class="top-header__logout" on:click=handle_logout>
                    {icon("log-out")}
                    " Sign out"
                </button>
            </div>
        </header>
    }
}
