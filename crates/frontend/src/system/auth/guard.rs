use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Component that requires authentication.
/// Redirects to the login route when the flag is absent.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().authenticated
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
