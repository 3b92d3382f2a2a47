use contracts::enums::role::Role;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub display_name: Option<String>,
}

impl AuthState {
    fn from_storage() -> Self {
        if !storage::is_authenticated() {
            return Self::default();
        }
        Self {
            authenticated: true,
            role: storage::get_role().as_deref().and_then(Role::from_key),
            display_name: storage::get_user(),
        }
    }
}

/// Auth context provider component. Restores the localStorage flag on
/// mount so a reload keeps the session.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: perform login. Presence validation only — any non-empty name
/// with a known role passes.
pub fn do_login(set_auth_state: WriteSignal<AuthState>, name: &str, role: Role) {
    storage::save_session(role.as_str(), name);
    set_auth_state.set(AuthState {
        authenticated: true,
        role: Some(role),
        display_name: Some(name.to_string()),
    });
}

/// Helper: perform logout.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
