use web_sys::window;

// The gate is the presence of this key; the other two only feed the
// role-based chrome.
const AUTHENTICATED_KEY: &str = "isAuthenticated";
const ROLE_KEY: &str = "auth_role";
const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Mark the session authenticated.
pub fn save_session(role: &str, user: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTHENTICATED_KEY, "true");
        let _ = storage.set_item(ROLE_KEY, role);
        let _ = storage.set_item(USER_KEY, user);
    }
}

/// Presence of the flag is the whole check — no token, no expiry.
pub fn is_authenticated() -> bool {
    get_local_storage()
        .and_then(|storage| storage.get_item(AUTHENTICATED_KEY).ok().flatten())
        .is_some()
}

pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(ROLE_KEY).ok()?
}

pub fn get_user() -> Option<String> {
    get_local_storage()?.get_item(USER_KEY).ok()?
}

/// Clear the session on logout.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTHENTICATED_KEY);
        let _ = storage.remove_item(ROLE_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
