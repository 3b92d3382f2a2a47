use contracts::enums::role::Role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (role_key, set_role_key) = signal("admin".to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Presence validation only — there is no credential check.
        let name_val = name.get();
        if name_val.trim().is_empty() {
            set_error_message.set(Some("Please enter your name.".to_string()));
            return;
        }
        let Some(role) = Role::from_key(&role_key.get()) else {
            set_error_message.set(Some("Please choose a role.".to_string()));
            return;
        };

        set_error_message.set(None);
        do_login(set_auth_state, name_val.trim(), role);
        navigate("/", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Legal Metrology Portal"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Your display name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            on:change=move |ev| set_role_key.set(event_target_value(&ev))
                            prop:value=move || role_key.get()
                        >
                            {Role::all().into_iter().map(|role| {
                                view! {
                                    <option value={role.as_str()}>{role.label()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign in"
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo portal — pick any role to explore its dashboard."</p>
                </div>
            </div>
        </div>
    }
}
