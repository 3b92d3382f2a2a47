use contracts::enums::role::Role;
use leptos::prelude::*;

use crate::system::auth::context::use_auth;

use super::admin::AdminDashboard;
use super::applicant::ApplicantDashboard;
use super::customer::CustomerDashboard;
use super::inspector::InspectorDashboard;
use super::supervisor::SupervisorDashboard;

/// `/` dispatches to the dashboard of the signed-in role.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        {move || match auth_state.get().role {
            Some(Role::Admin) | None => view! { <AdminDashboard /> }.into_any(),
            Some(Role::Applicant) => view! { <ApplicantDashboard /> }.into_any(),
            Some(Role::Inspector) => view! { <InspectorDashboard /> }.into_any(),
            Some(Role::Supervisor) => view! { <SupervisorDashboard /> }.into_any(),
            Some(Role::Customer) => view! { <CustomerDashboard /> }.into_any(),
        }}
    }
}
