use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::admin::AdminDashboard;
use crate::dashboards::applicant::ApplicantDashboard;
use crate::dashboards::customer::CustomerDashboard;
use crate::dashboards::home::HomeDashboard;
use crate::dashboards::inspector::InspectorDashboard;
use crate::dashboards::supervisor::SupervisorDashboard;
use crate::domain::applications::ui::details::ApplicationDetails;
use crate::domain::applications::ui::list::ApplicationsList;
use crate::domain::districts::ui::list::DistrictsList;
use crate::domain::inspections::ui::details::InspectionDetails;
use crate::domain::inspections::ui::list::InspectionsList;
use crate::domain::licenses::ui::details::LicenseDetails;
use crate::domain::licenses::ui::list::LicensesList;
use crate::domain::notifications::ui::list::NotificationsList;
use crate::domain::users::ui::list::UsersList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::usecases::report_builder::view::ReportBuilderPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">
                <h1>"Page not found"</h1>
                <p>"The address you followed does not exist in this portal."</p>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=HomeDashboard />
                    <Route path=path!("dashboard/admin") view=AdminDashboard />
                    <Route path=path!("dashboard/applicant") view=ApplicantDashboard />
                    <Route path=path!("dashboard/inspector") view=InspectorDashboard />
                    <Route path=path!("dashboard/supervisor") view=SupervisorDashboard />
                    <Route path=path!("dashboard/customer") view=CustomerDashboard />
                    <Route path=path!("applications") view=ApplicationsList />
                    <Route path=path!("applications/:id") view=ApplicationDetails />
                    <Route path=path!("licenses") view=LicensesList />
                    <Route path=path!("licenses/:id") view=LicenseDetails />
                    <Route path=path!("inspections") view=InspectionsList />
                    <Route path=path!("inspections/:id") view=InspectionDetails />
                    <Route path=path!("users") view=UsersList />
                    <Route path=path!("districts") view=DistrictsList />
                    <Route path=path!("notifications") view=NotificationsList />
                    <Route path=path!("reports") view=ReportBuilderPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
