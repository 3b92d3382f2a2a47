use contracts::samples::sample_applications;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::components::badge::StatusBadge;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::date_utils::{format_naive_date, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn ApplicationDetails() -> impl IntoView {
    let params = use_params_map();
    let toaster = ToasterInjection::expect_context();

    let application = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        sample_applications().into_iter().find(|a| a.id == id)
    });

    // Days consumed against the SLA target, for the progress strip.
    let sla_used_percent = move || {
        application
            .get()
            .map(|app| {
                let elapsed = (today() - app.submitted_on).num_days().max(0) as f64;
                (elapsed / app.sla_days as f64 * 100.0).min(100.0)
            })
            .unwrap_or(0.0)
    };

    // Workflow buttons only toast; decisions happen in the departmental
    // back office, not here.
    let handle_action = move |action: &'static str| {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                action,
                "Recorded for the office file. No portal data changes.",
            )
        }
    };

    view! {
        <PageFrame page_id="applications--detail" category="detail">
            {move || match application.get() {
                None => view! {
                    <div class="page__content">
                        <h1>"Application not found"</h1>
                        <p>"No application with this number exists in the register."</p>
                    </div>
                }.into_any(),
                Some(app) => {
                    let status = app.status;
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                <A href="/applications" attr:class="page__back">
                                    {icon("chevron-left")}
                                    " Applications"
                                </A>
                                <h1 class="page__title">{format!("Application {}", app.id)}</h1>
                                <StatusBadge label=status.label() color=status.color() />
                            </div>
                            <div class="page__header-right">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=handle_action("Marked for approval")
                                >
                                    {icon("check")}
                                    " Approve"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=handle_action("Marked for rejection")
                                >
                                    {icon("x")}
                                    " Reject"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=handle_action("Reassignment requested")
                                >
                                    {icon("users")}
                                    " Reassign"
                                </Button>
                            </div>
                        </div>

                        <div class="page__content">
                            <div class="detail-grid">
                                <div class="detail-card">
                                    <h2>"Applicant"</h2>
                                    <dl>
                                        <dt>"Name"</dt><dd>{app.applicant.clone()}</dd>
                                        <dt>"Establishment"</dt><dd>{app.establishment.clone()}</dd>
                                        <dt>"Category"</dt><dd>{app.category.clone()}</dd>
                                        <dt>"Fee"</dt><dd>{app.fee.clone()}</dd>
                                    </dl>
                                </div>
                                <div class="detail-card">
                                    <h2>"Jurisdiction"</h2>
                                    <dl>
                                        <dt>"District"</dt><dd>{app.district.clone()}</dd>
                                        <dt>"Mandal"</dt><dd>{app.mandal.clone()}</dd>
                                        <dt>"Assigned officer"</dt><dd>{app.officer.clone()}</dd>
                                    </dl>
                                </div>
                                <div class="detail-card">
                                    <h2>"Timeline"</h2>
                                    <dl>
                                        <dt>"Submitted"</dt><dd>{format_naive_date(app.submitted_on)}</dd>
                                        <dt>"SLA target"</dt><dd>{format!("{} days", app.sla_days)}</dd>
                                    </dl>
                                    <ProgressBar
                                        percent=Signal::derive(sla_used_percent)
                                        label="SLA consumed".to_string()
                                    />
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
