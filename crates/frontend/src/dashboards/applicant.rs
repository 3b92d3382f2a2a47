//! Applicant view: the demo applicant's own filings and their progress.

use contracts::enums::statuses::ApplicationStatus;
use contracts::samples::sample_applications;
use contracts::shared::filter::{apply_filter, percentage, FilterState};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::badge::StatusBadge;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_naive_date;
use crate::shared::page_frame::PageFrame;

// The portal has no per-account data; the applicant dashboard follows
// one sample filer.
const DEMO_APPLICANT: &str = "D. Suresh Kumar";

#[component]
#[allow(non_snake_case)]
pub fn ApplicantDashboard() -> impl IntoView {
    let my_applications = {
        let filter = FilterState {
            search: DEMO_APPLICANT.to_string(),
            ..FilterState::default()
        };
        apply_filter(&sample_applications(), &filter)
    };

    let decided = my_applications
        .iter()
        .filter(|a| {
            a.status == ApplicationStatus::Approved || a.status == ApplicationStatus::Rejected
        })
        .count();
    let progress = percentage(decided, my_applications.len());
    let total = my_applications.len();

    view! {
        <PageFrame page_id="dashboard--applicant" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My Applications"</h1>
                </div>
                <div class="page__header-right">
                    <A href="/applications" attr:class="page__link">"Open full register"</A>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Filed"
                        icon_name="file-text"
                        value=Signal::derive(move || total.to_string())
                        accent="#3b82f6"
                    />
                    <StatCard
                        label="Decided"
                        icon_name="check"
                        value=Signal::derive(move || format!("{:.0}%", progress))
                        subtitle="share of filings with a decision".to_string()
                        accent="#16a34a"
                    />
                </div>

                <div class="detail-card">
                    <h2>"Filings"</h2>
                    {my_applications.into_iter().map(|app| {
                        view! {
                            <div class="filing-row">
                                <span class="filing-row__id">{app.id.clone()}</span>
                                <span class="filing-row__category">{app.category.clone()}</span>
                                <span class="filing-row__date">{format_naive_date(app.submitted_on)}</span>
                                <StatusBadge label=app.status.label() color=app.status.color() />
                            </div>
                        }
                    }).collect_view()}
                    <ProgressBar
                        percent=Signal::derive(move || progress)
                        label="Processing progress".to_string()
                    />
                </div>
            </div>
        </PageFrame>
    }
}
