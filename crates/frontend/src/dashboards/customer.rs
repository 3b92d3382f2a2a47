//! Customer view: licensed establishments nearby and public notices.

use contracts::enums::statuses::LicenseStatus;
use contracts::samples::{sample_licenses, sample_notifications};
use leptos::prelude::*;

use crate::shared::components::badge::StatusBadge;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_naive_date;
use crate::shared::page_frame::PageFrame;

#[component]
#[allow(non_snake_case)]
pub fn CustomerDashboard() -> impl IntoView {
    let licenses = sample_licenses();
    let active = licenses
        .iter()
        .filter(|l| l.status == LicenseStatus::Active)
        .count();
    let notices = sample_notifications();
    let notice_count = notices.len();

    view! {
        <PageFrame page_id="dashboard--customer" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consumer Services"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Licensed establishments"
                        icon_name="award"
                        value=Signal::derive(move || active.to_string())
                        subtitle="verified traders in the register".to_string()
                        accent="#16a34a"
                    />
                    <StatCard
                        label="Public notices"
                        icon_name="bell"
                        value=Signal::derive(move || notice_count.to_string())
                        accent="#3b82f6"
                    />
                </div>

                <h2 class="section-title">"Verified establishments"</h2>
                <div class="detail-card">
                    {licenses.iter().filter(|l| l.status == LicenseStatus::Active).map(|license| {
                        view! {
                            <div class="filing-row">
                                <span class="filing-row__id">{license.establishment.clone()}</span>
                                <span class="filing-row__category">{license.district.clone()}</span>
                                <StatusBadge label=license.status.label() color=license.status.color() />
                            </div>
                        }
                    }).collect_view()}
                </div>

                <h2 class="section-title">"Public notices"</h2>
                <div class="detail-card">
                    {notices.into_iter().map(|notice| {
                        view! {
                            <div class="filing-row">
                                <span class="filing-row__date">{format_naive_date(notice.created_on)}</span>
                                <span class="filing-row__category">{notice.title}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
