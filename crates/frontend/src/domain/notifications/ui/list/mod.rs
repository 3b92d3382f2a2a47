use contracts::enums::statuses::Severity;
use contracts::samples::sample_notifications;
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::badge::StatusBadge;
use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::date_utils::format_naive_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn NotificationsList() -> impl IntoView {
    let toaster = ToasterInjection::expect_context();

    let filter = RwSignal::new(FilterState::default());
    let (raw_items, _) = signal(sample_notifications());

    // The severity select drives the status slot of the shared filter.
    let filtered = Memo::new(move |_| apply_filter(&raw_items.get(), &filter.get()));

    let handle_mark_all = {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                "Marked as read",
                "Read markers are session-local in this portal.",
            )
        }
    };

    view! {
        <PageFrame page_id="notifications--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notifications"</h1>
                </div>
                <div class="page__header-right">
                    <FilterSelect
                        label="Severity"
                        options=vec![
                            (Severity::Info.as_str().to_string(), Severity::Info.label().to_string()),
                            (Severity::Warning.as_str().to_string(), Severity::Warning.label().to_string()),
                            (Severity::Critical.as_str().to_string(), Severity::Critical.label().to_string()),
                        ]
                        value=Signal::derive(move || filter.get().status.key().to_string())
                        on_change=Callback::new(move |raw: String| {
                            filter.update(|f| f.status = Selection::parse(&raw));
                        })
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_mark_all
                    >
                        "Mark all read"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="notification-list">
                    {move || filtered.get().into_iter().map(|notification| {
                        view! {
                            <div class=if notification.read {
                                "notification-card"
                            } else {
                                "notification-card notification-card--unread"
                            }>
                                <div class="notification-card__header">
                                    <StatusBadge
                                        label=notification.severity.label()
                                        color=notification.severity.color()
                                    />
                                    <span class="notification-card__date">
                                        {format_naive_date(notification.created_on)}
                                    </span>
                                </div>
                                <div class="notification-card__title">{notification.title.clone()}</div>
                                <div class="notification-card__body">{notification.body.clone()}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
