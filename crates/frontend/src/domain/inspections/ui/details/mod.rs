pub mod calculator;

use contracts::samples::sample_inspections;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use self::calculator::VerificationCalculator;
use crate::shared::components::badge::StatusBadge;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn InspectionDetails() -> impl IntoView {
    let params = use_params_map();
    let toaster = ToasterInjection::expect_context();

    let inspection = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        sample_inspections().into_iter().find(|i| i.id == id)
    });

    // Camera capture is not wired up in this portal; the button degrades
    // to a toast and the visit continues (photos go on the paper file).
    let handle_capture = {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                "Camera unavailable",
                "Attach seals and photographs to the office file instead.",
            )
        }
    };

    view! {
        <PageFrame page_id="inspections--detail" category="detail">
            {move || match inspection.get() {
                None => view! {
                    <div class="page__content">
                        <h1>"Inspection not found"</h1>
                        <p>"No inspection with this number exists in the schedule."</p>
                    </div>
                }.into_any(),
                Some(inspection) => {
                    let status = inspection.status;
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                <A href="/inspections" attr:class="page__back">
                                    {icon("chevron-left")}
                                    " Inspections"
                                </A>
                                <h1 class="page__title">{format!("Inspection {}", inspection.id)}</h1>
                                <StatusBadge label=status.label() color=status.color() />
                            </div>
                            <div class="page__header-right">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=handle_capture.clone()
                                >
                                    {icon("printer")}
                                    " Capture evidence"
                                </Button>
                            </div>
                        </div>

                        <div class="page__content">
                            <div class="detail-grid">
                                <div class="detail-card">
                                    <h2>"Visit"</h2>
                                    <dl>
                                        <dt>"Establishment"</dt><dd>{inspection.establishment.clone()}</dd>
                                        <dt>"District"</dt><dd>{inspection.district.clone()}</dd>
                                        <dt>"Mandal"</dt><dd>{inspection.mandal.clone()}</dd>
                                        <dt>"Officer"</dt><dd>{inspection.officer.clone()}</dd>
                                        <dt>"Scheduled"</dt><dd>{format_naive_date(inspection.scheduled_on)}</dd>
                                        <dt>"Compliance"</dt><dd>{inspection.compliance_label()}</dd>
                                    </dl>
                                </div>
                                <VerificationCalculator />
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
