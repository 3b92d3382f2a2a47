use contracts::samples::sample_licenses;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::shared::components::badge::StatusBadge;
use crate::shared::date_utils::format_naive_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

#[component]
#[allow(non_snake_case)]
pub fn LicenseDetails() -> impl IntoView {
    let params = use_params_map();
    let toaster = ToasterInjection::expect_context();

    let license = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        sample_licenses().into_iter().find(|l| l.id == id)
    });

    let handle_renewal = {
        let toaster = toaster.clone();
        move |_| {
            notify(
                &toaster,
                "Renewal notice",
                "A renewal reminder letter will go out with the next dispatch.",
            )
        }
    };

    view! {
        <PageFrame page_id="licenses--detail" category="detail">
            {move || match license.get() {
                None => view! {
                    <div class="page__content">
                        <h1>"License not found"</h1>
                        <p>"No license with this number exists in the register."</p>
                    </div>
                }.into_any(),
                Some(license) => {
                    let status = license.status;
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                <A href="/licenses" attr:class="page__back">
                                    {icon("chevron-left")}
                                    " Licenses"
                                </A>
                                <h1 class="page__title">{format!("License {}", license.id)}</h1>
                                <StatusBadge label=status.label() color=status.color() />
                            </div>
                            <div class="page__header-right">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=handle_renewal.clone()
                                >
                                    {icon("bell")}
                                    " Send renewal notice"
                                </Button>
                            </div>
                        </div>

                        <div class="page__content">
                            <div class="detail-grid">
                                <div class="detail-card">
                                    <h2>"Holder"</h2>
                                    <dl>
                                        <dt>"Licensee"</dt><dd>{license.licensee.clone()}</dd>
                                        <dt>"Establishment"</dt><dd>{license.establishment.clone()}</dd>
                                        <dt>"Category"</dt><dd>{license.category.clone()}</dd>
                                    </dl>
                                </div>
                                <div class="detail-card">
                                    <h2>"Jurisdiction"</h2>
                                    <dl>
                                        <dt>"District"</dt><dd>{license.district.clone()}</dd>
                                        <dt>"Mandal"</dt><dd>{license.mandal.clone()}</dd>
                                    </dl>
                                </div>
                                <div class="detail-card">
                                    <h2>"Validity"</h2>
                                    <dl>
                                        <dt>"Issued"</dt><dd>{format_naive_date(license.issued_on)}</dd>
                                        <dt>"Valid until"</dt><dd>{format_naive_date(license.valid_until)}</dd>
                                    </dl>
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}
