//! Report builder. The "AI report generation" progress is a fixed,
//! client-side delay sequence — there is no model behind it; the real
//! output is the CSV/HTML export of the selected register.

use contracts::samples::{sample_applications, sample_districts, sample_inspections, sample_licenses};
use contracts::shared::filter::{apply_filter, FilterState, Selection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::filter_panel::FilterSelect;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::export::{download_csv, download_report, report_table};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::notify;

const STAGES: [(f64, &str); 5] = [
    (15.0, "Collecting register records..."),
    (40.0, "Deriving district summaries..."),
    (65.0, "Scoring compliance trends..."),
    (85.0, "Composing report sections..."),
    (100.0, "Report ready"),
];

#[component]
#[allow(non_snake_case)]
pub fn ReportBuilderPage() -> impl IntoView {
    let toaster = ToasterInjection::expect_context();

    let (register, set_register) = signal("applications".to_string());
    let district = RwSignal::new(Selection::All);

    let (progress, set_progress) = signal(0.0_f64);
    let (stage, set_stage) = signal(String::new());
    let (running, set_running) = signal(false);
    let (ready, set_ready) = signal(false);

    let handle_generate = move |_| {
        if running.get() {
            return;
        }
        set_running.set(true);
        set_ready.set(false);
        spawn_local(async move {
            for (percent, label) in STAGES {
                set_progress.set(percent);
                set_stage.set(label.to_string());
                gloo_timers::future::TimeoutFuture::new(600).await;
            }
            set_running.set(false);
            set_ready.set(true);
        });
    };

    let scoped_filter = move || FilterState {
        district: district.get(),
        ..FilterState::default()
    };

    let handle_csv = {
        let toaster = toaster.clone();
        move |_| {
            let result = match register.get().as_str() {
                "licenses" => download_csv(&apply_filter(&sample_licenses(), &scoped_filter()), "licenses-report"),
                "inspections" => download_csv(&apply_filter(&sample_inspections(), &scoped_filter()), "inspections-report"),
                _ => download_csv(&apply_filter(&sample_applications(), &scoped_filter()), "applications-report"),
            };
            match result {
                Ok(()) => notify(&toaster, "Export started", "The CSV download has begun."),
                Err(e) => notify(&toaster, "Export failed", &e),
            }
        }
    };

    let handle_report = {
        let toaster = toaster.clone();
        move |_| {
            let title = match district.get() {
                Selection::All => "Legal Metrology Summary Report".to_string(),
                Selection::Only(ref d) => format!("Legal Metrology Summary Report — {}", d),
            };
            let result = match register.get().as_str() {
                "licenses" => download_report(
                    &title,
                    &report_table(&apply_filter(&sample_licenses(), &scoped_filter())),
                    "licenses-report",
                ),
                "inspections" => download_report(
                    &title,
                    &report_table(&apply_filter(&sample_inspections(), &scoped_filter())),
                    "inspections-report",
                ),
                _ => download_report(
                    &title,
                    &report_table(&apply_filter(&sample_applications(), &scoped_filter())),
                    "applications-report",
                ),
            };
            match result {
                Ok(()) => notify(&toaster, "Report ready", "Open the download and print to PDF."),
                Err(e) => notify(&toaster, "Report failed", &e),
            }
        }
    };

    view! {
        <PageFrame page_id="reports--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reports"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="detail-card">
                    <h2>"Build a register report"</h2>
                    <div class="filter-panel__fields">
                        <label class="filter-field">
                            <span class="filter-field__label">"Register"</span>
                            <select
                                on:change=move |ev| set_register.set(event_target_value(&ev))
                                prop:value=move || register.get()
                            >
                                <option value="applications">"Applications"</option>
                                <option value="licenses">"Licenses"</option>
                                <option value="inspections">"Inspections"</option>
                            </select>
                        </label>
                        <FilterSelect
                            label="District"
                            options={sample_districts().into_iter().map(|d| (d.name.clone(), d.name)).collect::<Vec<_>>()}
                            value=Signal::derive(move || district.get().key().to_string())
                            on_change=Callback::new(move |raw: String| {
                                district.set(Selection::parse(&raw));
                            })
                        />
                    </div>

                    <div class="report-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_generate
                            disabled=Signal::derive(move || running.get())
                        >
                            {icon("bar-chart")}
                            {move || if running.get() { " Generating..." } else { " Generate report" }}
                        </Button>
                    </div>

                    {move || (running.get() || ready.get()).then(|| view! {
                        <div class="report-progress">
                            <ProgressBar
                                percent=Signal::derive(move || progress.get())
                                label="Generation".to_string()
                            />
                            <div class="report-progress__stage">{move || stage.get()}</div>
                        </div>
                    })}

                    {move || ready.get().then(|| view! {
                        <div class="report-actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=handle_csv.clone()
                            >
                                {icon("download")}
                                " Download CSV"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=handle_report.clone()
                            >
                                {icon("printer")}
                                " Download report"
                            </Button>
                        </div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
