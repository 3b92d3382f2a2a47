use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::statuses::ApplicationStatus;
use crate::shared::export::CsvExportable;
use crate::shared::filter::Filterable;

/// A licensing application as it appears on the register pages.
///
/// Value object only: nothing in the portal creates, mutates, or deletes
/// one. District and mandal are free display strings, not foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Register number, e.g. `AP001`.
    pub id: String,
    pub applicant: String,
    pub establishment: String,
    /// License category applied for, e.g. "Dealer License".
    pub category: String,
    pub district: String,
    pub mandal: String,
    /// Assigned officer display name.
    pub officer: String,
    pub status: ApplicationStatus,
    #[serde(rename = "submittedOn")]
    pub submitted_on: NaiveDate,
    /// Target turnaround in days. Display only, not an enforced deadline.
    #[serde(rename = "slaDays")]
    pub sla_days: u32,
    /// Currency-formatted fee string, e.g. `₹2,500`.
    pub fee: String,
}

impl Filterable for Application {
    fn district(&self) -> Option<&str> {
        Some(&self.district)
    }

    fn mandal(&self) -> Option<&str> {
        Some(&self.mandal)
    }

    fn officer(&self) -> Option<&str> {
        Some(&self.officer)
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.submitted_on)
    }

    fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id, self.applicant, self.establishment, self.category
        )
    }
}

impl CsvExportable for Application {
    fn headers() -> Vec<&'static str> {
        vec![
            "Application No",
            "Applicant",
            "Establishment",
            "Category",
            "District",
            "Mandal",
            "Officer",
            "Status",
            "Submitted On",
            "SLA Days",
            "Fee",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.applicant.clone(),
            self.establishment.clone(),
            self.category.clone(),
            self.district.clone(),
            self.mandal.clone(),
            self.officer.clone(),
            self.status.label().to_string(),
            self.submitted_on.format("%Y-%m-%d").to_string(),
            self.sla_days.to_string(),
            self.fee.clone(),
        ]
    }
}
