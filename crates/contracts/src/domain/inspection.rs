use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::statuses::InspectionStatus;
use crate::shared::export::CsvExportable;
use crate::shared::filter::Filterable;

/// A field inspection visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    /// Inspection number, e.g. `INS001`.
    pub id: String,
    pub establishment: String,
    pub district: String,
    pub mandal: String,
    /// Inspecting officer display name.
    pub officer: String,
    pub status: InspectionStatus,
    #[serde(rename = "scheduledOn")]
    pub scheduled_on: NaiveDate,
    /// `None` until the visit is completed.
    pub compliant: Option<bool>,
}

impl Inspection {
    pub fn compliance_label(&self) -> &'static str {
        match self.compliant {
            Some(true) => "Compliant",
            Some(false) => "Non-compliant",
            None => "—",
        }
    }
}

impl Filterable for Inspection {
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
        Some(self.scheduled_on)
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.id, self.establishment, self.officer)
    }
}

impl CsvExportable for Inspection {
    fn headers() -> Vec<&'static str> {
        vec![
            "Inspection No",
            "Establishment",
            "District",
            "Mandal",
            "Officer",
            "Status",
            "Scheduled On",
            "Compliance",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.establishment.clone(),
            self.district.clone(),
            self.mandal.clone(),
            self.officer.clone(),
            self.status.label().to_string(),
            self.scheduled_on.format("%Y-%m-%d").to_string(),
            self.compliance_label().to_string(),
        ]
    }
}
