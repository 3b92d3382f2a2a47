use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::statuses::LicenseStatus;
use crate::shared::export::CsvExportable;
use crate::shared::filter::Filterable;

/// An issued license on the license register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License number, e.g. `LIC001`.
    pub id: String,
    pub licensee: String,
    pub establishment: String,
    /// "Manufacturer", "Dealer", or "Repairer".
    pub category: String,
    pub district: String,
    pub mandal: String,
    pub status: LicenseStatus,
    #[serde(rename = "issuedOn")]
    pub issued_on: NaiveDate,
    #[serde(rename = "validUntil")]
    pub valid_until: NaiveDate,
}

impl Filterable for License {
    fn district(&self) -> Option<&str> {
        Some(&self.district)
    }

    fn mandal(&self) -> Option<&str> {
        Some(&self.mandal)
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.issued_on)
    }

    fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id, self.licensee, self.establishment, self.category
        )
    }
}

impl CsvExportable for License {
    fn headers() -> Vec<&'static str> {
        vec![
            "License No",
            "Licensee",
            "Establishment",
            "Category",
            "District",
            "Mandal",
            "Status",
            "Issued On",
            "Valid Until",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.licensee.clone(),
            self.establishment.clone(),
            self.category.clone(),
            self.district.clone(),
            self.mandal.clone(),
            self.status.label().to_string(),
            self.issued_on.format("%Y-%m-%d").to_string(),
            self.valid_until.format("%Y-%m-%d").to_string(),
        ]
    }
}
