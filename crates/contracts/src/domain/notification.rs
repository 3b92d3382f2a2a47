use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::statuses::Severity;
use crate::shared::filter::Filterable;

/// An in-portal notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub severity: Severity,
    #[serde(rename = "createdOn")]
    pub created_on: NaiveDate,
    pub read: bool,
}

impl Filterable for Notification {
    // The notifications page's categorical select drives the severity.
    fn status_key(&self) -> Option<&str> {
        Some(self.severity.as_str())
    }

    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.created_on)
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}
