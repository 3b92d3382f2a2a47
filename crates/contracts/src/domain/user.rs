use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::role::{OfficerRank, Role};
use crate::shared::filter::Filterable;

/// A portal user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Account id, e.g. `USR001`.
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Departmental rank, present for officers only.
    pub rank: Option<OfficerRank>,
    pub district: String,
    pub email: String,
    pub active: bool,
    #[serde(rename = "lastLogin")]
    pub last_login: Option<NaiveDate>,
}

impl Filterable for UserAccount {
    fn district(&self) -> Option<&str> {
        Some(&self.district)
    }

    // The users page's categorical select drives the role.
    fn status_key(&self) -> Option<&str> {
        Some(self.role.as_str())
    }

    fn record_date(&self) -> Option<NaiveDate> {
        self.last_login
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.id, self.name, self.email)
    }
}
