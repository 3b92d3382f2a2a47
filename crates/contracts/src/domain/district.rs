use serde::{Deserialize, Serialize};

use crate::shared::filter::Filterable;

/// An administrative district with its mandals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// District code, e.g. `DST01`.
    pub id: String,
    pub name: String,
    /// Zone display name the district belongs to.
    pub zone: String,
    pub mandals: Vec<String>,
    /// District headquarters coordinate.
    pub lat: f64,
    pub lng: f64,
}

impl Filterable for District {
    // The districts page's categorical select drives the zone.
    fn status_key(&self) -> Option<&str> {
        Some(&self.zone)
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.id, self.name, self.mandals.join(" "))
    }
}

/// A zone grouping several districts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}
