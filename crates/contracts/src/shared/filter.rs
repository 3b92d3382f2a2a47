//! Filter-and-derive-summary engine shared by every register page.
//!
//! Pure and UI-independent: pages (and the backend) feed a record list and
//! a `FilterState` in, and get the filtered subsequence plus small derived
//! aggregates back.

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A categorical filter field: either the `"all"` sentinel or one concrete
/// value that must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Parse a raw select-box value; empty string and `"all"` both mean
    /// the sentinel.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == "all" {
            Selection::All
        } else {
            Selection::Only(raw.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Selection::All => "all",
            Selection::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Exact string equality against a record field; the sentinel matches
    /// everything.
    pub fn matches(&self, field: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == field,
        }
    }
}

// Serialized as the plain select-box value so FilterState round-trips
// through the URL query string.
impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::parse(&raw))
    }
}

/// Filter criteria for one register page. Every field defaults to its
/// sentinel, so `FilterState::default()` selects the full list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Selection::is_all")]
    pub district: Selection,
    #[serde(default, skip_serializing_if = "Selection::is_all")]
    pub mandal: Selection,
    #[serde(default, skip_serializing_if = "Selection::is_all")]
    pub officer: Selection,
    #[serde(default, skip_serializing_if = "Selection::is_all")]
    pub status: Selection,
    /// Free-text term, matched case-insensitively as a substring.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    /// Inclusive date range bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl FilterState {
    /// True when every field is at its sentinel — the page shows the full
    /// list and no "filtered" indicator.
    pub fn is_empty(&self) -> bool {
        self.district.is_all()
            && self.mandal.is_all()
            && self.officer.is_all()
            && self.status.is_all()
            && self.search.trim().is_empty()
            && self.from.is_none()
            && self.to.is_none()
    }

    /// Number of active criteria, for the filter badge. The date range
    /// counts once however many of its bounds are set.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        for selection in [&self.district, &self.mandal, &self.officer, &self.status] {
            if !selection.is_all() {
                count += 1;
            }
        }
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.from.is_some() || self.to.is_some() {
            count += 1;
        }
        count
    }
}

/// Record-side accessors the filter engine matches against. A record only
/// overrides the fields its register filters on.
pub trait Filterable {
    fn district(&self) -> Option<&str> {
        None
    }
    fn mandal(&self) -> Option<&str> {
        None
    }
    fn officer(&self) -> Option<&str> {
        None
    }
    /// Stable key of the record's status enum (or whatever categorical
    /// field the page's status select drives — role for users, severity
    /// for notifications).
    fn status_key(&self) -> Option<&str> {
        None
    }
    fn record_date(&self) -> Option<NaiveDate> {
        None
    }
    /// Text the free-text search runs over.
    fn search_haystack(&self) -> String;
}

fn field_matches(selection: &Selection, field: Option<&str>) -> bool {
    match field {
        Some(value) => selection.matches(value),
        // A record without the field only passes the sentinel.
        None => selection.is_all(),
    }
}

fn date_in_range(date: Option<NaiveDate>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(date) = date else {
        return false;
    };
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}

/// The filtered subsequence: records where every non-sentinel field
/// matches exactly, the search term is contained case-insensitively, and
/// the record date falls inside the inclusive range.
pub fn apply_filter<T: Filterable + Clone>(records: &[T], state: &FilterState) -> Vec<T> {
    let term = state.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            field_matches(&state.district, record.district())
                && field_matches(&state.mandal, record.mandal())
                && field_matches(&state.officer, record.officer())
                && field_matches(&state.status, record.status_key())
                && (term.is_empty() || record.search_haystack().to_lowercase().contains(&term))
                && date_in_range(record.record_date(), state.from, state.to)
        })
        .cloned()
        .collect()
}

/// Counts per status key over a (typically already filtered) list, in
/// order of first appearance.
pub fn status_counts<T: Filterable>(records: &[T]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let Some(key) = record.status_key() else {
            continue;
        };
        match counts.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

/// Share of `part` in `whole` as a percentage. An empty denominator is
/// reported as 0%, never NaN or infinity.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// 1-based pagination window over a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(len / page_size)`, with a minimum of one page so an empty
    /// list still renders "1 / 1".
    pub fn page_count(&self, len: usize) -> usize {
        if len == 0 {
            return 1;
        }
        (len + self.page_size - 1) / self.page_size
    }

    /// Clamp the current page into `[1, page_count]` — needed when the
    /// filtered set shrinks under the current page.
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            page: self.page.clamp(1, self.page_count(len)),
            page_size: self.page_size,
        }
    }

    /// The `(page-1)*page_size .. page*page_size` window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page.max(1) - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_applications;

    #[test]
    fn all_sentinels_keep_the_full_list() {
        let records = sample_applications();
        let state = FilterState::default();
        assert!(state.is_empty());
        assert_eq!(apply_filter(&records, &state), records);
    }

    #[test]
    fn district_filter_matches_exactly() {
        let records = sample_applications();
        let state = FilterState {
            district: Selection::only("Guntur"),
            ..FilterState::default()
        };
        let filtered = apply_filter(&records, &state);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|a| a.district == "Guntur"));
    }

    #[test]
    fn pending_filter_yields_the_three_sample_records() {
        let records = sample_applications();
        let state = FilterState {
            status: Selection::only("pending"),
            ..FilterState::default()
        };
        let filtered = apply_filter(&records, &state);
        let ids: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["AP001", "AP002", "AP003"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = sample_applications();
        let state = FilterState {
            search: "ap001".to_string(),
            ..FilterState::default()
        };
        let filtered = apply_filter(&records, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "AP001");
    }

    #[test]
    fn date_range_is_inclusive() {
        let records = sample_applications();
        let first = records[0].submitted_on;
        let state = FilterState {
            from: Some(first),
            to: Some(first),
            ..FilterState::default()
        };
        let filtered = apply_filter(&records, &state);
        assert!(filtered.iter().all(|a| a.submitted_on == first));
        assert!(filtered.iter().any(|a| a.id == records[0].id));
    }

    #[test]
    fn percentage_of_empty_list_is_zero() {
        let value = percentage(0, 0);
        assert_eq!(value, 0.0);
        assert!(value.is_finite());
    }

    #[test]
    fn page_slices_never_exceed_page_size() {
        let records = sample_applications();
        let pager = Pager {
            page: 1,
            page_size: 5,
        };
        for page in 1..=pager.page_count(records.len()) {
            let window = Pager { page, ..pager }.slice(&records);
            assert!(window.len() <= pager.page_size);
        }
    }

    #[test]
    fn current_page_clamps_when_the_list_shrinks() {
        let pager = Pager {
            page: 9,
            page_size: 10,
        };
        assert_eq!(pager.clamped(12).page, 2);
        assert_eq!(pager.clamped(0).page, 1);
    }

    #[test]
    fn active_count_tracks_non_sentinel_fields() {
        let mut state = FilterState::default();
        assert_eq!(state.active_count(), 0);
        state.district = Selection::only("Guntur");
        state.search = "metro".to_string();
        state.from = Some(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        state.to = Some(chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(state.active_count(), 3);
    }
}
