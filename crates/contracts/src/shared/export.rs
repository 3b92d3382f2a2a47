//! CSV text assembly for register exports.
//!
//! Only the textual part lives here; the frontend wraps the result in a
//! Blob and triggers the browser download, the backend streams it as an
//! attachment.

use chrono::NaiveDate;

/// Types that can be written out as one CSV row.
pub trait CsvExportable {
    /// Column header row.
    fn headers() -> Vec<&'static str>;

    /// The record's cells, in header order.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build the full CSV document: UTF-8 BOM, header row, one line per
/// record. An empty list still produces the header row.
pub fn csv_text<T: CsvExportable>(rows: &[T]) -> String {
    // BOM so Excel renders the rupee sign correctly.
    let mut out = String::from('\u{FEFF}');
    out.push_str(&T::headers().join(","));
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Quote a cell when it contains the separator, quotes, or a newline;
/// inner quotes are doubled.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Download filename: report kind plus the current date.
pub fn export_filename(report: &str, extension: &str, today: NaiveDate) -> String {
    format!("{}-{}.{}", report, today.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::application::Application;
    use crate::samples::sample_applications;

    #[test]
    fn empty_list_exports_header_row_only() {
        let text = csv_text::<Application>(&[]);
        let body = text.trim_start_matches('\u{FEFF}');
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], Application::headers().join(","));
    }

    #[test]
    fn one_line_per_record_after_the_header() {
        let records = sample_applications();
        let text = csv_text(&records);
        let body = text.trim_start_matches('\u{FEFF}');
        assert_eq!(body.lines().count(), records.len() + 1);
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_csv_cell("Sri Rama Traders, Tenali"), "\"Sri Rama Traders, Tenali\"");
        assert_eq!(escape_csv_cell("say \"hello\""), "\"say \"\"hello\"\"\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }

    #[test]
    fn filename_carries_report_kind_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            export_filename("applications", "csv", date),
            "applications-2026-08-06.csv"
        );
    }
}
