//! Browser side of the register exports: wrap the CSV/report text in a
//! Blob and trigger a same-tab download.

use contracts::shared::export::{csv_text, export_filename, CsvExportable};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::date_utils::today;

/// Export a (filtered) record list as CSV and start the download.
/// An empty list still downloads the header row.
pub fn download_csv<T: CsvExportable>(data: &[T], report: &str) -> Result<(), String> {
    let content = csv_text(data);
    let filename = export_filename(report, "csv", today());
    let blob = create_blob(&content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, &filename)
}

/// Export a printable HTML report document and start the download.
pub fn download_report(title: &str, table_html: &str, report: &str) -> Result<(), String> {
    let content = report_document(title, table_html);
    let filename = export_filename(report, "html", today());
    let blob = create_blob(&content, "text/html;charset=utf-8;")?;
    download_blob(&blob, &filename)
}

/// Self-contained printable document wrapped around a pre-rendered table.
fn report_document(title: &str, table_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 24px; }}\n\
         h1 {{ font-size: 18px; }}\n\
         table {{ border-collapse: collapse; width: 100%; font-size: 12px; }}\n\
         th, td {{ border: 1px solid #cbd5e1; padding: 4px 8px; text-align: left; }}\n\
         th {{ background: #f1f5f9; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n{table_html}\n</body>\n</html>\n"
    )
}

/// Render a record list as the table body of a report document.
pub fn report_table<T: CsvExportable>(data: &[T]) -> String {
    let mut html = String::from("<table>\n<tr>");
    for header in T::headers() {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n");
    for row in data {
        html.push_str("<tr>");
        for cell in row.to_csv_row() {
            html.push_str(&format!("<td>{}</td>", html_escape(&cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}

fn html_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Create a Blob with the given content and MIME type.
fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger the browser download through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
