use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use contracts::api::{ApplicationQuery, ApplicationsResponse};
use contracts::shared::export::{export_filename, CsvExportable};
use contracts::shared::filter::{apply_filter, FilterState, Selection};

use crate::shared::error::AppError;
use crate::shared::registry;

fn filter_from_query(query: &ApplicationQuery) -> FilterState {
    FilterState {
        district: query
            .district
            .as_deref()
            .map(Selection::parse)
            .unwrap_or_default(),
        status: query
            .status
            .as_deref()
            .map(Selection::parse)
            .unwrap_or_default(),
        ..FilterState::default()
    }
}

/// GET /getapplications
///
/// The one endpoint the SPA consumes. `district` and `status` query
/// parameters run through the same filter engine the pages use.
pub async fn list(Query(query): Query<ApplicationQuery>) -> Json<ApplicationsResponse> {
    let filter = filter_from_query(&query);
    let applications = apply_filter(&registry::APPLICATIONS, &filter);
    Json(ApplicationsResponse { applications })
}

/// GET /getapplications/csv
///
/// Same register as a CSV attachment, filename stamped with the current
/// date.
pub async fn export_csv(
    Query(query): Query<ApplicationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = filter_from_query(&query);
    let applications = apply_filter(&registry::APPLICATIONS, &filter);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(
        contracts::domain::application::Application::headers(),
    )?;
    for application in &applications {
        writer.write_record(application.to_csv_row())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let filename = export_filename("applications", "csv", chrono::Utc::now().date_naive());
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, bytes))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use contracts::api::ApplicationsResponse;
    use tower::util::ServiceExt;

    use crate::routes::configure_routes;

    async fn get(uri: &str) -> axum::response::Response {
        configure_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> ApplicationsResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn returns_the_full_register() {
        let response = get("/getapplications").await;
        assert_eq!(response.status(), StatusCode::OK);
        let parsed = body_json(response).await;
        assert_eq!(parsed.applications.len(), 12);
    }

    #[tokio::test]
    async fn district_query_filters_exactly() {
        let response = get("/getapplications?district=Guntur").await;
        let parsed = body_json(response).await;
        assert!(!parsed.applications.is_empty());
        assert!(parsed.applications.iter().all(|a| a.district == "Guntur"));
    }

    #[tokio::test]
    async fn pending_query_yields_three_records() {
        let response = get("/getapplications?status=pending").await;
        let parsed = body_json(response).await;
        let ids: Vec<&str> = parsed.applications.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["AP001", "AP002", "AP003"]);
    }

    #[tokio::test]
    async fn csv_export_is_an_attachment() {
        let response = get("/getapplications/csv").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/csv"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        // Header row plus one line per register record.
        assert_eq!(text.lines().count(), 13);
    }

    #[tokio::test]
    async fn health_endpoint_answers() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
