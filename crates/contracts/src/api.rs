//! Wire types for the one real API surface the SPA consumes.

use serde::{Deserialize, Serialize};

use crate::domain::application::Application;

/// Response shape of `GET /getapplications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// Optional query filters accepted by `GET /getapplications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationQuery {
    pub district: Option<String>,
    pub status: Option<String>,
}
