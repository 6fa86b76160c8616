//! API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::Result;
use crate::query::{self, CafeQuery};

/// Health check with catalog status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cities: state.catalog.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cities: usize,
}

/// List cafés of a city as a comma-separated plain-text body
pub async fn cafes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String> {
    let params: CafeQuery = pairs.into_iter().collect();
    let found = params
        .execute(&state.catalog, state.search)
        .inspect_err(|e| {
            tracing::debug!(
                city = ?params.city,
                count = ?params.count,
                error = %e,
                "Rejected cafe query"
            );
        })?;

    tracing::debug!(city = ?params.city, matches = found.len(), "Cafe query served");

    Ok(query::render(&found))
}
