// ABOUTME: Health and readiness route handlers
// ABOUTME: Liveness reports service identity; readiness checks the database

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;

/// Health and readiness endpoints
pub struct HealthRoutes;

impl HealthRoutes {
    /// Build the health router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET /health - process liveness
    async fn handle_health() -> impl IntoResponse {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    /// Handle GET /ready - database connectivity
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        sqlx::query("SELECT 1")
            .execute(resources.database.pool())
            .await
            .map_err(|e| AppError::database(format!("Readiness check failed: {e}")))?;

        Ok(Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339(),
        })))
    }
}
