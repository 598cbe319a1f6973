// ABOUTME: HTTP server assembly for the recipe service
// ABOUTME: Owns shared resources, builds the axum router, and runs the listener

// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Server Assembly
//!
//! [`ServerResources`] bundles every shared dependency behind `Arc` so route
//! handlers receive one state type. [`run`] binds the listener and serves the
//! composed router until the process is stopped.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::aggregator::RecipeAggregator;
use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::{setup_cors, AuthMiddleware};
use crate::providers::RecipeProvider;
use crate::routes::{AuthRoutes, HealthRoutes, RecipeRoutes};

/// Shared dependencies handed to every route handler
pub struct ServerResources {
    /// User and saved-recipe storage
    pub database: Arc<Database>,
    /// Token issuing and verification
    pub auth_manager: Arc<AuthManager>,
    /// Request authentication over cookie or Bearer credentials
    pub auth_middleware: AuthMiddleware,
    /// Search aggregation over the upstream provider
    pub aggregator: RecipeAggregator,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from their constituent parts
    #[must_use]
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        provider: Arc<dyn RecipeProvider>,
        config: ServerConfig,
    ) -> Self {
        let database = Arc::new(database);
        let auth_manager = Arc::new(auth_manager);
        Self {
            auth_middleware: AuthMiddleware::new(auth_manager.clone(), database.clone()),
            aggregator: RecipeAggregator::new(provider),
            database,
            auth_manager,
            config: Arc::new(config),
        }
    }
}

/// Compose the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the HTTP listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server loop fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let port = resources.config.http_port;
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {port}"))?;

    info!(port = port, "Recipe service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, draining connections");
    }
}
