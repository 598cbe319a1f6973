// ABOUTME: Server binary for the recipe vault service
// ABOUTME: Loads configuration, wires shared resources, and runs the HTTP server

// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Vault Server Binary
//!
//! Starts the HTTP server with the Spoonacular provider, SQLite persistence,
//! and cookie-based session authentication.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recipe_vault::{
    auth::AuthManager,
    config::ServerConfig,
    database::Database,
    logging,
    providers::spoonacular::SpoonacularProvider,
    server::{self, ServerResources},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-vault-server")]
#[command(about = "Recipe search aggregation and saved-recipe service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting recipe vault server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database ready at {}", config.database.url);

    let auth_manager = AuthManager::with_expiry(
        config.auth.jwt_secret.clone().into_bytes(),
        config.auth.session_expiry_days,
    );
    let provider = Arc::new(SpoonacularProvider::new(config.provider.clone()));

    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        provider,
        config,
    ));

    server::run(resources).await
}
