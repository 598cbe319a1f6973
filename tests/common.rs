// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and user creation helpers

// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `recipe_vault`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::{Arc, Once};

use anyhow::Result;
use recipe_vault::{
    auth::{generate_jwt_secret, AuthManager},
    database::Database,
    models::User,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Create a test authentication manager with a random secret
pub fn create_test_auth_manager() -> Arc<AuthManager> {
    let jwt_secret = generate_jwt_secret().expect("Failed to generate JWT secret");
    Arc::new(AuthManager::new(jwt_secret.into_bytes()))
}

/// Build an unsaved test user with a placeholder password hash
pub fn build_test_user(email: &str) -> User {
    User::new(email.into(), "Test Cook".into(), "$2b$12$placeholderhash".into())
}

/// Create and persist a test user, returning the stored record
pub async fn create_test_user(database: &Database, email: &str) -> Result<User> {
    let user = build_test_user(email);
    database.create_user(&user).await?;
    Ok(user)
}
