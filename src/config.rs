// ABOUTME: Environment-based configuration for deployment-specific settings
// ABOUTME: Resolves provider key, JWT secret, database URL, port, and CORS origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration.
//!
//! All external collaborator concerns (provider key, signing secret, allowed
//! origins, persistence connection string) are resolved here once at startup
//! and passed into components at construction. Nothing reads ambient
//! environment state after boot.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{env_vars, limits};
use crate::errors::{AppError, AppResult};

/// Deployment environment, used to pick cookie attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: lax cookies, no Secure flag
    #[default]
    Development,
    /// Production: cross-site cookies over HTTPS only
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Session lifetime in days
    pub session_expiry_days: i64,
}

/// Upstream recipe provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key sent with every upstream request
    pub api_key: String,
    /// Base URL of the provider's recipe API
    pub base_url: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string (sqlite path or `sqlite::memory:`)
    pub url: String,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or "*" for any
    pub allowed_origins: String,
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Upstream provider settings
    pub provider: ProviderConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

/// Default upstream provider base URL
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Default database location when `DATABASE_URL` is unset
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/recipe_vault.db";

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the provider API key is missing, if the
    /// JWT secret is missing in production, or if `HTTP_PORT` is not a
    /// valid port number.
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
        );

        let api_key = env::var(env_vars::SPOONACULAR_API_KEY).map_err(|_| {
            AppError::config(format!(
                "{} must be set to reach the recipe provider",
                env_vars::SPOONACULAR_API_KEY
            ))
        })?;

        let jwt_secret = match env::var(env_vars::JWT_SECRET) {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::config(format!(
                    "{} must be set in production",
                    env_vars::JWT_SECRET
                )));
            }
            _ => {
                tracing::warn!("JWT_SECRET not set, generating an ephemeral development secret");
                crate::auth::generate_jwt_secret()?
            }
        };

        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(port) => port
                .parse()
                .map_err(|_| AppError::config(format!("Invalid HTTP_PORT value: {port}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_port,
            environment,
            database: DatabaseConfig {
                url: env::var(env_vars::DATABASE_URL)
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            },
            auth: AuthConfig {
                jwt_secret,
                session_expiry_days: limits::SESSION_EXPIRY_DAYS,
            },
            provider: ProviderConfig {
                api_key,
                base_url: env::var(env_vars::SPOONACULAR_BASE_URL)
                    .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.into()),
            },
            cors: CorsConfig {
                allowed_origins: env::var(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|_| "*".into()),
            },
        })
    }

    /// One-line summary for startup logging, with secrets elided
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} database={} provider={} cors={}",
            self.environment, self.http_port, self.database.url, self.provider.base_url,
            self.cors.allowed_origins
        )
    }
}
