// ABOUTME: Centralized constants for limits, cookie names, and user-facing messages
// ABOUTME: Keeps magic numbers and repeated strings out of handler and service code
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application-wide constants.

/// Limits and sizes
pub mod limits {
    /// Session credential lifetime in days
    pub const SESSION_EXPIRY_DAYS: i64 = 7;

    /// Minimum accepted password length at signup and login
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Candidates requested from the upstream ingredient search
    pub const INGREDIENT_SEARCH_RESULTS: u32 = 2;

    /// Matches requested from the upstream name search (best match only)
    pub const NAME_SEARCH_RESULTS: u32 = 1;

    /// Inclusive rating bounds for saved recipes
    pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;
}

/// Cookie names and attributes
pub mod cookies {
    /// Name of the HttpOnly cookie carrying the session token
    pub const AUTH_COOKIE: &str = "auth_token";
}

/// User-facing error messages
pub mod error_messages {
    /// Generic credential failure, identical for unknown email and wrong
    /// password so callers cannot enumerate registered addresses
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

    /// Email failed the shape check at signup
    pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

    /// Password shorter than the minimum
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

    /// Registration attempted with an email that already has an account
    pub const USER_ALREADY_EXISTS: &str = "A user with this email already exists";

    /// Per-candidate enrichment failure marker stored on the candidate
    pub const ENRICHMENT_FAILED: &str = "Failed to fetch details";
}

/// Environment variable names read by [`crate::config::ServerConfig`]
pub mod env_vars {
    /// Upstream provider API key
    pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Override for the upstream provider base URL (tests, proxies)
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// HMAC secret for session tokens
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Comma-separated allowed CORS origins, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
