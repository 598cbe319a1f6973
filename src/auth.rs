// ABOUTME: Session credential service for password hashing and JWT mint/validate
// ABOUTME: Handles bcrypt password verification and HS256 session tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Authentication and Session Credentials
//!
//! This module issues and verifies the signed session credential and hashes
//! and verifies passwords. Token validity is purely cryptographic plus
//! expiry; nothing is persisted server-side, so a stolen un-expired token
//! remains valid until natural expiry. All work here is CPU-bound and
//! failures are reported immediately, never retried.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits::SESSION_EXPIRY_DAYS;
use crate::errors::{AppError, AppResult};

/// JWT claims for the session credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// JWT validation error with detail for logs
///
/// The detail never reaches the client; the HTTP boundary collapses all
/// variants into a generic unauthorized response.
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired,
    /// Token signature does not verify against the server secret
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed JWT
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired => write!(f, "session token expired"),
            Self::TokenInvalid { reason } => write!(f, "session token invalid: {reason}"),
            Self::TokenMalformed { details } => write!(f, "session token malformed: {details}"),
        }
    }
}

impl std::error::Error for JwtValidationError {}

/// Generate a random JWT secret suitable for development and tests
///
/// # Errors
///
/// Returns an error if the system random source fails.
pub fn generate_jwt_secret() -> AppResult<String> {
    let mut bytes = [0u8; 32];
    rand::thread_rng()
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::internal(format!("Failed to generate JWT secret: {e}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Issues and verifies session credentials and password hashes
#[derive(Clone)]
pub struct AuthManager {
    jwt_secret: Vec<u8>,
    expiry_days: i64,
}

impl AuthManager {
    /// Create a new manager with the default 7-day session lifetime
    #[must_use]
    pub fn new(jwt_secret: Vec<u8>) -> Self {
        Self::with_expiry(jwt_secret, SESSION_EXPIRY_DAYS)
    }

    /// Create a manager with an explicit session lifetime in days
    #[must_use]
    pub const fn with_expiry(jwt_secret: Vec<u8>, expiry_days: i64) -> Self {
        Self {
            jwt_secret,
            expiry_days,
        }
    }

    /// Session lifetime in seconds, for cookie `Max-Age`
    #[must_use]
    pub const fn session_expiry_secs(&self) -> i64 {
        self.expiry_days * 24 * 60 * 60
    }

    /// Hash a plaintext password with bcrypt
    ///
    /// # Errors
    ///
    /// Returns an error if bcrypt fails, which only happens on resource
    /// exhaustion or invalid cost configuration.
    pub fn hash_password(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verify a plaintext password against a stored bcrypt hash
    ///
    /// CPU-bound; callers on the async path run this under
    /// `tokio::task::spawn_blocking`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash is not a valid bcrypt string.
    pub fn verify_password(plaintext: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, hash)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }

    /// Mint a signed session token for the given user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, user_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.expiry_days)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.jwt_secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Verify a session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns [`JwtValidationError`] when the signature is invalid, the
    /// payload is malformed, or the expiry has elapsed.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        // Default validation already checks exp; pin the algorithm so a
        // token signed with a different scheme never verifies.
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.jwt_secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtValidationError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                JwtValidationError::TokenInvalid {
                    reason: "signature verification failed".into(),
                }
            }
            other => JwtValidationError::TokenMalformed {
                details: format!("{other:?}"),
            },
        })
    }

    /// Validate a token and parse its subject into a user id
    ///
    /// # Errors
    ///
    /// Returns a generic unauthorized [`AppError`]; the validation detail is
    /// logged but never surfaced to the caller.
    pub fn resolve_user_id(&self, token: &str) -> AppResult<Uuid> {
        let claims = self.validate_token(token).map_err(|e| {
            tracing::debug!("session token rejected: {e}");
            AppError::auth_invalid("Invalid or expired session")
        })?;

        Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid or expired session"))
    }
}
