// ABOUTME: Request authentication middleware resolving the session user
// ABOUTME: Reads the session cookie or a Bearer header and loads the user record

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use http::HeaderMap;
use tracing::debug;

use crate::auth::AuthManager;
use crate::constants::cookies::AUTH_COOKIE;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::security::cookies::get_cookie_value;

/// Resolves an authenticated [`User`] from request headers
///
/// The session cookie is the primary credential; an `Authorization: Bearer`
/// header is accepted as a fallback for non-browser clients. Every failure
/// past the missing-credential case collapses to the same `AuthInvalid`
/// response so callers cannot distinguish expired tokens from deleted
/// accounts.
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: Arc<AuthManager>,
    database: Arc<Database>,
}

impl AuthMiddleware {
    /// Create the middleware over the shared auth manager and database
    #[must_use]
    pub const fn new(auth_manager: Arc<AuthManager>, database: Arc<Database>) -> Self {
        Self {
            auth_manager,
            database,
        }
    }

    /// Authenticate a request from its headers
    ///
    /// # Errors
    ///
    /// Fails with `AuthRequired` when no credential is present and
    /// `AuthInvalid` when the token does not verify or the user no longer
    /// exists.
    pub async fn authenticate_request_with_headers(&self, headers: &HeaderMap) -> AppResult<User> {
        let token = extract_token(headers).ok_or_else(AppError::auth_required)?;

        let user_id = self.auth_manager.resolve_user_id(&token)?;

        match self.database.get_user(user_id).await? {
            Some(user) => Ok(user),
            None => {
                debug!(user_id = %user_id, "Valid token for a user that no longer exists");
                Err(AppError::auth_invalid("Invalid or expired session"))
            }
        }
    }
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = get_cookie_value(headers, AUTH_COOKIE) {
        return Some(token);
    }

    headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}
