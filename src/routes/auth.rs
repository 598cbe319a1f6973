// ABOUTME: User authentication route handlers for signup, login, logout, and session info
// ABOUTME: Issues the session cookie and delegates credential checks to AuthService

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication routes
//!
//! Signup and login mint a session token and attach it as an HttpOnly
//! cookie. Unknown email and wrong password produce the identical error so
//! responses never reveal whether an account exists.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::AuthManager;
use crate::constants::{error_messages, limits};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::routes::ValidatedJson;
use crate::security::cookies::{clear_auth_cookie, set_auth_cookie};
use crate::server::ServerResources;

/// Signup request
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    /// Login email, unique per account
    pub email: String,
    /// Name shown in the UI
    #[serde(rename = "fullname")]
    pub display_name: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// User info returned to clients; never carries the password hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// Name shown in the UI
    pub display_name: String,
    /// Account creation timestamp
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            display_name: user.display_name,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Credential operations shared by the HTTP handlers and tests
pub struct AuthService {
    database: Arc<Database>,
    auth_manager: Arc<AuthManager>,
}

impl AuthService {
    /// Create the service over the shared database and auth manager
    #[must_use]
    pub const fn new(database: Arc<Database>, auth_manager: Arc<AuthManager>) -> Self {
        Self {
            database,
            auth_manager,
        }
    }

    /// Register a new account and mint its first session token
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` on validation problems and
    /// `ResourceAlreadyExists` when the email is taken.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<(User, String)> {
        let email = request.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::invalid_input(
                error_messages::INVALID_EMAIL_FORMAT,
            ));
        }
        if request.display_name.trim().is_empty() {
            return Err(AppError::invalid_input("Display name is required"));
        }
        if request.password.len() < limits::MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(error_messages::PASSWORD_TOO_SHORT));
        }

        let manager = self.auth_manager.clone();
        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || manager.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;

        let user = User::new(email, request.display_name.trim().to_owned(), password_hash);
        self.database.create_user(&user).await?;

        let token = self.auth_manager.generate_token(user.id)?;
        Ok((user, token))
    }

    /// Verify credentials and mint a session token
    ///
    /// # Errors
    ///
    /// Fails with `AuthInvalid` carrying one fixed message for both unknown
    /// email and wrong password.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(User, String)> {
        let email = request.email.trim().to_lowercase();

        let Some(user) = self.database.get_user_by_email(&email).await? else {
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        };

        let hash = user.password_hash.clone();
        let password = request.password;
        let verified =
            tokio::task::spawn_blocking(move || AuthManager::verify_password(&password, &hash))
                .await
                .map_err(|e| {
                    AppError::internal(format!("Password verification task failed: {e}"))
                })??;

        if !verified {
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        let token = self.auth_manager.generate_token(user.id)?;
        Ok((user, token))
    }
}

/// Authentication endpoints under `/api/user`
pub struct AuthRoutes;

impl AuthRoutes {
    /// Build the auth router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user/signup", post(Self::handle_signup))
            .route("/api/user/login", post(Self::handle_login))
            .route("/api/user/logout", post(Self::handle_logout))
            .route("/api/user/me", get(Self::handle_me))
            .with_state(resources)
    }

    fn service(resources: &Arc<ServerResources>) -> AuthService {
        AuthService::new(resources.database.clone(), resources.auth_manager.clone())
    }

    fn session_response(
        resources: &Arc<ServerResources>,
        user: User,
        token: &str,
    ) -> Response {
        let mut headers = HeaderMap::new();
        set_auth_cookie(
            &mut headers,
            token,
            resources.auth_manager.session_expiry_secs(),
            &resources.config.environment,
        );
        (headers, Json(json!({ "user": UserResponse::from(user) }))).into_response()
    }

    /// Handle POST /api/user/signup
    async fn handle_signup(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<SignupRequest>,
    ) -> Result<Response, AppError> {
        let (user, token) = Self::service(&resources).signup(request).await?;
        Ok(Self::session_response(&resources, user, &token))
    }

    /// Handle POST /api/user/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<LoginRequest>,
    ) -> Result<Response, AppError> {
        let (user, token) = Self::service(&resources).login(request).await?;
        Ok(Self::session_response(&resources, user, &token))
    }

    /// Handle POST /api/user/logout
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        resources
            .auth_middleware
            .authenticate_request_with_headers(&headers)
            .await?;

        let mut response_headers = HeaderMap::new();
        clear_auth_cookie(&mut response_headers, &resources.config.environment);
        Ok((
            response_headers,
            Json(json!({ "message": "Logged out" })),
        )
            .into_response())
    }

    /// Handle GET /api/user/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = resources
            .auth_middleware
            .authenticate_request_with_headers(&headers)
            .await?;

        Ok(Json(json!({ "user": UserResponse::from(user) })).into_response())
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
