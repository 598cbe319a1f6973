// ABOUTME: End-to-end HTTP tests over the composed axum router
// ABOUTME: Exercises signup, login, session cookie, search, and saved-recipe endpoints

// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Request, StatusCode};
use recipe_vault::auth::AuthManager;
use recipe_vault::config::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, ProviderConfig, ServerConfig,
    DEFAULT_PROVIDER_BASE_URL,
};
use recipe_vault::database::Database;
use recipe_vault::errors::{AppResult, AppError};
use recipe_vault::providers::{CandidateSummary, Ingredient, RecipeDetails, RecipeProvider};
use recipe_vault::server::{self, ServerResources};
use serde_json::{json, Value};
use tower::ServiceExt;

struct CannedProvider;

#[async_trait]
impl RecipeProvider for CannedProvider {
    async fn find_by_ingredients(
        &self,
        _ingredients: &str,
        _number: u32,
    ) -> AppResult<Vec<CandidateSummary>> {
        Ok(vec![CandidateSummary {
            id: 42,
            title: "Garlic Pasta".into(),
            image: None,
            extra: serde_json::Map::new(),
        }])
    }

    async fn complex_search(
        &self,
        query: &str,
        _number: u32,
    ) -> AppResult<Vec<CandidateSummary>> {
        if query == "unobtainium" {
            return Ok(vec![]);
        }
        Ok(vec![CandidateSummary {
            id: 42,
            title: "Garlic Pasta".into(),
            image: None,
            extra: serde_json::Map::new(),
        }])
    }

    async fn recipe_information(&self, id: i64) -> AppResult<RecipeDetails> {
        if id != 42 {
            return Err(AppError::external_service("canned", "unknown id"));
        }
        let mut extra = serde_json::Map::new();
        extra.insert("aisle".into(), json!("Pasta and Rice"));
        Ok(RecipeDetails {
            title: "Garlic Pasta".into(),
            image: None,
            summary: Some("Pasta with garlic.".into()),
            instructions: Some("Boil. Fry. Combine.".into()),
            source_url: None,
            extended_ingredients: vec![Ingredient {
                original: "8 oz spaghetti".into(),
                extra,
            }],
        })
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Development,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        auth: AuthConfig {
            jwt_secret: "test-secret".into(),
            session_expiry_days: 7,
        },
        provider: ProviderConfig {
            api_key: "test-key".into(),
            base_url: DEFAULT_PROVIDER_BASE_URL.into(),
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

async fn build_router() -> Router {
    common::init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();
    let auth_manager = AuthManager::new(b"test-secret".to_vec());
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(CannedProvider),
        test_config(),
    ));
    server::router(resources)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request_with_cookie(method: &str, uri: &str, cookie: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign up a user and return the session cookie pair
async fn signup(router: &Router, email: &str) -> String {
    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/user/signup",
            json!({
                "email": email,
                "fullname": "Test Cook",
                "password": "longenough",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    set_cookie.split(';').next().unwrap().to_owned()
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = build_router().await;

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let router = build_router().await;

    let response = router
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_then_me() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie("GET", "/api/user/me", &cookie, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], "cook@example.com");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_sets_fresh_cookie() {
    let router = build_router().await;
    signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/user/login",
            json!({ "email": "cook@example.com", "password": "longenough" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let router = build_router().await;
    signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/user/login",
            json!({ "email": "cook@example.com", "password": "wrong-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "AUTH_INVALID");
}

#[tokio::test]
async fn test_search_requires_session() {
    let router = build_router().await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/recipe/by-ingredients",
            json!({ "ingredients": ["garlic", "pasta"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_ingredient_search_returns_enriched_results() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/by-ingredients",
            &cookie,
            Some(json!({ "ingredients": ["garlic", " pasta "] })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body[0]["id"], 42);
    // Ingredients stay structured objects so clients can read `original`
    // alongside whatever else the provider sent
    assert_eq!(body[0]["ingredients"][0]["original"], "8 oz spaghetti");
    assert_eq!(body[0]["ingredients"][0]["aisle"], "Pasta and Rice");
}

#[tokio::test]
async fn test_name_search_miss_is_not_found() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/by-name",
            &cookie,
            Some(json!({ "name": "unobtainium" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_list_delete_flow() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/save",
            &cookie,
            Some(json!({
                "title": "Garlic Pasta",
                "content": { "ingredients": ["8 oz spaghetti"] },
                "searchType": "ingredient",
                "rating": 5,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = response_json(response).await;
    let recipe_id = saved["recipe"]["id"].as_str().unwrap().to_owned();
    assert_eq!(saved["recipe"]["rating"], 5);

    let response = router
        .clone()
        .oneshot(json_request_with_cookie("GET", "/api/recipe/saved", &cookie, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = response_json(response).await;
    assert_eq!(listed["recipes"].as_array().unwrap().len(), 1);
    assert_eq!(listed["recipes"][0]["content"]["ingredients"][0], "8 oz spaghetti");

    let response = router
        .clone()
        .oneshot(json_request_with_cookie(
            "DELETE",
            &format!("/api/recipe/delete/{recipe_id}"),
            &cookie,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(json_request_with_cookie("GET", "/api/recipe/saved", &cookie, None))
        .await
        .unwrap();
    let listed = response_json(response).await;
    assert!(listed["recipes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_rejects_bad_rating() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/save",
            &cookie,
            Some(json!({
                "title": "Garlic Pasta",
                "content": {},
                "searchType": "ingredient",
                "rating": 9,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_with_missing_title_is_bad_request() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/save",
            &cookie,
            Some(json!({
                "content": { "a": 1 },
                "searchType": "name",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_save_with_unknown_search_type_is_bad_request() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/recipe/save",
            &cookie,
            Some(json!({
                "title": "Garlic Pasta",
                "content": {},
                "searchType": "magic",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_signup_with_missing_field_is_bad_request() {
    let router = build_router().await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/user/signup",
            json!({ "email": "cook@example.com", "fullname": "Test Cook" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_bad_request() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie(
            "DELETE",
            "/api/recipe/delete/not-a-uuid",
            &cookie,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let router = build_router().await;
    let cookie = signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request_with_cookie("POST", "/api/user/logout", &cookie, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_duplicate_signup_is_bad_request() {
    let router = build_router().await;
    signup(&router, "cook@example.com").await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/user/signup",
            json!({
                "email": "cook@example.com",
                "fullname": "Test Cook",
                "password": "longenough",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}
