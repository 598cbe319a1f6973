// ABOUTME: Recipe route handlers for search, save, list, and delete
// ABOUTME: Authenticated endpoints delegating to the aggregator and the recipe store

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe routes
//!
//! Search endpoints proxy through the aggregator; persistence endpoints
//! operate strictly on the authenticated user's own records. Saved snapshot
//! content is stored opaquely and parsed back to JSON only when shaping the
//! response.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::SaveRecipeRequest;
use crate::errors::{AppError, AppResult};
use crate::models::{SavedRecipe, SearchType, User};
use crate::routes::ValidatedJson;
use crate::server::ServerResources;

/// Ingredient search request
#[derive(Debug, Deserialize)]
pub struct IngredientSearchRequest {
    /// Ingredient names; blank entries are discarded
    pub ingredients: Vec<String>,
}

/// Name search request
#[derive(Debug, Deserialize)]
pub struct NameSearchRequest {
    /// Recipe name to search for
    pub name: String,
}

/// Save request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeBody {
    /// Display title
    pub title: String,
    /// Recipe snapshot as returned by a search endpoint
    pub content: Value,
    /// Which search flow produced the snapshot
    pub search_type: SearchType,
    /// Optional 1-5 star rating
    #[serde(default)]
    pub rating: Option<i32>,
}

/// A saved recipe as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeResponse {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Stored snapshot, parsed back into JSON
    pub content: Value,
    /// Which search flow produced the snapshot
    pub search_type: SearchType,
    /// Optional 1-5 star rating
    pub rating: Option<i32>,
    /// Save timestamp
    pub created_at: String,
}

impl From<SavedRecipe> for SavedRecipeResponse {
    fn from(recipe: SavedRecipe) -> Self {
        // Stored content predating any format change still renders as a
        // plain string instead of failing the whole listing.
        let content = serde_json::from_str(&recipe.content)
            .unwrap_or_else(|_| Value::String(recipe.content.clone()));
        Self {
            id: recipe.id.to_string(),
            title: recipe.title,
            content,
            search_type: recipe.search_type,
            rating: recipe.rating,
            created_at: recipe.created_at.to_rfc3339(),
        }
    }
}

/// Recipe endpoints under `/api/recipe`
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Build the recipe router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipe/by-ingredients",
                post(Self::handle_by_ingredients),
            )
            .route("/api/recipe/by-name", post(Self::handle_by_name))
            .route("/api/recipe/save", post(Self::handle_save))
            .route("/api/recipe/saved", get(Self::handle_list_saved))
            .route("/api/recipe/delete/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn authenticate(
        headers: &axum::http::HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> AppResult<User> {
        resources
            .auth_middleware
            .authenticate_request_with_headers(headers)
            .await
    }

    /// Handle POST /api/recipe/by-ingredients
    async fn handle_by_ingredients(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        ValidatedJson(request): ValidatedJson<IngredientSearchRequest>,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        let results = resources
            .aggregator
            .search_by_ingredients(&request.ingredients)
            .await?;
        Ok(Json(results).into_response())
    }

    /// Handle POST /api/recipe/by-name
    async fn handle_by_name(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        ValidatedJson(request): ValidatedJson<NameSearchRequest>,
    ) -> Result<Response, AppError> {
        Self::authenticate(&headers, &resources).await?;

        let recipe = resources.aggregator.search_by_name(&request.name).await?;
        Ok(Json(recipe).into_response())
    }

    /// Handle POST /api/recipe/save
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        ValidatedJson(body): ValidatedJson<SaveRecipeBody>,
    ) -> Result<Response, AppError> {
        let user = Self::authenticate(&headers, &resources).await?;

        let saved = resources
            .database
            .save_recipe(
                user.id,
                SaveRecipeRequest {
                    title: body.title,
                    content: body.content,
                    search_type: body.search_type,
                    rating: body.rating,
                },
            )
            .await?;

        Ok((
            StatusCode::CREATED,
            Json(json!({ "recipe": SavedRecipeResponse::from(saved) })),
        )
            .into_response())
    }

    /// Handle GET /api/recipe/saved
    async fn handle_list_saved(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let user = Self::authenticate(&headers, &resources).await?;

        let recipes = resources.database.list_saved_recipes(user.id).await?;
        let recipes: Vec<SavedRecipeResponse> =
            recipes.into_iter().map(Into::into).collect();
        Ok(Json(json!({ "recipes": recipes })).into_response())
    }

    /// Handle DELETE /api/recipe/delete/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user = Self::authenticate(&headers, &resources).await?;

        let recipe_id = Uuid::parse_str(&id)
            .map_err(|_| AppError::invalid_input("Invalid recipe id"))?;
        let deleted = resources
            .database
            .delete_saved_recipe(user.id, recipe_id)
            .await?;

        Ok(Json(json!({ "recipe": SavedRecipeResponse::from(deleted) })).into_response())
    }
}
