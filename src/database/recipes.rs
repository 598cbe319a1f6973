// ABOUTME: Saved-recipe store database operations scoped to an owning user
// ABOUTME: Handles save with validation, list by owner, and owner-scoped delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use serde_json::Value;
use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::constants::limits::RATING_RANGE;
use crate::errors::{AppError, AppResult};
use crate::models::{SavedRecipe, SearchType};

/// Validated input for saving a recipe snapshot
#[derive(Debug, Clone)]
pub struct SaveRecipeRequest {
    /// Display title
    pub title: String,
    /// Recipe snapshot as returned by the search flow
    pub content: Value,
    /// Which search flow produced the snapshot
    pub search_type: SearchType,
    /// Optional 1-5 star rating
    pub rating: Option<i32>,
}

impl Database {
    /// Create the saved_recipes table and indexes
    pub(super) async fn migrate_recipes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_recipes (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL REFERENCES users(id),
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                search_type TEXT NOT NULL CHECK (search_type IN ('ingredient', 'name')),
                rating INTEGER,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_saved_recipes_owner ON saved_recipes(owner_id)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Save a recipe snapshot for the given owner
    ///
    /// The snapshot is serialized into an opaque string before persisting;
    /// the provider's response shape is not inspected here.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` if the title is empty, the content is JSON
    /// null, or the rating falls outside 1-5. Fails with a database error if
    /// the insert fails (including an owner that no longer exists).
    pub async fn save_recipe(
        &self,
        owner_id: Uuid,
        request: SaveRecipeRequest,
    ) -> AppResult<SavedRecipe> {
        if request.title.trim().is_empty() {
            return Err(AppError::invalid_input("Title is required"));
        }
        if request.content.is_null() {
            return Err(AppError::invalid_input("Content is required"));
        }
        if let Some(rating) = request.rating {
            if !RATING_RANGE.contains(&rating) {
                return Err(AppError::invalid_input(format!(
                    "Rating must be between {} and {}",
                    RATING_RANGE.start(),
                    RATING_RANGE.end()
                )));
            }
        }

        let content = serde_json::to_string(&request.content)
            .map_err(|e| AppError::internal(format!("Failed to serialize recipe content: {e}")))?;

        let now = chrono::Utc::now();
        let recipe = SavedRecipe {
            id: Uuid::new_v4(),
            title: request.title,
            content,
            owner_id,
            search_type: request.search_type,
            rating: request.rating,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r"
            INSERT INTO saved_recipes (id, owner_id, title, content, search_type, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(recipe.id.to_string())
        .bind(recipe.owner_id.to_string())
        .bind(&recipe.title)
        .bind(&recipe.content)
        .bind(recipe.search_type.as_str())
        .bind(recipe.rating)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(self.pool())
        .await?;

        Ok(recipe)
    }

    /// List all recipes saved by the given owner, in creation order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_saved_recipes(&self, owner_id: Uuid) -> AppResult<Vec<SavedRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, owner_id, title, content, search_type, rating, created_at, updated_at
            FROM saved_recipes WHERE owner_id = $1 ORDER BY rowid
            ",
        )
        .bind(owner_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(Self::row_to_saved_recipe).collect()
    }

    /// Delete a saved recipe scoped to the `(id, owner)` pair
    ///
    /// A single conditional delete; an id owned by a different user fails
    /// with the same `NotFound` as an absent id, so existence of another
    /// user's record is never revealed.
    ///
    /// # Errors
    ///
    /// Fails with `ResourceNotFound` if no row matches both id and owner.
    pub async fn delete_saved_recipe(
        &self,
        owner_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<SavedRecipe> {
        let row = sqlx::query(
            r"
            DELETE FROM saved_recipes WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, title, content, search_type, rating, created_at, updated_at
            ",
        )
        .bind(recipe_id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.as_ref()
            .map(Self::row_to_saved_recipe)
            .transpose()?
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    fn row_to_saved_recipe(row: &sqlx::sqlite::SqliteRow) -> AppResult<SavedRecipe> {
        let id: String = row.get("id");
        let owner_id: String = row.get("owner_id");
        let search_type: String = row.get("search_type");

        Ok(SavedRecipe {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::database(format!("Corrupt recipe id in store: {e}")))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| AppError::database(format!("Corrupt owner id in store: {e}")))?,
            title: row.get("title"),
            content: row.get("content"),
            search_type: search_type
                .parse()
                .map_err(|_| AppError::database("Corrupt search type in store"))?,
            rating: row.get("rating"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
