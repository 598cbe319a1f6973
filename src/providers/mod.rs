// ABOUTME: Upstream recipe provider abstraction and wire types
// ABOUTME: Defines the RecipeProvider trait plus candidate and detail payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Upstream Recipe Provider
//!
//! The aggregator talks to the upstream recipe API through the
//! [`RecipeProvider`] trait so tests can substitute a scripted fake. The
//! production implementation lives in [`spoonacular`].
//!
//! Wire types deliberately keep unknown provider fields: search results and
//! details carry a flattened remainder map because the upstream response
//! shape is not contractually fixed.

pub mod http_client;
pub mod spoonacular;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppResult;

/// One ingredient line of a recipe
///
/// Only `original` (the human-readable line) is relied upon; everything else
/// the provider sends is preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Human-readable ingredient line, e.g. "2 cups flour"
    pub original: String,
    /// Remaining provider fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A terse search-result entry prior to detail enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSummary {
    /// Provider-assigned recipe id, used for the detail lookup
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL if the provider sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Remaining provider fields (used/missed ingredient lists, likes, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full detail payload for a single recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// HTML summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: Option<String>,
    /// Link to the original publication
    #[serde(default)]
    pub source_url: Option<String>,
    /// Full ingredient list
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
}

/// Abstraction over the upstream recipe search and detail API
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Search candidate recipes matching a comma-joined ingredient list
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` on any network or provider failure.
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> AppResult<Vec<CandidateSummary>>;

    /// Fuzzy search recipes by name
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` on any network or provider failure.
    async fn complex_search(&self, query: &str, number: u32)
        -> AppResult<Vec<CandidateSummary>>;

    /// Fetch the full detail payload for one recipe id
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` on any network or provider failure.
    async fn recipe_information(&self, id: i64) -> AppResult<RecipeDetails>;
}
