// ABOUTME: Recipe search aggregation over the upstream provider
// ABOUTME: Fans out per-candidate detail fetches and tolerates partial failure

// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Search Aggregation
//!
//! Two search flows sit on top of the [`RecipeProvider`] trait:
//!
//! - **By ingredients**: one candidate search, then a concurrent detail
//!   fetch per candidate. A failed detail fetch degrades that one entry to
//!   an error marker instead of failing the whole response.
//! - **By name**: one fuzzy search capped to a single result, then a detail
//!   fetch that must succeed.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::constants::error_messages::ENRICHMENT_FAILED;
use crate::constants::limits::{INGREDIENT_SEARCH_RESULTS, NAME_SEARCH_RESULTS};
use crate::errors::{AppError, AppResult};
use crate::providers::{CandidateSummary, Ingredient, RecipeDetails, RecipeProvider};

/// A search candidate merged with its detail payload
///
/// When the detail fetch failed, `error` carries the marker and the detail
/// fields stay empty; the candidate's own fields are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCandidate {
    /// Provider-assigned recipe id
    pub id: i64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ingredient objects from the detail payload, provider fields intact
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Preparation instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// HTML summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Link to the original publication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Error marker when the detail fetch for this candidate failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Remaining provider fields from the candidate search
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a by-name search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRecipe {
    /// Recipe title from the detail payload
    pub title: String,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ingredient objects, provider fields intact
    pub ingredients: Vec<Ingredient>,
    /// Preparation instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Orchestrates search and enrichment against the configured provider
pub struct RecipeAggregator {
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeAggregator {
    /// Create an aggregator over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    /// Search recipes by a list of ingredient names
    ///
    /// Every returned candidate is enriched concurrently; results keep the
    /// provider's ranking order regardless of which detail fetch finishes
    /// first.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` when no non-empty ingredient remains after
    /// trimming, and with `ExternalServiceError` when the candidate search
    /// itself fails. Individual detail failures do not error.
    pub async fn search_by_ingredients(&self, raw: &[String]) -> AppResult<Vec<EnrichedCandidate>> {
        let ingredients: Vec<&str> = raw
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(AppError::invalid_input("At least one ingredient is required"));
        }

        let candidates = self
            .provider
            .find_by_ingredients(&ingredients.join(","), INGREDIENT_SEARCH_RESULTS)
            .await?;

        let enrichments = join_all(
            candidates
                .iter()
                .map(|candidate| self.provider.recipe_information(candidate.id)),
        )
        .await;

        Ok(candidates
            .into_iter()
            .zip(enrichments)
            .map(|(candidate, details)| match details {
                Ok(details) => enrich(candidate, &details),
                Err(e) => {
                    warn!(
                        recipe_id = candidate.id,
                        error = %e,
                        "Detail fetch failed, degrading candidate"
                    );
                    degrade(candidate)
                }
            })
            .collect())
    }

    /// Search for a single recipe by name
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` for a blank query, `ResourceNotFound` when
    /// the search matches nothing, and `ExternalServiceError` when either
    /// upstream call fails.
    pub async fn search_by_name(&self, query: &str) -> AppResult<NamedRecipe> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("A recipe name is required"));
        }

        let candidates = self
            .provider
            .complex_search(query, NAME_SEARCH_RESULTS)
            .await?;
        let Some(candidate) = candidates.into_iter().next() else {
            return Err(AppError::not_found("Recipe"));
        };

        let details = self.provider.recipe_information(candidate.id).await?;

        Ok(NamedRecipe {
            title: details.title,
            image: details.image.or(candidate.image),
            ingredients: details.extended_ingredients,
            instructions: details.instructions,
        })
    }
}

fn enrich(candidate: CandidateSummary, details: &RecipeDetails) -> EnrichedCandidate {
    EnrichedCandidate {
        id: candidate.id,
        title: candidate.title,
        image: candidate.image,
        ingredients: details.extended_ingredients.clone(),
        instructions: details.instructions.clone(),
        summary: details.summary.clone(),
        source_url: details.source_url.clone(),
        error: None,
        extra: candidate.extra,
    }
}

fn degrade(candidate: CandidateSummary) -> EnrichedCandidate {
    EnrichedCandidate {
        id: candidate.id,
        title: candidate.title,
        image: candidate.image,
        ingredients: Vec::new(),
        instructions: None,
        summary: None,
        source_url: None,
        error: Some(ENRICHMENT_FAILED.into()),
        extra: candidate.extra,
    }
}
