// ABOUTME: Spoonacular implementation of the RecipeProvider trait
// ABOUTME: Issues authenticated search and detail requests against the REST API

// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::shared_client;
use super::{CandidateSummary, RecipeDetails, RecipeProvider};
use crate::config::ProviderConfig;
use crate::errors::{AppError, AppResult};

const PROVIDER_NAME: &str = "spoonacular";

/// Recipe provider backed by the Spoonacular REST API
pub struct SpoonacularProvider {
    config: ProviderConfig,
}

/// Envelope around `complexSearch` results
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<CandidateSummary>,
}

impl SpoonacularProvider {
    /// Create a provider from its configuration
    #[must_use]
    pub const fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Issue a GET against `{base_url}/{path}` with the API key attached
    ///
    /// The query parameters passed in never include the key; it is appended
    /// here so call sites cannot accidentally log it.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(path = path, "Upstream recipe API request");

        let response = shared_client()
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(PROVIDER_NAME, format!("Request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %body, "Upstream recipe API error response");
            return Err(AppError::external_service(
                PROVIDER_NAME,
                format!("API returned {status}"),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::external_service(PROVIDER_NAME, format!("Invalid response body: {e}"))
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: u32,
    ) -> AppResult<Vec<CandidateSummary>> {
        self.get_json(
            "findByIngredients",
            &[
                ("ingredients", ingredients.to_owned()),
                ("number", number.to_string()),
            ],
        )
        .await
    }

    async fn complex_search(
        &self,
        query: &str,
        number: u32,
    ) -> AppResult<Vec<CandidateSummary>> {
        let envelope: ComplexSearchResponse = self
            .get_json(
                "complexSearch",
                &[("query", query.to_owned()), ("number", number.to_string())],
            )
            .await?;
        Ok(envelope.results)
    }

    async fn recipe_information(&self, id: i64) -> AppResult<RecipeDetails> {
        self.get_json(&format!("{id}/information"), &[]).await
    }
}
