// ABOUTME: JSON body extractor that maps deserialization failures to InvalidInput
// ABOUTME: Keeps malformed-body responses inside the standard error envelope

// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::{async_trait, Json};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::AppError;

/// JSON body extractor for the API handlers
///
/// Axum's stock `Json` rejects missing fields and bad syntax with a
/// plain-text 422; this wrapper converts every body rejection into a 400
/// `InvalidInput` carried in the usual `{error: {code, message}}` envelope.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let detail = body_rejection_text(&rejection);
                debug!(error = %detail, "Rejected request body");
                Err(AppError::invalid_input(detail))
            }
        }
    }
}

fn body_rejection_text(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a JSON request body".to_owned()
        }
        other => other.body_text(),
    }
}
