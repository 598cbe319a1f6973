// ABOUTME: HTTP route handlers for the recipe service REST API
// ABOUTME: Re-exports the auth, recipe, and health route groups

// SPDX-License-Identifier: MIT OR Apache-2.0

//! # HTTP Routes
//!
//! Handlers are thin: they authenticate, deserialize, delegate to the
//! database or aggregator, and shape the response. Each group exposes a
//! `routes(Arc<ServerResources>)` constructor merged in [`crate::server`].

mod auth;
mod extractors;
mod health;
mod recipes;

pub use auth::{AuthRoutes, AuthService, LoginRequest, SignupRequest, UserResponse};
pub use extractors::ValidatedJson;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
