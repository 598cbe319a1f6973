// ABOUTME: HTTP middleware for the recipe service
// ABOUTME: Request authentication and CORS configuration

// SPDX-License-Identifier: MIT OR Apache-2.0

mod auth;
mod cors;

pub use auth::AuthMiddleware;
pub use cors::setup_cors;
