// ABOUTME: Main library entry point for the recipe vault service
// ABOUTME: Recipe search aggregation with authenticated persistence of saved recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Recipe Vault
//!
//! A recipe service that aggregates search results from an upstream recipe
//! API and lets authenticated users persist their own saved recipes.
//!
//! ## Features
//!
//! - **Ingredient search**: candidate search fanned out into concurrent
//!   per-recipe detail fetches, tolerating partial upstream failure
//! - **Name search**: single best-match lookup with full details
//! - **Cookie sessions**: signed JWT carried in an HttpOnly cookie
//! - **Saved recipes**: per-owner snapshots with an optional 1-5 rating
//!
//! ## Architecture
//!
//! - **Providers**: the upstream recipe API behind a trait seam
//! - **Aggregator**: search orchestration and enrichment
//! - **Database**: SQLite persistence for identities and saved recipes
//! - **Routes**: REST handlers under `/api/user` and `/api/recipe`

/// Search aggregation over the upstream provider
pub mod aggregator;
/// Password hashing and session token management
pub mod auth;
/// Server configuration from environment variables
pub mod config;
/// Shared constants for limits, cookie names, and messages
pub mod constants;
/// Database management and persistence operations
pub mod database;
/// Unified error taxonomy and HTTP error responses
pub mod errors;
/// Structured logging setup
pub mod logging;
/// HTTP middleware for authentication and CORS
pub mod middleware;
/// Core domain models
pub mod models;
/// Upstream recipe provider implementations
pub mod providers;
/// REST API route handlers
pub mod routes;
/// Cookie security utilities
pub mod security;
/// HTTP server assembly
pub mod server;
