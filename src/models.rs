// ABOUTME: Core domain models for users and saved recipes
// ABOUTME: User identity, SavedRecipe snapshot, and SearchType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain models shared across the database, service, and route layers.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A registered user identity
///
/// Created once at signup and never mutated afterwards apart from
/// timestamps. The password hash never leaves the server; response types in
/// the route layer expose only the public fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Email address, unique across all users, stored lowercased
    pub email: String,
    /// Display name shown in the UI
    pub display_name: String,
    /// Bcrypt hash of the user's password
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and current timestamps
    #[must_use]
    pub fn new(email: String, display_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Which search flow produced a saved recipe snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Saved from an ingredient-list search result
    Ingredient,
    /// Saved from a name search result
    Name,
}

impl SearchType {
    /// Convert to the database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Name => "name",
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(Self::Ingredient),
            "name" => Ok(Self::Name),
            _ => Err(AppError::invalid_input(format!(
                "Invalid search type: {s}"
            ))),
        }
    }
}

/// A recipe snapshot saved by a user
///
/// `content` is the serialized form of whatever the upstream provider
/// returned at save time. The provider's response shape is not contractually
/// fixed, so it is stored verbatim as an opaque string and deserialized only
/// when presented back to the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Unique identifier
    pub id: Uuid,
    /// Display title chosen at save time
    pub title: String,
    /// Opaque serialized recipe snapshot
    pub content: String,
    /// Owning user; immutable after creation
    pub owner_id: Uuid,
    /// Search flow that produced this snapshot
    pub search_type: SearchType,
    /// Optional 1-5 star rating
    pub rating: Option<i32>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
