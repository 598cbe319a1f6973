// ABOUTME: Security utilities shared by the auth routes and session middleware
// ABOUTME: Currently hosts the HttpOnly session cookie helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Security helpers.

/// HttpOnly session cookie construction and parsing
pub mod cookies;
