// ABOUTME: Secure cookie utilities for the HttpOnly session credential
// ABOUTME: Builds Set-Cookie headers and reads cookie values from request headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session cookie helpers.
//!
//! The session token travels in an HttpOnly cookie. In production the cookie
//! is `Secure; SameSite=None` so a browser frontend on another origin can
//! send it; in development it degrades to `SameSite=Lax` without `Secure`
//! so plain-HTTP localhost setups keep working, mirroring the behavior the
//! frontend was built against.

use http::{header, HeaderMap, HeaderValue};

use crate::config::Environment;
use crate::constants::cookies::AUTH_COOKIE;

/// `SameSite` cookie attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Sent only on same-site requests
    Strict,
    /// Sent on same-site requests and top-level navigations
    Lax,
    /// Sent cross-site; requires the `Secure` attribute
    None,
}

impl SameSite {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Builder for a hardened `Set-Cookie` header value
///
/// Defaults to `HttpOnly; Secure; SameSite=Strict; Path=/`.
#[derive(Debug, Clone)]
pub struct SecureCookieConfig {
    name: String,
    value: String,
    max_age_secs: i64,
    http_only: bool,
    secure: bool,
    same_site: SameSite,
    path: String,
}

impl SecureCookieConfig {
    /// Create a cookie with hardened defaults
    #[must_use]
    pub fn new(name: String, value: String, max_age_secs: i64) -> Self {
        Self {
            name,
            value,
            max_age_secs,
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
            path: "/".into(),
        }
    }

    /// Override the `SameSite` attribute
    #[must_use]
    pub const fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Override the `Secure` attribute
    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Render the `Set-Cookie` header value
    #[must_use]
    pub fn build(&self) -> String {
        let mut cookie = format!(
            "{}={}; Max-Age={}; Path={}; SameSite={}",
            self.name,
            self.value,
            self.max_age_secs,
            self.path,
            self.same_site.as_str()
        );
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Cookie attributes appropriate for the given deployment environment
const fn session_attributes(environment: &Environment) -> (SameSite, bool) {
    if environment.is_development() {
        (SameSite::Lax, false)
    } else {
        (SameSite::None, true)
    }
}

/// Attach the session token cookie to a response
pub fn set_auth_cookie(
    headers: &mut HeaderMap,
    token: &str,
    max_age_secs: i64,
    environment: &Environment,
) {
    let (same_site, secure) = session_attributes(environment);
    let cookie = SecureCookieConfig::new(AUTH_COOKIE.into(), token.into(), max_age_secs)
        .same_site(same_site)
        .secure(secure)
        .build();

    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Instruct the client to discard the session cookie
///
/// There is no server-side revocation list; an un-expired token presented
/// again still verifies. Clearing the cookie is the whole logout.
pub fn clear_auth_cookie(headers: &mut HeaderMap, environment: &Environment) {
    let (same_site, secure) = session_attributes(environment);
    let cookie = SecureCookieConfig::new(AUTH_COOKIE.into(), String::new(), 0)
        .same_site(same_site)
        .secure(secure)
        .build();

    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Read a cookie value from a request's `Cookie` header
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}
