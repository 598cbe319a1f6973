// ABOUTME: Shared HTTP client for upstream provider calls
// ABOUTME: Lazily initializes a single reqwest client with sane timeouts

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::OnceLock;
use std::time::Duration;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Get the process-wide HTTP client, creating it on first use
///
/// Sharing one client reuses connection pools and TLS sessions across all
/// upstream calls instead of paying the handshake per request.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}
