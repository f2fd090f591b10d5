//! Bearer-token check for inbound requests.

use axum::http::{HeaderMap, header::AUTHORIZATION};

use super::error::GatewayError;

/// Inbound secret, held only as its BLAKE3 digest.
#[derive(Clone)]
pub struct ApiKey(blake3::Hash);

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self(blake3::hash(secret.as_bytes()))
    }

    pub fn matches(&self, token: &str) -> bool {
        // blake3::Hash equality is constant-time
        blake3::hash(token.as_bytes()) == self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Token from `Authorization: Bearer <token>`, if present and non-empty.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|val| val.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Fails with [`GatewayError::Unauthorized`] unless the bearer token matches `key`.
pub fn authorize(key: &ApiKey, headers: &HeaderMap) -> Result<(), GatewayError> {
    match bearer_token(headers) {
        Some(token) if key.matches(token) => Ok(()),
        _ => Err(GatewayError::Unauthorized),
    }
}
