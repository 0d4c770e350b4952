//! Logged-out token registry
//!
//! Tokens are stateless, so logout records the token id until the token
//! would have expired anyway. Entries past their expiry are purged on
//! every revocation.

use dashmap::DashMap;

/// Revoked token ids mapped to their expiry (unix seconds)
#[derive(Debug, Default)]
pub struct TokenRevocations {
    revoked: DashMap<String, i64>,
}

impl TokenRevocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token until `expires_at`
    pub fn revoke(&self, jti: &str, expires_at: i64) {
        self.purge_expired(chrono::Utc::now().timestamp());
        self.revoked.insert(jti.to_string(), expires_at);
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.contains_key(jti)
    }

    /// Drop entries whose token has expired by `now`
    pub fn purge_expired(&self, now: i64) {
        self.revoked.retain(|_, expires_at| *expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }
}
