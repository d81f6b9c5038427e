//
//  keycloak-admin
//  auth/storage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token storage.
//!
//! The client asks its [`TokenStorage`] for a token before every admin call
//! and saves whatever the token endpoint issues. The default
//! [`InMemoryTokenStorage`] keeps one token per client; implement the trait to
//! share tokens across processes (a cache, a file, a secret store).

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccessToken;

/// Persistence for issued access tokens.
///
/// Implementations must be safe to call concurrently; the client may be
/// shared between tasks.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Returns the stored token, expired or not.
    async fn retrieve(&self) -> Option<AccessToken>;

    /// Replaces the stored token.
    async fn save(&self, token: AccessToken);

    /// Forgets the stored token.
    async fn clear(&self);
}

/// Process-local token storage.
#[derive(Debug, Default)]
pub struct InMemoryTokenStorage {
    token: RwLock<Option<AccessToken>>,
}

impl InMemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with a token.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn retrieve(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    async fn save(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_save_retrieve_clear() {
        tokio_test::block_on(async {
            let storage = InMemoryTokenStorage::new();
            assert!(storage.retrieve().await.is_none());

            storage
                .save(AccessToken::new("abc", Utc::now() + Duration::minutes(1)))
                .await;
            assert_eq!(storage.retrieve().await.map(|t| t.token).as_deref(), Some("abc"));

            storage.clear().await;
            assert!(storage.retrieve().await.is_none());
        });
    }

    #[test]
    fn test_with_token_is_seeded() {
        let storage = InMemoryTokenStorage::with_token(AccessToken::new("seed", Utc::now()));
        let token = tokio_test::block_on(storage.retrieve());
        assert_eq!(token.map(|t| t.token).as_deref(), Some("seed"));
    }
}
