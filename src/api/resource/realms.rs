//
//  keycloak-admin
//  api/resource/realms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Realm management: `/admin/realms`.
//!
//! Besides realm CRUD this covers the admin event log, the server-side caches
//! and the realm keystore.
//!
//! # Example
//!
//! ```rust,no_run
//! use keycloak_admin::representation::Realm;
//! use keycloak_admin::Keycloak;
//!
//! # async fn run(keycloak: Keycloak) -> keycloak_admin::Result<()> {
//! let imported = keycloak
//!     .realms()
//!     .import(&Realm::default().with_realm("staging").with_enabled(true))
//!     .await?;
//! assert_eq!(imported.realm.as_deref(), Some("staging"));
//!
//! keycloak.realms().clear_user_cache("staging").await?;
//! # Ok(())
//! # }
//! ```

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{AdminEventCollection, KeysMetadata, Realm, RealmCollection};

/// Operations on realms.
#[derive(Debug, Clone, Copy)]
pub struct Realms<'a> {
    client: &'a AdminClient,
}

impl<'a> Realms<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists the realms visible to the admin account.
    pub async fn all(&self, criteria: Option<&Criteria>) -> Result<RealmCollection> {
        self.client.get(&["realms"], criteria).await
    }

    pub async fn get(&self, realm: &str) -> Result<Realm> {
        self.client.get(&["realms", realm], None).await
    }

    /// Creates a realm, including any nested content, and returns it as
    /// stored by the server.
    pub async fn import(&self, realm: &Realm) -> Result<Realm> {
        let name = self.client.create(&["realms"], realm).await?;
        tracing::debug!(realm = %name, "Imported realm");
        self.get(&name).await
    }

    /// Updates the realm settings set on `representation`.
    pub async fn update(&self, realm: &str, representation: &Realm) -> Result<()> {
        self.client
            .put(&["realms", realm], None, representation)
            .await
    }

    /// Deletes a realm and everything in it.
    pub async fn delete(&self, realm: &str) -> Result<()> {
        self.client.delete(&["realms", realm]).await
    }

    /// Lists admin events, newest first.
    ///
    /// Filters include [`Criteria::operation_types`],
    /// [`Criteria::resource_types`], [`Criteria::date_from`] and paging.
    pub async fn admin_events(
        &self,
        realm: &str,
        criteria: Option<&Criteria>,
    ) -> Result<AdminEventCollection> {
        self.client
            .get(&["realms", realm, "admin-events"], criteria)
            .await
    }

    /// Deletes all stored admin events.
    pub async fn delete_admin_events(&self, realm: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "admin-events"])
            .await
    }

    pub async fn clear_keys_cache(&self, realm: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "clear-keys-cache"])
            .await
    }

    pub async fn clear_realm_cache(&self, realm: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "clear-realm-cache"])
            .await
    }

    pub async fn clear_user_cache(&self, realm: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "clear-user-cache"])
            .await
    }

    /// Returns the realm's keys and the active key per algorithm.
    pub async fn keys(&self, realm: &str) -> Result<KeysMetadata> {
        self.client.get(&["realms", realm, "keys"], None).await
    }
}
