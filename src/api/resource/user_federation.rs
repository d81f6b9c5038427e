//
//  keycloak-admin
//  api/resource/user_federation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User federation: external user stores such as LDAP or Kerberos.
//!
//! Providers and their mappers live under `/admin/realms/{realm}/components`
//! as [`Component`]s of type [`USER_STORAGE_PROVIDER_TYPE`] and
//! [`LDAP_STORAGE_MAPPER_TYPE`]. Synchronization is driven through
//! `/admin/realms/{realm}/user-storage`.
//!
//! # Example
//!
//! ```rust,no_run
//! use keycloak_admin::api::resource::SyncAction;
//! use keycloak_admin::Keycloak;
//!
//! # async fn run(keycloak: Keycloak) -> keycloak_admin::Result<()> {
//! let federation = keycloak.user_federation();
//! for provider in &federation.providers("corp").await? {
//!     let id = provider.id.as_deref().unwrap_or_default();
//!     let result = federation.sync("corp", id, SyncAction::ChangedUsers).await?;
//!     println!("{}: {:?}", id, result.status);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{
    Component, ComponentCollection, SynchronizationResult, LDAP_STORAGE_MAPPER_TYPE,
    USER_STORAGE_PROVIDER_TYPE,
};

/// Which users a provider sync imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Every user of the external store.
    Full,
    /// Users changed since the last sync.
    ChangedUsers,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "triggerFullSync",
            Self::ChangedUsers => "triggerChangedUsersSync",
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a mapper sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// From the external store into Keycloak.
    FedToKeycloak,
    /// From Keycloak into the external store.
    KeycloakToFed,
}

impl SyncDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FedToKeycloak => "fedToKeycloak",
            Self::KeycloakToFed => "keycloakToFed",
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations on the user federation providers of a realm.
#[derive(Debug, Clone, Copy)]
pub struct UserFederation<'a> {
    client: &'a AdminClient,
}

impl<'a> UserFederation<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists the realm's user storage providers.
    pub async fn providers(&self, realm: &str) -> Result<ComponentCollection> {
        let criteria = Criteria::new().with("type", USER_STORAGE_PROVIDER_TYPE);
        self.client
            .get(&["realms", realm, "components"], Some(&criteria))
            .await
    }

    pub async fn get_provider(&self, realm: &str, provider_id: &str) -> Result<Component> {
        self.client
            .get(&["realms", realm, "components", provider_id], None)
            .await
    }

    /// Registers a provider and returns its id.
    ///
    /// `provider_type` should be [`USER_STORAGE_PROVIDER_TYPE`] and
    /// `parent_id` the realm id.
    pub async fn create_provider(&self, realm: &str, provider: &Component) -> Result<String> {
        self.client
            .create(&["realms", realm, "components"], provider)
            .await
    }

    pub async fn update_provider(
        &self,
        realm: &str,
        provider_id: &str,
        provider: &Component,
    ) -> Result<()> {
        self.client
            .put(&["realms", realm, "components", provider_id], None, provider)
            .await
    }

    /// Removes a provider together with its mappers and imported users.
    pub async fn delete_provider(&self, realm: &str, provider_id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "components", provider_id])
            .await
    }

    /// Lists the LDAP mappers attached to a provider.
    pub async fn mappers(&self, realm: &str, provider_id: &str) -> Result<ComponentCollection> {
        let criteria = Criteria::new()
            .with("parent", provider_id)
            .with("type", LDAP_STORAGE_MAPPER_TYPE);
        self.client
            .get(&["realms", realm, "components"], Some(&criteria))
            .await
    }

    /// Imports users from the external store.
    pub async fn sync(
        &self,
        realm: &str,
        provider_id: &str,
        action: SyncAction,
    ) -> Result<SynchronizationResult> {
        let criteria = Criteria::new().with("action", action);
        let result: SynchronizationResult = self
            .client
            .post(&["realms", realm, "user-storage", provider_id, "sync"], Some(&criteria))
            .await?;
        tracing::debug!(realm, provider_id, %action, added = result.added, updated = result.updated, "User federation sync finished");
        Ok(result)
    }

    /// Runs one mapper in the given direction.
    pub async fn sync_mapper(
        &self,
        realm: &str,
        provider_id: &str,
        mapper_id: &str,
        direction: SyncDirection,
    ) -> Result<SynchronizationResult> {
        let criteria = Criteria::new().with("direction", direction);
        self.client
            .post(
                &["realms", realm, "user-storage", provider_id, "mappers", mapper_id, "sync"],
                Some(&criteria),
            )
            .await
    }

    /// Deletes every user imported from the provider.
    pub async fn remove_imported_users(&self, realm: &str, provider_id: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "user-storage", provider_id, "remove-imported-users"])
            .await
    }

    /// Keeps imported users but detaches them from the provider.
    pub async fn unlink_users(&self, realm: &str, provider_id: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "user-storage", provider_id, "unlink-users"])
            .await
    }
}
