//
//  keycloak-admin
//  api/resource/clients.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! OIDC/SAML clients: `/admin/realms/{realm}/clients`.
//!
//! Clients are addressed by their internal id, not their `clientId`. Use
//! [`Criteria::client_id`] with [`Clients::all`] to resolve one.
//!
//! ```rust,no_run
//! # use keycloak_admin::{Criteria, Keycloak};
//! # async fn run(keycloak: Keycloak) -> keycloak_admin::Result<()> {
//! let clients = keycloak
//!     .clients()
//!     .all("master", Some(&Criteria::new().client_id("admin-cli")))
//!     .await?;
//! let id = clients.first()?.id.clone().unwrap_or_default();
//! # Ok(())
//! # }
//! ```

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{Client, ClientCollection, Credential, UserSessionCollection};

/// Operations on the clients of a realm.
#[derive(Debug, Clone, Copy)]
pub struct Clients<'a> {
    client: &'a AdminClient,
}

impl<'a> Clients<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn all(&self, realm: &str, criteria: Option<&Criteria>) -> Result<ClientCollection> {
        self.client
            .get(&["realms", realm, "clients"], criteria)
            .await
    }

    pub async fn get(&self, realm: &str, id: &str) -> Result<Client> {
        self.client
            .get(&["realms", realm, "clients", id], None)
            .await
    }

    /// Creates a client and returns its internal id.
    pub async fn create(&self, realm: &str, client: &Client) -> Result<String> {
        self.client
            .create(&["realms", realm, "clients"], client)
            .await
    }

    pub async fn update(&self, realm: &str, id: &str, client: &Client) -> Result<()> {
        self.client
            .put(&["realms", realm, "clients", id], None, client)
            .await
    }

    pub async fn delete(&self, realm: &str, id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "clients", id])
            .await
    }

    /// Returns the secret of a confidential client.
    pub async fn client_secret(&self, realm: &str, id: &str) -> Result<Credential> {
        self.client
            .get(&["realms", realm, "clients", id, "client-secret"], None)
            .await
    }

    /// Generates a new secret, invalidating the old one.
    pub async fn regenerate_secret(&self, realm: &str, id: &str) -> Result<Credential> {
        self.client
            .post(&["realms", realm, "clients", id, "client-secret"], None)
            .await
    }

    /// Lists the user sessions associated with the client.
    pub async fn user_sessions(
        &self,
        realm: &str,
        id: &str,
        criteria: Option<&Criteria>,
    ) -> Result<UserSessionCollection> {
        self.client
            .get(&["realms", realm, "clients", id, "user-sessions"], criteria)
            .await
    }
}
