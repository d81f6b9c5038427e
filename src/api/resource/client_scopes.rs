//
//  keycloak-admin
//  api/resource/client_scopes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::AdminClient;
use crate::api::common::Result;
use crate::representation::{ClientScope, ClientScopeCollection};

/// Operations on the client scopes of a realm.
#[derive(Debug, Clone, Copy)]
pub struct ClientScopes<'a> {
    client: &'a AdminClient,
}

impl<'a> ClientScopes<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn all(&self, realm: &str) -> Result<ClientScopeCollection> {
        self.client
            .get(&["realms", realm, "client-scopes"], None)
            .await
    }

    pub async fn get(&self, realm: &str, id: &str) -> Result<ClientScope> {
        self.client
            .get(&["realms", realm, "client-scopes", id], None)
            .await
    }

    pub async fn create(&self, realm: &str, scope: &ClientScope) -> Result<String> {
        self.client
            .create(&["realms", realm, "client-scopes"], scope)
            .await
    }

    pub async fn update(&self, realm: &str, id: &str, scope: &ClientScope) -> Result<()> {
        self.client
            .put(&["realms", realm, "client-scopes", id], None, scope)
            .await
    }

    pub async fn delete(&self, realm: &str, id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "client-scopes", id])
            .await
    }
}
