//
//  keycloak-admin
//  api/resource/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Realm roles: `/admin/realms/{realm}/roles`.
//!
//! Roles are addressed by name rather than id.

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{Role, RoleCollection, UserCollection};

/// Operations on the realm roles of a realm.
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    client: &'a AdminClient,
}

impl<'a> Roles<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn all(&self, realm: &str, criteria: Option<&Criteria>) -> Result<RoleCollection> {
        self.client
            .get(&["realms", realm, "roles"], criteria)
            .await
    }

    pub async fn get(&self, realm: &str, role_name: &str) -> Result<Role> {
        self.client
            .get(&["realms", realm, "roles", role_name], None)
            .await
    }

    /// Creates a role and returns its name.
    pub async fn create(&self, realm: &str, role: &Role) -> Result<String> {
        self.client
            .create(&["realms", realm, "roles"], role)
            .await
    }

    pub async fn update(&self, realm: &str, role_name: &str, role: &Role) -> Result<()> {
        self.client
            .put(&["realms", realm, "roles", role_name], None, role)
            .await
    }

    pub async fn delete(&self, realm: &str, role_name: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "roles", role_name])
            .await
    }

    /// Lists the users the role is mapped to directly.
    pub async fn users(
        &self,
        realm: &str,
        role_name: &str,
        criteria: Option<&Criteria>,
    ) -> Result<UserCollection> {
        self.client
            .get(&["realms", realm, "roles", role_name, "users"], criteria)
            .await
    }
}
