//
//  keycloak-admin
//  api/resource/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User management: `/admin/realms/{realm}/users`.
//!
//! # Example
//!
//! ```rust,no_run
//! use keycloak_admin::representation::User;
//! use keycloak_admin::{Criteria, Keycloak};
//!
//! # async fn run() -> keycloak_admin::Result<()> {
//! let keycloak = Keycloak::new("http://keycloak:8080", "admin", "admin")?;
//!
//! let id = keycloak
//!     .users()
//!     .create("master", &User::default().with_username("jdoe").with_enabled(true))
//!     .await?;
//!
//! let found = keycloak
//!     .users()
//!     .search("master", &Criteria::new().username("jdoe").exact(true))
//!     .await?;
//! assert_eq!(found.first()?.id.as_deref(), Some(id.as_str()));
//! # Ok(())
//! # }
//! ```

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{
    Credential, CredentialCollection, GroupCollection, RoleCollection, User, UserCollection,
    UserSessionCollection,
};

/// Operations on the users of a realm.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a AdminClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists users, optionally filtered.
    pub async fn all(&self, realm: &str, criteria: Option<&Criteria>) -> Result<UserCollection> {
        self.client
            .get(&["realms", realm, "users"], criteria)
            .await
    }

    /// Lists the users matching `criteria`.
    ///
    /// Combine a field filter with [`Criteria::exact`] to look up a single
    /// user by username or email.
    pub async fn search(&self, realm: &str, criteria: &Criteria) -> Result<UserCollection> {
        self.all(realm, Some(criteria)).await
    }

    /// Counts users, optionally filtered.
    pub async fn count(&self, realm: &str, criteria: Option<&Criteria>) -> Result<u64> {
        self.client
            .get(&["realms", realm, "users", "count"], criteria)
            .await
    }

    /// Fetches one user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if no user has this id.
    pub async fn get(&self, realm: &str, user_id: &str) -> Result<User> {
        self.client
            .get(&["realms", realm, "users", user_id], None)
            .await
    }

    /// Creates a user and returns its id.
    pub async fn create(&self, realm: &str, user: &User) -> Result<String> {
        let id = self
            .client
            .create(&["realms", realm, "users"], user)
            .await?;
        tracing::debug!(realm, user_id = %id, "Created user");
        Ok(id)
    }

    /// Replaces the attributes set on `user`; unset attributes are left unchanged.
    pub async fn update(&self, realm: &str, user_id: &str, user: &User) -> Result<()> {
        self.client
            .put(&["realms", realm, "users", user_id], None, user)
            .await
    }

    pub async fn delete(&self, realm: &str, user_id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "users", user_id])
            .await
    }

    /// Adds the user to a group.
    pub async fn join_group(&self, realm: &str, user_id: &str, group_id: &str) -> Result<()> {
        self.client
            .put_empty(&["realms", realm, "users", user_id, "groups", group_id])
            .await
    }

    /// Removes the user from a group.
    pub async fn leave_group(&self, realm: &str, user_id: &str, group_id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "users", user_id, "groups", group_id])
            .await
    }

    /// Lists the groups the user is a direct member of.
    pub async fn retrieve_groups(
        &self,
        realm: &str,
        user_id: &str,
        criteria: Option<&Criteria>,
    ) -> Result<GroupCollection> {
        self.client
            .get(&["realms", realm, "users", user_id, "groups"], criteria)
            .await
    }

    /// Lists the realm roles mapped directly to the user.
    pub async fn retrieve_realm_roles(&self, realm: &str, user_id: &str) -> Result<RoleCollection> {
        self.client
            .get(
                &["realms", realm, "users", user_id, "role-mappings", "realm"],
                None,
            )
            .await
    }

    /// Lists the realm roles that can still be mapped to the user.
    pub async fn retrieve_available_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
    ) -> Result<RoleCollection> {
        self.client
            .get(
                &["realms", realm, "users", user_id, "role-mappings", "realm", "available"],
                None,
            )
            .await
    }

    /// Maps realm roles to the user.
    ///
    /// Each role needs at least its `id` and `name`, as returned by
    /// [`Roles::get`](super::Roles::get).
    pub async fn add_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
        roles: &RoleCollection,
    ) -> Result<()> {
        self.client
            .post_json(
                &["realms", realm, "users", user_id, "role-mappings", "realm"],
                roles,
            )
            .await
    }

    /// Removes realm role mappings from the user.
    pub async fn remove_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
        roles: &RoleCollection,
    ) -> Result<()> {
        self.client
            .delete_json(
                &["realms", realm, "users", user_id, "role-mappings", "realm"],
                roles,
            )
            .await
    }

    /// Sends the user an email asking them to perform `actions`
    /// (e.g. `UPDATE_PASSWORD`, `VERIFY_EMAIL`).
    ///
    /// `client_id`, `redirect_uri` and `lifespan` (seconds) are passed as
    /// criteria.
    pub async fn execute_actions_email(
        &self,
        realm: &str,
        user_id: &str,
        actions: &[&str],
        criteria: Option<&Criteria>,
    ) -> Result<()> {
        self.client
            .put(
                &["realms", realm, "users", user_id, "execute-actions-email"],
                criteria,
                actions,
            )
            .await
    }

    /// Lists the user's stored credentials. Secret data is never returned.
    pub async fn credentials(&self, realm: &str, user_id: &str) -> Result<CredentialCollection> {
        self.client
            .get(&["realms", realm, "users", user_id, "credentials"], None)
            .await
    }

    /// Sets a new password.
    ///
    /// ```rust,no_run
    /// # use keycloak_admin::Keycloak;
    /// # use keycloak_admin::representation::Credential;
    /// # async fn run(keycloak: Keycloak, user_id: &str) -> keycloak_admin::Result<()> {
    /// keycloak
    ///     .users()
    ///     .reset_password("master", user_id, &Credential::password("n3w-pass", true))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn reset_password(
        &self,
        realm: &str,
        user_id: &str,
        credential: &Credential,
    ) -> Result<()> {
        self.client
            .put(
                &["realms", realm, "users", user_id, "reset-password"],
                None,
                credential,
            )
            .await
    }

    /// Lists the user's active sessions.
    pub async fn sessions(&self, realm: &str, user_id: &str) -> Result<UserSessionCollection> {
        self.client
            .get(&["realms", realm, "users", user_id, "sessions"], None)
            .await
    }

    /// Ends all of the user's sessions.
    pub async fn logout(&self, realm: &str, user_id: &str) -> Result<()> {
        self.client
            .post_empty(&["realms", realm, "users", user_id, "logout"])
            .await
    }
}
