//
//  keycloak-admin
//  keycloak.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The [`Keycloak`] facade, entry point to every resource.

use std::sync::Arc;

use url::Url;

use crate::api::client::AdminClient;
use crate::api::common::Result;
use crate::api::resource::{
    AttackDetection, ClientScopes, Clients, Groups, Realms, Roles, ServerInfoResource,
    UserFederation, Users,
};
use crate::auth::TokenStorage;
use crate::config::KeycloakConfig;

/// A connection to one Keycloak server.
///
/// Holds the base URL and admin credentials; each accessor returns a
/// resource handle borrowing the shared HTTP client. Cloning is cheap and
/// clones share the connection pool and cached token, so a `Keycloak` can be
/// handed to many tasks.
///
/// # Example
///
/// ```rust,no_run
/// use keycloak_admin::{Criteria, Keycloak};
///
/// #[tokio::main]
/// async fn main() -> keycloak_admin::Result<()> {
///     let keycloak = Keycloak::new("http://keycloak:8080", "admin", "admin")?;
///
///     println!("Keycloak {}", keycloak.server_version().await?.unwrap_or_default());
///
///     let users = keycloak
///         .users()
///         .all("master", Some(&Criteria::new().max(10)))
///         .await?;
///     for user in &users {
///         println!("{}", user.username.as_deref().unwrap_or("-"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Keycloak {
    client: AdminClient,
}

impl Keycloak {
    /// Connects with an admin username and password through `admin-cli` in
    /// the `master` realm.
    ///
    /// No request is made until the first resource call.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(&KeycloakConfig::new(base_url, username, password))
    }

    pub fn from_config(config: &KeycloakConfig) -> Result<Self> {
        Ok(Self {
            client: AdminClient::from_config(config)?,
        })
    }

    /// Keeps tokens in `storage` instead of process memory.
    #[must_use]
    pub fn with_token_storage(self, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            client: self.client.with_token_storage(storage),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// The underlying HTTP client, for endpoints without a resource type.
    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.client)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.client)
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(&self.client)
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients::new(&self.client)
    }

    pub fn client_scopes(&self) -> ClientScopes<'_> {
        ClientScopes::new(&self.client)
    }

    pub fn realms(&self) -> Realms<'_> {
        Realms::new(&self.client)
    }

    pub fn attack_detection(&self) -> AttackDetection<'_> {
        AttackDetection::new(&self.client)
    }

    pub fn server_info(&self) -> ServerInfoResource<'_> {
        ServerInfoResource::new(&self.client)
    }

    pub fn user_federation(&self) -> UserFederation<'_> {
        UserFederation::new(&self.client)
    }

    /// Returns the server's version, e.g. `26.0.5`.
    pub async fn server_version(&self) -> Result<Option<String>> {
        let info = self.server_info().get().await?;
        Ok(info.version().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn test_facade_is_shareable() {
        assert_send_sync::<Keycloak>();
    }

    #[test]
    fn test_new_keeps_base_url() {
        let keycloak = Keycloak::new("http://keycloak:8080", "admin", "admin").unwrap();
        assert_eq!(keycloak.base_url().as_str(), "http://keycloak:8080/");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = Keycloak::new("not a url", "admin", "admin");
        assert!(matches!(result, Err(crate::Error::InvalidUrl(_))));
    }
}
