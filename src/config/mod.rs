//
//  keycloak-admin
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for a Keycloak server: where it lives and which
//! credentials obtain admin tokens. Settings can be built in code or loaded
//! from a TOML file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "http://keycloak:8080"
//! username = "admin"
//! password = "admin"
//!
//! # Optional, shown with their defaults
//! client_id = "admin-cli"
//! auth_realm = "master"
//! ```
//!
//! A confidential client with a service account replaces `username` and
//! `password` with `client_secret`:
//!
//! ```toml
//! base_url = "https://sso.example.com"
//! client_id = "provisioning"
//! client_secret = "s3cr3t"
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use keycloak_admin::{Keycloak, KeycloakConfig};
//!
//! let config = KeycloakConfig::load("keycloak.toml")?;
//! let keycloak = Keycloak::from_config(&config)?;
//! # Ok::<(), keycloak_admin::Error>(())
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::common::{Error, Result};
use crate::auth::{Grant, DEFAULT_AUTH_REALM, DEFAULT_CLIENT_ID};

/// Connection settings for one Keycloak server.
///
/// # Credentials
///
/// When both `username` and `password` are set the password grant is used.
/// Otherwise `client_secret` selects the client-credentials grant for
/// `client_id`. See [`KeycloakConfig::grant`].
///
/// # Notes
///
/// - `Debug` output never contains the password or client secret
/// - Missing optional keys fall back to their defaults when deserializing
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeycloakConfig {
    /// Server root, e.g. `http://keycloak:8080` (include the `/auth` context
    /// path for servers that still use one).
    pub base_url: String,

    /// Admin username for the password grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Admin password for the password grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Client requesting the token.
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Secret for the client-credentials grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Realm whose token endpoint issues admin tokens.
    #[serde(default = "default_auth_realm")]
    pub auth_realm: String,

    /// Overall request timeout. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_auth_realm() -> String {
    DEFAULT_AUTH_REALM.to_string()
}

impl KeycloakConfig {
    /// Settings for the password grant against the `master` realm.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: Some(username.into()),
            password: Some(password.into()),
            client_id: default_client_id(),
            client_secret: None,
            auth_realm: default_auth_realm(),
            timeout_secs: None,
        }
    }

    /// Settings for the client-credentials grant of a confidential client.
    pub fn client_credentials(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            client_id: client_id.into(),
            client_secret: Some(client_secret.into()),
            auth_realm: default_auth_realm(),
            timeout_secs: None,
        }
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::Toml`] if it is not valid TOML or lacks `base_url`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    #[must_use]
    pub fn with_auth_realm(mut self, realm: impl Into<String>) -> Self {
        self.auth_realm = realm.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Returns the grant the configured credentials describe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if neither a username/password pair nor a
    /// client secret is configured.
    pub fn grant(&self) -> Result<Grant> {
        match (&self.username, &self.password, &self.client_secret) {
            (Some(username), Some(password), _) => Ok(Grant::password(username, password)),
            (_, _, Some(secret)) => Ok(Grant::client_credentials(secret)),
            (Some(_), None, None) => Err(Error::Config(
                "username is set but password is missing".to_string(),
            )),
            _ => Err(Error::Config(
                "either username and password or client_secret must be set".to_string(),
            )),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for KeycloakConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeycloakConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("auth_realm", &self.auth_realm)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_apply_to_missing_keys() {
        let config = KeycloakConfig::from_toml_str(
            r#"
            base_url = "http://keycloak:8080"
            username = "admin"
            password = "admin"
            "#,
        )
        .unwrap();

        assert_eq!(config.client_id, "admin-cli");
        assert_eq!(config.auth_realm, "master");
        assert_eq!(config.timeout(), None);
        assert_eq!(config, KeycloakConfig::new("http://keycloak:8080", "admin", "admin"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"https://sso.example.com\"\nclient_id = \"provisioning\"\nclient_secret = \"s3cr3t\"\ntimeout_secs = 30"
        )
        .unwrap();

        let config = KeycloakConfig::load(file.path()).unwrap();
        assert_eq!(config.client_id, "provisioning");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(matches!(config.grant().unwrap(), Grant::ClientCredentials { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = KeycloakConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let result = KeycloakConfig::from_toml_str("username = \"admin\"");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_grant_selection() {
        let config = KeycloakConfig::new("http://kc", "admin", "pw");
        assert_eq!(config.grant().unwrap().grant_type(), "password");

        let mut config = KeycloakConfig::client_credentials("http://kc", "svc", "secret");
        assert_eq!(config.grant().unwrap().grant_type(), "client_credentials");

        config.client_secret = None;
        assert!(matches!(config.grant(), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = KeycloakConfig::new("http://kc", "admin", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
