//
//  keycloak-admin
//  representation/component.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Component and synchronization representations.
//!
//! User federation providers (LDAP, Kerberos) and their mappers are stored as
//! generic components distinguished by `provider_type`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::common::Collection;

/// Provider type of user storage (federation) components.
pub const USER_STORAGE_PROVIDER_TYPE: &str = "org.keycloak.storage.UserStorageProvider";

/// Provider type of LDAP storage mappers.
pub const LDAP_STORAGE_MAPPER_TYPE: &str = "org.keycloak.storage.ldap.mappers.LDAPStorageMapper";

representation! {
    /// A pluggable realm component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycloak_admin::representation::{Component, USER_STORAGE_PROVIDER_TYPE};
    ///
    /// let ldap = Component::default()
    ///     .with_name("corporate-ldap")
    ///     .with_provider_id("ldap")
    ///     .with_provider_type(USER_STORAGE_PROVIDER_TYPE)
    ///     .with_config_value("connectionUrl", "ldap://ldap.example.com");
    ///
    /// assert_eq!(ldap.config_value("connectionUrl"), Some("ldap://ldap.example.com"));
    /// ```
    pub struct Component {
        id: String,
        name: String,
        /// Implementation id, e.g. `ldap` or `kerberos`.
        provider_id: String,
        provider_type: String,
        /// Owning realm id for providers, owning provider id for mappers.
        parent_id: String,
        sub_type: String,
        config: HashMap<String, Vec<String>>,
    }
}

impl Component {
    /// Returns a copy with one single-valued config entry set.
    #[must_use]
    pub fn with_config_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), vec![value.into()]);
        self
    }

    /// Returns the first value of a config entry.
    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|config| config.get(key))
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Components of a realm, usually filtered by type or parent.
pub type ComponentCollection = Collection<Component>;

/// Outcome of a user federation sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynchronizationResult {
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub added: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub removed: i64,
    #[serde(default)]
    pub failed: i64,
    /// Human readable summary, e.g. `3 imported users, 0 updated users`.
    #[serde(default)]
    pub status: Option<String>,
}
