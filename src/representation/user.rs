//
//  keycloak-admin
//  representation/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User representations.
//!
//! A [`User`] is an account inside a realm. The same shape is used for
//! listing, fetching, creating and updating; on update only the attributes
//! that are set are sent, so a fetched user can be modified and written back.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::representation::{Credential, User};
//!
//! let user = User::default()
//!     .with_username("jdoe")
//!     .with_email("jdoe@example.com")
//!     .with_enabled(true)
//!     .with_credentials(vec![Credential::password("s3cret", true)]);
//!
//! assert_eq!(user.credentials.as_ref().map(|c| c.count()), Some(1));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::CredentialCollection;
use crate::api::common::Collection;
use crate::util::from_timestamp_millis;

representation! {
    /// A user account in a realm.
    ///
    /// # Notes
    ///
    /// - `attributes` values are always lists, even for single values
    /// - `credentials` is only honoured on create; use
    ///   [`Users::reset_password`](crate::api::resource::Users::reset_password) afterwards
    /// - `created_timestamp` is in milliseconds since the Unix epoch
    pub struct User {
        /// Server-assigned identifier (UUID).
        id: String,
        /// Login name, unique within the realm.
        username: String,
        first_name: String,
        last_name: String,
        email: String,
        email_verified: bool,
        /// Disabled users cannot log in.
        enabled: bool,
        totp: bool,
        created_timestamp: i64,
        /// Id of the user federation provider this user was imported from.
        federation_link: String,
        /// Set when this user is the service account of a client.
        service_account_client_id: String,
        attributes: HashMap<String, Vec<String>>,
        credentials: CredentialCollection,
        disableable_credential_types: Vec<String>,
        /// Actions the user must complete at next login, e.g. `UPDATE_PASSWORD`.
        required_actions: Vec<String>,
        federated_identities: Collection<FederatedIdentity>,
        realm_roles: Vec<String>,
        client_roles: HashMap<String, Vec<String>>,
        /// Group paths the user is a member of (import only).
        groups: Vec<String>,
        not_before: i64,
        /// Admin permissions the caller holds on this user.
        access: HashMap<String, bool>,
    }
}

representation! {
    /// A link between a user and an identity provider account.
    pub struct FederatedIdentity {
        identity_provider: String,
        user_id: String,
        user_name: String,
    }
}

impl User {
    /// Creation time decoded from `created_timestamp`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_timestamp.and_then(from_timestamp_millis)
    }

    /// Returns the first value of a custom attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Users as returned by list and search endpoints.
pub type UserCollection = Collection<User>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_server_payload() {
        let user: User = serde_json::from_value(json!({
            "id": "afab8ba7-e278-4dda-8970-bd5a2a4c7bfb",
            "username": "admin",
            "enabled": true,
            "emailVerified": false,
            "createdTimestamp": 1704067200000i64,
            "attributes": {"locale": ["en"]},
            "requiredActions": [],
            "access": {"manage": true}
        }))
        .unwrap();

        assert_eq!(user.username.as_deref(), Some("admin"));
        assert_eq!(user.enabled, Some(true));
        assert_eq!(user.attribute("locale"), Some("en"));
        assert_eq!(user.created_at().map(|t| t.timestamp()), Some(1704067200));
        assert_eq!(user.first_name, None);
    }

    #[test]
    fn test_with_methods_replace_without_touching_original() {
        let original = User::default().with_username("jdoe").with_first_name("John");
        let updated = original.clone().with_first_name("Jane");

        assert_eq!(original.first_name.as_deref(), Some("John"));
        assert_eq!(updated.first_name.as_deref(), Some("Jane"));
        assert_eq!(updated.username, original.username);
    }

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let body = serde_json::to_value(User::default().with_username("jdoe")).unwrap();
        assert_eq!(body, json!({"username": "jdoe"}));
    }
}
