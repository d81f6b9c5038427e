//
//  keycloak-admin
//  representation/realm.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Realm representations.
//!
//! A [`Realm`] carries both the realm settings and, for imports and exports,
//! the nested users, groups, roles and clients.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::representation::Realm;
//!
//! let realm = Realm::default()
//!     .with_realm("staging")
//!     .with_enabled(true)
//!     .with_brute_force_protected(true)
//!     .with_failure_factor(5);
//!
//! let json = serde_json::to_value(&realm).unwrap();
//! assert_eq!(json["bruteForceProtected"], true);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    ClientCollection, ClientScopeCollection, GroupCollection, RoleCollection,
    UserCollection, UserFederationMapperCollection, UserFederationProviderCollection,
};
use crate::api::common::Collection;

representation! {
    /// Realm settings and, for imports, realm content.
    pub struct Realm {
        id: String,
        /// Realm name, used in every admin URL.
        realm: String,
        display_name: String,
        display_name_html: String,
        enabled: bool,
        /// `all`, `external` or `none`.
        ssl_required: String,
        registration_allowed: bool,
        registration_email_as_username: bool,
        remember_me: bool,
        verify_email: bool,
        login_with_email_allowed: bool,
        duplicate_emails_allowed: bool,
        reset_password_allowed: bool,
        edit_username_allowed: bool,
        brute_force_protected: bool,
        permanent_lockout: bool,
        max_failure_wait_seconds: i64,
        minimum_quick_login_wait_seconds: i64,
        wait_increment_seconds: i64,
        quick_login_check_milli_seconds: i64,
        max_delta_time_seconds: i64,
        failure_factor: i64,
        access_token_lifespan: i64,
        access_code_lifespan: i64,
        sso_session_idle_timeout: i64,
        sso_session_max_lifespan: i64,
        offline_session_idle_timeout: i64,
        password_policy: String,
        otp_policy_type: String,
        login_theme: String,
        account_theme: String,
        admin_theme: String,
        email_theme: String,
        events_enabled: bool,
        events_expiration: i64,
        events_listeners: Vec<String>,
        enabled_event_types: Vec<String>,
        admin_events_enabled: bool,
        admin_events_details_enabled: bool,
        internationalization_enabled: bool,
        supported_locales: Vec<String>,
        default_locale: String,
        smtp_server: HashMap<String, String>,
        attributes: HashMap<String, String>,
        users: UserCollection,
        groups: GroupCollection,
        roles: RealmRoles,
        clients: ClientCollection,
        client_scopes: ClientScopeCollection,
        user_federation_providers: UserFederationProviderCollection,
        user_federation_mappers: UserFederationMapperCollection,
    }
}

/// Realm and client roles nested in a realm export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealmRoles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<RoleCollection>,

    /// Client roles keyed by `clientId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<HashMap<String, RoleCollection>>,
}

/// Realms visible to the admin account.
pub type RealmCollection = Collection<Realm>;
