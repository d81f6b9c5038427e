//
//  keycloak-admin
//  representation/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client representations.
//!
//! A [`Client`] is an application registered in a realm. Note the two
//! identifiers: `id` is the internal UUID used in admin URLs, `client_id` is
//! the public name used in OAuth flows.

use std::collections::HashMap;

use crate::api::common::Collection;

representation! {
    /// An OIDC or SAML client application.
    pub struct Client {
        /// Internal UUID, used in admin API paths.
        id: String,
        /// Public client identifier used in protocol flows.
        client_id: String,
        name: String,
        description: String,
        root_url: String,
        admin_url: String,
        base_url: String,
        surrogate_auth_required: bool,
        enabled: bool,
        always_display_in_console: bool,
        client_authenticator_type: String,
        secret: String,
        redirect_uris: Vec<String>,
        web_origins: Vec<String>,
        not_before: i64,
        bearer_only: bool,
        consent_required: bool,
        standard_flow_enabled: bool,
        implicit_flow_enabled: bool,
        direct_access_grants_enabled: bool,
        service_accounts_enabled: bool,
        public_client: bool,
        frontchannel_logout: bool,
        /// `openid-connect` or `saml`.
        protocol: String,
        attributes: HashMap<String, String>,
        authentication_flow_binding_overrides: HashMap<String, String>,
        full_scope_allowed: bool,
        node_re_registration_timeout: i64,
        default_client_scopes: Vec<String>,
        optional_client_scopes: Vec<String>,
        protocol_mappers: ProtocolMapperCollection,
        access: HashMap<String, bool>,
    }
}

representation! {
    /// A token mapper attached to a client or client scope.
    pub struct ProtocolMapper {
        id: String,
        name: String,
        protocol: String,
        /// Mapper implementation id, e.g. `oidc-usermodel-attribute-mapper`.
        protocol_mapper: String,
        consent_required: bool,
        config: HashMap<String, String>,
    }
}

/// Clients of a realm.
pub type ClientCollection = Collection<Client>;

/// Protocol mappers of a client or client scope.
pub type ProtocolMapperCollection = Collection<ProtocolMapper>;
