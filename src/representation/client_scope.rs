//
//  keycloak-admin
//  representation/client_scope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client scope representations.

use std::collections::HashMap;

use super::ProtocolMapperCollection;
use crate::api::common::Collection;

representation! {
    /// A reusable set of protocol mappers and role scope mappings.
    pub struct ClientScope {
        id: String,
        name: String,
        description: String,
        protocol: String,
        attributes: HashMap<String, String>,
        protocol_mappers: ProtocolMapperCollection,
    }
}

/// Client scopes of a realm.
pub type ClientScopeCollection = Collection<ClientScope>;
