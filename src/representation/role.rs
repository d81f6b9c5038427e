//
//  keycloak-admin
//  representation/role.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Role representations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::common::Collection;

representation! {
    /// A realm or client role.
    ///
    /// Roles are addressed by name, not id, on the realm role endpoints.
    pub struct Role {
        id: String,
        name: String,
        description: String,
        /// `true` when the role aggregates other roles.
        composite: bool,
        composites: RoleComposites,
        /// `true` for client roles, `false` for realm roles.
        client_role: bool,
        /// Id of the realm or client owning the role.
        container_id: String,
        attributes: HashMap<String, Vec<String>>,
    }
}

/// The roles aggregated by a composite role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleComposites {
    /// Realm role names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<Vec<String>>,

    /// Client role names keyed by client id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<HashMap<String, Vec<String>>>,
}

/// Roles as returned by role listings and role mapping endpoints.
pub type RoleCollection = Collection<Role>;
