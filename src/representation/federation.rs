//
//  keycloak-admin
//  representation/federation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy user federation representations.
//!
//! These shapes appear inside a [`Realm`](super::Realm) export
//! (`userFederationProviders`, `userFederationMappers`). Live providers are
//! managed as [`Component`](super::Component)s.

use std::collections::HashMap;

use crate::api::common::Collection;

representation! {
    /// A user federation provider as embedded in a realm representation.
    pub struct UserFederationProvider {
        id: String,
        display_name: String,
        provider_name: String,
        config: HashMap<String, String>,
        priority: i64,
        /// Seconds between full syncs, `-1` to disable.
        full_sync_period: i64,
        /// Seconds between changed-users syncs, `-1` to disable.
        changed_sync_period: i64,
        last_sync: i64,
    }
}

representation! {
    /// A mapper of a user federation provider as embedded in a realm representation.
    pub struct UserFederationMapper {
        id: String,
        name: String,
        federation_provider_display_name: String,
        federation_mapper_type: String,
        config: HashMap<String, String>,
    }
}

pub type UserFederationProviderCollection = Collection<UserFederationProvider>;

pub type UserFederationMapperCollection = Collection<UserFederationMapper>;
