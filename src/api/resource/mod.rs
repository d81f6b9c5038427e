//
//  keycloak-admin
//  api/resource/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Admin API Resources
//!
//! One type per server resource. Each borrows the shared
//! [`AdminClient`](super::client::AdminClient) and maps its endpoints onto
//! methods returning representations or collections.
//!
//! Resources are cheap, short-lived handles; obtain them from the
//! [`Keycloak`](crate::Keycloak) facade for each call chain.
//!
//! ## Common Shape
//!
//! | Method | HTTP | Returns |
//! |--------|------|---------|
//! | `all(realm, criteria)` | `GET /{resource}` | a collection |
//! | `get(realm, id)` | `GET /{resource}/{id}` | a representation |
//! | `create(realm, value)` | `POST /{resource}` | the new id |
//! | `update(realm, id, value)` | `PUT /{resource}/{id}` | `()` |
//! | `delete(realm, id)` | `DELETE /{resource}/{id}` | `()` |
//!
//! ## Available Resources
//!
//! - [`Users`]: users, group membership, role mappings, credentials, sessions
//! - [`Groups`]: the group tree and its members
//! - [`Roles`]: realm roles
//! - [`Clients`]: clients, secrets and client sessions
//! - [`ClientScopes`]: client scopes
//! - [`Realms`]: realms, admin events, caches and keys
//! - [`AttackDetection`]: brute force lockout state
//! - [`ServerInfoResource`]: server version and capabilities
//! - [`UserFederation`]: LDAP/Kerberos providers and synchronization

mod attack_detection;
mod client_scopes;
mod clients;
mod groups;
mod realms;
mod roles;
mod server_info;
mod user_federation;
mod users;

pub use attack_detection::*;
pub use client_scopes::*;
pub use clients::*;
pub use groups::*;
pub use realms::*;
pub use roles::*;
pub use server_info::*;
pub use user_federation::*;
pub use users::*;
