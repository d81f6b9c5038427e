//
//  keycloak-admin
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Keycloak Admin Client Library
//!
//! A typed client for the Keycloak admin REST API.
//!
//! ## Overview
//!
//! Server JSON is decoded into *representations* (plain structs with optional
//! fields) and *collections* of them. Each part of the admin API is exposed as
//! a *resource* type reached through the [`Keycloak`] facade, and list
//! endpoints are filtered with [`Criteria`].
//!
//! ## Features
//!
//! - **Typed Representations**: users, groups, roles, clients, realms, events
//!   and more, with `with_*` builders that return modified copies
//! - **Token Handling**: admin tokens are requested, cached and refreshed
//!   automatically (password or client-credentials grant)
//! - **Pluggable Token Storage**: share tokens across processes through
//!   [`auth::TokenStorage`]
//! - **Status-Carrying Errors**: every HTTP failure reports its status code
//!   and the server's message
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, resources and shared types
//! - [`representation`]: data types mirroring the server's JSON
//! - [`auth`]: grants, tokens and token storage
//! - [`config`]: connection settings, optionally loaded from TOML
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use keycloak_admin::representation::User;
//! use keycloak_admin::{Criteria, Keycloak};
//!
//! # async fn run() -> keycloak_admin::Result<()> {
//! let keycloak = Keycloak::new("http://keycloak:8080", "admin", "admin")?;
//!
//! let id = keycloak
//!     .users()
//!     .create("master", &User::default().with_username("jdoe").with_enabled(true))
//!     .await?;
//!
//! let user = keycloak.users().get("master", &id).await?;
//! keycloak
//!     .users()
//!     .update("master", &id, &user.with_email("jdoe@example.com"))
//!     .await?;
//!
//! let matches = keycloak
//!     .users()
//!     .search("master", &Criteria::new().email("jdoe@example.com").exact(true))
//!     .await?;
//! assert_eq!(matches.count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests are traced with [`tracing`] at `debug` level and failures at
//! `warn`. The library never installs a subscriber.

/// API client, resources and shared types.
///
/// The [`api::client::AdminClient`] executes authenticated requests; the
/// [`api::resource`] types map each endpoint onto a method.
pub mod api;

/// Admin token grants, tokens and token storage.
pub mod auth;

/// Connection settings.
pub mod config;

/// Typed decodings of the server's JSON objects.
pub mod representation;

/// Utility functions.
///
/// Timestamp conversion and `Location` header parsing.
pub mod util;

mod keycloak;

pub use api::common::{Collection, Criteria, Error, Result};
pub use config::KeycloakConfig;
pub use keycloak::Keycloak;

/// Current version of the crate, sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
