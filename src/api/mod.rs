//
//  keycloak-admin
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP side of the crate: the shared client that
//! authenticates and executes admin requests, and one resource type per part
//! of the Keycloak admin REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with token handling and status mapping
//! - [`resource`]: Resource types (users, groups, realms, ...)
//! - [`common`]: Shared types (errors, collections, query criteria)
//!
//! ## Error Handling
//!
//! Non-success responses are returned as [`Error`] variants:
//!
//! - `Unauthorized`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `Conflict`: 409 Conflict
//! - `Api`: any other status, with the code attached

/// Core HTTP client wrapper for the admin API.
///
/// Provides the [`AdminClient`] struct which handles:
/// - Admin URL construction from path segments
/// - Bearer token acquisition, caching and refresh
/// - Request/response serialization
/// - Error handling and status code mapping
pub mod client;

/// Shared types: the crate error, [`Collection`] and [`Criteria`].
pub mod common;

/// One type per admin API resource.
pub mod resource;

pub use client::AdminClient;
pub use common::{Collection, Criteria, Error, Result};
