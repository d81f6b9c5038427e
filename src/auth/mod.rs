//
//  keycloak-admin
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Admin API calls carry a bearer token issued by the server's own OpenID
//! Connect token endpoint. This module covers just enough of that exchange to
//! authenticate admin calls.
//!
//! ## Supported Grants
//!
//! - **Password**: an admin username and password, the usual setup with the
//!   `admin-cli` client.
//! - **Client Credentials**: a confidential client with a service account
//!   holding `realm-management` roles.
//!
//! ## Module Structure
//!
//! - [`token`]: token endpoint requests (grant and refresh)
//! - [`storage`]: where issued tokens are kept between calls
//!
//! ## Example
//!
//! ```rust
//! use keycloak_admin::auth::{AccessToken, Grant};
//! use chrono::{Duration, Utc};
//!
//! let grant = Grant::password("admin", "admin");
//! assert!(matches!(grant, Grant::Password { .. }));
//!
//! let token = AccessToken::new("eyJhbGciOi...", Utc::now() + Duration::minutes(1));
//! assert!(!token.is_expired());
//! assert!(!token.can_refresh());
//! ```

mod storage;
mod token;

pub use storage::*;
pub use token::*;

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use reqwest::RequestBuilder;

/// Tokens are treated as expired this long before their real expiry, so a
/// token is never sent when it is about to lapse in flight.
const EXPIRY_LEEWAY_SECS: i64 = 10;

/// The OAuth grant used to obtain admin tokens.
///
/// # Variants
///
/// - `Password`: resource owner password credentials of an admin user.
/// - `ClientCredentials`: the secret of the configured confidential client.
#[derive(Clone)]
pub enum Grant {
    /// Admin username and password.
    Password {
        /// The admin username.
        username: String,
        /// The admin password.
        password: String,
    },
    /// Client secret of a confidential client with a service account.
    ClientCredentials {
        /// The client secret.
        client_secret: String,
    },
}

impl Grant {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn client_credentials(client_secret: impl Into<String>) -> Self {
        Self::ClientCredentials {
            client_secret: client_secret.into(),
        }
    }

    /// The OAuth `grant_type` value for this grant.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::ClientCredentials { .. } => "client_credentials",
        }
    }
}

impl fmt::Debug for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::ClientCredentials { .. } => f
                .debug_struct("ClientCredentials")
                .field("client_secret", &"***")
                .finish(),
        }
    }
}

/// An issued access token and its optional refresh token.
///
/// # Notes
///
/// - Expiry is tracked locally from `expires_in`; server-side revocation is
///   not detected and surfaces as [`Error::Unauthorized`](crate::Error::Unauthorized).
/// - Tokens without a refresh expiry are considered refreshable for as long
///   as the refresh token is present.
#[derive(Clone)]
pub struct AccessToken {
    /// The bearer token sent to the admin API.
    pub token: String,
    /// When the access token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Token for the refresh grant, if the server issued one.
    pub refresh_token: Option<String>,
    /// When the refresh token stops being accepted.
    pub refresh_expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token without a refresh token.
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
            refresh_token: None,
            refresh_expires_at: None,
        }
    }

    /// Checks if the access token has expired (or is about to).
    pub fn is_expired(&self) -> bool {
        self.expires_at - Duration::seconds(EXPIRY_LEEWAY_SECS) <= Utc::now()
    }

    /// Checks if a live refresh token is available.
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
            && self
                .refresh_expires_at
                .map_or(true, |exp| exp - Duration::seconds(EXPIRY_LEEWAY_SECS) > Utc::now())
    }

    /// Adds the `Authorization: Bearer` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"***")
            .field("expires_at", &self.expires_at)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .field("refresh_expires_at", &self.refresh_expires_at)
            .finish()
    }
}
