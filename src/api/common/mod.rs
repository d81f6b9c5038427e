//
//  keycloak-admin
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Keycloak Admin Client
//!
//! This module provides the types shared by every resource: the crate-wide
//! error type, the typed [`Collection`] wrapper for list endpoints and the
//! [`Criteria`] query builder for search endpoints.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::api::common::Error;
//!
//! fn handle_result<T>(result: Result<T, Error>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(Error::NotFound(message)) => println!("Not found: {}", message),
//!         Err(e) if e.status() == Some(409) => println!("Already exists"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

mod collection;
mod criteria;

pub use collection::*;
pub use criteria::*;

/// Unified error type for all Keycloak admin operations.
///
/// Errors are surfaced, never recovered: HTTP error responses become one of
/// the status variants below, and transport failures propagate unchanged
/// through [`Error::Network`]. Callers that want retry or backoff build it on
/// top of [`Error::status`].
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `Unauthorized` | Token rejected by the admin API | 401 |
/// | `Forbidden` | Admin account lacks the required role | 403 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `Conflict` | Resource already exists | 409 |
/// | `Api` | Any other non-success response | 4xx/5xx |
/// | `Authentication` | The token endpoint refused the grant | 4xx/5xx |
/// | `Network` | Transport-level failure | N/A |
///
/// # Example
///
/// ```rust
/// use keycloak_admin::Error;
///
/// let err = Error::NotFound("User not found".to_string());
/// assert_eq!(err.status(), Some(404));
/// assert!(err.is_not_found());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The admin API rejected the bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The authenticated account is not allowed to perform the operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found.
    ///
    /// Returned for HTTP 404, e.g. when fetching a user that was deleted.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with the same unique attribute already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success response from the admin API.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The server's error message, or the raw body when it had none.
        message: String,
    },

    /// The token endpoint refused to issue an access token.
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// The HTTP status code returned by the token endpoint.
        status: StatusCode,
        /// The `error_description` (or raw body) returned by the server.
        message: String,
    },

    /// [`Collection::first`] was called on an empty collection.
    #[error("Collection is empty")]
    EmptyCollection,

    /// A create call succeeded but the response had no usable `Location` header.
    #[error("Response did not carry a Location header")]
    MissingLocation,

    /// The base URL could not be parsed or cannot carry path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client configuration is incomplete or inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("Could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("Could not parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON value could not be mapped onto a representation.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and failures reading a response body. Bodies that were read but do not
    /// decode into the expected type surface as [`Error::Json`].
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Builds the error variant matching an HTTP status code.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Api { status, message },
        }
    }

    /// Returns the HTTP status code carried by this error, if any.
    ///
    /// Transport failures only carry a status when reqwest attached one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Api { status, .. } | Self::Authentication { status, .. } => {
                Some(status.as_u16())
            }
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        let err = Error::from_status(StatusCode::NOT_FOUND, "User not found".to_string());
        assert!(matches!(err, Error::NotFound(ref m) if m == "User not found"));

        let err = Error::from_status(StatusCode::CONFLICT, "exists".to_string());
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_from_status_falls_back_to_api() {
        let err = Error::from_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert_eq!(err.status(), Some(502));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "API error (502 Bad Gateway): upstream");
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(Error::EmptyCollection.status(), None);
        assert_eq!(Error::MissingLocation.status(), None);
    }
}
