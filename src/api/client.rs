//
//  keycloak-admin
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Keycloak Admin API
//!
//! This module provides [`AdminClient`], the HTTP execution helper every
//! resource type goes through. It handles URL construction, bearer token
//! injection, request/response serialization and status code mapping.
//!
//! ## Features
//!
//! - Path segments are percent-encoded individually, so names with spaces or
//!   slashes are safe in URLs
//! - Tokens are obtained lazily and reused until they expire
//! - Non-success responses become [`Error`] values carrying the status code
//!   and the server's message
//! - One request per call; nothing is retried

use std::fmt;
use std::sync::Arc;

use reqwest::header::LOCATION;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use url::Url;

use crate::api::common::{Criteria, Error, Result};
use crate::auth::{AccessToken, Grant, InMemoryTokenStorage, TokenEndpoint, TokenStorage};
use crate::config::KeycloakConfig;
use crate::util::id_from_location;

/// Extracts a readable message from a Keycloak error response body.
///
/// Keycloak reports errors in several shapes depending on the endpoint:
///
/// ```json
/// {"errorMessage": "User exists with same username"}
/// {"error": "invalid_grant", "error_description": "Invalid user credentials"}
/// {"error": "HTTP 404 Not Found"}
/// ```
///
/// The most descriptive field wins. If the body is not JSON, the raw body is
/// returned; if it is empty, the status reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["errorMessage", "error_description", "error", "message"] {
            if let Some(message) = json.get(field).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Maps a non-success admin API response onto an [`Error`].
///
/// # Example
///
/// ```rust
/// use keycloak_admin::api::client::format_api_error;
/// use reqwest::StatusCode;
///
/// let err = format_api_error(StatusCode::NOT_FOUND, r#"{"error":"User not found"}"#);
/// assert_eq!(err.status(), Some(404));
/// assert_eq!(err.to_string(), "Resource not found: User not found");
/// ```
pub fn format_api_error(status: StatusCode, body: &str) -> Error {
    Error::from_status(status, error_message(status, body))
}

/// The HTTP client shared by all resources.
///
/// Cheap to clone: the connection pool, token storage and token lock are
/// shared between clones.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use keycloak_admin::api::client::AdminClient;
/// use keycloak_admin::config::KeycloakConfig;
///
/// let config = KeycloakConfig::new("http://keycloak:8080", "admin", "admin");
/// let client = AdminClient::from_config(&config)?;
/// assert_eq!(client.base_url().as_str(), "http://keycloak:8080/");
/// # Ok::<(), keycloak_admin::Error>(())
/// ```
#[derive(Clone)]
pub struct AdminClient {
    /// The underlying HTTP client
    http: Client,
    /// Server root, e.g. `http://keycloak:8080/`
    base_url: Url,
    /// Where admin tokens come from
    token_endpoint: TokenEndpoint,
    /// Credentials presented to the token endpoint
    grant: Grant,
    /// Cache of the current token
    storage: Arc<dyn TokenStorage>,
    /// Serializes token acquisition so concurrent calls request one token
    token_lock: Arc<Mutex<()>>,
}

impl AdminClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if `base_url` is not an absolute http(s) URL
    /// - [`Error::Config`] if no usable credentials are configured
    /// - [`Error::Network`] if the HTTP client could not be built
    pub fn from_config(config: &KeycloakConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{} (expected an http or https URL)",
                config.base_url
            )));
        }

        let mut builder = Client::builder().user_agent(format!("keycloak-admin/{}", crate::VERSION));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            token_endpoint: TokenEndpoint::new(&base_url, &config.auth_realm, &config.client_id)?,
            grant: config.grant()?,
            base_url,
            storage: Arc::new(InMemoryTokenStorage::new()),
            token_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Replaces the token storage.
    pub fn with_token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = storage;
        self
    }

    /// Returns the server root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token_storage(&self) -> &Arc<dyn TokenStorage> {
        &self.storage
    }

    /// Builds `{base}/admin/{segments...}`, encoding each segment.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use keycloak_admin::api::client::AdminClient;
    /// # use keycloak_admin::config::KeycloakConfig;
    /// # let client = AdminClient::from_config(&KeycloakConfig::new("http://kc:8080", "a", "a"))?;
    /// let url = client.admin_url(&["realms", "master", "roles", "sales lead"])?;
    /// assert_eq!(url.as_str(), "http://kc:8080/admin/realms/master/roles/sales%20lead");
    /// # Ok::<(), keycloak_admin::Error>(())
    /// ```
    pub fn admin_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("admin")
            .extend(segments);
        Ok(url)
    }

    /// Returns a valid access token, requesting or refreshing one if needed.
    pub async fn access_token(&self) -> Result<String> {
        Ok(self.current_token().await?.token)
    }

    async fn current_token(&self) -> Result<AccessToken> {
        if let Some(token) = self.storage.retrieve().await {
            if !token.is_expired() {
                return Ok(token);
            }
        }

        let _guard = self.token_lock.lock().await;

        // Another task may have renewed the token while we waited.
        let current = self.storage.retrieve().await;
        if let Some(token) = current.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.clone());
        }

        let refresh_token = current
            .as_ref()
            .filter(|t| t.can_refresh())
            .and_then(|t| t.refresh_token.as_deref());

        let token = match refresh_token {
            Some(refresh_token) => {
                match self
                    .token_endpoint
                    .refresh(&self.http, &self.grant, refresh_token)
                    .await
                {
                    Ok(token) => token,
                    Err(err) => {
                        tracing::warn!(error = %err, "Token refresh failed, requesting a new token");
                        self.token_endpoint.request(&self.http, &self.grant).await?
                    }
                }
            }
            None => self.token_endpoint.request(&self.http, &self.grant).await?,
        };

        self.storage.save(token.clone()).await;
        Ok(token)
    }

    /// Sends one authenticated request and checks its status.
    ///
    /// `segments` are relative to `{base}/admin`. Empty criteria add no query
    /// string.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&Criteria>,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.admin_url(segments)?;
        let token = self.current_token().await?;

        let mut request = token.apply_to_request(self.http.request(method.clone(), url.clone()));
        if let Some(criteria) = query.filter(|c| !c.is_empty()) {
            request = request.query(&criteria.pairs().collect::<Vec<_>>());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Sending admin request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "Received admin response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = format_api_error(status, &text);
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "Admin request failed");
            return Err(err);
        }

        Ok(response)
    }

    /// Makes a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be decoded into `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&Criteria>,
    ) -> Result<T> {
        let response = self
            .execute(Method::GET, segments, query, None::<&()>)
            .await?;
        decode(response).await
    }

    /// POSTs a representation and returns the id of the created resource.
    ///
    /// The id is the last segment of the `Location` response header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLocation`] if the server answered without a
    /// `Location` header, plus the errors of [`get`](Self::get).
    pub async fn create<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<String> {
        let response = self
            .execute(Method::POST, segments, None, Some(body))
            .await?;

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| id_from_location(response.url(), location))
            .ok_or(Error::MissingLocation)
    }

    /// Makes a POST request without a body and decodes the JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&Criteria>,
    ) -> Result<T> {
        let response = self
            .execute(Method::POST, segments, query, None::<&()>)
            .await?;
        decode(response).await
    }

    /// Makes a POST request without a body, ignoring the response body.
    pub async fn post_empty(&self, segments: &[&str]) -> Result<()> {
        self.execute(Method::POST, segments, None, None::<&()>)
            .await?;
        Ok(())
    }

    /// POSTs a JSON body, ignoring the response body.
    pub async fn post_json<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        self.execute(Method::POST, segments, None, Some(body))
            .await?;
        Ok(())
    }

    /// PUTs a JSON body, ignoring the response body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: Option<&Criteria>,
        body: &B,
    ) -> Result<()> {
        self.execute(Method::PUT, segments, query, Some(body))
            .await?;
        Ok(())
    }

    /// Makes a PUT request without a body.
    pub async fn put_empty(&self, segments: &[&str]) -> Result<()> {
        self.execute(Method::PUT, segments, None, None::<&()>)
            .await?;
        Ok(())
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, segments: &[&str]) -> Result<()> {
        self.execute(Method::DELETE, segments, None, None::<&()>)
            .await?;
        Ok(())
    }

    /// Makes a DELETE request carrying a JSON body (role mapping removal).
    pub async fn delete_json<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        self.execute(Method::DELETE, segments, None, Some(body))
            .await?;
        Ok(())
    }
}

impl fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url.as_str())
            .field("token_endpoint", &self.token_endpoint)
            .field("grant", &self.grant)
            .finish_non_exhaustive()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
