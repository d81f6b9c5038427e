//
//  keycloak-admin
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Token Endpoint
//!
//! Requests admin tokens from
//! `{base}/realms/{realm}/protocol/openid-connect/token`.
//!
//! ## Token Lifecycle
//!
//! 1. **Grant**: the configured [`Grant`] is exchanged for an access token
//!    (and, for the password grant, a refresh token)
//! 2. **Use**: the access token is sent as a bearer token until it expires
//! 3. **Refresh**: an expired access token is renewed with the refresh grant
//!    while the refresh token is alive; otherwise step 1 is repeated
//!
//! Failures from the endpoint surface as
//! [`Error::Authentication`](crate::Error::Authentication) carrying the
//! server's `error_description`.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{AccessToken, Grant};
use crate::api::client::error_message;
use crate::api::common::{Error, Result};

/// Default client used by admin tools.
pub const DEFAULT_CLIENT_ID: &str = "admin-cli";

/// Default realm holding the admin accounts.
pub const DEFAULT_AUTH_REALM: &str = "master";

/// Raw token endpoint response.
#[derive(Deserialize)]
struct TokenResponseRaw {
    access_token: String,
    expires_in: i64,
    refresh_token: Option<String>,
    /// `0` means the refresh token does not expire on its own.
    refresh_expires_in: Option<i64>,
}

impl TokenResponseRaw {
    fn into_token(self, issued_at: DateTime<Utc>) -> AccessToken {
        AccessToken {
            token: self.access_token,
            expires_at: expiry(issued_at, self.expires_in),
            refresh_expires_at: self
                .refresh_expires_in
                .filter(|secs| *secs > 0)
                .map(|secs| expiry(issued_at, secs)),
            refresh_token: self.refresh_token,
        }
    }
}

/// `issued_at + secs`, saturating at the representable range.
fn expiry(issued_at: DateTime<Utc>, secs: i64) -> DateTime<Utc> {
    Duration::try_seconds(secs)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(if secs > 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            issued_at
        })
}

/// The OpenID Connect token endpoint of the admin realm.
///
/// # Example
///
/// ```rust
/// use keycloak_admin::auth::TokenEndpoint;
/// use url::Url;
///
/// let base = Url::parse("http://keycloak:8080").unwrap();
/// let endpoint = TokenEndpoint::new(&base, "master", "admin-cli").unwrap();
/// assert_eq!(
///     endpoint.url().as_str(),
///     "http://keycloak:8080/realms/master/protocol/openid-connect/token"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TokenEndpoint {
    url: Url,
    client_id: String,
}

impl TokenEndpoint {
    /// Builds the endpoint for `realm` under the server's base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot carry a path.
    pub fn new(base_url: &Url, realm: &str, client_id: impl Into<String>) -> Result<Self> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(base_url.to_string()))?
            .pop_if_empty()
            .extend(["realms", realm, "protocol", "openid-connect", "token"]);

        Ok(Self {
            url,
            client_id: client_id.into(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Exchanges the grant for a fresh token.
    pub async fn request(&self, http: &Client, grant: &Grant) -> Result<AccessToken> {
        let mut params = vec![
            ("grant_type", grant.grant_type().to_string()),
            ("client_id", self.client_id.clone()),
        ];

        match grant {
            Grant::Password { username, password } => {
                params.push(("username", username.clone()));
                params.push(("password", password.clone()));
            }
            Grant::ClientCredentials { client_secret } => {
                params.push(("client_secret", client_secret.clone()));
            }
        }

        self.exchange(http, &params).await
    }

    /// Renews a token with the refresh grant.
    ///
    /// Confidential clients authenticate the refresh with their secret.
    pub async fn refresh(
        &self,
        http: &Client,
        grant: &Grant,
        refresh_token: &str,
    ) -> Result<AccessToken> {
        let mut params = vec![
            ("grant_type", "refresh_token".to_string()),
            ("client_id", self.client_id.clone()),
            ("refresh_token", refresh_token.to_string()),
        ];

        if let Grant::ClientCredentials { client_secret } = grant {
            params.push(("client_secret", client_secret.clone()));
        }

        self.exchange(http, &params).await
    }

    async fn exchange(&self, http: &Client, params: &[(&str, String)]) -> Result<AccessToken> {
        tracing::debug!(url = %self.url, grant_type = %params[0].1, "Requesting admin token");

        let issued_at = Utc::now();
        let response = http.post(self.url.clone()).form(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            tracing::warn!(status = status.as_u16(), %message, "Token request rejected");
            return Err(Error::Authentication { status, message });
        }

        let bytes = response.bytes().await?;
        let raw: TokenResponseRaw = serde_json::from_slice(&bytes)?;
        Ok(raw.into_token(issued_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let base = Url::parse("https://sso.example.com/auth/").unwrap();
        let endpoint = TokenEndpoint::new(&base, "master", DEFAULT_CLIENT_ID).unwrap();
        assert_eq!(
            endpoint.url().as_str(),
            "https://sso.example.com/auth/realms/master/protocol/openid-connect/token"
        );
        assert_eq!(endpoint.client_id(), "admin-cli");
    }

    #[test]
    fn test_raw_response_expiry() {
        let issued_at = Utc::now();
        let raw: TokenResponseRaw = serde_json::from_str(
            r#"{"access_token":"a","expires_in":60,"refresh_token":"r","refresh_expires_in":0,"token_type":"Bearer"}"#,
        )
        .unwrap();

        let token = raw.into_token(issued_at);
        assert_eq!(token.expires_at, issued_at + Duration::seconds(60));
        assert_eq!(token.refresh_expires_at, None);
        assert!(token.can_refresh());
    }

    #[test]
    fn test_out_of_range_lifetimes_saturate() {
        let issued_at = Utc::now();
        let raw: TokenResponseRaw = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "expires_in": i64::MAX,
            "refresh_token": "r",
            "refresh_expires_in": i64::MAX
        }))
        .unwrap();

        let token = raw.into_token(issued_at);
        assert_eq!(token.expires_at, DateTime::<Utc>::MAX_UTC);
        assert_eq!(token.refresh_expires_at, Some(DateTime::<Utc>::MAX_UTC));
        assert!(!token.is_expired());
        assert!(token.can_refresh());

        assert_eq!(expiry(issued_at, i64::MIN), issued_at);
    }
}
