//
//  keycloak-admin
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use keycloak_admin::Keycloak;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const REALM: &str = "master";
pub const TOKEN_PATH: &str = "/realms/master/protocol/openid-connect/token";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Mocks the password grant for `admin`/`admin` through `admin-cli`.
pub async fn mock_token(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("client_id".into(), "admin-cli".into()),
            Matcher::UrlEncoded("username".into(), "admin".into()),
            Matcher::UrlEncoded("password".into(), "admin".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(ACCESS_TOKEN).to_string())
        .create_async()
        .await
}

pub fn token_body(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "expires_in": 60,
        "refresh_token": "test-refresh-token",
        "refresh_expires_in": 1800,
        "token_type": "Bearer",
        "scope": "profile email"
    })
}

pub fn keycloak(server: &ServerGuard) -> Keycloak {
    Keycloak::new(server.url(), "admin", "admin").expect("valid mock server URL")
}

pub fn bearer() -> String {
    format!("Bearer {}", ACCESS_TOKEN)
}

/// Mocks an authenticated admin call answering with a JSON body.
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: Value,
) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", bearer().as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Mocks an authenticated admin call answering `204 No Content`.
pub async fn mock_no_content(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", bearer().as_str())
        .with_status(204)
        .create_async()
        .await
}
