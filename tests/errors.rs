//
//  keycloak-admin
//  tests/errors.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use common::*;
use keycloak_admin::representation::{Group, User};
use keycloak_admin::Error;
use serde_json::json;

#[tokio::test]
async fn test_conflict_carries_server_message() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "POST",
        "/admin/realms/master/users",
        409,
        json!({"errorMessage": "User exists with same username"}),
    )
    .await;

    let err = keycloak(&server)
        .users()
        .create(REALM, &User::default().with_username("admin"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Conflict: User exists with same username");
}

#[tokio::test]
async fn test_forbidden_and_server_errors() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "GET",
        "/admin/realms/master/clients",
        403,
        json!({"error": "unknown_error"}),
    )
    .await;
    server
        .mock("GET", "/admin/realms/master/groups")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let keycloak = keycloak(&server);

    let err = keycloak.clients().all(REALM, None).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let err = keycloak.groups().all(REALM, None).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, Error::Api { ref message, .. } if message == "Internal Server Error"));
}

#[tokio::test]
async fn test_create_without_location() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_no_content(&mut server, "POST", "/admin/realms/master/groups").await;

    let err = keycloak(&server)
        .groups()
        .create(REALM, &Group::default().with_name("ops"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingLocation));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_undecodable_body() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    server
        .mock("GET", "/admin/realms/master/users/u-1")
        .with_status(200)
        .with_body("<html>login</html>")
        .create_async()
        .await;

    let err = keycloak(&server).users().get(REALM, "u-1").await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_empty_collection_first() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_json(&mut server, "GET", "/admin/realms/master/users", 200, json!([])).await;

    let users = keycloak(&server).users().all(REALM, None).await.unwrap();
    assert_eq!(users.count(), 0);
    assert!(matches!(users.first(), Err(Error::EmptyCollection)));
}
