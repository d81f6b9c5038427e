//
//  keycloak-admin
//  tests/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use common::*;
use keycloak_admin::representation::Role;
use keycloak_admin::Criteria;
use mockito::Matcher;
use serde_json::json;

const SALES_LEAD: &str = r"^/admin/realms/master/roles/sales%20lead$";

#[tokio::test]
async fn test_get_encodes_role_name() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let lookup = server
        .mock("GET", Matcher::Regex(SALES_LEAD.to_string()))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "r-1", "name": "sales lead", "composite": false}).to_string())
        .create_async()
        .await;

    let role = keycloak(&server)
        .roles()
        .get(REALM, "sales lead")
        .await
        .unwrap();
    assert_eq!(role.id.as_deref(), Some("r-1"));
    assert_eq!(role.composite, Some(false));
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_update_and_delete_by_name() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let keycloak = keycloak(&server);

    let update = server
        .mock("PUT", Matcher::Regex(SALES_LEAD.to_string()))
        .match_header("authorization", bearer().as_str())
        .match_body(Matcher::Json(json!({"name": "sales lead", "description": "Owns the pipeline"})))
        .with_status(204)
        .create_async()
        .await;
    keycloak
        .roles()
        .update(
            REALM,
            "sales lead",
            &Role::default()
                .with_name("sales lead")
                .with_description("Owns the pipeline"),
        )
        .await
        .unwrap();
    update.assert_async().await;

    let delete = server
        .mock("DELETE", Matcher::Regex(SALES_LEAD.to_string()))
        .match_header("authorization", bearer().as_str())
        .with_status(204)
        .create_async()
        .await;
    keycloak.roles().delete(REALM, "sales lead").await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn test_users_in_role() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let members = server
        .mock(
            "GET",
            Matcher::Regex(r"^/admin/realms/master/roles/sales%20lead/users$".to_string()),
        )
        .match_query(Matcher::UrlEncoded("max".into(), "2".into()))
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"id": "u-1", "username": "jdoe"}, {"id": "u-2", "username": "asmith"}]).to_string())
        .create_async()
        .await;

    let users = keycloak(&server)
        .roles()
        .users(REALM, "sales lead", Some(&Criteria::new().max(2)))
        .await
        .unwrap();
    let usernames: Vec<_> = users.iter().filter_map(|u| u.username.as_deref()).collect();
    assert_eq!(usernames, ["jdoe", "asmith"]);
    members.assert_async().await;
}

#[tokio::test]
async fn test_unknown_role_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "GET",
        "/admin/realms/master/roles/ghost",
        404,
        json!({"error": "Could not find role"}),
    )
    .await;

    let err = keycloak(&server).roles().get(REALM, "ghost").await.unwrap_err();
    assert!(err.is_not_found());
}
