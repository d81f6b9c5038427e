//
//  keycloak-admin
//  tests/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use common::*;
use keycloak_admin::representation::{Group, Role};
use keycloak_admin::Criteria;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_by_path_encodes_each_segment() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let lookup = server
        .mock(
            "GET",
            Matcher::Regex(r"^/admin/realms/master/group-by-path/engineering/platform%20team$".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "g-2", "name": "platform team", "path": "/engineering/platform team"}).to_string())
        .create_async()
        .await;

    let group = keycloak(&server)
        .groups()
        .by_path(REALM, "/engineering/platform team")
        .await
        .unwrap();
    assert_eq!(group.id.as_deref(), Some("g-2"));
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_count_reads_count_field() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    server
        .mock("GET", "/admin/realms/master/groups/count")
        .match_query(Matcher::UrlEncoded("search".into(), "eng".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 3}"#)
        .create_async()
        .await;

    let count = keycloak(&server)
        .groups()
        .count(REALM, Some(&Criteria::new().search("eng")))
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_create_child_and_list_children() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let keycloak = keycloak(&server);
    let children = "/admin/realms/master/groups/g-1/children";

    let create = server
        .mock("POST", children)
        .match_body(Matcher::Json(json!({"name": "backend"})))
        .with_status(201)
        .with_header("location", &format!("{}/admin/realms/master/groups/g-3", server.url()))
        .create_async()
        .await;
    let id = keycloak
        .groups()
        .create_child(REALM, "g-1", &Group::default().with_name("backend"))
        .await
        .unwrap();
    assert_eq!(id, "g-3");
    create.assert_async().await;

    server
        .mock("GET", children)
        .match_query(Matcher::UrlEncoded("max".into(), "10".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"id": "g-3", "name": "backend", "path": "/engineering/backend", "parentId": "g-1"}]).to_string())
        .create_async()
        .await;
    let listed = keycloak
        .groups()
        .children(REALM, "g-1", Some(&Criteria::new().max(10)))
        .await
        .unwrap();
    assert_eq!(listed.first().unwrap().parent_id.as_deref(), Some("g-1"));
}

#[tokio::test]
async fn test_members_of_group() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    mock_json(
        &mut server,
        "GET",
        "/admin/realms/master/groups/g-1/members",
        200,
        json!([{"id": "u-1", "username": "jdoe"}, {"id": "u-2", "username": "asmith"}]),
    )
    .await;

    let members = keycloak(&server)
        .groups()
        .members(REALM, "g-1", None)
        .await
        .unwrap();
    let usernames: Vec<_> = members.iter().filter_map(|u| u.username.as_deref()).collect();
    assert_eq!(usernames, ["jdoe", "asmith"]);
}

#[tokio::test]
async fn test_role_create_returns_name() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    server
        .mock("POST", "/admin/realms/master/roles")
        .match_body(Matcher::Json(json!({"name": "sales lead", "description": "Leads sales"})))
        .with_status(201)
        .with_header(
            "location",
            &format!("{}/admin/realms/master/roles/sales%20lead", server.url()),
        )
        .create_async()
        .await;

    let name = keycloak(&server)
        .roles()
        .create(
            REALM,
            &Role::default()
                .with_name("sales lead")
                .with_description("Leads sales"),
        )
        .await
        .unwrap();
    assert_eq!(name, "sales lead");
}

#[tokio::test]
async fn test_create_accepts_relative_location() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    server
        .mock("POST", "/admin/realms/master/groups")
        .match_body(Matcher::Json(json!({"name": "support"})))
        .with_status(201)
        .with_header("location", "/admin/realms/master/groups/g-9")
        .create_async()
        .await;

    let id = keycloak(&server)
        .groups()
        .create(REALM, &Group::default().with_name("support"))
        .await
        .unwrap();
    assert_eq!(id, "g-9");
}
