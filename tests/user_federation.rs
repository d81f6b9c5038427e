//
//  keycloak-admin
//  tests/user_federation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use common::*;
use keycloak_admin::api::resource::{SyncAction, SyncDirection};
use keycloak_admin::representation::{
    Component, LDAP_STORAGE_MAPPER_TYPE, USER_STORAGE_PROVIDER_TYPE,
};
use mockito::Matcher;
use serde_json::json;

const COMPONENTS: &str = "/admin/realms/corp/components";

#[tokio::test]
async fn test_providers_and_mappers_filter_by_type() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let keycloak = keycloak(&server);

    let providers = server
        .mock("GET", COMPONENTS)
        .match_query(Matcher::UrlEncoded("type".into(), USER_STORAGE_PROVIDER_TYPE.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": "ldap-1",
                "name": "corporate-ldap",
                "providerId": "ldap",
                "providerType": USER_STORAGE_PROVIDER_TYPE,
                "parentId": "corp",
                "config": {"connectionUrl": ["ldap://ldap.example.com"], "enabled": ["true"]}
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let found = keycloak.user_federation().providers("corp").await.unwrap();
    let ldap = found.first().unwrap();
    assert_eq!(ldap.config_value("connectionUrl"), Some("ldap://ldap.example.com"));
    providers.assert_async().await;

    let mappers = server
        .mock("GET", COMPONENTS)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("parent".into(), "ldap-1".into()),
            Matcher::UrlEncoded("type".into(), LDAP_STORAGE_MAPPER_TYPE.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": "m-1", "name": "email", "providerId": "user-attribute-ldap-mapper", "parentId": "ldap-1"},
                {"id": "m-2", "name": "groups", "providerId": "group-ldap-mapper", "parentId": "ldap-1"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let found = keycloak.user_federation().mappers("corp", "ldap-1").await.unwrap();
    assert_eq!(found.count(), 2);
    mappers.assert_async().await;
}

#[tokio::test]
async fn test_create_provider() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let create = server
        .mock("POST", COMPONENTS)
        .match_body(Matcher::PartialJson(json!({
            "name": "corporate-ldap",
            "providerId": "ldap",
            "providerType": USER_STORAGE_PROVIDER_TYPE,
            "config": {"editMode": ["READ_ONLY"]}
        })))
        .with_status(201)
        .with_header("location", &format!("{}{}/ldap-1", server.url(), COMPONENTS))
        .create_async()
        .await;

    let provider = Component::default()
        .with_name("corporate-ldap")
        .with_provider_id("ldap")
        .with_provider_type(USER_STORAGE_PROVIDER_TYPE)
        .with_parent_id("corp")
        .with_config_value("editMode", "READ_ONLY");

    let id = keycloak(&server)
        .user_federation()
        .create_provider("corp", &provider)
        .await
        .unwrap();
    assert_eq!(id, "ldap-1");
    create.assert_async().await;
}

#[tokio::test]
async fn test_sync_and_mapper_sync() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let keycloak = keycloak(&server);

    let sync = server
        .mock("POST", "/admin/realms/corp/user-storage/ldap-1/sync")
        .match_query(Matcher::UrlEncoded("action".into(), "triggerFullSync".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"ignored": false, "added": 3, "updated": 1, "removed": 0, "failed": 0,
                   "status": "3 imported users, 1 updated users"})
            .to_string(),
        )
        .create_async()
        .await;

    let result = keycloak
        .user_federation()
        .sync("corp", "ldap-1", SyncAction::Full)
        .await
        .unwrap();
    assert_eq!(result.added, 3);
    assert_eq!(result.status.as_deref(), Some("3 imported users, 1 updated users"));
    sync.assert_async().await;

    let mapper_sync = server
        .mock("POST", "/admin/realms/corp/user-storage/ldap-1/mappers/m-2/sync")
        .match_query(Matcher::UrlEncoded("direction".into(), "fedToKeycloak".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ignored": false, "added": 2, "updated": 0, "removed": 0, "failed": 0}).to_string())
        .create_async()
        .await;

    let result = keycloak
        .user_federation()
        .sync_mapper("corp", "ldap-1", "m-2", SyncDirection::FedToKeycloak)
        .await
        .unwrap();
    assert_eq!(result.added, 2);
    assert_eq!(result.status, None);
    mapper_sync.assert_async().await;
}

#[tokio::test]
async fn test_unlink_and_remove_imported_users() {
    let mut server = mockito::Server::new_async().await;
    mock_token(&mut server).await;
    let keycloak = keycloak(&server);

    let unlink = mock_no_content(&mut server, "POST", "/admin/realms/corp/user-storage/ldap-1/unlink-users").await;
    let remove = mock_no_content(
        &mut server,
        "POST",
        "/admin/realms/corp/user-storage/ldap-1/remove-imported-users",
    )
    .await;

    keycloak.user_federation().unlink_users("corp", "ldap-1").await.unwrap();
    keycloak
        .user_federation()
        .remove_imported_users("corp", "ldap-1")
        .await
        .unwrap();

    unlink.assert_async().await;
    remove.assert_async().await;
}
