//
//  keycloak-admin
//  api/resource/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group management: `/admin/realms/{realm}/groups`.
//!
//! Groups form a tree. Top-level groups are listed by [`Groups::all`]; a
//! group's subgroups by [`Groups::children`]; any group can be looked up by
//! its full path with [`Groups::by_path`].

use serde::Deserialize;

use crate::api::client::AdminClient;
use crate::api::common::{Criteria, Result};
use crate::representation::{Group, GroupCollection, UserCollection};

/// Response of `/groups/count`.
#[derive(Deserialize)]
struct GroupCount {
    count: u64,
}

/// Operations on the groups of a realm.
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a AdminClient,
}

impl<'a> Groups<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists top-level groups, optionally filtered.
    pub async fn all(&self, realm: &str, criteria: Option<&Criteria>) -> Result<GroupCollection> {
        self.client
            .get(&["realms", realm, "groups"], criteria)
            .await
    }

    /// Counts groups, optionally filtered (`search`, `top`).
    pub async fn count(&self, realm: &str, criteria: Option<&Criteria>) -> Result<u64> {
        let count: GroupCount = self
            .client
            .get(&["realms", realm, "groups", "count"], criteria)
            .await?;
        Ok(count.count)
    }

    /// Lists the direct subgroups of a group.
    pub async fn children(
        &self,
        realm: &str,
        group_id: &str,
        criteria: Option<&Criteria>,
    ) -> Result<GroupCollection> {
        self.client
            .get(&["realms", realm, "groups", group_id, "children"], criteria)
            .await
    }

    pub async fn get(&self, realm: &str, group_id: &str) -> Result<Group> {
        self.client
            .get(&["realms", realm, "groups", group_id], None)
            .await
    }

    /// Creates a top-level group and returns its id.
    pub async fn create(&self, realm: &str, group: &Group) -> Result<String> {
        self.client
            .create(&["realms", realm, "groups"], group)
            .await
    }

    /// Creates a subgroup under `parent_id` and returns its id.
    pub async fn create_child(&self, realm: &str, parent_id: &str, group: &Group) -> Result<String> {
        self.client
            .create(&["realms", realm, "groups", parent_id, "children"], group)
            .await
    }

    pub async fn update(&self, realm: &str, group_id: &str, group: &Group) -> Result<()> {
        self.client
            .put(&["realms", realm, "groups", group_id], None, group)
            .await
    }

    /// Deletes a group and all of its subgroups.
    pub async fn delete(&self, realm: &str, group_id: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "groups", group_id])
            .await
    }

    /// Looks a group up by its path, e.g. `/engineering/platform`.
    ///
    /// Each path segment is encoded on its own, so group names may contain
    /// spaces and other reserved characters.
    pub async fn by_path(&self, realm: &str, path: &str) -> Result<Group> {
        let mut segments = vec!["realms", realm, "group-by-path"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        self.client.get(&segments, None).await
    }

    /// Lists the direct members of a group.
    pub async fn members(
        &self,
        realm: &str,
        group_id: &str,
        criteria: Option<&Criteria>,
    ) -> Result<UserCollection> {
        self.client
            .get(&["realms", realm, "groups", group_id, "members"], criteria)
            .await
    }
}
