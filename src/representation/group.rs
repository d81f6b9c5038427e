//
//  keycloak-admin
//  representation/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group representations.
//!
//! Groups form a tree inside a realm. Top-level listings carry
//! `sub_group_count`; the children themselves are fetched through
//! [`Groups::children`](crate::api::resource::Groups::children).

use std::collections::HashMap;

use crate::api::common::Collection;

representation! {
    /// A group of users sharing role mappings and attributes.
    pub struct Group {
        id: String,
        name: String,
        /// Slash-separated path from the root, e.g. `/engineering/backend`.
        path: String,
        parent_id: String,
        sub_group_count: i64,
        sub_groups: GroupCollection,
        attributes: HashMap<String, Vec<String>>,
        realm_roles: Vec<String>,
        client_roles: HashMap<String, Vec<String>>,
        access: HashMap<String, bool>,
    }
}

/// Groups as returned by list, children and membership endpoints.
pub type GroupCollection = Collection<Group>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_nested_sub_groups() {
        let group: Group = serde_json::from_value(json!({
            "id": "g1",
            "name": "engineering",
            "path": "/engineering",
            "subGroupCount": 1,
            "subGroups": [{"id": "g2", "name": "backend", "path": "/engineering/backend", "parentId": "g1"}]
        }))
        .unwrap();

        let children = group.sub_groups.unwrap();
        assert_eq!(children.count(), 1);
        assert_eq!(children.first().unwrap().parent_id.as_deref(), Some("g1"));
    }
}
