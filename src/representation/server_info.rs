//
//  keycloak-admin
//  representation/server_info.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server information.
//!
//! Only the stable, commonly inspected parts of `/admin/serverinfo` are
//! typed; the large provider and theme catalogues are kept as raw JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

representation! {
    /// Version, runtime and feature information about the server.
    pub struct ServerInfo {
        system_info: SystemInfo,
        memory_info: MemoryInfo,
        profile_info: ProfileInfo,
        themes: serde_json::Value,
        providers: serde_json::Value,
        protocol_mapper_types: serde_json::Value,
        enums: HashMap<String, Vec<String>>,
        password_policies: Vec<serde_json::Value>,
    }
}

representation! {
    pub struct SystemInfo {
        /// Keycloak release, e.g. `24.0.1`.
        version: String,
        server_time: String,
        uptime: String,
        uptime_millis: i64,
        java_version: String,
        java_vendor: String,
        os_name: String,
        os_version: String,
        os_architecture: String,
    }
}

representation! {
    pub struct MemoryInfo {
        total: i64,
        used: i64,
        free: i64,
        free_percentage: i64,
    }
}

/// The active server profile and its feature toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub disabled_features: Vec<String>,
    #[serde(default)]
    pub preview_features: Vec<String>,
    #[serde(default)]
    pub experimental_features: Vec<String>,
}

impl ServerInfo {
    /// Shortcut for `system_info.version`.
    pub fn version(&self) -> Option<&str> {
        self.system_info.as_ref()?.version.as_deref()
    }
}
