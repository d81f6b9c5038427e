//
//  keycloak-admin
//  api/resource/server_info.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::AdminClient;
use crate::api::common::Result;
use crate::representation::ServerInfo;

/// Server-wide information: `/admin/serverinfo`.
#[derive(Debug, Clone, Copy)]
pub struct ServerInfoResource<'a> {
    client: &'a AdminClient,
}

impl<'a> ServerInfoResource<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Returns version, memory, providers and themes of the server.
    pub async fn get(&self) -> Result<ServerInfo> {
        self.client.get(&["serverinfo"], None).await
    }
}
