//
//  keycloak-admin
//  api/resource/attack_detection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Brute force detection state:
//! `/admin/realms/{realm}/attack-detection/brute-force/users`.
//!
//! When a realm has `bruteForceProtected` enabled, repeated login failures
//! temporarily disable a user. These calls inspect and reset that state.

use crate::api::client::AdminClient;
use crate::api::common::Result;
use crate::representation::BruteForceStatus;

#[derive(Debug, Clone, Copy)]
pub struct AttackDetection<'a> {
    client: &'a AdminClient,
}

impl<'a> AttackDetection<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Clears login failures for every user of the realm.
    pub async fn clear(&self, realm: &str) -> Result<()> {
        self.client
            .delete(&["realms", realm, "attack-detection", "brute-force", "users"])
            .await
    }

    /// Clears login failures for one user.
    pub async fn clear_user(&self, realm: &str, user_id: &str) -> Result<()> {
        self.client
            .delete(&[
                "realms",
                realm,
                "attack-detection",
                "brute-force",
                "users",
                user_id,
            ])
            .await
    }

    /// Returns the user's failure count and lockout state.
    pub async fn user_status(&self, realm: &str, user_id: &str) -> Result<BruteForceStatus> {
        self.client
            .get(
                &[
                    "realms",
                    realm,
                    "attack-detection",
                    "brute-force",
                    "users",
                    user_id,
                ],
                None,
            )
            .await
    }
}
