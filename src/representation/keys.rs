//
//  keycloak-admin
//  representation/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Realm key metadata.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The signing and encryption keys of a realm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeysMetadata {
    /// Active key id per algorithm, e.g. `RS256 -> kid`.
    #[serde(default)]
    pub active: HashMap<String, String>,

    #[serde(default)]
    pub keys: Vec<KeyMetadata>,
}

impl KeysMetadata {
    /// Returns the active key for an algorithm.
    pub fn active_key(&self, algorithm: &str) -> Option<&KeyMetadata> {
        let kid = self.active.get(algorithm)?;
        self.keys.iter().find(|key| key.kid.as_deref() == Some(kid))
    }
}

representation! {
    /// One key of a realm keystore.
    pub struct KeyMetadata {
        provider_id: String,
        provider_priority: i64,
        kid: String,
        /// `ACTIVE`, `PASSIVE` or `DISABLED`.
        status: String,
        #[serde(rename = "type")]
        key_type: String,
        algorithm: String,
        public_key: String,
        certificate: String,
        /// `SIG` or `ENC`.
        #[serde(rename = "use")]
        key_use: String,
    }
}
