//
//  keycloak-admin
//  representation/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User session representations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::api::common::Collection;
use crate::util::from_timestamp_millis;

representation! {
    /// An active login session.
    pub struct UserSession {
        id: String,
        username: String,
        user_id: String,
        ip_address: String,
        /// Session start, milliseconds since the Unix epoch.
        start: i64,
        /// Last activity, milliseconds since the Unix epoch.
        last_access: i64,
        remember_me: bool,
        /// Client display names keyed by client id.
        clients: HashMap<String, String>,
    }
}

impl UserSession {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start.and_then(from_timestamp_millis)
    }

    pub fn last_access_at(&self) -> Option<DateTime<Utc>> {
        self.last_access.and_then(from_timestamp_millis)
    }
}

/// Sessions of a user or a client.
pub type UserSessionCollection = Collection<UserSession>;
