//
//  keycloak-admin
//  representation/event.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Admin event representations.
//!
//! Admin events are only recorded when `admin_events_enabled` is set on the
//! realm.

use chrono::{DateTime, Utc};

use crate::api::common::Collection;
use crate::util::from_timestamp_millis;

representation! {
    /// A change made through the admin API or console.
    pub struct AdminEvent {
        /// Milliseconds since the Unix epoch.
        time: i64,
        realm_id: String,
        auth_details: AuthDetails,
        /// `CREATE`, `UPDATE`, `DELETE` or `ACTION`.
        operation_type: String,
        /// `USER`, `GROUP`, `REALM_ROLE`, ...
        resource_type: String,
        resource_path: String,
        /// JSON of the submitted representation, when detail logging is on.
        representation: String,
        error: String,
    }
}

representation! {
    /// Who performed an admin event.
    pub struct AuthDetails {
        realm_id: String,
        client_id: String,
        user_id: String,
        ip_address: String,
    }
}

impl AdminEvent {
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(from_timestamp_millis)
    }
}

/// Admin events of a realm, newest first.
pub type AdminEventCollection = Collection<AdminEvent>;
