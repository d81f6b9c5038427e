//
//  keycloak-admin
//  representation/attack_detection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Brute-force detection status.

use chrono::{DateTime, Utc};

use crate::util::from_timestamp_millis;

representation! {
    /// Login failure bookkeeping for one user.
    ///
    /// Returned by
    /// [`AttackDetection::user_status`](crate::api::resource::AttackDetection::user_status).
    pub struct BruteForceStatus {
        num_failures: i64,
        /// `true` while the user is temporarily locked out.
        disabled: bool,
        /// Address of the last failed attempt, `n/a` when none.
        #[serde(rename = "lastIPFailure")]
        last_ip_failure: String,
        /// Milliseconds since the Unix epoch, `0` when none.
        last_failure: i64,
    }
}

impl BruteForceStatus {
    /// Time of the last failed login, `None` if there never was one.
    pub fn last_failure_at(&self) -> Option<DateTime<Utc>> {
        self.last_failure
            .filter(|millis| *millis > 0)
            .and_then(from_timestamp_millis)
    }

    pub fn is_locked(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}
