//
//  keycloak-admin
//  representation/credential.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Credential representations.
//!
//! Used for user credentials (passwords, OTP devices) and for client
//! secrets, which the server returns in the same shape.

use crate::api::common::Collection;

representation! {
    /// A stored credential or a credential to set.
    pub struct Credential {
        id: String,
        /// Credential kind: `password`, `otp`, `secret`, ...
        #[serde(rename = "type")]
        credential_type: String,
        user_label: String,
        created_date: i64,
        secret_data: String,
        credential_data: String,
        priority: i64,
        /// Plain value; only sent when setting a credential.
        value: String,
        /// Temporary passwords must be changed at next login.
        temporary: bool,
    }
}

impl Credential {
    /// Builds a password credential for create or reset-password calls.
    pub fn password(value: impl Into<String>, temporary: bool) -> Self {
        Self::default()
            .with_credential_type("password")
            .with_value(value)
            .with_temporary(temporary)
    }
}

/// Credentials of a user.
pub type CredentialCollection = Collection<Credential>;
