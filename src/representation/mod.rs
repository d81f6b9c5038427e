//
//  keycloak-admin
//  representation/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Keycloak Representations
//!
//! Typed mirrors of the JSON objects exchanged with the admin REST API.
//!
//! Every representation follows the same rules:
//!
//! - All attributes are `Option`s. The server omits what it does not return
//!   (brief representations, fields gated by permissions), and the client
//!   omits unset attributes when sending, so partial updates stay partial.
//! - JSON names are Keycloak's camelCase names.
//! - Values are replaced, not mutated: each attribute has a `with_*` method
//!   that consumes the value and returns the modified copy.
//! - Identity is the server-assigned `id`, absent until the object is created.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::representation::User;
//!
//! let user = User::default()
//!     .with_username("jdoe")
//!     .with_first_name("John")
//!     .with_enabled(true);
//!
//! let renamed = user.clone().with_first_name("Johnny");
//! assert_eq!(user.first_name.as_deref(), Some("John"));
//! assert_eq!(renamed.first_name.as_deref(), Some("Johnny"));
//!
//! let json = serde_json::to_value(&renamed).unwrap();
//! assert_eq!(json["firstName"], "Johnny");
//! assert!(json.get("id").is_none());
//! ```

/// Declares a representation struct and its `with_*` replacement methods.
///
/// Each listed field becomes a public `Option<T>` that is skipped when
/// serializing if unset. Extra attributes on a field (docs, `serde(rename)`)
/// are carried through.
macro_rules! representation {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        paste::paste! {
            impl $name {
                $(
                    #[doc = concat!("Returns this value with `", stringify!($field), "` replaced.")]
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                )*
            }
        }
    };
}

mod attack_detection;
mod client;
mod client_scope;
mod component;
mod credential;
mod event;
mod federation;
mod group;
mod keys;
mod realm;
mod role;
mod server_info;
mod session;
mod user;

pub use attack_detection::*;
pub use client::*;
pub use client_scope::*;
pub use component::*;
pub use credential::*;
pub use event::*;
pub use federation::*;
pub use group::*;
pub use keys::*;
pub use realm::*;
pub use role::*;
pub use server_info::*;
pub use session::*;
pub use user::*;
