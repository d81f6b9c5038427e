//
//  keycloak-admin
//  api/common/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed Collections for List Endpoints
//!
//! Keycloak list endpoints return bare JSON arrays and page through
//! `first`/`max` query parameters instead of wrapping results in a paging
//! envelope. A [`Collection`] holds one such page, decoded into a single
//! representation type.
//!
//! # Overview
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | [`count()`](Collection::count) | Number of elements in the source array |
//! | [`first()`](Collection::first) | First element, or [`Error::EmptyCollection`] |
//! | [`iter()`](Collection::iter) | Lazy iteration, restartable at will |
//!
//! Every concrete collection (`UserCollection`, `RoleCollection`, ...) is a
//! type alias fixing the element type, so a collection can never mix
//! representations.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::api::common::Collection;
//! use keycloak_admin::representation::Role;
//!
//! let json = r#"[{"name": "offline_access"}, {"name": "uma_authorization"}]"#;
//! let roles: Collection<Role> = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(roles.count(), 2);
//! assert_eq!(roles.first().unwrap().name.as_deref(), Some("offline_access"));
//!
//! // Iteration can be restarted because the backing array never changes
//! assert_eq!(roles.iter().count(), roles.iter().count());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// An ordered, immutable sequence of one representation type.
///
/// Built once from a decoded JSON array. Serializes back to a plain JSON
/// array, which is the body format of the role mapping endpoints.
///
/// # Type Parameters
///
/// - `R` - The representation every element decodes into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<R> {
    items: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R> Collection<R> {
    /// Creates a collection over already decoded elements.
    pub fn new(items: Vec<R>) -> Self {
        Self { items }
    }

    /// Number of elements in the collection.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the source array was empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] when the collection has no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycloak_admin::api::common::Collection;
    /// use keycloak_admin::representation::User;
    /// use keycloak_admin::Error;
    ///
    /// let users: Collection<User> = Collection::default();
    /// assert!(matches!(users.first(), Err(Error::EmptyCollection)));
    /// ```
    pub fn first(&self) -> Result<&R> {
        self.items.first().ok_or(Error::EmptyCollection)
    }

    /// Returns the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.items.get(index)
    }

    /// Lazily iterates over the elements in server order.
    ///
    /// Each call starts a fresh pass over the backing array.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    /// Consumes the collection, returning the backing vector.
    pub fn into_vec(self) -> Vec<R> {
        self.items
    }
}

impl<R: PartialEq> Collection<R> {
    /// Returns `true` if an equal element is present.
    pub fn contains(&self, item: &R) -> bool {
        self.items.contains(item)
    }
}

impl<R: DeserializeOwned> Collection<R> {
    /// Decodes a collection from raw JSON elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if any element does not match `R`.
    pub fn from_values(values: Vec<serde_json::Value>) -> Result<Self> {
        let items = values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<R>, _>>()?;
        Ok(Self { items })
    }
}

impl<R> From<Vec<R>> for Collection<R> {
    fn from(items: Vec<R>) -> Self {
        Self::new(items)
    }
}

impl<R> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<R> IntoIterator for Collection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
