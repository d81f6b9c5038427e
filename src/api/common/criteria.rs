//
//  keycloak-admin
//  api/common/criteria.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-parameter builder for search and list endpoints.
//!
//! Keycloak filters list endpoints through plain query parameters
//! (`username`, `exact`, `first`, `max`, ...). [`Criteria`] collects them as
//! name/value pairs. The typed helpers cover the common filters; anything else
//! goes through [`Criteria::with`] and is sent verbatim. Filter semantics are
//! left to the server.
//!
//! # Example
//!
//! ```rust
//! use keycloak_admin::Criteria;
//!
//! let criteria = Criteria::new()
//!     .username("jdoe")
//!     .exact(true)
//!     .with("idpAlias", "github");
//!
//! assert_eq!(criteria.to_query_string(), "exact=true&idpAlias=github&username=jdoe");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

/// A set of query-parameter filters.
///
/// Keys are unique; setting a key twice keeps the last value. Pairs are kept
/// sorted by key so the rendered query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    params: BTreeMap<String, String>,
}

impl Criteria {
    /// Creates an empty set of filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary filter, passed through to the server unchanged.
    ///
    /// Values are rendered with [`Display`](fmt::Display), so booleans become
    /// `true`/`false` and numbers their decimal form.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Full-text search across the resource's searchable fields.
    #[must_use]
    pub fn search(self, value: impl fmt::Display) -> Self {
        self.with("search", value)
    }

    #[must_use]
    pub fn username(self, value: impl fmt::Display) -> Self {
        self.with("username", value)
    }

    #[must_use]
    pub fn email(self, value: impl fmt::Display) -> Self {
        self.with("email", value)
    }

    #[must_use]
    pub fn first_name(self, value: impl fmt::Display) -> Self {
        self.with("firstName", value)
    }

    #[must_use]
    pub fn last_name(self, value: impl fmt::Display) -> Self {
        self.with("lastName", value)
    }

    /// Requires exact instead of substring matches for the other filters.
    #[must_use]
    pub fn exact(self, value: bool) -> Self {
        self.with("exact", value)
    }

    #[must_use]
    pub fn enabled(self, value: bool) -> Self {
        self.with("enabled", value)
    }

    /// Attribute query, in Keycloak's `key1:value1 key2:value2` syntax.
    #[must_use]
    pub fn q(self, value: impl fmt::Display) -> Self {
        self.with("q", value)
    }

    /// Filters clients by their `clientId`.
    #[must_use]
    pub fn client_id(self, value: impl fmt::Display) -> Self {
        self.with("clientId", value)
    }

    /// Offset of the first result (pagination).
    #[must_use]
    pub fn first(self, value: u32) -> Self {
        self.with("first", value)
    }

    /// Maximum number of results (pagination).
    #[must_use]
    pub fn max(self, value: u32) -> Self {
        self.with("max", value)
    }

    /// Asks the server to omit nested attributes from each element.
    #[must_use]
    pub fn brief_representation(self, value: bool) -> Self {
        self.with("briefRepresentation", value)
    }

    /// Admin-event filter on operation types, e.g. `CREATE`.
    ///
    /// The server accepts the parameter repeated, but criteria keys are
    /// unique: a later call replaces the earlier value, so one operation type
    /// can be filtered per query.
    #[must_use]
    pub fn operation_types(self, value: impl fmt::Display) -> Self {
        self.with("operationTypes", value)
    }

    /// Admin-event filter on resource types, e.g. `USER`.
    ///
    /// Like [`operation_types`](Self::operation_types), only one value is
    /// sent; a later call replaces the earlier one.
    #[must_use]
    pub fn resource_types(self, value: impl fmt::Display) -> Self {
        self.with("resourceTypes", value)
    }

    /// Lower date bound for event queries, sent as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_from(self, date: NaiveDate) -> Self {
        self.with("dateFrom", date.format("%Y-%m-%d"))
    }

    /// Upper date bound for event queries, sent as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_to(self, date: NaiveDate) -> Self {
        self.with("dateTo", date.format("%Y-%m-%d"))
    }

    /// Returns the value of a filter, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over the name/value pairs in key order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the filters as a URL-encoded query string (without `?`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |criteria, (key, value)| criteria.with(key, value))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans_and_numbers_render_as_text() {
        let criteria = Criteria::new().exact(true).first(20).max(10);
        assert_eq!(criteria.get("exact"), Some("true"));
        assert_eq!(criteria.get("first"), Some("20"));
        assert_eq!(criteria.get("max"), Some("10"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let criteria = Criteria::new().with("idpUserId", "42");
        assert_eq!(criteria.to_query_string(), "idpUserId=42");
    }

    #[test]
    fn test_last_value_wins() {
        let criteria = Criteria::new().username("a").username("b");
        assert_eq!(criteria.get("username"), Some("b"));
        assert_eq!(criteria.pairs().count(), 1);
    }

    #[test]
    fn test_event_type_filters_send_one_value() {
        let criteria = Criteria::new()
            .operation_types("CREATE")
            .operation_types("DELETE")
            .resource_types("USER");
        assert_eq!(
            criteria.to_query_string(),
            "operationTypes=DELETE&resourceTypes=USER"
        );
    }

    #[test]
    fn test_query_string_is_encoded() {
        let criteria = Criteria::new().q("department:R&D");
        assert_eq!(criteria.to_query_string(), "q=department%3AR%26D");
    }

    #[test]
    fn test_dates_render_as_iso_days() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let criteria = Criteria::new().date_from(date);
        assert_eq!(criteria.get("dateFrom"), Some("2024-03-09"));
    }

    #[test]
    fn test_collects_from_pairs() {
        let criteria: Criteria = [("username", "jdoe"), ("email", "j@example.com")]
            .into_iter()
            .collect();
        assert_eq!(criteria.get("email"), Some("j@example.com"));
        assert!(!criteria.is_empty());
    }
}
