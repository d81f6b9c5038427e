//
//  keycloak-admin
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Functions
//!
//! Small helpers shared by the representations and the HTTP layer:
//!
//! - **Time**: decoding Keycloak's millisecond epoch timestamps
//! - **Locations**: extracting the created resource id from a `Location` header

use chrono::{DateTime, Utc};
use url::Url;

/// Converts a Keycloak timestamp (milliseconds since the Unix epoch) into a
/// UTC datetime.
///
/// # Example
///
/// ```rust
/// use keycloak_admin::util::from_timestamp_millis;
///
/// let created = from_timestamp_millis(1704067200000).unwrap();
/// assert_eq!(created.to_rfc3339(), "2024-01-01T00:00:00+00:00");
/// ```
///
/// # Notes
///
/// - Returns `None` for values outside chrono's representable range.
pub fn from_timestamp_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Extracts the id of a created resource from a `Location` header value.
///
/// Keycloak answers create calls with `201 Created` and a `Location` pointing
/// at the new resource; its last path segment is the id (or the name, for
/// realms and roles). Relative locations are resolved against `request_url`.
/// Percent-encoding in that segment is decoded.
///
/// # Example
///
/// ```rust
/// use keycloak_admin::util::id_from_location;
/// use url::Url;
///
/// let request = Url::parse("http://keycloak:8080/admin/realms/master/users").unwrap();
///
/// let location = "http://keycloak:8080/admin/realms/master/users/afab8ba7-e278";
/// assert_eq!(id_from_location(&request, location).as_deref(), Some("afab8ba7-e278"));
///
/// let role = "/admin/realms/master/roles/sales%20lead";
/// assert_eq!(id_from_location(&request, role).as_deref(), Some("sales lead"));
/// ```
pub fn id_from_location(request_url: &Url, location: &str) -> Option<String> {
    let url = request_url.join(location).ok()?;
    let segment = url.path_segments()?.rev().find(|s| !s.is_empty())?;
    // Form decoding treats '+' as a space and '&' as a separator; path segments do not.
    let escaped = format!("id={}", segment.replace('+', "%2B").replace('&', "%26"));
    url::form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp_millis() {
        let dt = from_timestamp_millis(1_500).unwrap();
        assert_eq!(dt.timestamp(), 1);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    fn request_url() -> Url {
        Url::parse("https://sso.example.com/admin/realms/master/groups").unwrap()
    }

    #[test]
    fn test_id_from_location_trailing_slash() {
        assert_eq!(
            id_from_location(&request_url(), "https://sso.example.com/admin/realms/master/groups/g-1/")
                .as_deref(),
            Some("g-1")
        );
    }

    #[test]
    fn test_id_from_location_resolves_relative_paths() {
        assert_eq!(
            id_from_location(&request_url(), "/admin/realms/master/groups/g-9").as_deref(),
            Some("g-9")
        );
        assert_eq!(
            id_from_location(&request_url(), "groups/a%2Bb").as_deref(),
            Some("a+b")
        );
    }

    #[test]
    fn test_id_from_location_rejects_garbage() {
        assert_eq!(id_from_location(&request_url(), "http://[bad"), None);
        assert_eq!(id_from_location(&request_url(), "mailto:admin@example.com"), None);
    }
}
