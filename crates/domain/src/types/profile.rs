//! User profile types
//!
//! Public profile attributes returned by `GET /{user-id}`.

use serde::{Deserialize, Serialize};

/// Profile of a Messenger (or Instagram) user as returned by the Graph API.
///
/// `first_name` and `last_name` are always present on the type; an absent
/// wire field decodes to an empty string. Every other attribute is only
/// populated when the caller's field selection and the platform include it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, used by Instagram in place of first/last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Instagram username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(rename = "profile_pic", default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Locale tag such as `en_US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Offset from UTC in hours, may be fractional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Profile {
    /// Best human-readable name: `first last` when available, otherwise the
    /// platform display name.
    pub fn display_name(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if !full.is_empty() {
            return Some(full.to_string());
        }
        self.name.clone().filter(|name| !name.is_empty())
    }
}
