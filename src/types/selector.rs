// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light selectors.
//!
//! A selector names the light(s) a request targets. The client treats it as
//! an opaque string and never validates it; the service reports malformed
//! selectors through its error responses.

use std::fmt;

/// Expression identifying one or more lights.
///
/// # Examples
///
/// ```
/// use lifx_lib::types::Selector;
///
/// assert_eq!(Selector::all().as_str(), "all");
/// assert_eq!(Selector::id("d073d5000001").as_str(), "id:d073d5000001");
/// assert_eq!(Selector::group("Living Room").to_string(), "group:Living Room");
///
/// // Any string is accepted verbatim
/// let raw: Selector = "label:Desk,label:Lamp".into();
/// assert_eq!(raw.as_str(), "label:Desk,label:Lamp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    /// Every light on the account.
    #[must_use]
    pub fn all() -> Self {
        Self("all".to_string())
    }

    /// A light by its serial number.
    #[must_use]
    pub fn id(id: impl AsRef<str>) -> Self {
        Self::prefixed("id", id.as_ref())
    }

    /// A light by its label.
    #[must_use]
    pub fn label(label: impl AsRef<str>) -> Self {
        Self::prefixed("label", label.as_ref())
    }

    /// Lights in a group, by group name.
    #[must_use]
    pub fn group(name: impl AsRef<str>) -> Self {
        Self::prefixed("group", name.as_ref())
    }

    /// Lights in a group, by group id.
    #[must_use]
    pub fn group_id(id: impl AsRef<str>) -> Self {
        Self::prefixed("group_id", id.as_ref())
    }

    /// Lights in a location, by location name.
    #[must_use]
    pub fn location(name: impl AsRef<str>) -> Self {
        Self::prefixed("location", name.as_ref())
    }

    /// Lights in a location, by location id.
    #[must_use]
    pub fn location_id(id: impl AsRef<str>) -> Self {
        Self::prefixed("location_id", id.as_ref())
    }

    /// Lights that belong to a saved scene.
    #[must_use]
    pub fn scene_id(uuid: impl AsRef<str>) -> Self {
        Self::prefixed("scene_id", uuid.as_ref())
    }

    fn prefixed(kind: &str, value: &str) -> Self {
        Self(format!("{kind}:{value}"))
    }

    /// Returns the selector expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self(value)
    }
}
