// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated values accepted by state and cycle requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Power state of a light.
///
/// # Examples
///
/// ```
/// use lifx_lib::types::Power;
///
/// assert_eq!(Power::On.as_str(), "on");
/// assert_eq!(Power::from(false), Power::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// Light is off.
    Off,
    /// Light is on.
    On,
}

impl Power {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for Power {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// Direction in which a cycle request walks its list of states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleDirection {
    /// Next state in the list.
    #[default]
    Forward,
    /// Previous state in the list.
    Backward,
}

impl CycleDirection {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for CycleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_serde_matches_as_str() {
        assert_eq!(serde_json::to_value(Power::On).unwrap(), "on");
        assert_eq!(serde_json::to_value(Power::Off).unwrap(), "off");
        let parsed: Power = serde_json::from_str("\"on\"").unwrap();
        assert_eq!(parsed, Power::On);
    }

    #[test]
    fn direction_default_is_forward() {
        assert_eq!(CycleDirection::default(), CycleDirection::Forward);
        assert_eq!(CycleDirection::Backward.to_string(), "backward");
        assert_eq!(
            serde_json::to_value(CycleDirection::Backward).unwrap(),
            "backward"
        );
    }
}
