// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response envelope returned by every API operation.
//!
//! The LIFX API answers with either a JSON document or, for accepted
//! asynchronous actions (202/204), an empty body. Both are successes, so the
//! envelope keeps them apart instead of collapsing "nothing" into `null`.
//!
//! # Examples
//!
//! ```
//! use lifx_lib::ApiResponse;
//! use lifx_lib::transport::RawResponse;
//!
//! let empty = ApiResponse::from_raw(RawResponse::new(202, "")).unwrap();
//! assert!(empty.is_no_content());
//!
//! let json = ApiResponse::from_raw(RawResponse::new(200, r#"{"results":[]}"#)).unwrap();
//! assert!(json.get("results").is_some());
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;
use crate::transport::RawResponse;

/// Decoded outcome of a successful API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The service accepted the request and returned no body.
    NoContent,
    /// The decoded JSON body.
    Json(Value),
}

impl ApiResponse {
    /// Decodes a raw executor response.
    ///
    /// A body that is empty or only whitespace yields [`ApiResponse::NoContent`]
    /// without attempting to parse it.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if a non-empty body is not valid JSON.
    pub fn from_raw(raw: RawResponse) -> Result<Self, DecodeError> {
        if raw.body.trim().is_empty() {
            return Ok(Self::NoContent);
        }
        Ok(Self::Json(serde_json::from_str(&raw.body)?))
    }

    /// Returns `true` if the service returned an empty body.
    #[must_use]
    pub fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    /// Returns the decoded body, if any.
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::NoContent => None,
            Self::Json(value) => Some(value),
        }
    }

    /// Consumes the envelope and returns the decoded body, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::NoContent => None,
            Self::Json(value) => Some(value),
        }
    }

    /// Looks up a top-level key of an object body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.json().and_then(|v| v.get(key))
    }

    /// Deserializes the body into a caller-chosen type.
    ///
    /// Returns `Ok(None)` for [`ApiResponse::NoContent`].
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>, DecodeError> {
        match self {
            Self::NoContent => Ok(None),
            Self::Json(value) => Ok(Some(T::deserialize(value)?)),
        }
    }
}
