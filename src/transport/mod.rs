// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP executors used by the API client.
//!
//! The client never talks to the network itself. It builds an [`ApiRequest`]
//! and hands it to a [`Transport`], which returns the raw status and body.
//!
//! - [`HttpTransport`]: the default executor, backed by `reqwest`
//!
//! Any other type implementing [`Transport`] can be injected through
//! [`ClientConfig::into_client_with`](crate::ClientConfig::into_client_with),
//! which is how tests substitute a scripted executor.

mod http;

pub use http::{HttpTransport, HttpTransportBuilder};

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::TransportError;

/// HTTP verbs used by the LIFX API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only requests.
    Get,
    /// State replacement requests.
    Put,
    /// Action requests (toggle, effects, cycle).
    Post,
}

impl Method {
    /// Returns the verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request against the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path relative to the versioned API root, e.g. `lights/all`.
    pub path: String,
    /// JSON body, if any.
    pub json: Option<Value>,
    /// Query string pairs, unencoded.
    pub query: Vec<(String, String)>,
    /// Headers attached to the request, including `Authorization`.
    pub headers: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Creates a request with no body, query, or headers.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            json: None,
            query: Vec::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    /// Appends a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Replaces the header map.
    #[must_use]
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// Raw outcome of a successful (2xx) request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Status code returned by the service.
    pub status: u16,
    /// Undecoded body text; empty for 202/204 style responses.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// An HTTP executor.
///
/// Implementations must return `Err` for network failures and for every
/// non-2xx status, so that an `Ok` with an empty body always means
/// "no content" rather than "failed".
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Executes one request and returns its raw outcome.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request could not be completed or the
    /// service answered with a non-success status.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn request_builder_chain() {
        let request = ApiRequest::new(Method::Get, "color")
            .with_query("string", "purple")
            .with_json(json!({"a": 1}));

        assert_eq!(request.path, "color");
        assert_eq!(
            request.query,
            vec![("string".to_string(), "purple".to_string())]
        );
        assert_eq!(request.json, Some(json!({"a": 1})));
        assert!(request.headers.is_empty());
    }
}
