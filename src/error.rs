// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `lifx_lib` library.
//!
//! Every API call can fail in one of three ways: the client was never usable
//! (configuration), the request did not produce a 2xx response (transport),
//! or the service claimed to send JSON but did not (decode). The client never
//! recovers from any of them locally; they reach the caller unchanged.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The request failed at the network level or returned a non-2xx status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A non-empty response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors raised while building a client, before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The bearer token was missing or empty.
    #[error("an access token is required")]
    MissingToken,

    /// A custom header could not be used on the wire.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The proxy URL could not be parsed.
    #[error("invalid proxy: {0}")]
    InvalidProxy(String),
}

/// Errors raised by the HTTP executor.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
        /// Raw response body, usually the service's `{"error": ...}` object.
        body: String,
    },

    /// Executor-defined communication failure.
    #[error("connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Returns the HTTP status code when the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::Connection(_) => None,
        }
    }
}

/// Errors raised while decoding a response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_display() {
        let err = ConfigurationError::InvalidHeader {
            name: "X-Bad".to_string(),
            reason: "invalid value".to_string(),
        };
        assert_eq!(err.to_string(), "invalid header X-Bad: invalid value");
    }

    #[test]
    fn error_from_configuration_error() {
        let err: Error = ConfigurationError::MissingToken.into();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::MissingToken)
        ));
    }

    #[test]
    fn status_error_display_and_code() {
        let err = TransportError::Status {
            status: 404,
            reason: "Not Found".to_string(),
            body: r#"{"error":"Could not find id:123"}"#.to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 - Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn connection_error_has_no_status() {
        let err = TransportError::Connection("reset by peer".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "connection failed: reset by peer");
    }

    #[test]
    fn decode_error_wraps_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = DecodeError::from(json_err).into();
        assert!(matches!(err, Error::Decode(DecodeError::Json(_))));
    }
}
