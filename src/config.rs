// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.
//!
//! A [`ClientConfig`] holds the access token plus a [`ClientOptions`] bag of
//! transport overrides. Options can be layered: scalar settings from an
//! overlay replace the current ones when present, while header maps are
//! merged key by key. The `Authorization` header is always derived from the
//! token and cannot be overridden.
//!
//! # Examples
//!
//! ```
//! use lifx_lib::{ClientConfig, ClientOptions};
//! use std::time::Duration;
//!
//! let overlay = ClientOptions::new()
//!     .timeout(Duration::from_secs(5))
//!     .header("X-Request-Source", "living-room-panel");
//!
//! let config = ClientConfig::new("c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")
//!     .with_user_agent("panel/2.1")
//!     .with_options(overlay);
//!
//! assert_eq!(config.options().timeout, Some(Duration::from_secs(5)));
//! let _client = config.into_client().unwrap();
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::client::Client;
use crate::error::{ConfigurationError, Error};
use crate::transport::{HttpTransport, HttpTransportBuilder, Transport};

const AUTHORIZATION: &str = "Authorization";

/// Overridable transport settings.
///
/// Unset fields fall back to the transport defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Total request timeout.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub connect_timeout: Option<Duration>,
    /// Proxy URL applied to every request.
    pub proxy: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl ClientOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the proxy URL.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds an extra header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Layers `overlay` on top of `self`.
    ///
    /// Fields set in the overlay win; headers are combined, with the overlay
    /// winning for identical names.
    #[must_use]
    pub fn merge(mut self, overlay: ClientOptions) -> Self {
        self.timeout = overlay.timeout.or(self.timeout);
        self.connect_timeout = overlay.connect_timeout.or(self.connect_timeout);
        self.proxy = overlay.proxy.or(self.proxy);
        self.user_agent = overlay.user_agent.or(self.user_agent);
        self.headers.extend(overlay.headers);
        self
    }
}

/// Configuration for a [`Client`].
///
/// The token is validated when the client is built, before any request is
/// attempted.
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    options: ClientOptions,
}

impl ClientConfig {
    /// Creates a configuration for the given LIFX access token.
    ///
    /// Tokens are generated at <https://cloud.lifx.com/settings>.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            options: ClientOptions::default(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.options.connect_timeout = Some(timeout);
        self
    }

    /// Routes requests through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.options.proxy = Some(proxy.into());
        self
    }

    /// Overrides the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    /// Merges an option overlay into this configuration.
    #[must_use]
    pub fn with_options(mut self, overlay: ClientOptions) -> Self {
        self.options = self.options.merge(overlay);
        self
    }

    /// Returns the transport options.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Builds a client using the default HTTPS transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the token is empty, a header or the
    /// proxy is invalid, or a transport error if the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<Client, Error> {
        let headers = self.request_headers()?;
        let transport: HttpTransport = self.configure_transport(HttpTransportBuilder::new()).build()?;

        Ok(Client::from_parts(headers, transport))
    }

    /// Applies the timeout, proxy and user agent options to a transport builder.
    ///
    /// Settings the options leave unset keep whatever `builder` already has,
    /// so a builder pointed at another base address can reuse this
    /// configuration.
    #[must_use]
    pub fn configure_transport(&self, mut builder: HttpTransportBuilder) -> HttpTransportBuilder {
        if let Some(timeout) = self.options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(proxy) = &self.options.proxy {
            builder = builder.proxy(proxy.clone());
        }
        if let Some(user_agent) = &self.options.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder
    }

    /// Builds a client around a caller-supplied transport.
    ///
    /// Timeout, proxy and user agent options are ignored; they only configure
    /// the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the token is empty or a header is
    /// invalid.
    pub fn into_client_with<T: Transport>(self, transport: T) -> Result<Client<T>, Error> {
        let headers = self.request_headers()?;
        Ok(Client::from_parts(headers, transport))
    }

    /// Validates the configuration and returns the headers sent on every request.
    fn request_headers(&self) -> Result<BTreeMap<String, String>, ConfigurationError> {
        if self.token.trim().is_empty() {
            return Err(ConfigurationError::MissingToken);
        }

        let mut headers = BTreeMap::new();
        for (name, value) in &self.options.headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION) {
                tracing::warn!(header = %name, "Ignoring custom header, authorization comes from the token");
                continue;
            }
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ConfigurationError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            HeaderValue::from_str(value).map_err(|e| ConfigurationError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            headers.insert(name.clone(), value.clone());
        }

        let bearer = format!("Bearer {}", self.token);
        HeaderValue::from_str(&bearer).map_err(|e| ConfigurationError::InvalidHeader {
            name: AUTHORIZATION.to_string(),
            reason: e.to_string(),
        })?;
        headers.insert(AUTHORIZATION.to_string(), bearer);

        Ok(headers)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}
