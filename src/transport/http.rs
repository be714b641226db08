// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `reqwest`-backed executor for the LIFX HTTP API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderValue;

use crate::error::{ConfigurationError, Error, TransportError};
use crate::transport::{ApiRequest, Method, RawResponse, Transport};

const USER_AGENT: &str = "User-Agent";

/// Default executor talking to the LIFX cloud over HTTPS.
///
/// Holds a single `reqwest::Client`, so connections are pooled and reused for
/// the lifetime of the transport.
///
/// # Examples
///
/// ```
/// use lifx_lib::transport::HttpTransport;
///
/// let transport = HttpTransport::new().unwrap();
/// assert_eq!(transport.base_url(), "https://api.lifx.com/v1");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Address of the LIFX cloud API.
    pub const DEFAULT_BASE_URI: &'static str = "https://api.lifx.com";
    /// API version segment appended to the base address.
    pub const API_VERSION: &'static str = "v1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a transport bound to the LIFX cloud with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn new() -> Result<Self, Error> {
        HttpTransportBuilder::new().build()
    }

    /// Returns a builder for a customised transport.
    #[must_use]
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Returns the versioned API root, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for a relative path and its query pairs.
    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }

        url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.build_url(&request.path, &request.query);

        tracing::debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
            Method::Post => self.client.post(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read rejected response body");
                    String::new()
                }
            };
            tracing::debug!(status = status.as_u16(), body = %body, "API request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received API response");

        Ok(RawResponse::new(status.as_u16(), body))
    }
}

/// Builder for an [`HttpTransport`].
///
/// The base address is the only way to point the client somewhere other
/// than the LIFX cloud; the API version segment is always appended.
///
/// # Examples
///
/// ```
/// use lifx_lib::transport::HttpTransportBuilder;
/// use std::time::Duration;
///
/// let transport = HttpTransportBuilder::new()
///     .base_uri("http://127.0.0.1:8080/")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(transport.base_url(), "http://127.0.0.1:8080/v1");
/// ```
#[derive(Debug, Default, Clone)]
pub struct HttpTransportBuilder {
    base_uri: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base address (scheme, host and optional port).
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Sets the total request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection establishment timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Routes all requests through the given proxy URL.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidProxy`] if the proxy URL cannot
    /// be parsed, [`ConfigurationError::InvalidHeader`] if the user agent is
    /// not a valid header value, or a transport error if the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpTransport, Error> {
        let base_uri = self
            .base_uri
            .unwrap_or_else(|| HttpTransport::DEFAULT_BASE_URI.to_string());
        let base_url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            HttpTransport::API_VERSION
        );

        let user_agent = self.user_agent.unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        });
        let user_agent = HeaderValue::from_str(&user_agent).map_err(|e| {
            ConfigurationError::InvalidHeader {
                name: USER_AGENT.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut builder = Client::builder()
            .timeout(self.timeout.unwrap_or(HttpTransport::DEFAULT_TIMEOUT))
            .user_agent(user_agent);

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(proxy) = self.proxy {
            let proxy = reqwest::Proxy::all(&proxy)
                .map_err(|e| ConfigurationError::InvalidProxy(format!("{proxy}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(TransportError::Http)?;

        Ok(HttpTransport { base_url, client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.base_url(), "https://api.lifx.com/v1");
    }

    #[test]
    fn custom_base_uri_strips_trailing_slash() {
        let transport = HttpTransport::builder()
            .base_uri("http://localhost:9000/")
            .build()
            .unwrap();
        assert_eq!(transport.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn build_url_without_query() {
        let transport = HttpTransport::new().unwrap();
        let url = transport.build_url("lights/id:d073d5000001/state", &[]);
        assert_eq!(url, "https://api.lifx.com/v1/lights/id:d073d5000001/state");
    }

    #[test]
    fn build_url_encodes_query_values() {
        let transport = HttpTransport::new().unwrap();
        let url = transport.build_url(
            "color",
            &[("string".to_string(), "hue:120 saturation:1".to_string())],
        );
        assert_eq!(
            url,
            "https://api.lifx.com/v1/color?string=hue%3A120%20saturation%3A1"
        );
    }

    #[test]
    fn invalid_proxy_is_a_configuration_error() {
        let result = HttpTransport::builder().proxy("not a url").build();
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigurationError::InvalidProxy(_)))
        ));
    }

    #[test]
    fn invalid_user_agent_is_a_configuration_error() {
        let result = HttpTransport::builder().user_agent("bad\nagent").build();
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigurationError::InvalidHeader { ref name, .. }))
                if name == "User-Agent"
        ));
    }

    #[test]
    fn builder_with_all_options() {
        let transport = HttpTransport::builder()
            .base_uri("https://example.test")
            .timeout(Duration::from_secs(3))
            .connect_timeout(Duration::from_secs(1))
            .proxy("http://127.0.0.1:3128")
            .user_agent("lights-test/1.0")
            .build()
            .unwrap();
        assert_eq!(transport.base_url(), "https://example.test/v1");
    }
}
