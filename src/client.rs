// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LIFX HTTP API client.
//!
//! Each method maps to exactly one request: it builds the path and body,
//! sends them through the configured [`Transport`] and decodes the result.
//! The client keeps no state between calls other than its configuration, so
//! a single instance can be shared by concurrent tasks.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};
use crate::types::{Params, merge_field};

/// Client for the LIFX HTTP remote control API.
///
/// # Examples
///
/// ```no_run
/// use lifx_lib::Client;
/// use lifx_lib::types::{EffectParams, Power, Selector, StateParams};
///
/// # async fn example() -> lifx_lib::Result<()> {
/// let client = Client::new("c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")?;
///
/// let lights = client.list_all_lights().await?;
/// println!("{lights:?}");
///
/// client
///     .set_state(Selector::group("Kitchen"), StateParams::new().power(Power::On).brightness(0.8))
///     .await?;
///
/// client
///     .breathe_effect(Selector::all(), "purple", EffectParams::new().period(2.0).cycles(3.0))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    headers: BTreeMap<String, String>,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for the LIFX cloud with default settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `token` is empty, or a transport
    /// error if the HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ClientConfig::new(token).into_client()
    }
}

impl<T: Transport> Client<T> {
    /// Selector used when none is given.
    pub const DEFAULT_SELECTOR: &'static str = "all";
    /// Default toggle transition, in whole seconds.
    pub const DEFAULT_TOGGLE_DURATION: u32 = 1;
    /// Default scene transition, in seconds.
    pub const DEFAULT_SCENE_DURATION: f64 = 1.0;

    pub(crate) fn from_parts(headers: BTreeMap<String, String>, transport: T) -> Self {
        Self { headers, transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists the lights matched by `selector`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn list_lights(&self, selector: impl AsRef<str>) -> Result<ApiResponse> {
        self.send(ApiRequest::new(
            Method::Get,
            format!("lights/{}", selector.as_ref()),
        ))
        .await
    }

    /// Lists every light on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn list_all_lights(&self) -> Result<ApiResponse> {
        self.list_lights(Self::DEFAULT_SELECTOR).await
    }

    /// Sets the state of the lights matched by `selector`.
    ///
    /// `params` is sent as-is; keys the client does not know are passed
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn set_state(
        &self,
        selector: impl AsRef<str>,
        params: impl Into<Params>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::new(Method::Put, format!("lights/{}/state", selector.as_ref()))
            .with_json(Value::Object(params.into()));
        self.send(request).await
    }

    /// Sets several states at once, each entry carrying its own `selector`.
    ///
    /// `defaults` applies to every entry that does not set a key itself; pass
    /// an empty [`Params`] for none.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn set_states<I, S>(&self, states: I, defaults: impl Into<Params>) -> Result<ApiResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<Params>,
    {
        let body = json!({
            "states": to_array(states),
            "defaults": Value::Object(defaults.into()),
        });
        self.send(ApiRequest::new(Method::Put, "lights/states").with_json(body))
            .await
    }

    /// Toggles power of the lights matched by `selector`.
    ///
    /// `duration` defaults to [`Self::DEFAULT_TOGGLE_DURATION`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn toggle_power(
        &self,
        selector: impl AsRef<str>,
        duration: Option<u32>,
    ) -> Result<ApiResponse> {
        let duration = duration.unwrap_or(Self::DEFAULT_TOGGLE_DURATION);
        let request = ApiRequest::new(Method::Post, format!("lights/{}/toggle", selector.as_ref()))
            .with_json(json!({ "duration": duration }));
        self.send(request).await
    }

    /// Runs the breathe effect on the lights matched by `selector`.
    ///
    /// `color` always replaces a `color` key present in `params`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn breathe_effect(
        &self,
        selector: impl AsRef<str>,
        color: impl Into<String>,
        params: impl Into<Params>,
    ) -> Result<ApiResponse> {
        self.effect(selector.as_ref(), "breathe", color.into(), params.into())
            .await
    }

    /// Runs the pulse effect on the lights matched by `selector`.
    ///
    /// `color` always replaces a `color` key present in `params`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn pulse_effect(
        &self,
        selector: impl AsRef<str>,
        color: impl Into<String>,
        params: impl Into<Params>,
    ) -> Result<ApiResponse> {
        self.effect(selector.as_ref(), "pulse", color.into(), params.into())
            .await
    }

    /// Moves the lights matched by `selector` to the next state in `states`.
    ///
    /// `states` always replaces a `states` key present in `params`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn cycle<I, S>(
        &self,
        selector: impl AsRef<str>,
        states: I,
        params: impl Into<Params>,
    ) -> Result<ApiResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<Params>,
    {
        let body = merge_field(params.into(), "states", to_array(states));
        let request = ApiRequest::new(Method::Post, format!("lights/{}/cycle", selector.as_ref()))
            .with_json(body);
        self.send(request).await
    }

    /// Lists the scenes saved on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn list_scenes(&self) -> Result<ApiResponse> {
        self.send(ApiRequest::new(Method::Get, "scenes")).await
    }

    /// Activates the scene with the given UUID.
    ///
    /// `duration` defaults to [`Self::DEFAULT_SCENE_DURATION`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn activate_scene(
        &self,
        scene_uuid: impl AsRef<str>,
        duration: Option<f64>,
    ) -> Result<ApiResponse> {
        let duration = duration.unwrap_or(Self::DEFAULT_SCENE_DURATION);
        let request = ApiRequest::new(
            Method::Put,
            format!("scenes/scene_id:{}/activate", scene_uuid.as_ref()),
        )
        .with_json(json!({ "duration": duration }));
        self.send(request).await
    }

    /// Asks the service how it would interpret a color string.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is not valid JSON.
    pub async fn validate_color(&self, color: impl AsRef<str>) -> Result<ApiResponse> {
        self.send(ApiRequest::new(Method::Get, "color").with_query("string", color.as_ref()))
            .await
    }

    async fn effect(
        &self,
        selector: &str,
        effect: &str,
        color: String,
        params: Params,
    ) -> Result<ApiResponse> {
        let request = ApiRequest::new(
            Method::Post,
            format!("lights/{selector}/effects/{effect}"),
        )
        .with_json(merge_field(params, "color", Value::String(color)));
        self.send(request).await
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let request = request.with_headers(self.headers.clone());

        tracing::debug!(method = %request.method, path = %request.path, "Calling LIFX API");

        let raw = self.transport.execute(request).await?;
        Ok(ApiResponse::from_raw(raw)?)
    }
}

fn to_array<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<Params>,
{
    Value::Array(
        items
            .into_iter()
            .map(|item| Value::Object(item.into()))
            .collect(),
    )
}
