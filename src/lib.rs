// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lifx_lib` - A Rust client for the LIFX HTTP remote control API.
//!
//! The client addresses lights through selectors, changes their state, runs
//! effects and manages scenes. Every operation is a single authenticated
//! HTTPS request to `https://api.lifx.com/v1/`.
//!
//! # Supported Operations
//!
//! | Method | Request |
//! |--------|---------|
//! | [`Client::list_lights`] | `GET lights/{selector}` |
//! | [`Client::set_state`] | `PUT lights/{selector}/state` |
//! | [`Client::set_states`] | `PUT lights/states` |
//! | [`Client::toggle_power`] | `POST lights/{selector}/toggle` |
//! | [`Client::breathe_effect`] | `POST lights/{selector}/effects/breathe` |
//! | [`Client::pulse_effect`] | `POST lights/{selector}/effects/pulse` |
//! | [`Client::cycle`] | `POST lights/{selector}/cycle` |
//! | [`Client::list_scenes`] | `GET scenes` |
//! | [`Client::activate_scene`] | `PUT scenes/scene_id:{uuid}/activate` |
//! | [`Client::validate_color`] | `GET color?string=...` |
//!
//! # Outcomes
//!
//! Each call resolves to one of:
//!
//! - `Ok(ApiResponse::Json(value))` - the decoded response body
//! - `Ok(ApiResponse::NoContent)` - the request was accepted with an empty body
//! - `Err(Error)` - configuration, transport or decode failure, never retried
//!
//! # Quick Start
//!
//! ```no_run
//! use lifx_lib::Client;
//! use lifx_lib::types::{Power, Selector, StateParams};
//!
//! #[tokio::main]
//! async fn main() -> lifx_lib::Result<()> {
//!     let client = Client::new("c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")?;
//!
//!     client
//!         .set_state(
//!             Selector::label("Desk"),
//!             StateParams::new().power(Power::On).color("kelvin:3500"),
//!         )
//!         .await?;
//!
//!     if let Some(scenes) = client.list_scenes().await?.into_json() {
//!         println!("{scenes:#}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```no_run
//! use lifx_lib::ClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> lifx_lib::Result<()> {
//! let client = ClientConfig::new("c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_proxy("http://proxy.local:3128")
//!     .into_client()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

pub use client::Client;
pub use config::{ClientConfig, ClientOptions};
pub use error::{ConfigurationError, DecodeError, Error, Result, TransportError};
pub use response::ApiResponse;
pub use transport::{ApiRequest, HttpTransport, HttpTransportBuilder, Method, RawResponse, Transport};
pub use types::{CycleDirection, CycleParams, EffectParams, Params, Power, Selector, StateParams};
