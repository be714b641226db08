// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types used to build LIFX API requests.
//!
//! None of these types validate their contents: selectors, colors and ranges
//! are checked by the service, which reports problems in its error responses.
//!
//! # Types
//!
//! - [`Selector`] - Which lights a request targets
//! - [`Power`] - On/Off
//! - [`CycleDirection`] - Forward/Backward through a cycle
//! - [`Params`] - Open JSON object used for every request body
//! - [`StateParams`], [`EffectParams`], [`CycleParams`] - Builders producing [`Params`]

mod params;
mod power;
mod selector;

pub(crate) use params::merge_field;
pub use params::{CycleParams, EffectParams, Params, StateParams};
pub use power::{CycleDirection, Power};
pub use selector::Selector;
