// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request parameter maps.
//!
//! Every request body is an open JSON object. [`Params`] is that object; the
//! builders in this module are conveniences that emit only the keys that
//! were set, so anything the service adds later can still be passed through
//! with `with`.
//!
//! # Examples
//!
//! ```
//! use lifx_lib::types::{Params, Power, StateParams};
//! use serde_json::json;
//!
//! let params: Params = StateParams::new()
//!     .power(Power::On)
//!     .color("kelvin:2700")
//!     .brightness(0.5)
//!     .with("fast", true)
//!     .into();
//!
//! assert_eq!(
//!     serde_json::Value::Object(params),
//!     json!({"power": "on", "color": "kelvin:2700", "brightness": 0.5, "fast": true})
//! );
//! ```

use serde_json::{Map, Value};

use crate::types::{CycleDirection, Power, Selector};

/// Open mapping of request keys to JSON values.
pub type Params = Map<String, Value>;

/// Inserts a computed field into caller parameters and returns the body.
///
/// The computed field is applied last, so it replaces any caller-supplied key
/// of the same name.
pub(crate) fn merge_field(mut params: Params, key: &str, value: Value) -> Value {
    params.insert(key.to_string(), value);
    Value::Object(params)
}

fn put(map: &mut Params, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

/// Desired state of one or more lights.
///
/// Used directly with `set_state`, as an entry of `set_states` (with
/// [`StateParams::selector`]), and as a state of `cycle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateParams {
    selector: Option<Selector>,
    power: Option<Power>,
    color: Option<String>,
    brightness: Option<f64>,
    duration: Option<f64>,
    infrared: Option<f64>,
    fast: Option<bool>,
    extra: Params,
}

impl StateParams {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets this state at specific lights (only meaningful in `set_states`).
    #[must_use]
    pub fn selector(mut self, selector: impl Into<Selector>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Sets the power state.
    #[must_use]
    pub fn power(mut self, power: Power) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the color string, e.g. `"red"` or `"hue:120 saturation:1.0"`.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets brightness in `[0.0, 1.0]`.
    #[must_use]
    pub fn brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the transition time in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the infrared channel brightness in `[0.0, 1.0]`.
    #[must_use]
    pub fn infrared(mut self, infrared: f64) -> Self {
        self.infrared = Some(infrared);
        self
    }

    /// Asks the service to skip state checks and answer immediately.
    #[must_use]
    pub fn fast(mut self, fast: bool) -> Self {
        self.fast = Some(fast);
        self
    }

    /// Adds an arbitrary key. Typed setters win over keys added here.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<StateParams> for Params {
    fn from(state: StateParams) -> Self {
        let mut map = state.extra;
        put(&mut map, "selector", state.selector.map(|s| Value::from(s.as_str())));
        put(&mut map, "power", state.power.map(|p| Value::from(p.as_str())));
        put(&mut map, "color", state.color.map(Value::from));
        put(&mut map, "brightness", state.brightness.map(Value::from));
        put(&mut map, "duration", state.duration.map(Value::from));
        put(&mut map, "infrared", state.infrared.map(Value::from));
        put(&mut map, "fast", state.fast.map(Value::from));
        map
    }
}

/// Optional parameters of the breathe and pulse effects.
///
/// The effect color itself is a required argument of the effect call and is
/// not part of this builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectParams {
    from_color: Option<String>,
    period: Option<f64>,
    cycles: Option<f64>,
    persist: Option<bool>,
    power_on: Option<bool>,
    peak: Option<f64>,
    extra: Params,
}

impl EffectParams {
    /// Creates an empty parameter set (service defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Color to start the effect from (defaults to the current color).
    #[must_use]
    pub fn from_color(mut self, color: impl Into<String>) -> Self {
        self.from_color = Some(color.into());
        self
    }

    /// Seconds per cycle.
    #[must_use]
    pub fn period(mut self, seconds: f64) -> Self {
        self.period = Some(seconds);
        self
    }

    /// Number of cycles to run.
    #[must_use]
    pub fn cycles(mut self, cycles: f64) -> Self {
        self.cycles = Some(cycles);
        self
    }

    /// Keep the last effect color when the effect ends.
    #[must_use]
    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = Some(persist);
        self
    }

    /// Turn the light on if it is off.
    #[must_use]
    pub fn power_on(mut self, power_on: bool) -> Self {
        self.power_on = Some(power_on);
        self
    }

    /// Position of the color peak within a period, in `[0.0, 1.0]` (breathe only).
    #[must_use]
    pub fn peak(mut self, peak: f64) -> Self {
        self.peak = Some(peak);
        self
    }

    /// Adds an arbitrary key. Typed setters win over keys added here.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<EffectParams> for Params {
    fn from(effect: EffectParams) -> Self {
        let mut map = effect.extra;
        put(&mut map, "from_color", effect.from_color.map(Value::from));
        put(&mut map, "period", effect.period.map(Value::from));
        put(&mut map, "cycles", effect.cycles.map(Value::from));
        put(&mut map, "persist", effect.persist.map(Value::from));
        put(&mut map, "power_on", effect.power_on.map(Value::from));
        put(&mut map, "peak", effect.peak.map(Value::from));
        map
    }
}

/// Optional parameters of the cycle operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleParams {
    defaults: Option<Params>,
    direction: Option<CycleDirection>,
    extra: Params,
}

impl CycleParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values applied to every state that does not set them itself.
    #[must_use]
    pub fn defaults(mut self, defaults: impl Into<Params>) -> Self {
        self.defaults = Some(defaults.into());
        self
    }

    /// Direction to move through the states.
    #[must_use]
    pub fn direction(mut self, direction: CycleDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Adds an arbitrary key. Typed setters win over keys added here.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<CycleParams> for Params {
    fn from(cycle: CycleParams) -> Self {
        let mut map = cycle.extra;
        put(&mut map, "defaults", cycle.defaults.map(Value::Object));
        put(&mut map, "direction", cycle.direction.map(|d| Value::from(d.as_str())));
        map
    }
}
