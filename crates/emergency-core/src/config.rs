//! Tunable parameters for the response formulas.
//!
//! Every handler turns a resource count into an effect fraction with
//! `count * rate`. [`ResponseConfig`] bundles those rates together with
//! the two knobs on which earlier iterations of the model disagreed:
//!
//! | Knob            | Capped (default) | Uncapped |
//! |-----------------|------------------|----------|
//! | `effect_cap`    | `Some(1.0)`      | `None`   |
//! | `healing_scale` | `100.0`          | `1.0`    |
//!
//! The capped policy is the one the simulation uses unless told otherwise.
//! Without a cap, a fraction above 1.0 flips the sign of the multiplicative
//! term and a handler with ten or more units *increases* the damage it is
//! meant to reduce. The uncapped preset exists to reproduce that legacy
//! behavior explicitly.

use serde::{Deserialize, Serialize};

/// Rates and policy knobs applied by every handler in a plan.
///
/// A plan always runs under exactly one config, owned by its
/// [`Emergency`](crate::Emergency).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Effect fraction contributed by each firefighting unit (default: 0.1).
    #[serde(default = "default_firefighter_rate")]
    pub firefighter_rate: f64,

    /// Effect fraction contributed by each medic (default: 0.2).
    #[serde(default = "default_medic_rate")]
    pub medic_rate: f64,

    /// Effect fraction contributed by each rescue boat (default: 0.1).
    #[serde(default = "default_rescue_rate")]
    pub rescue_rate: f64,

    /// Upper bound on any effect fraction (default: `Some(1.0)`).
    ///
    /// `None` disables the cap. The cap only bounds from above; negative
    /// fractions from negative resource counts pass through unchanged.
    #[serde(default = "default_effect_cap")]
    pub effect_cap: Option<f64>,

    /// Health gained per unit of medic effect fraction (default: 100.0).
    #[serde(default = "default_healing_scale")]
    pub healing_scale: f64,
}

const fn default_firefighter_rate() -> f64 {
    0.1
}

const fn default_medic_rate() -> f64 {
    0.2
}

const fn default_rescue_rate() -> f64 {
    0.1
}

#[allow(clippy::unnecessary_wraps)]
const fn default_effect_cap() -> Option<f64> {
    Some(1.0)
}

const fn default_healing_scale() -> f64 {
    100.0
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self::capped()
    }
}

impl ResponseConfig {
    /// Capped policy: fractions saturate at 1.0 and healing is scaled by 100.
    pub const fn capped() -> Self {
        Self {
            firefighter_rate: default_firefighter_rate(),
            medic_rate: default_medic_rate(),
            rescue_rate: default_rescue_rate(),
            effect_cap: default_effect_cap(),
            healing_scale: default_healing_scale(),
        }
    }

    /// Uncapped legacy policy: raw fractions and raw healing.
    pub const fn uncapped() -> Self {
        Self {
            effect_cap: None,
            healing_scale: 1.0,
            ..Self::capped()
        }
    }

    /// Compute the effect fraction for `resources` at the given `rate`.
    ///
    /// Zero resources always yield exactly `0.0`, whatever the rate.
    pub fn effect_fraction(&self, resources: i32, rate: f64) -> f64 {
        if resources == 0 {
            return 0.0;
        }
        let raw = f64::from(resources) * rate;
        match self.effect_cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}
