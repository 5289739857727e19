//! The closed set of response handlers that make up a plan.
//!
//! A [`ResponseHandler`] reads and mutates the shared [`EmergencyState`]
//! once per activation. The concrete kinds are stateless per call and
//! parameterized by a resource count; [`DelayedHandler`] wraps any other
//! handler (including another delayed one) behind a round counter.
//!
//! Handlers deserialize from an internally tagged representation so plans
//! can be declared in scenario files:
//!
//! ```yaml
//! - kind: firefighters
//!   units: 5
//! - kind: delayed
//!   delay_rounds: 2
//!   inner:
//!     kind: rescue_team
//!     boats: 3
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ResponseConfig;
use crate::delayed::DelayedHandler;
use crate::response::{apply_firefighting, apply_medical, apply_rescue};
use crate::state::EmergencyState;

/// A unit of behavior in a response plan.
///
/// Handlers are deliberately not `Clone`: each one belongs to exactly one
/// plan, and a [`DelayedHandler`] carries a per-plan round counter.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseHandler {
    /// Firefighting crews. Lower fire damage and, at half strength, panic.
    Firefighters {
        /// Number of crews on site.
        units: i32,
    },
    /// Medical staff. Lower injury level and raise health.
    Medics {
        /// Number of medics on site.
        staff: i32,
    },
    /// Flood rescue. Lowers flood damage and panic.
    RescueTeam {
        /// Number of boats on site.
        boats: i32,
    },
    /// Another handler that only starts acting after a number of rounds.
    Delayed(DelayedHandler),
}

impl ResponseHandler {
    /// Firefighting handler with `units` crews.
    pub const fn firefighters(units: i32) -> Self {
        Self::Firefighters { units }
    }

    /// Medical handler with `staff` medics.
    pub const fn medics(staff: i32) -> Self {
        Self::Medics { staff }
    }

    /// Flood rescue handler with `boats` boats.
    pub const fn rescue_team(boats: i32) -> Self {
        Self::RescueTeam { boats }
    }

    /// Wrap `inner` so it first acts on the `delay_rounds`-th activation.
    pub fn delayed(inner: Self, delay_rounds: u32) -> Self {
        Self::Delayed(DelayedHandler::new(inner, delay_rounds))
    }

    /// Apply this handler to `state` for one activation.
    pub fn respond(&mut self, state: &mut EmergencyState, config: &ResponseConfig) {
        match self {
            Self::Firefighters { units } => apply_firefighting(state, config, *units),
            Self::Medics { staff } => apply_medical(state, config, *staff),
            Self::RescueTeam { boats } => apply_rescue(state, config, *boats),
            Self::Delayed(delayed) => delayed.respond(state, config),
        }
    }

    /// Short identification of the handler kind and its resources.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResponseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Firefighters { units } => write!(f, "Firefighters ({units} units)"),
            Self::Medics { staff } => write!(f, "Medics ({staff} staff)"),
            Self::RescueTeam { boats } => write!(f, "Rescue team ({boats} boats)"),
            Self::Delayed(delayed) => write!(f, "{delayed}"),
        }
    }
}
