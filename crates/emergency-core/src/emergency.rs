//! The emergency aggregate and its activation loop.
//!
//! An [`Emergency`] exclusively owns its [`EmergencyState`], the
//! [`ResponseConfig`] every handler runs under, and the ordered plan of
//! [`ResponseHandler`]s. Dropping the emergency drops the whole handler
//! tree, including handlers wrapped inside delayed handlers.
//!
//! # Activation
//!
//! [`Emergency::activate`] performs one left-to-right pass over the plan.
//! Every handler is invoked exactly once per pass, even when it turns out
//! to be a no-op. Each handler sees the mutations of the handlers before
//! it in the same pass, and the state is never reset between passes, so
//! repeated activations compound.

use tracing::debug;

use crate::config::ResponseConfig;
use crate::handler::ResponseHandler;
use crate::state::EmergencyState;

/// A single emergency: state, policy, and response plan.
#[derive(Debug)]
pub struct Emergency {
    state: EmergencyState,
    config: ResponseConfig,
    plan: Vec<ResponseHandler>,
    activations: u64,
}

impl Emergency {
    /// Create an emergency that runs `plan` under the capped policy.
    pub fn new(state: EmergencyState, plan: Vec<ResponseHandler>) -> Self {
        Self::with_config(state, plan, ResponseConfig::default())
    }

    /// Create an emergency that runs `plan` under `config`.
    pub const fn with_config(
        state: EmergencyState,
        plan: Vec<ResponseHandler>,
        config: ResponseConfig,
    ) -> Self {
        Self {
            state,
            config,
            plan,
            activations: 0,
        }
    }

    /// Run every handler in the plan once, in order, on the shared state.
    pub fn activate(&mut self) {
        self.activations = self.activations.saturating_add(1);
        for handler in &mut self.plan {
            handler.respond(&mut self.state, &self.config);
        }
        debug!(
            activation = self.activations,
            handlers = self.plan.len(),
            health = self.state.health(),
            panic = self.state.panic(),
            fire_damage = self.state.fire_damage(),
            flood_damage = self.state.flood_damage(),
            injury_level = self.state.injury_level(),
            "Emergency activated"
        );
    }

    /// Current state.
    pub const fn state(&self) -> &EmergencyState {
        &self.state
    }

    /// Current health.
    pub const fn health(&self) -> f64 {
        self.state.health()
    }

    /// Current panic level.
    pub const fn panic(&self) -> f64 {
        self.state.panic()
    }

    /// Current fire damage.
    pub const fn fire_damage(&self) -> f64 {
        self.state.fire_damage()
    }

    /// Current flood damage.
    pub const fn flood_damage(&self) -> f64 {
        self.state.flood_damage()
    }

    /// Current injury level.
    pub const fn injury_level(&self) -> f64 {
        self.state.injury_level()
    }

    /// The response plan in activation order.
    pub fn plan(&self) -> &[ResponseHandler] {
        &self.plan
    }

    /// The config every handler runs under.
    pub const fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Number of completed activations.
    pub const fn activations(&self) -> u64 {
        self.activations
    }

    /// Describe every handler in activation order.
    pub fn describe_plan(&self) -> Vec<String> {
        self.plan.iter().map(ResponseHandler::describe).collect()
    }
}
