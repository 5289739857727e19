//! The numeric record mutated by a response plan.
//!
//! [`EmergencyState`] holds the five scalars of an emergency. Values are
//! stored verbatim: there is no validation and no clamping. Any bound a
//! caller cares about must be enforced outside this type.
//!
//! Outside this crate the state is read-only. Only the response formulas
//! in [`crate::response`] write to it, and only through the `&mut` borrow
//! handed out by [`Emergency::activate`](crate::Emergency::activate).

use serde::{Deserialize, Serialize};

/// Mutable numeric state of a single emergency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyState {
    /// Overall health of the people involved. Raised by medics.
    health: f64,
    /// Crowd panic. Lowered by firefighters and rescue teams.
    panic: f64,
    /// Accumulated fire damage. Lowered by firefighters.
    fire_damage: f64,
    /// Accumulated flood damage. Lowered by rescue teams.
    flood_damage: f64,
    /// Severity of injuries. Lowered by medics.
    injury_level: f64,
}

impl EmergencyState {
    /// Create a new state from its five starting values.
    pub const fn new(
        health: f64,
        panic: f64,
        fire_damage: f64,
        flood_damage: f64,
        injury_level: f64,
    ) -> Self {
        Self {
            health,
            panic,
            fire_damage,
            flood_damage,
            injury_level,
        }
    }

    /// Current health.
    pub const fn health(&self) -> f64 {
        self.health
    }

    /// Current panic level.
    pub const fn panic(&self) -> f64 {
        self.panic
    }

    /// Current fire damage.
    pub const fn fire_damage(&self) -> f64 {
        self.fire_damage
    }

    /// Current flood damage.
    pub const fn flood_damage(&self) -> f64 {
        self.flood_damage
    }

    /// Current injury level.
    pub const fn injury_level(&self) -> f64 {
        self.injury_level
    }

    pub(crate) const fn set_health(&mut self, health: f64) {
        self.health = health;
    }

    pub(crate) const fn set_panic(&mut self, panic: f64) {
        self.panic = panic;
    }

    pub(crate) const fn set_fire_damage(&mut self, fire_damage: f64) {
        self.fire_damage = fire_damage;
    }

    pub(crate) const fn set_flood_damage(&mut self, flood_damage: f64) {
        self.flood_damage = flood_damage;
    }

    pub(crate) const fn set_injury_level(&mut self, injury_level: f64) {
        self.injury_level = injury_level;
    }
}
