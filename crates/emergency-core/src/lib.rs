//! Emergency state, response handlers, and plan activation.
//!
//! An [`Emergency`] owns one [`EmergencyState`] and an ordered plan of
//! [`ResponseHandler`]s. Each call to [`Emergency::activate`] runs the
//! whole plan once, left to right, against the shared state. Nothing in
//! this crate performs I/O except scenario loading.
//!
//! # Modules
//!
//! - [`config`] -- Rates and the capped/uncapped policy ([`ResponseConfig`]).
//! - [`delayed`] -- [`DelayedHandler`], a round-gated decorator.
//! - [`emergency`] -- The [`Emergency`] aggregate and its activation loop.
//! - [`error`] -- Error types for scenario loading ([`ScenarioError`]).
//! - [`handler`] -- The closed set of [`ResponseHandler`] kinds.
//! - [`response`] -- Firefighting, medical, and rescue formulas.
//! - [`scenario`] -- YAML scenario files ([`Scenario`]).
//! - [`state`] -- The five-field [`EmergencyState`].
//!
//! # Usage
//!
//! ```
//! use emergency_core::{Emergency, EmergencyState, ResponseHandler};
//!
//! let state = EmergencyState::new(70.0, 40.0, 60.0, 50.0, 30.0);
//! let plan = vec![
//!     ResponseHandler::firefighters(5),
//!     ResponseHandler::medics(3),
//!     ResponseHandler::delayed(ResponseHandler::rescue_team(2), 2),
//! ];
//!
//! let mut emergency = Emergency::new(state, plan);
//! emergency.activate();
//!
//! assert!(emergency.fire_damage() < 60.0);
//! assert!(emergency.health() > 70.0);
//! // The rescue team is still held back after one round.
//! assert!((emergency.flood_damage() - 50.0).abs() < f64::EPSILON);
//! ```

pub mod config;
pub mod delayed;
pub mod emergency;
pub mod error;
pub mod handler;
pub mod response;
pub mod scenario;
pub mod state;

// Re-export primary types at crate root.
pub use config::ResponseConfig;
pub use delayed::DelayedHandler;
pub use emergency::Emergency;
pub use error::ScenarioError;
pub use handler::ResponseHandler;
pub use scenario::Scenario;
pub use state::EmergencyState;
