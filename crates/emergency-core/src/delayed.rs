//! Round-gated decorator around another response handler.
//!
//! A [`DelayedHandler`] counts the activations it has seen. The wrapped
//! handler first acts on the activation where the counter reaches
//! `delay_rounds` and on every activation after that. The gate never
//! closes again.
//!
//! ```text
//! delay_rounds = 2
//!
//! activation   1      2      3      4
//! rounds_seen  1      2      3      4
//! inner acts   no     yes    yes    yes
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ResponseConfig;
use crate::handler::ResponseHandler;
use crate::state::EmergencyState;

/// A handler that suppresses its inner handler for the first rounds.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayedHandler {
    /// The wrapped handler. Exclusively owned.
    inner: Box<ResponseHandler>,
    /// Activation on which the inner handler first acts.
    delay_rounds: u32,
    /// Activations seen so far. Always starts at zero.
    #[serde(skip)]
    rounds_seen: u32,
}

impl DelayedHandler {
    /// Wrap `inner` so that it first acts on the `delay_rounds`-th round.
    ///
    /// A `delay_rounds` of zero behaves like one: the inner handler acts
    /// from the first round.
    pub fn new(inner: ResponseHandler, delay_rounds: u32) -> Self {
        Self {
            inner: Box::new(inner),
            delay_rounds,
            rounds_seen: 0,
        }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &ResponseHandler {
        &self.inner
    }

    /// Configured number of rounds before the inner handler acts.
    pub const fn delay_rounds(&self) -> u32 {
        self.delay_rounds
    }

    /// Number of rounds this handler has been asked to respond to.
    pub const fn rounds_seen(&self) -> u32 {
        self.rounds_seen
    }

    /// Whether the gate has opened.
    pub const fn is_open(&self) -> bool {
        self.rounds_seen >= self.delay_rounds
    }

    /// Count one round and delegate once the gate is open.
    pub fn respond(&mut self, state: &mut EmergencyState, config: &ResponseConfig) {
        self.rounds_seen = self.rounds_seen.saturating_add(1);
        if self.is_open() {
            self.inner.respond(state, config);
        } else {
            trace!(
                rounds_seen = self.rounds_seen,
                delay_rounds = self.delay_rounds,
                inner = %self.inner,
                "Delayed handler still gated"
            );
        }
    }
}

impl fmt::Display for DelayedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delayed {} rounds: {}", self.delay_rounds, self.inner)
    }
}
