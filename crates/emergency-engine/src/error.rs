//! Error types for the scenario runner binary.
//!
//! [`EngineError`] wraps every failure mode of a run so that `main` can
//! propagate with `?`.

/// Top-level error for the scenario runner.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Scenario loading failed.
    #[error("scenario error: {source}")]
    Scenario {
        /// The underlying scenario error.
        #[from]
        source: emergency_core::ScenarioError,
    },

    /// Encoding the final state as JSON failed.
    #[error("failed to encode final state: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
