//! Scenario files: an initial state, a policy, and a plan in YAML.
//!
//! A scenario describes everything needed to build an [`Emergency`] and
//! how many times to activate it:
//!
//! ```yaml
//! state:
//!   health: 70
//!   panic: 40
//!   fire_damage: 60
//!   flood_damage: 50
//!   injury_level: 30
//! response:            # optional, defaults to the capped policy
//!   effect_cap: 1.0
//!   healing_scale: 100
//! activations: 2       # optional, defaults to 1
//! plan:
//!   - kind: firefighters
//!     units: 5
//!   - kind: delayed
//!     delay_rounds: 2
//!     inner:
//!       kind: medics
//!       staff: 3
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::config::ResponseConfig;
use crate::emergency::Emergency;
use crate::error::ScenarioError;
use crate::handler::ResponseHandler;
use crate::state::EmergencyState;

/// A complete, not yet activated, emergency description.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Scenario {
    /// Starting values of the emergency.
    pub state: EmergencyState,

    /// Policy applied by every handler.
    #[serde(default)]
    pub response: ResponseConfig,

    /// Ordered response plan.
    #[serde(default)]
    pub plan: Vec<ResponseHandler>,

    /// Number of times the runner activates the emergency.
    #[serde(default = "default_activations")]
    pub activations: u32,
}

const fn default_activations() -> u32 {
    1
}

impl Scenario {
    /// Load a scenario from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, or
    /// [`ScenarioError::Yaml`] if the content is not a valid scenario.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Yaml`] if the string is not a valid scenario.
    pub fn parse(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// The calibration scenario: one activation of five firefighting
    /// units, three medics, and two boats under the capped policy.
    pub fn calibration() -> Self {
        Self {
            state: EmergencyState::new(70.0, 40.0, 60.0, 50.0, 30.0),
            response: ResponseConfig::capped(),
            plan: vec![
                ResponseHandler::firefighters(5),
                ResponseHandler::medics(3),
                ResponseHandler::rescue_team(2),
            ],
            activations: 1,
        }
    }

    /// Build the emergency, returning it with the configured activation count.
    pub fn into_emergency(self) -> (Emergency, u32) {
        let emergency = Emergency::with_config(self.state, self.plan, self.response);
        (emergency, self.activations)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FULL: &str = r"
state:
  health: 70
  panic: 40
  fire_damage: 60
  flood_damage: 50
  injury_level: 30
response:
  effect_cap: null
  healing_scale: 1.0
activations: 3
plan:
  - kind: firefighters
    units: 5
  - kind: medics
    staff: 3
  - kind: delayed
    delay_rounds: 2
    inner:
      kind: rescue_team
      boats: 2
";

    #[test]
    fn parse_full_yaml() {
        let scenario = Scenario::parse(FULL).unwrap();
        let expected = Scenario {
            state: EmergencyState::new(70.0, 40.0, 60.0, 50.0, 30.0),
            response: ResponseConfig::uncapped(),
            plan: vec![
                ResponseHandler::firefighters(5),
                ResponseHandler::medics(3),
                ResponseHandler::delayed(ResponseHandler::rescue_team(2), 2),
            ],
            activations: 3,
        };
        assert_eq!(scenario, expected);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let yaml = r"
state:
  health: 1
  panic: 2
  fire_damage: 3
  flood_damage: 4
  injury_level: 5
";
        let scenario = Scenario::parse(yaml).unwrap();
        assert_eq!(scenario.response, ResponseConfig::capped());
        assert!(scenario.plan.is_empty());
        assert_eq!(scenario.activations, 1);
    }

    #[test]
    fn missing_state_is_rejected() {
        let result = Scenario::parse("plan: []\n");
        assert!(matches!(result, Err(ScenarioError::Yaml { .. })));
    }

    #[test]
    fn unknown_handler_kind_is_rejected() {
        let yaml = r"
state: { health: 1, panic: 1, fire_damage: 1, flood_damage: 1, injury_level: 1 }
plan:
  - kind: helicopters
    rotors: 2
";
        assert!(Scenario::parse(yaml).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Scenario::from_file(Path::new("/nonexistent/emergency-scenario.yaml"));
        assert!(matches!(result, Err(ScenarioError::Io { .. })));
    }

    #[test]
    fn calibration_builds_matching_emergency() {
        let (emergency, activations) = Scenario::calibration().into_emergency();
        assert_eq!(activations, 1);
        assert_eq!(emergency.plan().len(), 3);
        assert_eq!(emergency.config(), &ResponseConfig::capped());
        assert!((emergency.health() - 70.0).abs() < f64::EPSILON);
    }
}
