//! Response formulas applied to an emergency each activation.
//!
//! Each function computes an effect fraction from a resource count through
//! [`ResponseConfig::effect_fraction`] and then rescales the fields it is
//! responsible for:
//!
//! | Response     | Fraction                  | Fields touched                                  |
//! |--------------|---------------------------|-------------------------------------------------|
//! | Firefighting | `units * firefighter_rate`| `fire_damage *= 1 - f`, `panic *= 1 - f / 2`    |
//! | Medical      | `staff * medic_rate`      | `injury_level *= 1 - f`, `health += f * scale`  |
//! | Rescue       | `boats * rescue_rate`     | `flood_damage *= 1 - f`, `panic *= 1 - f`       |
//!
//! A zero fraction returns before touching the state, so every field keeps
//! its exact bits (including `-0.0`) whatever the config holds.

use crate::config::ResponseConfig;
use crate::state::EmergencyState;

/// Apply one round of firefighting with `units` crews.
pub fn apply_firefighting(state: &mut EmergencyState, config: &ResponseConfig, units: i32) {
    let impact = config.effect_fraction(units, config.firefighter_rate);
    if impact == 0.0 {
        return;
    }
    state.set_fire_damage(state.fire_damage() * (1.0 - impact));
    state.set_panic(state.panic() * (1.0 - impact / 2.0));
}

/// Apply one round of medical treatment with `staff` medics.
pub fn apply_medical(state: &mut EmergencyState, config: &ResponseConfig, staff: i32) {
    let heal = config.effect_fraction(staff, config.medic_rate);
    if heal == 0.0 {
        return;
    }
    state.set_injury_level(state.injury_level() * (1.0 - heal));
    state.set_health(state.health() + heal * config.healing_scale);
}

/// Apply one round of flood rescue with `boats` boats.
pub fn apply_rescue(state: &mut EmergencyState, config: &ResponseConfig, boats: i32) {
    let effect = config.effect_fraction(boats, config.rescue_rate);
    if effect == 0.0 {
        return;
    }
    state.set_flood_damage(state.flood_damage() * (1.0 - effect));
    state.set_panic(state.panic() * (1.0 - effect));
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn test_state() -> EmergencyState {
        EmergencyState::new(70.0, 40.0, 60.0, 50.0, 30.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn firefighting_halves_fire_with_five_units() {
        let mut state = test_state();
        apply_firefighting(&mut state, &ResponseConfig::capped(), 5);
        assert!(close(state.fire_damage(), 30.0));
        assert!(close(state.panic(), 30.0));
        assert!(close(state.health(), 70.0));
        assert!(close(state.flood_damage(), 50.0));
        assert!(close(state.injury_level(), 30.0));
    }

    #[test]
    fn medical_heals_with_scaled_fraction() {
        let mut state = test_state();
        apply_medical(&mut state, &ResponseConfig::capped(), 3);
        assert!(close(state.injury_level(), 12.0));
        assert!(close(state.health(), 130.0));
        assert!(close(state.panic(), 40.0));
    }

    #[test]
    fn medical_uncapped_adds_raw_fraction() {
        let mut state = test_state();
        apply_medical(&mut state, &ResponseConfig::uncapped(), 3);
        assert!(close(state.injury_level(), 12.0));
        assert!(close(state.health(), 70.6));
    }

    #[test]
    fn rescue_reduces_flood_and_panic() {
        let mut state = test_state();
        apply_rescue(&mut state, &ResponseConfig::capped(), 2);
        assert!(close(state.flood_damage(), 40.0));
        assert!(close(state.panic(), 32.0));
        assert!(close(state.fire_damage(), 60.0));
    }

    #[test]
    fn zero_resources_are_identity() {
        let before = test_state();
        for config in [ResponseConfig::capped(), ResponseConfig::uncapped()] {
            let mut state = before;
            apply_firefighting(&mut state, &config, 0);
            apply_medical(&mut state, &config, 0);
            apply_rescue(&mut state, &config, 0);
            assert_eq!(state.health().to_bits(), before.health().to_bits());
            assert_eq!(state.panic().to_bits(), before.panic().to_bits());
            assert_eq!(state.fire_damage().to_bits(), before.fire_damage().to_bits());
            assert_eq!(state.flood_damage().to_bits(), before.flood_damage().to_bits());
            assert_eq!(state.injury_level().to_bits(), before.injury_level().to_bits());
        }
    }

    #[test]
    fn zero_resources_keep_exact_bits_with_non_finite_config() {
        let before = EmergencyState::new(-0.0, -0.0, -0.0, -0.0, -0.0);
        let config = ResponseConfig {
            firefighter_rate: f64::NAN,
            medic_rate: f64::INFINITY,
            rescue_rate: f64::NEG_INFINITY,
            effect_cap: None,
            healing_scale: f64::INFINITY,
        };
        let mut state = before;
        apply_firefighting(&mut state, &config, 0);
        apply_medical(&mut state, &config, 0);
        apply_rescue(&mut state, &config, 0);
        assert_eq!(state.health().to_bits(), (-0.0_f64).to_bits());
        assert_eq!(state.panic().to_bits(), (-0.0_f64).to_bits());
        assert_eq!(state.fire_damage().to_bits(), (-0.0_f64).to_bits());
        assert_eq!(state.flood_damage().to_bits(), (-0.0_f64).to_bits());
        assert_eq!(state.injury_level().to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn zero_medics_under_capped_policy_keep_negative_zero_health() {
        let mut state = EmergencyState::new(-0.0, 40.0, 60.0, 50.0, 30.0);
        apply_medical(&mut state, &ResponseConfig::capped(), 0);
        assert_eq!(state.health().to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn capped_saturation_zeroes_damage() {
        let config = ResponseConfig::capped();
        let mut state = test_state();
        apply_firefighting(&mut state, &config, 10);
        apply_rescue(&mut state, &config, 14);
        apply_medical(&mut state, &config, 5);
        assert!(state.fire_damage().abs() < f64::EPSILON);
        assert!(state.flood_damage().abs() < f64::EPSILON);
        assert!(state.injury_level().abs() < f64::EPSILON);
        assert!(state.fire_damage() >= 0.0);
        assert!(state.flood_damage() >= 0.0);
        assert!(state.injury_level() >= 0.0);
        assert!(close(state.health(), 170.0));
    }

    #[test]
    fn uncapped_large_crew_flips_sign() {
        let mut state = test_state();
        apply_firefighting(&mut state, &ResponseConfig::uncapped(), 12);
        // 60 * (1 - 1.2)
        assert!(close(state.fire_damage(), -12.0));
    }

    #[test]
    fn negative_resources_increase_damage() {
        let mut state = test_state();
        apply_rescue(&mut state, &ResponseConfig::capped(), -1);
        assert!(close(state.flood_damage(), 55.0));
        assert!(close(state.panic(), 44.0));
    }
}
