//! Fan acoustic engine
//!
//! The dominant tonal component of fan noise is the blade-pass frequency:
//! revolutions per second times the number of blades.
//!
//! # Replacement comparison
//!
//! Two fans move roughly the same air when `radius² x rpm x thickness` is
//! equal. [`compare_fan_efficiency`] solves that for the replacement's speed
//! and compares the blade-pass frequencies of both fans.

use tracing::trace;

use hc_error::{HwcalcError, Result};

use crate::classify::noise_level_for_frequency;
use crate::constants::{fan as fan_const, round_to};
use crate::data::{FanComparison, FanResult, FanSpec, FanVerdict, NoiseLevel};

const ADVICE_QUIET: &str = "Excellent for quiet operation";
const ADVICE_ACCEPTABLE: &str = "Good balance of cooling and noise";
const ADVICE_REDUCE_SPEED: &str = "Consider reducing fan speed";
const ADVICE_UPGRADE: &str = "Or upgrade to larger/thicker fan";
const ADVICE_LARGER: &str = "Larger diameter fans run quieter at same airflow";
const ADVICE_THICKER: &str = "Thicker fans provide better airflow at lower RPM";

/// Blade-pass frequency in Hz, unrounded
fn blade_pass_frequency(rpm: f64, wing_count: u32) -> f64 {
    (rpm / fan_const::SECONDS_PER_MINUTE) * wing_count as f64
}

/// Estimate the tonal noise of a fan at its current speed
pub fn compute_fan_noise(spec: &FanSpec) -> FanResult {
    let frequency = blade_pass_frequency(spec.current_rpm, spec.wing_count);
    let noise_level = noise_level_for_frequency(frequency);

    let mut recommendations = Vec::new();
    match noise_level {
        NoiseLevel::Quiet => recommendations.push(ADVICE_QUIET.to_string()),
        NoiseLevel::Acceptable => recommendations.push(ADVICE_ACCEPTABLE.to_string()),
        NoiseLevel::Noisy => {
            recommendations.push(ADVICE_REDUCE_SPEED.to_string());
            recommendations.push(ADVICE_UPGRADE.to_string());
        }
    }

    if spec.diameter_mm < fan_const::RECOMMENDED_MIN_DIAMETER_MM {
        recommendations.push(ADVICE_LARGER.to_string());
    }

    if spec.thickness_mm < fan_const::RECOMMENDED_MIN_THICKNESS_MM {
        recommendations.push(ADVICE_THICKER.to_string());
    }

    trace!(
        rpm = spec.current_rpm,
        wings = spec.wing_count,
        frequency,
        ?noise_level,
        "computed fan noise"
    );

    FanResult {
        frequency_hz: round_to(frequency, 1),
        noise_level,
        recommendations,
    }
}

/// Highest RPM whose blade-pass frequency stays at or below `target_frequency_hz`
///
/// A zero blade count is rejected. Negative targets saturate to 0 RPM.
pub fn optimal_rpm(wing_count: u32, target_frequency_hz: f64) -> Result<u32> {
    if wing_count == 0 {
        return Err(HwcalcError::invalid_input(
            "wing_count",
            "must be greater than zero",
        ));
    }

    let rpm = (target_frequency_hz * fan_const::SECONDS_PER_MINUTE) / wing_count as f64;
    Ok(rpm.floor().max(0.0) as u32)
}

/// RPM to shed to reach the optimal operating point, `None` if already there
pub fn rpm_reduction(spec: &FanSpec, target_frequency_hz: f64) -> Result<Option<u32>> {
    let optimal = optimal_rpm(spec.wing_count, target_frequency_hz)? as f64;
    if spec.current_rpm > optimal {
        Ok(Some((spec.current_rpm - optimal).round() as u32))
    } else {
        Ok(None)
    }
}

/// Compare an existing fan with a replacement moving the same air
///
/// `target_rpm` is the speed of the existing fan.
pub fn compare_fan_efficiency(
    old_fan: &FanSpec,
    new_fan: &FanSpec,
    target_rpm: f64,
) -> Result<FanComparison> {
    let old_radius = old_fan.diameter_mm / 2.0;
    let new_radius = new_fan.diameter_mm / 2.0;

    let new_area_depth = new_radius.powi(2) * new_fan.thickness_mm;
    if new_area_depth == 0.0 {
        return Err(HwcalcError::invalid_input(
            "replacement fan",
            "diameter and thickness must be non-zero",
        ));
    }

    let new_fan_rpm =
        ((target_rpm * old_radius.powi(2) * old_fan.thickness_mm) / new_area_depth).round();

    let old_frequency = blade_pass_frequency(target_rpm, old_fan.wing_count);
    if old_frequency == 0.0 {
        return Err(HwcalcError::invalid_input(
            "existing fan",
            "speed and blade count must be non-zero",
        ));
    }
    let new_frequency = blade_pass_frequency(new_fan_rpm, new_fan.wing_count);

    let change_percent = (old_frequency - new_frequency) / old_frequency * 100.0;
    let verdict = if change_percent > 0.0 {
        FanVerdict::Quieter
    } else {
        FanVerdict::Louder
    };

    trace!(
        target_rpm,
        new_fan_rpm,
        change_percent,
        "compared fan replacement"
    );

    Ok(FanComparison {
        new_fan_rpm: new_fan_rpm as i64,
        old_frequency_hz: round_to(old_frequency, 1),
        new_frequency_hz: round_to(new_frequency, 1),
        change_percent,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(diameter_mm: f64, thickness_mm: f64, wing_count: u32, current_rpm: f64) -> FanSpec {
        FanSpec {
            diameter_mm,
            thickness_mm,
            wing_count,
            max_rpm: 2000.0,
            current_rpm,
        }
    }

    #[test]
    fn test_default_fan_is_noisy() {
        let result = compute_fan_noise(&fan(120.0, 25.0, 7, 800.0));
        assert_eq!(result.frequency_hz, 93.3);
        assert_eq!(result.noise_level, NoiseLevel::Noisy);
        assert_eq!(
            result.recommendations,
            vec![ADVICE_REDUCE_SPEED.to_string(), ADVICE_UPGRADE.to_string()]
        );
    }

    #[test]
    fn test_quiet_fan() {
        // 400 / 60 * 7 = 46.7 Hz
        let result = compute_fan_noise(&fan(140.0, 25.0, 7, 400.0));
        assert_eq!(result.frequency_hz, 46.7);
        assert_eq!(result.noise_level, NoiseLevel::Quiet);
        assert_eq!(result.recommendations, vec![ADVICE_QUIET.to_string()]);
    }

    #[test]
    fn test_acceptable_fan() {
        // 500 / 60 * 7 = 58.3 Hz
        let result = compute_fan_noise(&fan(120.0, 25.0, 7, 500.0));
        assert_eq!(result.noise_level, NoiseLevel::Acceptable);
        assert_eq!(result.recommendations, vec![ADVICE_ACCEPTABLE.to_string()]);
    }

    #[test]
    fn test_recommendations_accumulate_in_order() {
        let result = compute_fan_noise(&fan(80.0, 15.0, 7, 3000.0));
        assert_eq!(
            result.recommendations,
            vec![
                ADVICE_REDUCE_SPEED.to_string(),
                ADVICE_UPGRADE.to_string(),
                ADVICE_LARGER.to_string(),
                ADVICE_THICKER.to_string(),
            ]
        );
    }

    #[test]
    fn test_stopped_fan() {
        let result = compute_fan_noise(&fan(120.0, 25.0, 7, 0.0));
        assert_eq!(result.frequency_hz, 0.0);
        assert_eq!(result.noise_level, NoiseLevel::Quiet);
    }

    #[test]
    fn test_optimal_rpm() {
        assert_eq!(optimal_rpm(7, 65.0).unwrap(), 557);
        assert_eq!(optimal_rpm(9, 65.0).unwrap(), 433);
        assert_eq!(optimal_rpm(7, fan_const::DEFAULT_TARGET_FREQUENCY_HZ).unwrap(), 557);
    }

    #[test]
    fn test_optimal_rpm_rejects_zero_wings() {
        let err = optimal_rpm(0, 65.0).unwrap_err();
        assert!(matches!(
            err,
            HwcalcError::InvalidInput { ref field, .. } if field == "wing_count"
        ));
    }

    #[test]
    fn test_optimal_rpm_negative_target_saturates() {
        assert_eq!(optimal_rpm(7, -10.0).unwrap(), 0);
    }

    #[test]
    fn test_rpm_reduction() {
        assert_eq!(rpm_reduction(&fan(120.0, 25.0, 7, 800.0), 65.0).unwrap(), Some(243));
        assert_eq!(rpm_reduction(&fan(120.0, 25.0, 7, 557.0), 65.0).unwrap(), None);
        assert!(rpm_reduction(&fan(120.0, 25.0, 0, 800.0), 65.0).is_err());
    }

    #[test]
    fn test_compare_larger_replacement_is_quieter() {
        let old = fan(80.0, 25.0, 7, 2000.0);
        let new = fan(120.0, 25.0, 7, 0.0);
        let cmp = compare_fan_efficiency(&old, &new, 2000.0).unwrap();

        assert_eq!(cmp.new_fan_rpm, 889);
        assert_eq!(cmp.old_frequency_hz, 233.3);
        assert_eq!(cmp.new_frequency_hz, 103.7);
        assert_eq!(cmp.verdict, FanVerdict::Quieter);
        assert_eq!(cmp.to_string(), "56% quieter");
    }

    #[test]
    fn test_compare_smaller_replacement_is_louder() {
        let old = fan(140.0, 25.0, 7, 1000.0);
        let new = fan(120.0, 25.0, 9, 0.0);
        let cmp = compare_fan_efficiency(&old, &new, 1000.0).unwrap();

        assert!(cmp.new_fan_rpm > 1000);
        assert_eq!(cmp.verdict, FanVerdict::Louder);
        assert!(cmp.to_string().ends_with("% louder"));
    }

    #[test]
    fn test_compare_identical_fan_reports_louder_zero() {
        let old = fan(120.0, 25.0, 7, 1200.0);
        let cmp = compare_fan_efficiency(&old, &old, 1200.0).unwrap();
        assert_eq!(cmp.new_fan_rpm, 1200);
        assert_eq!(cmp.to_string(), "0% louder");
    }

    #[test]
    fn test_compare_rejects_degenerate_fans() {
        let old = fan(120.0, 25.0, 7, 1200.0);
        let flat = fan(120.0, 0.0, 7, 0.0);
        assert!(compare_fan_efficiency(&old, &flat, 1200.0).is_err());
        assert!(compare_fan_efficiency(&old, &old, 0.0).is_err());
    }
}
