//! HDD acoustic engine
//!
//! Identical drives are treated as uncorrelated sources, so N drives add
//! `10 x log10(N)` dB to the level of one. Perceived loudness is estimated
//! by shifting that level with a rotation-dependent offset and mapping it to
//! sone: 40 dB is 1 sone and every further 10 dB doubles it.

use tracing::trace;

use crate::constants::{hdd as hdd_const, round_to};
use crate::data::{HddResult, HddSpec};

const ADVICE_LOWER_RPM: &str = "Consider lower RPM drives (5400 RPM vs 7200 RPM)";
const ADVICE_DAMPENING: &str = "Add sound dampening to case";
const ADVICE_SPREAD: &str = "Consider spreading drives across multiple systems";
const ADVICE_MOUNTS: &str = "Use vibration dampening mounts";
const ADVICE_FAST_SPIN: &str = "7200 RPM drives are audibly louder than 5400 RPM";

/// Level of `quantity` identical sources of `single_db` each
fn combined_level_db(single_db: f64, quantity: u32) -> f64 {
    single_db + 10.0 * (quantity as f64).log10()
}

/// Approximate loudness in sone of a level heard at a given rotation frequency
///
/// Slow spindles (under 100 Hz, the 5400 RPM class) get the larger offset.
pub fn loudness_sone(level_db: f64, rotation_hz: f64) -> f64 {
    let offset = if rotation_hz < hdd_const::LOW_FREQUENCY_LIMIT_HZ {
        hdd_const::LOW_FREQUENCY_OFFSET_DB
    } else {
        hdd_const::HIGH_FREQUENCY_OFFSET_DB
    };

    let adjusted = level_db + offset;
    2f64.powf((adjusted - hdd_const::REFERENCE_DB) / hdd_const::DOUBLING_DB)
}

/// Estimate the combined noise of a set of identical drives
pub fn compute_hdd_noise(spec: &HddSpec) -> HddResult {
    let frequency = spec.spin_speed_rpm / hdd_const::SECONDS_PER_MINUTE;

    let idle_db = combined_level_db(spec.acoustic_idle_db, spec.quantity);
    let seek_db = combined_level_db(spec.acoustic_seek_db, spec.quantity);
    let idle_sone = loudness_sone(idle_db, frequency);
    let seek_sone = loudness_sone(seek_db, frequency);

    let mut recommendations = Vec::new();

    if idle_sone > hdd_const::LOUD_SONE {
        recommendations.push(ADVICE_LOWER_RPM.to_string());
        recommendations.push(ADVICE_DAMPENING.to_string());
    }

    if spec.quantity > hdd_const::MANY_DRIVES {
        recommendations.push(ADVICE_SPREAD.to_string());
        recommendations.push(ADVICE_MOUNTS.to_string());
    }

    if frequency > hdd_const::FAST_SPIN_HZ {
        recommendations.push(ADVICE_FAST_SPIN.to_string());
    }

    trace!(
        rpm = spec.spin_speed_rpm,
        quantity = spec.quantity,
        idle_db,
        idle_sone,
        "computed HDD noise"
    );

    HddResult {
        frequency_hz: round_to(frequency, 1),
        total_noise_level_db: round_to(idle_db, 1),
        effective_loudness_sone: round_to(idle_sone, 1),
        seek_noise_level_db: round_to(seek_db, 1),
        seek_loudness_sone: round_to(seek_sone, 1),
        recommendations,
    }
}
