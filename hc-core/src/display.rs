//! Display Formatting Helpers
//!
//! Unit formatting for engine outputs. These are frontend-agnostic and never
//! used by the engines themselves, which return plain numbers.

use crate::engine::mts_to_gbs;

/// Format TFLOPS with two decimals, e.g. "10.62 TFLOPS"
pub fn format_tflops(tflops: f64) -> String {
    format!("{:.2} TFLOPS", tflops)
}

/// Format a clock, e.g. "1481 MHz"
pub fn format_mhz(mhz: f64) -> String {
    format!("{:.0} MHz", mhz)
}

/// Format a transfer rate in MT/s, e.g. "42656 MT/s"
pub fn format_mts(mts: f64) -> String {
    format!("{:.0} MT/s", mts)
}

/// Format an MT/s figure as GB/s with one decimal, e.g. "42.7 GB/s"
pub fn format_bandwidth_gbs(mts: f64) -> String {
    format!("{:.1} GB/s", mts_to_gbs(mts))
}

/// Format a frequency with one decimal, e.g. "93.3 Hz"
pub fn format_hz(hz: f64) -> String {
    format!("{:.1} Hz", hz)
}

/// Format an RPM value, e.g. "557 RPM"
pub fn format_rpm(rpm: f64) -> String {
    format!("{:.0} RPM", rpm)
}

/// Format a sound level with one decimal, e.g. "8.3 dB"
pub fn format_db(db: f64) -> String {
    format!("{:.1} dB", db)
}

/// Format a loudness, e.g. "0.5 sone" / "2.0 sones"
pub fn format_sone(sone: f64) -> String {
    if (sone - 1.0).abs() < f64::EPSILON {
        "1.0 sone".to_string()
    } else {
        format!("{:.1} sones", sone)
    }
}

/// Format a size in GB or TB without trailing zeros, e.g. "24 GB", "2.5 TB"
pub fn format_size(value: f64, unit: &str) -> String {
    if value.fract() == 0.0 {
        format!("{:.0} {}", value, unit)
    } else {
        format!("{} {}", value, unit)
    }
}
