//! Constants and configuration values for Hwcalc
//!
//! Centralizes all formula factors, classification thresholds and defaults.
//! This is the SINGLE SOURCE OF TRUTH for every number the engines use.
//! Never use magic numbers in other files - add them here first.

/// GPU throughput formula and tier thresholds
pub mod gpu {
    /// Floating-point operations per shader per cycle (one FMA counts as two)
    pub const FLOPS_PER_CYCLE: f64 = 2.0;

    /// Divisor turning shaders x MHz x FLOPs into TFLOPS
    pub const MHZ_TO_TFLOPS_DIVISOR: f64 = 1_000_000.0;

    /// Fixed FP16:FP32 ratio
    pub const FP16_RATIO: f64 = 2.0;

    /// Gaming score points per FP32 TFLOPS
    pub const GAMING_SCORE_PER_TFLOPS: f64 = 10.0;

    /// Tier upper bounds in TFLOPS (exclusive)
    pub const TIER_VERY_LOW_MAX: f64 = 1.0;
    pub const TIER_BASIC_MAX: f64 = 8.0;
    pub const TIER_GOOD_MAX: f64 = 15.0;
    pub const TIER_HIGH_MAX: f64 = 25.0;

    /// Frame rate estimate: TFLOPS needed for 60 fps at each resolution
    pub mod frame_rate {
        pub const TARGET_FPS: f64 = 60.0;

        pub const TFLOPS_FOR_60_1080P: f64 = 8.0;
        pub const TFLOPS_FOR_60_1440P: f64 = 12.0;
        pub const TFLOPS_FOR_60_4K: f64 = 20.0;

        /// Display refresh caps
        pub const CAP_1080P: u32 = 165;
        pub const CAP_1440P: u32 = 120;
        pub const CAP_4K: u32 = 90;
    }
}

/// Memory bandwidth formula and tier thresholds
pub mod memory {
    /// Bus width of a single DDR channel (DDR3/4/5 alike)
    pub const BITS_PER_CHANNEL: f64 = 64.0;

    pub const BITS_PER_BYTE: f64 = 8.0;

    /// MT/s per GB/s for presentation
    pub const MTS_PER_GBS: f64 = 1000.0;

    /// Tier upper bounds in GB/s (exclusive)
    pub const TIER_BASIC_MAX: f64 = 20.0;
    pub const TIER_GOOD_MAX: f64 = 40.0;
    pub const TIER_HIGH_MAX: f64 = 60.0;

    /// Minimum GB/s for each workload class
    pub const WORKLOAD_CONTENT_CREATION_MIN: f64 = 60.0;
    pub const WORKLOAD_GAMING_MIN: f64 = 40.0;
    pub const WORKLOAD_PRODUCTIVITY_MIN: f64 = 20.0;
}

/// Fan blade-pass formula, noise thresholds and advisory limits
pub mod fan {
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Blade-pass frequency ceiling used for the optimal RPM
    pub const DEFAULT_TARGET_FREQUENCY_HZ: f64 = 65.0;

    /// Noise level upper bounds in Hz (exclusive)
    pub const QUIET_MAX_HZ: f64 = 50.0;
    pub const ACCEPTABLE_MAX_HZ: f64 = 65.0;

    /// Fans below these dimensions get an upgrade hint
    pub const RECOMMENDED_MIN_DIAMETER_MM: f64 = 120.0;
    pub const RECOMMENDED_MIN_THICKNESS_MM: f64 = 25.0;

    /// Supported blade counts
    pub const MIN_WINGS: u32 = 5;
    pub const MAX_WINGS: u32 = 13;
}

/// HDD rotation, summation and loudness model
pub mod hdd {
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Rotation frequencies below this get the low-frequency offset
    pub const LOW_FREQUENCY_LIMIT_HZ: f64 = 100.0;

    /// Equal-loudness offsets in dB
    pub const LOW_FREQUENCY_OFFSET_DB: f64 = 22.0;
    pub const HIGH_FREQUENCY_OFFSET_DB: f64 = 10.0;

    /// Sone curve: REFERENCE_DB maps to 1 sone, every DOUBLING_DB doubles it
    pub const REFERENCE_DB: f64 = 40.0;
    pub const DOUBLING_DB: f64 = 10.0;

    /// Recommendation triggers
    pub const LOUD_SONE: f64 = 3.0;
    pub const MANY_DRIVES: u32 = 4;
    pub const FAST_SPIN_HZ: f64 = 100.0;

    /// Loudness level upper bounds in sone (exclusive)
    pub const VERY_QUIET_MAX_SONE: f64 = 1.5;
    pub const QUIET_MAX_SONE: f64 = 2.5;
    pub const MODERATE_MAX_SONE: f64 = 3.5;
    pub const LOUD_MAX_SONE: f64 = 5.0;

    /// Placement advice upper bounds in sone (exclusive)
    pub const PLACEMENT_HOME_MAX_SONE: f64 = 2.5;
    pub const PLACEMENT_SERVER_ROOM_MAX_SONE: f64 = 4.0;
}

/// Fallback values used when a form field does not parse
pub mod defaults {
    pub const GPU_STREAM_PROCESSORS: u32 = 3584;
    pub const GPU_CLOCK_MHZ: f64 = 1481.0;

    pub const MEMORY_FREQUENCY_MHZ: u32 = 3200;
    pub const MEMORY_CHANNELS: u32 = 2;

    pub const FAN_DIAMETER_MM: f64 = 120.0;
    pub const FAN_THICKNESS_MM: f64 = 25.0;
    pub const FAN_WINGS: u32 = 7;
    pub const FAN_MAX_RPM: f64 = 1500.0;
    pub const FAN_CURRENT_RPM: f64 = 800.0;

    pub const HDD_CAPACITY_TB: f64 = 4.0;
    pub const HDD_SPIN_SPEED_RPM: f64 = 5400.0;
    pub const HDD_ACOUSTIC_IDLE_DB: f64 = 2.3;
    pub const HDD_ACOUSTIC_SEEK_DB: f64 = 2.7;
    pub const HDD_QUANTITY: u32 = 1;
}

/// Round to a fixed number of decimals, half away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
