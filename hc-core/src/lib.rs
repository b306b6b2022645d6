//! Hwcalc Core Library
//!
//! Closed-form hardware estimates: GPU throughput, memory bandwidth, fan
//! blade-pass noise and HDD loudness, plus the tiers and advice layered on
//! top of them.
//!
//! # Module Structure
//!
//! - `data/` - Input specs and result records
//! - `engine/` - One pure calculation module per calculator
//! - `classify` - Qualitative tiers and suitability advice
//! - `catalog` - Read-only reference tables of known parts
//! - `constants` - Every factor, threshold and default
//! - `display` - Unit formatting for frontends
//!
//! # Example
//!
//! ```
//! use hc_core::{compute_fan_noise, optimal_rpm, FanSpec, NoiseLevel};
//!
//! let fan = FanSpec {
//!     diameter_mm: 120.0,
//!     thickness_mm: 25.0,
//!     wing_count: 7,
//!     max_rpm: 1500.0,
//!     current_rpm: 800.0,
//! };
//! let result = compute_fan_noise(&fan);
//! assert_eq!(result.frequency_hz, 93.3);
//! assert_eq!(result.noise_level, NoiseLevel::Noisy);
//! assert_eq!(optimal_rpm(7, 65.0).unwrap(), 557);
//! ```

// Grouped modules
pub mod data;
pub mod engine;

// Standalone modules
pub mod catalog;
pub mod classify;
pub mod constants;
pub mod display;

// Re-export error types
pub use hc_error::{HwcalcError, Result};

// Re-export primary types from data/
pub use data::{
    FanComparison, FanResult, FanSpec, FanVerdict, FrameRateEstimate, GpuPerformanceResult,
    GpuSpec, GpuVendor, HddResult, HddSpec, MemorySpec, MemoryType, NoiseLevel,
};

// Re-export engine functions
pub use engine::{
    compare_fan_efficiency, compute_fan_noise, compute_gpu_boost_performance,
    compute_gpu_performance, compute_gpu_performance_at_clock, compute_hdd_noise,
    compute_memory_bandwidth, estimate_frame_rates, loudness_sone, mts_to_gbs, optimal_rpm,
    rpm_reduction,
};

// Re-export classification
pub use classify::{
    noise_level_for_frequency, placement_advice, suitable_workloads, GpuTier, LoudnessLevel,
    MemoryTier, Placement, Workload,
};

// Re-export catalog lookups
pub use catalog::{
    fan_sizes, find_fan_size, find_gpu, find_hdd_preset, find_memory_preset, gpu_models,
    hdd_presets, memory_presets, require_fan_size, require_gpu, require_hdd_preset,
    require_memory_preset, FanSize, HddPreset, MemoryPreset,
};
