//! Calculation engines
//!
//! One module per calculator. Every function here is pure: the result depends
//! only on the arguments.

mod fan;
mod gpu;
mod hdd;
mod memory;

pub use fan::{compare_fan_efficiency, compute_fan_noise, optimal_rpm, rpm_reduction};
pub use gpu::{
    compute_gpu_boost_performance, compute_gpu_performance, compute_gpu_performance_at_clock,
    estimate_frame_rates,
};
pub use hdd::{compute_hdd_noise, loudness_sone};
pub use memory::{compute_memory_bandwidth, mts_to_gbs};
