//! GPU throughput engine
//!
//! Peak FP32 throughput is shaders x clock x 2, since one fused multiply-add
//! retires two floating-point operations per cycle. FP16 and the gaming score
//! are fixed multiples of that figure, not measurements.

use tracing::trace;

use crate::constants::{gpu as gpu_const, round_to};
use crate::data::{FrameRateEstimate, GpuPerformanceResult, GpuSpec};

/// Compute throughput at the base clock
pub fn compute_gpu_performance(spec: &GpuSpec) -> GpuPerformanceResult {
    compute_gpu_performance_at_clock(spec, spec.base_frequency_mhz)
}

/// Compute throughput at the boost clock, or the base clock if none is published
pub fn compute_gpu_boost_performance(spec: &GpuSpec) -> GpuPerformanceResult {
    let clock = spec.boost_frequency_mhz.unwrap_or(spec.base_frequency_mhz);
    compute_gpu_performance_at_clock(spec, clock)
}

/// Compute throughput with an overridden core clock
///
/// Zero or negative clocks are not rejected; they yield zero or negative
/// throughput.
pub fn compute_gpu_performance_at_clock(spec: &GpuSpec, clock_mhz: f64) -> GpuPerformanceResult {
    let raw_tflops = (spec.stream_processors as f64 * clock_mhz * gpu_const::FLOPS_PER_CYCLE)
        / gpu_const::MHZ_TO_TFLOPS_DIVISOR;
    let fp32_tflops = round_to(raw_tflops, 2);
    // fp16 comes from the rounded value so it stays an exact multiple;
    // the score uses the unrounded figure
    let fp16_tflops = fp32_tflops * gpu_const::FP16_RATIO;
    let estimated_gaming_score = (raw_tflops * gpu_const::GAMING_SCORE_PER_TFLOPS).round() as i64;

    trace!(
        gpu = %spec.name,
        clock_mhz,
        fp32_tflops,
        "computed GPU throughput"
    );

    GpuPerformanceResult {
        fp32_tflops,
        fp16_tflops,
        memory_bandwidth_gbs: spec.memory_bandwidth_gbs,
        estimated_gaming_score,
    }
}

/// Rough frame rates for a given FP32 throughput
pub fn estimate_frame_rates(tflops: f64) -> FrameRateEstimate {
    use gpu_const::frame_rate::*;

    let estimate = |tflops_for_60: f64, cap: u32| -> u32 {
        let fps = (tflops / tflops_for_60 * TARGET_FPS).round();
        if fps <= 0.0 {
            0
        } else {
            (fps as u32).min(cap)
        }
    };

    FrameRateEstimate {
        fps_1080p: estimate(TFLOPS_FOR_60_1080P, CAP_1080P),
        fps_1440p: estimate(TFLOPS_FOR_60_1440P, CAP_1440P),
        fps_4k: estimate(TFLOPS_FOR_60_4K, CAP_4K),
    }
}
