//! Data types shared by the engines
//!
//! Contains the input specs and result records.

mod types;

pub use types::{
    FanComparison, FanResult, FanSpec, FanVerdict, FrameRateEstimate, GpuPerformanceResult,
    GpuSpec, GpuVendor, HddResult, HddSpec, MemorySpec, MemoryType, NoiseLevel,
};
