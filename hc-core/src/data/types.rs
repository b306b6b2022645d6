//! Core data types for Hwcalc
//!
//! Input specs and result records shared by the engines. All of them are
//! plain immutable values.

use serde::{Deserialize, Serialize};

/// GPU vendor type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
}

impl std::fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Intel => write!(f, "Intel"),
        }
    }
}

/// GPU model specification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GpuSpec {
    /// Marketing name (e.g., "GeForce RTX 4090")
    pub name: String,
    /// CUDA cores / stream processors / Xe vector engines x lanes
    pub stream_processors: u32,
    /// Base core clock in MHz
    pub base_frequency_mhz: f64,
    /// Boost core clock in MHz, if published
    pub boost_frequency_mhz: Option<f64>,
    /// Memory bandwidth in GB/s
    pub memory_bandwidth_gbs: f64,
    pub vram_gb: f64,
    pub architecture: String,
    pub manufacturer: GpuVendor,
}

/// Derived GPU throughput
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GpuPerformanceResult {
    pub fp32_tflops: f64,
    pub fp16_tflops: f64,
    /// Passed through from the spec
    pub memory_bandwidth_gbs: f64,
    pub estimated_gaming_score: i64,
}

/// Expected frame rates per resolution, capped at typical refresh rates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FrameRateEstimate {
    pub fps_1080p: u32,
    pub fps_1440p: u32,
    pub fps_4k: u32,
}

/// DDR generation
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryType {
    #[serde(rename = "DDR3")]
    Ddr3,
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryType::Ddr3 => write!(f, "DDR3"),
            MemoryType::Ddr4 => write!(f, "DDR4"),
            MemoryType::Ddr5 => write!(f, "DDR5"),
        }
    }
}

impl std::str::FromStr for MemoryType {
    type Err = hc_error::HwcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ddr3" => Ok(MemoryType::Ddr3),
            "ddr4" => Ok(MemoryType::Ddr4),
            "ddr5" => Ok(MemoryType::Ddr5),
            other => Err(hc_error::HwcalcError::invalid_input(
                "memory type",
                format!("'{}' is not one of DDR3, DDR4, DDR5", other),
            )),
        }
    }
}

/// System memory configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct MemorySpec {
    pub kind: MemoryType,
    /// Effective data rate in MHz (e.g., 3200 for DDR4-3200)
    pub frequency_mhz: u32,
    pub channel_count: u32,
}

impl MemorySpec {
    /// Theoretical transfer rate in MT/s
    pub fn bandwidth(&self) -> f64 {
        crate::engine::compute_memory_bandwidth(self)
    }
}

/// Case or radiator fan
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FanSpec {
    pub diameter_mm: f64,
    pub thickness_mm: f64,
    /// Blade count, 5-13 on commercial fans
    pub wing_count: u32,
    pub max_rpm: f64,
    /// Operating speed, expected within 0..=max_rpm
    pub current_rpm: f64,
}

/// Fan noise level (three-tier scale)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Quiet,
    Acceptable,
    Noisy,
}

/// Fan blade-pass estimate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FanResult {
    pub frequency_hz: f64,
    pub noise_level: NoiseLevel,
    pub recommendations: Vec<String>,
}

/// Direction of a fan replacement's noise change
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FanVerdict {
    Quieter,
    Louder,
}

/// Outcome of replacing one fan with another at equal airflow
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FanComparison {
    /// Speed the replacement needs to move the same air
    pub new_fan_rpm: i64,
    pub old_frequency_hz: f64,
    pub new_frequency_hz: f64,
    /// Signed change in blade-pass frequency; positive means quieter
    pub change_percent: f64,
    pub verdict: FanVerdict,
}

impl std::fmt::Display for FanComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.change_percent.abs().round();
        match self.verdict {
            FanVerdict::Quieter => write!(f, "{}% quieter", magnitude),
            FanVerdict::Louder => write!(f, "{}% louder", magnitude),
        }
    }
}

/// Hard disk drive acoustic data (from the vendor datasheet)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct HddSpec {
    pub capacity_tb: f64,
    pub spin_speed_rpm: f64,
    pub acoustic_idle_db: f64,
    pub acoustic_seek_db: f64,
    /// Number of identical drives in the enclosure
    pub quantity: u32,
}

/// Combined noise estimate for a set of identical drives
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HddResult {
    pub frequency_hz: f64,
    pub total_noise_level_db: f64,
    pub effective_loudness_sone: f64,
    pub seek_noise_level_db: f64,
    pub seek_loudness_sone: f64,
    pub recommendations: Vec<String>,
}
