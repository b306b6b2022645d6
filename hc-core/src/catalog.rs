//! Hardware reference catalogs
//!
//! Read-only tables of known parts, built once on first access and never
//! mutated afterwards. Lookups are case-insensitive on the part name.

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::debug;

use hc_error::{HwcalcError, Result};

use crate::data::{GpuSpec, GpuVendor, HddSpec, MemorySpec, MemoryType};

/// A named memory kit configuration
#[derive(Debug, Clone, Serialize)]
pub struct MemoryPreset {
    pub name: &'static str,
    pub spec: MemorySpec,
}

/// A named drive model; `spec.quantity` is always 1
#[derive(Debug, Clone, Serialize)]
pub struct HddPreset {
    pub name: &'static str,
    pub spec: HddSpec,
}

/// A standard fan frame size
#[derive(Debug, Clone, Serialize)]
pub struct FanSize {
    pub name: &'static str,
    pub diameter_mm: f64,
    pub thickness_mm: f64,
}

#[allow(clippy::too_many_arguments)]
fn gpu(
    name: &str,
    stream_processors: u32,
    base: f64,
    boost: f64,
    bandwidth: f64,
    vram_gb: f64,
    architecture: &str,
    manufacturer: GpuVendor,
) -> GpuSpec {
    GpuSpec {
        name: name.to_string(),
        stream_processors,
        base_frequency_mhz: base,
        boost_frequency_mhz: Some(boost),
        memory_bandwidth_gbs: bandwidth,
        vram_gb,
        architecture: architecture.to_string(),
        manufacturer,
    }
}

fn memory(name: &'static str, kind: MemoryType, frequency_mhz: u32) -> MemoryPreset {
    MemoryPreset {
        name,
        spec: MemorySpec {
            kind,
            frequency_mhz,
            channel_count: 2,
        },
    }
}

fn hdd(name: &'static str, capacity_tb: f64, rpm: f64, idle_db: f64, seek_db: f64) -> HddPreset {
    HddPreset {
        name,
        spec: HddSpec {
            capacity_tb,
            spin_speed_rpm: rpm,
            acoustic_idle_db: idle_db,
            acoustic_seek_db: seek_db,
            quantity: 1,
        },
    }
}

lazy_static! {
    static ref GPU_MODELS: Vec<GpuSpec> = {
        use GpuVendor::*;
        vec![
            // NVIDIA
            gpu("GeForce GTX 1080 Ti", 3584, 1481.0, 1582.0, 484.0, 11.0, "Pascal", Nvidia),
            gpu("GeForce RTX 3060", 3584, 1320.0, 1777.0, 360.0, 12.0, "Ampere", Nvidia),
            gpu("GeForce RTX 3070", 5888, 1500.0, 1725.0, 448.0, 8.0, "Ampere", Nvidia),
            gpu("GeForce RTX 3080", 8704, 1440.0, 1710.0, 760.0, 10.0, "Ampere", Nvidia),
            gpu("GeForce RTX 3090", 10496, 1395.0, 1695.0, 936.0, 24.0, "Ampere", Nvidia),
            gpu("GeForce RTX 4060", 3072, 1830.0, 2460.0, 272.0, 8.0, "Ada Lovelace", Nvidia),
            gpu("GeForce RTX 4070", 5888, 1920.0, 2475.0, 504.0, 12.0, "Ada Lovelace", Nvidia),
            gpu("GeForce RTX 4080", 9728, 2205.0, 2505.0, 717.0, 16.0, "Ada Lovelace", Nvidia),
            gpu("GeForce RTX 4090", 16384, 2230.0, 2520.0, 1008.0, 24.0, "Ada Lovelace", Nvidia),
            // AMD
            gpu("Radeon RX 480", 2304, 1120.0, 1266.0, 256.0, 8.0, "Polaris", Amd),
            gpu("Radeon RX 6600", 1792, 1968.0, 2491.0, 224.0, 8.0, "RDNA 2", Amd),
            gpu("Radeon RX 6700 XT", 2560, 2424.0, 2581.0, 384.0, 12.0, "RDNA 2", Amd),
            gpu("Radeon RX 6800", 3840, 1815.0, 2105.0, 512.0, 16.0, "RDNA 2", Amd),
            gpu("Radeon RX 6900 XT", 5120, 2015.0, 2250.0, 512.0, 16.0, "RDNA 2", Amd),
            gpu("Radeon RX 7700 XT", 3456, 2171.0, 2544.0, 432.0, 12.0, "RDNA 3", Amd),
            gpu("Radeon RX 7800 XT", 3840, 2124.0, 2430.0, 624.0, 16.0, "RDNA 3", Amd),
            gpu("Radeon RX 7900 XTX", 6144, 2230.0, 2500.0, 960.0, 24.0, "RDNA 3", Amd),
            // Intel
            gpu("Arc A750", 3584, 2050.0, 2400.0, 512.0, 8.0, "Xe-HPG", Intel),
            gpu("Arc A770", 4096, 2100.0, 2400.0, 560.0, 16.0, "Xe-HPG", Intel),
        ]
    };

    static ref MEMORY_PRESETS: Vec<MemoryPreset> = vec![
        memory("DDR3-1600", MemoryType::Ddr3, 1600),
        memory("DDR3-1866", MemoryType::Ddr3, 1866),
        memory("DDR3-2133", MemoryType::Ddr3, 2133),
        memory("DDR4-2400", MemoryType::Ddr4, 2400),
        memory("DDR4-2666", MemoryType::Ddr4, 2666),
        memory("DDR4-3200", MemoryType::Ddr4, 3200),
        memory("DDR4-3600", MemoryType::Ddr4, 3600),
        memory("DDR5-4800", MemoryType::Ddr5, 4800),
        memory("DDR5-5600", MemoryType::Ddr5, 5600),
        memory("DDR5-6400", MemoryType::Ddr5, 6400),
    ];

    static ref HDD_PRESETS: Vec<HddPreset> = vec![
        hdd("4TB 5400RPM", 4.0, 5400.0, 2.3, 2.7),
        hdd("8TB 5400RPM", 8.0, 5400.0, 2.6, 2.8),
        hdd("8TB 7200RPM", 8.0, 7200.0, 2.8, 3.2),
        hdd("16TB 7200RPM", 16.0, 7200.0, 2.8, 3.2),
        hdd("4TB 5400RPM (WD Red)", 4.0, 5400.0, 2.1, 2.5),
        hdd("10TB 7200RPM (Seagate)", 10.0, 7200.0, 3.0, 3.4),
    ];

    static ref FAN_SIZES: Vec<FanSize> = vec![
        FanSize { name: "80mm Standard", diameter_mm: 80.0, thickness_mm: 25.0 },
        FanSize { name: "92mm Standard", diameter_mm: 92.0, thickness_mm: 25.0 },
        FanSize { name: "120mm Standard", diameter_mm: 120.0, thickness_mm: 25.0 },
        FanSize { name: "140mm Standard", diameter_mm: 140.0, thickness_mm: 25.0 },
        FanSize { name: "200mm Large", diameter_mm: 200.0, thickness_mm: 30.0 },
    ];
}

/// All GPU models, NVIDIA first, then AMD and Intel
pub fn gpu_models() -> &'static [GpuSpec] {
    &GPU_MODELS
}

pub fn memory_presets() -> &'static [MemoryPreset] {
    &MEMORY_PRESETS
}

pub fn hdd_presets() -> &'static [HddPreset] {
    &HDD_PRESETS
}

pub fn fan_sizes() -> &'static [FanSize] {
    &FAN_SIZES
}

pub fn find_gpu(name: &str) -> Option<&'static GpuSpec> {
    let found = GPU_MODELS.iter().find(|g| g.name.eq_ignore_ascii_case(name.trim()));
    debug!("GPU lookup '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
    found
}

pub fn find_memory_preset(name: &str) -> Option<&'static MemoryPreset> {
    let found = MEMORY_PRESETS.iter().find(|m| m.name.eq_ignore_ascii_case(name.trim()));
    debug!("Memory preset lookup '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
    found
}

pub fn find_hdd_preset(name: &str) -> Option<&'static HddPreset> {
    let found = HDD_PRESETS.iter().find(|h| h.name.eq_ignore_ascii_case(name.trim()));
    debug!("HDD preset lookup '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
    found
}

/// Find a fan size by name ("120mm Standard") or bare diameter ("120")
pub fn find_fan_size(name: &str) -> Option<&'static FanSize> {
    let needle = name.trim();
    let by_diameter = needle
        .trim_end_matches("mm")
        .parse::<f64>()
        .ok();

    let found = FAN_SIZES.iter().find(|f| {
        f.name.eq_ignore_ascii_case(needle) || by_diameter == Some(f.diameter_mm)
    });
    debug!("Fan size lookup '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
    found
}

pub fn require_gpu(name: &str) -> Result<&'static GpuSpec> {
    find_gpu(name).ok_or_else(|| HwcalcError::unknown_part("GPU model", name))
}

pub fn require_memory_preset(name: &str) -> Result<&'static MemoryPreset> {
    find_memory_preset(name).ok_or_else(|| HwcalcError::unknown_part("memory preset", name))
}

pub fn require_hdd_preset(name: &str) -> Result<&'static HddPreset> {
    find_hdd_preset(name).ok_or_else(|| HwcalcError::unknown_part("HDD preset", name))
}

pub fn require_fan_size(name: &str) -> Result<&'static FanSize> {
    find_fan_size(name).ok_or_else(|| HwcalcError::unknown_part("fan size", name))
}
