//! Qualitative tiers layered on top of the engine outputs
//!
//! Each metric has exactly one threshold table, defined in
//! [`crate::constants`]. A value equal to a threshold belongs to the upper
//! tier.

use serde::{Deserialize, Serialize};

use crate::constants::{fan as fan_const, gpu as gpu_const, hdd as hdd_const, memory as mem_const};
use crate::data::NoiseLevel;

/// GPU compute tier by FP32 TFLOPS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuTier {
    VeryLow,
    Basic,
    Good,
    High,
    Extreme,
}

impl GpuTier {
    pub fn from_tflops(tflops: f64) -> Self {
        if tflops < gpu_const::TIER_VERY_LOW_MAX {
            GpuTier::VeryLow
        } else if tflops < gpu_const::TIER_BASIC_MAX {
            GpuTier::Basic
        } else if tflops < gpu_const::TIER_GOOD_MAX {
            GpuTier::Good
        } else if tflops < gpu_const::TIER_HIGH_MAX {
            GpuTier::High
        } else {
            GpuTier::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GpuTier::VeryLow => "Very Low",
            GpuTier::Basic => "Basic",
            GpuTier::Good => "Good",
            GpuTier::High => "High",
            GpuTier::Extreme => "Extreme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GpuTier::VeryLow => "Integrated-class graphics, desktop use only",
            GpuTier::Basic => "Entry-level gaming performance",
            GpuTier::Good => "Good for 1080p gaming",
            GpuTier::High => "Excellent for 1440p gaming",
            GpuTier::Extreme => "Top-tier 4K gaming",
        }
    }
}

/// Memory tier by bandwidth in GB/s
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTier {
    Basic,
    Good,
    High,
    Extreme,
}

impl MemoryTier {
    pub fn from_gbs(gbs: f64) -> Self {
        if gbs < mem_const::TIER_BASIC_MAX {
            MemoryTier::Basic
        } else if gbs < mem_const::TIER_GOOD_MAX {
            MemoryTier::Good
        } else if gbs < mem_const::TIER_HIGH_MAX {
            MemoryTier::High
        } else {
            MemoryTier::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemoryTier::Basic => "Basic",
            MemoryTier::Good => "Good",
            MemoryTier::High => "High",
            MemoryTier::Extreme => "Extreme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MemoryTier::Basic => "Entry-level performance",
            MemoryTier::Good => "Mainstream performance",
            MemoryTier::High => "High-end performance",
            MemoryTier::Extreme => "Enthusiast-level performance",
        }
    }
}

/// Workloads a memory configuration is suited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workload {
    ContentCreation,
    Gaming,
    Productivity,
    BasicTasks,
}

impl Workload {
    pub fn label(&self) -> &'static str {
        match self {
            Workload::ContentCreation => "Content Creation",
            Workload::Gaming => "Gaming",
            Workload::Productivity => "Productivity",
            Workload::BasicTasks => "Basic Tasks",
        }
    }

    pub fn examples(&self) -> &'static str {
        match self {
            Workload::ContentCreation => "4K video editing, 3D rendering",
            Workload::Gaming => "High-end gaming, streaming",
            Workload::Productivity => "Office work, multitasking",
            Workload::BasicTasks => "Web browsing, light work",
        }
    }
}

/// Workloads supported by `gbs` of bandwidth, most demanding first
pub fn suitable_workloads(gbs: f64) -> Vec<Workload> {
    let mut workloads = Vec::new();
    if gbs >= mem_const::WORKLOAD_CONTENT_CREATION_MIN {
        workloads.push(Workload::ContentCreation);
    }
    if gbs >= mem_const::WORKLOAD_GAMING_MIN {
        workloads.push(Workload::Gaming);
    }
    if gbs >= mem_const::WORKLOAD_PRODUCTIVITY_MIN {
        workloads.push(Workload::Productivity);
    } else {
        workloads.push(Workload::BasicTasks);
    }
    workloads
}

/// Fan noise level by blade-pass frequency in Hz
pub fn noise_level_for_frequency(frequency_hz: f64) -> NoiseLevel {
    if frequency_hz < fan_const::QUIET_MAX_HZ {
        NoiseLevel::Quiet
    } else if frequency_hz < fan_const::ACCEPTABLE_MAX_HZ {
        NoiseLevel::Acceptable
    } else {
        NoiseLevel::Noisy
    }
}

impl NoiseLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoiseLevel::Quiet => "quiet",
            NoiseLevel::Acceptable => "acceptable",
            NoiseLevel::Noisy => "noisy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NoiseLevel::Quiet => "Barely audible",
            NoiseLevel::Acceptable => "Comfortable for most users",
            NoiseLevel::Noisy => "Clearly audible tonal whine",
        }
    }
}

impl std::fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// HDD loudness level by sone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoudnessLevel {
    VeryQuiet,
    Quiet,
    Moderate,
    Loud,
    VeryLoud,
}

impl LoudnessLevel {
    pub fn from_sone(sone: f64) -> Self {
        if sone < hdd_const::VERY_QUIET_MAX_SONE {
            LoudnessLevel::VeryQuiet
        } else if sone < hdd_const::QUIET_MAX_SONE {
            LoudnessLevel::Quiet
        } else if sone < hdd_const::MODERATE_MAX_SONE {
            LoudnessLevel::Moderate
        } else if sone < hdd_const::LOUD_MAX_SONE {
            LoudnessLevel::Loud
        } else {
            LoudnessLevel::VeryLoud
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoudnessLevel::VeryQuiet => "Very Quiet",
            LoudnessLevel::Quiet => "Quiet",
            LoudnessLevel::Moderate => "Moderate",
            LoudnessLevel::Loud => "Loud",
            LoudnessLevel::VeryLoud => "Very Loud",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoudnessLevel::VeryQuiet => "Barely noticeable",
            LoudnessLevel::Quiet => "Acceptable for quiet environments",
            LoudnessLevel::Moderate => "Noticeable but acceptable",
            LoudnessLevel::Loud => "Clearly audible",
            LoudnessLevel::VeryLoud => "Potentially disruptive",
        }
    }
}

/// Where a drive array of a given loudness can live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    HomeOffice,
    ServerRoom,
    DataCenter,
}

impl Placement {
    pub fn label(&self) -> &'static str {
        match self {
            Placement::HomeOffice => "Suitable for",
            Placement::ServerRoom => "Consider for",
            Placement::DataCenter => "Recommended for",
        }
    }

    pub fn locations(&self) -> &'static str {
        match self {
            Placement::HomeOffice => "Quiet environments, home office",
            Placement::ServerRoom => "Server rooms, basement setups",
            Placement::DataCenter => "Data centers, separate rooms only",
        }
    }
}

pub fn placement_advice(sone: f64) -> Placement {
    if sone < hdd_const::PLACEMENT_HOME_MAX_SONE {
        Placement::HomeOffice
    } else if sone < hdd_const::PLACEMENT_SERVER_ROOM_MAX_SONE {
        Placement::ServerRoom
    } else {
        Placement::DataCenter
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(GpuTier, MemoryTier, Workload, LoudnessLevel);
