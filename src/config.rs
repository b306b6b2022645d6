/*
 * This file is part of Hwcalc.
 *
 * Copyright (C) 2025 Hwcalc contributors
 *
 * Hwcalc is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Hwcalc is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Hwcalc. If not, see <https://www.gnu.org/licenses/>.
 */

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hc_core::constants::{defaults, fan as fan_const};
use hc_core::MemoryType;
use hc_error::{HwcalcError, Result};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

fn default_output() -> OutputFormat { OutputFormat::Text }

fn default_target_frequency() -> f64 { fan_const::DEFAULT_TARGET_FREQUENCY_HZ }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GpuDefaults {
    pub stream_processors: u32,
    pub clock_mhz: f64,
}

impl Default for GpuDefaults {
    fn default() -> Self {
        Self {
            stream_processors: defaults::GPU_STREAM_PROCESSORS,
            clock_mhz: defaults::GPU_CLOCK_MHZ,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryDefaults {
    pub kind: MemoryType,
    pub frequency_mhz: u32,
    pub channels: u32,
}

impl Default for MemoryDefaults {
    fn default() -> Self {
        Self {
            kind: MemoryType::Ddr4,
            frequency_mhz: defaults::MEMORY_FREQUENCY_MHZ,
            channels: defaults::MEMORY_CHANNELS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FanDefaults {
    pub diameter_mm: f64,
    pub thickness_mm: f64,
    pub wings: u32,
    pub max_rpm: f64,
    pub current_rpm: f64,
}

impl Default for FanDefaults {
    fn default() -> Self {
        Self {
            diameter_mm: defaults::FAN_DIAMETER_MM,
            thickness_mm: defaults::FAN_THICKNESS_MM,
            wings: defaults::FAN_WINGS,
            max_rpm: defaults::FAN_MAX_RPM,
            current_rpm: defaults::FAN_CURRENT_RPM,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HddDefaults {
    pub capacity_tb: f64,
    pub spin_speed_rpm: f64,
    pub idle_db: f64,
    pub seek_db: f64,
    pub quantity: u32,
}

impl Default for HddDefaults {
    fn default() -> Self {
        Self {
            capacity_tb: defaults::HDD_CAPACITY_TB,
            spin_speed_rpm: defaults::HDD_SPIN_SPEED_RPM,
            idle_db: defaults::HDD_ACOUSTIC_IDLE_DB,
            seek_db: defaults::HDD_ACOUSTIC_SEEK_DB,
            quantity: defaults::HDD_QUANTITY,
        }
    }
}

/// Fallback values for every form field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub gpu: GpuDefaults,
    pub memory: MemoryDefaults,
    pub fan: FanDefaults,
    pub hdd: HddDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SavedConfig {
    /// Blade-pass ceiling used for the optimal fan RPM
    #[serde(default = "default_target_frequency")]
    pub fan_target_frequency_hz: f64,
    #[serde(default = "default_output")]
    pub output: OutputFormat,
    #[serde(default)]
    pub defaults: FormDefaults,
}

impl Default for SavedConfig {
    fn default() -> Self {
        Self {
            fan_target_frequency_hz: default_target_frequency(),
            output: default_output(),
            defaults: FormDefaults::default(),
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("hwcalc").join("config.json");
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("hwcalc")
            .join("config.json");
    }
    dirs::config_dir()
        .map(|d| d.join("hwcalc").join("config.json"))
        .unwrap_or_else(|| PathBuf::from("/etc/hwcalc/config.json"))
}

/// Load the config at the default location, or defaults if there is none
pub fn load_config() -> Result<SavedConfig> {
    load_config_from(&config_path())
}

/// Load and validate a config file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<SavedConfig> {
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Ok(SavedConfig::default());
    }

    let data = fs::read_to_string(path).map_err(|source| HwcalcError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: SavedConfig = serde_json::from_str(&data)?;
    validate_config(&cfg)?;

    info!("Config loaded from {:?}", path);
    Ok(cfg)
}

pub fn save_config_to(path: &Path, cfg: &SavedConfig) -> Result<()> {
    validate_config(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| HwcalcError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json).map_err(|source| HwcalcError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HwcalcError::invalid_config(
            field,
            format!("{} is not a positive number", value),
        ));
    }
    Ok(())
}

pub fn validate_config(cfg: &SavedConfig) -> Result<()> {
    require_positive("fan_target_frequency_hz", cfg.fan_target_frequency_hz)?;

    let d = &cfg.defaults;
    if d.gpu.stream_processors == 0 {
        return Err(HwcalcError::invalid_config(
            "defaults.gpu.stream_processors",
            "must be non-zero",
        ));
    }
    require_positive("defaults.gpu.clock_mhz", d.gpu.clock_mhz)?;

    if d.memory.frequency_mhz == 0 {
        return Err(HwcalcError::invalid_config(
            "defaults.memory.frequency_mhz",
            "must be non-zero",
        ));
    }
    if d.memory.channels == 0 {
        return Err(HwcalcError::invalid_config("defaults.memory.channels", "must be non-zero"));
    }

    require_positive("defaults.fan.diameter_mm", d.fan.diameter_mm)?;
    require_positive("defaults.fan.thickness_mm", d.fan.thickness_mm)?;
    require_positive("defaults.fan.max_rpm", d.fan.max_rpm)?;
    if !(fan_const::MIN_WINGS..=fan_const::MAX_WINGS).contains(&d.fan.wings) {
        return Err(HwcalcError::invalid_config(
            "defaults.fan.wings",
            format!(
                "{} is outside {}..={}",
                d.fan.wings,
                fan_const::MIN_WINGS,
                fan_const::MAX_WINGS
            ),
        ));
    }
    let rpm = d.fan.current_rpm;
    if !rpm.is_finite() || rpm < 0.0 || rpm > d.fan.max_rpm {
        return Err(HwcalcError::invalid_config(
            "defaults.fan.current_rpm",
            "must be within 0..=max_rpm",
        ));
    }

    require_positive("defaults.hdd.capacity_tb", d.hdd.capacity_tb)?;
    require_positive("defaults.hdd.spin_speed_rpm", d.hdd.spin_speed_rpm)?;
    require_positive("defaults.hdd.idle_db", d.hdd.idle_db)?;
    require_positive("defaults.hdd.seek_db", d.hdd.seek_db)?;
    if d.hdd.quantity == 0 {
        return Err(HwcalcError::invalid_config("defaults.hdd.quantity", "must be at least 1"));
    }

    Ok(())
}
