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

//! Calculator input forms
//!
//! Each form holds the current field values of one calculator. Setters take
//! the raw text a user typed; text that is not a finite number is replaced by
//! the field's default. Dependent fields are clamped here (current RPM never
//! exceeds max RPM, at least one drive) so the engines never have to.

use tracing::warn;

use hc_core::constants::fan as fan_const;
use hc_core::{
    FanSize, FanSpec, GpuSpec, GpuVendor, HddPreset, HddSpec, MemoryPreset, MemorySpec, MemoryType,
};

use crate::config::{FanDefaults, GpuDefaults, HddDefaults, MemoryDefaults};

/// Parse a number, falling back to `default` for anything non-finite
pub fn coerce_f64(field: &str, input: &str, default: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            warn!("{}: '{}' is not a number, using {}", field, input, default);
            default
        }
    }
}

/// Parse a non-negative whole number; fractions are truncated
pub fn coerce_u32(field: &str, input: &str, default: u32) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 => v.trunc() as u32,
        _ => {
            warn!("{}: '{}' is not a whole number, using {}", field, input, default);
            default
        }
    }
}

#[derive(Debug, Clone)]
pub struct GpuForm {
    spec: GpuSpec,
    clock_mhz: f64,
    defaults: GpuDefaults,
}

impl GpuForm {
    /// Custom GPU seeded from the configured defaults
    pub fn custom(defaults: &GpuDefaults) -> Self {
        Self {
            spec: GpuSpec {
                name: "Custom GPU".to_string(),
                stream_processors: defaults.stream_processors,
                base_frequency_mhz: defaults.clock_mhz,
                boost_frequency_mhz: None,
                memory_bandwidth_gbs: 0.0,
                vram_gb: 0.0,
                architecture: "Custom".to_string(),
                manufacturer: GpuVendor::Nvidia,
            },
            clock_mhz: defaults.clock_mhz,
            defaults: defaults.clone(),
        }
    }

    /// Catalog model at its base clock
    pub fn from_model(model: &GpuSpec, defaults: &GpuDefaults) -> Self {
        Self {
            spec: model.clone(),
            clock_mhz: model.base_frequency_mhz,
            defaults: defaults.clone(),
        }
    }

    pub fn set_stream_processors(&mut self, input: &str) {
        self.spec.stream_processors =
            coerce_u32("stream processors", input, self.defaults.stream_processors);
    }

    pub fn set_clock(&mut self, input: &str) {
        self.clock_mhz = coerce_f64("clock", input, self.defaults.clock_mhz);
    }

    /// Switch to the boost clock when the model publishes one
    pub fn use_boost_clock(&mut self) {
        if let Some(boost) = self.spec.boost_frequency_mhz {
            self.clock_mhz = boost;
        }
    }

    pub fn spec(&self) -> &GpuSpec {
        &self.spec
    }

    pub fn clock_mhz(&self) -> f64 {
        self.clock_mhz
    }
}

#[derive(Debug, Clone)]
pub struct MemoryForm {
    label: String,
    spec: MemorySpec,
    defaults: MemoryDefaults,
}

impl MemoryForm {
    pub fn custom(defaults: &MemoryDefaults) -> Self {
        Self {
            label: "Custom".to_string(),
            spec: MemorySpec {
                kind: defaults.kind,
                frequency_mhz: defaults.frequency_mhz,
                channel_count: defaults.channels,
            },
            defaults: defaults.clone(),
        }
    }

    pub fn from_preset(preset: &MemoryPreset, defaults: &MemoryDefaults) -> Self {
        Self {
            label: preset.name.to_string(),
            spec: preset.spec,
            defaults: defaults.clone(),
        }
    }

    pub fn set_kind(&mut self, kind: MemoryType) {
        self.spec.kind = kind;
    }

    pub fn set_frequency(&mut self, input: &str) {
        self.spec.frequency_mhz = coerce_u32("frequency", input, self.defaults.frequency_mhz);
    }

    pub fn set_channels(&mut self, input: &str) {
        self.spec.channel_count = coerce_u32("channels", input, self.defaults.channels);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn spec(&self) -> MemorySpec {
        self.spec
    }
}

#[derive(Debug, Clone)]
pub struct FanForm {
    spec: FanSpec,
    defaults: FanDefaults,
}

impl FanForm {
    pub fn new(defaults: &FanDefaults) -> Self {
        let mut form = Self {
            spec: FanSpec {
                diameter_mm: defaults.diameter_mm,
                thickness_mm: defaults.thickness_mm,
                wing_count: defaults.wings,
                max_rpm: defaults.max_rpm,
                current_rpm: defaults.current_rpm,
            },
            defaults: defaults.clone(),
        };
        form.clamp_current_rpm();
        form
    }

    /// Apply a standard frame size, keeping blades and speeds
    pub fn apply_size(&mut self, size: &FanSize) {
        self.spec.diameter_mm = size.diameter_mm;
        self.spec.thickness_mm = size.thickness_mm;
    }

    pub fn set_diameter(&mut self, input: &str) {
        self.spec.diameter_mm = coerce_f64("diameter", input, self.defaults.diameter_mm);
    }

    pub fn set_thickness(&mut self, input: &str) {
        self.spec.thickness_mm = coerce_f64("thickness", input, self.defaults.thickness_mm);
    }

    /// Blade count is kept within the 5-13 range of commercial fans
    pub fn set_wings(&mut self, input: &str) {
        self.spec.wing_count = coerce_u32("wings", input, self.defaults.wings)
            .clamp(fan_const::MIN_WINGS, fan_const::MAX_WINGS);
    }

    /// Lowering the maximum drags the current speed down with it
    pub fn set_max_rpm(&mut self, input: &str) {
        self.spec.max_rpm = coerce_f64("max rpm", input, self.defaults.max_rpm).max(0.0);
        self.clamp_current_rpm();
    }

    pub fn set_current_rpm(&mut self, input: &str) {
        self.spec.current_rpm = coerce_f64("rpm", input, self.defaults.current_rpm);
        self.clamp_current_rpm();
    }

    fn clamp_current_rpm(&mut self) {
        self.spec.current_rpm = self.spec.current_rpm.clamp(0.0, self.spec.max_rpm.max(0.0));
    }

    pub fn spec(&self) -> FanSpec {
        self.spec
    }
}

#[derive(Debug, Clone)]
pub struct HddForm {
    label: String,
    spec: HddSpec,
    defaults: HddDefaults,
}

impl HddForm {
    pub fn custom(defaults: &HddDefaults) -> Self {
        Self {
            label: "Custom".to_string(),
            spec: HddSpec {
                capacity_tb: defaults.capacity_tb,
                spin_speed_rpm: defaults.spin_speed_rpm,
                acoustic_idle_db: defaults.idle_db,
                acoustic_seek_db: defaults.seek_db,
                quantity: defaults.quantity.max(1),
            },
            defaults: defaults.clone(),
        }
    }

    /// Drive model from the catalog; the quantity keeps the configured default
    pub fn from_preset(preset: &HddPreset, defaults: &HddDefaults) -> Self {
        Self {
            label: preset.name.to_string(),
            spec: HddSpec {
                quantity: defaults.quantity.max(1),
                ..preset.spec
            },
            defaults: defaults.clone(),
        }
    }

    pub fn set_capacity(&mut self, input: &str) {
        self.spec.capacity_tb = coerce_f64("capacity", input, self.defaults.capacity_tb);
    }

    pub fn set_spin_speed(&mut self, input: &str) {
        self.spec.spin_speed_rpm = coerce_f64("spin speed", input, self.defaults.spin_speed_rpm);
    }

    pub fn set_idle_db(&mut self, input: &str) {
        self.spec.acoustic_idle_db = coerce_f64("idle noise", input, self.defaults.idle_db);
    }

    pub fn set_seek_db(&mut self, input: &str) {
        self.spec.acoustic_seek_db = coerce_f64("seek noise", input, self.defaults.seek_db);
    }

    pub fn set_quantity(&mut self, input: &str) {
        self.spec.quantity = coerce_u32("quantity", input, self.defaults.quantity).max(1);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn spec(&self) -> HddSpec {
        self.spec
    }
}
