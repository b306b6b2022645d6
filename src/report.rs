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

//! Calculator reports
//!
//! A report bundles one engine result with the tiers and advice derived from
//! it. Every report renders either as aligned text or as JSON.

use serde::Serialize;

use hc_core::display::{
    format_bandwidth_gbs, format_db, format_hz, format_mhz, format_mts, format_rpm, format_size,
    format_sone, format_tflops,
};
use hc_core::{
    compare_fan_efficiency, compute_fan_noise, compute_gpu_performance_at_clock,
    compute_hdd_noise, compute_memory_bandwidth, estimate_frame_rates, mts_to_gbs, optimal_rpm,
    placement_advice, rpm_reduction, suitable_workloads, FanComparison, FanResult, FanSpec,
    FrameRateEstimate, GpuPerformanceResult, GpuSpec, GpuTier, HddResult, HddSpec, LoudnessLevel,
    MemorySpec, MemoryTier, Placement, Workload,
};
use hc_error::Result;

use crate::config::OutputFormat;

pub trait Report: Serialize {
    fn render_text(&self) -> String;
}

/// Render a report in the requested format
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GpuReport {
    pub name: String,
    pub clock_mhz: f64,
    pub performance: GpuPerformanceResult,
    pub tier: GpuTier,
    pub frame_rates: FrameRateEstimate,
    pub vram_gb: f64,
}

impl GpuReport {
    pub fn new(spec: &GpuSpec, clock_mhz: f64) -> Self {
        let performance = compute_gpu_performance_at_clock(spec, clock_mhz);
        Self {
            name: spec.name.clone(),
            clock_mhz,
            tier: GpuTier::from_tflops(performance.fp32_tflops),
            frame_rates: estimate_frame_rates(performance.fp32_tflops),
            vram_gb: spec.vram_gb,
            performance,
        }
    }
}

impl Report for GpuReport {
    fn render_text(&self) -> String {
        let p = &self.performance;
        let f = &self.frame_rates;
        let mut lines = vec![
            format!("{} @ {}", self.name, format_mhz(self.clock_mhz)),
            format!("  FP32:          {}", format_tflops(p.fp32_tflops)),
            format!("  FP16:          {}", format_tflops(p.fp16_tflops)),
        ];
        if p.memory_bandwidth_gbs > 0.0 {
            lines.push(format!(
                "  VRAM:          {} @ {:.0} GB/s",
                format_size(self.vram_gb, "GB"),
                p.memory_bandwidth_gbs
            ));
        }
        lines.push(format!("  Gaming score:  {}", p.estimated_gaming_score));
        lines.push(format!("  Tier:          {} ({})", self.tier, self.tier.description()));
        lines.push(format!(
            "  Est. FPS:      1080p {} | 1440p {} | 4K {}",
            f.fps_1080p, f.fps_1440p, f.fps_4k
        ));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryReport {
    pub label: String,
    pub spec: MemorySpec,
    pub bandwidth_mts: f64,
    pub bandwidth_gbs: f64,
    pub tier: MemoryTier,
    pub workloads: Vec<Workload>,
}

impl MemoryReport {
    pub fn new(label: &str, spec: MemorySpec) -> Self {
        let bandwidth_mts = compute_memory_bandwidth(&spec);
        let bandwidth_gbs = mts_to_gbs(bandwidth_mts);
        Self {
            label: label.to_string(),
            spec,
            bandwidth_mts,
            bandwidth_gbs,
            tier: MemoryTier::from_gbs(bandwidth_gbs),
            workloads: suitable_workloads(bandwidth_gbs),
        }
    }
}

impl Report for MemoryReport {
    fn render_text(&self) -> String {
        let mut lines = vec![
            format!(
                "{} ({} {} MHz x {} channels)",
                self.label, self.spec.kind, self.spec.frequency_mhz, self.spec.channel_count
            ),
            format!(
                "  Bandwidth:  {} ({})",
                format_mts(self.bandwidth_mts),
                format_bandwidth_gbs(self.bandwidth_mts)
            ),
            format!("  Tier:       {} ({})", self.tier, self.tier.description()),
        ];
        lines.extend(
            self.workloads
                .iter()
                .map(|w| format!("  Suited to:  {} ({})", w, w.examples())),
        );
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FanReport {
    pub spec: FanSpec,
    pub result: FanResult,
    pub target_frequency_hz: f64,
    pub optimal_rpm: u32,
    pub rpm_reduction: Option<u32>,
}

impl FanReport {
    pub fn new(spec: FanSpec, target_frequency_hz: f64) -> Result<Self> {
        Ok(Self {
            result: compute_fan_noise(&spec),
            optimal_rpm: optimal_rpm(spec.wing_count, target_frequency_hz)?,
            rpm_reduction: rpm_reduction(&spec, target_frequency_hz)?,
            target_frequency_hz,
            spec,
        })
    }
}

impl Report for FanReport {
    fn render_text(&self) -> String {
        let s = &self.spec;
        let mut lines = vec![
            format!(
                "{:.0}x{:.0} mm fan, {} blades at {}",
                s.diameter_mm,
                s.thickness_mm,
                s.wing_count,
                format_rpm(s.current_rpm)
            ),
            format!(
                "  Blade-pass:   {} ({}: {})",
                format_hz(self.result.frequency_hz),
                self.result.noise_level,
                self.result.noise_level.description()
            ),
            format!(
                "  Optimal:      {} for {}",
                format_rpm(self.optimal_rpm as f64),
                format_hz(self.target_frequency_hz)
            ),
        ];
        if let Some(reduction) = self.rpm_reduction {
            lines.push(format!("  Reduce speed by {}", format_rpm(reduction as f64)));
        }
        lines.extend(self.result.recommendations.iter().map(|r| format!("  - {}", r)));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FanComparisonReport {
    pub old_fan: FanSpec,
    pub new_fan: FanSpec,
    pub target_rpm: f64,
    pub comparison: FanComparison,
    pub summary: String,
}

impl FanComparisonReport {
    pub fn new(old_fan: FanSpec, new_fan: FanSpec, target_rpm: f64) -> Result<Self> {
        let comparison = compare_fan_efficiency(&old_fan, &new_fan, target_rpm)?;
        Ok(Self {
            summary: comparison.to_string(),
            old_fan,
            new_fan,
            target_rpm,
            comparison,
        })
    }
}

impl Report for FanComparisonReport {
    fn render_text(&self) -> String {
        let c = &self.comparison;
        [
            format!(
                "{:.0} mm fan at {} -> {:.0} mm fan at {}",
                self.old_fan.diameter_mm,
                format_rpm(self.target_rpm),
                self.new_fan.diameter_mm,
                format_rpm(c.new_fan_rpm as f64)
            ),
            format!(
                "  Blade-pass:  {} -> {}",
                format_hz(c.old_frequency_hz),
                format_hz(c.new_frequency_hz)
            ),
            format!("  Result:      {}", self.summary),
        ]
        .join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HddReport {
    pub label: String,
    pub spec: HddSpec,
    pub result: HddResult,
    pub loudness: LoudnessLevel,
    pub placement: Placement,
}

impl HddReport {
    pub fn new(label: &str, spec: HddSpec) -> Self {
        let result = compute_hdd_noise(&spec);
        Self {
            label: label.to_string(),
            loudness: LoudnessLevel::from_sone(result.effective_loudness_sone),
            // placement follows the louder seek figure
            placement: placement_advice(result.seek_loudness_sone),
            spec,
            result,
        }
    }
}

impl Report for HddReport {
    fn render_text(&self) -> String {
        let r = &self.result;
        let mut lines = vec![
            format!(
                "{} x {} ({}, {})",
                self.spec.quantity,
                self.label,
                format_size(self.spec.capacity_tb, "TB"),
                format_rpm(self.spec.spin_speed_rpm)
            ),
            format!("  Rotation:  {}", format_hz(r.frequency_hz)),
            format!(
                "  Idle:      {} / {}",
                format_db(r.total_noise_level_db),
                format_sone(r.effective_loudness_sone)
            ),
            format!(
                "  Seek:      {} / {}",
                format_db(r.seek_noise_level_db),
                format_sone(r.seek_loudness_sone)
            ),
            format!("  Loudness:  {} ({})", self.loudness, self.loudness.description()),
            format!("  {} {}", self.placement.label(), self.placement.locations()),
        ];
        lines.extend(r.recommendations.iter().map(|rec| format!("  - {}", rec)));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::{find_gpu, MemoryType, NoiseLevel};

    fn fan(diameter_mm: f64, thickness_mm: f64, wing_count: u32, current_rpm: f64) -> FanSpec {
        FanSpec {
            diameter_mm,
            thickness_mm,
            wing_count,
            max_rpm: 2000.0,
            current_rpm,
        }
    }

    #[test]
    fn test_gpu_report() {
        let spec = find_gpu("GeForce GTX 1080 Ti").unwrap();
        let report = GpuReport::new(spec, spec.base_frequency_mhz);
        assert_eq!(report.performance.fp32_tflops, 10.62);
        assert_eq!(report.tier, GpuTier::Good);

        let text = report.render_text();
        assert!(text.contains("10.62 TFLOPS"));
        assert!(text.contains("21.24 TFLOPS"));
        assert!(text.contains("Good"));
        assert!(text.contains("Gaming score:  106"));
        assert_eq!(text.lines().count(), 7);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_memory_report() {
        let spec = MemorySpec {
            kind: MemoryType::Ddr4,
            frequency_mhz: 2666,
            channel_count: 2,
        };
        let report = MemoryReport::new("DDR4-2666", spec);
        assert_eq!(report.bandwidth_mts, 42_656.0);
        assert_eq!(report.tier, MemoryTier::High);
        assert!(report.render_text().contains("42656 MT/s"));
    }

    #[test]
    fn test_fan_report() {
        let report = FanReport::new(fan(120.0, 25.0, 7, 800.0), 65.0).unwrap();
        assert_eq!(report.result.noise_level, NoiseLevel::Noisy);
        assert_eq!(report.optimal_rpm, 557);
        assert_eq!(report.rpm_reduction, Some(243));

        let text = report.render_text();
        assert!(text.contains("93.3 Hz"));
        assert!(text.contains("Reduce speed by 243 RPM"));
    }

    #[test]
    fn test_fan_report_rejects_bladeless_fan() {
        assert!(FanReport::new(fan(120.0, 25.0, 0, 800.0), 65.0).is_err());
    }

    #[test]
    fn test_comparison_report() {
        let report =
            FanComparisonReport::new(fan(80.0, 25.0, 7, 2000.0), fan(120.0, 25.0, 7, 0.0), 2000.0)
                .unwrap();
        assert_eq!(report.comparison.new_fan_rpm, 889);
        assert_eq!(report.summary, "56% quieter");
    }

    #[test]
    fn test_hdd_report_json() {
        let spec = HddSpec {
            capacity_tb: 4.0,
            spin_speed_rpm: 5400.0,
            acoustic_idle_db: 2.3,
            acoustic_seek_db: 2.7,
            quantity: 4,
        };
        let report = HddReport::new("Custom", spec);
        assert_eq!(report.loudness, LoudnessLevel::VeryQuiet);
        assert_eq!(report.placement, Placement::HomeOffice);

        let json = emit(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["total_noise_level_db"], 8.3);
        assert_eq!(value["loudness"], "very_quiet");
        assert_eq!(value["placement"], "home_office");
    }

    #[test]
    fn test_hdd_placement_follows_seek_loudness() {
        let spec = HddSpec {
            capacity_tb: 4.0,
            spin_speed_rpm: 5400.0,
            acoustic_idle_db: 27.5,
            acoustic_seek_db: 33.0,
            quantity: 1,
        };
        let report = HddReport::new("Custom", spec);
        assert_eq!(report.result.effective_loudness_sone, 1.9);
        assert_eq!(report.result.seek_loudness_sone, 2.8);
        assert_eq!(report.loudness, LoudnessLevel::Quiet);
        assert_eq!(report.placement, Placement::ServerRoom);
        assert!(report.render_text().contains("Server rooms, basement setups"));
    }

    #[test]
    fn test_emit_text_matches_render() {
        let report = HddReport::new(
            "Custom",
            HddSpec {
                capacity_tb: 4.0,
                spin_speed_rpm: 5400.0,
                acoustic_idle_db: 2.3,
                acoustic_seek_db: 2.7,
                quantity: 1,
            },
        );
        assert_eq!(emit(&report, OutputFormat::Text).unwrap(), report.render_text());
    }
}
