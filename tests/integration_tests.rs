/*
 * Integration tests for Hwcalc
 *
 * These tests drive the calculators through the public API the way the
 * command line does: config defaults, forms, engines and reports together.
 */

use hc_core::{
    compare_fan_efficiency, compute_fan_noise, compute_gpu_boost_performance,
    compute_gpu_performance, compute_hdd_noise, compute_memory_bandwidth, find_fan_size,
    gpu_models, hdd_presets, memory_presets, optimal_rpm, FanSpec, FanVerdict, GpuSpec, GpuTier,
    GpuVendor, HddSpec, HwcalcError, MemorySpec, MemoryType, NoiseLevel,
};
use hwcalc::config::{load_config_from, save_config_to, OutputFormat, SavedConfig};
use hwcalc::form::{FanForm, GpuForm, HddForm, MemoryForm};
use hwcalc::report::{emit, FanReport, GpuReport, HddReport, MemoryReport};
use serial_test::serial;
use tempfile::TempDir;

fn custom_gpu(stream_processors: u32, base_frequency_mhz: f64) -> GpuSpec {
    GpuSpec {
        name: "Test GPU".to_string(),
        stream_processors,
        base_frequency_mhz,
        boost_frequency_mhz: None,
        memory_bandwidth_gbs: 0.0,
        vram_gb: 0.0,
        architecture: "Test".to_string(),
        manufacturer: GpuVendor::Amd,
    }
}

fn fan(wing_count: u32, current_rpm: f64) -> FanSpec {
    FanSpec {
        diameter_mm: 120.0,
        thickness_mm: 25.0,
        wing_count,
        max_rpm: 3000.0,
        current_rpm,
    }
}

fn hdd(spin_speed_rpm: f64, acoustic_idle_db: f64, quantity: u32) -> HddSpec {
    HddSpec {
        capacity_tb: 4.0,
        spin_speed_rpm,
        acoustic_idle_db,
        acoustic_seek_db: acoustic_idle_db + 0.4,
        quantity,
    }
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_reference_gpu() {
    let result = compute_gpu_performance(&custom_gpu(3584, 1481.0));
    assert_eq!(result.fp32_tflops, 10.62);
    assert_eq!(result.fp16_tflops, 21.24);
}

#[test]
fn test_reference_memory() {
    let spec = MemorySpec {
        kind: MemoryType::Ddr4,
        frequency_mhz: 2666,
        channel_count: 2,
    };
    assert_eq!(compute_memory_bandwidth(&spec), 42_656.0);
}

#[test]
fn test_reference_fan() {
    let result = compute_fan_noise(&fan(7, 800.0));
    assert_eq!(result.frequency_hz, 93.3);
    assert_eq!(result.noise_level, NoiseLevel::Noisy);
    assert_eq!(optimal_rpm(7, 65.0).unwrap(), 557);
}

#[test]
fn test_reference_hdd() {
    assert_eq!(compute_hdd_noise(&hdd(5400.0, 2.3, 1)).frequency_hz, 90.0);
    assert_eq!(compute_hdd_noise(&hdd(5400.0, 2.3, 4)).total_noise_level_db, 8.3);
}

// ============================================================================
// Whole-catalog properties
// ============================================================================

#[test]
fn test_every_gpu_fp16_doubles_fp32() {
    for model in gpu_models() {
        for result in [compute_gpu_performance(model), compute_gpu_boost_performance(model)] {
            assert_eq!(result.fp16_tflops, result.fp32_tflops * 2.0, "{}", model.name);
            assert_eq!(result.memory_bandwidth_gbs, model.memory_bandwidth_gbs);
        }
    }
}

#[test]
fn test_boost_never_slower_than_base() {
    for model in gpu_models() {
        let base = compute_gpu_performance(model);
        let boost = compute_gpu_boost_performance(model);
        assert!(boost.fp32_tflops >= base.fp32_tflops, "{}", model.name);
    }
}

#[test]
fn test_memory_presets_scale_with_frequency() {
    for preset in memory_presets() {
        let one = MemorySpec {
            channel_count: 1,
            ..preset.spec
        };
        assert_eq!(
            compute_memory_bandwidth(&preset.spec),
            compute_memory_bandwidth(&one) * preset.spec.channel_count as f64
        );
    }
}

#[test]
fn test_hdd_presets_get_louder_with_more_drives() {
    for preset in hdd_presets() {
        let mut previous = f64::MIN;
        for quantity in 1..=8 {
            let spec = HddSpec {
                quantity,
                ..preset.spec
            };
            let result = compute_hdd_noise(&spec);
            assert!(result.total_noise_level_db >= previous, "{}", preset.name);
            previous = result.total_noise_level_db;
        }
    }
}

// ============================================================================
// Idempotence and monotonicity
// ============================================================================

#[test]
fn test_engines_are_idempotent() {
    let gpu = custom_gpu(2560, 1800.0);
    assert_eq!(compute_gpu_performance(&gpu), compute_gpu_performance(&gpu));
    assert_eq!(compute_fan_noise(&fan(9, 1200.0)), compute_fan_noise(&fan(9, 1200.0)));
    let drives = hdd(7200.0, 2.8, 6);
    assert_eq!(compute_hdd_noise(&drives), compute_hdd_noise(&drives));
}

#[test]
fn test_fan_frequency_monotonic_in_rpm_and_wings() {
    let mut previous = 0.0;
    for rpm in (0..=3000).step_by(100) {
        let hz = compute_fan_noise(&fan(7, rpm as f64)).frequency_hz;
        assert!(hz >= previous);
        previous = hz;
    }

    let mut previous = 0.0;
    for wings in 5..=13 {
        let hz = compute_fan_noise(&fan(wings, 1000.0)).frequency_hz;
        assert!(hz >= previous);
        previous = hz;
    }
}

#[test]
fn test_optimal_rpm_stays_under_target() {
    for wings in 5..=13 {
        let rpm = optimal_rpm(wings, 65.0).unwrap();
        let hz = compute_fan_noise(&fan(wings, rpm as f64)).frequency_hz;
        assert!(hz <= 65.0, "{} wings at {} RPM gave {} Hz", wings, rpm, hz);
    }
    assert!(matches!(
        optimal_rpm(0, 65.0),
        Err(HwcalcError::InvalidInput { .. })
    ));
}

#[test]
fn test_gpu_tier_rises_with_clock() {
    let mut previous = GpuTier::VeryLow;
    for clock in (100..=3000).step_by(100) {
        let result = compute_gpu_performance(&custom_gpu(8192, clock as f64));
        let tier = GpuTier::from_tflops(result.fp32_tflops);
        assert!(tier >= previous);
        previous = tier;
    }
    assert_eq!(previous, GpuTier::Extreme);
}

// ============================================================================
// Fan replacement
// ============================================================================

#[test]
fn test_bigger_fan_is_quieter() {
    let small = FanSpec {
        diameter_mm: 80.0,
        ..fan(7, 2000.0)
    };
    let big = FanSpec {
        diameter_mm: 140.0,
        ..fan(7, 0.0)
    };
    let comparison = compare_fan_efficiency(&small, &big, 2000.0).unwrap();
    assert_eq!(comparison.verdict, FanVerdict::Quieter);

    let reverse = compare_fan_efficiency(&big, &small, 2000.0).unwrap();
    assert_eq!(reverse.verdict, FanVerdict::Louder);
}

#[test]
fn test_same_fan_reports_no_change() {
    let comparison = compare_fan_efficiency(&fan(7, 1000.0), &fan(7, 1000.0), 1000.0).unwrap();
    assert_eq!(comparison.new_fan_rpm, 1000);
    assert_eq!(comparison.to_string(), "0% louder");
}

// ============================================================================
// Config, forms and reports together
// ============================================================================

#[test]
#[serial]
fn test_config_defaults_drive_forms() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut cfg = SavedConfig::default();
    cfg.defaults.fan.wings = 9;
    cfg.defaults.hdd.quantity = 4;
    cfg.output = OutputFormat::Json;
    save_config_to(&path, &cfg).unwrap();

    let loaded = load_config_from(&path).unwrap();
    let d = &loaded.defaults;
    assert_eq!(FanForm::new(&d.fan).spec().wing_count, 9);
    assert_eq!(HddForm::custom(&d.hdd).spec().quantity, 4);
    assert_eq!(GpuForm::custom(&d.gpu).spec().stream_processors, 3584);
    assert_eq!(MemoryForm::custom(&d.memory).spec().frequency_mhz, 3200);
}

#[test]
fn test_garbage_input_uses_defaults() {
    let cfg = SavedConfig::default();
    let mut form = FanForm::new(&cfg.defaults.fan);
    form.set_current_rpm("loud");
    form.set_wings("");
    let report = FanReport::new(form.spec(), cfg.fan_target_frequency_hz).unwrap();
    assert_eq!(report.result.frequency_hz, 93.3);
    assert_eq!(report.optimal_rpm, 557);

    let mut drives = HddForm::custom(&cfg.defaults.hdd);
    drives.set_quantity("-1");
    assert_eq!(drives.spec().quantity, 1);
}

#[test]
fn test_fan_size_preset_report() {
    let cfg = SavedConfig::default();
    let mut form = FanForm::new(&cfg.defaults.fan);
    form.apply_size(find_fan_size("80mm").unwrap());
    form.set_current_rpm("2000");
    let report = FanReport::new(form.spec(), 65.0).unwrap();
    // default max of 1500 RPM caps the requested speed
    assert_eq!(report.spec.current_rpm, 1500.0);
    assert_eq!(report.result.frequency_hz, 175.0);
}

#[test]
fn test_reports_serialize() {
    let model = hc_core::find_gpu("Radeon RX 7900 XTX").unwrap();
    let gpu = GpuReport::new(model, model.base_frequency_mhz);
    let json: serde_json::Value =
        serde_json::from_str(&emit(&gpu, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["name"], "Radeon RX 7900 XTX");
    assert_eq!(json["tier"], "extreme");

    let preset = hc_core::find_memory_preset("DDR5-6400").unwrap();
    let memory = MemoryReport::new(preset.name, preset.spec);
    let json: serde_json::Value =
        serde_json::from_str(&emit(&memory, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["bandwidth_mts"], 102_400.0);
    assert_eq!(json["tier"], "extreme");

    let drives = HddReport::new("Custom", hdd(7200.0, 3.0, 8));
    let text = emit(&drives, OutputFormat::Text).unwrap();
    assert!(text.starts_with("8 x Custom"));
}
