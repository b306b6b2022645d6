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

//! Command Line Interface
//!
//! Numeric options are taken as text and go through the forms, so a typo
//! falls back to the configured default instead of aborting.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use hc_core::display::{format_bandwidth_gbs, format_db, format_mhz, format_size};
use hc_core::{
    fan_sizes, gpu_models, hdd_presets, memory_presets, require_fan_size, require_gpu,
    require_hdd_preset, require_memory_preset, MemoryType,
};

use crate::config::{
    config_path, load_config, load_config_from, save_config_to, OutputFormat, SavedConfig,
};
use crate::form::{coerce_f64, FanForm, GpuForm, HddForm, MemoryForm};
use crate::logger;
use crate::report::{
    emit, FanComparisonReport, FanReport, GpuReport, HddReport, MemoryReport, Report,
};

#[derive(Parser)]
#[command(name = "hwcalc")]
#[command(version)]
#[command(about = "Hwcalc - Hardware estimation calculators")]
#[command(long_about = "Hwcalc - Hardware estimation calculators

Closed-form estimates of GPU throughput, memory bandwidth, fan
blade-pass noise and hard drive loudness.

EXAMPLES:
    hwcalc gpu --model \"GeForce GTX 1080 Ti\"
    hwcalc gpu --shaders 2560 --clock 1800
    hwcalc memory --preset DDR4-3200 --channels 4
    hwcalc fan --size 140 --wings 9 --rpm 900
    hwcalc fan-compare --old-diameter 80 --new-diameter 120 --rpm 2000
    hwcalc hdd --preset \"8TB 7200RPM\" --quantity 6
    hwcalc catalog gpus --json

ENVIRONMENT VARIABLES:
    HWCALC_LOG=debug       Diagnostic logging to stderr

FILES:
    ~/.config/hwcalc/config.json   Defaults and output format")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Append a JSON line per calculation to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate GPU compute throughput
    Gpu(GpuArgs),

    /// Estimate memory bandwidth
    Memory(MemoryArgs),

    /// Estimate fan blade-pass noise
    Fan(FanArgs),

    /// Compare a fan with a replacement moving the same air
    FanCompare(FanCompareArgs),

    /// Estimate combined hard drive noise
    Hdd(HddArgs),

    /// Reference tables of known parts
    #[command(subcommand, about = "List known GPUs, memory kits, drives and fan sizes")]
    Catalog(CatalogCommands),

    /// Configuration file management
    #[command(subcommand, about = "Show or create the configuration file")]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct GpuArgs {
    /// Catalog model name
    #[arg(long)]
    pub model: Option<String>,
    /// Stream processor count
    #[arg(long)]
    pub shaders: Option<String>,
    /// Clock in MHz
    #[arg(long)]
    pub clock: Option<String>,
    /// Use the model's boost clock
    #[arg(long)]
    pub boost: bool,
}

#[derive(Args)]
pub struct MemoryArgs {
    /// Preset name, e.g. DDR4-3200
    #[arg(long)]
    pub preset: Option<String>,
    /// Effective data rate in MHz
    #[arg(long)]
    pub frequency: Option<String>,
    /// Number of channels
    #[arg(long)]
    pub channels: Option<String>,
    /// ddr3, ddr4 or ddr5
    #[arg(long)]
    pub kind: Option<String>,
}

#[derive(Args)]
pub struct FanArgs {
    /// Standard size, e.g. 120 or "140mm Standard"
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub diameter: Option<String>,
    #[arg(long)]
    pub thickness: Option<String>,
    /// Blade count (5-13)
    #[arg(long)]
    pub wings: Option<String>,
    #[arg(long)]
    pub max_rpm: Option<String>,
    /// Current speed
    #[arg(long)]
    pub rpm: Option<String>,
    /// Blade-pass target for the optimal speed
    #[arg(long)]
    pub target_hz: Option<String>,
}

#[derive(Args)]
pub struct FanCompareArgs {
    #[arg(long)]
    pub old_diameter: String,
    #[arg(long)]
    pub old_thickness: Option<String>,
    #[arg(long)]
    pub old_wings: Option<String>,
    #[arg(long)]
    pub new_diameter: String,
    #[arg(long)]
    pub new_thickness: Option<String>,
    #[arg(long)]
    pub new_wings: Option<String>,
    /// Speed of the existing fan
    #[arg(long)]
    pub rpm: Option<String>,
}

#[derive(Args)]
pub struct HddArgs {
    /// Preset name, e.g. "8TB 7200RPM"
    #[arg(long)]
    pub preset: Option<String>,
    /// Capacity in TB
    #[arg(long)]
    pub capacity: Option<String>,
    /// Spindle speed
    #[arg(long)]
    pub rpm: Option<String>,
    #[arg(long)]
    pub idle_db: Option<String>,
    #[arg(long)]
    pub seek_db: Option<String>,
    /// Number of identical drives
    #[arg(long)]
    pub quantity: Option<String>,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List GPU models
    Gpus,
    /// List memory presets
    Memory,
    /// List hard drive presets
    Hdds,
    /// List standard fan sizes
    Fans,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as JSON
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Everything a command needs besides its own arguments
struct Context {
    config: SavedConfig,
    config_path: PathBuf,
    format: OutputFormat,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let (config, config_path) = match &cli.config {
        Some(path) => (load_config_from(path)?, path.clone()),
        None => (load_config()?, config_path()),
    };
    let format = if cli.json { OutputFormat::Json } else { config.output };
    debug!("Using config {:?}, output {:?}", config_path, format);

    let ctx = Context {
        config,
        config_path,
        format,
    };

    match &cli.command {
        Commands::Gpu(args) => cmd_gpu(&ctx, args),
        Commands::Memory(args) => cmd_memory(&ctx, args),
        Commands::Fan(args) => cmd_fan(&ctx, args),
        Commands::FanCompare(args) => cmd_fan_compare(&ctx, args),
        Commands::Hdd(args) => cmd_hdd(&ctx, args),
        Commands::Catalog(sub) => cmd_catalog(&ctx, sub),
        Commands::Config(sub) => cmd_config(&ctx, sub),
    }
}

fn publish<R: Report>(ctx: &Context, event: &str, report: &R) -> anyhow::Result<()> {
    if logger::is_enabled() {
        logger::log_event(event, serde_json::to_value(report)?);
    }
    println!("{}", emit(report, ctx.format)?);
    Ok(())
}

// ============================================================================
// Calculators
// ============================================================================

fn cmd_gpu(ctx: &Context, args: &GpuArgs) -> anyhow::Result<()> {
    let defaults = &ctx.config.defaults.gpu;
    let mut form = match &args.model {
        Some(name) => GpuForm::from_model(require_gpu(name)?, defaults),
        None => GpuForm::custom(defaults),
    };
    if let Some(v) = &args.shaders {
        form.set_stream_processors(v);
    }
    if args.boost {
        form.use_boost_clock();
    }
    if let Some(v) = &args.clock {
        form.set_clock(v);
    }

    let report = GpuReport::new(form.spec(), form.clock_mhz());
    publish(ctx, "gpu", &report)
}

fn cmd_memory(ctx: &Context, args: &MemoryArgs) -> anyhow::Result<()> {
    let defaults = &ctx.config.defaults.memory;
    let mut form = match &args.preset {
        Some(name) => MemoryForm::from_preset(require_memory_preset(name)?, defaults),
        None => MemoryForm::custom(defaults),
    };
    if let Some(kind) = &args.kind {
        form.set_kind(kind.parse::<MemoryType>()?);
    }
    if let Some(v) = &args.frequency {
        form.set_frequency(v);
    }
    if let Some(v) = &args.channels {
        form.set_channels(v);
    }

    let report = MemoryReport::new(form.label(), form.spec());
    publish(ctx, "memory", &report)
}

fn cmd_fan(ctx: &Context, args: &FanArgs) -> anyhow::Result<()> {
    let mut form = FanForm::new(&ctx.config.defaults.fan);
    if let Some(name) = &args.size {
        form.apply_size(require_fan_size(name)?);
    }
    if let Some(v) = &args.diameter {
        form.set_diameter(v);
    }
    if let Some(v) = &args.thickness {
        form.set_thickness(v);
    }
    if let Some(v) = &args.wings {
        form.set_wings(v);
    }
    if let Some(v) = &args.max_rpm {
        form.set_max_rpm(v);
    }
    if let Some(v) = &args.rpm {
        form.set_current_rpm(v);
    }

    let target = ctx.config.fan_target_frequency_hz;
    let target = match &args.target_hz {
        Some(v) => coerce_f64("target frequency", v, target),
        None => target,
    };

    let report = FanReport::new(form.spec(), target)?;
    publish(ctx, "fan", &report)
}

fn cmd_fan_compare(ctx: &Context, args: &FanCompareArgs) -> anyhow::Result<()> {
    let defaults = &ctx.config.defaults.fan;
    let build = |diameter: &str, thickness: &Option<String>, wings: &Option<String>| {
        let mut form = FanForm::new(defaults);
        form.set_diameter(diameter);
        if let Some(v) = thickness {
            form.set_thickness(v);
        }
        if let Some(v) = wings {
            form.set_wings(v);
        }
        form.spec()
    };

    let old_fan = build(&args.old_diameter, &args.old_thickness, &args.old_wings);
    let new_fan = build(&args.new_diameter, &args.new_thickness, &args.new_wings);
    let rpm = match &args.rpm {
        Some(v) => coerce_f64("rpm", v, defaults.current_rpm),
        None => defaults.current_rpm,
    };

    let report = FanComparisonReport::new(old_fan, new_fan, rpm)?;
    publish(ctx, "fan_compare", &report)
}

fn cmd_hdd(ctx: &Context, args: &HddArgs) -> anyhow::Result<()> {
    let defaults = &ctx.config.defaults.hdd;
    let mut form = match &args.preset {
        Some(name) => HddForm::from_preset(require_hdd_preset(name)?, defaults),
        None => HddForm::custom(defaults),
    };
    if let Some(v) = &args.capacity {
        form.set_capacity(v);
    }
    if let Some(v) = &args.rpm {
        form.set_spin_speed(v);
    }
    if let Some(v) = &args.idle_db {
        form.set_idle_db(v);
    }
    if let Some(v) = &args.seek_db {
        form.set_seek_db(v);
    }
    if let Some(v) = &args.quantity {
        form.set_quantity(v);
    }

    let report = HddReport::new(form.label(), form.spec());
    publish(ctx, "hdd", &report)
}

// ============================================================================
// Catalog Commands
// ============================================================================

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_catalog(ctx: &Context, cmd: &CatalogCommands) -> anyhow::Result<()> {
    let json = ctx.format == OutputFormat::Json;
    match cmd {
        CatalogCommands::Gpus => {
            if json {
                return print_json(gpu_models());
            }
            for g in gpu_models() {
                let boost = g
                    .boost_frequency_mhz
                    .map(|b| format!(" / {}", format_mhz(b)))
                    .unwrap_or_default();
                println!(
                    "{:<8} {:<22} {:>6} SP  {}{}  {}",
                    g.manufacturer.to_string(),
                    g.name,
                    g.stream_processors,
                    format_mhz(g.base_frequency_mhz),
                    boost,
                    format_size(g.vram_gb, "GB")
                );
            }
        }
        CatalogCommands::Memory => {
            if json {
                return print_json(memory_presets());
            }
            for m in memory_presets() {
                println!(
                    "{:<10} {} channels  {}",
                    m.name,
                    m.spec.channel_count,
                    format_bandwidth_gbs(m.spec.bandwidth())
                );
            }
        }
        CatalogCommands::Hdds => {
            if json {
                return print_json(hdd_presets());
            }
            for h in hdd_presets() {
                println!(
                    "{:<24} idle {}  seek {}",
                    h.name,
                    format_db(h.spec.acoustic_idle_db),
                    format_db(h.spec.acoustic_seek_db)
                );
            }
        }
        CatalogCommands::Fans => {
            if json {
                return print_json(fan_sizes());
            }
            for f in fan_sizes() {
                println!("{:<16} {:.0}x{:.0} mm", f.name, f.diameter_mm, f.thickness_mm);
            }
        }
    }
    Ok(())
}

// ============================================================================
// Config Commands
// ============================================================================

fn cmd_config(ctx: &Context, cmd: &ConfigCommands) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => print_json(&ctx.config),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => {
            if ctx.config_path.exists() && !force {
                bail!(
                    "{} already exists, use --force to overwrite",
                    ctx.config_path.display()
                );
            }
            save_config_to(&ctx.config_path, &SavedConfig::default())?;
            println!("Wrote {}", ctx.config_path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fan_command() {
        let cli = Cli::try_parse_from(["hwcalc", "fan", "--wings", "9", "--rpm", "abc", "--json"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Fan(args) => {
                assert_eq!(args.wings.as_deref(), Some("9"));
                assert_eq!(args.rpm.as_deref(), Some("abc"));
            }
            _ => panic!("expected fan command"),
        }
    }

    #[test]
    fn test_fan_compare_requires_diameters() {
        assert!(Cli::try_parse_from(["hwcalc", "fan-compare", "--old-diameter", "80"]).is_err());
    }

    #[test]
    fn test_config_init_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hwcalc").join("config.json");
        let arg = path.to_str().unwrap();

        let cli = Cli::try_parse_from(["hwcalc", "--config", arg, "config", "init"]).unwrap();
        run(&cli).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), SavedConfig::default());

        let again = Cli::try_parse_from(["hwcalc", "--config", arg, "config", "init"]).unwrap();
        assert!(run(&again).is_err());

        let forced =
            Cli::try_parse_from(["hwcalc", "--config", arg, "config", "init", "--force"]).unwrap();
        run(&forced).unwrap();
    }

    #[test]
    fn test_unknown_model_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let cli = Cli::try_parse_from([
            "hwcalc",
            "--config",
            path.to_str().unwrap(),
            "gpu",
            "--model",
            "GeForce 256",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("GeForce 256"));
    }

    #[test]
    fn test_calculators_run_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let arg = path.to_str().unwrap();
        for cmd in ["gpu", "memory", "fan", "hdd"] {
            let cli = Cli::try_parse_from(["hwcalc", "--config", arg, cmd]).unwrap();
            run(&cli).unwrap();
        }
    }
}
