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

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hwcalc::cli::{self, Cli};
use hwcalc::logger;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_env("HWCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Some(path) = &args.log_file {
        logger::init_logging(path)?;
        logger::log_event(
            "startup",
            serde_json::json!({ "args": std::env::args().collect::<Vec<_>>() }),
        );
    }

    cli::run(&args)
}
