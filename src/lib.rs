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

//! Hwcalc - Hardware estimation calculators
//!
//! Command line front end over `hc-core`: configuration, input forms,
//! report rendering and the optional event log.

pub mod cli;
pub mod config;
pub mod form;
pub mod logger;
pub mod report;
