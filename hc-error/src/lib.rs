//! Error type for Hwcalc
//!
//! The engines only fail on degenerate fan inputs; everything else here comes
//! from the config file, the event log and catalog lookups.

use std::io;
use std::path::PathBuf;

/// Result type alias using HwcalcError
pub type Result<T> = std::result::Result<T, HwcalcError>;

/// Unified error type for all Hwcalc operations
#[derive(thiserror::Error, Debug)]
pub enum HwcalcError {
    // ============================================================================
    // I/O and File System Errors
    // ============================================================================
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: io::Error,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig {
        field: String,
        reason: String,
    },

    // ============================================================================
    // Calculation Input Errors
    // ============================================================================
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput {
        field: String,
        reason: String,
    },

    #[error("Unknown {kind}: {name}")]
    UnknownPart {
        kind: &'static str,
        name: String,
    },
}

impl HwcalcError {
    /// Create an invalid configuration error for a named field
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error for a named field
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown catalog part error
    pub fn unknown_part(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownPart {
            kind,
            name: name.into(),
        }
    }
}
