//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The boot state the LS-8 defines (PC 0, stack pointer 0xF4, no tracing).
//! 2. **Structures:** General settings grouped under `general`.
//! 3. **Loading:** Parsing from JSON text or a JSON file.
//!
//! `Config::default()` reproduces the architectural reset state exactly; a configuration
//! file only needs to name the fields it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::STACK_TOP;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address of the first instruction executed.
    pub const START_PC: u8 = 0;

    /// Stack pointer value at boot.
    pub const INITIAL_SP: u8 = super::STACK_TOP;
}

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Root simulator configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true, "max_steps": 1000 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.general.initial_sp, 0xF4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// The `serde_json` error if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`] if it is
    /// not valid configuration JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,

    /// Initial stack pointer (R7)
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,

    /// Stop with an error after this many instructions; unlimited when absent
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }

    /// Returns the default stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: defaults::INITIAL_SP,
            max_steps: None,
        }
    }
}
