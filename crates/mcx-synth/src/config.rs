//! Synthesis configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `MCX_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{SynthError, SynthResult};

/// Canonical order applied to the control list before building.
///
/// Order changes which controls are paired in the tree builder (and thus
/// depth balancing), never the logical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlOrder {
    /// Keep the caller's order.
    #[default]
    AsGiven,
    /// Sort controls by wire id.
    Ascending,
}

impl FromStr for ControlOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "as_given" | "as-given" => Ok(ControlOrder::AsGiven),
            "ascending" => Ok(ControlOrder::Ascending),
            other => Err(format!("unknown control order '{other}'")),
        }
    }
}

/// Tunables for [`Synthesizer`](crate::Synthesizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Run the gate-count/depth verifier on every result.
    #[serde(default = "default_verify")]
    pub verify: bool,

    /// Emit relative-phase Toffolis for mirrored ladders in dirty mode.
    #[serde(default = "default_true")]
    pub relative_phase: bool,

    /// Canonical control order.
    #[serde(default)]
    pub control_order: ControlOrder,

    /// Accept 0 or 1 controls (NOT / CNOT). When false such requests are
    /// rejected as invalid.
    #[serde(default = "default_true")]
    pub allow_degenerate: bool,
}

fn default_verify() -> bool {
    cfg!(debug_assertions)
}

fn default_true() -> bool {
    true
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            verify: default_verify(),
            relative_phase: default_true(),
            control_order: ControlOrder::default(),
            allow_degenerate: default_true(),
        }
    }
}

impl SynthesisConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> SynthResult<Self> {
        serde_yaml_ng::from_str(contents).map_err(|e| SynthError::Config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SynthResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SynthError::Config(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&str>) -> SynthResult<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.merge_env())
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are set and parse override the current values.
    #[must_use]
    pub fn merge_env(mut self) -> Self {
        if let Some(v) = env_flag("MCX_VERIFY") {
            self.verify = v;
        }
        if let Some(v) = env_flag("MCX_RELATIVE_PHASE") {
            self.relative_phase = v;
        }
        if let Ok(v) = std::env::var("MCX_CONTROL_ORDER") {
            if let Ok(order) = v.parse() {
                self.control_order = order;
            }
        }
        if let Some(v) = env_flag("MCX_ALLOW_DEGENERATE") {
            self.allow_degenerate = v;
        }
        self
    }

    /// Minimum number of controls accepted.
    pub fn min_controls(&self) -> usize {
        if self.allow_degenerate { 0 } else { 2 }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let v = std::env::var(name).ok()?;
    parse_flag(&v)
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
