// File: crates/chart-core/src/config.rs
// Summary: Engine tunables (plot, animation, legend, trimmer) loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::*;

/// All engine tunables. Every section and field falls back to its default when omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub plot: PlotConfig,
    pub animation: AnimationConfig,
    pub legend: LegendConfig,
    pub trimmer: TrimmerConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub chunk_count: usize,
    pub simplified_chunk_count: usize,
    pub target_steps: f64,
    /// See [`EMPTY_SPACE_THRESHOLD`]; revisions disagree between 0.2 and 0.4.
    pub empty_space_threshold: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            chunk_count: PLOT_CHUNKS,
            simplified_chunk_count: SIMPLIFIED_PLOT_CHUNKS,
            target_steps: TARGET_STEPS,
            empty_space_threshold: EMPTY_SPACE_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds.
    pub duration: f64,
    pub retarget_point_threshold: usize,
    /// Hosts below the capability threshold keep nominal durations for large series.
    pub low_end_device: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION,
            retarget_point_threshold: RETARGET_POINT_THRESHOLD,
            low_end_device: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub horizontal_inset: f64,
    pub max_space_delimiter: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { horizontal_inset: LEGEND_HORIZONTAL_INSET, max_space_delimiter: LEGEND_MAX_SPACE_DELIMITER }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimmerConfig {
    pub min_visibility: f64,
    pub default_visibility: f64,
    pub max_visibility: f64,
    pub snap_threshold: f64,
    /// Fraction of the handle width at each edge that grabs that edge.
    pub edge_fraction: f64,
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self {
            min_visibility: TRIMMER_MIN_VISIBILITY,
            default_visibility: TRIMMER_DEFAULT_VISIBILITY,
            max_visibility: TRIMMER_MAX_VISIBILITY,
            snap_threshold: TRIMMER_SNAP_THRESHOLD,
            edge_fraction: 0.25,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.plot.chunk_count == 0 || self.plot.simplified_chunk_count == 0 {
            return invalid("plot chunk counts must be positive");
        }
        if !(self.plot.target_steps > 0.0) {
            return invalid("plot.target_steps must be positive");
        }
        if !(0.0..=1.0).contains(&self.plot.empty_space_threshold) {
            return invalid("plot.empty_space_threshold must be within [0, 1]");
        }
        if !(self.animation.duration >= 0.0) {
            return invalid("animation.duration must be non-negative");
        }
        if !(self.legend.max_space_delimiter > 0.0) {
            return invalid("legend.max_space_delimiter must be positive");
        }
        let t = &self.trimmer;
        if !(0.0 < t.min_visibility && t.min_visibility <= t.max_visibility && t.max_visibility <= 1.0) {
            return invalid("trimmer visibilities must satisfy 0 < min <= max <= 1");
        }
        if !(0.0 < t.edge_fraction && t.edge_fraction < 0.5) {
            return invalid("trimmer.edge_fraction must be within (0, 0.5)");
        }
        Ok(())
    }
}

/// Load and validate an [`EngineConfig`] from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
    parse_config(&content)
}

/// Parse and validate an [`EngineConfig`] from a TOML string.
pub fn parse_config(content: &str) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
