// File: crates/chart-core/src/error.rs
// Summary: Error types for chart loading and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("legend is empty")]
    EmptyLegend,

    #[error("chart has no series")]
    NoSeries,

    #[error("legend timestamps decrease at index {index}")]
    UnorderedLegend { index: usize },

    #[error("series '{id}' has {actual} values, legend has {expected}")]
    LengthMismatch { id: String, expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
