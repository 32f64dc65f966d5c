use thiserror::Error;

/// Rejected configuration. The integrator itself never validates, so every
/// value crossing into it from JSON or JS is checked against these first.
#[derive(Error, Debug, PartialEq)]
pub enum PresetError {
    #[error("preset parse error: {0}")]
    Parse(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("grid too small: {width}x{height} (each axis needs at least 2 cells)")]
    GridTooSmall { width: usize, height: usize },

    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("boundary coefficient must be 1 (fixed) or 2 (free), got {0}")]
    Boundary(u32),

    #[error("max_iteration must be at least 1")]
    NoIterations,

    #[error("{0} does not apply to this damping model")]
    NotApplicable(&'static str),
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        PresetError::Parse(err.to_string())
    }
}

pub type PresetResult<T> = Result<T, PresetError>;
