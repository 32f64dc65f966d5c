//! Domain logic: physical constants, forcing, presets and their validation

pub mod error;
pub mod params;
pub mod pick;
pub mod preset;

pub use error::{PresetError, PresetResult};
pub use params::{Damping, WaveParams, NEWMARK_BETA};
pub use pick::{PickOverride, PickTarget};
pub use preset::{GridShape, SolverSettings, WavePreset};
