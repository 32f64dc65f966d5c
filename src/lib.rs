//! Wavefront Engine - implicit wave propagation in WASM
//!
//! Newmark-beta time integration of the wave equation on a 1D line or a 2D
//! lattice, with an implicit acceleration solve every step.
//!
//! Architecture:
//! - core/        - Grid topology, fields, macros
//! - solver/      - Stencil matrix + symmetric relaxation solver
//! - domain/      - Physical parameters, presets, validation
//! - simulation/  - WaveIntegrator (pure Rust) and the `Wave` JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod solver;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel field passes (browser only)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Wavefront engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Boundary, Field, Grid};
pub use crate::domain::{Damping, PickTarget, PresetError, WaveParams, WavePreset};
pub use crate::simulation::{PerfStats, Wave, WaveIntegrator};
pub use crate::solver::{IterativeSolver, Smoother, SolveReport, StencilMatrix};
