//! Sparse implicit system: stencil matrix + symmetric relaxation solver

mod matrix;
mod sweep;

pub use matrix::StencilMatrix;
pub use sweep::{
    IterativeSolver, Smoother, SolveReport, DEFAULT_JACOBI_OMEGA, DEFAULT_MAX_ITERATION,
    DEFAULT_TOLERANCE,
};
