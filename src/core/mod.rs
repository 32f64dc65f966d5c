//! Core building blocks: safety/console macros, grid topology, fields

// Macros first so every later module can use them
#[macro_use]
pub mod utils;
pub mod grid;
pub mod field;

pub use field::Field;
pub use grid::{Boundary, Grid};
