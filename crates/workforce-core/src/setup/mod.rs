//! Model Setup
//!
//! Population spawning.

pub mod population;

pub use population::*;
