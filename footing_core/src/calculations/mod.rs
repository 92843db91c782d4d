//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Numeric results (JSON-serializable)
//! - `calculate(&input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`footing`] - Isolated pad footing: bending steel, wide-beam and punching shear

pub mod footing;

pub use footing::{calculate, DesignResult, FootingInput, FootingResult};
