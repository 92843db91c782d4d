//! # footing_core - Isolated Footing Design Engine
//!
//! `footing_core` computes the reinforcement and shear checks of an isolated
//! pad footing under a single column, using a simplified limit-state method.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the calculation is a pure function of its input
//! - **Faithful numerics**: no range validation; degenerate inputs propagate
//!   as NaN/Infinity instead of raising errors
//! - **Host-owned state**: form state lives in an explicit record
//!   ([`form::DesignForm`]) that the UI owns and passes around
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use footing_core::{calculate, FootingInput};
//!
//! let input = FootingInput { vsd: 120.0, ..FootingInput::default() };
//! let result = calculate(&input);
//!
//! println!("d = {} mm, As,x = {} mm²", result.display().d, result.display().as_x);
//! println!("wide beam: {}, punching: {}", result.wide_beam_status, result.punching_status);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The footing design calculation
//! - [`equations`] - One function per design formula, plus metadata
//! - [`materials`] - Concrete strength classes
//! - [`form`] - Form state with the empty-field / stale-result policy
//! - [`format`] - Fixed-point display rounding
//! - [`units`] - Type-safe SI unit wrappers
//! - [`file_io`] - JSON input files
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod format;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DesignResult, FootingInput, FootingResult};
pub use equations::CheckStatus;
pub use errors::{CalcError, CalcResult};
pub use form::{DesignForm, FieldValue, FormField};
pub use materials::ConcreteGrade;
