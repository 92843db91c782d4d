//! # Materials
//!
//! Material vocabulary for reinforced concrete footings.
//!
//! - **Concrete**: the eight strength classes C16/20 .. C50/60 offered by the
//!   grade selector, with their design strengths
//! - **Reinforcement**: the characteristic yield strength `fyk` is a free
//!   numeric input, so only the partial factor lives here
//!
//! ## Example
//!
//! ```rust
//! use footing_core::materials::ConcreteGrade;
//!
//! let grade = ConcreteGrade::from_str_flexible("C30/37").unwrap();
//! println!("{}: fcd = {:.2} MPa", grade, grade.design_strength().0);
//! ```

pub mod concrete;

pub use concrete::{ConcreteGrade, ALPHA_CC, GAMMA_C};

/// Reinforcement stress factor in the steel-area formula, 1/γs ≈ 0.87
pub const STEEL_STRESS_FACTOR: f64 = 0.87;
