//! # Footing Design Equations
//!
//! All formulas used by the footing calculation live here, one function per
//! step, so they can be checked against the design code one at a time.
//!
//! ## Modules
//!
//! - [`footing`] - Bending and shear formulas for an isolated pad footing
//! - [`registry`] - Equation metadata for calculation traces
//!
//! ## Sign Conventions
//!
//! - **Moments**: positive causes tension on the bottom face (soil side)
//! - **Shear**: design shear `V_sd` is taken as a positive magnitude
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Eurocode 2: Design of concrete structures

pub mod footing;
pub mod registry;

pub use footing::{
    check_status,
    concrete_shear_capacity,
    design_compressive_strength,
    effective_depth,
    lever_arm_factor,
    moment_per_metre,
    nan_min,
    normalized_moment,
    punching_perimeter,
    punching_shear_stress,
    reinforcement_ratio,
    required_steel_area,
    size_effect_factor,
    wide_beam_shear_stress,
    CheckStatus,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
