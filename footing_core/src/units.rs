//! # Unit Types
//!
//! Type-safe wrappers for the SI quantities used in footing design. These are
//! plain f64 newtypes: they serialize as bare numbers and carry no runtime cost.
//!
//! ## Unit System
//!
//! Inputs follow the conventions of the design method:
//! - Length: millimetres (mm); the per-metre moment uses metres (m)
//! - Force: kilonewtons (kN), converted to newtons (N) for stresses
//! - Moment: kilonewton-metres (kN·m), converted to newton-millimetres (N·mm)
//! - Stress: megapascals (MPa = N/mm²)
//!
//! The conversions below are exactly the scale factors the formulas use
//! (`/1000`, `*1000`, `*1e6`), so going through them does not change any
//! floating-point result.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::units::{KiloNewtonMeters, Meters, Millimeters, NewtonMillimeters};
//!
//! let l: Meters = Millimeters(2300.0).into();
//! assert_eq!(l.0, 2.3);
//!
//! let m: NewtonMillimeters = KiloNewtonMeters(1.5).into();
//! assert_eq!(m.0, 1.5e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1_000_000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(MegaPascals);
