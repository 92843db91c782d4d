//! # Isolated Footing Formulas
//!
//! Closed-form expressions for the bending and shear design of a pad footing
//! under a single column, in the simplified limit-state form used by the
//! calculator. Each function is one step of the design sequence; see
//! [`crate::calculations::footing::calculate`] for the order.
//!
//! ## Notation
//!
//! - `h` = Overall footing depth (mm)
//! - `c` = Concrete cover (mm)
//! - `φ` = Bar diameter (mm)
//! - `d` = Effective depth (mm)
//! - `B`, `L` = Footing plan width and length (mm)
//! - `M_sd` = Design moment (kN·m)
//! - `V_sd` = Design shear (kN)
//! - `a`, `b` = Column cross-section (mm)
//!
//! Stresses come out in MPa (N/mm²) because lengths are in mm and forces are
//! scaled to N.
//!
//! ## Floating-Point Behaviour
//!
//! None of these functions guard their domain. Zero or negative dimensions
//! yield NaN or ±Infinity, and those values flow through the rest of the
//! sequence unchanged. [`nan_min`] exists so that the two capped quantities
//! (`k` and `ρ`) keep a NaN instead of silently snapping to the cap.
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Section 6.1: Bending with or without axial force
//! - EN 1992-1-1:2004 Section 6.2.2: Members not requiring shear reinforcement
//! - EN 1992-1-1:2004 Section 6.4: Punching

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::materials::{GAMMA_C, STEEL_STRESS_FACTOR};
use crate::units::{KiloNewtonMeters, KiloNewtons, Meters, Millimeters, NewtonMillimeters, Newtons};

/// Normalized moment above which the lower lever-arm factor applies
pub const KZ_THRESHOLD: f64 = 0.04;

/// Lever-arm factor for lightly loaded sections (μ ≤ 0.04)
pub const KZ_LOW_MOMENT: f64 = 0.978;

/// Lever-arm factor for μ > 0.04
pub const KZ_HIGH_MOMENT: f64 = 0.976;

/// Upper bound on the size effect factor k
pub const K_MAX: f64 = 2.0;

/// Upper bound on the reinforcement ratio ρ used for shear capacity
pub const RHO_MAX: f64 = 0.02;

/// Shear capacity coefficient C_Rd,c = 0.18/γc
pub const C_RD_C: f64 = 0.12;

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Minimum of two values that propagates NaN.
///
/// `f64::min` returns the non-NaN operand, which would turn a degenerate
/// `k = min(NaN, 2.0)` into a finite 2.0. Here any NaN operand yields NaN.
///
/// # Example
/// ```rust
/// use footing_core::equations::footing::nan_min;
///
/// assert_eq!(nan_min(3.0, 2.0), 2.0);
/// assert!(nan_min(f64::NAN, 2.0).is_nan());
/// ```
#[inline]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Effective depth to the centroid of the bottom bar layer
///
/// ```text
///   ┌───────────────────────┐  ─┬─
///   │                       │   │        ─┬─
///   │                       │   h         d
///   │   ●   ●   ●   ●   ●   │   │        ─┴─ (bar centroid)
///   └───────────────────────┘  ─┴─  c + φ/2
/// ```
///
/// # Formula
/// d = h - c - φ/2
///
/// # Example
/// ```rust
/// use footing_core::equations::footing::effective_depth;
///
/// assert_eq!(effective_depth(600.0, 50.0, 16.0), 542.0);
/// ```
#[inline]
pub fn effective_depth(total_h: f64, cover: f64, phi: f64) -> f64 {
    (Millimeters(total_h) - Millimeters(cover) - Millimeters(phi) / 2.0).value()
}

/// Critical punching perimeter at 2d from the column face
///
/// Rectangle around the column with rounded corners of radius 2d.
///
/// # Formula
/// u₁ = 2(a + b) + 2π(2d)
#[inline]
pub fn punching_perimeter(col_a: f64, col_b: f64, d: f64) -> f64 {
    2.0 * (col_a + col_b) + 2.0 * PI * (2.0 * d)
}

// =============================================================================
// BENDING
// =============================================================================

/// Design compressive strength of concrete
///
/// # Formula
/// f_cd = f_ck / γc, with γc = 1.5
#[inline]
pub fn design_compressive_strength(fck: f64) -> f64 {
    fck / GAMMA_C
}

/// Design moment per metre of footing width (kN·m/m)
///
/// # Formula
/// m_sd = M_sd / (L / 1000)
///
/// # Arguments
/// * `msd` - Total design moment (kN·m)
/// * `width_mm` - Footing dimension the moment is spread over (mm)
#[inline]
pub fn moment_per_metre(msd: f64, width_mm: f64) -> f64 {
    let width: Meters = Millimeters(width_mm).into();
    msd / width.value()
}

/// Dimensionless normalized moment
///
/// # Formula
/// μ = (m_sd · 10⁶) / (f_cd · 1000 · d²)
///
/// The numerator is the moment per metre in N·mm; the denominator is the
/// capacity scale of a 1000 mm strip of depth d.
#[inline]
pub fn normalized_moment(moment_per_m: f64, fcd: f64, d: f64) -> f64 {
    let m: NewtonMillimeters = KiloNewtonMeters(moment_per_m).into();
    m.value() / (fcd * 1000.0 * d.powi(2))
}

/// Lever-arm factor k_z
///
/// Two-point step, not a continuous curve:
///
/// | μ          | k_z   |
/// |------------|-------|
/// | μ ≤ 0.04   | 0.978 |
/// | μ > 0.04   | 0.976 |
///
/// A NaN μ compares false and therefore selects 0.978.
///
/// # Example
/// ```rust
/// use footing_core::equations::footing::lever_arm_factor;
///
/// assert_eq!(lever_arm_factor(0.04), 0.978);
/// assert_eq!(lever_arm_factor(0.05), 0.976);
/// ```
#[inline]
pub fn lever_arm_factor(normalized_moment: f64) -> f64 {
    if normalized_moment > KZ_THRESHOLD {
        KZ_HIGH_MOMENT
    } else {
        KZ_LOW_MOMENT
    }
}

/// Required tension reinforcement area (mm²)
///
/// # Formula
/// A_s = (M_sd · 10⁶) / (0.87 · f_yk · k_z · d)
#[inline]
pub fn required_steel_area(msd: f64, fyk: f64, kz: f64, d: f64) -> f64 {
    let m: NewtonMillimeters = KiloNewtonMeters(msd).into();
    m.value() / (STEEL_STRESS_FACTOR * fyk * kz * d)
}

// =============================================================================
// SHEAR
// =============================================================================

/// Size effect factor
///
/// # Formula
/// k = min(1 + √(200/d), 2.0)
#[inline]
pub fn size_effect_factor(d: f64) -> f64 {
    nan_min(1.0 + (200.0 / d).sqrt(), K_MAX)
}

/// Longitudinal reinforcement ratio, capped at 0.02
///
/// # Formula
/// ρ = min(A_s / (B · d), 0.02)
#[inline]
pub fn reinforcement_ratio(steel_area: f64, width: f64, d: f64) -> f64 {
    nan_min(steel_area / (width * d), RHO_MAX)
}

/// Concrete shear stress capacity without shear reinforcement (MPa)
///
/// # Formula
/// v_Rd,c = 0.12 · k · (100 · ρ · f_ck)^(1/3)
///
/// Uses `powf(1/3)`, so a negative base gives NaN rather than a real cube root.
#[inline]
pub fn concrete_shear_capacity(k: f64, rho: f64, fck: f64) -> f64 {
    C_RD_C * k * (100.0 * rho * fck).powf(1.0 / 3.0)
}

/// Wide-beam (one-way) shear stress demand (MPa)
///
/// # Formula
/// v = (V_sd · 1000) / (B · d)
#[inline]
pub fn wide_beam_shear_stress(vsd: f64, width: f64, d: f64) -> f64 {
    let v: Newtons = KiloNewtons(vsd).into();
    v.value() / (width * d)
}

/// Punching (two-way) shear stress demand on the critical perimeter (MPa)
///
/// # Formula
/// v = (V_sd · 1000) / (u₁ · d)
#[inline]
pub fn punching_shear_stress(vsd: f64, perimeter: f64, d: f64) -> f64 {
    let v: Newtons = KiloNewtons(vsd).into();
    v.value() / (perimeter * d)
}

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of a shear check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Safe,
    Unsafe,
}

impl CheckStatus {
    /// The display string, exactly "SAFE" or "UNSAFE"
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Safe => "SAFE",
            CheckStatus::Unsafe => "UNSAFE",
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, CheckStatus::Safe)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Compare a shear demand against the capacity.
///
/// Strictly less than is SAFE; equality and any NaN operand are UNSAFE.
///
/// # Example
/// ```rust
/// use footing_core::equations::footing::{check_status, CheckStatus};
///
/// assert_eq!(check_status(0.2, 0.3), CheckStatus::Safe);
/// assert_eq!(check_status(0.3, 0.3), CheckStatus::Unsafe);
/// assert_eq!(check_status(0.2, f64::NAN), CheckStatus::Unsafe);
/// ```
#[inline]
pub fn check_status(demand: f64, capacity: f64) -> CheckStatus {
    if demand < capacity {
        CheckStatus::Safe
    } else {
        CheckStatus::Unsafe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_depth() {
        assert_eq!(effective_depth(600.0, 50.0, 16.0), 542.0);
        assert_eq!(effective_depth(600.0, 50.0, 15.0), 542.5);
        assert_eq!(effective_depth(0.0, 50.0, 16.0), -58.0);
    }

    #[test]
    fn test_moment_per_metre() {
        // 326.11 kN·m over 2.3 m
        assert_relative_eq!(moment_per_metre(326.11, 2300.0), 141.786_956_521_739_1, epsilon = 1e-9);
        assert!(moment_per_metre(326.11, 0.0).is_infinite());
    }

    #[test]
    fn test_normalized_moment() {
        let fcd = design_compressive_strength(25.0);
        let mu = normalized_moment(moment_per_metre(326.11, 2300.0), fcd, 542.0);
        assert_relative_eq!(mu, 0.028_959_359_864_736, epsilon = 1e-12);
    }

    #[test]
    fn test_lever_arm_factor_boundary() {
        assert_eq!(lever_arm_factor(0.0), KZ_LOW_MOMENT);
        assert_eq!(lever_arm_factor(0.039_999), KZ_LOW_MOMENT);
        assert_eq!(lever_arm_factor(0.04), KZ_LOW_MOMENT);
        assert_eq!(lever_arm_factor(0.040_000_1), KZ_HIGH_MOMENT);
        assert_eq!(lever_arm_factor(0.5), KZ_HIGH_MOMENT);
        assert_eq!(lever_arm_factor(f64::NAN), KZ_LOW_MOMENT);
    }

    #[test]
    fn test_required_steel_area() {
        // 326.11e6 / (0.87 * 500 * 0.978 * 542)
        let as_x = required_steel_area(326.11, 500.0, 0.978, 542.0);
        assert_relative_eq!(as_x, 1414.284_293_043_903, epsilon = 1e-8);
    }

    #[test]
    fn test_size_effect_factor() {
        assert_relative_eq!(size_effect_factor(542.0), 1.607_456_739_230_787, epsilon = 1e-12);
        // Shallow sections hit the cap
        assert_eq!(size_effect_factor(150.0), K_MAX);
        assert_eq!(size_effect_factor(200.0), K_MAX);
        // Negative depth: sqrt of a negative ratio
        assert!(size_effect_factor(-58.0).is_nan());
    }

    #[test]
    fn test_reinforcement_ratio_cap() {
        assert_relative_eq!(reinforcement_ratio(1414.284_293_043_903, 2300.0, 542.0), 0.001_134_513_310_640, epsilon = 1e-12);
        assert_eq!(reinforcement_ratio(1.0e6, 1000.0, 100.0), RHO_MAX);
        assert!(reinforcement_ratio(f64::NAN, 1000.0, 100.0).is_nan());
    }

    #[test]
    fn test_concrete_shear_capacity() {
        let v = concrete_shear_capacity(1.607_456_739_230_787, 0.001_134_513_310_640_063_8, 25.0);
        assert_relative_eq!(v, 0.273_046_789_588_658, epsilon = 1e-12);
        assert!(concrete_shear_capacity(1.5, -0.001, 25.0).is_nan());
    }

    #[test]
    fn test_shear_demands() {
        assert_relative_eq!(wide_beam_shear_stress(50.0, 2300.0, 542.0), 0.040_109_096_743_141, epsilon = 1e-12);
        let u1 = punching_perimeter(400.0, 400.0, 542.0);
        assert_relative_eq!(u1, 8410.972_872_982_671, epsilon = 1e-9);
        assert_relative_eq!(punching_shear_stress(50.0, u1, 542.0), 0.010_967_925_340_188, epsilon = 1e-12);
    }

    #[test]
    fn test_check_status_strict() {
        assert_eq!(check_status(0.1, 0.2), CheckStatus::Safe);
        assert_eq!(check_status(0.2, 0.2), CheckStatus::Unsafe);
        assert_eq!(check_status(0.3, 0.2), CheckStatus::Unsafe);
        assert_eq!(check_status(f64::NAN, 0.2), CheckStatus::Unsafe);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&CheckStatus::Safe).unwrap(), "\"SAFE\"");
        assert_eq!(serde_json::to_string(&CheckStatus::Unsafe).unwrap(), "\"UNSAFE\"");
        assert_eq!(CheckStatus::Unsafe.to_string(), "UNSAFE");
    }
}
