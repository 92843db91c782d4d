//! # Isolated Footing Design
//!
//! Bending reinforcement and shear checks for a square or rectangular pad
//! footing under a single column.
//!
//! ## Assumptions
//!
//! - One layer of bottom bars of diameter φ in each direction, both at the
//!   same effective depth
//! - Two-point lever-arm factor (0.978 / 0.976) instead of a continuous curve
//! - Shear capacity from the X-direction steel only, for both checks
//! - Punching perimeter at 2d from the column face with rounded corners
//! - No validation: degenerate inputs produce NaN/Infinity and UNSAFE verdicts
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use footing_core::calculations::footing::{calculate, FootingInput};
//! use footing_core::equations::CheckStatus;
//!
//! let input = FootingInput::default();
//! let result = calculate(&input);
//!
//! assert_eq!(result.d, 542.0);
//! assert_eq!(result.wide_beam_status, CheckStatus::Safe);
//!
//! let display = result.display();
//! assert_eq!(display.as_x, "1414.28");
//! assert_eq!(display.as_y, "1567.07");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::footing::{
    check_status, concrete_shear_capacity, design_compressive_strength, effective_depth,
    lever_arm_factor, moment_per_metre, normalized_moment, punching_perimeter,
    punching_shear_stress, reinforcement_ratio, required_steel_area, size_effect_factor,
    wide_beam_shear_stress, CheckStatus,
};
use crate::format::to_fixed;
use crate::materials::ConcreteGrade;

/// Input parameters for an isolated footing.
///
/// All dimensions in mm, moments in kN·m, forces in kN, strengths in MPa.
/// Fields missing from JSON take the values of [`FootingInput::default`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "fck": 25,
///   "msdx": 326.11,
///   "msdy": 361.34,
///   "b": 2300,
///   "l": 2300,
///   "totalH": 600,
///   "cover": 50,
///   "phi": 16,
///   "fyk": 500,
///   "vsd": 50,
///   "col_a": 400,
///   "col_b": 400
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootingInput {
    /// Concrete strength class (serialized as fck in MPa)
    pub fck: ConcreteGrade,

    /// Design moment about the X axis (kN·m)
    pub msdx: f64,

    /// Design moment about the Y axis (kN·m)
    pub msdy: f64,

    /// Footing plan width B (mm)
    pub b: f64,

    /// Footing plan length L (mm)
    pub l: f64,

    /// Overall footing depth H (mm)
    #[serde(rename = "totalH")]
    pub total_h: f64,

    /// Concrete cover to the reinforcement (mm)
    pub cover: f64,

    /// Assumed bar diameter (mm)
    pub phi: f64,

    /// Reinforcement characteristic yield strength (MPa)
    pub fyk: f64,

    /// Design shear force (kN)
    pub vsd: f64,

    /// Column dimension a (mm)
    pub col_a: f64,

    /// Column dimension b (mm)
    pub col_b: f64,
}

impl Default for FootingInput {
    fn default() -> Self {
        FootingInput {
            fck: ConcreteGrade::C25,
            msdx: 326.11,
            msdy: 361.34,
            b: 2300.0,
            l: 2300.0,
            total_h: 600.0,
            cover: 50.0,
            phi: 16.0,
            fyk: 500.0,
            vsd: 50.0,
            col_a: 400.0,
            col_b: 400.0,
        }
    }
}

impl FootingInput {
    /// Advisory plausibility checks.
    ///
    /// These never block [`calculate`]; they describe inputs that will give
    /// physically meaningless output so a host can point them out.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let numeric = [
            ("msdx", self.msdx),
            ("msdy", self.msdy),
            ("b", self.b),
            ("l", self.l),
            ("totalH", self.total_h),
            ("cover", self.cover),
            ("phi", self.phi),
            ("fyk", self.fyk),
            ("vsd", self.vsd),
            ("col_a", self.col_a),
            ("col_b", self.col_b),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                warnings.push(format!("{} is not a finite number", name));
            } else if value < 0.0 {
                warnings.push(format!("{} is negative ({})", name, value));
            }
        }

        for (name, value) in [("b", self.b), ("l", self.l), ("totalH", self.total_h), ("fyk", self.fyk)] {
            if value == 0.0 {
                warnings.push(format!("{} is zero", name));
            }
        }

        let d = self.effective_depth();
        if d <= 0.0 {
            warnings.push(format!(
                "Effective depth d = {} mm is not positive (cover and bar exceed the depth)",
                to_fixed(d, 1)
            ));
        }

        warnings
    }

    /// Effective depth d = H - cover - φ/2 (mm)
    pub fn effective_depth(&self) -> f64 {
        effective_depth(self.total_h, self.cover, self.phi)
    }
}

/// Full numeric results, including every intermediate quantity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "d": 542.0,
///   "fcd": 16.67,
///   "as_x": 1414.28,
///   "as_y": 1567.07,
///   "vrd_c": 0.273,
///   "v_wide_beam": 0.0401,
///   "v_punching": 0.0110,
///   "wide_beam_status": "SAFE",
///   "punching_status": "SAFE"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    /// Effective depth (mm)
    pub d: f64,

    /// Design compressive strength fck/1.5 (MPa)
    pub fcd: f64,

    /// X-direction moment per metre of L (kN·m/m)
    pub msd_x_per_m: f64,

    /// Y-direction moment per metre of B (kN·m/m)
    pub msd_y_per_m: f64,

    /// X-direction normalized moment
    pub msd_norm_x: f64,

    /// Y-direction normalized moment
    pub msd_norm_y: f64,

    /// X-direction lever-arm factor
    pub kz_x: f64,

    /// Y-direction lever-arm factor
    pub kz_y: f64,

    /// Required steel area, X direction (mm²)
    pub as_x: f64,

    /// Required steel area, Y direction (mm²)
    pub as_y: f64,

    /// Size effect factor
    pub k: f64,

    /// Reinforcement ratio, from `as_x`, capped at 0.02
    pub rho: f64,

    /// Concrete shear stress capacity (MPa)
    pub vrd_c: f64,

    /// Wide-beam shear stress demand (MPa)
    pub v_wide_beam: f64,

    /// Critical punching perimeter (mm)
    pub u1: f64,

    /// Punching shear stress demand (MPa)
    pub v_punching: f64,

    /// Wide-beam shear verdict
    pub wide_beam_status: CheckStatus,

    /// Punching shear verdict
    pub punching_status: CheckStatus,
}

impl FootingResult {
    /// Check if both shear checks pass
    pub fn passes(&self) -> bool {
        self.wide_beam_status.is_safe() && self.punching_status.is_safe()
    }

    /// Demand over capacity for wide-beam shear
    pub fn wide_beam_unity(&self) -> f64 {
        self.v_wide_beam / self.vrd_c
    }

    /// Demand over capacity for punching shear
    pub fn punching_unity(&self) -> f64 {
        self.v_punching / self.vrd_c
    }

    /// Get the name of the governing shear check
    pub fn governing_condition(&self) -> &'static str {
        if self.v_punching > self.v_wide_beam {
            "Punching Shear"
        } else {
            "Wide Beam Shear"
        }
    }

    /// Project onto the rounded display record
    pub fn display(&self) -> DesignResult {
        DesignResult {
            d: to_fixed(self.d, 0),
            as_x: to_fixed(self.as_x, 2),
            as_y: to_fixed(self.as_y, 2),
            wide_beam_status: self.wide_beam_status,
            punching_status: self.punching_status,
        }
    }
}

/// The display record: exactly what the form shows.
///
/// `d` is rounded to whole millimetres, steel areas to two decimals.
/// Non-finite values appear as `NaN` / `Infinity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Effective depth (mm), 0 decimals
    pub d: String,

    /// Required steel, X direction (mm²), 2 decimals
    pub as_x: String,

    /// Required steel, Y direction (mm²), 2 decimals
    pub as_y: String,

    /// "SAFE" or "UNSAFE"
    pub wide_beam_status: CheckStatus,

    /// "SAFE" or "UNSAFE"
    pub punching_status: CheckStatus,
}

/// Run the footing design.
///
/// Pure and infallible. Identical inputs give bit-identical results; no input
/// is range-checked (see [`FootingInput::warnings`] for advisory checks).
///
/// # Arguments
///
/// * `input` - Footing parameters
///
/// # Returns
///
/// Every intermediate quantity and both shear verdicts.
pub fn calculate(input: &FootingInput) -> FootingResult {
    let fck = input.fck.fck();

    let d = input.effective_depth();
    let fcd = design_compressive_strength(fck);

    // X bending spreads over L, Y bending over B
    let msd_x_per_m = moment_per_metre(input.msdx, input.l);
    let msd_norm_x = normalized_moment(msd_x_per_m, fcd, d);
    let kz_x = lever_arm_factor(msd_norm_x);
    let as_x = required_steel_area(input.msdx, input.fyk, kz_x, d);

    let msd_y_per_m = moment_per_metre(input.msdy, input.b);
    let msd_norm_y = normalized_moment(msd_y_per_m, fcd, d);
    let kz_y = lever_arm_factor(msd_norm_y);
    let as_y = required_steel_area(input.msdy, input.fyk, kz_y, d);

    // Single capacity baseline for both checks, from the X steel
    let k = size_effect_factor(d);
    let rho = reinforcement_ratio(as_x, input.b, d);
    let vrd_c = concrete_shear_capacity(k, rho, fck);

    let v_wide_beam = wide_beam_shear_stress(input.vsd, input.b, d);
    let u1 = punching_perimeter(input.col_a, input.col_b, d);
    let v_punching = punching_shear_stress(input.vsd, u1, d);

    let wide_beam_status = check_status(v_wide_beam, vrd_c);
    let punching_status = check_status(v_punching, vrd_c);

    tracing::debug!(
        d,
        kz_x,
        kz_y,
        as_x,
        as_y,
        vrd_c,
        v_wide_beam,
        v_punching,
        wide_beam = %wide_beam_status,
        punching = %punching_status,
        "footing design computed"
    );

    FootingResult {
        d,
        fcd,
        msd_x_per_m,
        msd_y_per_m,
        msd_norm_x,
        msd_norm_y,
        kz_x,
        kz_y,
        as_x,
        as_y,
        k,
        rho,
        vrd_c,
        v_wide_beam,
        u1,
        v_punching,
        wide_beam_status,
        punching_status,
    }
}
