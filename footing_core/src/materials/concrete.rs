//! Concrete Strength Classes (EN 1992-1-1 Table 3.1)
//!
//! The footing calculator only accepts the eight strength classes offered by
//! the grade selector, C16/20 through C50/60. A class is identified by its
//! characteristic cylinder strength `fck`, which is also how it serializes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::MegaPascals;

/// Partial safety factor for concrete, γc
pub const GAMMA_C: f64 = 1.5;

/// Long-term coefficient αcc shown in the informational design strength
pub const ALPHA_CC: f64 = 0.85;

/// Concrete strength class.
///
/// ## JSON
///
/// Serializes as the bare `fck` value in MPa:
///
/// ```rust
/// use footing_core::materials::ConcreteGrade;
///
/// let json = serde_json::to_string(&ConcreteGrade::C25).unwrap();
/// assert_eq!(json, "25.0");
///
/// let grade: ConcreteGrade = serde_json::from_str("30").unwrap();
/// assert_eq!(grade, ConcreteGrade::C30);
///
/// assert!(serde_json::from_str::<ConcreteGrade>("22").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ConcreteGrade {
    /// C16/20
    C16,
    /// C20/25
    C20,
    /// C25/30
    #[default]
    C25,
    /// C30/37
    C30,
    /// C35/45
    C35,
    /// C40/50
    C40,
    /// C45/55
    C45,
    /// C50/60
    C50,
}

impl ConcreteGrade {
    /// All strength classes in selector order
    pub const ALL: [ConcreteGrade; 8] = [
        ConcreteGrade::C16,
        ConcreteGrade::C20,
        ConcreteGrade::C25,
        ConcreteGrade::C30,
        ConcreteGrade::C35,
        ConcreteGrade::C40,
        ConcreteGrade::C45,
        ConcreteGrade::C50,
    ];

    /// Characteristic cylinder strength fck (MPa)
    pub fn fck(&self) -> f64 {
        match self {
            ConcreteGrade::C16 => 16.0,
            ConcreteGrade::C20 => 20.0,
            ConcreteGrade::C25 => 25.0,
            ConcreteGrade::C30 => 30.0,
            ConcreteGrade::C35 => 35.0,
            ConcreteGrade::C40 => 40.0,
            ConcreteGrade::C45 => 45.0,
            ConcreteGrade::C50 => 50.0,
        }
    }

    /// Characteristic cube strength (MPa), the second half of the class name
    pub fn fck_cube(&self) -> f64 {
        match self {
            ConcreteGrade::C16 => 20.0,
            ConcreteGrade::C20 => 25.0,
            ConcreteGrade::C25 => 30.0,
            ConcreteGrade::C30 => 37.0,
            ConcreteGrade::C35 => 45.0,
            ConcreteGrade::C40 => 50.0,
            ConcreteGrade::C45 => 55.0,
            ConcreteGrade::C50 => 60.0,
        }
    }

    /// Look up a class by its exact fck value
    pub fn from_fck(fck: f64) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.fck() == fck)
            .ok_or_else(|| CalcError::unknown_grade(fck.to_string()))
    }

    /// Parse from common string representations ("25", "C25", "c25/30")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace(' ', "");
        let cylinder = normalized
            .strip_prefix('C')
            .unwrap_or(&normalized)
            .split('/')
            .next()
            .unwrap_or_default();

        let fck: f64 = cylinder
            .parse()
            .map_err(|_| CalcError::unknown_grade(s))?;
        let grade = Self::from_fck(fck).map_err(|_| CalcError::unknown_grade(s))?;

        // A cube strength, when given, has to agree with the class
        if let Some(cube) = normalized.split('/').nth(1) {
            if cube.parse::<f64>().ok() != Some(grade.fck_cube()) {
                return Err(CalcError::unknown_grade(s));
            }
        }
        Ok(grade)
    }

    /// Get display name (e.g., "C25/30")
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteGrade::C16 => "C16/20",
            ConcreteGrade::C20 => "C20/25",
            ConcreteGrade::C25 => "C25/30",
            ConcreteGrade::C30 => "C30/37",
            ConcreteGrade::C35 => "C35/45",
            ConcreteGrade::C40 => "C40/50",
            ConcreteGrade::C45 => "C45/55",
            ConcreteGrade::C50 => "C50/60",
        }
    }

    /// Design compressive strength used by the calculation, fcd = fck / γc
    pub fn design_strength(&self) -> MegaPascals {
        MegaPascals(self.fck() / GAMMA_C)
    }

    /// Design compressive strength including αcc, fcd = 0.85 fck / γc.
    ///
    /// This is the informational value shown next to the grade selector; the
    /// bending and shear formulas use [`ConcreteGrade::design_strength`].
    pub fn design_strength_with_alpha(&self) -> MegaPascals {
        MegaPascals(self.fck() * ALPHA_CC / GAMMA_C)
    }

    /// The next class up, wrapping to the lowest
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|g| g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The next class down, wrapping to the highest
    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|g| g == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<f64> for ConcreteGrade {
    type Error = CalcError;

    fn try_from(fck: f64) -> Result<Self, Self::Error> {
        Self::from_fck(fck)
    }
}

impl From<ConcreteGrade> for f64 {
    fn from(grade: ConcreteGrade) -> Self {
        grade.fck()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fck_values() {
        let values: Vec<f64> = ConcreteGrade::ALL.iter().map(|g| g.fck()).collect();
        assert_eq!(values, vec![16.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0]);
    }

    #[test]
    fn test_from_fck() {
        assert_eq!(ConcreteGrade::from_fck(40.0).unwrap(), ConcreteGrade::C40);
        assert!(ConcreteGrade::from_fck(22.0).is_err());
        assert!(ConcreteGrade::from_fck(f64::NAN).is_err());
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!(ConcreteGrade::from_str_flexible("25").unwrap(), ConcreteGrade::C25);
        assert_eq!(ConcreteGrade::from_str_flexible("C30").unwrap(), ConcreteGrade::C30);
        assert_eq!(ConcreteGrade::from_str_flexible("c35/45").unwrap(), ConcreteGrade::C35);
        assert!(ConcreteGrade::from_str_flexible("C35/50").is_err());
        assert!(ConcreteGrade::from_str_flexible("C60").is_err());
        assert!(ConcreteGrade::from_str_flexible("strong").is_err());
    }

    #[test]
    fn test_design_strengths() {
        assert_relative_eq!(ConcreteGrade::C25.design_strength().0, 16.666_666_666_666_668, epsilon = 1e-12);
        assert_relative_eq!(ConcreteGrade::C25.design_strength_with_alpha().0, 14.166_666_666_666_666, epsilon = 1e-12);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(ConcreteGrade::C50.next(), ConcreteGrade::C16);
        assert_eq!(ConcreteGrade::C16.previous(), ConcreteGrade::C50);
        assert_eq!(ConcreteGrade::C25.next(), ConcreteGrade::C30);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConcreteGrade::C45.to_string(), "C45/55");
    }
}
