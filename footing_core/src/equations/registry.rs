//! # Equation Registry
//!
//! Metadata for every formula in the footing design sequence: a name, the
//! plain-text formula, the code clause it comes from and its variables. The
//! CLI uses it to print a calculation trace next to the computed values.
//!
//! ## Usage
//!
//! ```rust
//! use footing_core::equations::registry::{Equation, CodeReference};
//!
//! let meta = Equation::EffectiveDepth.metadata();
//! assert_eq!(meta.formula_plain, "d = h - c - phi/2");
//! assert_eq!(meta.reference, CodeReference::Mechanics);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a design code clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// EN 1992-1-1 (Eurocode 2) design of concrete structures
    EN1992 { section: &'static str },
    /// Simplification specific to this calculator, no code clause
    Simplified,
    /// Geometry or unit bookkeeping
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::EN1992 { section } => format!("EN 1992-1-1 {}", section),
            CodeReference::Simplified => "Simplified method".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Grouping of equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Depths and perimeters
    Geometry,
    /// Flexural design and steel areas
    Bending,
    /// Shear capacity and demands
    Shear,
    /// SAFE/UNSAFE verdicts
    DesignChecks,
}

impl EquationCategory {
    /// Report order
    pub const ALL: [EquationCategory; 4] = [
        EquationCategory::Geometry,
        EquationCategory::Bending,
        EquationCategory::Shear,
        EquationCategory::DesignChecks,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::Bending => "Bending",
            EquationCategory::Shear => "Shear",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }
}

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "d", "fck")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variables introduced by this equation
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function implementing the equation in `equations::footing`
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation in the footing design sequence, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    EffectiveDepth,
    DesignCompressiveStrength,
    MomentPerMetre,
    NormalizedMoment,
    LeverArmFactor,
    RequiredSteelArea,
    SizeEffectFactor,
    ReinforcementRatio,
    ConcreteShearCapacity,
    WideBeamShearStress,
    PunchingPerimeter,
    PunchingShearStress,
    ShearVerdict,
}

/// All equations in evaluation order
pub const ALL_EQUATIONS: [Equation; 13] = [
    Equation::EffectiveDepth,
    Equation::DesignCompressiveStrength,
    Equation::MomentPerMetre,
    Equation::NormalizedMoment,
    Equation::LeverArmFactor,
    Equation::RequiredSteelArea,
    Equation::SizeEffectFactor,
    Equation::ReinforcementRatio,
    Equation::ConcreteShearCapacity,
    Equation::WideBeamShearStress,
    Equation::PunchingPerimeter,
    Equation::PunchingShearStress,
    Equation::ShearVerdict,
];

impl Equation {
    /// Equations of one category, in evaluation order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .into_iter()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                formula_plain: "d = h - c - phi/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("h", "Overall footing depth", "mm"),
                    Variable::new("c", "Concrete cover", "mm"),
                    Variable::new("phi", "Bar diameter", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                category: EquationCategory::Geometry,
                source_function: "effective_depth",
            },

            Equation::DesignCompressiveStrength => EquationMetadata {
                name: "Design Compressive Strength",
                formula_plain: "fcd = fck / 1.5",
                reference: CodeReference::EN1992 { section: "3.1.6" },
                variables: vec![
                    Variable::new("fck", "Characteristic cylinder strength", "MPa"),
                    Variable::new("fcd", "Design compressive strength", "MPa"),
                ],
                category: EquationCategory::Bending,
                source_function: "design_compressive_strength",
            },

            Equation::MomentPerMetre => EquationMetadata {
                name: "Moment per Metre",
                formula_plain: "msd = Msd / (L/1000)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Msd", "Design moment", "kNm"),
                    Variable::new("L", "Footing dimension carrying the moment", "mm"),
                    Variable::new("msd", "Moment per metre", "kNm/m"),
                ],
                category: EquationCategory::Bending,
                source_function: "moment_per_metre",
            },

            Equation::NormalizedMoment => EquationMetadata {
                name: "Normalized Moment",
                formula_plain: "mu = (msd * 1e6) / (fcd * 1000 * d^2)",
                reference: CodeReference::EN1992 { section: "6.1" },
                variables: vec![Variable::new("mu", "Normalized moment", "-")],
                category: EquationCategory::Bending,
                source_function: "normalized_moment",
            },

            Equation::LeverArmFactor => EquationMetadata {
                name: "Lever-Arm Factor",
                formula_plain: "kz = 0.976 if mu > 0.04, else 0.978",
                reference: CodeReference::Simplified,
                variables: vec![Variable::new("kz", "Lever-arm factor", "-")],
                category: EquationCategory::Bending,
                source_function: "lever_arm_factor",
            },

            Equation::RequiredSteelArea => EquationMetadata {
                name: "Required Steel Area",
                formula_plain: "As = (Msd * 1e6) / (0.87 * fyk * kz * d)",
                reference: CodeReference::EN1992 { section: "6.1" },
                variables: vec![
                    Variable::new("fyk", "Reinforcement yield strength", "MPa"),
                    Variable::new("As", "Required tension steel", "mm2"),
                ],
                category: EquationCategory::Bending,
                source_function: "required_steel_area",
            },

            Equation::SizeEffectFactor => EquationMetadata {
                name: "Size Effect Factor",
                formula_plain: "k = min(1 + sqrt(200/d), 2.0)",
                reference: CodeReference::EN1992 { section: "6.2.2(1)" },
                variables: vec![Variable::new("k", "Size effect factor", "-")],
                category: EquationCategory::Shear,
                source_function: "size_effect_factor",
            },

            Equation::ReinforcementRatio => EquationMetadata {
                name: "Reinforcement Ratio",
                formula_plain: "rho = min(AsX / (B * d), 0.02)",
                reference: CodeReference::EN1992 { section: "6.2.2(1)" },
                variables: vec![
                    Variable::new("B", "Footing width", "mm"),
                    Variable::new("rho", "Reinforcement ratio (from the X steel)", "-"),
                ],
                category: EquationCategory::Shear,
                source_function: "reinforcement_ratio",
            },

            Equation::ConcreteShearCapacity => EquationMetadata {
                name: "Concrete Shear Capacity",
                formula_plain: "vRd,c = 0.12 * k * (100 * rho * fck)^(1/3)",
                reference: CodeReference::EN1992 { section: "6.2.2(1)" },
                variables: vec![Variable::new("vRd,c", "Shear stress capacity", "MPa")],
                category: EquationCategory::Shear,
                source_function: "concrete_shear_capacity",
            },

            Equation::WideBeamShearStress => EquationMetadata {
                name: "Wide-Beam Shear Stress",
                formula_plain: "v = (Vsd * 1000) / (B * d)",
                reference: CodeReference::EN1992 { section: "6.2.2" },
                variables: vec![
                    Variable::new("Vsd", "Design shear", "kN"),
                    Variable::new("v", "Wide-beam shear stress", "MPa"),
                ],
                category: EquationCategory::Shear,
                source_function: "wide_beam_shear_stress",
            },

            Equation::PunchingPerimeter => EquationMetadata {
                name: "Punching Perimeter",
                formula_plain: "u1 = 2(a + b) + 2 * pi * (2d)",
                reference: CodeReference::EN1992 { section: "6.4.2" },
                variables: vec![
                    Variable::new("a, b", "Column dimensions", "mm"),
                    Variable::new("u1", "Critical perimeter at 2d", "mm"),
                ],
                category: EquationCategory::Geometry,
                source_function: "punching_perimeter",
            },

            Equation::PunchingShearStress => EquationMetadata {
                name: "Punching Shear Stress",
                formula_plain: "v = (Vsd * 1000) / (u1 * d)",
                reference: CodeReference::EN1992 { section: "6.4.3" },
                variables: vec![Variable::new("v", "Punching shear stress", "MPa")],
                category: EquationCategory::Shear,
                source_function: "punching_shear_stress",
            },

            Equation::ShearVerdict => EquationMetadata {
                name: "Shear Verdict",
                formula_plain: "SAFE if v < vRd,c, else UNSAFE",
                reference: CodeReference::Simplified,
                variables: vec![],
                category: EquationCategory::DesignChecks,
                source_function: "check_status",
            },
        }
    }
}

/// Render the equation reference as markdown, one section per category.
pub fn generate_equations_markdown() -> String {
    let mut md = String::new();

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();
            md.push_str(&format!("### {}\n\n", meta.name));
            md.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                md.push_str("| Symbol | Description | Units |\n|---|---|---|\n");
                for var in &meta.variables {
                    md.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                md.push('\n');
            }

            md.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            md.push_str(&format!("**Source:** `equations::footing::{}`\n\n", meta.source_function));
        }
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "{:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "{:?} has no formula", eq);
            assert!(!meta.source_function.is_empty(), "{:?} has no source", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let r = CodeReference::EN1992 { section: "6.4.2" };
        assert_eq!(r.citation(), "EN 1992-1-1 6.4.2");
        assert_eq!(CodeReference::Simplified.citation(), "Simplified method");
    }

    #[test]
    fn test_categories_cover_every_equation() {
        let total: usize = EquationCategory::ALL
            .iter()
            .map(|c| Equation::in_category(*c).len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
        assert_eq!(
            Equation::in_category(EquationCategory::Geometry),
            vec![Equation::EffectiveDepth, Equation::PunchingPerimeter]
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        assert!(md.contains("## Geometry\n\n### Effective Depth"));
        assert!(md.contains("## Design Checks"));
        assert!(md.contains("**Formula:** `kz = 0.976 if mu > 0.04, else 0.978`"));
        assert!(md.contains("| phi | Bar diameter | mm |"));
        assert!(md.contains("**Source:** `equations::footing::punching_shear_stress`"));
        assert_eq!(md.matches("### ").count(), ALL_EQUATIONS.len());
    }
}
