//! Text and JSON renderings of a footing design.

use serde_json::json;

use footing_core::equations::registry::Equation;
use footing_core::format::to_fixed;
use footing_core::{CheckStatus, ConcreteGrade, FootingInput, FootingResult};

const RULE: &str = "═══════════════════════════════════════════════";

fn status_icon(status: CheckStatus) -> &'static str {
    if status.is_safe() { "[OK]" } else { "[FAIL]" }
}

/// Human-readable report of one design.
pub fn render_text(input: &FootingInput, result: &FootingResult, trace: bool, date: &str) -> String {
    let display = result.display();
    let mut out = String::new();

    out.push_str(&format!("{}\n  ISOLATED FOUNDATION DESIGN    {}\n{}\n\n", RULE, date, RULE));

    out.push_str("Input:\n");
    out.push_str(&format!(
        "  Concrete:  {} (fck = {} MPa, fcd = {} MPa)\n",
        input.fck,
        input.fck.fck(),
        to_fixed(input.fck.design_strength_with_alpha().0, 2)
    ));
    out.push_str(&format!("  Moments:   Msdx = {} kNm, Msdy = {} kNm\n", input.msdx, input.msdy));
    out.push_str(&format!(
        "  Footing:   B = {} mm, L = {} mm, H = {} mm\n",
        input.b, input.l, input.total_h
    ));
    out.push_str(&format!(
        "  Steel:     cover = {} mm, phi = {} mm, fyk = {} MPa\n",
        input.cover, input.phi, input.fyk
    ));
    out.push_str(&format!(
        "  Column:    {} x {} mm, Vsd = {} kN\n\n",
        input.col_a, input.col_b, input.vsd
    ));

    out.push_str("Results:\n");
    out.push_str(&format!("  Effective Depth (d):  {} mm\n", display.d));
    out.push_str(&format!("  As (X-Direction):     {} mm²\n", display.as_x));
    out.push_str(&format!("  As (Y-Direction):     {} mm²\n\n", display.as_y));

    out.push_str("Safety Checks:\n");
    out.push_str(&format!(
        "  Wide Beam Shear:  {:<6} {:<6} v/vRd,c = {}\n",
        display.wide_beam_status,
        status_icon(display.wide_beam_status),
        to_fixed(result.wide_beam_unity(), 3)
    ));
    out.push_str(&format!(
        "  Punching Shear:   {:<6} {:<6} v/vRd,c = {}\n",
        display.punching_status,
        status_icon(display.punching_status),
        to_fixed(result.punching_unity(), 3)
    ));

    if trace {
        out.push_str("\nCalculation Trace:\n");
        for (equation, value) in trace_rows(result) {
            let meta = equation.metadata();
            out.push_str(&format!(
                "  {:<28} {:<44} {}\n",
                meta.name, meta.formula_plain, value
            ));
        }
    }

    out.push_str(&format!(
        "\n{}\n  RESULT: {} (governs: {})\n{}\n",
        RULE,
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition(),
        RULE
    ));
    out
}

/// Computed value of each equation, in evaluation order.
pub fn trace_rows(result: &FootingResult) -> Vec<(Equation, String)> {
    let n = |value: f64| to_fixed(value, 4);
    vec![
        (Equation::EffectiveDepth, format!("d = {} mm", n(result.d))),
        (Equation::DesignCompressiveStrength, format!("fcd = {} MPa", n(result.fcd))),
        (
            Equation::MomentPerMetre,
            format!("X: {}  Y: {} kNm/m", n(result.msd_x_per_m), n(result.msd_y_per_m)),
        ),
        (
            Equation::NormalizedMoment,
            format!("X: {}  Y: {}", to_fixed(result.msd_norm_x, 5), to_fixed(result.msd_norm_y, 5)),
        ),
        (
            Equation::LeverArmFactor,
            format!("X: {}  Y: {}", to_fixed(result.kz_x, 3), to_fixed(result.kz_y, 3)),
        ),
        (
            Equation::RequiredSteelArea,
            format!("X: {}  Y: {} mm²", n(result.as_x), n(result.as_y)),
        ),
        (Equation::SizeEffectFactor, format!("k = {}", n(result.k))),
        (Equation::ReinforcementRatio, format!("rho = {}", to_fixed(result.rho, 6))),
        (Equation::ConcreteShearCapacity, format!("vRd,c = {} MPa", n(result.vrd_c))),
        (Equation::WideBeamShearStress, format!("v = {} MPa", n(result.v_wide_beam))),
        (Equation::PunchingPerimeter, format!("u1 = {} mm", n(result.u1))),
        (Equation::PunchingShearStress, format!("v = {} MPa", n(result.v_punching))),
        (
            Equation::ShearVerdict,
            format!("wide beam {}, punching {}", result.wide_beam_status, result.punching_status),
        ),
    ]
}

/// JSON document with the input, the numeric result and the display record.
pub fn render_json(input: &FootingInput, result: &FootingResult) -> serde_json::Value {
    json!({
        "input": input,
        "result": result,
        "display": result.display(),
    })
}

/// Table of the concrete strength classes.
pub fn render_grades() -> String {
    let mut out = format!("{:<8} {:>9} {:>14} {:>20}\n", "Class", "fck [MPa]", "fck/1.5 [MPa]", "0.85 fck/1.5 [MPa]");
    for grade in ConcreteGrade::ALL {
        out.push_str(&format!(
            "{:<8} {:>9} {:>14} {:>20}\n",
            grade.display_name(),
            grade.fck(),
            to_fixed(grade.design_strength().0, 2),
            to_fixed(grade.design_strength_with_alpha().0, 2)
        ));
    }
    out
}
