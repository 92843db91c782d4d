//! # Design Form State
//!
//! The mutable record a host UI owns while the user edits a footing. It holds
//! one value per input field plus the last result shown, and recomputes the
//! whole result after every edit.
//!
//! A numeric field can be [`FieldValue::Empty`] while the user is mid-edit.
//! As long as any field is empty, no calculation runs and the previous result
//! stays on display (it is then *stale*).
//!
//! ## Example
//!
//! ```rust
//! use footing_core::form::{DesignForm, FieldValue, FormField};
//!
//! let mut form = DesignForm::new();
//! let shown = form.result().cloned();
//!
//! // Clearing a field keeps the previous result
//! form.set(FormField::Msdx, FieldValue::Empty);
//! assert_eq!(form.result().cloned(), shown);
//! assert!(form.is_stale());
//!
//! // Re-populating it recomputes
//! form.apply_text(FormField::Msdx, "700").unwrap();
//! assert!(!form.is_stale());
//! assert_ne!(form.result().cloned(), shown);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::footing::{calculate, DesignResult, FootingInput};
use crate::errors::{CalcError, CalcResult};
use crate::materials::ConcreteGrade;

/// Value of one numeric form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A parsed number
    Number(f64),
    /// The field is being edited and has no value
    Empty,
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Parse raw field text: blank is `Empty`, anything else must be a number
    pub fn parse(field: FormField, text: &str) -> CalcResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(FieldValue::Empty);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(FieldValue::Number(value)),
            Ok(_) => Err(CalcError::invalid_input(field.key(), text, "Not a finite number")),
            Err(_) => Err(CalcError::invalid_input(field.key(), text, "Not a number")),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Empty => Ok(()),
        }
    }
}

/// Numeric input fields of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Msdx,
    Msdy,
    B,
    L,
    TotalH,
    Cover,
    Phi,
    Fyk,
    Vsd,
    ColA,
    ColB,
}

impl FormField {
    /// All numeric fields for UI iteration
    pub const ALL: [FormField; 11] = [
        FormField::Msdx,
        FormField::Msdy,
        FormField::B,
        FormField::L,
        FormField::TotalH,
        FormField::Cover,
        FormField::Phi,
        FormField::Fyk,
        FormField::Vsd,
        FormField::ColA,
        FormField::ColB,
    ];

    /// Field key as used in JSON input ("msdx", "totalH", ...)
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Msdx => "msdx",
            FormField::Msdy => "msdy",
            FormField::B => "b",
            FormField::L => "l",
            FormField::TotalH => "totalH",
            FormField::Cover => "cover",
            FormField::Phi => "phi",
            FormField::Fyk => "fyk",
            FormField::Vsd => "vsd",
            FormField::ColA => "col_a",
            FormField::ColB => "col_b",
        }
    }

    /// Look up a field by its key (case-insensitive)
    pub fn from_key(key: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| CalcError::invalid_input("field", key, "Unknown form field"))
    }

    /// Form label with units
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Msdx => "Moment Msdx (kNm)",
            FormField::Msdy => "Moment Msdy (kNm)",
            FormField::B => "Foundation Width B (mm)",
            FormField::L => "Foundation Length L (mm)",
            FormField::TotalH => "Overall Depth H (mm)",
            FormField::Cover => "Concrete Cover (mm)",
            FormField::Phi => "Bar Diameter (mm)",
            FormField::Fyk => "Steel Yield Strength fyk (MPa)",
            FormField::Vsd => "Design Shear Vsd (kN)",
            FormField::ColA => "Column Size a (mm)",
            FormField::ColB => "Column Size b (mm)",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw field values as the form holds them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormInputs {
    pub fck: ConcreteGrade,
    pub msdx: FieldValue,
    pub msdy: FieldValue,
    pub b: FieldValue,
    pub l: FieldValue,
    #[serde(rename = "totalH")]
    pub total_h: FieldValue,
    pub cover: FieldValue,
    pub phi: FieldValue,
    pub fyk: FieldValue,
    pub vsd: FieldValue,
    pub col_a: FieldValue,
    pub col_b: FieldValue,
}

impl From<&FootingInput> for FormInputs {
    fn from(input: &FootingInput) -> Self {
        FormInputs {
            fck: input.fck,
            msdx: input.msdx.into(),
            msdy: input.msdy.into(),
            b: input.b.into(),
            l: input.l.into(),
            total_h: input.total_h.into(),
            cover: input.cover.into(),
            phi: input.phi.into(),
            fyk: input.fyk.into(),
            vsd: input.vsd.into(),
            col_a: input.col_a.into(),
            col_b: input.col_b.into(),
        }
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        FormInputs::from(&FootingInput::default())
    }
}

impl FormInputs {
    pub fn get(&self, field: FormField) -> FieldValue {
        match field {
            FormField::Msdx => self.msdx,
            FormField::Msdy => self.msdy,
            FormField::B => self.b,
            FormField::L => self.l,
            FormField::TotalH => self.total_h,
            FormField::Cover => self.cover,
            FormField::Phi => self.phi,
            FormField::Fyk => self.fyk,
            FormField::Vsd => self.vsd,
            FormField::ColA => self.col_a,
            FormField::ColB => self.col_b,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut FieldValue {
        match field {
            FormField::Msdx => &mut self.msdx,
            FormField::Msdy => &mut self.msdy,
            FormField::B => &mut self.b,
            FormField::L => &mut self.l,
            FormField::TotalH => &mut self.total_h,
            FormField::Cover => &mut self.cover,
            FormField::Phi => &mut self.phi,
            FormField::Fyk => &mut self.fyk,
            FormField::Vsd => &mut self.vsd,
            FormField::ColA => &mut self.col_a,
            FormField::ColB => &mut self.col_b,
        }
    }

    /// The first empty field, if any
    pub fn first_empty(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }

    /// Build a complete calculation input.
    ///
    /// Fails with `MissingField` naming the first empty field.
    pub fn to_input(&self) -> CalcResult<FootingInput> {
        let value = |field: FormField| {
            self.get(field)
                .as_number()
                .ok_or_else(|| CalcError::missing_field(field.key()))
        };

        Ok(FootingInput {
            fck: self.fck,
            msdx: value(FormField::Msdx)?,
            msdy: value(FormField::Msdy)?,
            b: value(FormField::B)?,
            l: value(FormField::L)?,
            total_h: value(FormField::TotalH)?,
            cover: value(FormField::Cover)?,
            phi: value(FormField::Phi)?,
            fyk: value(FormField::Fyk)?,
            vsd: value(FormField::Vsd)?,
            col_a: value(FormField::ColA)?,
            col_b: value(FormField::ColB)?,
        })
    }
}

/// Form state: field values and the result currently on display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignForm {
    inputs: FormInputs,
    result: Option<DesignResult>,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignForm {
    /// A form holding the default design, already computed
    pub fn new() -> Self {
        Self::from_input(&FootingInput::default())
    }

    /// A form pre-filled from a complete input, already computed
    pub fn from_input(input: &FootingInput) -> Self {
        let mut form = DesignForm {
            inputs: FormInputs::from(input),
            result: None,
        };
        form.recompute();
        form
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// The result on display; `None` only if no complete input was ever seen
    pub fn result(&self) -> Option<&DesignResult> {
        self.result.as_ref()
    }

    /// True while an empty field holds the previous result on display
    pub fn is_stale(&self) -> bool {
        self.inputs.first_empty().is_some()
    }

    /// Set one numeric field and recompute
    pub fn set(&mut self, field: FormField, value: FieldValue) {
        *self.inputs.slot(field) = value;
        tracing::trace!(field = field.key(), %value, "form field updated");
        self.recompute();
    }

    /// Apply a raw text edit to one field.
    ///
    /// Blank text empties the field. Text that is not a number is rejected and
    /// the form is left unchanged.
    pub fn apply_text(&mut self, field: FormField, text: &str) -> CalcResult<()> {
        let value = FieldValue::parse(field, text)?;
        self.set(field, value);
        Ok(())
    }

    /// Select a concrete grade and recompute
    pub fn set_grade(&mut self, grade: ConcreteGrade) {
        self.inputs.fck = grade;
        tracing::trace!(grade = %grade, "concrete grade selected");
        self.recompute();
    }

    /// Reset every field to the defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn recompute(&mut self) {
        match self.inputs.to_input() {
            Ok(input) => {
                self.result = Some(calculate(&input).display());
            }
            Err(err) => {
                tracing::trace!(%err, "input incomplete, keeping previous result");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::CheckStatus;

    #[test]
    fn test_new_form_is_computed() {
        let form = DesignForm::new();
        let result = form.result().unwrap();
        assert_eq!(result.d, "542");
        assert_eq!(result.as_x, "1414.28");
        assert!(!form.is_stale());
    }

    #[test]
    fn test_empty_field_keeps_previous_result() {
        let mut form = DesignForm::new();
        let before = form.result().cloned();

        form.set(FormField::Msdx, FieldValue::Empty);
        assert_eq!(form.result().cloned(), before);
        assert!(form.is_stale());

        // Further edits while incomplete still do not compute
        form.set(FormField::Vsd, FieldValue::Number(50_000.0));
        assert_eq!(form.result().cloned(), before);
    }

    #[test]
    fn test_refill_recomputes_with_all_pending_edits() {
        let mut form = DesignForm::new();
        form.set(FormField::Msdx, FieldValue::Empty);
        form.set(FormField::Vsd, FieldValue::Number(400.0));
        form.set(FormField::Msdx, FieldValue::Number(326.11));

        let result = form.result().unwrap();
        assert_eq!(result.wide_beam_status, CheckStatus::Unsafe);
        assert_eq!(result.punching_status, CheckStatus::Safe);
    }

    #[test]
    fn test_apply_text() {
        let mut form = DesignForm::new();
        form.apply_text(FormField::Phi, " 15 ").unwrap();
        assert_eq!(form.result().unwrap().d, "543");

        form.apply_text(FormField::Phi, "").unwrap();
        assert!(form.inputs().phi.is_empty());
        assert_eq!(form.result().unwrap().d, "543");
    }

    #[test]
    fn test_invalid_text_leaves_form_unchanged() {
        let mut form = DesignForm::new();
        let before = form.clone();
        let err = form.apply_text(FormField::B, "2.3m").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(form.apply_text(FormField::B, "inf").is_err());
        assert!(form.apply_text(FormField::B, "NaN").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn test_grade_change_recomputes() {
        let mut form = DesignForm::new();
        form.set(FormField::Vsd, FieldValue::Number(500.0));
        assert_eq!(form.result().unwrap().wide_beam_status, CheckStatus::Unsafe);

        // Higher grade raises vRd,c but not enough for 500 kN
        form.set_grade(ConcreteGrade::C50);
        assert_eq!(form.inputs().fck, ConcreteGrade::C50);
        assert_eq!(form.result().unwrap().wide_beam_status, CheckStatus::Unsafe);

        form.set(FormField::Vsd, FieldValue::Number(50.0));
        assert_eq!(form.result().unwrap().wide_beam_status, CheckStatus::Safe);
    }

    #[test]
    fn test_to_input_names_first_empty_field() {
        let mut inputs = FormInputs::default();
        inputs.cover = FieldValue::Empty;
        inputs.col_b = FieldValue::Empty;
        assert_eq!(inputs.first_empty(), Some(FormField::Cover));
        assert_eq!(inputs.to_input().unwrap_err(), CalcError::missing_field("cover"));
    }

    #[test]
    fn test_field_keys_roundtrip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()).unwrap(), field);
        }
        assert_eq!(FormField::from_key("TOTALH").unwrap(), FormField::TotalH);
        assert!(FormField::from_key("depth").is_err());
    }

    #[test]
    fn test_reset() {
        let mut form = DesignForm::new();
        form.set(FormField::Msdx, FieldValue::Empty);
        form.reset();
        assert_eq!(form, DesignForm::new());
    }

    #[test]
    fn test_field_value_serialization() {
        assert_eq!(serde_json::to_string(&FieldValue::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FieldValue::Number(2.5)).unwrap(), "2.5");
        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert!(v.is_empty());
    }
}
