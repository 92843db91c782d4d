//! # Input Files
//!
//! Reads footing inputs from JSON so a design can be run in batch or from a
//! script. Designs are never written back; there is no saved-design format.
//!
//! ## File Format
//!
//! A JSON object with the form keys. Any key left out takes its default:
//!
//! ```json
//! { "fck": 30, "msdx": 410.0, "msdy": 410.0, "vsd": 120.0 }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use footing_core::file_io::load_input;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("pad-f1.json"))?;
//! println!("fck = {}", input.fck);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::calculations::footing::FootingInput;
use crate::errors::{CalcError, CalcResult};

/// Parse a footing input from a JSON string.
///
/// # Example
///
/// ```rust
/// use footing_core::file_io::parse_input;
/// use footing_core::materials::ConcreteGrade;
///
/// let input = parse_input(r#"{ "fck": 40, "totalH": 750 }"#).unwrap();
/// assert_eq!(input.fck, ConcreteGrade::C40);
/// assert_eq!(input.total_h, 750.0);
/// assert_eq!(input.cover, 50.0);
/// ```
pub fn parse_input(json: &str) -> CalcResult<FootingInput> {
    Ok(serde_json::from_str(json)?)
}

/// Load a footing input from a JSON file.
///
/// # Returns
///
/// * `Ok(FootingInput)` - Parsed input, defaults filled in
/// * `Err(CalcError::FileError)` - File could not be opened or read
/// * `Err(CalcError::SerializationError)` - Not valid JSON, or an unknown
///   concrete strength
pub fn load_input(path: &Path) -> CalcResult<FootingInput> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let input = parse_input(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid input in {}: {}", path.display(), e),
    })?;

    tracing::debug!(path = %path.display(), "loaded footing input");
    Ok(input)
}
