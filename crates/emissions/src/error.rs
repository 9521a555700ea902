// ---------------------------------------------------------------------------
// Error types for input validation and parameter loading
// ---------------------------------------------------------------------------

use std::fmt;

/// A slider value rejected at the input boundary.
///
/// The calculation functions accept any finite input; these errors only come
/// from the validation that the session runs before touching the sliders.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// NaN or infinite value.
    NotFinite { field: &'static str },
    /// Value outside the slider's configured range.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFinite { field } => write!(f, "{field} must be a finite number"),
            InputError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} is outside {min}..={max}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Errors from reading a dashboard parameter file.
#[derive(Debug)]
pub enum ParamsError {
    /// I/O error (file not found, permission denied, ...)
    Io(std::io::Error),
    /// The file is not valid parameter JSON.
    Parse(serde_json::Error),
    /// The file parsed but a slider range is inconsistent.
    Invalid(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(e) => write!(f, "Parse error: {e}"),
            ParamsError::Invalid(msg) => write!(f, "Invalid parameters: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Parse(e) => Some(e),
            ParamsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e)
    }
}
