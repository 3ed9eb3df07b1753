//! Error types with rich diagnostics using miette
//!
//! The layout core never fails. These errors belong to the layers around it:
//! reading user input and drawing the finished model.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Validation Errors
// ============================================================================

/// Errors raised while turning raw form input into layout parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing value for {field}")]
    #[diagnostic(
        code(fretboard::validation::missing_field),
        help("every numeric field must be filled in")
    )]
    MissingField { field: &'static str },

    #[error("{field} is not a number: {value:?}")]
    #[diagnostic(code(fretboard::validation::not_numeric))]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a whole number, got {value:?}")]
    #[diagnostic(code(fretboard::validation::not_integer))]
    NotInteger { field: &'static str, value: String },

    #[error("{field} must be greater than zero, got {value}")]
    #[diagnostic(code(fretboard::validation::not_positive))]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} is too large: {value}")]
    #[diagnostic(
        code(fretboard::validation::too_large),
        help("at most {max} is supported")
    )]
    TooLarge {
        field: &'static str,
        value: String,
        max: u32,
    },

    #[error("unknown {field}: {value:?}")]
    #[diagnostic(
        code(fretboard::validation::unknown_option),
        help("expected one of: {expected}")
    )]
    UnknownOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::NotInteger { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::UnknownOption { field, .. } => field,
        }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while drawing a model onto a surface
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid display scale {value}: {reason}")]
    #[diagnostic(
        code(fretboard::render::invalid_scale),
        help("the display scale must be a finite number greater than zero")
    )]
    InvalidScale {
        value: f64,
        reason: crate::types::NumericError,
    },

    #[error("model has no primitives to draw")]
    #[diagnostic(code(fretboard::render::empty_model))]
    EmptyModel,

    #[error("infinite or NaN in model bounds")]
    #[diagnostic(
        code(fretboard::render::invalid_bounds),
        help("check that scale length, nut width and inlay width are valid numbers")
    )]
    InvalidBounds,

    #[error("failed to write output")]
    #[diagnostic(code(fretboard::render::write))]
    Write(#[from] std::fmt::Error),
}
