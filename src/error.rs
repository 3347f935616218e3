use std::fmt;

use crate::field::Bounds;

/// All errors produced while expanding a cron instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExpandError {
    /// A single number lies outside the field's bounds.
    OutOfRange { value: String, bounds: Bounds },

    /// A `*/S` step size lies outside the field's bounds.
    InvalidStep { step: String, bounds: Bounds },

    /// A comma list contains a number outside the field's bounds.
    ListValueOutOfRange { value: String, bounds: Bounds },

    /// The pattern matches none of the recognized syntaxes.
    UnknownPattern { pattern: String },

    /// The instruction did not contain five time fields and a command.
    Usage { found: usize },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value, bounds } => {
                write!(f, "number {value} not within range {bounds}")
            }
            Self::InvalidStep { step, bounds } => {
                write!(f, "invalid step value {step} for range {bounds}")
            }
            Self::ListValueOutOfRange { value, bounds } => {
                write!(
                    f,
                    "invalid number within list: {value} not within range {bounds}"
                )
            }
            Self::UnknownPattern { pattern } => write!(f, "unknown pattern type '{pattern}'"),
            Self::Usage { found } => write!(
                f,
                "expected 5 time fields and a command, got {found} fields"
            ),
        }
    }
}

impl std::error::Error for ExpandError {}

impl ExpandError {
    pub fn out_of_range(value: impl Into<String>, bounds: Bounds) -> Self {
        Self::OutOfRange {
            value: value.into(),
            bounds,
        }
    }

    pub fn invalid_step(step: impl Into<String>, bounds: Bounds) -> Self {
        Self::InvalidStep {
            step: step.into(),
            bounds,
        }
    }

    pub fn list_value_out_of_range(value: impl Into<String>, bounds: Bounds) -> Self {
        Self::ListValueOutOfRange {
            value: value.into(),
            bounds,
        }
    }

    pub fn unknown_pattern(pattern: impl Into<String>) -> Self {
        Self::UnknownPattern {
            pattern: pattern.into(),
        }
    }

    pub fn usage(found: usize) -> Self {
        Self::Usage { found }
    }

    /// Whether this error comes from a malformed instruction rather than a
    /// bad field pattern.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    /// Format the error for a terminal.
    pub fn display_rich(&self) -> String {
        format!("error: {self}")
    }
}
