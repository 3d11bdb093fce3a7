// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition errors.
//!
//! Only caller misconfiguration is an error. A zero-sized screen scales to
//! zero, and a dimension with no matching override falls back to its base
//! value; neither produces a [`ScaleError`].

use core::fmt;

/// A scaling request was configured with values outside the engine's domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleError {
    /// The reference width or height is not a finite, positive number.
    InvalidReference {
        /// Reference width that was supplied.
        width: f64,
        /// Reference height that was supplied.
        height: f64,
    },
    /// An interpolation range has `min >= max` breakpoints.
    ///
    /// Raised for FLUID screen-width breakpoints and AUTOSIZE container
    /// breakpoints.
    InvalidBreakpoints {
        /// Lower breakpoint.
        min: f64,
        /// Upper breakpoint.
        max: f64,
    },
    /// An AUTOSIZE uniform range is negative, not finite, or has `min > max`.
    InvalidAutoSizeRange {
        /// Smallest permitted output.
        min: f64,
        /// Largest permitted output.
        max: f64,
    },
    /// AUTOSIZE preset mode was given no presets.
    EmptyPresets,
    /// An AUTOSIZE preset is negative or not finite.
    InvalidPreset {
        /// The offending preset.
        value: f64,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReference { width, height } => write!(
                f,
                "reference screen must be positive and finite, got {width}x{height}"
            ),
            Self::InvalidBreakpoints { min, max } => write!(
                f,
                "breakpoints must satisfy min < max, got min={min} max={max}"
            ),
            Self::InvalidAutoSizeRange { min, max } => write!(
                f,
                "auto-size range must be finite and non-negative with min <= max, got min={min} max={max}"
            ),
            Self::EmptyPresets => f.write_str("auto-size preset list is empty"),
            Self::InvalidPreset { value } => {
                write!(f, "auto-size preset must be non-negative and finite, got {value}")
            }
        }
    }
}

impl core::error::Error for ScaleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_mentions_values() {
        let e = ScaleError::InvalidBreakpoints {
            min: 768.0,
            max: 320.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("768"), "message was {msg}");
        assert!(msg.contains("320"), "message was {msg}");
    }

    #[test]
    fn empty_presets_message() {
        assert_eq!(
            ScaleError::EmptyPresets.to_string(),
            "auto-size preset list is empty"
        );
    }
}
