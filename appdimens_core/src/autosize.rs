// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AUTOSIZE configuration.
//!
//! AUTOSIZE fits a value to a container rather than to the screen. The
//! container's shorter side is interpolated between two container
//! breakpoints (320–768 unless configured), the same clamp-interpolation
//! FLUID uses against the screen width. Uniform mode returns the
//! interpolated value directly. Preset mode interpolates between the
//! smallest and largest preset and then snaps to the nearest preset.

use alloc::vec::Vec;

use kurbo::Size;

#[cfg(not(any(feature = "std", test)))]
use kurbo::common::FloatFuncs as _;

use crate::ScaleError;
use crate::fluid::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, clamp_lerp};

/// How AUTOSIZE turns the interpolated value into an output.
#[derive(Clone, Debug, PartialEq)]
pub enum AutoSizeMode {
    /// Continuous output in `[min, max]`.
    Uniform {
        /// Output for the smallest containers.
        min: f64,
        /// Output for the largest containers.
        max: f64,
    },
    /// Output snapped to one of these values.
    Presets(Vec<f64>),
}

/// An AUTOSIZE configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoSize {
    /// Output mode.
    pub mode: AutoSizeMode,
    /// Container side at or below which the smallest output is used.
    pub min_container: f64,
    /// Container side at or above which the largest output is used.
    pub max_container: f64,
}

impl AutoSize {
    /// Uniform mode between `min` and `max`.
    #[must_use]
    pub const fn uniform(min: f64, max: f64) -> Self {
        Self {
            mode: AutoSizeMode::Uniform { min, max },
            min_container: DEFAULT_MIN_WIDTH,
            max_container: DEFAULT_MAX_WIDTH,
        }
    }

    /// Preset mode. Order does not matter.
    #[must_use]
    pub fn presets(presets: impl IntoIterator<Item = f64>) -> Self {
        Self {
            mode: AutoSizeMode::Presets(presets.into_iter().collect()),
            min_container: DEFAULT_MIN_WIDTH,
            max_container: DEFAULT_MAX_WIDTH,
        }
    }

    /// Returns the configuration with different container breakpoints.
    #[must_use]
    pub fn with_container_range(self, min_container: f64, max_container: f64) -> Self {
        Self {
            min_container,
            max_container,
            ..self
        }
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// - [`ScaleError::InvalidBreakpoints`] if `min_container >= max_container`.
    /// - [`ScaleError::InvalidAutoSizeRange`] for a negative, non-finite or
    ///   inverted uniform range. Equal bounds are a constant output.
    /// - [`ScaleError::EmptyPresets`] for an empty preset list.
    /// - [`ScaleError::InvalidPreset`] for a negative or non-finite preset.
    pub fn validate(&self) -> Result<(), ScaleError> {
        let ordered = self.min_container < self.max_container;
        if !ordered {
            return Err(ScaleError::InvalidBreakpoints {
                min: self.min_container,
                max: self.max_container,
            });
        }
        match &self.mode {
            AutoSizeMode::Uniform { min, max } => {
                if min.is_finite() && max.is_finite() && *min >= 0.0 && min <= max {
                    Ok(())
                } else {
                    Err(ScaleError::InvalidAutoSizeRange {
                        min: *min,
                        max: *max,
                    })
                }
            }
            AutoSizeMode::Presets(presets) => {
                if presets.is_empty() {
                    return Err(ScaleError::EmptyPresets);
                }
                match presets.iter().find(|p| !(p.is_finite() && **p >= 0.0)) {
                    Some(value) => Err(ScaleError::InvalidPreset { value: *value }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Output for a container of the given size.
    ///
    /// The shorter container side drives the interpolation. In preset mode a
    /// container with no comparable side (both NaN) picks the smallest preset.
    ///
    /// # Errors
    ///
    /// Any error from [`AutoSize::validate`].
    pub fn fit(&self, container: Size) -> Result<f64, ScaleError> {
        self.validate()?;
        let available = container.width.min(container.height);
        match &self.mode {
            AutoSizeMode::Uniform { min, max } => Ok(self.interpolate(available, *min, *max)),
            AutoSizeMode::Presets(presets) => {
                let (lo, hi) = presets
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                        (lo.min(*p), hi.max(*p))
                    });
                // A NaN container side has no position on the curve.
                let ideal = self.interpolate(available, lo, hi);
                let ideal = if ideal.is_nan() { lo } else { ideal };
                Ok(nearest(presets, ideal))
            }
        }
    }

    fn interpolate(&self, available: f64, lo: f64, hi: f64) -> f64 {
        clamp_lerp(available, self.min_container, self.max_container, lo, hi)
    }
}

/// The preset closest to `ideal`; the smaller preset wins a tie.
fn nearest(presets: &[f64], ideal: f64) -> f64 {
    let mut best = presets[0];
    for &p in &presets[1..] {
        let d = (p - ideal).abs();
        let best_d = (best - ideal).abs();
        if d < best_d || (d == best_d && p < best) {
            best = p;
        }
    }
    best
}
