// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FLUID configuration.
//!
//! A [`FluidRange`] maps a screen dimension to an output by clamped linear
//! interpolation between two breakpoints. A [`Fluid`] configuration adds
//! optional per-breakpoint and per-device ranges on top of a default range.

use alloc::vec::Vec;

use crate::ScaleError;

/// Default lower breakpoint, in logical units.
pub const DEFAULT_MIN_WIDTH: f64 = 320.0;

/// Default upper breakpoint, in logical units.
pub const DEFAULT_MAX_WIDTH: f64 = 768.0;

/// Range used when FLUID runs without a configuration: `[0.8x, 1.2x]`.
pub const IMPLICIT_RANGE_FACTORS: (f64, f64) = (0.8, 1.2);

/// Clamped linear interpolation of `t` from `[t0, t1]` onto `[v0, v1]`.
///
/// Callers guarantee `t0 < t1`.
pub(crate) fn clamp_lerp(t: f64, t0: f64, t1: f64, v0: f64, v1: f64) -> f64 {
    if t <= t0 {
        v0
    } else if t >= t1 {
        v1
    } else {
        let progress = (t - t0) / (t1 - t0);
        v0 + (v1 - v0) * progress
    }
}

// ---------------------------------------------------------------------------
// FluidRange
// ---------------------------------------------------------------------------

/// Output bounds plus the breakpoints between which the output interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidRange {
    /// Output at or below `min_width`.
    pub min_value: f64,
    /// Output at or above `max_width`.
    pub max_value: f64,
    /// Lower breakpoint.
    pub min_width: f64,
    /// Upper breakpoint.
    pub max_width: f64,
}

impl FluidRange {
    /// A range over the default 320–768 breakpoints.
    #[inline]
    #[must_use]
    pub const fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Returns the range with different breakpoints.
    #[inline]
    #[must_use]
    pub const fn with_breakpoints(self, min_width: f64, max_width: f64) -> Self {
        Self {
            min_width,
            max_width,
            ..self
        }
    }

    /// The implicit `[0.8 * base, 1.2 * base]` range.
    #[inline]
    #[must_use]
    pub fn around(base: f64) -> Self {
        let (lo, hi) = IMPLICIT_RANGE_FACTORS;
        Self::new(base * lo, base * hi)
    }

    /// Checks that the breakpoints are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidBreakpoints`] if `min_width >= max_width`
    /// (or either breakpoint is NaN).
    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.min_width < self.max_width {
            Ok(())
        } else {
            Err(ScaleError::InvalidBreakpoints {
                min: self.min_width,
                max: self.max_width,
            })
        }
    }

    /// Interpolated output at `width`. Assumes a validated range.
    #[inline]
    #[must_use]
    pub fn interpolate(&self, width: f64) -> f64 {
        clamp_lerp(
            width,
            self.min_width,
            self.max_width,
            self.min_value,
            self.max_value,
        )
    }
}

// ---------------------------------------------------------------------------
// FluidDeviceType
// ---------------------------------------------------------------------------

/// Device bucket used to select a per-device FLUID range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FluidDeviceType {
    /// Driving dimension below 300.
    Watch,
    /// Driving dimension in `[300, 600)`.
    Phone,
    /// Driving dimension in `[600, 840)`.
    Tablet,
    /// Driving dimension of 840 or more.
    Tv,
}

impl FluidDeviceType {
    /// Buckets a driving dimension.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < 300.0 {
            Self::Watch
        } else if width < 600.0 {
            Self::Phone
        } else if width < 840.0 {
            Self::Tablet
        } else {
            Self::Tv
        }
    }
}

// ---------------------------------------------------------------------------
// Fluid
// ---------------------------------------------------------------------------

/// A FLUID configuration.
///
/// Range selection for a driving dimension `w`:
///
/// 1. the screen range with the largest threshold `<= w`,
/// 2. else the range registered for [`FluidDeviceType::from_width`]`(w)`,
/// 3. else the default range.
#[derive(Clone, Debug, PartialEq)]
pub struct Fluid {
    default: FluidRange,
    screens: Vec<(f64, FluidRange)>,
    devices: Vec<(FluidDeviceType, FluidRange)>,
}

impl Fluid {
    /// A configuration with only a default range.
    #[must_use]
    pub const fn new(default: FluidRange) -> Self {
        Self {
            default,
            screens: Vec::new(),
            devices: Vec::new(),
        }
    }

    /// Adds a range that applies from `min_width` upward.
    #[must_use]
    pub fn screen(mut self, min_width: f64, range: FluidRange) -> Self {
        self.screens.push((min_width, range));
        self
    }

    /// Adds (or replaces) the range for a device bucket.
    #[must_use]
    pub fn device(mut self, device: FluidDeviceType, range: FluidRange) -> Self {
        self.devices.retain(|(d, _)| *d != device);
        self.devices.push((device, range));
        self
    }

    /// The default range.
    #[must_use]
    pub const fn default_range(&self) -> &FluidRange {
        &self.default
    }

    /// Screen ranges in insertion order.
    #[must_use]
    pub fn screens(&self) -> &[(f64, FluidRange)] {
        &self.screens
    }

    /// Device ranges in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[(FluidDeviceType, FluidRange)] {
        &self.devices
    }

    /// Picks the range that applies at `width`.
    #[must_use]
    pub fn select(&self, width: f64) -> &FluidRange {
        let mut best: Option<&(f64, FluidRange)> = None;
        for entry in &self.screens {
            if entry.0 <= width && best.is_none_or(|b| entry.0 > b.0) {
                best = Some(entry);
            }
        }
        if let Some((_, range)) = best {
            return range;
        }
        let device = FluidDeviceType::from_width(width);
        self.devices
            .iter()
            .find(|(d, _)| *d == device)
            .map_or(&self.default, |(_, range)| range)
    }

    /// Validates every range in the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScaleError::InvalidBreakpoints`] found.
    pub fn validate(&self) -> Result<(), ScaleError> {
        self.default.validate()?;
        for (_, range) in &self.screens {
            range.validate()?;
        }
        for (_, range) in &self.devices {
            range.validate()?;
        }
        Ok(())
    }
}

impl From<FluidRange> for Fluid {
    fn from(range: FluidRange) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_midpoint() {
        let r = FluidRange::new(16.0, 32.0);
        assert_eq!(r.interpolate(544.0), 24.0);
    }

    #[test]
    fn interpolation_clamps_outside_breakpoints() {
        let r = FluidRange::new(16.0, 32.0);
        for w in [0.0, 100.0, 320.0] {
            assert_eq!(r.interpolate(w), 16.0);
        }
        for w in [768.0, 1024.0, 4000.0] {
            assert_eq!(r.interpolate(w), 32.0);
        }
    }

    #[test]
    fn inverted_breakpoints_are_rejected() {
        let r = FluidRange::new(16.0, 32.0).with_breakpoints(768.0, 320.0);
        assert_eq!(
            r.validate(),
            Err(ScaleError::InvalidBreakpoints {
                min: 768.0,
                max: 320.0
            })
        );
        let equal = FluidRange::new(16.0, 32.0).with_breakpoints(500.0, 500.0);
        assert!(equal.validate().is_err());
    }

    #[test]
    fn implicit_range_is_twenty_percent_either_side() {
        let r = FluidRange::around(20.0);
        assert_eq!(r.min_value, 16.0);
        assert_eq!(r.max_value, 24.0);
    }

    #[test]
    fn device_buckets() {
        assert_eq!(FluidDeviceType::from_width(280.0), FluidDeviceType::Watch);
        assert_eq!(FluidDeviceType::from_width(300.0), FluidDeviceType::Phone);
        assert_eq!(FluidDeviceType::from_width(600.0), FluidDeviceType::Tablet);
        assert_eq!(FluidDeviceType::from_width(840.0), FluidDeviceType::Tv);
    }

    #[test]
    fn selection_order_is_screen_then_device_then_default() {
        let default = FluidRange::new(1.0, 2.0);
        let tablet = FluidRange::new(3.0, 4.0);
        let wide = FluidRange::new(5.0, 6.0);
        let fluid = Fluid::new(default)
            .device(FluidDeviceType::Tablet, tablet)
            .screen(700.0, wide);

        assert_eq!(fluid.select(400.0), &default);
        assert_eq!(fluid.select(650.0), &tablet);
        assert_eq!(fluid.select(700.0), &wide);
        assert_eq!(fluid.select(2000.0), &wide);
    }

    #[test]
    fn largest_screen_threshold_wins() {
        let a = FluidRange::new(1.0, 1.0);
        let b = FluidRange::new(2.0, 2.0);
        let fluid = Fluid::new(FluidRange::new(0.0, 0.0))
            .screen(600.0, b)
            .screen(300.0, a);
        assert_eq!(fluid.select(650.0), &b);
        assert_eq!(fluid.select(450.0), &a);
    }

    #[test]
    fn device_range_replaces_previous_entry() {
        let fluid = Fluid::new(FluidRange::new(0.0, 0.0))
            .device(FluidDeviceType::Phone, FluidRange::new(1.0, 1.0))
            .device(FluidDeviceType::Phone, FluidRange::new(2.0, 2.0));
        assert_eq!(fluid.devices().len(), 1);
        assert_eq!(fluid.select(400.0).min_value, 2.0);
    }

    #[test]
    fn validate_checks_nested_ranges() {
        let bad = FluidRange::new(1.0, 2.0).with_breakpoints(10.0, 5.0);
        let fluid = Fluid::new(FluidRange::new(1.0, 2.0)).screen(600.0, bad);
        assert!(fluid.validate().is_err());
    }
}
