// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen metrics and reference screens.
//!
//! A [`ScreenSnapshot`] captures the live window size in logical units (dp on
//! Android, points on iOS) together with the pixel scale factor. A
//! [`Reference`] is the screen a base value was authored against. Both are
//! plain values: hosts build a fresh snapshot per calculation (or per layout
//! pass) and never mutate it.

use kurbo::Size;

#[cfg(not(any(feature = "std", test)))]
use kurbo::common::FloatFuncs as _;

use crate::ScaleError;

// ---------------------------------------------------------------------------
// ScreenSnapshot
// ---------------------------------------------------------------------------

/// Immutable screen metrics for one calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSnapshot {
    /// Window size in logical units.
    pub size: Size,
    /// Physical pixels per logical unit.
    pub scale_factor: f64,
}

impl ScreenSnapshot {
    /// Creates a snapshot from a width and height in logical units.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scale_factor,
        }
    }

    /// Creates a snapshot from a [`Size`] in logical units.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size, scale_factor: f64) -> Self {
        Self { size, scale_factor }
    }

    /// Window width in logical units.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Window height in logical units.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// The shorter side (Android's "smallest width").
    #[inline]
    #[must_use]
    pub fn smallest(&self) -> f64 {
        self.size.width.min(self.size.height)
    }

    /// The longer side.
    #[inline]
    #[must_use]
    pub fn largest(&self) -> f64 {
        self.size.width.max(self.size.height)
    }

    /// Length of the window diagonal.
    #[inline]
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.size.width * self.size.width + self.size.height * self.size.height).sqrt()
    }

    /// Sum of width and height.
    #[inline]
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.size.width + self.size.height
    }

    /// `largest / smallest`, normalized so it is always at least 1.
    ///
    /// A degenerate snapshot with a zero or negative side reports 1.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let smallest = self.smallest();
        if smallest > 0.0 {
            self.largest() / smallest
        } else {
            1.0
        }
    }

    /// Returns `true` when the window is taller than it is wide.
    #[inline]
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.size.height > self.size.width
    }

    /// Returns `true` when the window is wider than it is tall.
    #[inline]
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }

    /// The dimension a formula is driven by for the given screen type.
    #[inline]
    #[must_use]
    pub fn dimension(&self, screen_type: ScreenType) -> f64 {
        match screen_type {
            ScreenType::Lowest => self.smallest(),
            ScreenType::Highest => self.largest(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScreenType / BaseOrientation
// ---------------------------------------------------------------------------

/// Which live screen dimension drives a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenType {
    /// `min(width, height)`.
    #[default]
    Lowest,
    /// `max(width, height)`.
    Highest,
}

impl ScreenType {
    /// The opposite screen type.
    #[inline]
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Lowest => Self::Highest,
            Self::Highest => Self::Lowest,
        }
    }

    /// Adjusts this screen type for a design authored in `orientation`.
    ///
    /// When the live orientation disagrees with the authored one, lowest and
    /// highest swap. [`BaseOrientation::Auto`] and square windows never swap.
    #[must_use]
    pub fn for_orientation(self, orientation: BaseOrientation, snapshot: &ScreenSnapshot) -> Self {
        let disagrees = match orientation {
            BaseOrientation::Portrait => snapshot.is_landscape(),
            BaseOrientation::Landscape => snapshot.is_portrait(),
            BaseOrientation::Auto => false,
        };
        if disagrees { self.inverted() } else { self }
    }
}

/// The orientation a design was authored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseOrientation {
    /// Authored for a portrait window.
    Portrait,
    /// Authored for a landscape window.
    Landscape,
    /// No authored orientation; the screen type is used as given.
    #[default]
    Auto,
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// The screen a base value was designed against (`W₀` × `H₀`).
///
/// Construction validates that both sides are positive and finite, so every
/// formula can divide by them freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reference {
    width: f64,
    height: f64,
}

impl Reference {
    /// 300 × 533, the compact-phone reference used by the library's defaults.
    pub const COMPACT: Self = Self {
        width: 300.0,
        height: 533.0,
    };

    /// 360 × 640, a common Android dp reference.
    pub const PHONE_DP: Self = Self {
        width: 360.0,
        height: 640.0,
    };

    /// 375 × 667, a common iOS point reference.
    pub const PHONE_PT: Self = Self {
        width: 375.0,
        height: 667.0,
    };

    /// Creates a reference screen.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidReference`] unless both sides are finite
    /// and greater than zero.
    pub fn new(width: f64, height: f64) -> Result<Self, ScaleError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ScaleError::InvalidReference { width, height })
        }
    }

    /// Reference width `W₀`.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Reference height `H₀`.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Reference diagonal `sqrt(W₀² + H₀²)`.
    #[inline]
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Reference perimeter term `W₀ + H₀`.
    #[inline]
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.width + self.height
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::COMPACT
    }
}
