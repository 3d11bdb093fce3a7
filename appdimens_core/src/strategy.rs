// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaling strategies.
//!
//! [`apply`] maps a resolved base value `x` to an output for the live screen,
//! using one of the [`StrategyId`] formulas. `W`/`H` are the snapshot width
//! and height, `W₀`/`H₀` the reference, and `dim` the driving dimension
//! selected by [`StrategyParams::screen_type`] (after
//! [`BaseOrientation`] correction).
//!
//! | Strategy | Output |
//! |---|---|
//! | NONE | `x` |
//! | PERCENTAGE | `x · dim/W₀` |
//! | DEFAULT | `x · (1 + (dim − W₀) · BASE_INCREMENT) · arAdj` |
//! | BALANCED | `x · dim/W₀` below the transition point, else `x · (1.6 + s · ln(1 + (dim − tp)/W₀))` |
//! | LOGARITHMIC | `x · (1 + s · ln(max(dim/W₀, 1)))` |
//! | POWER | `x · (dim/W₀)^e` |
//! | FLUID | clamp-interpolation of a [`FluidRange`] at `dim` |
//! | INTERPOLATED | `x + (x · dim/W₀ − x) · 0.5` |
//! | DIAGONAL | `x · √(W² + H²) / √(W₀² + H₀²)` |
//! | PERIMETER | `x · (W + H)/(W₀ + H₀)` |
//! | FIT | `x · min(W/W₀, H/H₀)` |
//! | FILL | `x · max(W/W₀, H/H₀)` |
//! | AUTOSIZE | [`AutoSize::fit`] on the container, or `x` without one |
//!
//! `arAdj = 1 + k · ln(AR / 1.78)` where `AR = largest/smallest`.
//!
//! BALANCED is discontinuous at the transition point whenever `tp/W₀ ≠ 1.6`: the
//! log branch starts at the constant `1.6` rather than at `tp/W₀`.

use core::fmt;

use kurbo::Size;

#[cfg(not(any(feature = "std", test)))]
use kurbo::common::FloatFuncs as _;

use crate::ScaleError;
use crate::autosize::AutoSize;
use crate::fluid::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, Fluid, FluidRange, clamp_lerp};
use crate::screen::{BaseOrientation, Reference, ScreenSnapshot, ScreenType};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Per-unit growth used by DEFAULT.
pub const BASE_INCREMENT: f64 = 0.10 / 30.0;

/// Default aspect-ratio sensitivity `k` used by DEFAULT.
pub const DEFAULT_AR_SENSITIVITY: f64 = 0.08 / 30.0;

/// Aspect ratio at which the aspect-ratio adjustment is neutral.
pub const REFERENCE_ASPECT_RATIO: f64 = 1.78;

/// Default sensitivity for BALANCED and LOGARITHMIC.
pub const DEFAULT_SENSITIVITY: f64 = 0.40;

/// Default BALANCED transition point, in logical units.
pub const DEFAULT_TRANSITION_POINT: f64 = 480.0;

/// Starting factor of BALANCED's logarithmic branch.
pub const BALANCED_LOG_BASE: f64 = 1.6;

/// Default POWER exponent.
pub const DEFAULT_POWER_EXPONENT: f64 = 0.75;

/// Blend weight between identity and PERCENTAGE used by INTERPOLATED.
pub const INTERPOLATED_BLEND: f64 = 0.5;

// ---------------------------------------------------------------------------
// StrategyId
// ---------------------------------------------------------------------------

/// One of the 13 scaling formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyId {
    /// Conservative linear growth with aspect-ratio compensation.
    #[default]
    Default,
    /// Proportional to the driving dimension.
    Percentage,
    /// Linear on phones, logarithmic on larger screens.
    Balanced,
    /// Logarithmic growth above the reference.
    Logarithmic,
    /// Power-law growth.
    Power,
    /// Clamped interpolation between two values.
    Fluid,
    /// Halfway between identity and PERCENTAGE.
    Interpolated,
    /// Proportional to the screen diagonal.
    Diagonal,
    /// Proportional to width plus height.
    Perimeter,
    /// Smaller of the two axis ratios (letterbox).
    Fit,
    /// Larger of the two axis ratios (cover).
    Fill,
    /// Fitted to a container.
    AutoSize,
    /// Identity.
    None,
}

impl StrategyId {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Default,
        Self::Percentage,
        Self::Balanced,
        Self::Logarithmic,
        Self::Power,
        Self::Fluid,
        Self::Interpolated,
        Self::Diagonal,
        Self::Perimeter,
        Self::Fit,
        Self::Fill,
        Self::AutoSize,
        Self::None,
    ];

    /// Upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Percentage => "PERCENTAGE",
            Self::Balanced => "BALANCED",
            Self::Logarithmic => "LOGARITHMIC",
            Self::Power => "POWER",
            Self::Fluid => "FLUID",
            Self::Interpolated => "INTERPOLATED",
            Self::Diagonal => "DIAGONAL",
            Self::Perimeter => "PERIMETER",
            Self::Fit => "FIT",
            Self::Fill => "FILL",
            Self::AutoSize => "AUTOSIZE",
            Self::None => "NONE",
        }
    }

    /// Parses an upper- or lower-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "Linear growth of about 0.33% per unit with aspect-ratio compensation",
            Self::Percentage => "Grows in direct proportion to the screen",
            Self::Balanced => "Linear on phones, logarithmic growth past the transition point",
            Self::Logarithmic => "Maximum control of growth on large screens",
            Self::Power => "Configurable power-law growth",
            Self::Fluid => "Interpolates between a minimum and maximum across breakpoints",
            Self::Interpolated => "Moderate growth halfway between fixed and proportional",
            Self::Diagonal => "Scales with the physical screen diagonal",
            Self::Perimeter => "Scales with width plus height",
            Self::Fit => "Fits inside the screen without overflow",
            Self::Fill => "Covers the screen, possibly overflowing one axis",
            Self::AutoSize => "Fits a value to its container",
            Self::None => "Returns the base value unchanged",
        }
    }

    /// The formula in compact notation.
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Default => "f(x) = x * (1 + (dim - W0) * 0.00333) * (1 + k * ln(AR / 1.78))",
            Self::Percentage => "f(x) = x * (dim / W0)",
            Self::Balanced => "f(x) = x * (dim / W0) if dim < tp, else x * (1.6 + s * ln(1 + (dim - tp) / W0))",
            Self::Logarithmic => "f(x) = x * (1 + s * ln(max(dim / W0, 1)))",
            Self::Power => "f(x) = x * (dim / W0)^e",
            Self::Fluid => "f(x) = clamp-lerp(dim, [minW, maxW] -> [min, max])",
            Self::Interpolated => "f(x) = x + (x * dim / W0 - x) * 0.5",
            Self::Diagonal => "f(x) = x * sqrt(W^2 + H^2) / sqrt(W0^2 + H0^2)",
            Self::Perimeter => "f(x) = x * (W + H) / (W0 + H0)",
            Self::Fit => "f(x) = x * min(W / W0, H / H0)",
            Self::Fill => "f(x) = x * max(W / W0, H / H0)",
            Self::AutoSize => "f(x) = clamp-lerp(container, [minC, maxC] -> [min, max])",
            Self::None => "f(x) = x",
        }
    }

    /// Elements this strategy suits.
    #[must_use]
    pub const fn recommended_for(self) -> &'static str {
        match self {
            Self::Default => "icons, toolbars, FABs, badges",
            Self::Percentage => "containers, images, full-width grids",
            Self::Balanced => "buttons, spacing, dialogs on multi-device apps",
            Self::Logarithmic => "TV layouts and very large screens",
            Self::Power => "general purpose with tunable growth",
            Self::Fluid => "typography, chips, inputs",
            Self::Interpolated => "medium elements needing moderate growth",
            Self::Diagonal => "elements tied to physical screen size",
            Self::Perimeter => "elements that track both axes",
            Self::Fit => "game UI and letterboxed content",
            Self::Fill => "backgrounds and cover images",
            Self::AutoSize => "text and content inside dynamic containers",
            Self::None => "dividers, hairlines, fixed chrome",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// DEFAULT's aspect-ratio adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRatio {
    /// Disabled means `arAdj = 1`.
    pub enabled: bool,
    /// Sensitivity `k`.
    pub sensitivity: f64,
}

impl AspectRatio {
    /// The stock adjustment.
    pub const DEFAULT: Self = Self {
        enabled: true,
        sensitivity: DEFAULT_AR_SENSITIVITY,
    };

    /// No adjustment.
    pub const OFF: Self = Self {
        enabled: false,
        sensitivity: DEFAULT_AR_SENSITIVITY,
    };

    /// Enabled with a custom sensitivity.
    #[inline]
    #[must_use]
    pub const fn with_sensitivity(sensitivity: f64) -> Self {
        Self {
            enabled: true,
            sensitivity,
        }
    }

    /// `1 + k · ln(AR / REFERENCE_ASPECT_RATIO)`, or 1 when disabled.
    #[must_use]
    pub fn adjustment(&self, snapshot: &ScreenSnapshot) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let ratio = snapshot.aspect_ratio() / REFERENCE_ASPECT_RATIO;
        if ratio > 0.0 && ratio.is_finite() {
            1.0 + self.sensitivity * ratio.ln()
        } else {
            1.0
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional tuning for the strategy formulas.
///
/// Each field only affects the strategies that read it; the rest ignore it.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyParams {
    /// Driving dimension selection.
    pub screen_type: ScreenType,
    /// Authored orientation; may swap `screen_type`.
    pub orientation: BaseOrientation,
    /// DEFAULT's aspect-ratio adjustment.
    pub aspect_ratio: AspectRatio,
    /// BALANCED and LOGARITHMIC sensitivity.
    pub sensitivity: f64,
    /// BALANCED transition point.
    pub transition_point: f64,
    /// POWER exponent.
    pub exponent: f64,
    /// FLUID configuration; `None` uses [`FluidRange::around`] the base.
    pub fluid: Option<Fluid>,
    /// AUTOSIZE configuration; `None` interpolates between `0.5x` and `2x`,
    /// taken in ascending order so zero and negative bases fit too.
    pub auto_size: Option<AutoSize>,
    /// Container size for AUTOSIZE.
    pub container: Option<Size>,
}

impl StrategyParams {
    /// Stock parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen_type: ScreenType::Lowest,
            orientation: BaseOrientation::Auto,
            aspect_ratio: AspectRatio::DEFAULT,
            sensitivity: DEFAULT_SENSITIVITY,
            transition_point: DEFAULT_TRANSITION_POINT,
            exponent: DEFAULT_POWER_EXPONENT,
            fluid: None,
            auto_size: None,
            container: None,
        }
    }

    /// Sets the screen type.
    #[must_use]
    pub fn with_screen_type(self, screen_type: ScreenType) -> Self {
        Self {
            screen_type,
            ..self
        }
    }

    /// Sets the authored orientation.
    #[must_use]
    pub fn with_orientation(self, orientation: BaseOrientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Sets DEFAULT's aspect-ratio adjustment.
    #[must_use]
    pub fn with_aspect_ratio(self, aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio,
            ..self
        }
    }

    /// Sets the BALANCED/LOGARITHMIC sensitivity.
    #[must_use]
    pub fn with_sensitivity(self, sensitivity: f64) -> Self {
        Self {
            sensitivity,
            ..self
        }
    }

    /// Sets the BALANCED transition point.
    #[must_use]
    pub fn with_transition_point(self, transition_point: f64) -> Self {
        Self {
            transition_point,
            ..self
        }
    }

    /// Sets the POWER exponent.
    #[must_use]
    pub fn with_exponent(self, exponent: f64) -> Self {
        Self { exponent, ..self }
    }

    /// Sets the FLUID configuration.
    #[must_use]
    pub fn with_fluid(self, fluid: impl Into<Fluid>) -> Self {
        Self {
            fluid: Some(fluid.into()),
            ..self
        }
    }

    /// Sets the AUTOSIZE configuration.
    #[must_use]
    pub fn with_auto_size(self, auto_size: AutoSize) -> Self {
        Self {
            auto_size: Some(auto_size),
            ..self
        }
    }

    /// Sets the AUTOSIZE container.
    #[must_use]
    pub fn with_container(self, container: Size) -> Self {
        Self {
            container: Some(container),
            ..self
        }
    }

    /// The screen type after orientation correction.
    #[inline]
    #[must_use]
    pub fn effective_screen_type(&self, snapshot: &ScreenSnapshot) -> ScreenType {
        self.screen_type.for_orientation(self.orientation, snapshot)
    }
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Applies `strategy` to the resolved base value `x`.
///
/// # Errors
///
/// - [`ScaleError::InvalidBreakpoints`] for a FLUID range with
///   `min_width >= max_width`, or an AUTOSIZE container range likewise.
/// - [`ScaleError::InvalidAutoSizeRange`], [`ScaleError::EmptyPresets`] or
///   [`ScaleError::InvalidPreset`] for a misconfigured AUTOSIZE.
///
/// Zero-sized snapshots are not errors; ratio-based formulas yield 0.
pub fn apply(
    strategy: StrategyId,
    x: f64,
    snapshot: &ScreenSnapshot,
    reference: &Reference,
    params: &StrategyParams,
) -> Result<f64, ScaleError> {
    let dim = snapshot.dimension(params.effective_screen_type(snapshot));
    let w0 = reference.width();
    let (w, h) = (snapshot.width(), snapshot.height());

    let out = match strategy {
        StrategyId::None => x,
        StrategyId::Percentage => x * (dim / w0),
        StrategyId::Default => {
            let linear = 1.0 + (dim - w0) * BASE_INCREMENT;
            x * linear * params.aspect_ratio.adjustment(snapshot)
        }
        StrategyId::Balanced => x * balanced_factor(dim, w0, params),
        StrategyId::Logarithmic => {
            let ratio = (dim / w0).max(1.0);
            x * (1.0 + params.sensitivity * ratio.ln())
        }
        StrategyId::Power => x * (dim / w0).powf(params.exponent),
        StrategyId::Fluid => fluid(x, dim, params.fluid.as_ref())?,
        StrategyId::Interpolated => x + (x * dim / w0 - x) * INTERPOLATED_BLEND,
        StrategyId::Diagonal => x * snapshot.diagonal() / reference.diagonal(),
        StrategyId::Perimeter => x * snapshot.perimeter() / reference.perimeter(),
        StrategyId::Fit => x * (w / w0).min(h / reference.height()),
        StrategyId::Fill => x * (w / w0).max(h / reference.height()),
        StrategyId::AutoSize => auto_size(x, params)?,
    };
    Ok(out)
}

fn balanced_factor(dim: f64, w0: f64, params: &StrategyParams) -> f64 {
    let tp = params.transition_point;
    if dim < tp {
        dim / w0
    } else {
        BALANCED_LOG_BASE + params.sensitivity * (1.0 + (dim - tp) / w0).ln()
    }
}

fn fluid(x: f64, dim: f64, config: Option<&Fluid>) -> Result<f64, ScaleError> {
    let range = match config {
        Some(config) => {
            config.validate()?;
            *config.select(dim)
        }
        None => FluidRange::around(x),
    };
    Ok(range.interpolate(dim))
}

fn auto_size(x: f64, params: &StrategyParams) -> Result<f64, ScaleError> {
    let Some(container) = params.container else {
        return Ok(x);
    };
    match &params.auto_size {
        Some(config) => config.fit(container),
        None => {
            let (lo, hi) = (x * 0.5, x * 2.0);
            let available = container.width.min(container.height);
            Ok(clamp_lerp(
                available,
                DEFAULT_MIN_WIDTH,
                DEFAULT_MAX_WIDTH,
                lo.min(hi),
                lo.max(hi),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::FluidDeviceType;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn snap(w: f64, h: f64) -> ScreenSnapshot {
        ScreenSnapshot::new(w, h, 2.0)
    }

    fn run(strategy: StrategyId, x: f64, s: &ScreenSnapshot, r: &Reference) -> f64 {
        apply(strategy, x, s, r, &StrategyParams::default()).unwrap()
    }

    #[test]
    fn none_is_identity() {
        for s in [snap(0.0, 0.0), snap(320.0, 480.0), snap(2560.0, 1440.0)] {
            for x in [0.0, 1.0, 48.0, -7.5] {
                assert_eq!(run(StrategyId::None, x, &s, &Reference::COMPACT), x);
            }
        }
    }

    #[test]
    fn percentage_scenario() {
        let r = Reference::PHONE_DP;
        assert_eq!(run(StrategyId::Percentage, 48.0, &snap(720.0, 1280.0), &r), 96.0);
    }

    #[test]
    fn percentage_is_linear_in_portrait() {
        let r = Reference::PHONE_DP;
        for w in [0.0, 180.0, 360.0, 412.0, 600.0] {
            let s = snap(w, 640.0);
            assert!(close(run(StrategyId::Percentage, 10.0, &s, &r), 10.0 * w / 360.0));
        }
    }

    #[test]
    fn default_is_identity_on_reference() {
        let r = Reference::new(300.0, 534.0).unwrap();
        // AR = 1.78 exactly, so arAdj = 1.
        let s = snap(300.0, 534.0);
        assert!(close(run(StrategyId::Default, 16.0, &s, &r), 16.0));
    }

    #[test]
    fn default_grows_about_a_third_percent_per_unit() {
        let r = Reference::COMPACT;
        let params = StrategyParams::new().with_aspect_ratio(AspectRatio::OFF);
        let s = snap(360.0, 640.0);
        let out = apply(StrategyId::Default, 100.0, &s, &r, &params).unwrap();
        assert!(close(out, 100.0 * (1.0 + 60.0 * BASE_INCREMENT)));
        assert!(close(out, 120.0));
    }

    #[test]
    fn default_aspect_ratio_adjustment() {
        let r = Reference::COMPACT;
        let s = snap(360.0, 800.0);
        let ar: f64 = 800.0 / 360.0;
        let linear = 1.0 + 60.0 * BASE_INCREMENT;
        let expected = 10.0 * linear * (1.0 + DEFAULT_AR_SENSITIVITY * (ar / 1.78).ln());
        assert!(close(run(StrategyId::Default, 10.0, &s, &r), expected));

        let custom = StrategyParams::new().with_aspect_ratio(AspectRatio::with_sensitivity(0.5));
        let out = apply(StrategyId::Default, 10.0, &s, &r, &custom).unwrap();
        let expected = 10.0 * linear * (1.0 + 0.5 * (ar / 1.78).ln());
        assert!(close(out, expected));
    }

    #[test]
    fn default_handles_aspect_ratio_below_reference() {
        // Square screen: AR = 1 < 1.78, so the log term is negative but finite.
        let out = run(StrategyId::Default, 10.0, &snap(300.0, 300.0), &Reference::COMPACT);
        assert!(out < 10.0);
        assert!(out.is_finite());
    }

    #[test]
    fn balanced_is_linear_below_transition() {
        let r = Reference::COMPACT;
        assert!(close(run(StrategyId::Balanced, 10.0, &snap(360.0, 640.0), &r), 12.0));
        assert!(close(run(StrategyId::Balanced, 10.0, &snap(479.0, 900.0), &r), 10.0 * 479.0 / 300.0));
    }

    #[test]
    fn balanced_boundary_uses_log_branch() {
        let r = Reference::COMPACT;
        // At exactly the transition point the log branch applies: 1.6 + s * ln(1).
        assert!(close(run(StrategyId::Balanced, 10.0, &snap(480.0, 900.0), &r), 16.0));

        // With a 360 reference the linear branch ends at 479/360 ≈ 1.33 but the
        // log branch starts at 1.6.
        let r = Reference::PHONE_DP;
        let below = run(StrategyId::Balanced, 10.0, &snap(479.0, 900.0), &r);
        let at = run(StrategyId::Balanced, 10.0, &snap(480.0, 900.0), &r);
        assert!(close(below, 10.0 * 479.0 / 360.0));
        assert!(close(at, 16.0));
    }

    #[test]
    fn balanced_log_branch() {
        let r = Reference::COMPACT;
        let out = run(StrategyId::Balanced, 10.0, &snap(780.0, 1280.0), &r);
        let expected = 10.0 * (1.6 + 0.4 * (1.0 + 300.0 / 300.0_f64).ln());
        assert!(close(out, expected));
    }

    #[test]
    fn logarithmic_clamps_small_screens() {
        let r = Reference::COMPACT;
        assert!(close(run(StrategyId::Logarithmic, 10.0, &snap(200.0, 400.0), &r), 10.0));
        let out = run(StrategyId::Logarithmic, 10.0, &snap(600.0, 1000.0), &r);
        assert!(close(out, 10.0 * (1.0 + 0.4 * 2.0_f64.ln())));
    }

    #[test]
    fn power_uses_exponent() {
        let r = Reference::COMPACT;
        let s = snap(1200.0, 1920.0);
        assert!(close(run(StrategyId::Power, 10.0, &s, &r), 10.0 * 4.0_f64.powf(0.75)));
        let p = StrategyParams::new().with_exponent(0.5);
        assert!(close(apply(StrategyId::Power, 10.0, &s, &r, &p).unwrap(), 20.0));
    }

    #[test]
    fn interpolated_is_halfway() {
        let r = Reference::PHONE_DP;
        let s = snap(720.0, 1280.0);
        let pct = run(StrategyId::Percentage, 48.0, &s, &r);
        assert!(close(run(StrategyId::Interpolated, 48.0, &s, &r), (48.0 + pct) / 2.0));
    }

    #[test]
    fn diagonal_and_perimeter() {
        let r = Reference::PHONE_DP;
        let s = snap(720.0, 1280.0);
        assert!(close(run(StrategyId::Diagonal, 10.0, &s, &r), 20.0));
        assert!(close(run(StrategyId::Perimeter, 10.0, &s, &r), 20.0));
    }

    #[test]
    fn fit_and_fill_pick_axis_ratios() {
        let r = Reference::PHONE_DP;
        let s = snap(720.0, 960.0);
        assert!(close(run(StrategyId::Fit, 10.0, &s, &r), 15.0));
        assert!(close(run(StrategyId::Fill, 10.0, &s, &r), 20.0));
    }

    #[test]
    fn fit_never_exceeds_fill() {
        let r = Reference::PHONE_DP;
        for (w, h) in [(320.0, 480.0), (360.0, 640.0), (1280.0, 720.0), (0.0, 900.0)] {
            let s = snap(w, h);
            assert!(run(StrategyId::Fit, 10.0, &s, &r) <= run(StrategyId::Fill, 10.0, &s, &r));
        }
    }

    #[test]
    fn monotone_in_width_at_reference_height() {
        let r = Reference::PHONE_DP;
        for strategy in [
            StrategyId::Percentage,
            StrategyId::Fit,
            StrategyId::Fill,
            StrategyId::Diagonal,
            StrategyId::Perimeter,
        ] {
            let mut prev = f64::NEG_INFINITY;
            for step in 0..=40 {
                let w = f64::from(step) * 40.0;
                let out = run(strategy, 16.0, &snap(w, 640.0), &r);
                assert!(out >= prev, "{strategy} decreased at W={w}");
                prev = out;
            }
        }
    }

    #[test]
    fn zero_sized_screen_propagates_zero() {
        let r = Reference::PHONE_DP;
        let s = snap(0.0, 0.0);
        for strategy in [
            StrategyId::Percentage,
            StrategyId::Power,
            StrategyId::Diagonal,
            StrategyId::Perimeter,
            StrategyId::Fit,
            StrategyId::Fill,
        ] {
            assert_eq!(run(strategy, 48.0, &s, &r), 0.0, "{strategy}");
        }
    }

    #[test]
    fn fluid_scenario() {
        let range = FluidRange::new(16.0, 32.0).with_breakpoints(320.0, 768.0);
        let p = StrategyParams::new().with_fluid(range);
        let out = apply(StrategyId::Fluid, 0.0, &snap(544.0, 960.0), &Reference::COMPACT, &p).unwrap();
        assert_eq!(out, 24.0);
    }

    #[test]
    fn fluid_clamps_at_breakpoints() {
        let p = StrategyParams::new().with_fluid(FluidRange::new(16.0, 32.0));
        let r = Reference::COMPACT;
        for w in [100.0, 320.0] {
            assert_eq!(apply(StrategyId::Fluid, 0.0, &snap(w, 2000.0), &r, &p).unwrap(), 16.0);
        }
        for w in [768.0, 1500.0] {
            assert_eq!(apply(StrategyId::Fluid, 0.0, &snap(w, 2000.0), &r, &p).unwrap(), 32.0);
        }
    }

    #[test]
    fn fluid_without_config_brackets_base() {
        let r = Reference::COMPACT;
        assert!(close(run(StrategyId::Fluid, 20.0, &snap(320.0, 640.0), &r), 16.0));
        assert!(close(run(StrategyId::Fluid, 20.0, &snap(900.0, 1600.0), &r), 24.0));
    }

    #[test]
    fn fluid_rejects_inverted_breakpoints() {
        let range = FluidRange::new(16.0, 32.0).with_breakpoints(768.0, 320.0);
        let p = StrategyParams::new().with_fluid(range);
        let err = apply(StrategyId::Fluid, 0.0, &snap(500.0, 900.0), &Reference::COMPACT, &p);
        assert_eq!(
            err,
            Err(ScaleError::InvalidBreakpoints {
                min: 768.0,
                max: 320.0
            })
        );
    }

    #[test]
    fn fluid_device_range() {
        let fluid = Fluid::new(FluidRange::new(14.0, 18.0))
            .device(FluidDeviceType::Tablet, FluidRange::new(40.0, 40.0));
        let p = StrategyParams::new().with_fluid(fluid);
        let r = Reference::COMPACT;
        assert_eq!(apply(StrategyId::Fluid, 0.0, &snap(700.0, 1000.0), &r, &p).unwrap(), 40.0);
        assert_eq!(apply(StrategyId::Fluid, 0.0, &snap(320.0, 640.0), &r, &p).unwrap(), 14.0);
    }

    #[test]
    fn autosize_without_container_is_identity() {
        let p = StrategyParams::new().with_auto_size(AutoSize::uniform(10.0, 20.0));
        let out = apply(StrategyId::AutoSize, 15.0, &snap(400.0, 800.0), &Reference::COMPACT, &p).unwrap();
        assert_eq!(out, 15.0);
    }

    #[test]
    fn autosize_uses_container() {
        let p = StrategyParams::new()
            .with_auto_size(AutoSize::uniform(10.0, 20.0))
            .with_container(Size::new(544.0, 600.0));
        let out = apply(StrategyId::AutoSize, 15.0, &snap(400.0, 800.0), &Reference::COMPACT, &p).unwrap();
        assert_eq!(out, 15.0);

        let implicit = StrategyParams::new().with_container(Size::new(768.0, 768.0));
        let out = apply(StrategyId::AutoSize, 15.0, &snap(400.0, 800.0), &Reference::COMPACT, &implicit).unwrap();
        assert_eq!(out, 30.0);
    }

    #[test]
    fn autosize_empty_presets_fail_fast() {
        let p = StrategyParams::new()
            .with_auto_size(AutoSize::presets([0.0_f64; 0]))
            .with_container(Size::new(300.0, 300.0));
        let err = apply(StrategyId::AutoSize, 15.0, &snap(400.0, 800.0), &Reference::COMPACT, &p);
        assert_eq!(err, Err(ScaleError::EmptyPresets));
    }

    #[test]
    fn autosize_implicit_range_accepts_zero_and_negative_bases() {
        let p = StrategyParams::new().with_container(Size::new(544.0, 544.0));
        let s = snap(400.0, 800.0);
        let zero = apply(StrategyId::AutoSize, 0.0, &s, &Reference::COMPACT, &p).unwrap();
        assert_eq!(zero, 0.0);
        // Bounds [-16, -4], container halfway along [320, 768].
        let negative = apply(StrategyId::AutoSize, -8.0, &s, &Reference::COMPACT, &p).unwrap();
        assert!(close(negative, -10.0), "got {negative}");
    }

    #[test]
    fn highest_screen_type_drives_by_long_side() {
        let r = Reference::PHONE_DP;
        let s = snap(720.0, 1280.0);
        let p = StrategyParams::new().with_screen_type(ScreenType::Highest);
        let out = apply(StrategyId::Percentage, 36.0, &s, &r, &p).unwrap();
        assert_eq!(out, 128.0);
    }

    #[test]
    fn landscape_design_on_portrait_screen_swaps_dimension() {
        let r = Reference::PHONE_DP;
        let s = snap(720.0, 1280.0);
        let p = StrategyParams::new().with_orientation(BaseOrientation::Landscape);
        let out = apply(StrategyId::Percentage, 36.0, &s, &r, &p).unwrap();
        assert_eq!(out, 128.0);
    }

    #[test]
    fn names_round_trip() {
        for s in StrategyId::ALL {
            assert_eq!(StrategyId::from_name(s.name()), Some(s));
            assert!(!s.description().is_empty());
            assert!(!s.formula().is_empty());
            assert!(!s.recommended_for().is_empty());
        }
        assert_eq!(StrategyId::from_name("balanced"), Some(StrategyId::Balanced));
        assert_eq!(StrategyId::from_name("nope"), None);
    }
}
