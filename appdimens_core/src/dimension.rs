// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension requests and the engine that evaluates them.
//!
//! A [`Dimension`] bundles everything a single responsive size needs: the
//! base value, a strategy (explicit or inferred from an element tag), the
//! strategy parameters, output constraints and an override table. Every
//! builder method consumes the request and returns a new one, so a request
//! can be cloned and specialized without affecting the original.
//!
//! [`Engine::compute`] evaluates a request against an [`Environment`]:
//!
//! 1. resolve the override table to an effective base value,
//! 2. infer the strategy if the request names an element instead,
//! 3. return the effective base unchanged if the window is constrained and
//!    the request opted out of scaling there,
//! 4. otherwise apply the strategy and clamp to the constraints.

use kurbo::Size;

use crate::ScaleError;
use crate::autosize::AutoSize;
use crate::config::EngineConfig;
use crate::device::{DeviceClass, UiModeClass};
use crate::fluid::Fluid;
use crate::host::Environment;
use crate::inference::{ElementTag, InferenceContext, infer_with_context};
use crate::qualifier::{OverrideTable, QualifierEntry};
use crate::resolve::resolve_with_tier;
use crate::screen::{BaseOrientation, Reference, ScreenType};
use crate::strategy::{AspectRatio, StrategyId, StrategyParams, apply};
use crate::trace::{InferenceEvent, ResolveEvent, ScaleEvent, Tracer};

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Optional bounds applied to a strategy's output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Lower bound.
    pub min: Option<f64>,
    /// Upper bound.
    pub max: Option<f64>,
}

impl Constraints {
    /// No bounds.
    pub const NONE: Self = Self {
        min: None,
        max: None,
    };

    /// Returns `true` if either bound is set.
    #[inline]
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Clamps `value`. The lower bound is applied first, so the upper bound
    /// wins if the two cross.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min {
            v = v.max(min);
        }
        if let Some(max) = self.max {
            v = v.min(max);
        }
        v
    }
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// How a request picks its strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyChoice {
    /// Use this strategy.
    Explicit(StrategyId),
    /// Infer from the element and the environment.
    Infer(ElementTag),
}

impl Default for StrategyChoice {
    fn default() -> Self {
        Self::Explicit(StrategyId::Default)
    }
}

/// A responsive dimension request.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    base: f64,
    choice: StrategyChoice,
    params: StrategyParams,
    constraints: Constraints,
    overrides: OverrideTable,
    ignore_constrained_window: bool,
}

impl Dimension {
    /// A DEFAULT-strategy request for `base`.
    #[must_use]
    pub const fn new(base: f64) -> Self {
        Self {
            base,
            choice: StrategyChoice::Explicit(StrategyId::Default),
            params: StrategyParams::new(),
            constraints: Constraints::NONE,
            overrides: OverrideTable::new(),
            ignore_constrained_window: false,
        }
    }

    /// Uses `strategy`.
    #[must_use]
    pub fn strategy(self, strategy: StrategyId) -> Self {
        Self {
            choice: StrategyChoice::Explicit(strategy),
            ..self
        }
    }

    /// Infers the strategy for `element` at compute time.
    #[must_use]
    pub fn infer(self, element: ElementTag) -> Self {
        Self {
            choice: StrategyChoice::Infer(element),
            ..self
        }
    }

    /// Replaces all strategy parameters.
    #[must_use]
    pub fn params(self, params: StrategyParams) -> Self {
        Self { params, ..self }
    }

    /// Sets the screen type.
    #[must_use]
    pub fn screen_type(self, screen_type: ScreenType) -> Self {
        self.map_params(|p| p.with_screen_type(screen_type))
    }

    /// Sets the authored orientation.
    #[must_use]
    pub fn orientation(self, orientation: BaseOrientation) -> Self {
        self.map_params(|p| p.with_orientation(orientation))
    }

    /// Sets DEFAULT's aspect-ratio adjustment.
    #[must_use]
    pub fn aspect_ratio(self, aspect_ratio: AspectRatio) -> Self {
        self.map_params(|p| p.with_aspect_ratio(aspect_ratio))
    }

    /// Sets the BALANCED/LOGARITHMIC sensitivity.
    #[must_use]
    pub fn sensitivity(self, sensitivity: f64) -> Self {
        self.map_params(|p| p.with_sensitivity(sensitivity))
    }

    /// Sets the BALANCED transition point.
    #[must_use]
    pub fn transition_point(self, transition_point: f64) -> Self {
        self.map_params(|p| p.with_transition_point(transition_point))
    }

    /// Sets the POWER exponent.
    #[must_use]
    pub fn exponent(self, exponent: f64) -> Self {
        self.map_params(|p| p.with_exponent(exponent))
    }

    /// Switches to FLUID with the given configuration.
    ///
    /// An inferred strategy stays inferred; the configuration then nudges
    /// inference toward FLUID.
    #[must_use]
    pub fn fluid(self, fluid: impl Into<Fluid>) -> Self {
        let fluid = fluid.into();
        let d = self.map_params(|p| p.with_fluid(fluid));
        match d.choice {
            StrategyChoice::Infer(_) => d,
            StrategyChoice::Explicit(_) => d.strategy(StrategyId::Fluid),
        }
    }

    /// Switches to AUTOSIZE with the given configuration.
    #[must_use]
    pub fn auto_size(self, auto_size: AutoSize) -> Self {
        self.map_params(|p| p.with_auto_size(auto_size))
            .strategy(StrategyId::AutoSize)
    }

    /// Sets the AUTOSIZE container.
    #[must_use]
    pub fn container(self, container: Size) -> Self {
        self.map_params(|p| p.with_container(container))
    }

    /// Adds a screen-qualifier override.
    #[must_use]
    pub fn screen(self, entry: QualifierEntry, value: f64) -> Self {
        self.map_overrides(|t| t.screen(entry, value))
    }

    /// Adds a UI-mode override.
    #[must_use]
    pub fn ui_mode(self, ui_mode: UiModeClass, value: f64) -> Self {
        self.map_overrides(|t| t.ui_mode(ui_mode, value))
    }

    /// Adds a device-class override.
    #[must_use]
    pub fn device(self, class: DeviceClass, value: f64) -> Self {
        self.map_overrides(|t| t.device(class, value))
    }

    /// Adds a UI mode plus screen qualifier override.
    #[must_use]
    pub fn intersection(self, ui_mode: UiModeClass, entry: QualifierEntry, value: f64) -> Self {
        self.map_overrides(|t| t.intersection(ui_mode, entry, value))
    }

    /// Replaces the override table.
    #[must_use]
    pub fn overrides(self, overrides: OverrideTable) -> Self {
        Self { overrides, ..self }
    }

    /// Sets a lower bound on the output.
    #[must_use]
    pub fn min(self, min: f64) -> Self {
        let constraints = Constraints {
            min: Some(min),
            ..self.constraints
        };
        Self {
            constraints,
            ..self
        }
    }

    /// Sets an upper bound on the output.
    #[must_use]
    pub fn max(self, max: f64) -> Self {
        let constraints = Constraints {
            max: Some(max),
            ..self.constraints
        };
        Self {
            constraints,
            ..self
        }
    }

    /// Skips scaling in constrained (multi-window) windows.
    #[must_use]
    pub fn ignore_constrained_window(self, ignore: bool) -> Self {
        Self {
            ignore_constrained_window: ignore,
            ..self
        }
    }

    /// Base value before resolution.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Strategy selection.
    #[inline]
    #[must_use]
    pub const fn choice(&self) -> StrategyChoice {
        self.choice
    }

    /// Strategy parameters.
    #[inline]
    #[must_use]
    pub const fn strategy_params(&self) -> &StrategyParams {
        &self.params
    }

    /// Output constraints.
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> Constraints {
        self.constraints
    }

    /// Override table.
    #[inline]
    #[must_use]
    pub const fn override_table(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Whether scaling is skipped in constrained windows.
    #[inline]
    #[must_use]
    pub const fn ignores_constrained_window(&self) -> bool {
        self.ignore_constrained_window
    }

    /// Evaluates this request with `engine`.
    ///
    /// # Errors
    ///
    /// See [`Engine::compute`].
    pub fn compute(&self, engine: &Engine, env: &Environment) -> Result<f64, ScaleError> {
        engine.compute(self, env)
    }

    fn map_params(self, f: impl FnOnce(StrategyParams) -> StrategyParams) -> Self {
        let Self {
            base,
            choice,
            params,
            constraints,
            overrides,
            ignore_constrained_window,
        } = self;
        Self {
            base,
            choice,
            params: f(params),
            constraints,
            overrides,
            ignore_constrained_window,
        }
    }

    fn map_overrides(self, f: impl FnOnce(OverrideTable) -> OverrideTable) -> Self {
        let Self {
            base,
            choice,
            params,
            constraints,
            overrides,
            ignore_constrained_window,
        } = self;
        Self {
            base,
            choice,
            params,
            constraints,
            overrides: f(overrides),
            ignore_constrained_window,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Evaluates [`Dimension`] requests.
///
/// The engine only holds its configuration, so it is `Copy`, `Send` and
/// `Sync` and can be shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The reference screen.
    #[inline]
    #[must_use]
    pub const fn reference(&self) -> &Reference {
        &self.config.reference
    }

    /// Evaluates a request.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaleError`] for a misconfigured FLUID or AUTOSIZE
    /// strategy. Qualifier resolution and degenerate screen sizes never fail.
    pub fn compute(&self, dimension: &Dimension, env: &Environment) -> Result<f64, ScaleError> {
        self.compute_traced(dimension, env, &mut Tracer::none())
    }

    /// Like [`compute`](Self::compute), reporting each stage to `tracer`.
    ///
    /// # Errors
    ///
    /// See [`compute`](Self::compute).
    pub fn compute_traced(
        &self,
        dimension: &Dimension,
        env: &Environment,
        tracer: &mut Tracer<'_>,
    ) -> Result<f64, ScaleError> {
        let snapshot = &env.snapshot;
        let resolution = resolve_with_tier(
            dimension.base,
            &dimension.overrides,
            snapshot,
            env.ui_mode,
            env.device_class,
        );
        tracer.resolve(&ResolveEvent {
            base: dimension.base,
            resolved: resolution.value,
            tier: resolution.tier,
        });

        let strategy = self.select_strategy(dimension, env, tracer);

        if dimension.ignore_constrained_window && env.is_constrained(&self.config.reference) {
            tracer.scale(&ScaleEvent {
                strategy,
                input: resolution.value,
                output: resolution.value,
                bypassed: true,
            });
            return Ok(resolution.value);
        }

        let raw = apply(
            strategy,
            resolution.value,
            snapshot,
            &self.config.reference,
            &dimension.params,
        )?;
        let output = dimension.constraints.apply(raw);
        tracer.scale(&ScaleEvent {
            strategy,
            input: resolution.value,
            output,
            bypassed: false,
        });
        Ok(output)
    }

    fn select_strategy(
        &self,
        dimension: &Dimension,
        env: &Environment,
        tracer: &mut Tracer<'_>,
    ) -> StrategyId {
        match dimension.choice {
            StrategyChoice::Explicit(strategy) => strategy,
            StrategyChoice::Infer(element) => {
                let ctx = InferenceContext::new(&env.snapshot, env.device_class)
                    .with_fluid_config(dimension.params.fluid.is_some())
                    .with_bounds(dimension.constraints.is_bounded());
                let pick = infer_with_context(element, &ctx);
                tracer.inference(&InferenceEvent {
                    element,
                    strategy: pick.strategy,
                    weight: pick.weight,
                });
                pick.strategy
            }
        }
    }
}
