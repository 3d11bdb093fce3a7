// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smart strategy inference.
//!
//! [`infer_strategy`] is a fixed lookup from an [`ElementTag`] to a
//! strategy. [`infer_weighted`] additionally considers the screen and
//! configuration: each element and context rule contributes a weighted
//! candidate, and the heaviest candidate wins. The weights are heuristics,
//! not a contract.

use alloc::vec::Vec;
use core::fmt;

use crate::device::DeviceClass;
use crate::screen::ScreenSnapshot;
use crate::strategy::StrategyId;

/// Kind of UI element a dimension is for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// A button.
    Button,
    /// Text.
    Text,
    /// An icon.
    Icon,
    /// A layout container.
    Container,
    /// Padding or margins.
    Spacing,
    /// No specific kind.
    #[default]
    Generic,
    /// A card.
    Card,
    /// A dialog.
    Dialog,
    /// A toolbar or app bar.
    Toolbar,
    /// A floating action button.
    Fab,
    /// A chip.
    Chip,
    /// A list row.
    ListItem,
    /// An image.
    Image,
    /// A badge.
    Badge,
    /// A divider line.
    Divider,
    /// Navigation chrome.
    Navigation,
    /// A text field.
    Input,
    /// A header.
    Header,
}

impl ElementTag {
    /// Every element tag, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Button,
        Self::Text,
        Self::Icon,
        Self::Container,
        Self::Spacing,
        Self::Generic,
        Self::Card,
        Self::Dialog,
        Self::Toolbar,
        Self::Fab,
        Self::Chip,
        Self::ListItem,
        Self::Image,
        Self::Badge,
        Self::Divider,
        Self::Navigation,
        Self::Input,
        Self::Header,
    ];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Text => "text",
            Self::Icon => "icon",
            Self::Container => "container",
            Self::Spacing => "spacing",
            Self::Generic => "generic",
            Self::Card => "card",
            Self::Dialog => "dialog",
            Self::Toolbar => "toolbar",
            Self::Fab => "fab",
            Self::Chip => "chip",
            Self::ListItem => "list_item",
            Self::Image => "image",
            Self::Badge => "badge",
            Self::Divider => "divider",
            Self::Navigation => "navigation",
            Self::Input => "input",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The context-free recommendation for an element.
#[must_use]
pub const fn infer_strategy(tag: ElementTag) -> StrategyId {
    match tag {
        ElementTag::Button | ElementTag::Spacing | ElementTag::Dialog | ElementTag::Header => {
            StrategyId::Balanced
        }
        ElementTag::Text | ElementTag::Chip | ElementTag::Input => StrategyId::Fluid,
        ElementTag::Container | ElementTag::Card | ElementTag::ListItem | ElementTag::Image => {
            StrategyId::Percentage
        }
        ElementTag::Divider => StrategyId::None,
        ElementTag::Icon
        | ElementTag::Toolbar
        | ElementTag::Fab
        | ElementTag::Badge
        | ElementTag::Navigation
        | ElementTag::Generic => StrategyId::Default,
    }
}

// ---------------------------------------------------------------------------
// Context-aware inference
// ---------------------------------------------------------------------------

/// What the context-aware inference looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferenceContext {
    /// Smallest screen side.
    pub smallest: f64,
    /// Largest screen side.
    pub largest: f64,
    /// Device class.
    pub device_class: DeviceClass,
    /// The request carries a FLUID configuration.
    pub has_fluid_config: bool,
    /// The request carries min/max output constraints.
    pub has_bounds: bool,
}

impl InferenceContext {
    /// Context for a snapshot with no fluid configuration and no bounds.
    #[must_use]
    pub fn new(snapshot: &ScreenSnapshot, device_class: DeviceClass) -> Self {
        Self {
            smallest: snapshot.smallest(),
            largest: snapshot.largest(),
            device_class,
            has_fluid_config: false,
            has_bounds: false,
        }
    }

    /// Sets whether a FLUID configuration is present.
    #[must_use]
    pub const fn with_fluid_config(self, has_fluid_config: bool) -> Self {
        Self {
            has_fluid_config,
            ..self
        }
    }

    /// Sets whether output bounds are present.
    #[must_use]
    pub const fn with_bounds(self, has_bounds: bool) -> Self {
        Self { has_bounds, ..self }
    }
}

/// A weighted candidate strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyWeight {
    /// Candidate strategy.
    pub strategy: StrategyId,
    /// Weight in `[0, 1]`.
    pub weight: f64,
    /// Why the candidate was added.
    pub reason: &'static str,
}

impl StrategyWeight {
    const fn new(strategy: StrategyId, weight: f64, reason: &'static str) -> Self {
        Self {
            strategy,
            weight,
            reason,
        }
    }
}

fn element_weight(tag: ElementTag, ctx: &InferenceContext) -> Option<StrategyWeight> {
    use StrategyId as S;
    let large = ctx.device_class.is_large_screen();
    let w = match tag {
        ElementTag::Button if large => StrategyWeight::new(S::Balanced, 0.7, "Button on tablet+"),
        ElementTag::Button => StrategyWeight::new(S::Default, 0.6, "Button on phone"),
        ElementTag::Text => StrategyWeight::new(S::Fluid, 0.8, "Text content"),
        ElementTag::Icon => StrategyWeight::new(S::Default, 0.7, "Icon element"),
        ElementTag::Container => StrategyWeight::new(S::Percentage, 0.7, "Container element"),
        ElementTag::Spacing if large => StrategyWeight::new(S::Balanced, 0.6, "Spacing on tablet+"),
        ElementTag::Spacing => StrategyWeight::new(S::Default, 0.5, "Spacing on phone"),
        ElementTag::Card => StrategyWeight::new(S::Percentage, 0.7, "Card container"),
        ElementTag::Dialog => StrategyWeight::new(S::Balanced, 0.7, "Dialog element"),
        ElementTag::Toolbar => StrategyWeight::new(S::Default, 0.6, "Toolbar element"),
        ElementTag::Fab => StrategyWeight::new(S::Default, 0.7, "FAB element"),
        ElementTag::Chip => StrategyWeight::new(S::Fluid, 0.6, "Chip element"),
        ElementTag::ListItem => StrategyWeight::new(S::Percentage, 0.6, "List item"),
        ElementTag::Image => StrategyWeight::new(S::Percentage, 0.7, "Image element"),
        ElementTag::Badge => StrategyWeight::new(S::Default, 0.6, "Badge element"),
        ElementTag::Divider => StrategyWeight::new(S::None, 0.7, "Divider (constant)"),
        ElementTag::Navigation => StrategyWeight::new(S::Default, 0.6, "Navigation element"),
        ElementTag::Input => StrategyWeight::new(S::Fluid, 0.7, "Input field"),
        ElementTag::Header => StrategyWeight::new(S::Balanced, 0.6, "Header element"),
        ElementTag::Generic => return None,
    };
    Some(w)
}

fn device_weight(class: DeviceClass) -> StrategyWeight {
    use StrategyId as S;
    match class {
        DeviceClass::TabletLarge | DeviceClass::Tv => {
            StrategyWeight::new(S::Balanced, 0.5, "Large screen device")
        }
        DeviceClass::TabletSmall => StrategyWeight::new(S::Balanced, 0.4, "Tablet device"),
        DeviceClass::PhoneLarge => StrategyWeight::new(S::Balanced, 0.3, "Large phone"),
        DeviceClass::PhoneSmall => StrategyWeight::new(S::Default, 0.4, "Small phone"),
        _ => StrategyWeight::new(S::Default, 0.3, "Default for device"),
    }
}

/// Candidates in rule order: element, fluid configuration, bounds, device.
fn candidates(tag: ElementTag, ctx: &InferenceContext) -> impl Iterator<Item = StrategyWeight> {
    let fluid = ctx
        .has_fluid_config
        .then_some(StrategyWeight::new(StrategyId::Fluid, 0.9, "Has fluid config"));
    let bounds = ctx
        .has_bounds
        .then_some(StrategyWeight::new(StrategyId::Fluid, 0.6, "Has bounds"));
    element_weight(tag, ctx)
        .into_iter()
        .chain(fluid)
        .chain(bounds)
        .chain(Some(device_weight(ctx.device_class)))
}

/// All candidates for `tag` in `ctx`, heaviest first.
///
/// Equal weights keep rule order, so the head of the list is always the
/// [`infer_with_context`] pick.
#[must_use]
pub fn infer_weighted(tag: ElementTag, ctx: &InferenceContext) -> Vec<StrategyWeight> {
    let mut weights: Vec<_> = candidates(tag, ctx).collect();
    weights.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    weights
}

/// The heaviest candidate for `tag` in `ctx`.
#[must_use]
pub fn infer_with_context(tag: ElementTag, ctx: &InferenceContext) -> StrategyWeight {
    candidates(tag, ctx)
        .reduce(|best, w| if w.weight > best.weight { w } else { best })
        .unwrap_or_else(|| device_weight(ctx.device_class))
}
