// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qualifier resolution.
//!
//! [`resolve`] picks the effective base value for a dimension request. Tiers
//! are evaluated strictly in order and the first tier that produces a value
//! wins:
//!
//! 1. UI mode plus screen qualifier, highest matching threshold first.
//! 2. UI mode alone.
//! 3. Device class alone.
//! 4. Screen qualifier alone, highest matching threshold first.
//! 5. The base value itself.
//!
//! Within the threshold tiers, equal thresholds are broken by insertion
//! order (earliest wins). UI-mode and device-class entries behave like map
//! keys: adding the same key twice replaces the earlier value.

use crate::device::{DeviceClass, UiModeClass};
use crate::qualifier::{Condition, OverrideTable, QualifierEntry};
use crate::screen::ScreenSnapshot;

/// Which tier of the resolver produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveTier {
    /// UI mode plus screen qualifier.
    Intersection,
    /// UI mode alone.
    UiMode,
    /// Device class alone.
    DeviceClass,
    /// Screen qualifier alone.
    Qualifier,
    /// No override matched.
    Base,
}

impl ResolveTier {
    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intersection => "intersection",
            Self::UiMode => "ui_mode",
            Self::DeviceClass => "device_class",
            Self::Qualifier => "qualifier",
            Self::Base => "base",
        }
    }
}

/// Outcome of a resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// The effective base value.
    pub value: f64,
    /// The tier that produced it.
    pub tier: ResolveTier,
}

/// Returns the effective base value for `base` under `overrides`.
///
/// An empty table always returns `base`.
#[must_use]
pub fn resolve(
    base: f64,
    overrides: &OverrideTable,
    snapshot: &ScreenSnapshot,
    ui_mode: UiModeClass,
    device_class: DeviceClass,
) -> f64 {
    resolve_with_tier(base, overrides, snapshot, ui_mode, device_class).value
}

/// Like [`resolve`], but also reports which tier matched.
#[must_use]
pub fn resolve_with_tier(
    base: f64,
    overrides: &OverrideTable,
    snapshot: &ScreenSnapshot,
    ui_mode: UiModeClass,
    device_class: DeviceClass,
) -> Resolution {
    if overrides.is_empty() {
        return Resolution {
            value: base,
            tier: ResolveTier::Base,
        };
    }

    let intersection = best_threshold(overrides, snapshot, |c| match c {
        Condition::Intersection { ui_mode: m, entry } if *m == ui_mode => Some(*entry),
        _ => None,
    });
    if let Some(value) = intersection {
        return Resolution {
            value,
            tier: ResolveTier::Intersection,
        };
    }

    let by_ui_mode = last_keyed(overrides, |c| matches!(c, Condition::UiMode(m) if *m == ui_mode));
    if let Some(value) = by_ui_mode {
        return Resolution {
            value,
            tier: ResolveTier::UiMode,
        };
    }

    let by_device = last_keyed(
        overrides,
        |c| matches!(c, Condition::DeviceClass(d) if *d == device_class),
    );
    if let Some(value) = by_device {
        return Resolution {
            value,
            tier: ResolveTier::DeviceClass,
        };
    }

    let qualifier = best_threshold(overrides, snapshot, |c| match c {
        Condition::Qualifier(entry) => Some(*entry),
        _ => None,
    });
    if let Some(value) = qualifier {
        return Resolution {
            value,
            tier: ResolveTier::Qualifier,
        };
    }

    Resolution {
        value: base,
        tier: ResolveTier::Base,
    }
}

/// Highest matching threshold among the entries `select` picks out.
///
/// Scanning in insertion order and replacing only on a strictly greater
/// threshold keeps the earliest of equal thresholds.
fn best_threshold(
    overrides: &OverrideTable,
    snapshot: &ScreenSnapshot,
    select: impl Fn(&Condition) -> Option<QualifierEntry>,
) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for o in overrides {
        let Some(entry) = select(&o.condition) else {
            continue;
        };
        if !entry.matches(snapshot) {
            continue;
        }
        if best.is_none_or(|(threshold, _)| entry.threshold > threshold) {
            best = Some((entry.threshold, o.value));
        }
    }
    best.map(|(_, value)| value)
}

fn last_keyed(overrides: &OverrideTable, is_key: impl Fn(&Condition) -> bool) -> Option<f64> {
    overrides
        .iter()
        .rev()
        .find(|o| is_key(&o.condition))
        .map(|o| o.value)
}
