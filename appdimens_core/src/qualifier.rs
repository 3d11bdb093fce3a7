// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qualifiers and override tables.
//!
//! A qualifier is a condition on the live screen ("smallest width ≥ 600") or
//! on the platform's classification ("running on a television"). An
//! [`OverrideTable`] pairs conditions with replacement base values. Tables
//! are built by chaining calls that each consume the table and return a new
//! one, so a table that has been handed to a resolver can never change
//! underneath it.

use alloc::vec::Vec;

use crate::device::{DeviceClass, UiModeClass};
use crate::resolve::ResolveTier;
use crate::screen::ScreenSnapshot;

// ---------------------------------------------------------------------------
// QualifierEntry
// ---------------------------------------------------------------------------

/// Which screen metric a qualifier compares against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    /// `min(width, height)`.
    SmallWidth,
    /// Window height.
    Height,
    /// Window width.
    Width,
}

impl QualifierKind {
    /// Reads this metric from a snapshot.
    #[inline]
    #[must_use]
    pub fn metric(self, snapshot: &ScreenSnapshot) -> f64 {
        match self {
            Self::SmallWidth => snapshot.smallest(),
            Self::Height => snapshot.height(),
            Self::Width => snapshot.width(),
        }
    }
}

/// "Applies when the `kind` metric is at least `threshold`."
///
/// Zero and negative thresholds are legal and always match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualifierEntry {
    /// Metric compared.
    pub kind: QualifierKind,
    /// Inclusive lower bound, in logical units.
    pub threshold: f64,
}

impl QualifierEntry {
    /// Creates a qualifier entry.
    #[inline]
    #[must_use]
    pub const fn new(kind: QualifierKind, threshold: f64) -> Self {
        Self { kind, threshold }
    }

    /// `smallest ≥ threshold`.
    #[inline]
    #[must_use]
    pub const fn smallest_width(threshold: f64) -> Self {
        Self::new(QualifierKind::SmallWidth, threshold)
    }

    /// `width ≥ threshold`.
    #[inline]
    #[must_use]
    pub const fn width(threshold: f64) -> Self {
        Self::new(QualifierKind::Width, threshold)
    }

    /// `height ≥ threshold`.
    #[inline]
    #[must_use]
    pub const fn height(threshold: f64) -> Self {
        Self::new(QualifierKind::Height, threshold)
    }

    /// Returns `true` if the snapshot satisfies this qualifier.
    #[inline]
    #[must_use]
    pub fn matches(&self, snapshot: &ScreenSnapshot) -> bool {
        self.kind.metric(snapshot) >= self.threshold
    }
}

// ---------------------------------------------------------------------------
// Condition / Override
// ---------------------------------------------------------------------------

/// When an override applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    /// A UI mode combined with a screen qualifier (most specific).
    Intersection {
        /// Required UI mode.
        ui_mode: UiModeClass,
        /// Required screen qualifier.
        entry: QualifierEntry,
    },
    /// A UI mode alone.
    UiMode(UiModeClass),
    /// A device class alone.
    DeviceClass(DeviceClass),
    /// A screen qualifier alone (least specific).
    Qualifier(QualifierEntry),
}

impl Condition {
    /// The resolver tier that evaluates this condition.
    #[must_use]
    pub const fn tier(&self) -> ResolveTier {
        match self {
            Self::Intersection { .. } => ResolveTier::Intersection,
            Self::UiMode(_) => ResolveTier::UiMode,
            Self::DeviceClass(_) => ResolveTier::DeviceClass,
            Self::Qualifier(_) => ResolveTier::Qualifier,
        }
    }
}

/// A condition and the base value that replaces the default when it holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Override {
    /// When this override applies.
    pub condition: Condition,
    /// Replacement base value.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// OverrideTable
// ---------------------------------------------------------------------------

/// Insertion-ordered collection of overrides.
///
/// Priority ordering is applied by [`resolve`](crate::resolve::resolve), not
/// by the table; the table only remembers insertion order for tie-breaking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverrideTable {
    entries: Vec<Override>,
}

impl OverrideTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the table with one more override appended.
    #[must_use]
    pub fn with(mut self, condition: Condition, value: f64) -> Self {
        self.entries.push(Override { condition, value });
        self
    }

    /// Adds a screen-qualifier override.
    #[must_use]
    pub fn screen(self, entry: QualifierEntry, value: f64) -> Self {
        self.with(Condition::Qualifier(entry), value)
    }

    /// Adds a UI-mode override.
    #[must_use]
    pub fn ui_mode(self, ui_mode: UiModeClass, value: f64) -> Self {
        self.with(Condition::UiMode(ui_mode), value)
    }

    /// Adds a device-class override.
    #[must_use]
    pub fn device(self, class: DeviceClass, value: f64) -> Self {
        self.with(Condition::DeviceClass(class), value)
    }

    /// Adds a UI mode plus screen qualifier override.
    #[must_use]
    pub fn intersection(self, ui_mode: UiModeClass, entry: QualifierEntry, value: f64) -> Self {
        self.with(Condition::Intersection { ui_mode, entry }, value)
    }

    /// Number of overrides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no overrides.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overrides in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Override] {
        &self.entries
    }

    /// Iterates overrides in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Override> {
        self.entries.iter()
    }
}

impl FromIterator<Override> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = Override>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OverrideTable {
    type Item = &'a Override;
    type IntoIter = core::slice::Iter<'a, Override>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
