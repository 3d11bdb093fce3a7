// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host boundary.
//!
//! Platforms implement [`DisplayHost`] to hand the engine live screen
//! metrics. The engine never queries the platform itself: callers take an
//! [`Environment`] snapshot once per calculation (or per layout pass) and
//! pass it in.

use crate::device::{DeviceClass, UiModeClass};
use crate::screen::{Reference, ScreenSnapshot};

/// Supplies live screen metrics and classifications.
///
/// # Implementing
///
/// Only [`snapshot`](DisplayHost::snapshot) is required. The remaining
/// methods have defaults that suit a plain phone: normal UI mode, a device
/// class derived from the smallest screen side, and no multi-window
/// detection.
pub trait DisplayHost {
    /// Current window size and scale factor.
    fn snapshot(&self) -> ScreenSnapshot;

    /// Current UI mode.
    fn ui_mode(&self) -> UiModeClass {
        UiModeClass::Normal
    }

    /// Current device class.
    fn device_class(&self) -> DeviceClass {
        DeviceClass::classify(self.snapshot().smallest(), self.ui_mode())
    }

    /// Whether the app runs in split-screen, freeform or a similar reduced
    /// window.
    fn is_constrained_window(&self) -> bool {
        false
    }
}

/// Everything the engine needs to know about the running device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Screen metrics.
    pub snapshot: ScreenSnapshot,
    /// UI mode.
    pub ui_mode: UiModeClass,
    /// Device class.
    pub device_class: DeviceClass,
    /// Platform-reported multi-window state.
    pub constrained_window: bool,
}

impl Environment {
    /// Environment for a normal-mode device, classified from the snapshot.
    #[must_use]
    pub fn new(snapshot: ScreenSnapshot) -> Self {
        Self::with_ui_mode(snapshot, UiModeClass::Normal)
    }

    /// Environment for the given UI mode, classified from the snapshot.
    #[must_use]
    pub fn with_ui_mode(snapshot: ScreenSnapshot, ui_mode: UiModeClass) -> Self {
        Self {
            snapshot,
            ui_mode,
            device_class: DeviceClass::classify(snapshot.smallest(), ui_mode),
            constrained_window: false,
        }
    }

    /// Captures the current state of a host.
    #[must_use]
    pub fn capture(host: &(impl DisplayHost + ?Sized)) -> Self {
        Self {
            snapshot: host.snapshot(),
            ui_mode: host.ui_mode(),
            device_class: host.device_class(),
            constrained_window: host.is_constrained_window(),
        }
    }

    /// Returns the environment with the platform's multi-window flag set.
    #[must_use]
    pub const fn constrained(self, constrained_window: bool) -> Self {
        Self {
            constrained_window,
            ..self
        }
    }

    /// Whether scaling should be skipped for a reduced window.
    ///
    /// True when the platform reports one, or when either side of the window
    /// is narrower than the reference width.
    #[must_use]
    pub fn is_constrained(&self, reference: &Reference) -> bool {
        self.constrained_window
            || self.snapshot.width() < reference.width()
            || self.snapshot.height() < reference.width()
    }
}

/// A [`DisplayHost`] backed by fixed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticDisplay {
    /// Reported snapshot.
    pub snapshot: ScreenSnapshot,
    /// Reported UI mode.
    pub ui_mode: UiModeClass,
    /// Reported device class, or `None` to classify from the snapshot.
    pub device_class: Option<DeviceClass>,
    /// Reported multi-window state.
    pub constrained_window: bool,
}

impl StaticDisplay {
    /// A normal-mode display with the given snapshot.
    #[must_use]
    pub const fn new(snapshot: ScreenSnapshot) -> Self {
        Self {
            snapshot,
            ui_mode: UiModeClass::Normal,
            device_class: None,
            constrained_window: false,
        }
    }
}

impl DisplayHost for StaticDisplay {
    fn snapshot(&self) -> ScreenSnapshot {
        self.snapshot
    }

    fn ui_mode(&self) -> UiModeClass {
        self.ui_mode
    }

    fn device_class(&self) -> DeviceClass {
        self.device_class
            .unwrap_or_else(|| DeviceClass::classify(self.snapshot.smallest(), self.ui_mode))
    }

    fn is_constrained_window(&self) -> bool {
        self.constrained_window
    }
}
