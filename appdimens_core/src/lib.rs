// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive dimension scaling.
//!
//! `appdimens_core` maps a base size, authored against a reference screen,
//! to the size that should be used on the screen the app is actually running
//! on. It is `no_std` compatible (with `alloc`), performs no I/O, and holds no
//! shared mutable state: every operation is a pure function of its inputs and
//! is safe to call from any thread.
//!
//! # Architecture
//!
//! A dimension request flows through three stages:
//!
//! ```text
//!   DisplayHost ──► Environment (snapshot, ui mode, device class)
//!                        │
//!   Dimension ───────────┤
//!                        ▼
//!   resolve() ──► effective base ──► infer() (optional)
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   apply(StrategyId) ──► Constraints ──► f64 (logical units)
//! ```
//!
//! **[`screen`]**: Screen snapshot, reference screen, screen-type and
//! base-orientation selection.
//!
//! **[`device`]**: Device-class and UI-mode classification.
//!
//! **[`qualifier`]**: Qualifier entries and the immutable, priority-ordered
//! [`OverrideTable`](qualifier::OverrideTable).
//!
//! **[`resolve`]**: Picks the effective base value from an override table.
//!
//! **[`strategy`]**: The 13 scaling strategies, their parameters and the
//! [`apply`](strategy::apply) dispatch function.
//!
//! **[`fluid`]** and **[`autosize`]**: Clamp-interpolation configurations for
//! the FLUID and AUTOSIZE strategies.
//!
//! **[`inference`]**: Maps UI element tags to a recommended strategy.
//!
//! **[`dimension`]**: The [`Dimension`](dimension::Dimension) request builder
//! and the [`Engine`](dimension::Engine) that evaluates it.
//!
//! **[`host`]**: The [`DisplayHost`](host::DisplayHost) boundary trait
//! through which platforms supply live screen metrics.
//!
//! **[`config`]**: [`EngineConfig`](config::EngineConfig) presets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! Converting the returned value to pixels, points or scaled text units is
//! the caller's job.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support here and in
//!   dependencies. Without it, float math goes through `kurbo`'s `libm`
//!   backed functions.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod autosize;
pub mod config;
pub mod device;
pub mod dimension;
pub mod error;
pub mod fluid;
pub mod host;
pub mod inference;
pub mod qualifier;
pub mod resolve;
pub mod screen;
pub mod strategy;
pub mod trace;

pub use error::ScaleError;
