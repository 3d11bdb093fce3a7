// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for dimension calculations.
//!
//! This module provides a [`TraceSink`] trait with one method per event the
//! engine and the memo layer emit. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! The engine itself never logs; turning these events into text or files is
//! left to sinks such as those in `appdimens_debug`.

use crate::inference::ElementTag;
use crate::resolve::ResolveTier;
use crate::strategy::StrategyId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after qualifier resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveEvent {
    /// Base value before resolution.
    pub base: f64,
    /// Effective base value.
    pub resolved: f64,
    /// Tier that produced `resolved`.
    pub tier: ResolveTier,
}

/// Emitted when a strategy is inferred from an element tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferenceEvent {
    /// Element the dimension is for.
    pub element: ElementTag,
    /// Chosen strategy.
    pub strategy: StrategyId,
    /// Weight of the chosen candidate.
    pub weight: f64,
}

/// Emitted after a strategy formula runs (or is bypassed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleEvent {
    /// Strategy that was requested.
    pub strategy: StrategyId,
    /// Effective base value fed to the formula.
    pub input: f64,
    /// Final output, after constraints.
    pub output: f64,
    /// The formula was skipped for a constrained window.
    pub bypassed: bool,
}

/// What the memo layer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheEventKind {
    /// A stored result was returned.
    Hit,
    /// The result was computed and stored.
    Miss,
    /// The cache was skipped and the result computed directly.
    Bypass,
    /// All entries were dropped.
    Flush,
}

impl CacheEventKind {
    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Bypass => "bypass",
            Self::Flush => "flush",
        }
    }
}

/// Emitted by the memo layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEvent {
    /// What happened.
    pub kind: CacheEventKind,
    /// Entries held after the operation.
    pub entries: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from dimension calculations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after qualifier resolution.
    fn on_resolve(&mut self, e: &ResolveEvent) {
        _ = e;
    }

    /// Called when a strategy is inferred.
    fn on_inference(&mut self, e: &InferenceEvent) {
        _ = e;
    }

    /// Called after a strategy formula runs.
    fn on_scale(&mut self, e: &ScaleEvent) {
        _ = e;
    }

    /// Called on memo layer activity.
    fn on_cache(&mut self, e: &CacheEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ResolveEvent`].
    #[inline]
    pub fn resolve(&mut self, e: &ResolveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resolve(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InferenceEvent`].
    #[inline]
    pub fn inference(&mut self, e: &InferenceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_inference(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScaleEvent`].
    #[inline]
    pub fn scale(&mut self, e: &ScaleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scale(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CacheEvent`].
    #[inline]
    pub fn cache(&mut self, e: &CacheEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cache(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
