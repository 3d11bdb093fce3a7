// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Write errors
//! are ignored.

use std::io::Write;

use appdimens_core::trace::{CacheEvent, InferenceEvent, ResolveEvent, ScaleEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    precision: usize,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination, printing values
    /// with two decimals.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            precision: 2,
        }
    }

    /// Returns the sink with a different number of decimals.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_resolve(&mut self, e: &ResolveEvent) {
        let p = self.precision;
        let _ = writeln!(
            self.writer,
            "[resolve] base={:.p$} -> {:.p$} tier={}",
            e.base,
            e.resolved,
            e.tier.name(),
        );
    }

    fn on_inference(&mut self, e: &InferenceEvent) {
        let _ = writeln!(
            self.writer,
            "[infer] element={} strategy={} weight={:.2}",
            e.element, e.strategy, e.weight,
        );
    }

    fn on_scale(&mut self, e: &ScaleEvent) {
        let p = self.precision;
        if e.bypassed {
            let _ = writeln!(
                self.writer,
                "[scale] {} bypassed (constrained window) value={:.p$}",
                e.strategy, e.output,
            );
        } else {
            let _ = writeln!(
                self.writer,
                "[scale] {} {:.p$} -> {:.p$}",
                e.strategy, e.input, e.output,
            );
        }
    }

    fn on_cache(&mut self, e: &CacheEvent) {
        let _ = writeln!(
            self.writer,
            "[cache] {} entries={}",
            e.kind.name(),
            e.entries,
        );
    }
}
