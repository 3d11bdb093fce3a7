// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact cache keys.
//!
//! A [`CacheKey`] is a flat word encoding of every input that can affect a
//! calculation: the request (base, strategy, parameters, constraints,
//! overrides), the environment and the reference screen. Floats are stored by
//! bit pattern, and every optional or variable-length section carries a tag or
//! length word, so two keys compare equal only if the inputs do. Hash
//! collisions therefore cost a probe, never a wrong result.

use appdimens_core::autosize::{AutoSize, AutoSizeMode};
use appdimens_core::dimension::{Dimension, StrategyChoice};
use appdimens_core::fluid::{Fluid, FluidRange};
use appdimens_core::host::Environment;
use appdimens_core::qualifier::{Condition, QualifierEntry};
use appdimens_core::screen::Reference;
use appdimens_core::strategy::StrategyParams;

/// Exact identity of one calculation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(Vec<u64>);

impl CacheKey {
    /// Encodes a calculation.
    ///
    /// Returns `None` if any float input is NaN or infinite; such requests are
    /// computed directly instead of cached.
    #[must_use]
    pub fn new(dimension: &Dimension, env: &Environment, reference: &Reference) -> Option<Self> {
        let mut w = KeyWriter::with_capacity(48 + 4 * dimension.override_table().len());

        w.float(dimension.base());
        match dimension.choice() {
            StrategyChoice::Explicit(s) => w.words(&[0, s as u64]),
            StrategyChoice::Infer(tag) => w.words(&[1, tag as u64]),
        }
        w.params(dimension.strategy_params());

        let c = dimension.constraints();
        w.opt_float(c.min);
        w.opt_float(c.max);
        w.word(u64::from(dimension.ignores_constrained_window()));

        let table = dimension.override_table();
        w.count(table.len());
        for o in table {
            w.condition(&o.condition);
            w.float(o.value);
        }

        w.float(env.snapshot.width());
        w.float(env.snapshot.height());
        w.float(env.snapshot.scale_factor);
        w.words(&[
            env.ui_mode as u64,
            env.device_class as u64,
            u64::from(env.constrained_window),
        ]);

        w.float(reference.width());
        w.float(reference.height());

        w.finish()
    }

    /// Number of encoded words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a key encodes at least the base value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct KeyWriter {
    words: Vec<u64>,
    finite: bool,
}

impl KeyWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            finite: true,
        }
    }

    fn word(&mut self, w: u64) {
        self.words.push(w);
    }

    fn words(&mut self, ws: &[u64]) {
        self.words.extend_from_slice(ws);
    }

    fn count(&mut self, n: usize) {
        self.word(n as u64);
    }

    fn float(&mut self, v: f64) {
        self.finite &= v.is_finite();
        self.word(v.to_bits());
    }

    fn opt_float(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.word(1);
                self.float(v);
            }
            None => self.word(0),
        }
    }

    fn params(&mut self, p: &StrategyParams) {
        self.words(&[p.screen_type as u64, p.orientation as u64]);
        self.word(u64::from(p.aspect_ratio.enabled));
        self.float(p.aspect_ratio.sensitivity);
        self.float(p.sensitivity);
        self.float(p.transition_point);
        self.float(p.exponent);

        match &p.fluid {
            Some(f) => {
                self.word(1);
                self.fluid(f);
            }
            None => self.word(0),
        }
        match &p.auto_size {
            Some(a) => {
                self.word(1);
                self.auto_size(a);
            }
            None => self.word(0),
        }
        match p.container {
            Some(size) => {
                self.word(1);
                self.float(size.width);
                self.float(size.height);
            }
            None => self.word(0),
        }
    }

    fn range(&mut self, r: &FluidRange) {
        self.float(r.min_value);
        self.float(r.max_value);
        self.float(r.min_width);
        self.float(r.max_width);
    }

    fn fluid(&mut self, f: &Fluid) {
        self.range(f.default_range());
        self.count(f.screens().len());
        for (min_width, r) in f.screens() {
            self.float(*min_width);
            self.range(r);
        }
        self.count(f.devices().len());
        for (device, r) in f.devices() {
            self.word(*device as u64);
            self.range(r);
        }
    }

    fn auto_size(&mut self, a: &AutoSize) {
        match &a.mode {
            AutoSizeMode::Uniform { min, max } => {
                self.word(0);
                self.float(*min);
                self.float(*max);
            }
            AutoSizeMode::Presets(presets) => {
                self.word(1);
                self.count(presets.len());
                for p in presets {
                    self.float(*p);
                }
            }
        }
        self.float(a.min_container);
        self.float(a.max_container);
    }

    fn entry(&mut self, e: &QualifierEntry) {
        self.word(e.kind as u64);
        self.float(e.threshold);
    }

    fn condition(&mut self, c: &Condition) {
        match c {
            Condition::Intersection { ui_mode, entry } => {
                self.words(&[0, *ui_mode as u64]);
                self.entry(entry);
            }
            Condition::UiMode(m) => self.words(&[1, *m as u64]),
            Condition::DeviceClass(d) => self.words(&[2, *d as u64]),
            Condition::Qualifier(entry) => {
                self.word(3);
                self.entry(entry);
            }
        }
    }

    fn finish(self) -> Option<CacheKey> {
        self.finite.then_some(CacheKey(self.words))
    }
}
