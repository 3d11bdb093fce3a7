// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoizing wrapper around [`Engine`].

use appdimens_core::ScaleError;
use appdimens_core::config::EngineConfig;
use appdimens_core::dimension::{Dimension, Engine};
use appdimens_core::host::Environment;
use appdimens_core::trace::{CacheEvent, CacheEventKind, Tracer};

use crate::cache::{CacheStats, MemoCache};
use crate::key::CacheKey;

/// An [`Engine`] whose results are memoized.
///
/// Results are identical to the wrapped engine's whether the cache is on,
/// off, cold or warm. `MemoEngine` is `Sync`; share it by reference across
/// threads.
#[derive(Debug)]
pub struct MemoEngine {
    engine: Engine,
    cache: MemoCache,
}

impl MemoEngine {
    /// Creates an engine with a cache sized from `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Engine::new(config),
            cache: MemoCache::new(config.cache_capacity),
        }
    }

    /// The wrapped engine.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The result store.
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }

    /// Cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Evaluates a request, consulting the cache first.
    ///
    /// # Errors
    ///
    /// See [`Engine::compute`].
    pub fn compute(&self, dimension: &Dimension, env: &Environment) -> Result<f64, ScaleError> {
        self.compute_traced(dimension, env, &mut Tracer::none())
    }

    /// Like [`compute`](Self::compute), reporting engine and cache events to
    /// `tracer`. Engine events are only emitted when the result is computed.
    ///
    /// # Errors
    ///
    /// See [`Engine::compute`].
    pub fn compute_traced(
        &self,
        dimension: &Dimension,
        env: &Environment,
        tracer: &mut Tracer<'_>,
    ) -> Result<f64, ScaleError> {
        let config = self.engine.config();
        if !config.cache_enabled {
            let value = self.engine.compute_traced(dimension, env, tracer)?;
            tracer.cache(&CacheEvent {
                kind: CacheEventKind::Bypass,
                entries: self.cache.len(),
            });
            return Ok(value);
        }
        let key = CacheKey::new(dimension, env, &config.reference);
        self.cache.memoize(key, tracer, |tracer| {
            self.engine.compute_traced(dimension, env, tracer)
        })
    }

    /// Frees cached results after an environment change. Returns `true` if
    /// anything was cleared.
    pub fn on_environment_change(&self, old: &Environment, new: &Environment) -> bool {
        self.cache.invalidate_on_change(old, new)
    }
}

impl Default for MemoEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdimens_core::autosize::AutoSize;
    use appdimens_core::device::UiModeClass;
    use appdimens_core::fluid::FluidRange;
    use appdimens_core::inference::ElementTag;
    use appdimens_core::qualifier::QualifierEntry;
    use appdimens_core::screen::ScreenSnapshot;
    use appdimens_core::strategy::StrategyId;
    use kurbo::Size;

    fn requests() -> Vec<Dimension> {
        let mut out: Vec<_> = StrategyId::ALL
            .iter()
            .map(|&s| Dimension::new(16.0).strategy(s))
            .collect();
        out.push(
            Dimension::new(18.0)
                .strategy(StrategyId::Percentage)
                .screen(QualifierEntry::smallest_width(600.0), 22.0),
        );
        out.push(Dimension::new(14.0).fluid(FluidRange::new(12.0, 20.0)));
        out.push(
            Dimension::new(14.0)
                .auto_size(AutoSize::uniform(10.0, 30.0))
                .container(Size::new(500.0, 200.0)),
        );
        out.push(Dimension::new(24.0).infer(ElementTag::Card).max(40.0));
        out.push(Dimension::new(24.0).ui_mode(UiModeClass::Television, 32.0));
        out
    }

    fn envs() -> [Environment; 3] {
        [
            Environment::new(ScreenSnapshot::new(360.0, 640.0, 2.0)),
            Environment::new(ScreenSnapshot::new(800.0, 1280.0, 2.0)),
            Environment::with_ui_mode(
                ScreenSnapshot::new(960.0, 540.0, 2.0),
                UiModeClass::Television,
            ),
        ]
    }

    #[test]
    fn cache_is_transparent() {
        let on = MemoEngine::new(EngineConfig::phone_dp());
        let off = MemoEngine::new(EngineConfig::phone_dp().with_cache(false));
        let plain = Engine::new(EngineConfig::phone_dp());
        for env in &envs() {
            for d in &requests() {
                let expected = plain.compute(d, env).unwrap();
                // Cold, then warm.
                assert_eq!(on.compute(d, env).unwrap(), expected);
                assert_eq!(on.compute(d, env).unwrap(), expected);
                assert_eq!(off.compute(d, env).unwrap(), expected);
            }
        }
        let n = (requests().len() * envs().len()) as u64;
        assert_eq!(on.stats().hits, n);
        assert_eq!(on.stats().misses, n);
        assert!(off.cache().is_empty());
    }

    #[test]
    fn disabled_cache_never_counts() {
        let off = MemoEngine::new(EngineConfig::default().with_cache(false));
        let env = envs()[0];
        off.compute(&Dimension::new(10.0), &env).unwrap();
        off.compute(&Dimension::new(10.0), &env).unwrap();
        assert_eq!(off.stats().hits + off.stats().misses, 0);
    }

    #[test]
    fn errors_pass_through() {
        let engine = MemoEngine::default();
        let bad = Dimension::new(14.0)
            .auto_size(AutoSize::presets([0.0_f64; 0]))
            .container(Size::new(100.0, 100.0));
        let env = envs()[0];
        assert_eq!(engine.compute(&bad, &env), Err(ScaleError::EmptyPresets));
        assert_eq!(engine.compute(&bad, &env), Err(ScaleError::EmptyPresets));
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn concurrent_callers_agree() {
        let engine = MemoEngine::new(EngineConfig::phone_dp().with_cache_capacity(16));
        let plain = Engine::new(EngineConfig::phone_dp());
        let requests = requests();
        let envs = envs();
        std::thread::scope(|s| {
            for t in 0..8 {
                let (engine, requests, envs) = (&engine, &requests, &envs);
                s.spawn(move || {
                    for i in 0..200 {
                        let d = &requests[(i + t) % requests.len()];
                        let env = &envs[i % envs.len()];
                        let expected = plain.compute(d, env).unwrap();
                        assert_eq!(engine.compute(d, env).unwrap(), expected);
                    }
                });
            }
        });
        assert!(engine.cache().len() <= 16);
    }

    #[test]
    fn rotation_frees_entries() {
        let engine = MemoEngine::default();
        let [portrait, ..] = envs();
        let landscape = Environment::new(ScreenSnapshot::new(640.0, 360.0, 2.0));
        engine.compute(&Dimension::new(16.0), &portrait).unwrap();
        assert!(engine.on_environment_change(&portrait, &landscape));
        assert!(engine.cache().is_empty());
        assert!(!engine.on_environment_change(&landscape, &landscape));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn cache_events_are_traced() {
        use appdimens_core::trace::{ScaleEvent, TraceSink};

        #[derive(Default)]
        struct Sink {
            kinds: Vec<CacheEventKind>,
            scales: usize,
        }
        impl TraceSink for Sink {
            fn on_scale(&mut self, _: &ScaleEvent) {
                self.scales += 1;
            }
            fn on_cache(&mut self, e: &CacheEvent) {
                self.kinds.push(e.kind);
            }
        }

        let engine = MemoEngine::new(EngineConfig::default().with_cache_capacity(1));
        let env = envs()[0];
        let mut sink = Sink::default();
        let mut tracer = Tracer::new(&mut sink);
        for base in [1.0, 1.0, 2.0] {
            engine
                .compute_traced(&Dimension::new(base), &env, &mut tracer)
                .unwrap();
        }
        drop(tracer);
        assert_eq!(
            sink.kinds,
            [
                CacheEventKind::Miss,
                CacheEventKind::Hit,
                CacheEventKind::Flush,
                CacheEventKind::Miss
            ]
        );
        assert_eq!(sink.scales, 2);
    }
}
