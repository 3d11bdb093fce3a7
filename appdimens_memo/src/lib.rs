// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization for `appdimens_core` calculations.
//!
//! Layouts ask for the same handful of dimensions over and over. This crate
//! stores results under an exact [`CacheKey`] so repeated requests skip the
//! strategy math, without ever returning a value the engine would not have
//! produced for the same inputs.
//!
//! - [`MemoEngine`] wraps an [`Engine`](appdimens_core::dimension::Engine)
//!   and honors [`EngineConfig::cache_enabled`] and
//!   [`EngineConfig::cache_capacity`].
//! - [`MemoCache`] is the store: a `hashbrown` map behind a read-write lock,
//!   flushed wholesale when full, with hit and miss counters.
//!
//! Inputs containing NaN or infinities have no key and are always computed.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Forwards to `appdimens_core/trace`, so
//!   cache hits, misses, bypasses and flushes reach the caller's sink.
//!
//! [`EngineConfig::cache_enabled`]: appdimens_core::config::EngineConfig::cache_enabled
//! [`EngineConfig::cache_capacity`]: appdimens_core::config::EngineConfig::cache_capacity

mod cache;
mod engine;
mod key;

pub use cache::{CacheStats, MemoCache};
pub use engine::MemoEngine;
pub use key::CacheKey;
