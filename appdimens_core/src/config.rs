// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use crate::screen::Reference;

/// Default number of memoized results kept before the cache is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Configuration for an [`Engine`](crate::dimension::Engine) and its memo
/// layer.
///
/// There is no process-wide configuration; independent configurations can
/// coexist, which keeps tests isolated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Reference screen base values are authored against.
    pub reference: Reference,
    /// Whether the memo layer stores results.
    pub cache_enabled: bool,
    /// Maximum entries before the memo layer flushes.
    pub cache_capacity: usize,
}

impl EngineConfig {
    /// 300 × 533 reference, the library's historical default.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            reference: Reference::COMPACT,
            cache_enabled: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// 360 × 640 dp reference for Android designs.
    #[must_use]
    pub const fn phone_dp() -> Self {
        Self {
            reference: Reference::PHONE_DP,
            ..Self::compact()
        }
    }

    /// 375 × 667 pt reference for iOS designs.
    #[must_use]
    pub const fn phone_pt() -> Self {
        Self {
            reference: Reference::PHONE_PT,
            ..Self::compact()
        }
    }

    /// Returns the configuration with a different reference screen.
    #[must_use]
    pub const fn with_reference(self, reference: Reference) -> Self {
        Self { reference, ..self }
    }

    /// Returns the configuration with memoization switched on or off.
    #[must_use]
    pub const fn with_cache(self, cache_enabled: bool) -> Self {
        Self {
            cache_enabled,
            ..self
        }
    }

    /// Returns the configuration with a different cache capacity.
    #[must_use]
    pub const fn with_cache_capacity(self, cache_capacity: usize) -> Self {
        Self {
            cache_capacity,
            ..self
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::compact()
    }
}
