// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`Record`].
//!
//! Cache events store their entry count as a `u32`, saturating.

use appdimens_core::inference::ElementTag;
use appdimens_core::resolve::ResolveTier;
use appdimens_core::strategy::StrategyId;
use appdimens_core::trace::{
    CacheEvent, CacheEventKind, InferenceEvent, ResolveEvent, ScaleEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_RESOLVE: u8 = 1;
const TAG_INFERENCE: u8 = 2;
const TAG_SCALE: u8 = 3;
const TAG_CACHE: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_strategy(&mut self, s: StrategyId) {
        self.write_u8(s as u8);
    }
}

fn tier_code(t: ResolveTier) -> u8 {
    match t {
        ResolveTier::Intersection => 0,
        ResolveTier::UiMode => 1,
        ResolveTier::DeviceClass => 2,
        ResolveTier::Qualifier => 3,
        ResolveTier::Base => 4,
    }
}

fn cache_kind_code(k: CacheEventKind) -> u8 {
    match k {
        CacheEventKind::Hit => 0,
        CacheEventKind::Miss => 1,
        CacheEventKind::Bypass => 2,
        CacheEventKind::Flush => 3,
    }
}

impl TraceSink for RecorderSink {
    fn on_resolve(&mut self, e: &ResolveEvent) {
        self.write_u8(TAG_RESOLVE);
        self.write_f64(e.base);
        self.write_f64(e.resolved);
        self.write_u8(tier_code(e.tier));
    }

    fn on_inference(&mut self, e: &InferenceEvent) {
        self.write_u8(TAG_INFERENCE);
        self.write_u8(e.element as u8);
        self.write_strategy(e.strategy);
        self.write_f64(e.weight);
    }

    fn on_scale(&mut self, e: &ScaleEvent) {
        self.write_u8(TAG_SCALE);
        self.write_strategy(e.strategy);
        self.write_f64(e.input);
        self.write_f64(e.output);
        self.write_u8(u8::from(e.bypassed));
    }

    fn on_cache(&mut self, e: &CacheEvent) {
        self.write_u8(TAG_CACHE);
        self.write_u8(cache_kind_code(e.kind));
        #[expect(
            clippy::cast_possible_truncation,
            reason = "entry count capped at u32::MAX for recording"
        )]
        self.write_u32(e.entries.min(u32::MAX as usize) as u32);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Record {
    /// A [`ResolveEvent`].
    Resolve(ResolveEvent),
    /// An [`InferenceEvent`].
    Inference(InferenceEvent),
    /// A [`ScaleEvent`].
    Scale(ScaleEvent),
    /// A [`CacheEvent`].
    Cache(CacheEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`Record`].
///
/// Iteration stops at the first unknown tag, unknown enum code or truncated
/// record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        let [v] = self.read_array::<1>()?;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_array().map(f64::from_le_bytes)
    }

    fn read_strategy(&mut self) -> Option<StrategyId> {
        StrategyId::ALL.get(usize::from(self.read_u8()?)).copied()
    }

    fn read_element(&mut self) -> Option<ElementTag> {
        ElementTag::ALL.get(usize::from(self.read_u8()?)).copied()
    }

    fn read_tier(&mut self) -> Option<ResolveTier> {
        Some(match self.read_u8()? {
            0 => ResolveTier::Intersection,
            1 => ResolveTier::UiMode,
            2 => ResolveTier::DeviceClass,
            3 => ResolveTier::Qualifier,
            4 => ResolveTier::Base,
            _ => return None,
        })
    }

    fn read_cache_kind(&mut self) -> Option<CacheEventKind> {
        Some(match self.read_u8()? {
            0 => CacheEventKind::Hit,
            1 => CacheEventKind::Miss,
            2 => CacheEventKind::Bypass,
            3 => CacheEventKind::Flush,
            _ => return None,
        })
    }

    fn decode_resolve(&mut self) -> Option<Record> {
        Some(Record::Resolve(ResolveEvent {
            base: self.read_f64()?,
            resolved: self.read_f64()?,
            tier: self.read_tier()?,
        }))
    }

    fn decode_inference(&mut self) -> Option<Record> {
        Some(Record::Inference(InferenceEvent {
            element: self.read_element()?,
            strategy: self.read_strategy()?,
            weight: self.read_f64()?,
        }))
    }

    fn decode_scale(&mut self) -> Option<Record> {
        Some(Record::Scale(ScaleEvent {
            strategy: self.read_strategy()?,
            input: self.read_f64()?,
            output: self.read_f64()?,
            bypassed: self.read_u8()? != 0,
        }))
    }

    fn decode_cache(&mut self) -> Option<Record> {
        Some(Record::Cache(CacheEvent {
            kind: self.read_cache_kind()?,
            entries: usize::try_from(self.read_u32()?).ok()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_RESOLVE => self.decode_resolve(),
            TAG_INFERENCE => self.decode_inference(),
            TAG_SCALE => self.decode_scale(),
            TAG_CACHE => self.decode_cache(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use appdimens_core::config::EngineConfig;
    use appdimens_core::dimension::{Dimension, Engine};
    use appdimens_core::host::Environment;
    use appdimens_core::qualifier::QualifierEntry;
    use appdimens_core::screen::ScreenSnapshot;
    use appdimens_core::trace::Tracer;

    #[test]
    fn records_a_full_calculation() {
        let engine = Engine::new(EngineConfig::phone_dp());
        let env = Environment::new(ScreenSnapshot::new(720.0, 1280.0, 2.0));
        let d = Dimension::new(18.0)
            .infer(ElementTag::Card)
            .screen(QualifierEntry::smallest_width(600.0), 22.0);

        let mut rec = RecorderSink::new();
        let out = engine
            .compute_traced(&d, &env, &mut Tracer::new(&mut rec))
            .unwrap();
        assert_eq!(out, 44.0);

        let records: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            records,
            [
                Record::Resolve(ResolveEvent {
                    base: 18.0,
                    resolved: 22.0,
                    tier: ResolveTier::Qualifier,
                }),
                Record::Inference(InferenceEvent {
                    element: ElementTag::Card,
                    strategy: StrategyId::Percentage,
                    weight: 0.7,
                }),
                Record::Scale(ScaleEvent {
                    strategy: StrategyId::Percentage,
                    input: 22.0,
                    output: 44.0,
                    bypassed: false,
                }),
            ]
        );
    }

    #[test]
    fn every_strategy_and_tier_survives() {
        let mut rec = RecorderSink::new();
        for s in StrategyId::ALL {
            rec.on_scale(&ScaleEvent {
                strategy: s,
                input: 1.0,
                output: 2.0,
                bypassed: s == StrategyId::None,
            });
        }
        let decoded: Vec<_> = decode(rec.as_bytes())
            .map(|r| match r {
                Record::Scale(e) => e.strategy,
                other => panic!("expected Scale, got {other:?}"),
            })
            .collect();
        assert_eq!(decoded, StrategyId::ALL);
    }

    #[test]
    fn cache_entries_saturate() {
        let mut rec = RecorderSink::new();
        rec.on_cache(&CacheEvent {
            kind: CacheEventKind::Flush,
            entries: usize::MAX,
        });
        match decode(rec.as_bytes()).next() {
            Some(Record::Cache(e)) => {
                assert_eq!(e.kind, CacheEventKind::Flush);
                assert_eq!(e.entries as u64, u64::from(u32::MAX));
            }
            other => panic!("expected Cache, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_cache(&CacheEvent {
            kind: CacheEventKind::Hit,
            entries: 3,
        });
        rec.on_resolve(&ResolveEvent {
            base: 1.0,
            resolved: 1.0,
            tier: ResolveTier::Base,
        });
        let bytes = rec.into_bytes();
        let records: Vec<_> = decode(&bytes[..bytes.len() - 1]).collect();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        assert_eq!(decode(&[0xff, 1, 2, 3]).count(), 0);
        assert_eq!(decode(&[]).count(), 0);
    }
}
