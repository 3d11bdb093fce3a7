// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes a pretty-printed document of the form
//!
//! ```text
//! { "events": [ { "type": "scale", ... }, ... ] }
//! ```
//!
//! with one object per event, in recording order.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{Record, decode};

/// Converts one decoded record to its JSON object.
#[must_use]
pub fn record_to_json(record: &Record) -> Value {
    match record {
        Record::Resolve(e) => json!({
            "type": "resolve",
            "base": e.base,
            "resolved": e.resolved,
            "tier": e.tier.name(),
        }),
        Record::Inference(e) => json!({
            "type": "inference",
            "element": e.element.name(),
            "strategy": e.strategy.name(),
            "weight": e.weight,
        }),
        Record::Scale(e) => json!({
            "type": "scale",
            "strategy": e.strategy.name(),
            "input": e.input,
            "output": e.output,
            "bypassed": e.bypassed,
        }),
        Record::Cache(e) => json!({
            "type": "cache",
            "kind": e.kind.name(),
            "entries": e.entries,
        }),
    }
}

/// Exports recorded events as a JSON document.
///
/// Non-finite values are written as `null`.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|r| record_to_json(&r)).collect();
    serde_json::to_writer_pretty(writer, &json!({ "events": events }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use appdimens_core::resolve::ResolveTier;
    use appdimens_core::strategy::StrategyId;
    use appdimens_core::trace::{CacheEvent, CacheEventKind, ResolveEvent, ScaleEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_resolve(&ResolveEvent {
            base: 18.0,
            resolved: 22.0,
            tier: ResolveTier::Qualifier,
        });
        rec.on_scale(&ScaleEvent {
            strategy: StrategyId::Percentage,
            input: 22.0,
            output: 44.0,
            bypassed: false,
        });
        rec.on_cache(&CacheEvent {
            kind: CacheEventKind::Miss,
            entries: 1,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let events = parsed["events"].as_array().unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0]["type"], "resolve");
        assert_eq!(events[0]["tier"], "qualifier");
        assert_eq!(events[1]["strategy"], "PERCENTAGE");
        assert_eq!(events[1]["output"], 44.0);
        assert_eq!(events[2]["kind"], "miss");
        assert_eq!(events[2]["entries"], 1);
    }

    #[test]
    fn non_finite_values_become_null() {
        let mut rec = RecorderSink::new();
        rec.on_scale(&ScaleEvent {
            strategy: StrategyId::Default,
            input: f64::NAN,
            output: f64::NAN,
            bypassed: false,
        });
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert!(parsed["events"][0]["output"].is_null());
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, json!({ "events": [] }));
    }
}
