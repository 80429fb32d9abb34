// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event. Every object carries an
//! `"event"` field naming the event kind; the remaining fields mirror the
//! event struct.

use std::io::Write;

use serde_json::{Value, json};

use carousel_core::attributes::ItemAttributes;
use carousel_core::trace::{
    DecelerationEvent, HostUnavailableEvent, IndicatorEvent, LayoutPassEvent, SnapEvent,
    TraceSink,
};

/// Writes one JSON object per event to a [`Write`](std::io::Write) destination.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        let _ = writeln!(self.writer, "{value}");
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        let insets = e.geometry.insets;
        self.emit(&json!({
            "event": "layout_pass",
            "viewport": [e.state.viewport_size.width, e.state.viewport_size.height],
            "axis": e.state.scroll_axis.as_str(),
            "recomputed": e.recomputed,
            "insets": [insets.x0, insets.y0, insets.x1, insets.y1],
            "line_spacing": e.geometry.line_spacing,
            "scaled_item_offset": e.geometry.scaled_item_offset,
        }));
    }

    fn on_deceleration(&mut self, e: &DecelerationEvent) {
        self.emit(&json!({
            "event": "deceleration",
            "previous": e.previous.0,
            "current": e.current.0,
        }));
    }

    fn on_host_unavailable(&mut self, e: &HostUnavailableEvent) {
        self.emit(&json!({
            "event": "host_unavailable",
            "operation": e.operation.as_str(),
        }));
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        self.emit(&json!({
            "event": "snap",
            "proposed": e.proposed,
            "resolved": e.resolved,
            "candidates": e.candidates,
            "paging_enabled": e.paging_enabled,
        }));
    }

    fn on_indicator(&mut self, e: &IndicatorEvent) {
        self.emit(&json!({
            "event": "indicator",
            "page_count": e.page_count,
            "current_page": e.current_page,
            "strategy": e.strategy.as_str(),
            "dots_written": e.dots_written,
        }));
    }

    fn on_item_attributes(&mut self, items: &[ItemAttributes]) {
        let items: Vec<Value> = items
            .iter()
            .map(|a| {
                json!({
                    "index": a.index,
                    "frame": [a.frame.x0, a.frame.y0, a.frame.x1, a.frame.y1],
                    "center_offset": [a.center_offset.x, a.center_offset.y],
                    "scale": a.scale,
                    "opacity": a.opacity,
                    "stack_order": a.stack_order,
                    "depth": a.transform.translation_z(),
                })
            })
            .collect();
        self.emit(&json!({
            "event": "item_attributes",
            "items": items,
        }));
    }
}
