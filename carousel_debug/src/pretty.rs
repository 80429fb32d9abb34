// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use carousel_core::attributes::ItemAttributes;
use carousel_core::trace::{
    DecelerationEvent, HostUnavailableEvent, IndicatorEvent, LayoutPassEvent, SnapEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        let status = if e.recomputed { "recomputed" } else { "cached" };
        let _ = writeln!(
            self.writer,
            "[layout] {}x{} {} {status} spacing={:.1}",
            e.state.viewport_size.width,
            e.state.viewport_size.height,
            e.state.scroll_axis.as_str(),
            e.geometry.line_spacing,
        );
    }

    fn on_deceleration(&mut self, e: &DecelerationEvent) {
        let _ = writeln!(
            self.writer,
            "[decel] {} -> {}",
            e.previous.0, e.current.0,
        );
    }

    fn on_host_unavailable(&mut self, e: &HostUnavailableEvent) {
        let _ = writeln!(
            self.writer,
            "[skip] {}: host unavailable",
            e.operation.as_str(),
        );
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        let paging = if e.paging_enabled { " (paging)" } else { "" };
        let _ = writeln!(
            self.writer,
            "[snap] proposed={:.1} resolved={:.1} candidates={}{paging}",
            e.proposed, e.resolved, e.candidates,
        );
    }

    fn on_indicator(&mut self, e: &IndicatorEvent) {
        let _ = writeln!(
            self.writer,
            "[indicator] page={}/{} strategy={} dots={}",
            e.current_page,
            e.page_count,
            e.strategy.as_str(),
            e.dots_written,
        );
    }

    fn on_item_attributes(&mut self, items: &[ItemAttributes]) {
        let _ = writeln!(self.writer, "[items] count={}", items.len());
        for a in items {
            let _ = writeln!(
                self.writer,
                "  #{} scale={:.3} alpha={:.3} z={}",
                a.index, a.scale, a.opacity, a.stack_order,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::axis::ScrollAxis;
    use carousel_core::geometry::LayoutGeometry;
    use carousel_core::host::DecelerationRate;
    use carousel_core::indicator::IndicatorStrategy;
    use carousel_core::state::LayoutState;
    use carousel_core::trace::Operation;
    use kurbo::{Insets, Size};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_layout_pass() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_layout_pass(&LayoutPassEvent {
            state: LayoutState::new(Size::new(320.0, 480.0), ScrollAxis::Horizontal),
            recomputed: true,
            geometry: LayoutGeometry {
                insets: Insets::uniform_xy(0.0, 0.0),
                line_spacing: -160.0,
                scaled_item_offset: 0.0,
            },
        });
        let output = output(sink);
        assert_eq!(
            output, "[layout] 320x480 horizontal recomputed spacing=-160.0\n",
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_snap_and_skip() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_host_unavailable(&HostUnavailableEvent {
            operation: Operation::Prepare,
        });
        sink.on_snap(&SnapEvent {
            proposed: 63.5,
            resolved: 63.5,
            candidates: 0,
            paging_enabled: true,
        });
        let output = output(sink);
        assert!(output.contains("[skip] prepare"), "got: {output}");
        assert!(output.contains("(paging)"), "got: {output}");
    }

    #[test]
    fn pretty_print_decel_and_indicator() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_deceleration(&DecelerationEvent {
            previous: DecelerationRate::NORMAL,
            current: DecelerationRate::FAST,
        });
        sink.on_indicator(&IndicatorEvent {
            page_count: 5,
            current_page: 2,
            strategy: IndicatorStrategy::SubviewOverlay,
            dots_written: 5,
        });
        let output = output(sink);
        assert!(output.contains("[decel] 0.998 -> 0.99"), "got: {output}");
        assert!(
            output.contains("page=2/5 strategy=overlay dots=5"),
            "got: {output}"
        );
    }
}
