// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! engine and the page indicator call as they run. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates the per-item attribute event and
//!   the corresponding `TraceSink` method.

#[cfg(feature = "trace-rich")]
use crate::attributes::ItemAttributes;
use crate::geometry::LayoutGeometry;
use crate::host::DecelerationRate;
use crate::indicator::IndicatorStrategy;
use crate::state::LayoutState;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which engine operation an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`CarouselLayout::prepare`](crate::engine::CarouselLayout::prepare).
    Prepare,
    /// Single-item or batch attribute computation.
    Attributes,
    /// Snap target resolution on drag end.
    TargetContentOffset,
}

impl Operation {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Attributes => "attributes",
            Self::TargetContentOffset => "target-offset",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted on every layout pass that reached an attached host.
#[derive(Clone, Copy, Debug)]
pub struct LayoutPassEvent {
    /// The state observed on this pass.
    pub state: LayoutState,
    /// Whether insets and spacing were recomputed (the state changed).
    pub recomputed: bool,
    /// Geometry in effect after the pass.
    pub geometry: LayoutGeometry,
}

/// Emitted when the engine changes the host's deceleration preset.
#[derive(Clone, Copy, Debug)]
pub struct DecelerationEvent {
    /// Preset before the change.
    pub previous: DecelerationRate,
    /// Preset after the change.
    pub current: DecelerationRate,
}

/// Emitted when an operation was skipped because the host was not attached.
#[derive(Clone, Copy, Debug)]
pub struct HostUnavailableEvent {
    /// The skipped operation.
    pub operation: Operation,
}

/// Emitted after a drag-end snap target was resolved.
#[derive(Clone, Copy, Debug)]
pub struct SnapEvent {
    /// Proposed main-axis offset.
    pub proposed: f64,
    /// Resolved main-axis offset.
    pub resolved: f64,
    /// Number of items considered.
    pub candidates: usize,
    /// Whether native paging was on (resolution is a passthrough).
    pub paging_enabled: bool,
}

/// Emitted after a page indicator pushed its dots to a presenter.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorEvent {
    /// Number of pages.
    pub page_count: usize,
    /// Current page.
    pub current_page: usize,
    /// How the dots were written.
    pub strategy: IndicatorStrategy,
    /// Number of dots written.
    pub dots_written: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the carousel components.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after each layout pass.
    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        _ = e;
    }

    /// Called when the deceleration preset was changed.
    fn on_deceleration(&mut self, e: &DecelerationEvent) {
        _ = e;
    }

    /// Called when an operation was skipped for lack of a host.
    fn on_host_unavailable(&mut self, e: &HostUnavailableEvent) {
        _ = e;
    }

    /// Called after a snap target was resolved.
    fn on_snap(&mut self, e: &SnapEvent) {
        _ = e;
    }

    /// Called after indicator dots were presented.
    fn on_indicator(&mut self, e: &IndicatorEvent) {
        _ = e;
    }

    /// Called with every batch of computed item attributes (requires
    /// `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_item_attributes(&mut self, items: &[ItemAttributes]) {
        _ = items;
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

    /// Emits a [`LayoutPassEvent`].
    #[inline]
    pub fn layout_pass(&mut self, e: &LayoutPassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_pass(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DecelerationEvent`].
    #[inline]
    pub fn deceleration(&mut self, e: &DecelerationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_deceleration(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HostUnavailableEvent`] for `operation`.
    #[inline]
    pub fn host_unavailable(&mut self, operation: Operation) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_host_unavailable(&HostUnavailableEvent { operation });
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = operation;
        }
    }

    /// Emits a [`SnapEvent`].
    #[inline]
    pub fn snap(&mut self, e: &SnapEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_snap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IndicatorEvent`].
    #[inline]
    pub fn indicator(&mut self, e: &IndicatorEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_indicator(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a batch of item attributes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn item_attributes(&mut self, items: &[ItemAttributes]) {
        if let Some(s) = &mut self.sink {
            s.on_item_attributes(items);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Size};

    use super::*;
    use crate::axis::ScrollAxis;

    fn sample_pass() -> LayoutPassEvent {
        LayoutPassEvent {
            state: LayoutState::new(Size::new(320.0, 480.0), ScrollAxis::Horizontal),
            recomputed: true,
            geometry: LayoutGeometry {
                insets: Insets::uniform_xy(60.0, 40.0),
                line_spacing: -12.0,
                scaled_item_offset: 20.0,
            },
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_layout_pass(&sample_pass());
        sink.on_host_unavailable(&HostUnavailableEvent {
            operation: Operation::Prepare,
        });
        sink.on_snap(&SnapEvent {
            proposed: 10.0,
            resolved: 0.0,
            candidates: 2,
            paging_enabled: false,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.layout_pass(&sample_pass());
        tracer.host_unavailable(Operation::Attributes);
    }

    #[test]
    fn operation_names_are_distinct() {
        assert_ne!(Operation::Prepare.as_str(), Operation::Attributes.as_str());
        assert_eq!(Operation::TargetContentOffset.as_str(), "target-offset");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            skipped: Vec<Operation>,
            passes: usize,
        }
        impl TraceSink for RecordingSink {
            fn on_layout_pass(&mut self, _: &LayoutPassEvent) {
                self.passes += 1;
            }
            fn on_host_unavailable(&mut self, e: &HostUnavailableEvent) {
                self.skipped.push(e.operation);
            }
        }

        let mut sink = RecordingSink {
            skipped: Vec::new(),
            passes: 0,
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.layout_pass(&sample_pass());
        tracer.host_unavailable(Operation::TargetContentOffset);
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.passes, 1);
        assert_eq!(sink.skipped, &[Operation::TargetContentOffset]);
    }
}
