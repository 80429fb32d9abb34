// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel layout policy.
//!
//! [`CarouselLayout`] is invoked by a host scroll container on every layout
//! pass and on drag end. Its only persistent state is the last-seen
//! [`LayoutState`] and the geometry derived from it, which serve as a dirty
//! flag: callers may call [`prepare`](CarouselLayout::prepare)
//! unconditionally and the engine skips recomputation when nothing changed.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_layout(host: &mut ScrollView) {
//!     // Prepare: recompute insets/spacing if the viewport changed.
//!     layout.prepare(host, &mut tracer);
//!
//!     // Attributes: transform every item in the visible bounds.
//!     let items = layout.visible_attributes(host, item_count, &mut tracer);
//!     host.apply(&items);
//! }
//!
//! fn on_drag_end(host: &mut ScrollView, proposed: Point) -> Point {
//!     layout.target_content_offset(host, proposed, item_count, &mut tracer)
//! }
//! ```
//!
//! Configuration changes go through the `set_*` methods, which recompute the
//! geometry against the cached state right away.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::attributes::{ItemAttributes, transform_item};
use crate::axis::ScrollAxis;
use crate::config::{CarouselConfig, SpacingMode, clamp_alpha, clamp_scale};
use crate::flow::FlowFrames;
use crate::geometry::{LayoutGeometry, recompute_geometry};
use crate::host::{DecelerationRate, ScrollHost};
use crate::snap::{nearest_center, resolve_snap_target};
use crate::state::LayoutState;
use crate::trace::{DecelerationEvent, LayoutPassEvent, Operation, SnapEvent, Tracer};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cached {
    state: LayoutState,
    geometry: LayoutGeometry,
}

/// Carousel layout engine.
///
/// Owns the [`CarouselConfig`] and the cached geometry for the last-seen
/// [`LayoutState`]; never owns items or views.
#[derive(Clone, Debug)]
pub struct CarouselLayout {
    config: CarouselConfig,
    cached: Option<Cached>,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl CarouselLayout {
    /// Creates an engine that has not seen a host yet.
    #[must_use]
    pub const fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            cached: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Last-seen layout state, if a pass has run.
    #[must_use]
    pub fn state(&self) -> Option<LayoutState> {
        self.cached.map(|c| c.state)
    }

    /// Geometry for the last-seen layout state, if a pass has run.
    #[must_use]
    pub fn geometry(&self) -> Option<LayoutGeometry> {
        self.cached.map(|c| c.geometry)
    }

    /// Base flow placement for the current geometry.
    #[must_use]
    pub fn flow(&self) -> Option<FlowFrames> {
        self.geometry()
            .map(|g| FlowFrames::new(self.config.scroll_axis, self.config.item_size, g))
    }

    // -- Configuration setters (recompute immediately) --

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: CarouselConfig) {
        self.config = config;
        self.refresh();
    }

    /// Sets the untransformed item size.
    pub fn set_item_size(&mut self, item_size: Size) {
        self.config.item_size = item_size;
        self.refresh();
    }

    /// Sets the side-item scale (clamped into `(0, 1]`).
    pub fn set_side_item_scale(&mut self, scale: f64) {
        self.config.side_item_scale = clamp_scale(scale);
        self.refresh();
    }

    /// Sets the side-item opacity (clamped into `[0, 1]`).
    pub fn set_side_item_alpha(&mut self, alpha: f64) {
        self.config.side_item_alpha = clamp_alpha(alpha);
        self.refresh();
    }

    /// Sets the side-item cross-axis shift.
    pub fn set_side_item_shift(&mut self, shift: f64) {
        self.config.side_item_shift = shift;
        self.refresh();
    }

    /// Sets the spacing mode.
    pub fn set_spacing_mode(&mut self, mode: SpacingMode) {
        self.config.spacing_mode = mode;
        self.refresh();
    }

    /// Sets the scroll axis.
    pub fn set_scroll_axis(&mut self, axis: ScrollAxis) {
        self.config.scroll_axis = axis;
        self.refresh();
    }

    /// Enables or disables the depth translation.
    pub fn set_depth_translation(&mut self, enabled: bool) {
        self.config.depth_translation = enabled;
        self.refresh();
    }

    // -- Layout pass --

    /// Runs the per-pass bookkeeping and returns the geometry in effect.
    ///
    /// When the viewport size or scroll axis differs from the last pass, the
    /// insets and line spacing are recomputed and the host's deceleration is
    /// switched to [`DecelerationRate::FAST`] if it is not already. Returns
    /// `None` without touching anything if the host is not attached.
    pub fn prepare(
        &mut self,
        host: &mut dyn ScrollHost,
        tracer: &mut Tracer<'_>,
    ) -> Option<LayoutGeometry> {
        let Some(viewport_size) = host.viewport_size() else {
            tracer.host_unavailable(Operation::Prepare);
            return None;
        };
        let state = LayoutState::new(viewport_size, self.config.scroll_axis);

        let recomputed = self.state() != Some(state);
        let geometry = match self.cached {
            Some(cached) if !recomputed => cached.geometry,
            _ => {
                ensure_fast_deceleration(host, tracer);
                let geometry = recompute_geometry(&state, &self.config);
                self.cached = Some(Cached { state, geometry });
                geometry
            }
        };

        tracer.layout_pass(&LayoutPassEvent {
            state,
            recomputed,
            geometry,
        });
        Some(geometry)
    }

    /// Whether a bounds change should invalidate the layout.
    ///
    /// Always `true`: every scroll moves items relative to the viewport
    /// center, so their attributes must be recomputed.
    #[must_use]
    pub const fn should_invalidate_for_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }

    // -- Item placement --

    /// Base (untransformed) frame of item `index`.
    #[must_use]
    pub fn item_frame(&self, index: usize) -> Option<Rect> {
        self.flow().map(|f| f.frame(index))
    }

    /// Scrollable content size for `item_count` items.
    #[must_use]
    pub fn content_size(&self, item_count: usize) -> Option<Size> {
        self.flow().map(|f| f.content_size(item_count))
    }

    /// Content offset that centers item `index` in the viewport.
    #[must_use]
    pub fn offset_centering(&self, index: usize) -> Option<Point> {
        let flow = self.flow()?;
        Some(self.config.scroll_axis.point(flow.centering_offset(index), 0.0))
    }

    /// Index of the item whose center is closest to the viewport center.
    pub fn centered_index(
        &self,
        host: &dyn ScrollHost,
        item_count: usize,
        tracer: &mut Tracer<'_>,
    ) -> Option<usize> {
        let (viewport_size, flow) = self.attached(host, Operation::Attributes, tracer)?;
        let axis = self.config.scroll_axis;
        let origin = axis.main_of(host.content_offset()) + axis.main_size(viewport_size) / 2.0;
        let centers = (0..item_count).map(|i| axis.main_of(flow.frame(i).center()));
        nearest_center(centers, origin).map(|(index, _)| index)
    }

    // -- Attributes --

    /// Attributes for a single item with a host-supplied base `frame`.
    pub fn item_attributes(
        &self,
        host: &dyn ScrollHost,
        index: usize,
        frame: Rect,
        tracer: &mut Tracer<'_>,
    ) -> Option<ItemAttributes> {
        let (viewport_size, flow) = self.attached(host, Operation::Attributes, tracer)?;
        Some(self.transform(host, viewport_size, &flow)(index, frame))
    }

    /// Attributes of every item whose base frame intersects `rect`, in index
    /// order.
    ///
    /// Returns an empty list if the host is not attached or no pass has run.
    pub fn layout_attributes_in(
        &self,
        host: &dyn ScrollHost,
        rect: Rect,
        item_count: usize,
        tracer: &mut Tracer<'_>,
    ) -> Vec<ItemAttributes> {
        let Some((viewport_size, flow)) = self.attached(host, Operation::Attributes, tracer)
        else {
            return Vec::new();
        };
        let transform = self.transform(host, viewport_size, &flow);
        let items: Vec<ItemAttributes> = flow
            .indices_in(rect, item_count)
            .map(|i| transform(i, flow.frame(i)))
            .collect();
        #[cfg(feature = "trace-rich")]
        tracer.item_attributes(&items);
        items
    }

    /// Attributes of every item intersecting the host's visible bounds.
    pub fn visible_attributes(
        &self,
        host: &dyn ScrollHost,
        item_count: usize,
        tracer: &mut Tracer<'_>,
    ) -> Vec<ItemAttributes> {
        let Some(viewport_size) = host.viewport_size() else {
            tracer.host_unavailable(Operation::Attributes);
            return Vec::new();
        };
        let bounds = Rect::from_origin_size(host.content_offset(), viewport_size);
        self.layout_attributes_in(host, bounds, item_count, tracer)
    }

    // -- Snapping --

    /// Resolves where scrolling should settle after a drag that would
    /// naturally stop at `proposed`.
    ///
    /// Candidates are the items intersecting the current visible bounds. The
    /// main-axis component is moved so the nearest one is centered; the cross
    /// component passes through. `proposed` is returned unchanged when native
    /// paging is on, when the host is not attached, or when there are no
    /// candidates.
    pub fn target_content_offset(
        &self,
        host: &dyn ScrollHost,
        proposed: Point,
        item_count: usize,
        tracer: &mut Tracer<'_>,
    ) -> Point {
        let Some(viewport_size) = host.viewport_size() else {
            tracer.host_unavailable(Operation::TargetContentOffset);
            return proposed;
        };
        let axis = self.config.scroll_axis;
        let proposed_main = axis.main_of(proposed);
        let paging_enabled = host.is_paging_enabled();

        let candidates = if paging_enabled {
            Vec::new()
        } else {
            self.visible_attributes(host, item_count, tracer)
        };
        let resolved = resolve_snap_target(
            proposed_main,
            axis.main_size(viewport_size),
            candidates.iter().map(|a| axis.main_of(a.center())),
            paging_enabled,
        );

        tracer.snap(&SnapEvent {
            proposed: proposed_main,
            resolved,
            candidates: candidates.len(),
            paging_enabled,
        });
        axis.with_main(proposed, resolved)
    }

    // -- Internal helpers --

    /// Recomputes geometry for the cached state after a config change.
    fn refresh(&mut self) {
        if let Some(cached) = self.cached {
            let state = LayoutState::new(cached.state.viewport_size, self.config.scroll_axis);
            self.cached = Some(Cached {
                state,
                geometry: recompute_geometry(&state, &self.config),
            });
        }
    }

    /// Returns the viewport size and flow placement, or traces why not.
    fn attached(
        &self,
        host: &dyn ScrollHost,
        operation: Operation,
        tracer: &mut Tracer<'_>,
    ) -> Option<(Size, FlowFrames)> {
        let Some(viewport_size) = host.viewport_size() else {
            tracer.host_unavailable(operation);
            return None;
        };
        Some((viewport_size, self.flow()?))
    }

    /// Returns a closure that transforms one item for the host's current
    /// scroll position.
    fn transform(
        &self,
        host: &dyn ScrollHost,
        viewport_size: Size,
        flow: &FlowFrames,
    ) -> impl Fn(usize, Rect) -> ItemAttributes + '_ {
        let axis = self.config.scroll_axis;
        let viewport_center = axis.main_size(viewport_size) / 2.0;
        let content_offset = axis.main_of(host.content_offset());
        let line_spacing = flow.geometry().line_spacing;
        move |index, frame| {
            transform_item(
                index,
                frame,
                viewport_center,
                content_offset,
                &self.config,
                line_spacing,
            )
        }
    }
}

/// Switches the host to the fast deceleration preset if it is not already.
fn ensure_fast_deceleration(host: &mut dyn ScrollHost, tracer: &mut Tracer<'_>) {
    let previous = host.deceleration_rate();
    if previous != DecelerationRate::FAST {
        host.set_deceleration_rate(DecelerationRate::FAST);
        tracer.deceleration(&DecelerationEvent {
            previous,
            current: DecelerationRate::FAST,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::approx;

    #[derive(Debug)]
    struct MockHost {
        viewport: Option<Size>,
        offset: Point,
        paging: bool,
        rate: DecelerationRate,
        rate_writes: usize,
    }

    impl MockHost {
        fn attached(width: f64, height: f64) -> Self {
            Self {
                viewport: Some(Size::new(width, height)),
                offset: Point::ZERO,
                paging: false,
                rate: DecelerationRate::NORMAL,
                rate_writes: 0,
            }
        }

        fn detached() -> Self {
            Self {
                viewport: None,
                ..Self::attached(0.0, 0.0)
            }
        }
    }

    impl ScrollHost for MockHost {
        fn viewport_size(&self) -> Option<Size> {
            self.viewport
        }

        fn content_offset(&self) -> Point {
            self.offset
        }

        fn is_paging_enabled(&self) -> bool {
            self.paging
        }

        fn deceleration_rate(&self) -> DecelerationRate {
            self.rate
        }

        fn set_deceleration_rate(&mut self, rate: DecelerationRate) {
            self.rate = rate;
            self.rate_writes += 1;
        }
    }

    /// 100×100 items in a 300×200 viewport: insets (100, 50), spacing 0,
    /// item `i` centered at x = 150 + 100i.
    fn prepared(host: &mut MockHost) -> CarouselLayout {
        let mut layout = CarouselLayout::new(CarouselConfig::new(Size::new(100.0, 100.0)));
        layout.prepare(host, &mut Tracer::none());
        layout
    }

    #[test]
    fn first_prepare_computes_geometry() {
        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = CarouselLayout::new(CarouselConfig::new(Size::new(100.0, 100.0)));
        assert_eq!(layout.state(), None);

        let geometry = layout.prepare(&mut host, &mut Tracer::none());
        let geometry = geometry.expect("host is attached");
        assert_eq!(geometry.insets.x0, 100.0);
        assert_eq!(geometry.insets.y0, 50.0);
        assert!(approx(geometry.line_spacing, 0.0), "fixed 10 minus offset 10");
        assert_eq!(host.rate, DecelerationRate::FAST);
        assert_eq!(host.rate_writes, 1);
    }

    #[test]
    fn unchanged_state_skips_recompute() {
        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = prepared(&mut host);

        // Host resets the rate; an unchanged pass must not touch it again.
        host.rate = DecelerationRate::NORMAL;
        layout.prepare(&mut host, &mut Tracer::none());
        assert_eq!(host.rate, DecelerationRate::NORMAL);
        assert_eq!(host.rate_writes, 1);

        host.viewport = Some(Size::new(400.0, 200.0));
        let geometry = layout.prepare(&mut host, &mut Tracer::none());
        assert_eq!(geometry.map(|g| g.insets.x0), Some(150.0));
        assert_eq!(host.rate, DecelerationRate::FAST);
        assert_eq!(host.rate_writes, 2);
    }

    #[test]
    fn fast_rate_is_not_rewritten() {
        let mut host = MockHost::attached(300.0, 200.0);
        host.rate = DecelerationRate::FAST;
        let _ = prepared(&mut host);
        assert_eq!(host.rate_writes, 0);
    }

    #[test]
    fn detached_host_is_inert() {
        let mut host = MockHost::detached();
        let mut layout = CarouselLayout::new(CarouselConfig::new(Size::new(100.0, 100.0)));
        let mut tracer = Tracer::none();

        assert_eq!(layout.prepare(&mut host, &mut tracer), None);
        assert_eq!(layout.state(), None);
        assert_eq!(host.rate, DecelerationRate::NORMAL);
        assert_eq!(host.rate_writes, 0);

        assert!(layout.visible_attributes(&host, 5, &mut tracer).is_empty());
        let proposed = Point::new(63.0, 4.0);
        assert_eq!(
            layout.target_content_offset(&host, proposed, 5, &mut tracer),
            proposed
        );
        assert_eq!(layout.centered_index(&host, 5, &mut tracer), None);
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(layout.item_attributes(&host, 0, frame, &mut tracer), None);
    }

    #[test]
    fn setters_recompute_against_cached_state() {
        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = prepared(&mut host);

        layout.set_spacing_mode(SpacingMode::Overlap {
            visible_offset: 20.0,
        });
        // 100 − (20 + 10)
        let spacing = layout.geometry().map(|g| g.line_spacing);
        assert!(spacing.is_some_and(|s| approx(s, 70.0)), "{spacing:?}");

        layout.set_side_item_scale(0.5);
        // 100 − (20 + 25)
        let spacing = layout.geometry().map(|g| g.line_spacing);
        assert!(spacing.is_some_and(|s| approx(s, 55.0)), "{spacing:?}");

        layout.set_side_item_scale(5.0);
        assert_eq!(layout.config().side_item_scale(), 1.0);
        assert_eq!(layout.geometry().map(|g| g.scaled_item_offset), Some(0.0));
    }

    #[test]
    fn setters_before_first_pass_do_not_compute() {
        let mut layout = CarouselLayout::default();
        layout.set_item_size(Size::new(50.0, 50.0));
        layout.set_side_item_alpha(-1.0);
        assert_eq!(layout.geometry(), None);
        assert_eq!(layout.config().side_item_alpha(), 0.0);
        assert_eq!(layout.item_frame(0), None);
    }

    #[test]
    fn axis_change_updates_cached_state() {
        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = prepared(&mut host);
        layout.set_scroll_axis(ScrollAxis::Vertical);
        assert_eq!(
            layout.state().map(|s| s.scroll_axis),
            Some(ScrollAxis::Vertical)
        );
        // Vertical main inset is (200 − 100) / 2.
        assert_eq!(layout.item_frame(0).map(|f| f.y0), Some(50.0));
    }

    #[test]
    fn visible_attributes_interpolate_by_distance() {
        let mut host = MockHost::attached(300.0, 200.0);
        let layout = prepared(&mut host);
        let items = layout.visible_attributes(&host, 10, &mut Tracer::none());

        // Item 2 starts exactly at the trailing edge and is excluded.
        let indices: Vec<usize> = items.iter().map(|a| a.index).collect();
        assert_eq!(indices, [0, 1]);

        let centered = &items[0];
        assert_eq!(centered.scale, 1.0);
        assert_eq!(centered.opacity, 1.0);
        assert_eq!(centered.stack_order, 10);
        assert_eq!(centered.center_offset.y, 0.0);
        assert_eq!(centered.transform.translation_z(), 0.0);

        let side = &items[1];
        assert!(approx(side.scale, 0.8), "scale {}", side.scale);
        assert!(approx(side.opacity, 0.8), "opacity {}", side.opacity);
        assert!(approx(side.center_offset.y, 0.8), "shift {}", side.center_offset.y);
        assert!(side.stack_order < centered.stack_order, "centered item on top");
        assert!(approx(side.transform.translation_z(), -0.1), "depth");
    }

    #[test]
    fn depth_can_be_disabled() {
        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = prepared(&mut host);
        layout.set_depth_translation(false);
        let items = layout.visible_attributes(&host, 10, &mut Tracer::none());
        assert!(items.iter().all(|a| a.transform.translation_z() == 0.0));
    }

    #[test]
    fn item_attributes_uses_supplied_frame() {
        let mut host = MockHost::attached(300.0, 200.0);
        host.offset = Point::new(100.0, 0.0);
        let layout = prepared(&mut host);
        // Frame centered at 250, viewport center at 100 + 150.
        let frame = Rect::new(200.0, 50.0, 300.0, 150.0);
        let attrs = layout.item_attributes(&host, 7, frame, &mut Tracer::none());
        let attrs = attrs.expect("host is attached");
        assert_eq!(attrs.index, 7);
        assert_eq!(attrs.frame, frame);
        assert_eq!(attrs.scale, 1.0);
    }

    #[test]
    fn snaps_nearest_item_to_center() {
        let mut host = MockHost::attached(300.0, 200.0);
        let layout = prepared(&mut host);
        // Centers at 150 and 250; proposed center origin at 60 + 150 = 210.
        let target =
            layout.target_content_offset(&host, Point::new(60.0, 5.0), 10, &mut Tracer::none());
        assert_eq!(target, Point::new(100.0, 5.0));
    }

    #[test]
    fn snaps_along_vertical_axis() {
        let mut host = MockHost::attached(200.0, 300.0);
        let mut layout = CarouselLayout::new(
            CarouselConfig::new(Size::new(100.0, 100.0)).with_scroll_axis(ScrollAxis::Vertical),
        );
        layout.prepare(&mut host, &mut Tracer::none());
        let target =
            layout.target_content_offset(&host, Point::new(3.0, 60.0), 10, &mut Tracer::none());
        assert_eq!(target, Point::new(3.0, 100.0));
    }

    #[test]
    fn paging_passes_proposed_through() {
        let mut host = MockHost::attached(300.0, 200.0);
        host.paging = true;
        let layout = prepared(&mut host);
        let proposed = Point::new(63.5, 0.0);
        let target = layout.target_content_offset(&host, proposed, 10, &mut Tracer::none());
        assert_eq!(target, proposed);
    }

    #[test]
    fn no_items_passes_proposed_through() {
        let mut host = MockHost::attached(300.0, 200.0);
        let layout = prepared(&mut host);
        let proposed = Point::new(63.5, 0.0);
        let target = layout.target_content_offset(&host, proposed, 0, &mut Tracer::none());
        assert_eq!(target, proposed);
    }

    #[test]
    fn placement_helpers_follow_flow() {
        let mut host = MockHost::attached(300.0, 200.0);
        host.offset = Point::new(100.0, 0.0);
        let layout = prepared(&mut host);
        let mut tracer = Tracer::none();

        assert_eq!(layout.centered_index(&host, 5, &mut tracer), Some(1));
        assert_eq!(layout.offset_centering(2), Some(Point::new(200.0, 0.0)));
        assert_eq!(layout.content_size(3), Some(Size::new(500.0, 200.0)));
        assert!(layout.should_invalidate_for_bounds_change(Rect::ZERO));
    }

    #[test]
    fn zero_size_viewport_falls_back_safely() {
        let mut host = MockHost::attached(0.0, 0.0);
        let mut layout = CarouselLayout::new(CarouselConfig::new(Size::new(100.0, 100.0)));
        let mut tracer = Tracer::none();

        let geometry = layout.prepare(&mut host, &mut tracer);
        assert_eq!(geometry.map(|g| g.insets.x0), Some(-50.0));
        assert!(layout.visible_attributes(&host, 5, &mut tracer).is_empty());
        let proposed = Point::new(63.0, 4.0);
        assert_eq!(
            layout.target_content_offset(&host, proposed, 5, &mut tracer),
            proposed
        );
    }

    #[test]
    fn overlap_beyond_item_size_keeps_flow_usable() {
        // Inset 50, overlap 200, offset 10: spacing 50 − 210 = −160.
        let mut host = MockHost::attached(200.0, 200.0);
        let mut layout = CarouselLayout::new(
            CarouselConfig::new(Size::new(100.0, 100.0)).with_spacing_mode(SpacingMode::Overlap {
                visible_offset: 200.0,
            }),
        );
        let spacing = layout.prepare(&mut host, &mut Tracer::none()).map(|g| g.line_spacing);
        assert!(spacing.is_some_and(|s| approx(s, -160.0)), "{spacing:?}");

        assert_eq!(layout.item_frame(1).map(|f| f.x0), Some(50.0));
        assert_eq!(layout.offset_centering(2), Some(Point::ZERO));
        assert_eq!(layout.content_size(5), Some(Size::new(200.0, 200.0)));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn prepare_reports_recompute_flag() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Flags {
            passes: Vec<bool>,
            rate_changes: usize,
        }
        impl TraceSink for Flags {
            fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
                self.passes.push(e.recomputed);
            }
            fn on_deceleration(&mut self, _: &DecelerationEvent) {
                self.rate_changes += 1;
            }
        }

        let mut host = MockHost::attached(300.0, 200.0);
        let mut layout = CarouselLayout::new(CarouselConfig::new(Size::new(100.0, 100.0)));
        let mut sink = Flags::default();
        let mut tracer = Tracer::new(&mut sink);
        layout.prepare(&mut host, &mut tracer);
        layout.prepare(&mut host, &mut tracer);
        drop(tracer);
        assert_eq!(sink.passes, [true, false]);
        assert_eq!(sink.rate_changes, 1);
    }
}
