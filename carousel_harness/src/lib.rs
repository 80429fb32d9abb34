// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated host for driving a carousel without a UI toolkit.
//!
//! [`SimulatedScrollView`] and [`RecordingDots`] stand in for the platform
//! scroll container and page control. [`Onboarding`] wires a
//! [`CarouselLayout`] and a [`PageIndicator`] to them the way an onboarding
//! screen with previous/next buttons would.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use carousel_core::attributes::{ItemAttributes, back_to_front};
use carousel_core::config::CarouselConfig;
use carousel_core::engine::CarouselLayout;
use carousel_core::host::{DecelerationRate, DotPresenter, ScrollHost};
use carousel_core::indicator::PageIndicator;
use carousel_core::trace::Tracer;
use kurbo::{Point, Size};

/// An in-memory scroll container.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedScrollView {
    viewport: Option<Size>,
    offset: Point,
    paging: bool,
    rate: DecelerationRate,
    rate_changes: usize,
}

impl SimulatedScrollView {
    /// Creates an attached view with the given viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Some(viewport),
            offset: Point::ZERO,
            paging: false,
            rate: DecelerationRate::NORMAL,
            rate_changes: 0,
        }
    }

    /// Creates a view that is not attached yet.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            viewport: None,
            ..Self::new(Size::ZERO)
        }
    }

    /// Attaches the view (or resizes it).
    pub fn attach(&mut self, viewport: Size) {
        self.viewport = Some(viewport);
    }

    /// Detaches the view.
    pub fn detach(&mut self) {
        self.viewport = None;
    }

    /// Moves the visible bounds to `offset`.
    pub fn scroll_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Turns native paging on or off.
    pub fn set_paging(&mut self, paging: bool) {
        self.paging = paging;
    }

    /// How many times the deceleration preset was written.
    #[must_use]
    pub const fn rate_changes(&self) -> usize {
        self.rate_changes
    }
}

impl ScrollHost for SimulatedScrollView {
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
        self.rate_changes += 1;
    }
}

/// An in-memory page control that records every icon written to it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingDots<I> {
    images: bool,
    rendered: usize,
    writes: Vec<(usize, I)>,
}

impl<I> RecordingDots<I> {
    /// A control that accepts per-page indicator images.
    #[must_use]
    pub const fn with_images() -> Self {
        Self {
            images: true,
            rendered: 0,
            writes: Vec::new(),
        }
    }

    /// A control that only renders `rendered` plain dot views.
    #[must_use]
    pub const fn with_dot_views(rendered: usize) -> Self {
        Self {
            images: false,
            rendered,
            writes: Vec::new(),
        }
    }

    /// Every `(dot, icon)` write so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[(usize, I)] {
        &self.writes
    }

    /// The most recent icon written for `dot`.
    #[must_use]
    pub fn icon_at(&self, dot: usize) -> Option<&I> {
        self.writes
            .iter()
            .rev()
            .find(|(d, _)| *d == dot)
            .map(|(_, icon)| icon)
    }
}

impl<I: Clone> DotPresenter<I> for RecordingDots<I> {
    fn supports_indicator_images(&self) -> bool {
        self.images
    }

    fn set_indicator_image(&mut self, page: usize, icon: &I) {
        self.writes.push((page, icon.clone()));
    }

    fn dot_count(&self) -> usize {
        self.rendered
    }

    fn set_dot_overlay(&mut self, dot: usize, icon: &I) {
        self.writes.push((dot, icon.clone()));
    }
}

/// An onboarding screen: one carousel item per page, a page control, and
/// previous/next buttons.
#[derive(Debug)]
pub struct Onboarding<I> {
    layout: CarouselLayout,
    indicator: PageIndicator<I>,
    view: SimulatedScrollView,
    dots: RecordingDots<I>,
    item_count: usize,
}

impl<I: Clone> Onboarding<I> {
    /// Creates the screen with `item_count` pages and marks the first page
    /// on the page control.
    #[must_use]
    pub fn new(
        config: CarouselConfig,
        item_count: usize,
        view: SimulatedScrollView,
        mut dots: RecordingDots<I>,
        current_icon: I,
        other_icon: I,
    ) -> Self {
        let mut indicator = PageIndicator::for_presenter(&dots, current_icon, other_icon);
        indicator.set_page_count(item_count);
        indicator.set_current_page(0);
        indicator.present(&mut dots, &mut Tracer::none());
        Self {
            layout: CarouselLayout::new(config),
            indicator,
            view,
            dots,
            item_count,
        }
    }

    /// The layout engine.
    #[must_use]
    pub const fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Mutable access to the layout engine, for configuration changes.
    pub fn layout_mut(&mut self) -> &mut CarouselLayout {
        &mut self.layout
    }

    /// The page indicator.
    #[must_use]
    pub const fn indicator(&self) -> &PageIndicator<I> {
        &self.indicator
    }

    /// The simulated scroll view.
    #[must_use]
    pub const fn view(&self) -> &SimulatedScrollView {
        &self.view
    }

    /// Mutable access to the simulated scroll view.
    pub fn view_mut(&mut self) -> &mut SimulatedScrollView {
        &mut self.view
    }

    /// The simulated page control.
    #[must_use]
    pub const fn dots(&self) -> &RecordingDots<I> {
        &self.dots
    }

    /// Current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.indicator.current_page()
    }

    /// Whether the previous button is enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.indicator.has_previous()
    }

    /// Whether the next button is enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.indicator.has_next()
    }

    /// Runs one layout pass and returns the visible items in back-to-front
    /// drawing order.
    pub fn layout_pass(&mut self, tracer: &mut Tracer<'_>) -> Vec<ItemAttributes> {
        self.layout.prepare(&mut self.view, tracer);
        let mut items = self.layout.visible_attributes(&self.view, self.item_count, tracer);
        back_to_front(&mut items);
        items
    }

    /// Ends a drag that would naturally stop at `proposed`, settles the
    /// scroll view, and updates the page control. Returns the settled offset.
    pub fn end_drag(&mut self, proposed: Point, tracer: &mut Tracer<'_>) -> Point {
        self.layout.prepare(&mut self.view, tracer);
        let settled =
            self.layout
                .target_content_offset(&self.view, proposed, self.item_count, tracer);
        self.view.scroll_to(settled);
        if let Some(page) = self.layout.centered_index(&self.view, self.item_count, tracer) {
            self.show_page(page, tracer);
        }
        settled
    }

    /// Scrolls to the next page. Returns `false` if already on the last page
    /// or the view is not attached.
    pub fn next(&mut self, tracer: &mut Tracer<'_>) -> bool {
        if !self.has_next() {
            return false;
        }
        self.go_to(self.current_page() + 1, tracer)
    }

    /// Scrolls to the previous page. Returns `false` if already on the first
    /// page or the view is not attached.
    pub fn previous(&mut self, tracer: &mut Tracer<'_>) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.go_to(self.current_page() - 1, tracer)
    }

    /// Scrolls so `page` (clamped to the last page) is centered.
    pub fn go_to(&mut self, page: usize, tracer: &mut Tracer<'_>) -> bool {
        if self.item_count == 0 || self.layout.prepare(&mut self.view, tracer).is_none() {
            return false;
        }
        let page = page.min(self.item_count - 1);
        let Some(offset) = self.layout.offset_centering(page) else {
            return false;
        };
        self.view.scroll_to(offset);
        self.show_page(page, tracer);
        true
    }

    fn show_page(&mut self, page: usize, tracer: &mut Tracer<'_>) {
        self.indicator.set_current_page(page);
        self.indicator.present(&mut self.dots, tracer);
    }
}
