// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel layout geometry and page indicator state.
//!
//! `carousel_core` computes presentation attributes for a paged carousel: a
//! centered focal item with scaled, faded, and shifted side items. It never
//! owns views or items. A host scroll container feeds it viewport and offset
//! state and applies the attributes it returns. The crate is `no_std`
//! compatible (with `alloc`).
//!
//! # Architecture
//!
//! Two independent components are driven by the same host:
//!
//! ```text
//!   ScrollHost (viewport, offset)
//!       │
//!       ▼
//!   CarouselLayout::prepare() ──► LayoutGeometry (insets, line spacing)
//!       │
//!       ▼
//!   CarouselLayout::layout_attributes_in() ──► [ItemAttributes]
//!       │
//!       ▼
//!   CarouselLayout::target_content_offset() ──► settled offset
//!                                                    │
//!                 ┌──────────────────────────────────┘
//!                 ▼
//!   PageIndicator::set_current_page() ──► [DotIcon] ──► DotPresenter
//! ```
//!
//! **[`engine`]** — [`CarouselLayout`](engine::CarouselLayout), the stateful
//! layout policy. Caches the last-seen [`LayoutState`](state::LayoutState)
//! and skips geometry recomputation when it has not changed.
//!
//! **[`geometry`]** — Section insets and line spacing for both
//! [`SpacingMode`](config::SpacingMode)s.
//!
//! **[`attributes`]** — Per-item scale, opacity, cross-axis shift, and stack
//! order as a function of distance from the viewport center.
//!
//! **[`snap`]** — Scroll-snap target resolution.
//!
//! **[`flow`]** — Untransformed single-line flow frames and content size.
//!
//! **[`indicator`]** — Page indicator icon assignment and presentation
//! strategies.
//!
//! **[`host`]** — Contracts the host scroll container and dot view implement.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types, with
//! the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-item
//!   attribute events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attributes;
pub mod axis;
pub mod config;
pub mod engine;
pub mod flow;
pub mod geometry;
pub mod host;
pub mod indicator;
pub mod snap;
pub mod state;
pub mod trace;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_util {
    /// Tolerance used by float comparisons in tests.
    pub(crate) const EPS: f64 = 1e-9;

    /// Returns whether `a` and `b` are within [`EPS`] of each other.
    pub(crate) fn approx(a: f64, b: f64) -> bool {
        #[cfg(not(feature = "std"))]
        use kurbo::common::FloatFuncs as _;
        (a - b).abs() < EPS
    }
}
