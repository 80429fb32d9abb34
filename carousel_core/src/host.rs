// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for the host UI that drives the carousel.
//!
//! The core never owns views. A host integration provides:
//!
//! - **Scroll container** — Implements [`ScrollHost`] so the layout engine
//!   can read the viewport size, scroll offset, and paging flag, and can set
//!   the deceleration preset.
//!
//! - **Dot view** — Implements [`DotPresenter`] so a
//!   [`PageIndicator`](crate::indicator::PageIndicator) can push icon
//!   assignments into a platform page control.
//!
//! - **Icons** — Any cheap-to-clone handle type (`&Image`, an asset id, an
//!   `Rc`). The core never decodes or loads image data.
//!
//! # Host availability
//!
//! A scroll container that is not attached yet reports `None` from
//! [`ScrollHost::viewport_size`]. Every engine operation then produces no
//! output and mutates nothing.

use core::fmt;

use kurbo::{Point, Size};

/// How quickly a scroll view slows down after a fling.
///
/// The value is the fraction of velocity retained per millisecond.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct DecelerationRate(pub f64);

impl DecelerationRate {
    /// Platform default deceleration.
    pub const NORMAL: Self = Self(0.998);
    /// Quick deceleration used by the carousel so flings settle near the
    /// snap target.
    pub const FAST: Self = Self(0.99);
}

impl Default for DecelerationRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Debug for DecelerationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecelerationRate({})", self.0)
    }
}

/// The host scroll container.
///
/// All calls happen on the UI thread, serialized by the host's event loop.
pub trait ScrollHost {
    /// Size of the visible bounds, or `None` when the container is not
    /// attached.
    fn viewport_size(&self) -> Option<Size>;

    /// Current scroll offset (origin of the visible bounds in content
    /// coordinates).
    fn content_offset(&self) -> Point;

    /// Whether the container's native paging is on.
    fn is_paging_enabled(&self) -> bool;

    /// Current deceleration preset.
    fn deceleration_rate(&self) -> DecelerationRate;

    /// Replaces the deceleration preset.
    fn set_deceleration_rate(&mut self, rate: DecelerationRate);
}

/// A platform page control that displays one dot per page.
///
/// Which methods a presenter needs to support depends on the
/// [`IndicatorStrategy`](crate::indicator::IndicatorStrategy) chosen for it.
pub trait DotPresenter<I> {
    /// Whether the control accepts a per-page indicator image.
    ///
    /// Queried once when a
    /// [`PageIndicator`](crate::indicator::PageIndicator) is created.
    fn supports_indicator_images(&self) -> bool;

    /// Sets the indicator image for `page`.
    fn set_indicator_image(&mut self, page: usize, icon: &I);

    /// Number of dot views currently rendered by the control.
    fn dot_count(&self) -> usize;

    /// Places `icon` over the dot view at `dot`, creating the overlay if the
    /// dot does not have one yet.
    fn set_dot_overlay(&mut self, dot: usize, icon: &I);
}
