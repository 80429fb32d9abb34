// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel tuning parameters.
//!
//! [`CarouselConfig`] is plain data. Construct it with [`Default`] and the
//! `with_*` builders; once it is handed to a
//! [`CarouselLayout`](crate::engine::CarouselLayout), change it only through
//! the engine's setters so geometry is recomputed immediately.
//!
//! Out-of-range values are clamped rather than rejected:
//!
//! - `side_item_scale` is clamped into `[MIN_SIDE_ITEM_SCALE, 1]`.
//! - `side_item_alpha` is clamped into `[0, 1]`.
//! - NaN in either falls back to the default.

use kurbo::Size;

use crate::axis::ScrollAxis;

/// Smallest side-item scale accepted by [`CarouselConfig`].
pub const MIN_SIDE_ITEM_SCALE: f64 = 0.01;

/// Default scale of fully-side items.
pub const DEFAULT_SIDE_ITEM_SCALE: f64 = 0.8;

/// Default opacity of fully-side items.
pub const DEFAULT_SIDE_ITEM_ALPHA: f64 = 0.8;

/// Default cross-axis shift of fully-side items.
pub const DEFAULT_SIDE_ITEM_SHIFT: f64 = 0.8;

/// How the gap between neighbouring items is derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpacingMode {
    /// Uniform gap between the edges of fully-scaled-down side items.
    Fixed {
        /// Gap in points.
        spacing: f64,
    },
    /// Side items overlap the centered item so that `visible_offset` of each
    /// one peeks out from under the viewport edge.
    Overlap {
        /// Visible portion in points.
        visible_offset: f64,
    },
}

impl Default for SpacingMode {
    fn default() -> Self {
        Self::Fixed { spacing: 10.0 }
    }
}

/// Tunable carousel parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub(crate) item_size: Size,
    pub(crate) side_item_scale: f64,
    pub(crate) side_item_alpha: f64,
    pub(crate) side_item_shift: f64,
    pub(crate) spacing_mode: SpacingMode,
    pub(crate) scroll_axis: ScrollAxis,
    pub(crate) depth_translation: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_size: Size::ZERO,
            side_item_scale: DEFAULT_SIDE_ITEM_SCALE,
            side_item_alpha: DEFAULT_SIDE_ITEM_ALPHA,
            side_item_shift: DEFAULT_SIDE_ITEM_SHIFT,
            spacing_mode: SpacingMode::default(),
            scroll_axis: ScrollAxis::Horizontal,
            depth_translation: true,
        }
    }
}

impl CarouselConfig {
    /// Returns a config with the given item size and defaults elsewhere.
    #[must_use]
    pub fn new(item_size: Size) -> Self {
        Self {
            item_size,
            ..Self::default()
        }
    }

    /// Sets the untransformed item size.
    #[must_use]
    pub fn with_item_size(mut self, item_size: Size) -> Self {
        self.item_size = item_size;
        self
    }

    /// Sets the side-item scale (clamped).
    #[must_use]
    pub fn with_side_item_scale(mut self, scale: f64) -> Self {
        self.side_item_scale = clamp_scale(scale);
        self
    }

    /// Sets the side-item opacity (clamped).
    #[must_use]
    pub fn with_side_item_alpha(mut self, alpha: f64) -> Self {
        self.side_item_alpha = clamp_alpha(alpha);
        self
    }

    /// Sets the side-item cross-axis shift.
    #[must_use]
    pub fn with_side_item_shift(mut self, shift: f64) -> Self {
        self.side_item_shift = shift;
        self
    }

    /// Sets the spacing mode.
    #[must_use]
    pub fn with_spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn with_scroll_axis(mut self, axis: ScrollAxis) -> Self {
        self.scroll_axis = axis;
        self
    }

    /// Enables or disables the depth translation applied on top of the
    /// item scale.
    #[must_use]
    pub fn with_depth_translation(mut self, enabled: bool) -> Self {
        self.depth_translation = enabled;
        self
    }

    /// Untransformed item size.
    #[must_use]
    pub const fn item_size(&self) -> Size {
        self.item_size
    }

    /// Scale of an item at or beyond the maximum distance, in `(0, 1]`.
    #[must_use]
    pub const fn side_item_scale(&self) -> f64 {
        self.side_item_scale
    }

    /// Opacity of an item at or beyond the maximum distance, in `[0, 1]`.
    #[must_use]
    pub const fn side_item_alpha(&self) -> f64 {
        self.side_item_alpha
    }

    /// Cross-axis shift of an item at or beyond the maximum distance.
    #[must_use]
    pub const fn side_item_shift(&self) -> f64 {
        self.side_item_shift
    }

    /// Active spacing mode.
    #[must_use]
    pub const fn spacing_mode(&self) -> SpacingMode {
        self.spacing_mode
    }

    /// Scroll axis.
    #[must_use]
    pub const fn scroll_axis(&self) -> ScrollAxis {
        self.scroll_axis
    }

    /// Whether the depth translation is applied.
    #[must_use]
    pub const fn depth_translation(&self) -> bool {
        self.depth_translation
    }

    /// Item extent along the scroll axis.
    #[must_use]
    pub const fn main_item_size(&self) -> f64 {
        self.scroll_axis.main_size(self.item_size)
    }
}

pub(crate) fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        DEFAULT_SIDE_ITEM_SCALE
    } else {
        scale.clamp(MIN_SIDE_ITEM_SCALE, 1.0)
    }
}

pub(crate) fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        DEFAULT_SIDE_ITEM_ALPHA
    } else {
        alpha.clamp(0.0, 1.0)
    }
}
