// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item visual attributes.
//!
//! Every item is interpolated linearly between its *centered* look (scale 1,
//! opacity 1, no shift) and its *side* look (`side_item_scale`,
//! `side_item_alpha`, `side_item_shift`) according to a proximity ratio:
//!
//! ```text
//!   max_distance = main_item_size + line_spacing
//!   distance     = min(|viewport_center − normalized_center|, max_distance)
//!   ratio        = (max_distance − distance) / max_distance
//! ```
//!
//! `ratio` is 1 at the viewport center and 0 at or beyond `max_distance`.
//! A non-positive (or NaN) `max_distance` yields `ratio = 1`.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::CarouselConfig;
use crate::transform::{DEPTH_DIVISOR, Transform3d};

/// Presentation attributes for one item, produced fresh on every pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemAttributes {
    /// Item index within the collection.
    pub index: usize,
    /// Untransformed frame in content coordinates.
    pub frame: Rect,
    /// Offset to add to the frame center (cross-axis shift only).
    pub center_offset: Vec2,
    /// Uniform in-plane scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order; larger values draw above smaller ones.
    pub stack_order: i32,
    /// Composed scale and optional depth transform.
    pub transform: Transform3d,
}

impl ItemAttributes {
    /// Shifted center in content coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center() + self.center_offset
    }
}

/// Maps distance from the viewport center to a proximity ratio in `[0, 1]`.
#[must_use]
pub fn proximity_ratio(distance: f64, max_distance: f64) -> f64 {
    if !(max_distance > 0.0) {
        return 1.0;
    }
    let distance = distance.abs().min(max_distance);
    (max_distance - distance) / max_distance
}

/// Computes the attributes for the item at `index` with base `frame`.
///
/// `viewport_center` is half the viewport's main-axis extent,
/// `content_offset` is the host's scroll offset along the main axis, and
/// `line_spacing` comes from the current
/// [`LayoutGeometry`](crate::geometry::LayoutGeometry).
#[must_use]
pub fn transform_item(
    index: usize,
    frame: Rect,
    viewport_center: f64,
    content_offset: f64,
    config: &CarouselConfig,
    line_spacing: f64,
) -> ItemAttributes {
    let axis = config.scroll_axis;
    let normalized_center = axis.main_of(frame.center()) - content_offset;
    let signed_distance = viewport_center - normalized_center;

    let max_distance = config.main_item_size() + line_spacing;
    let ratio = proximity_ratio(signed_distance, max_distance);

    let opacity = ratio * (1.0 - config.side_item_alpha) + config.side_item_alpha;
    let scale = ratio * (1.0 - config.side_item_scale) + config.side_item_scale;
    let shift = (1.0 - ratio) * config.side_item_shift;

    let depth = if config.depth_translation {
        -(signed_distance / DEPTH_DIVISOR).abs()
    } else {
        0.0
    };

    ItemAttributes {
        index,
        frame,
        center_offset: axis.cross_offset(shift),
        scale,
        opacity,
        stack_order: stack_order_for(opacity),
        transform: Transform3d::scale_with_depth(scale, depth),
    }
}

/// Sorts `items` so that lower stack orders come first, breaking ties by
/// ascending index.
pub fn back_to_front(items: &mut [ItemAttributes]) {
    items.sort_by_key(|a| (a.stack_order, a.index));
}

/// Returns the indices of `items` in back-to-front drawing order.
#[must_use]
pub fn draw_order(items: &[ItemAttributes]) -> Vec<usize> {
    let mut sorted: Vec<(i32, usize)> = items.iter().map(|a| (a.stack_order, a.index)).collect();
    sorted.sort_unstable();
    sorted.into_iter().map(|(_, index)| index).collect()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "opacity is in [0, 1] so the product fits in i32"
)]
fn stack_order_for(opacity: f64) -> i32 {
    (opacity * 10.0).floor() as i32
}
