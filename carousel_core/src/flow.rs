// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Untransformed single-line flow placement.
//!
//! Items sit on one line along the scroll axis, separated by the line
//! spacing, with the section insets before the first and after the last item:
//!
//! ```text
//!   stride   = max(item_main + line_spacing, 0)
//!   main(i)  = inset_start + i × stride
//!   cross    = cross_inset
//!   content  = inset_start + item_main + (n − 1) × stride + inset_end
//! ```
//!
//! With the insets centering one item, item `i` is centered in the viewport
//! when the content offset is `i × stride`.
//!
//! A negative line spacing can exceed the item size (heavy overlap). The
//! stride then stops at zero: items stack in place and the content never
//! shrinks below one item plus both insets.

use kurbo::{Rect, Size};

use crate::axis::ScrollAxis;
use crate::geometry::LayoutGeometry;

/// Frame placement for one geometry, item size, and axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowFrames {
    axis: ScrollAxis,
    item_size: Size,
    geometry: LayoutGeometry,
}

impl FlowFrames {
    /// Creates a placement.
    #[must_use]
    pub const fn new(axis: ScrollAxis, item_size: Size, geometry: LayoutGeometry) -> Self {
        Self {
            axis,
            item_size,
            geometry,
        }
    }

    /// Geometry this placement was built from.
    #[must_use]
    pub const fn geometry(&self) -> LayoutGeometry {
        self.geometry
    }

    /// Distance between the leading edges of neighbouring items, never
    /// negative.
    #[must_use]
    pub fn stride(&self) -> f64 {
        (self.axis.main_size(self.item_size) + self.geometry.line_spacing).max(0.0)
    }

    /// Base frame of item `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Rect {
        let main = self.axis.main_inset(self.geometry.insets) + index as f64 * self.stride();
        let cross = self.axis.cross_inset(self.geometry.insets);
        Rect::from_origin_size(self.axis.point(main, cross), self.item_size)
    }

    /// Main-axis content offset that centers item `index` in the viewport.
    #[must_use]
    pub fn centering_offset(&self, index: usize) -> f64 {
        index as f64 * self.stride()
    }

    /// Total scrollable content size for `count` items.
    ///
    /// Zero items yield [`Size::ZERO`].
    #[must_use]
    pub fn content_size(&self, count: usize) -> Size {
        if count == 0 {
            return Size::ZERO;
        }
        let insets = self.geometry.insets;
        let main = self.axis.main_inset(insets)
            + self.axis.main_size(self.item_size)
            + (count - 1) as f64 * self.stride()
            + self.axis.main_inset_end(insets);
        let cross = self.axis.cross_inset(insets)
            + self.axis.cross_size(self.item_size)
            + self.axis.cross_inset_end(insets);
        self.axis.size(main, cross)
    }

    /// Indices of the items whose base frame intersects `rect`, in order.
    ///
    /// Touching edges do not count as intersecting, and a zero-area `rect`
    /// intersects nothing.
    pub fn indices_in(&self, rect: Rect, count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..count).filter(move |&i| overlaps(self.frame(i), rect))
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    !b.is_zero_area() && a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
