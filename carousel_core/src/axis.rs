// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis and main/cross component selection.

use kurbo::{Insets, Point, Size, Vec2};

/// The direction a carousel scrolls in.
///
/// The *main* axis is the scroll direction; the *cross* axis is perpendicular
/// to it and carries the side-item shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Items are laid out left to right.
    #[default]
    Horizontal,
    /// Items are laid out top to bottom.
    Vertical,
}

impl ScrollAxis {
    /// Returns the main-axis extent of `size`.
    #[inline]
    #[must_use]
    pub const fn main_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the cross-axis extent of `size`.
    #[inline]
    #[must_use]
    pub const fn cross_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Returns the main-axis coordinate of `point`.
    #[inline]
    #[must_use]
    pub const fn main_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns the leading inset along the main axis.
    #[inline]
    #[must_use]
    pub const fn main_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.x0,
            Self::Vertical => insets.y0,
        }
    }

    /// Returns the trailing inset along the main axis.
    #[inline]
    #[must_use]
    pub const fn main_inset_end(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.x1,
            Self::Vertical => insets.y1,
        }
    }

    /// Returns the leading inset along the cross axis.
    #[inline]
    #[must_use]
    pub const fn cross_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.y0,
            Self::Vertical => insets.x0,
        }
    }

    /// Returns the trailing inset along the cross axis.
    #[inline]
    #[must_use]
    pub const fn cross_inset_end(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.y1,
            Self::Vertical => insets.x1,
        }
    }

    /// Builds a point from main- and cross-axis coordinates.
    #[inline]
    #[must_use]
    pub const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main- and cross-axis extents.
    #[inline]
    #[must_use]
    pub const fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Builds an offset that moves only along the cross axis.
    #[inline]
    #[must_use]
    pub const fn cross_offset(self, amount: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(0.0, amount),
            Self::Vertical => Vec2::new(amount, 0.0),
        }
    }

    /// Returns `point` with its main-axis coordinate replaced by `main`.
    #[inline]
    #[must_use]
    pub const fn with_main(self, point: Point, main: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, point.y),
            Self::Vertical => Point::new(point.x, main),
        }
    }

    /// Returns a lowercase name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_and_cross_follow_axis() {
        let size = Size::new(320.0, 480.0);
        assert_eq!(ScrollAxis::Horizontal.main_size(size), 320.0);
        assert_eq!(ScrollAxis::Horizontal.cross_size(size), 480.0);
        assert_eq!(ScrollAxis::Vertical.main_size(size), 480.0);
        assert_eq!(ScrollAxis::Vertical.cross_size(size), 320.0);
    }

    #[test]
    fn cross_offset_is_perpendicular() {
        assert_eq!(ScrollAxis::Horizontal.cross_offset(3.0), Vec2::new(0.0, 3.0));
        assert_eq!(ScrollAxis::Vertical.cross_offset(3.0), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn point_and_size_round_trip_through_main() {
        let axis = ScrollAxis::Vertical;
        let p = axis.point(10.0, 2.0);
        assert_eq!(p, Point::new(2.0, 10.0));
        assert_eq!(axis.main_of(p), 10.0);
        assert_eq!(axis.size(5.0, 1.0), Size::new(1.0, 5.0));
    }

    #[test]
    fn with_main_keeps_cross_component() {
        let p = Point::new(7.0, 9.0);
        assert_eq!(ScrollAxis::Horizontal.with_main(p, 1.0), Point::new(1.0, 9.0));
        assert_eq!(ScrollAxis::Vertical.with_main(p, 1.0), Point::new(7.0, 1.0));
    }
}
