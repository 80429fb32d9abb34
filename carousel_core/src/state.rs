// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout state snapshot used for change detection.

use kurbo::Size;

use crate::axis::ScrollAxis;

/// The host-dependent inputs that geometry is derived from.
///
/// Two states are equal iff both the viewport size and the scroll axis match.
/// The engine recomputes insets and line spacing only when this changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    /// Size of the host's visible bounds.
    pub viewport_size: Size,
    /// Scroll direction.
    pub scroll_axis: ScrollAxis,
}

impl LayoutState {
    /// Creates a state snapshot.
    #[inline]
    #[must_use]
    pub const fn new(viewport_size: Size, scroll_axis: ScrollAxis) -> Self {
        Self {
            viewport_size,
            scroll_axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_needs_both_fields() {
        let a = LayoutState::new(Size::new(320.0, 480.0), ScrollAxis::Horizontal);
        let b = LayoutState::new(Size::new(320.0, 480.0), ScrollAxis::Horizontal);
        let c = LayoutState::new(Size::new(320.0, 480.0), ScrollAxis::Vertical);
        let d = LayoutState::new(Size::new(321.0, 480.0), ScrollAxis::Horizontal);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
