// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section insets and inter-item spacing.
//!
//! Insets center a single item in the viewport on both axes:
//!
//! ```text
//!   inset = (viewport − item) / 2
//! ```
//!
//! Line spacing is measured from the edge of a fully-scaled-down side item,
//! so the half of the item lost to scaling is subtracted:
//!
//! ```text
//!   scaled_item_offset = (main − main × side_item_scale) / 2
//!   Fixed   → spacing − scaled_item_offset
//!   Overlap → main_inset − (visible_offset + scaled_item_offset)
//! ```
//!
//! Negative spacing is valid; it is how [`SpacingMode::Overlap`] produces
//! overlapping neighbours.

use kurbo::Insets;

use crate::config::{CarouselConfig, SpacingMode};
use crate::state::LayoutState;

/// Derived geometry for one [`LayoutState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGeometry {
    /// Symmetric section insets.
    pub insets: Insets,
    /// Distance between neighbouring item edges along the scroll axis.
    pub line_spacing: f64,
    /// Half the main-axis size lost when an item is at minimum scale.
    pub scaled_item_offset: f64,
}

/// Computes insets and line spacing for `state` under `config`.
///
/// Uses the scroll axis from `state`; `config`'s axis is only consulted by the
/// engine when it builds the state.
#[must_use]
pub fn recompute_geometry(state: &LayoutState, config: &CarouselConfig) -> LayoutGeometry {
    let axis = state.scroll_axis;
    let item = config.item_size;
    let viewport = state.viewport_size;

    let x_inset = (viewport.width - item.width) / 2.0;
    let y_inset = (viewport.height - item.height) / 2.0;
    let insets = Insets::uniform_xy(x_inset, y_inset);

    let side = axis.main_size(item);
    let scaled_item_offset = (side - side * config.side_item_scale) / 2.0;

    let line_spacing = match config.spacing_mode {
        SpacingMode::Fixed { spacing } => spacing - scaled_item_offset,
        SpacingMode::Overlap { visible_offset } => {
            let inset = axis.main_inset(insets);
            inset - (visible_offset + scaled_item_offset)
        }
    };

    LayoutGeometry {
        insets,
        line_spacing,
        scaled_item_offset,
    }
}
