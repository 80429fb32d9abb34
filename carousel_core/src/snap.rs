// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-snap target resolution.
//!
//! When a drag ends the host proposes where scrolling would naturally stop.
//! The carousel moves that stop so the item nearest to the viewport center
//! ends up exactly centered.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Resolves the settled main-axis offset for a proposed stop.
///
/// - With `paging_enabled` the host's own paging wins and `proposed` is
///   returned unchanged.
/// - With no (non-NaN) item centers, `proposed` is returned unchanged.
/// - Otherwise the center closest to `proposed + viewport_main / 2` is
///   selected (first one wins on ties) and the offset that centers it is
///   returned, rounded down to a whole point.
#[must_use]
pub fn resolve_snap_target(
    proposed: f64,
    viewport_main: f64,
    item_centers: impl IntoIterator<Item = f64>,
    paging_enabled: bool,
) -> f64 {
    if paging_enabled {
        return proposed;
    }
    let half = viewport_main / 2.0;
    match nearest_center(item_centers, proposed + half) {
        Some((_, center)) => (center - half).floor(),
        None => proposed,
    }
}

/// Returns the position and value of the center nearest to `origin`,
/// preferring the earliest on ties. NaN centers are skipped.
#[must_use]
pub fn nearest_center(
    centers: impl IntoIterator<Item = f64>,
    origin: f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64, f64)> = None;
    for (position, center) in centers.into_iter().enumerate() {
        let distance = (center - origin).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, _, best_distance)) if best_distance <= distance => {}
            _ => best = Some((position, center, distance)),
        }
    }
    best.map(|(position, center, _)| (position, center))
}
