// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 transform for item presentation.
//!
//! Carousel items only ever need a uniform in-plane scale, optionally combined
//! with a translation along Z, so this type covers construction, composition,
//! and reading back those components.

use core::ops::Mul;

/// Divisor applied to the main-axis distance from the viewport center to get
/// the depth offset of an item.
pub const DEPTH_DIVISOR: f64 = 1_000.0;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column*, matching the layout of Core Animation's
/// `CATransform3D` and GPU uniform buffers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self::from_scale(1.0, 1.0, 1.0);

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Uniform in-plane scale followed by a push along Z.
    ///
    /// The translation is applied in the item's local space before scaling;
    /// since Z is not scaled the resulting depth is exactly `depth`.
    #[inline]
    #[must_use]
    pub fn scale_with_depth(scale: f64, depth: f64) -> Self {
        Self::from_scale(scale, scale, 1.0) * Self::from_translation(0.0, 0.0, depth)
    }

    /// Translation along Z.
    #[inline]
    #[must_use]
    pub const fn translation_z(self) -> f64 {
        self.cols[3][2]
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}
