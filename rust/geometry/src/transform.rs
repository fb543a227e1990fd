// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building-plan placement transform
//!
//! Room geometry is stored in local coordinates; placement on the shared
//! building plan (rotation about the outline centroid, then translation)
//! is applied on read. Keeping the transform out of the stored vertices
//! means repositioning can never change a room's intrinsic measurements.

use nalgebra::{Rotation2, Vector2};

use crate::point::Point2D;
use crate::polygon::centroid;

/// Rotate `vertices` about their centroid by `rotation_deg` degrees, then
/// translate by (`dx`, `dy`).
///
/// Any rotation value is accepted; callers that snap to 90° steps do so
/// before reaching this function.
pub fn transform_vertices(
    vertices: &[Point2D],
    rotation_deg: f64,
    dx: f64,
    dy: f64,
) -> Vec<Point2D> {
    let pivot = centroid(vertices);
    let rotation = Rotation2::new(rotation_deg.to_radians());

    vertices
        .iter()
        .map(|v| {
            let local = Vector2::new(v.x - pivot.x, v.y - pivot.y);
            let rotated = rotation * local;
            Point2D::new(rotated.x + pivot.x + dx, rotated.y + pivot.y + dy)
        })
        .collect()
}
