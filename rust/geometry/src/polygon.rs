// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon measurements over ordered vertex sequences
//!
//! Edges are cyclic: the last vertex connects back to the first. All
//! functions accept degenerate input and return zero-valued results for
//! it instead of failing.

use crate::point::Point2D;
use crate::rounding::round2;

/// Euclidean distance between two floor-plane points.
pub fn distance(a: &Point2D, b: &Point2D) -> f64 {
    a.distance_to(b)
}

/// Polygon area via the shoelace formula (absolute value).
///
/// Returns 0.0 for fewer than 3 vertices. Simplicity is not validated;
/// a self-intersecting outline yields a well-defined number that may not
/// match the visually enclosed area.
pub fn polygon_area(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i].x * vertices[j].y;
        area -= vertices[j].x * vertices[i].y;
    }

    (area / 2.0).abs()
}

/// Perimeter as the sum of cyclic edge lengths.
///
/// Returns 0.0 for fewer than 2 vertices.
pub fn polygon_perimeter(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }

    let mut perimeter = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        perimeter += distance(&vertices[i], &vertices[j]);
    }

    perimeter
}

/// Length of every cyclic edge, rounded to measurement precision.
///
/// This is the resynchronization primitive for wall lengths after a
/// vertex edit: entry `i` is the edge from `vertices[i]` to the next
/// vertex, wrapping at the end.
pub fn edge_lengths(vertices: &[Point2D]) -> Vec<f64> {
    let n = vertices.len();
    let mut lengths = Vec::with_capacity(n);
    for i in 0..n {
        let j = (i + 1) % n;
        lengths.push(round2(distance(&vertices[i], &vertices[j])));
    }
    lengths
}

/// Vertex mean of an outline; the rotation pivot for plan placement.
///
/// Returns the origin for an empty outline.
pub fn centroid(vertices: &[Point2D]) -> Point2D {
    if vertices.is_empty() {
        return Point2D::new(0.0, 0.0);
    }

    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));

    Point2D::new(sx / n, sy / n)
}
