// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomScan-Lite Geometry Kernel
//!
//! Pure 2D measurement functions over ordered floor-plane point sequences.
//! Everything the room model derives — areas, perimeters, wall lengths —
//! funnels through this crate so the same rounding and edge-wrapping rules
//! apply everywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomscan_lite_geometry::{polygon_area, polygon_perimeter, Point2D};
//!
//! let outline = vec![
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(5.0, 0.0),
//!     Point2D::new(5.0, 4.0),
//!     Point2D::new(0.0, 4.0),
//! ];
//!
//! assert_eq!(polygon_area(&outline), 20.0);
//! assert_eq!(polygon_perimeter(&outline), 18.0);
//! ```
//!
//! ## Design notes
//!
//! - All functions are total: degenerate input (too few vertices, empty
//!   sequences) produces zero-valued output, never an error.
//! - Polygon simplicity is not validated. The shoelace formula yields a
//!   well-defined number for a self-intersecting outline, which may not
//!   match the visually enclosed area.
//! - [`round_to`]/[`round2`] give every derived measurement a stable,
//!   comparison-safe decimal representation.

pub mod point;
pub mod polygon;
pub mod rounding;
pub mod transform;

pub use point::{Point2D, Point3D};
pub use polygon::{centroid, distance, edge_lengths, polygon_area, polygon_perimeter};
pub use rounding::{round2, round_to};
pub use transform::transform_vertices;
