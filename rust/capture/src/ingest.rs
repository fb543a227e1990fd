// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scan result ingestion
//!
//! Normalizes a capability bundle into the room model's input shape and
//! hands off to [`derive_room`] — the single constructor of a well-formed
//! room. Aggregates the source already computed are trusted, not
//! re-derived, but still pass through the model's rounding rule for
//! display consistency.

use roomscan_lite_core::{derive_room, Room};
use roomscan_lite_geometry::{round2, Point2D};
use tracing::warn;

use crate::types::{ScanMeasurements, ScanResultBundle};

/// Placeholder footprint used when a bundle carries no usable floor
/// outline and no floor dimensions, in meters.
pub const DEFAULT_ROOM_WIDTH: f64 = 4.0;
pub const DEFAULT_ROOM_DEPTH: f64 = 3.0;

/// Build a [`Room`] from a finished scan bundle.
///
/// The first reported floor supplies the outline. A missing or degenerate
/// vertex list falls back to a rectangular placeholder (from the floor's
/// reported dimensions when present, defaults otherwise) so downstream
/// code never sees absent geometry — noisy scans are corrected by
/// editing, not by error recovery.
pub fn ingest_bundle(bundle: &ScanResultBundle, name: impl Into<String>) -> Room {
    let vertices = floor_vertices(bundle);
    let height = round2(bundle.measurements.height);
    derive_room(&vertices, height, None).with_name(name)
}

/// Re-round the source's aggregate measurements without re-deriving them.
pub fn normalize_measurements(m: &ScanMeasurements) -> ScanMeasurements {
    ScanMeasurements {
        wall_count: m.wall_count,
        total_wall_area: round2(m.total_wall_area),
        total_floor_area: round2(m.total_floor_area),
        ceiling_area: round2(m.ceiling_area),
        perimeter: round2(m.perimeter),
        height: round2(m.height),
    }
}

fn floor_vertices(bundle: &ScanResultBundle) -> Vec<Point2D> {
    match bundle.floors.first() {
        Some(floor) if floor.vertices.len() >= 3 => floor.vertices.clone(),
        Some(floor) => {
            warn!(
                floor = %floor.id,
                "floor outline missing; substituting rectangle from reported dimensions"
            );
            rectangle(floor.width, floor.depth)
        }
        None => {
            warn!("bundle carried no floor; substituting default placeholder");
            rectangle(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_DEPTH)
        }
    }
}

fn rectangle(width: f64, depth: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(width, 0.0),
        Point2D::new(width, depth),
        Point2D::new(0.0, depth),
    ]
}
