// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room and project model types
//!
//! These types are serialized to/from JSON and must match the interfaces
//! the mobile views consume; field names stay camelCase on the wire.

use chrono::{DateTime, Utc};
use roomscan_lite_geometry::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

/// One edge of a room's floor polygon, extruded to ceiling height.
///
/// `length` and `area` are derived from the endpoints and height and are
/// never set independently. `corners` holds the wall's rectangular face
/// in order: base-start, base-end, top-end, top-start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    /// Stable within the owning room; survives geometry edits
    pub id: String,
    /// Base endpoint at floor level (`y = 0`)
    pub start: Point3D,
    /// Base endpoint at floor level (`y = 0`)
    pub end: Point3D,
    pub height: f64,
    /// Floor-plane distance between `start` and `end`
    pub length: f64,
    /// `length * height`
    pub area: f64,
    pub corners: [Point3D; 4],
}

/// Room footprint polygon with its derived area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub area: f64,
    /// Ordered outline; assumed simple, winding not significant
    pub vertices: Vec<Point2D>,
}

/// Ceiling mirrors the floor footprint at `height` meters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ceiling {
    pub height: f64,
    pub area: f64,
}

/// Placement of a room on the shared building plan
///
/// `rotation` is in degrees about the footprint centroid; any value is
/// tolerated. The transform is applied on read — stored vertices stay in
/// local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomPosition {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// One scanned or edited room
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    /// `walls[i]` spans the polygon edge from `floor.vertices[i]` to the
    /// next vertex, wrapping at the end
    pub walls: Vec<Wall>,
    pub floor: Floor,
    pub ceiling: Ceiling,
    /// Sum of wall areas
    pub total_wall_area: f64,
    /// Sum of wall lengths
    pub perimeter: f64,
    pub position: RoomPosition,
    /// Plan display color; no semantic meaning
    pub color: String,
}

/// A named collection of rooms sharing one building-plan coordinate space
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProject {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every room add/edit/reposition
    pub updated_at: DateTime<Utc>,
    /// Insertion order is display order; rooms may overlap freely
    pub rooms: Vec<Room>,
    /// Sum of room floor areas
    pub total_area: f64,
    /// Sum of room wall-area totals
    pub total_wall_area: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_serializes_camel_case() {
        let room = crate::derive_room(
            &[
                Point2D::new(0.0, 0.0),
                Point2D::new(3.0, 0.0),
                Point2D::new(3.0, 3.0),
                Point2D::new(0.0, 3.0),
            ],
            2.5,
            None,
        );

        let json = serde_json::to_value(&room).unwrap();
        assert!(json.get("totalWallArea").is_some());
        assert!(json.get("perimeter").is_some());
        assert_eq!(json["walls"][0]["id"], "wall-0");
    }
}
