// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room derivation engine
//!
//! [`derive_room`] is the only way a well-formed [`Room`] comes into
//! existence: walls are rebuilt from the floor polygon on every edit, so
//! the cyclic wall-to-edge correspondence cannot be constructed
//! inconsistently. Repositioning and renaming never touch geometry.

use roomscan_lite_geometry::{
    edge_lengths, polygon_area, round2, transform_vertices, Point2D,
};
use uuid::Uuid;

use crate::project::ROOM_PALETTE;
use crate::types::{Ceiling, Floor, Room, RoomPosition, Wall};

/// Placeholder name for a freshly derived room.
pub const DEFAULT_ROOM_NAME: &str = "Scanned Room";

/// Build a [`Room`] from an ordered floor polygon and a ceiling height.
///
/// One wall is produced per cyclic polygon edge: its base endpoints are
/// the 3D lift of the edge's vertices at floor level, its length the
/// floor-plane edge length, its area `length * height`. Lengths are
/// rounded before the area multiply, and the room totals sum the rounded
/// parts, so every stored measurement matches its recomputation exactly.
///
/// Passing `existing_walls` (re-derivation after a vertex edit) preserves
/// wall ids by positional index, keeping selection state valid across
/// edits.
///
/// Fewer than 3 vertices yields a degenerate room (floor area 0) rather
/// than an error; callers that need a usable room check
/// `floor.area > 0.0` themselves.
pub fn derive_room(
    vertices: &[Point2D],
    ceiling_height: f64,
    existing_walls: Option<&[Wall]>,
) -> Room {
    let n = vertices.len();
    let lengths = edge_lengths(vertices);
    let mut walls = Vec::with_capacity(n);

    for i in 0..n {
        let j = (i + 1) % n;
        let start = vertices[i].lift(0.0);
        let end = vertices[j].lift(0.0);
        let length = lengths[i];
        let area = round2(length * ceiling_height);
        let id = existing_walls
            .and_then(|walls| walls.get(i))
            .map(|w| w.id.clone())
            .unwrap_or_else(|| format!("wall-{i}"));

        walls.push(Wall {
            id,
            start,
            end,
            height: ceiling_height,
            length,
            area,
            corners: [
                start,
                end,
                vertices[j].lift(ceiling_height),
                vertices[i].lift(ceiling_height),
            ],
        });
    }

    let floor_area = round2(polygon_area(vertices));
    let total_wall_area = round2(walls.iter().map(|w| w.area).sum());
    let perimeter = round2(walls.iter().map(|w| w.length).sum());

    Room {
        id: Uuid::new_v4().to_string(),
        name: DEFAULT_ROOM_NAME.to_string(),
        walls,
        floor: Floor {
            area: floor_area,
            vertices: vertices.to_vec(),
        },
        ceiling: Ceiling {
            height: ceiling_height,
            area: floor_area,
        },
        total_wall_area,
        perimeter,
        position: RoomPosition::default(),
        color: ROOM_PALETTE[0].to_string(),
    }
}

impl Room {
    /// Re-derive this room from an edited floor outline.
    ///
    /// Identity (id, name, position, color) and wall ids carry over; every
    /// measurement is rebuilt from the new vertices.
    pub fn with_floor_vertices(&self, vertices: &[Point2D]) -> Room {
        let derived = derive_room(vertices, self.ceiling.height, Some(&self.walls));
        Room {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position,
            color: self.color.clone(),
            ..derived
        }
    }

    /// Place this room on the building plan.
    ///
    /// Position is presentation state: local geometry and every
    /// measurement stay untouched.
    pub fn with_position(&self, position: RoomPosition) -> Room {
        Room {
            position,
            ..self.clone()
        }
    }

    /// Rename this room.
    pub fn with_name(&self, name: impl Into<String>) -> Room {
        Room {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Footprint in building-plan coordinates: local vertices rotated
    /// about their centroid by `position.rotation` degrees, then
    /// translated by the position offset.
    pub fn plan_vertices(&self) -> Vec<Point2D> {
        transform_vertices(
            &self.floor.vertices,
            self.position.rotation,
            self.position.x,
            self.position.y,
        )
    }
}
