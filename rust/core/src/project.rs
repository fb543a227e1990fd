// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project aggregation
//!
//! Projects are immutable values: every mutation returns a new
//! [`ScanProject`] whose totals were recomputed over the full room list.
//! Totals are never adjusted incrementally, so they cannot drift from the
//! rooms they summarize, and no partially updated project is ever
//! observable.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Room, RoomPosition, ScanProject};
use roomscan_lite_geometry::round2;

/// Plan colors cycled through as rooms are added to a project.
pub const ROOM_PALETTE: [&str; 6] = [
    "#4f8fea", "#e36b6b", "#5bbf7a", "#e3a94f", "#9b6be3", "#4fc3d9",
];

/// Offset along +x applied per existing room when placing a new one, so
/// fresh rooms land beside the plan instead of on top of it.
pub const NEW_ROOM_SPACING: f64 = 6.0;

impl ScanProject {
    /// Create a project around its first confirmed room.
    pub fn new(name: impl Into<String>, first_room: Room) -> ScanProject {
        let now = Utc::now();
        let rooms = vec![first_room];
        let (total_area, total_wall_area) = totals(&rooms);

        ScanProject {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            rooms,
            total_area,
            total_wall_area,
        }
    }

    /// Append a room, preserving insertion order.
    ///
    /// The caller assigns the room's `position` and `color` first — see
    /// [`next_room_position`] and [`next_room_color`].
    pub fn add_room(&self, room: Room) -> ScanProject {
        let mut rooms = self.rooms.clone();
        rooms.push(room);
        self.with_rooms(rooms)
    }

    /// Replace the room whose id matches `updated`, preserving order.
    ///
    /// An id with no match leaves the project unchanged — documented
    /// policy, not an error.
    pub fn update_room(&self, updated: Room) -> ScanProject {
        if !self.rooms.iter().any(|r| r.id == updated.id) {
            return self.clone();
        }

        let rooms = self
            .rooms
            .iter()
            .map(|r| {
                if r.id == updated.id {
                    updated.clone()
                } else {
                    r.clone()
                }
            })
            .collect();
        self.with_rooms(rooms)
    }

    /// Move or rotate the room with `room_id` on the building plan.
    ///
    /// Position never affects measurements, but the update still runs
    /// through the single replace-and-recompute path so `updated_at`
    /// refreshes and totals stay a pure function of `rooms`.
    pub fn update_room_position(&self, room_id: &str, position: RoomPosition) -> ScanProject {
        match self.rooms.iter().find(|r| r.id == room_id) {
            Some(room) => self.update_room(room.with_position(position)),
            None => self.clone(),
        }
    }

    /// Remove the room with `room_id`; an empty project has zero totals.
    pub fn remove_room(&self, room_id: &str) -> ScanProject {
        if !self.rooms.iter().any(|r| r.id == room_id) {
            return self.clone();
        }

        let rooms = self
            .rooms
            .iter()
            .filter(|r| r.id != room_id)
            .cloned()
            .collect();
        self.with_rooms(rooms)
    }

    fn with_rooms(&self, rooms: Vec<Room>) -> ScanProject {
        let (total_area, total_wall_area) = totals(&rooms);
        ScanProject {
            rooms,
            total_area,
            total_wall_area,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

fn totals(rooms: &[Room]) -> (f64, f64) {
    let total_area = round2(rooms.iter().map(|r| r.floor.area).sum());
    let total_wall_area = round2(rooms.iter().map(|r| r.total_wall_area).sum());
    (total_area, total_wall_area)
}

/// Palette color for the next room added to `project`: the n-th room
/// (0-indexed by insertion order) gets `ROOM_PALETTE[n % len]`.
pub fn next_room_color(project: &ScanProject) -> String {
    ROOM_PALETTE[project.rooms.len() % ROOM_PALETTE.len()].to_string()
}

/// Building-plan position for the next room added to `project`: a fixed
/// offset along +x per existing room, no rotation.
pub fn next_room_position(project: &ScanProject) -> RoomPosition {
    RoomPosition {
        x: project.rooms.len() as f64 * NEW_ROOM_SPACING,
        y: 0.0,
        rotation: 0.0,
    }
}
