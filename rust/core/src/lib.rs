// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomScan-Lite Core
//!
//! The room geometry model: scanned floor polygons with derived wall,
//! ceiling, and perimeter measurements, aggregated into multi-room
//! building projects.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomscan_lite_core::{derive_room, ScanProject};
//! use roomscan_lite_geometry::Point2D;
//!
//! let outline = vec![
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(5.0, 0.0),
//!     Point2D::new(5.0, 4.0),
//!     Point2D::new(0.0, 4.0),
//! ];
//!
//! let room = derive_room(&outline, 2.7, None);
//! assert_eq!(room.floor.area, 20.0);
//! assert_eq!(room.walls.len(), 4);
//!
//! let project = ScanProject::new("Apartment", room);
//! assert_eq!(project.total_area, 20.0);
//! ```
//!
//! ## Model invariants
//!
//! - A room's walls correspond 1:1 to its floor polygon edges in cyclic
//!   order. [`derive_room`] is the only constructor of a well-formed
//!   [`Room`]; walls are never assembled independently of the outline.
//! - Every stored measurement equals its recomputation from the
//!   geometry, at two-decimal precision.
//! - Project totals are recomputed from the full room list on every
//!   mutation — never adjusted incrementally — so they cannot drift.
//! - All mutating operations are pure: they return a new value and no
//!   partially updated state is ever observable.

pub mod project;
pub mod room;
pub mod store;
pub mod types;

pub use project::{next_room_color, next_room_position, NEW_ROOM_SPACING, ROOM_PALETTE};
pub use room::{derive_room, DEFAULT_ROOM_NAME};
pub use store::ProjectStore;
pub use types::{Ceiling, Floor, Room, RoomPosition, ScanProject, Wall};
