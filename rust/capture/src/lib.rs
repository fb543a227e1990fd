// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomScan-Lite Capture
//!
//! The scanning-capability boundary: typed bundle payloads, the
//! [`RoomScanner`] seam, a simulated scanner for platforms without LiDAR
//! hardware, and ingestion of finished bundles into the room model.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomscan_lite_capture::{ingest_bundle, MockScanner, RoomScanner};
//!
//! let mut scanner = MockScanner::with_dimensions(4.2, 3.8, 2.65);
//! scanner.start_scan().unwrap();
//! while scanner.results().is_err() {
//!     scanner.advance();
//! }
//!
//! let bundle = scanner.results().unwrap();
//! let room = ingest_bundle(&bundle, "Living Room");
//! assert_eq!(room.floor.area, 15.96);
//! assert_eq!(room.walls.len(), 4);
//! ```
//!
//! Only this boundary can fail (unsupported hardware, results requested
//! before completion); failures are values, never panics, and never cross
//! into the model crates.

pub mod error;
pub mod ingest;
pub mod mock;
pub mod scanner;
pub mod types;

pub use error::{Error, Result};
pub use ingest::{ingest_bundle, normalize_measurements, DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_WIDTH};
pub use mock::{MockScanConfig, MockScanner};
pub use scanner::{RoomScanner, UnsupportedScanner};
pub use types::{
    ScanEvent, ScanMeasurements, ScanMetadata, ScanResultBundle, ScanStatus, ScannedFloor,
    ScannedWall, SessionAck, SupportInfo,
};
