// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scanning-capability boundary types
//!
//! These mirror the JSON payloads of the native capture plugin; field
//! names must stay camelCase on the wire. Numeric fields arrive
//! pre-rounded to two decimals (one for durations); ingestion re-rounds
//! them through the model's rounding rule regardless.

use chrono::{DateTime, Utc};
use roomscan_lite_geometry::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

/// One wall measurement reported by the capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedWall {
    pub id: String,
    pub length: f64,
    pub height: f64,
    pub area: f64,
    /// Wall center in the scan frame
    pub position: Point3D,
    /// Rectangular face corners; may be empty on sources that do not
    /// report them
    pub corners: Vec<Point3D>,
}

/// One floor measurement reported by the capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedFloor {
    pub id: String,
    pub width: f64,
    pub depth: f64,
    pub area: f64,
    pub position: Point3D,
    /// Outline on the floor plane; may be empty on sources that only
    /// report dimensions
    pub vertices: Vec<Point2D>,
}

/// Aggregate measurements the capability computed over the whole scan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMeasurements {
    pub wall_count: usize,
    pub total_wall_area: f64,
    pub total_floor_area: f64,
    pub ceiling_area: f64,
    pub perimeter: f64,
    pub height: f64,
}

/// Bookkeeping attached to a finished scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMetadata {
    /// Seconds, one decimal
    pub scan_duration: f64,
    pub timestamp: DateTime<Utc>,
}

/// Complete measurement bundle for one finished scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResultBundle {
    pub walls: Vec<ScannedWall>,
    pub floors: Vec<ScannedFloor>,
    pub measurements: ScanMeasurements,
    pub metadata: ScanMetadata,
}

/// Capability probe result
///
/// Unsupported hardware is data, not an error — callers check this
/// before starting a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportInfo {
    pub supported: bool,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Scan session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Idle,
    Scanning,
    Processing,
    Stopped,
    Complete,
    Error,
}

/// Acknowledgement for session control calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAck {
    pub status: ScanStatus,
    pub timestamp: DateTime<Utc>,
}

/// Events delivered by a scan session
///
/// One tagged variant per event type. `Complete` is the one-shot
/// completion notification; it is delivered at most once per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanEvent {
    #[serde(rename_all = "camelCase")]
    Progress {
        percent: f64,
        detected_walls: usize,
        current_area: f64,
    },
    #[serde(rename_all = "camelCase")]
    Complete { wall_count: usize, floor_area: f64 },
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_round_trips_camel_case_json() {
        let json = r#"{
            "walls": [
                {
                    "id": "wall-0",
                    "length": 4.2,
                    "height": 2.65,
                    "area": 11.13,
                    "position": { "x": 0.0, "y": 0.0, "z": -1.9 },
                    "corners": []
                }
            ],
            "floors": [
                {
                    "id": "floor-0",
                    "width": 4.2,
                    "depth": 3.8,
                    "area": 15.96,
                    "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                    "vertices": [
                        { "x": 0.0, "y": 0.0 },
                        { "x": 4.2, "y": 0.0 },
                        { "x": 4.2, "y": 3.8 },
                        { "x": 0.0, "y": 3.8 }
                    ]
                }
            ],
            "measurements": {
                "wallCount": 4,
                "totalWallArea": 42.4,
                "totalFloorArea": 15.96,
                "ceilingArea": 15.96,
                "perimeter": 16.0,
                "height": 2.65
            },
            "metadata": {
                "scanDuration": 12.5,
                "timestamp": "2025-03-14T09:26:53Z"
            }
        }"#;

        let bundle: ScanResultBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.measurements.wall_count, 4);
        assert_eq!(bundle.measurements.total_wall_area, 42.4);
        assert_eq!(bundle.floors[0].vertices.len(), 4);

        let back = serde_json::to_value(&bundle).unwrap();
        assert_eq!(back["measurements"]["totalFloorArea"], 15.96);
        assert_eq!(back["metadata"]["scanDuration"], 12.5);
    }

    #[test]
    fn test_scan_event_tagging() {
        let complete = ScanEvent::Complete {
            wall_count: 4,
            floor_area: 15.96,
        };
        let json = serde_json::to_value(&complete).unwrap();
        assert_eq!(json["type"], "complete");
        assert_eq!(json["wallCount"], 4);

        let parsed: ScanEvent =
            serde_json::from_str(r#"{"type":"failed","message":"session interrupted"}"#).unwrap();
        assert!(matches!(parsed, ScanEvent::Failed { .. }));
    }
}
