// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated scanning capability
//!
//! Stands in for the native LiDAR session wherever capture hardware is
//! unavailable, producing dimensionally plausible rectangular rooms
//! through the same [`RoomScanner`] interface. Sessions step forward via
//! [`MockScanner::advance`], emitting progress events and finally the
//! one-shot completion event.

use std::collections::VecDeque;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scanner::{ack, RoomScanner};
use crate::types::{
    ScanEvent, ScanMeasurements, ScanMetadata, ScanResultBundle, ScanStatus, ScannedFloor,
    ScannedWall, SessionAck, SupportInfo,
};
use roomscan_lite_geometry::{round2, round_to, Point2D};

/// Dimension ranges and pacing for simulated scans, in meters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockScanConfig {
    pub min_width: f64,
    pub max_width: f64,
    pub min_depth: f64,
    pub max_depth: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Progress gained per [`MockScanner::advance`] call, percent
    pub progress_step: f64,
    /// Simulated seconds elapsed per advance
    pub step_duration: f64,
}

impl Default for MockScanConfig {
    fn default() -> Self {
        Self {
            min_width: 3.0,
            max_width: 6.5,
            min_depth: 2.5,
            max_depth: 5.5,
            min_height: 2.4,
            max_height: 3.0,
            progress_step: 20.0,
            step_duration: 2.5,
        }
    }
}

/// Simulated room-scanning capability.
#[derive(Debug, Clone)]
pub struct MockScanner {
    config: MockScanConfig,
    fixed_dimensions: Option<(f64, f64, f64)>,
    status: ScanStatus,
    progress: f64,
    elapsed: f64,
    dimensions: (f64, f64, f64),
    results: Option<ScanResultBundle>,
    events: VecDeque<ScanEvent>,
}

impl MockScanner {
    pub fn new() -> Self {
        Self::with_config(MockScanConfig::default())
    }

    pub fn with_config(config: MockScanConfig) -> Self {
        Self {
            config,
            fixed_dimensions: None,
            status: ScanStatus::Idle,
            progress: 0.0,
            elapsed: 0.0,
            dimensions: (0.0, 0.0, 0.0),
            results: None,
            events: VecDeque::new(),
        }
    }

    /// Fix the simulated room dimensions instead of randomizing them.
    /// Deterministic sessions for tests and previews.
    pub fn with_dimensions(width: f64, depth: f64, height: f64) -> Self {
        Self {
            fixed_dimensions: Some((width, depth, height)),
            ..Self::new()
        }
    }

    /// Step the simulated session forward.
    ///
    /// Emits a progress event per step; once progress reaches 100% the
    /// bundle is finalized and the completion event is queued. No-op
    /// outside an active session.
    pub fn advance(&mut self) {
        if self.status != ScanStatus::Scanning {
            return;
        }

        self.progress = (self.progress + self.config.progress_step).min(100.0);
        self.elapsed += self.config.step_duration;

        let (width, depth, _) = self.dimensions;
        let floor_area = round2(width * depth);

        if self.progress >= 100.0 {
            let bundle = self.build_bundle();
            let wall_count = bundle.measurements.wall_count;
            debug!(wall_count, floor_area, "simulated scan complete");
            self.results = Some(bundle);
            self.status = ScanStatus::Complete;
            self.events.push_back(ScanEvent::Complete {
                wall_count,
                floor_area,
            });
        } else {
            let detected_walls = ((self.progress / 25.0) as usize).min(4);
            self.events.push_back(ScanEvent::Progress {
                percent: self.progress,
                detected_walls,
                current_area: round2(floor_area * self.progress / 100.0),
            });
        }
    }

    fn build_bundle(&self) -> ScanResultBundle {
        let (width, depth, height) = self.dimensions;

        // Rectangle centered on the scan origin
        let half_w = width / 2.0;
        let half_d = depth / 2.0;
        let vertices = vec![
            Point2D::new(round2(-half_w), round2(-half_d)),
            Point2D::new(round2(half_w), round2(-half_d)),
            Point2D::new(round2(half_w), round2(half_d)),
            Point2D::new(round2(-half_w), round2(half_d)),
        ];

        let walls = (0..4)
            .map(|i| {
                let start = vertices[i];
                let end = vertices[(i + 1) % 4];
                let length = round2(start.distance_to(&end));
                let midpoint = Point2D::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
                ScannedWall {
                    id: format!("wall-{i}"),
                    length,
                    height: round2(height),
                    area: round2(length * height),
                    position: midpoint.lift(0.0),
                    corners: vec![
                        start.lift(0.0),
                        end.lift(0.0),
                        end.lift(height),
                        start.lift(height),
                    ],
                }
            })
            .collect();

        let floor_area = round2(width * depth);

        ScanResultBundle {
            walls,
            floors: vec![ScannedFloor {
                id: "floor-0".to_string(),
                width: round2(width),
                depth: round2(depth),
                area: floor_area,
                position: Point2D::new(0.0, 0.0).lift(0.0),
                vertices,
            }],
            measurements: ScanMeasurements {
                wall_count: 4,
                total_wall_area: round2(2.0 * (width + depth) * height),
                total_floor_area: floor_area,
                ceiling_area: floor_area,
                perimeter: round2(2.0 * (width + depth)),
                height: round2(height),
            },
            metadata: ScanMetadata {
                scan_duration: round_to(self.elapsed, 1),
                timestamp: Utc::now(),
            },
        }
    }
}

impl Default for MockScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomScanner for MockScanner {
    fn is_supported(&self) -> SupportInfo {
        SupportInfo {
            supported: true,
            version: "mock".to_string(),
            reason: None,
        }
    }

    fn start_scan(&mut self) -> Result<SessionAck> {
        if self.status == ScanStatus::Scanning {
            return Err(Error::SessionActive);
        }

        self.dimensions = match self.fixed_dimensions {
            Some(dims) => dims,
            None => {
                // Decimeter precision so edge midpoints and half-extents
                // stay exactly representable at measurement precision
                let mut rng = rand::rng();
                (
                    round_to(rng.random_range(self.config.min_width..self.config.max_width), 1),
                    round_to(rng.random_range(self.config.min_depth..self.config.max_depth), 1),
                    round_to(rng.random_range(self.config.min_height..self.config.max_height), 1),
                )
            }
        };

        self.status = ScanStatus::Scanning;
        self.progress = 0.0;
        self.elapsed = 0.0;
        self.results = None;
        self.events.clear();

        debug!(
            width = self.dimensions.0,
            depth = self.dimensions.1,
            height = self.dimensions.2,
            "simulated scan started"
        );
        Ok(ack(ScanStatus::Scanning))
    }

    fn stop_scan(&mut self) -> Result<SessionAck> {
        if self.status == ScanStatus::Scanning {
            // Cancellation: partial state is discarded, never ingested
            debug!(progress = self.progress, "scan stopped before completion");
            self.status = ScanStatus::Stopped;
            self.progress = 0.0;
            self.results = None;
            self.events.clear();
        }
        Ok(ack(self.status))
    }

    fn poll_event(&mut self) -> Option<ScanEvent> {
        self.events.pop_front()
    }

    fn results(&self) -> Result<ScanResultBundle> {
        self.results.clone().ok_or(Error::NoResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(scanner: &mut MockScanner) {
        scanner.start_scan().unwrap();
        while scanner.status != ScanStatus::Complete {
            scanner.advance();
        }
    }

    #[test]
    fn test_results_before_completion_rejected() {
        let mut scanner = MockScanner::new();
        assert!(matches!(scanner.results(), Err(Error::NoResults)));

        scanner.start_scan().unwrap();
        scanner.advance();
        assert!(matches!(scanner.results(), Err(Error::NoResults)));
    }

    #[test]
    fn test_double_start_rejected() {
        let mut scanner = MockScanner::new();
        scanner.start_scan().unwrap();
        assert!(matches!(scanner.start_scan(), Err(Error::SessionActive)));
    }

    #[test]
    fn test_completion_event_is_one_shot() {
        let mut scanner = MockScanner::with_dimensions(4.2, 3.8, 2.65);
        run_to_completion(&mut scanner);

        let mut completions = 0;
        while let Some(event) = scanner.poll_event() {
            if let ScanEvent::Complete {
                wall_count,
                floor_area,
            } = event
            {
                completions += 1;
                assert_eq!(wall_count, 4);
                assert_eq!(floor_area, 15.96);
            }
        }
        assert_eq!(completions, 1);
        assert!(scanner.poll_event().is_none());
    }

    #[test]
    fn test_cancellation_discards_partial_state() {
        let mut scanner = MockScanner::with_dimensions(4.2, 3.8, 2.65);
        scanner.start_scan().unwrap();
        scanner.advance();
        scanner.advance();

        let ack = scanner.stop_scan().unwrap();
        assert_eq!(ack.status, ScanStatus::Stopped);
        assert!(scanner.poll_event().is_none());
        assert!(matches!(scanner.results(), Err(Error::NoResults)));
    }

    #[test]
    fn test_bundle_fields_pre_rounded_and_consistent() {
        let mut scanner = MockScanner::with_dimensions(4.2, 3.8, 2.65);
        run_to_completion(&mut scanner);
        let bundle = scanner.results().unwrap();

        assert_eq!(bundle.walls.len(), 4);
        assert_eq!(bundle.floors.len(), 1);
        assert_eq!(bundle.floors[0].vertices.len(), 4);
        assert_eq!(bundle.measurements.total_floor_area, 15.96);
        assert_eq!(bundle.measurements.perimeter, 16.0);
        assert_eq!(bundle.measurements.total_wall_area, 42.4);

        for wall in &bundle.walls {
            assert_eq!(wall.area, round2(wall.length * wall.height));
            assert_eq!(wall.corners.len(), 4);
        }
        // Duration carries one decimal
        assert_eq!(
            bundle.metadata.scan_duration,
            round_to(bundle.metadata.scan_duration, 1)
        );
    }

    #[test]
    fn test_random_dimensions_stay_in_range() {
        let config = MockScanConfig::default();
        let mut scanner = MockScanner::with_config(config.clone());
        run_to_completion(&mut scanner);
        let bundle = scanner.results().unwrap();

        let floor = &bundle.floors[0];
        assert!(floor.width >= config.min_width && floor.width <= config.max_width);
        assert!(floor.depth >= config.min_depth && floor.depth <= config.max_depth);
        let height = bundle.measurements.height;
        assert!(height >= config.min_height && height <= config.max_height);
    }
}
