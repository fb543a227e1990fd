// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scan flow: simulated capture session → bundle ingestion →
//! project aggregation, with totals checked after every mutation.

use roomscan_lite_capture::{
    ingest_bundle, MockScanner, RoomScanner, ScanEvent, ScanResultBundle,
};
use roomscan_lite_core::{
    next_room_color, next_room_position, RoomPosition, ScanProject, ROOM_PALETTE,
};
use roomscan_lite_geometry::{round2, Point2D};

/// Drive a mock session to completion and return its bundle.
fn scan(width: f64, depth: f64, height: f64) -> ScanResultBundle {
    let mut scanner = MockScanner::with_dimensions(width, depth, height);

    assert!(scanner.is_supported().supported);
    scanner.start_scan().unwrap();

    let mut completed = false;
    while !completed {
        scanner.advance();
        while let Some(event) = scanner.poll_event() {
            match event {
                ScanEvent::Complete {
                    wall_count,
                    floor_area,
                } => {
                    assert_eq!(wall_count, 4);
                    assert_eq!(floor_area, round2(width * depth));
                    completed = true;
                }
                ScanEvent::Progress { percent, .. } => {
                    assert!(percent < 100.0);
                }
                ScanEvent::Failed { message } => panic!("scan failed: {message}"),
            }
        }
    }

    scanner.results().unwrap()
}

fn assert_totals_consistent(project: &ScanProject) {
    let area = round2(project.rooms.iter().map(|r| r.floor.area).sum());
    let wall_area = round2(project.rooms.iter().map(|r| r.total_wall_area).sum());
    assert_eq!(project.total_area, area);
    assert_eq!(project.total_wall_area, wall_area);
}

#[test]
fn test_scan_to_room_measurements() {
    let bundle = scan(4.2, 3.8, 2.65);
    let room = ingest_bundle(&bundle, "Living Room");

    assert_eq!(room.name, "Living Room");
    assert_eq!(room.walls.len(), 4);
    assert_eq!(room.floor.area, 15.96);
    assert_eq!(room.ceiling.area, 15.96);
    assert_eq!(room.perimeter, 16.0);
    assert_eq!(room.total_wall_area, 42.4);

    // Stored invariants hold field by field
    for wall in &room.walls {
        assert_eq!(wall.area, round2(wall.length * wall.height));
        assert_eq!(
            wall.length,
            round2(wall.start.floor_plane().distance_to(&wall.end.floor_plane()))
        );
    }
}

#[test]
fn test_multi_room_project_flow() {
    let first = ingest_bundle(&scan(4.2, 3.8, 2.65), "Living Room");
    let mut project = ScanProject::new("Apartment", first);
    assert_totals_consistent(&project);
    assert_eq!(project.total_area, 15.96);

    // Second scan appended with caller-assigned placement and color
    let mut second = ingest_bundle(&scan(3.2, 2.8, 2.5), "Bedroom");
    second.color = next_room_color(&project);
    second = second.with_position(next_room_position(&project));
    project = project.add_room(second);

    assert_totals_consistent(&project);
    assert_eq!(project.rooms.len(), 2);
    assert_eq!(project.rooms[1].color, ROOM_PALETTE[1]);
    assert_eq!(project.total_area, round2(15.96 + 8.96));

    // Vertex edit flows back through derivation into project totals
    let edited_room = {
        let room = &project.rooms[1];
        let mut vertices = room.floor.vertices.clone();
        vertices[2] = Point2D::new(vertices[2].x + 0.5, vertices[2].y);
        room.with_floor_vertices(&vertices)
    };
    project = project.update_room(edited_room);
    assert_totals_consistent(&project);

    // Reposition refreshes the project but never its totals
    let before = (project.total_area, project.total_wall_area);
    let id = project.rooms[0].id.clone();
    project = project.update_room_position(
        &id,
        RoomPosition {
            x: -3.0,
            y: 7.0,
            rotation: 180.0,
        },
    );
    assert_totals_consistent(&project);
    assert_eq!((project.total_area, project.total_wall_area), before);

    // Removing everything zeroes the totals
    let ids: Vec<_> = project.rooms.iter().map(|r| r.id.clone()).collect();
    for id in ids {
        project = project.remove_room(&id);
        assert_totals_consistent(&project);
    }
    assert_eq!(project.total_area, 0.0);
    assert_eq!(project.total_wall_area, 0.0);
}

#[test]
fn test_cancelled_scan_produces_nothing() {
    let mut scanner = MockScanner::with_dimensions(4.2, 3.8, 2.65);
    scanner.start_scan().unwrap();
    scanner.advance();
    scanner.stop_scan().unwrap();

    assert!(scanner.results().is_err());
    assert!(scanner.poll_event().is_none());
}
