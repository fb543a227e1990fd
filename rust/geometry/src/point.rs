// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D and 3D point value types
//!
//! `Point2D` lives on the floor plane. `Point3D` follows the scanning
//! frame convention: `y` is the vertical axis, `x`/`z` span the floor
//! plane.

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// A floor-plane coordinate in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Lift into the 3D scanning frame at height `y`.
    ///
    /// The floor-plane `y` coordinate becomes `z`; the vertical axis is
    /// the 3D `y`.
    pub fn lift(&self, y: f64) -> Point3D {
        Point3D::new(self.x, y, self.y)
    }
}

/// A scanning-frame coordinate in meters; `y` is the height axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }

    /// Project onto the floor plane, dropping the height axis.
    pub fn floor_plane(&self) -> Point2D {
        Point2D::new(self.x, self.z)
    }
}
