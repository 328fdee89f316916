//! Coordinate system and conversions
//!
//! Converts between canvas pixel coordinates and field-relative polar
//! coordinates.
//!
//! ## Coordinate Systems
//!
//! **Cartesian/canvas coordinates** (used by the rendering front end):
//! - X: pixels, growing rightward
//! - Y: pixels, growing DOWNWARD (canvas convention)
//!
//! **Polar/field coordinates** (used by the catalog and matcher):
//! - distance: yards from field centre
//! - angle: degrees in [0, 360), 0 = North (straight down the pitch from
//!   the striker's end toward the bowler), increasing clockwise
//!
//! The conversions negate dy to bridge the downward pixel Y axis, and use
//! `atan2(dx, dy)` (arguments swapped relative to the mathematical
//! convention) so that 0 degrees points up and angles grow clockwise.

use serde::{Deserialize, Serialize};

/// Position in canvas pixel space, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    pub x: f64,
    pub y: f64,
}

/// Point-form field-relative position
///
/// - `distance`: yards from field centre
/// - `angle`: degrees in [0, 360), 0 = North, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarCoordinate {
    pub distance: f64,
    pub angle: f64,
}

impl CartesianCoordinate {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PolarCoordinate {
    #[inline]
    pub fn new(distance: f64, angle: f64) -> Self {
        Self { distance, angle }
    }
}

/// Convert canvas pixel coordinates to field-relative polar coordinates
///
/// `center` is the field centre in the same pixel space. The degenerate
/// input `cartesian == center` yields angle 0 (the `atan2(0,0) = 0`
/// convention) and distance 0; this is defined behavior, not an error.
pub fn to_polar(
    cartesian: CartesianCoordinate,
    center: CartesianCoordinate,
    pixels_per_yard: f64,
) -> PolarCoordinate {
    let dx = cartesian.x - center.x;
    // Negate because canvas Y grows downward
    let dy = center.y - cartesian.y;

    // atan2(dx, dy): 0 degrees at top, growing clockwise
    let mut angle = dx.atan2(dy).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    let distance = (dx * dx + dy * dy).sqrt() / pixels_per_yard;

    PolarCoordinate { distance, angle }
}

/// Convert field-relative polar coordinates to canvas pixel coordinates
///
/// Exact algebraic inverse of [`to_polar`] for all distance >= 0 and
/// angle in [0, 360): a round trip reproduces the input within
/// floating-point tolerance.
pub fn to_cartesian(
    polar: PolarCoordinate,
    center: CartesianCoordinate,
    pixels_per_yard: f64,
) -> CartesianCoordinate {
    let radians = polar.angle.to_radians();
    let distance_px = polar.distance * pixels_per_yard;

    // 0 degrees at top, clockwise: x follows sin, y follows -cos
    let x = center.x + distance_px * radians.sin();
    let y = center.y - distance_px * radians.cos();

    CartesianCoordinate { x, y }
}

/// Pixel distance between two canvas points
#[inline]
pub fn pixel_distance(a: CartesianCoordinate, b: CartesianCoordinate) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
