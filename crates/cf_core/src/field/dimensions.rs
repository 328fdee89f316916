//! Field and canvas dimension constants
//!
//! The reference rendering surface is a 1500x1500 px canvas showing the full
//! 150-yard field diameter, giving the 10 px/yard default scale. Callers
//! rendering at a different resolution pass their own scale to the
//! conversion functions; these constants describe the reference layout.

use crate::field::coordinates::CartesianCoordinate;

// ============================================================
// Canvas (pixels)
// ============================================================

pub const CANVAS_WIDTH_PX: f64 = 1500.0;
pub const CANVAS_HEIGHT_PX: f64 = 1500.0;

/// Canvas centre X (half of width)
pub const CENTER_X_PX: f64 = 750.0;
/// Canvas centre Y (half of height)
pub const CENTER_Y_PX: f64 = 750.0;

// ============================================================
// Field (yards)
// ============================================================

/// Boundary radius: 150-yard diameter playing field
pub const BOUNDARY_RADIUS_YD: f64 = 75.0;

/// 30-yard fielding-restriction circle
pub const INNER_CIRCLE_RADIUS_YD: f64 = 30.0;

/// Standard pitch length (stumps to stumps)
pub const PITCH_LENGTH_YD: f64 = 22.0;

/// Pitch width, drawn wider than regulation for visibility
pub const PITCH_WIDTH_YD: f64 = 10.0;

// ============================================================
// Scaling
// ============================================================

/// Reference scale: 1500 px / 150 yards
pub const PIXELS_PER_YARD: f64 = 10.0;

/// Centre of the reference canvas as a point
#[inline]
pub fn field_center() -> CartesianCoordinate {
    CartesianCoordinate { x: CENTER_X_PX, y: CENTER_Y_PX }
}
