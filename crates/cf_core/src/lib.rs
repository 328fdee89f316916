//! # cf_core - Cricket Field Placement Engine
//!
//! Pure-function core behind an interactive cricket field diagram:
//! coordinate conversion between canvas pixels and field-relative polar
//! coordinates, a static catalog of standard fielding positions,
//! nearest-position matching for drag relabeling, and named field
//! setting presets. Rendering and pointer-event plumbing live in the
//! front end; this crate only computes.
//!
//! ## Coordinate convention
//! Angles are degrees in [0, 360), 0 = North (straight down the pitch
//! toward the bowler), increasing clockwise. Distances are yards from
//! the field centre. Canvas pixel Y grows downward.

pub mod catalog;
pub mod error;
pub mod field;
pub mod layout;
pub mod matcher;
pub mod settings;

pub use catalog::{
    position_by_id, Fielder, FieldingPosition, FieldingSide, PolarRange, PositionType, Span,
    FIELDING_POSITIONS,
};
pub use error::FieldError;
pub use field::{to_cartesian, to_polar, CartesianCoordinate, PolarCoordinate};
pub use layout::FieldLayout;
pub use matcher::{find_closest_position, ANGLE_WEIGHT, MATCH_THRESHOLD};
pub use settings::{field_setting, field_setting_by_name, FieldSetting};
