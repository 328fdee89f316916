//! Field geometry: coordinate systems and reference dimensions

pub mod coordinates;
pub mod dimensions;

pub use coordinates::{pixel_distance, to_cartesian, to_polar, CartesianCoordinate, PolarCoordinate};
