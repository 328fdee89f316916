//! Coarse field classification: distance bands and angle sectors
//!
//! Used for catalog queries and debug overlays ("which deep leg-side
//! positions exist?"), not by the drag pipeline itself. Band edges are
//! integers with unit gaps between them (30/31, 50/51, 70/71), matching
//! the traditional coaching vocabulary rather than a partition of the
//! reals; a distance of 30.5 yards falls in no band.

use serde::Serialize;

use crate::field::coordinates::PolarCoordinate;

use super::{FieldingPosition, FIELDING_POSITIONS};

/// Named distance band, bounds in yards, closed interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceCategory {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Named angle sector, bounds in degrees; wraps when min > max
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRegion {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

pub const VERY_CLOSE: DistanceCategory = DistanceCategory { name: "Very Close", min: 0.0, max: 30.0 };
pub const CLOSE: DistanceCategory = DistanceCategory { name: "Close", min: 31.0, max: 50.0 };
pub const MIDDLE: DistanceCategory = DistanceCategory { name: "Middle", min: 51.0, max: 70.0 };
pub const DEEP: DistanceCategory = DistanceCategory { name: "Deep", min: 71.0, max: 100.0 };

pub const DISTANCE_CATEGORIES: &[DistanceCategory] = &[VERY_CLOSE, CLOSE, MIDDLE, DEEP];

/// The sector crossing North, so min > max
pub const STRAIGHT_DOWN: FieldRegion =
    FieldRegion { name: "Straight Down the Pitch", min: 345.0, max: 15.0 };
pub const LEG_SIDE: FieldRegion = FieldRegion { name: "On (Leg) Side", min: 16.0, max: 179.0 };
pub const OFF_SIDE: FieldRegion = FieldRegion { name: "Off Side", min: 180.0, max: 344.0 };

pub const FIELD_REGIONS: &[FieldRegion] = &[STRAIGHT_DOWN, LEG_SIDE, OFF_SIDE];

impl DistanceCategory {
    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }
}

impl FieldRegion {
    /// Closed-interval membership, wrapping across 0/360 when min > max
    #[inline]
    pub fn contains(&self, angle: f64) -> bool {
        if self.min <= self.max {
            angle >= self.min && angle <= self.max
        } else {
            angle >= self.min || angle <= self.max
        }
    }
}

/// Band a distance falls in, if any
pub fn distance_category(distance: f64) -> Option<&'static DistanceCategory> {
    DISTANCE_CATEGORIES.iter().find(|c| c.contains(distance))
}

/// Sector an angle falls in, if any
pub fn field_region(angle: f64) -> Option<&'static FieldRegion> {
    FIELD_REGIONS.iter().find(|r| r.contains(angle))
}

/// Catalog entries whose preferred point lies in both the band and the
/// sector, in catalog order
pub fn positions_in(
    category: &DistanceCategory,
    region: &FieldRegion,
) -> Vec<&'static FieldingPosition> {
    FIELDING_POSITIONS
        .iter()
        .filter(|p| {
            let PolarCoordinate { distance, angle } = p.polar.reference_point();
            category.contains(distance) && region.contains(angle)
        })
        .collect()
}
