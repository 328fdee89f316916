//! Standard fielding position catalog
//!
//! The catalog is a static, immutable table of named positions. Each entry
//! places the position by a polar RANGE (a band of distances and a sector
//! of angles, with a preferred point inside both), never by a single point:
//! "third man" is a region, and the preferred point is only its canonical
//! spot. Live fielders on the other hand sit at exactly one point; see
//! [`Fielder`].
//!
//! Angle spans may wrap past North (min > max) to describe a sector that
//! crosses the 0/360 seam, e.g. the wicket-keeper's 355..5.

use serde::{Deserialize, Serialize};

use crate::field::coordinates::{to_cartesian, CartesianCoordinate, PolarCoordinate};

pub mod positions;
pub mod regions;

pub use positions::{position_by_id, FIELDING_POSITIONS};

/// One axis of a polar range: a closed interval with an optional
/// canonical value inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<f64>,
}

impl Span {
    pub const fn new(min: f64, max: f64, preferred: f64) -> Self {
        Self { min, max, preferred: Some(preferred) }
    }

    /// The canonical value: preferred if present, else the lower bound
    #[inline]
    pub fn reference(&self) -> f64 {
        self.preferred.unwrap_or(self.min)
    }
}

/// Range-form polar placement used by catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarRange {
    pub distance: Span,
    pub angle: Span,
}

impl PolarRange {
    pub const fn new(distance: Span, angle: Span) -> Self {
        Self { distance, angle }
    }

    /// Collapse the range onto its canonical point
    #[inline]
    pub fn reference_point(&self) -> PolarCoordinate {
        PolarCoordinate {
            distance: self.distance.reference(),
            angle: self.angle.reference(),
        }
    }

    /// Whether a point-form coordinate falls inside this range
    ///
    /// Distance is plain closed-interval containment. The angle span wraps
    /// when min > max: membership then means `angle >= min OR angle <= max`
    /// (the sector crosses North).
    pub fn contains(&self, polar: PolarCoordinate) -> bool {
        let in_distance =
            polar.distance >= self.distance.min && polar.distance <= self.distance.max;

        let a = &self.angle;
        let in_angle = if a.min <= a.max {
            polar.angle >= a.min && polar.angle <= a.max
        } else {
            polar.angle >= a.min || polar.angle <= a.max
        };

        in_distance && in_angle
    }
}

/// How essential a position is to a standard field setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    /// Required by the laws of the game (wicket-keeper, bowler)
    Mandatory,
    /// Backbone of most settings
    Primary,
    /// Situational placement
    Variation,
}

/// Which half of the field, relative to a right-handed batter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldingSide {
    Off,
    Leg,
    Neutral,
}

impl PositionType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::Primary => "Primary",
            Self::Variation => "Variation",
        }
    }
}

impl FieldingSide {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Off => "Off side",
            Self::Leg => "Leg side",
            Self::Neutral => "Neutral",
        }
    }
}

/// Immutable catalog record for one named standard position
///
/// Const-constructible so the whole catalog lives in static data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldingPosition {
    /// Stable key, e.g. "deep_square_leg"
    pub id: &'static str,
    /// Display label
    pub name: &'static str,
    /// Allowed placement range with preferred point
    pub polar: PolarRange,
    #[serde(rename = "type")]
    pub position_type: PositionType,
    pub side: FieldingSide,
    pub description: &'static str,
    pub common_situations: &'static [&'static str],
}

impl FieldingPosition {
    /// Whether a point-form coordinate falls inside this position's
    /// allowed range
    #[inline]
    pub fn is_in_range(&self, polar: PolarCoordinate) -> bool {
        self.polar.contains(polar)
    }

    /// Canvas position of the entry's preferred point (range-aware
    /// conversion: preferred if present, else the range minimum)
    pub fn reference_cartesian(
        &self,
        center: CartesianCoordinate,
        pixels_per_yard: f64,
    ) -> CartesianCoordinate {
        to_cartesian(self.polar.reference_point(), center, pixels_per_yard)
    }
}

/// Live fielder: an owned, point-form copy of a catalog entry (or an
/// ad-hoc placement derived from one) that the interaction layer drags
/// around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fielder {
    pub id: String,
    pub name: String,
    pub polar: PolarCoordinate,
    #[serde(rename = "type")]
    pub position_type: PositionType,
    pub side: FieldingSide,
}

impl Fielder {
    /// Seed a fielder at a catalog entry's preferred point
    pub fn from_catalog(position: &FieldingPosition) -> Self {
        Self {
            id: position.id.to_string(),
            name: position.name.to_string(),
            polar: position.polar.reference_point(),
            position_type: position.position_type,
            side: position.side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_reference_prefers_preferred() {
        let s = Span::new(10.0, 20.0, 15.0);
        assert_eq!(s.reference(), 15.0);

        let no_pref = Span { min: 10.0, max: 20.0, preferred: None };
        assert_eq!(no_pref.reference(), 10.0);
    }

    #[test]
    fn test_plain_angle_containment() {
        let range = PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(145.0, 155.0, 150.0));
        assert!(range.contains(PolarCoordinate::new(30.0, 150.0)));
        assert!(range.contains(PolarCoordinate::new(25.0, 145.0)), "bounds are closed");
        assert!(!range.contains(PolarCoordinate::new(30.0, 156.0)));
        assert!(!range.contains(PolarCoordinate::new(36.0, 150.0)));
    }

    #[test]
    fn test_wrapping_angle_containment() {
        // Sector crossing North: 345..5
        let range = PolarRange::new(Span::new(10.0, 20.0, 15.0), Span::new(345.0, 5.0, 0.0));
        for angle in [350.0, 0.0, 4.0] {
            assert!(
                range.contains(PolarCoordinate::new(15.0, angle)),
                "angle {} should be inside the wrapped sector",
                angle
            );
        }
        assert!(!range.contains(PolarCoordinate::new(15.0, 180.0)));
        assert!(!range.contains(PolarCoordinate::new(15.0, 344.9)));

        // Same behavior through the catalog entry surface: the keeper's
        // sector is 355..5 across North.
        let keeper = position_by_id("wicket_keeper").unwrap();
        assert!(keeper.is_in_range(PolarCoordinate::new(15.0, 358.0)));
        assert!(!keeper.is_in_range(PolarCoordinate::new(15.0, 90.0)));
    }

    #[test]
    fn test_fielder_seeds_at_reference_point() {
        let entry = &FIELDING_POSITIONS[0];
        let fielder = Fielder::from_catalog(entry);
        assert_eq!(fielder.id, entry.id);
        assert_eq!(fielder.polar, entry.polar.reference_point());
    }

    #[test]
    fn test_fielder_serde_round_trip() {
        let fielder = Fielder::from_catalog(position_by_id("cover").unwrap());
        let json = serde_json::to_string(&fielder).unwrap();
        let back: Fielder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fielder);
        // Wire names match the front end's lowercase convention
        assert!(json.contains("\"type\":\"primary\""), "json was {}", json);
        assert!(json.contains("\"side\":\"off\""));
    }
}
