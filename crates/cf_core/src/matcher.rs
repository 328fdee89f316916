//! Nearest-standard-position resolution
//!
//! As a fielder is dragged, the interaction layer asks which named
//! position the current point most resembles so it can relabel the
//! marker on the fly. Scoring is a weighted sum of angular and radial
//! separation from each entry's preferred point; angle dominates because
//! standard positions are distinguished primarily by direction (cover vs
//! mid-off), with depth a secondary axis (cover vs deep cover).

use crate::catalog::{FieldingPosition, FIELDING_POSITIONS};
use crate::field::coordinates::PolarCoordinate;

/// Angular separation counts double the radial separation.
///
/// Empirically chosen alongside [`MATCH_THRESHOLD`]; neither constant has
/// been formally calibrated against how players actually name placements.
pub const ANGLE_WEIGHT: f64 = 2.0;

/// Scores at or above this are "nothing nearby": no catalog entry is a
/// plausible name for the point. Tunable, not derived.
pub const MATCH_THRESHOLD: f64 = 45.0;

/// Circular distance between two angles in degrees, in [0, 180]
///
/// Takes the shorter way around the 0/360 seam: 359 and 1 are 2 degrees
/// apart, not 358.
#[inline]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let raw = a - b;
    raw.abs().min((raw + 360.0).abs()).min((raw - 360.0).abs())
}

/// Similarity score between a catalog entry's preferred point and a query
/// point; lower is closer
#[inline]
fn score(position: &FieldingPosition, polar: PolarCoordinate) -> f64 {
    let reference = position.polar.reference_point();
    let angle_diff = angle_difference(reference.angle, polar.angle);
    let distance_diff = (reference.distance - polar.distance).abs();
    ANGLE_WEIGHT * angle_diff + distance_diff
}

/// Closest entry in `catalog` to the query point, or `None` when the best
/// score reaches [`MATCH_THRESHOLD`]
///
/// Ties go to the earlier entry: the scan keeps the first minimum it
/// sees, so results are deterministic for a fixed catalog order.
pub fn find_closest_in<'a>(
    catalog: &'a [FieldingPosition],
    polar: PolarCoordinate,
) -> Option<&'a FieldingPosition> {
    let mut best: Option<&FieldingPosition> = None;
    let mut best_score = f64::MAX;

    for position in catalog {
        let s = score(position, polar);
        if s < best_score {
            best_score = s;
            best = Some(position);
        }
    }

    if best_score < MATCH_THRESHOLD {
        best
    } else {
        None
    }
}

/// Closest standard position to the query point over the full catalog
pub fn find_closest_position(polar: PolarCoordinate) -> Option<&'static FieldingPosition> {
    find_closest_in(FIELDING_POSITIONS, polar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldingSide, PolarRange, PositionType, Span};

    const fn entry(id: &'static str, distance: f64, angle: f64) -> FieldingPosition {
        FieldingPosition {
            id,
            name: id,
            polar: PolarRange::new(
                Span::new(distance, distance, distance),
                Span::new(angle, angle, angle),
            ),
            position_type: PositionType::Variation,
            side: FieldingSide::Neutral,
            description: "",
            common_situations: &[],
        }
    }

    #[test]
    fn test_angle_difference_takes_shorter_way() {
        assert_eq!(angle_difference(359.0, 1.0), 2.0);
        assert_eq!(angle_difference(1.0, 359.0), 2.0);
        assert_eq!(angle_difference(0.0, 180.0), 180.0);
        assert_eq!(angle_difference(90.0, 90.0), 0.0);
    }

    /// A query at 359 degrees must resolve to the entry at 1 degree, not
    /// the one at 180: circular distance governs scoring, not linear.
    #[test]
    fn test_wraparound_beats_linear_distance() {
        let catalog = [entry("near_north", 20.0, 1.0), entry("behind", 20.0, 180.0)];
        let matched = find_closest_in(&catalog, PolarCoordinate::new(20.0, 359.0))
            .expect("entry at 1 degree is 2 degrees away");
        assert_eq!(matched.id, "near_north");
    }

    /// Threshold is exclusive: 44 matches, 46 does not. Against the real
    /// catalog the wicket-keeper sits at (15yd, 0deg), so a query at
    /// angle 22 scores 44 and one at 23 scores 46 with every other entry
    /// further away.
    #[test]
    fn test_threshold_boundary_on_real_catalog() {
        let matched = find_closest_position(PolarCoordinate::new(15.0, 22.0))
            .expect("score 44 is inside the threshold");
        assert_eq!(matched.id, "wicket_keeper");

        assert!(
            find_closest_position(PolarCoordinate::new(15.0, 23.0)).is_none(),
            "score 46 must report no plausible match"
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let catalog = [entry("exact", 10.0, 0.0)];
        // angle diff 22.5 -> score exactly 45.0
        assert!(find_closest_in(&catalog, PolarCoordinate::new(10.0, 22.5)).is_none());
        // fractionally inside
        assert!(find_closest_in(&catalog, PolarCoordinate::new(10.0, 22.4995)).is_some());
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        // Equidistant either side of the query angle
        let catalog = [entry("left", 30.0, 80.0), entry("right", 30.0, 100.0)];
        let matched = find_closest_in(&catalog, PolarCoordinate::new(30.0, 90.0)).unwrap();
        assert_eq!(matched.id, "left");
    }

    #[test]
    fn test_preferred_points_match_themselves() {
        for position in FIELDING_POSITIONS {
            let matched = find_closest_position(position.polar.reference_point())
                .unwrap_or_else(|| panic!("{} should match something", position.id));
            // Score 0 against itself; another entry can only tie, and a
            // tie resolves to whichever comes first in catalog order.
            let own = position.polar.reference_point();
            let theirs = matched.polar.reference_point();
            assert_eq!(
                (own.distance, own.angle),
                (theirs.distance, theirs.angle),
                "{} matched {} at a different point",
                position.id,
                matched.id
            );
        }
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        assert!(find_closest_in(&[], PolarCoordinate::new(30.0, 150.0)).is_none());
    }
}
