//! The standard fielding position catalog
//!
//! Static data, loaded once at compile time, never mutated. Entries are
//! grouped the way a captain walks the field: the two mandatory roles,
//! the slip cordon, off side, leg side, close-in, then the boundary
//! riders. Catalog order is load-bearing: the setting filters and the
//! matcher's tie-break both preserve it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{FieldingPosition, FieldingSide, PolarRange, PositionType, Span};

// ============================================================================
// Mandatory positions
// ============================================================================

pub const WICKET_KEEPER: FieldingPosition = FieldingPosition {
    id: "wicket_keeper",
    name: "Wicket-keeper",
    polar: PolarRange::new(Span::new(10.0, 20.0, 15.0), Span::new(355.0, 5.0, 0.0)),
    position_type: PositionType::Mandatory,
    side: FieldingSide::Neutral,
    description: "Player behind the stumps who catches balls missed by batsman",
    common_situations: &["Always present"],
};

pub const BOWLER: FieldingPosition = FieldingPosition {
    id: "bowler",
    name: "Bowler",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(175.0, 185.0, 180.0)),
    position_type: PositionType::Mandatory,
    side: FieldingSide::Neutral,
    description: "The player who bowls the ball",
    common_situations: &["Always present"],
};

pub const FLYSLIP: FieldingPosition = FieldingPosition {
    id: "flyslip",
    name: "Flyslip",
    polar: PolarRange::new(Span::new(60.0, 75.0, 65.0), Span::new(350.0, 359.0, 355.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Neutral,
    description: "The player who is at flyslip position",
    common_situations: &["rarely used"],
};

// ============================================================================
// Slip cordon (clockwise from keeper)
// ============================================================================

pub const FIRST_SLIP: FieldingPosition = FieldingPosition {
    id: "first_slip",
    name: "First slip",
    polar: PolarRange::new(Span::new(15.0, 25.0, 15.0), Span::new(345.0, 355.0, 350.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "First in line in the slip cordon, closest to wicket-keeper",
    common_situations: &["Almost always used in longer formats", "Red ball cricket"],
};

pub const SECOND_SLIP: FieldingPosition = FieldingPosition {
    id: "second_slip",
    name: "Second slip",
    polar: PolarRange::new(Span::new(15.0, 25.0, 15.0), Span::new(335.0, 345.0, 340.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Second in line in the slip cordon",
    common_situations: &["Standard attacking field", "Test cricket", "Fast bowling"],
};

pub const THIRD_SLIP: FieldingPosition = FieldingPosition {
    id: "third_slip",
    name: "Third slip",
    polar: PolarRange::new(Span::new(15.0, 25.0, 15.0), Span::new(325.0, 335.0, 330.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Third in line in the slip cordon",
    common_situations: &["Attacking field", "Swinging conditions", "New ball"],
};

pub const FOURTH_SLIP: FieldingPosition = FieldingPosition {
    id: "fourth_slip",
    name: "Fourth slip",
    polar: PolarRange::new(Span::new(15.0, 25.0, 15.0), Span::new(315.0, 325.0, 320.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Fourth in line in the slip cordon",
    common_situations: &["Very attacking field", "Swinging conditions", "Early in innings"],
};

pub const GULLY: FieldingPosition = FieldingPosition {
    id: "gully",
    name: "Gully",
    polar: PolarRange::new(Span::new(15.0, 20.0, 15.0), Span::new(305.0, 315.0, 310.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Off,
    description: "Position in the slip cordon, angled toward point",
    common_situations: &["Test cricket", "Fast bowling", "Seaming conditions"],
};

// ============================================================================
// Off side (clockwise)
// ============================================================================

pub const THIRD_MAN: FieldingPosition = FieldingPosition {
    id: "third_man",
    name: "Third man",
    polar: PolarRange::new(Span::new(60.0, 78.0, 73.0), Span::new(300.0, 350.0, 315.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Off,
    description: "Position behind the batsman on the off side, used to catch edges flying high and wide",
    common_situations: &["Fast bowling", "Bouncy pitches", "Aggressive batsmen"],
};

pub const POINT: FieldingPosition = FieldingPosition {
    id: "point",
    name: "Point",
    // Angle band reaches to 265 so the preferred 270 (the square line,
    // shared with deep_point) sits inside its own range.
    polar: PolarRange::new(Span::new(21.0, 35.0, 30.0), Span::new(265.0, 305.0, 270.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Off,
    description: "Position square of the wicket on the off side",
    common_situations: &["Used in almost all formats", "Catching and stopping cuts"],
};

pub const COVER: FieldingPosition = FieldingPosition {
    id: "cover",
    name: "Cover",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(235.0, 245.0, 240.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Off,
    description: "Position in front of point on the off side",
    common_situations: &["Used in almost all formats", "To stop or catch cover drives"],
};

pub const EXTRA_COVER: FieldingPosition = FieldingPosition {
    id: "extra_cover",
    name: "Extra cover",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(220.0, 230.0, 225.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Position between cover and mid-off",
    common_situations: &["Medium to fast bowling", "To prevent drives"],
};

pub const MID_OFF: FieldingPosition = FieldingPosition {
    id: "mid_off",
    name: "Mid-off",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(205.0, 215.0, 210.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Off,
    description: "Position straight down the pitch on the off side",
    common_situations: &["Used in almost all formats", "Straight driving batsmen"],
};

// ============================================================================
// Leg side (continuing clockwise)
// ============================================================================

pub const MID_ON: FieldingPosition = FieldingPosition {
    id: "mid_on",
    name: "Mid-on",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(145.0, 155.0, 150.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Leg,
    description: "Position straight down the pitch on the leg side",
    common_situations: &["Used in almost all formats", "Straight driving batsmen"],
};

pub const MID_WICKET: FieldingPosition = FieldingPosition {
    id: "mid_wicket",
    name: "Mid-wicket",
    polar: PolarRange::new(Span::new(25.0, 35.0, 30.0), Span::new(115.0, 125.0, 120.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Leg,
    description: "Position on the leg side, in front of square leg",
    common_situations: &["Used in almost all formats", "For batsmen strong on the leg side"],
};

pub const SQUARE_LEG: FieldingPosition = FieldingPosition {
    id: "square_leg",
    name: "Square leg",
    polar: PolarRange::new(Span::new(40.0, 50.0, 45.0), Span::new(85.0, 95.0, 90.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Leg,
    description: "Position square of the wicket on the leg side",
    common_situations: &["Used in almost all formats", "For catching leg glances and pull shots"],
};

pub const FINE_LEG: FieldingPosition = FieldingPosition {
    id: "fine_leg",
    name: "Fine leg",
    polar: PolarRange::new(Span::new(45.0, 55.0, 50.0), Span::new(40.0, 50.0, 45.0)),
    position_type: PositionType::Primary,
    side: FieldingSide::Leg,
    description: "Position behind square on the leg side",
    common_situations: &["Used in almost all formats", "For catching leg glances"],
};

// ============================================================================
// Close-in
// ============================================================================

pub const SILLY_POINT: FieldingPosition = FieldingPosition {
    id: "silly_point",
    name: "Silly point",
    polar: PolarRange::new(Span::new(10.0, 20.0, 15.0), Span::new(280.0, 290.0, 285.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Very close to the batsman at point angle",
    common_situations: &["Spin bowling", "Attacking field", "When batsman is hesitant against spin"],
};

// ============================================================================
// Boundary riders (off side)
// ============================================================================

pub const DEEP_THIRD_MAN: FieldingPosition = FieldingPosition {
    id: "deep_third_man",
    name: "Deep third man",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(310.0, 320.0, 315.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Deeper version of third man, positioned closer to the boundary",
    common_situations: &["Defensive field setting", "When batsman is strong in cutting"],
};

pub const DEEP_POINT: FieldingPosition = FieldingPosition {
    id: "deep_point",
    name: "Deep point",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(265.0, 275.0, 270.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Deep position square on the off side",
    common_situations: &["Limited overs cricket", "When batsman is strong square of the wicket"],
};

pub const DEEP_COVER: FieldingPosition = FieldingPosition {
    id: "deep_cover",
    name: "Deep cover",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(235.0, 245.0, 240.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Deep position in the cover region",
    common_situations: &["Limited overs cricket", "When protection against cover drives is needed"],
};

pub const DEEP_EXTRA_COVER: FieldingPosition = FieldingPosition {
    id: "deep_extra_cover",
    name: "Deep extra cover",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(220.0, 230.0, 225.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Deep position between cover and long-off",
    common_situations: &["Death overs", "When batsman is strong cover driver"],
};

pub const LONG_OFF: FieldingPosition = FieldingPosition {
    id: "long_off",
    name: "Long-off",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(205.0, 215.0, 210.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Off,
    description: "Deep position straight down the ground on the off side",
    common_situations: &["Death overs", "When batsman is strong straight driver"],
};

// ============================================================================
// Boundary riders (leg side)
// ============================================================================

pub const LONG_ON: FieldingPosition = FieldingPosition {
    id: "long_on",
    name: "Long-on",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(145.0, 155.0, 150.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Leg,
    description: "Deep position straight down the ground on the leg side",
    common_situations: &["Death overs", "When batsman is strong straight hitter"],
};

pub const DEEP_MID_WICKET: FieldingPosition = FieldingPosition {
    id: "deep_mid_wicket",
    name: "Deep mid-wicket",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(115.0, 125.0, 120.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Leg,
    description: "Deep position in the mid-wicket region",
    common_situations: &["Limited overs cricket", "When batsman is strong on the leg side"],
};

pub const DEEP_SQUARE_LEG: FieldingPosition = FieldingPosition {
    id: "deep_square_leg",
    name: "Deep square leg",
    polar: PolarRange::new(Span::new(68.0, 78.0, 73.0), Span::new(85.0, 95.0, 90.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Leg,
    description: "Deep position square on the leg side",
    common_situations: &["When batsman is strong puller/hooker", "Fast bowling"],
};

pub const DEEP_FINE_LEG: FieldingPosition = FieldingPosition {
    id: "deep_fine_leg",
    name: "Deep fine leg",
    polar: PolarRange::new(Span::new(60.0, 78.0, 73.0), Span::new(5.0, 40.0, 30.0)),
    position_type: PositionType::Variation,
    side: FieldingSide::Leg,
    description: "Deep position behind square on the leg side",
    common_situations: &["Death overs", "When protection against glances and fine shots is needed"],
};

/// All standard positions, in catalog order
pub const FIELDING_POSITIONS: &[FieldingPosition] = &[
    WICKET_KEEPER,
    BOWLER,
    FLYSLIP,
    FIRST_SLIP,
    SECOND_SLIP,
    THIRD_SLIP,
    FOURTH_SLIP,
    GULLY,
    THIRD_MAN,
    POINT,
    COVER,
    EXTRA_COVER,
    MID_OFF,
    MID_ON,
    MID_WICKET,
    SQUARE_LEG,
    FINE_LEG,
    SILLY_POINT,
    DEEP_THIRD_MAN,
    DEEP_POINT,
    DEEP_COVER,
    DEEP_EXTRA_COVER,
    LONG_OFF,
    LONG_ON,
    DEEP_MID_WICKET,
    DEEP_SQUARE_LEG,
    DEEP_FINE_LEG,
];

static POSITIONS_BY_ID: Lazy<HashMap<&'static str, &'static FieldingPosition>> =
    Lazy::new(|| FIELDING_POSITIONS.iter().map(|p| (p.id, p)).collect());

/// Look up a catalog entry by stable id
pub fn position_by_id(id: &str) -> Option<&'static FieldingPosition> {
    POSITIONS_BY_ID.get(id).copied()
}
