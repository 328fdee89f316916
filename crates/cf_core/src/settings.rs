//! Named field setting presets
//!
//! A field setting is a tactical formation expressed as a subset of the
//! catalog: the attacking test field stacks the slip cordon, the ODI
//! powerplay keeps the ring inside the circle, and the death-overs field
//! pushes everyone to the rope. Selection is a pure filter over the
//! static catalog; it never mutates anything and always preserves
//! catalog order. Each entry is tested exactly once, so a position that
//! satisfies several predicates still appears once.

use serde::{Deserialize, Serialize};

use crate::catalog::{FieldingPosition, PositionType, FIELDING_POSITIONS};

/// The supported tactical formations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSetting {
    /// Slip-heavy catching field for red-ball cricket
    TestAttacking,
    /// Ring field for the fielding restrictions of overs 1-10
    OdiPowerplay,
    /// Boundary riders for the closing overs
    DeathOvers,
}

const ODI_POWERPLAY_IDS: &[&str] = &[
    "first_slip",
    "second_slip",
    "point",
    "cover",
    "mid_off",
    "mid_on",
    "mid_wicket",
    "fine_leg",
    "third_man",
];

const TEST_ATTACKING_RING_IDS: &[&str] = &["gully", "point", "cover", "mid_off", "mid_on"];

const DEATH_OVERS_STRAIGHT_IDS: &[&str] = &["long_off", "long_on", "mid_off", "mid_on"];

impl FieldSetting {
    /// Parse a setting from its wire name, `None` for anything unknown
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "test_attacking" => Some(Self::TestAttacking),
            "odi_powerplay" => Some(Self::OdiPowerplay),
            "death_overs" => Some(Self::DeathOvers),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TestAttacking => "test_attacking",
            Self::OdiPowerplay => "odi_powerplay",
            Self::DeathOvers => "death_overs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TestAttacking => "Attacking Test Field",
            Self::OdiPowerplay => "ODI Powerplay",
            Self::DeathOvers => "Death Overs",
        }
    }

    /// Whether a catalog entry belongs to this setting
    fn includes(&self, position: &FieldingPosition) -> bool {
        // Wicket-keeper and bowler are in every setting
        if position.position_type == PositionType::Mandatory {
            return true;
        }
        match self {
            Self::TestAttacking => {
                position.id.contains("slip") || TEST_ATTACKING_RING_IDS.contains(&position.id)
            }
            Self::OdiPowerplay => ODI_POWERPLAY_IDS.contains(&position.id),
            Self::DeathOvers => {
                position.id.starts_with("deep_")
                    || DEATH_OVERS_STRAIGHT_IDS.contains(&position.id)
            }
        }
    }
}

/// Catalog entries for a setting, in catalog order
pub fn field_setting(setting: FieldSetting) -> Vec<&'static FieldingPosition> {
    FIELDING_POSITIONS.iter().filter(|p| setting.includes(p)).collect()
}

/// By-name variant for callers holding a raw setting string.
///
/// An unrecognized name yields an empty list, not an error; the caller
/// renders an empty field.
pub fn field_setting_by_name(name: &str) -> Vec<&'static FieldingPosition> {
    match FieldSetting::from_name(name) {
        Some(setting) => field_setting(setting),
        None => {
            log::warn!("unknown field setting '{}', returning no positions", name);
            Vec::new()
        }
    }
}
