use crate::core::climate::ClimateProfile;
use crate::core::envelope::building_volume;
use crate::core::units::MINUTES_PER_HOUR;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// in BTU/h·°F per cfm of leakage air
const INFILTRATION_LOSS_COEFFICIENT: f64 = 0.025;

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum InfiltrationLevel {
    Tight,
    Average,
    Leaky,
}

impl InfiltrationLevel {
    pub fn air_changes_per_hour(&self) -> f64 {
        match self {
            InfiltrationLevel::Tight => 0.2,
            InfiltrationLevel::Average => 1.0,
            InfiltrationLevel::Leaky => 2.5,
        }
    }

    /// Multiplier for draft and uneven-distribution effects beyond the raw
    /// air exchange.
    pub fn impact_factor(&self) -> f64 {
        match self {
            InfiltrationLevel::Tight => 1.0,
            InfiltrationLevel::Average => 1.3,
            InfiltrationLevel::Leaky => 1.8,
        }
    }
}

/// Air-leakage heat loss per °F of indoor-outdoor difference, before any
/// weather exposure adjustment, in BTU/h·°F.
pub fn infiltration_loss(square_footage: f64, level: InfiltrationLevel) -> f64 {
    let cfm =
        level.air_changes_per_hour() * building_volume(square_footage) / MINUTES_PER_HOUR as f64;
    INFILTRATION_LOSS_COEFFICIENT * cfm * level.impact_factor()
}

/// Amplification of infiltration losses from stack effect and wind pressure
/// in severe climates.
pub fn weather_exposure_factor(level: InfiltrationLevel, climate: &ClimateProfile) -> f64 {
    if climate.is_very_cold() {
        if matches!(level, InfiltrationLevel::Leaky) {
            1.35
        } else {
            1.2
        }
    } else if climate.is_very_hot() {
        if matches!(level, InfiltrationLevel::Leaky) {
            1.2
        } else {
            1.1
        }
    } else {
        1.0
    }
}
