use crate::core::climate::ClimateProfile;
use crate::core::hvac::DuctLocation;
use crate::core::units::HOURS_PER_DAY;
use serde::Serialize;

pub const SEASONAL_ADJUSTMENT: f64 = 1.4;
pub const CYCLING_FACTOR: f64 = 1.25;
pub const PART_LOAD_FACTOR: f64 = 0.85;
// Extra heating demand from thermal mass effects in severe climates
const THERMAL_MASS_VERY_COLD: f64 = 1.15;
const THERMAL_MASS_VERY_HOT: f64 = 1.08;

/// Annual space conditioning demand, before any equipment efficiency is
/// applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnnualDemand {
    /// in BTU
    pub heating_btu: f64,
    /// in BTU
    pub cooling_btu: f64,
}

/// Scale a per-degree loss rate up to annual demand over the climate's
/// degree days.
///
/// Arguments:
/// * `loss_per_degree` - combined envelope and infiltration loss, in BTU/h·°F
/// * `duct_location` - where the distribution ducts run
/// * `climate` - resolved degree-day profile
pub fn annual_demand(
    loss_per_degree: f64,
    duct_location: DuctLocation,
    climate: &ClimateProfile,
) -> AnnualDemand {
    let thermal_mass_factor = if climate.is_very_cold() {
        THERMAL_MASS_VERY_COLD
    } else if climate.is_very_hot() {
        THERMAL_MASS_VERY_HOT
    } else {
        1.0
    };
    let duct_multiplier = 1. + duct_location.loss_fraction();

    // thermal mass raises heating demand only
    let adjusted_heating_loss = loss_per_degree
        * SEASONAL_ADJUSTMENT
        * duct_multiplier
        * CYCLING_FACTOR
        * thermal_mass_factor;
    let adjusted_cooling_loss =
        loss_per_degree * SEASONAL_ADJUSTMENT * duct_multiplier * CYCLING_FACTOR;

    AnnualDemand {
        heating_btu: adjusted_heating_loss
            * climate.heating_degree_days
            * HOURS_PER_DAY as f64
            * PART_LOAD_FACTOR,
        cooling_btu: adjusted_cooling_loss
            * climate.cooling_degree_days
            * HOURS_PER_DAY as f64
            * PART_LOAD_FACTOR,
    }
}
