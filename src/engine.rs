use crate::core::climate::ClimateProfile;
use crate::core::costs::{
    carbon_emissions, energy_consumption, operating_costs, CarbonEmissions, EnergyConsumption,
    OperatingCosts,
};
use crate::core::demand::{annual_demand, AnnualDemand};
use crate::core::envelope::{envelope_loss, EnvelopeLoss, WindowGlazing};
use crate::core::fuels::FuelType;
use crate::core::hvac::{DuctLocation, EfficiencyTier, HeatingSystem};
use crate::core::infiltration::{infiltration_loss, weather_exposure_factor, InfiltrationLevel};
use crate::errors::InputValidationError;
use serde::Serialize;

/// A validated description of one home, the unit of calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BuildingSpec {
    /// conditioned floor area, in ft²
    pub square_footage: f64,
    pub wall_r_value: f64,
    pub ceiling_r_value: f64,
    pub window_glazing: WindowGlazing,
    pub infiltration: InfiltrationLevel,
    pub heating_fuel: FuelType,
    pub heating_system: HeatingSystem,
    pub efficiency_tier: EfficiencyTier,
    pub duct_location: DuctLocation,
}

impl BuildingSpec {
    /// Reject non-finite or non-positive numerics and fuel/system mismatches
    /// before any arithmetic runs on them.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        if !self.square_footage.is_finite() || self.square_footage <= 0. {
            return Err(InputValidationError::InvalidSquareFootage(
                self.square_footage,
            ));
        }
        if !self.wall_r_value.is_finite() || self.wall_r_value <= 0. {
            return Err(InputValidationError::InvalidWallRValue(self.wall_r_value));
        }
        if !self.ceiling_r_value.is_finite() || self.ceiling_r_value <= 0. {
            return Err(InputValidationError::InvalidCeilingRValue(
                self.ceiling_r_value,
            ));
        }
        if !self.heating_system.is_compatible_with(self.heating_fuel) {
            return Err(InputValidationError::IncompatibleHeatingSystem {
                system: self.heating_system,
                fuel: self.heating_fuel,
            });
        }

        Ok(())
    }
}

/// Everything computed for one home, kept at full float precision. Rounding
/// happens at presentation time only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    pub building: BuildingSpec,
    pub climate: ClimateProfile,
    /// in cents per kWh, as supplied by the caller
    pub electricity_price_cents_per_kwh: f64,
    pub envelope: EnvelopeLoss,
    /// base infiltration loss rate before weather exposure, in BTU/h·°F
    pub infiltration_loss_rate: f64,
    pub weather_exposure_factor: f64,
    /// whole-home loss rate with exposure applied, in BTU/h·°F
    pub total_loss_rate: f64,
    pub duct_loss_fraction: f64,
    pub demand: AnnualDemand,
    pub consumption: EnergyConsumption,
    pub costs: OperatingCosts,
    pub emissions: CarbonEmissions,
}

/// Run the full calculation chain for one home: envelope and infiltration
/// loss rates, annual demand, bought energy, then cost and emissions totals.
///
/// Arguments:
/// * `building` - the home being assessed
/// * `climate` - the profile of the home's climate zone
/// * `electricity_price_cents_per_kwh` - the residential electricity price
///   in effect at the home's location
pub fn calculate_energy_costs(
    building: &BuildingSpec,
    climate: &ClimateProfile,
    electricity_price_cents_per_kwh: f64,
) -> Result<CalculationResult, InputValidationError> {
    building.validate()?;
    if !electricity_price_cents_per_kwh.is_finite() || electricity_price_cents_per_kwh <= 0. {
        return Err(InputValidationError::InvalidElectricityPrice(
            electricity_price_cents_per_kwh,
        ));
    }

    let envelope = envelope_loss(
        building.square_footage,
        building.wall_r_value,
        building.ceiling_r_value,
        building.window_glazing,
    );
    let infiltration_loss_rate = infiltration_loss(building.square_footage, building.infiltration);
    let weather_exposure = weather_exposure_factor(building.infiltration, climate);
    let total_loss_rate = envelope.total() + infiltration_loss_rate * weather_exposure;

    let demand = annual_demand(total_loss_rate, building.duct_location, climate);
    let consumption = energy_consumption(
        &demand,
        building.heating_fuel,
        building.heating_system,
        building.efficiency_tier,
        climate,
    );
    let costs = operating_costs(
        &consumption,
        building.heating_fuel,
        electricity_price_cents_per_kwh,
    );
    let emissions = carbon_emissions(&consumption, building.heating_fuel);

    debug_assert!(is_close!(
        costs.total_cost,
        costs.heating_cost + costs.cooling_cost
    ));
    debug_assert!(is_close!(
        emissions.total_lbs,
        emissions.heating_lbs + emissions.cooling_lbs
    ));

    Ok(CalculationResult {
        building: *building,
        climate: *climate,
        electricity_price_cents_per_kwh,
        envelope,
        infiltration_loss_rate,
        weather_exposure_factor: weather_exposure,
        total_loss_rate,
        duct_loss_fraction: building.duct_location.loss_fraction(),
        demand,
        consumption,
        costs,
        emissions,
    })
}
