use crate::core::climate::ClimateProfile;
use crate::core::demand::AnnualDemand;
use crate::core::fuels::FuelType;
use crate::core::hvac::{EfficiencyTier, HeatingSystem};
use serde::Serialize;

/// Fuel bought over a year to meet the annual demand, after equipment
/// efficiency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyConsumption {
    /// heating fuel bought, in the fuel's billing unit
    pub heating_fuel_units: f64,
    /// cooling electricity bought, in kWh
    pub cooling_kwh: f64,
    pub heating_efficiency: f64,
    pub cooling_efficiency: f64,
}

/// Annual running costs, in dollars.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OperatingCosts {
    pub heating_cost: f64,
    pub cooling_cost: f64,
    pub total_cost: f64,
}

/// Annual carbon emissions, in lbs CO₂.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CarbonEmissions {
    pub heating_lbs: f64,
    pub cooling_lbs: f64,
    pub total_lbs: f64,
}

/// Convert annual demand into bought fuel, applying the efficiency curves at
/// the climate's design temperatures. Cooling is always electric.
pub fn energy_consumption(
    demand: &AnnualDemand,
    fuel: FuelType,
    system: HeatingSystem,
    tier: EfficiencyTier,
    climate: &ClimateProfile,
) -> EnergyConsumption {
    let heating_efficiency = tier.heating_efficiency(system, climate.average_winter_temp());
    let cooling_efficiency = tier.cooling_efficiency(climate.average_summer_temp());

    EnergyConsumption {
        heating_fuel_units: demand.heating_btu / fuel.properties().btu_per_unit
            / heating_efficiency,
        cooling_kwh: demand.cooling_btu / FuelType::Electricity.properties().btu_per_unit
            / cooling_efficiency,
        heating_efficiency,
        cooling_efficiency,
    }
}

pub fn operating_costs(
    consumption: &EnergyConsumption,
    fuel: FuelType,
    electricity_price_cents_per_kwh: f64,
) -> OperatingCosts {
    let heating_cost =
        consumption.heating_fuel_units * fuel.unit_cost(electricity_price_cents_per_kwh);
    let cooling_cost = consumption.cooling_kwh
        * FuelType::Electricity.unit_cost(electricity_price_cents_per_kwh);

    OperatingCosts {
        heating_cost,
        cooling_cost,
        total_cost: heating_cost + cooling_cost,
    }
}

pub fn carbon_emissions(consumption: &EnergyConsumption, fuel: FuelType) -> CarbonEmissions {
    let heating_lbs = consumption.heating_fuel_units * fuel.properties().co2_per_unit;
    let cooling_lbs = consumption.cooling_kwh * FuelType::Electricity.properties().co2_per_unit;

    CarbonEmissions {
        heating_lbs,
        cooling_lbs,
        total_lbs: heating_lbs + cooling_lbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::climate::resolve_climate_zone;
    use approx::assert_relative_eq;
    use rstest::*;

    #[fixture]
    fn reference_demand() -> AnnualDemand {
        // demand for the 2000 sqft reference home in zone 5A
        AnnualDemand {
            heating_btu: 132_564_942.27600347,
            cooling_btu: 21_210_390.764160555,
        }
    }

    #[rstest]
    fn should_convert_demand_to_electric_resistance_consumption(reference_demand: AnnualDemand) {
        let consumption = energy_consumption(
            &reference_demand,
            FuelType::Electricity,
            HeatingSystem::Electric,
            EfficiencyTier::Standard,
            resolve_climate_zone("5A"),
        );
        assert_relative_eq!(
            consumption.heating_fuel_units,
            40_897.433910039945,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            consumption.cooling_kwh,
            2_702.786936663509,
            max_relative = 1e-12
        );
        assert_relative_eq!(consumption.heating_efficiency, 0.95, max_relative = 1e-12);
        assert_relative_eq!(consumption.cooling_efficiency, 2.3, max_relative = 1e-12);
    }

    #[rstest]
    fn should_cost_electric_heat_at_the_location_price(reference_demand: AnnualDemand) {
        let consumption = energy_consumption(
            &reference_demand,
            FuelType::Electricity,
            HeatingSystem::Electric,
            EfficiencyTier::Standard,
            resolve_climate_zone("5A"),
        );
        let costs = operating_costs(&consumption, FuelType::Electricity, 13.5);
        assert_relative_eq!(costs.heating_cost, 5_521.1535778553925, max_relative = 1e-12);
        assert_relative_eq!(costs.cooling_cost, 364.87623644957375, max_relative = 1e-12);
        assert_relative_eq!(costs.total_cost, 5_886.029814304966, max_relative = 1e-12);
    }

    #[rstest]
    fn should_total_costs_and_emissions_as_exact_sums(reference_demand: AnnualDemand) {
        let consumption = energy_consumption(
            &reference_demand,
            FuelType::Electricity,
            HeatingSystem::Electric,
            EfficiencyTier::Standard,
            resolve_climate_zone("5A"),
        );
        let costs = operating_costs(&consumption, FuelType::Electricity, 13.5);
        let emissions = carbon_emissions(&consumption, FuelType::Electricity);
        assert_eq!(costs.total_cost, costs.heating_cost + costs.cooling_cost);
        assert_eq!(
            emissions.total_lbs,
            emissions.heating_lbs + emissions.cooling_lbs
        );
        assert!(costs.heating_cost >= 0. && costs.cooling_cost >= 0.);
    }

    #[rstest]
    fn should_price_gas_heating_from_the_national_average() {
        let demand = AnnualDemand {
            heating_btu: 100_000_000.,
            cooling_btu: 3_412_000.,
        };
        let consumption = energy_consumption(
            &demand,
            FuelType::NaturalGas,
            HeatingSystem::Furnace,
            EfficiencyTier::Standard,
            resolve_climate_zone("5A"),
        );
        // 1000 therms of demand at 78% AFUE
        assert_relative_eq!(
            consumption.heating_fuel_units,
            1_282.051282051282,
            max_relative = 1e-12
        );

        // the electricity price feeds the cooling side only
        let costs = operating_costs(&consumption, FuelType::NaturalGas, 10.);
        assert_relative_eq!(costs.heating_cost, 2_307.6923076923076, max_relative = 1e-11);
        assert_relative_eq!(costs.cooling_cost, 43.47826086956522, max_relative = 1e-11);

        let emissions = carbon_emissions(&consumption, FuelType::NaturalGas);
        assert_relative_eq!(emissions.heating_lbs, 15_000., max_relative = 1e-11);
        assert_relative_eq!(emissions.cooling_lbs, 400., max_relative = 1e-11);
    }
}
