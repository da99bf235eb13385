use crate::core::units::{cents_to_dollars, BTU_PER_KILOWATT_HOUR};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Fuels a heating system can run on. Cooling is always electric.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum FuelType {
    Electricity,
    NaturalGas,
    Propane,
    FuelOil,
}

/// Heating value, carbon factor and billing unit for a fuel.
#[derive(Debug, PartialEq)]
pub struct FuelProperties {
    /// the unit the fuel is billed in
    pub unit: &'static str,
    pub btu_per_unit: f64,
    /// lbs CO₂ emitted per unit burned
    pub co2_per_unit: f64,
    // national average in dollars per unit; None for electricity, which is
    // priced per location at calculation time
    national_average_cost: Option<f64>,
}

static ELECTRICITY: FuelProperties = FuelProperties {
    unit: "kWh",
    btu_per_unit: BTU_PER_KILOWATT_HOUR,
    co2_per_unit: 0.92,
    national_average_cost: None,
};

static NATURAL_GAS: FuelProperties = FuelProperties {
    unit: "therm",
    btu_per_unit: 100_000.,
    co2_per_unit: 11.7,
    national_average_cost: Some(1.80),
};

static PROPANE: FuelProperties = FuelProperties {
    unit: "gallon",
    btu_per_unit: 91_500.,
    co2_per_unit: 12.7,
    national_average_cost: Some(3.20),
};

static FUEL_OIL: FuelProperties = FuelProperties {
    unit: "gallon",
    btu_per_unit: 138_500.,
    co2_per_unit: 22.4,
    national_average_cost: Some(4.20),
};

impl FuelType {
    pub fn properties(&self) -> &'static FuelProperties {
        match self {
            FuelType::Electricity => &ELECTRICITY,
            FuelType::NaturalGas => &NATURAL_GAS,
            FuelType::Propane => &PROPANE,
            FuelType::FuelOil => &FUEL_OIL,
        }
    }

    /// Cost of one billing unit in dollars. Electricity has no fixed national
    /// average, so its price arrives with the selected location instead of
    /// from the reference table.
    pub fn unit_cost(&self, electricity_price_cents_per_kwh: f64) -> f64 {
        self.properties()
            .national_average_cost
            .unwrap_or_else(|| cents_to_dollars(electricity_price_cents_per_kwh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(FuelType::Electricity, "kWh", 3_412., 0.92)]
    #[case(FuelType::NaturalGas, "therm", 100_000., 11.7)]
    #[case(FuelType::Propane, "gallon", 91_500., 12.7)]
    #[case(FuelType::FuelOil, "gallon", 138_500., 22.4)]
    fn should_hold_reference_heating_values(
        #[case] fuel: FuelType,
        #[case] unit: &str,
        #[case] btu_per_unit: f64,
        #[case] co2_per_unit: f64,
    ) {
        let properties = fuel.properties();
        assert_eq!(properties.unit, unit);
        assert_eq!(properties.btu_per_unit, btu_per_unit);
        assert_eq!(properties.co2_per_unit, co2_per_unit);
    }

    #[rstest]
    fn should_price_electricity_from_the_location() {
        assert_eq!(FuelType::Electricity.unit_cost(13.5), 0.135);
        assert_eq!(FuelType::Electricity.unit_cost(28.), 0.28);
    }

    #[rstest]
    #[case(FuelType::NaturalGas, 1.80)]
    #[case(FuelType::Propane, 3.20)]
    #[case(FuelType::FuelOil, 4.20)]
    fn should_price_other_fuels_from_national_averages(
        #[case] fuel: FuelType,
        #[case] expected: f64,
    ) {
        // the electricity price argument must not leak into fixed-cost fuels
        assert_eq!(fuel.unit_cost(13.5), expected);
        assert_eq!(fuel.unit_cost(99.), expected);
    }

    #[rstest]
    fn should_display_fuel_names_for_reports() {
        assert_eq!(FuelType::NaturalGas.to_string(), "Natural Gas");
        assert_eq!(FuelType::FuelOil.to_string(), "Fuel Oil");
    }

    #[rstest]
    fn should_deserialize_snake_case_fuel_keys() {
        assert_eq!(
            serde_json::from_str::<FuelType>("\"natural_gas\"").unwrap(),
            FuelType::NaturalGas
        );
        assert_eq!(
            serde_json::from_str::<FuelType>("\"fuel_oil\"").unwrap(),
            FuelType::FuelOil
        );
        assert!(serde_json::from_str::<FuelType>("\"coal\"").is_err());
    }
}
