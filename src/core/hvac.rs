use crate::compare_floats::max_of_2;
use crate::core::fuels::FuelType;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// Heat pump COPs are quoted at 47°F outdoor temperature, cooling figures at 95°F
const HEAT_PUMP_RATING_TEMP: f64 = 47.;
const COOLING_RATING_TEMP: f64 = 95.;
// Derated efficiencies never fall below these
const MIN_HEAT_PUMP_COP: f64 = 1.0;
const MIN_COOLING_COP: f64 = 2.0;

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum EfficiencyTier {
    Standard,
    High,
    Premium,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum HeatingSystem {
    Electric,
    HeatPump,
    Furnace,
    Boiler,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum DuctLocation {
    Conditioned,
    Unconditioned,
    #[serde(rename = "none")]
    Ductless,
}

/// Linear derating per 10°F step below the heat pump rating temperature.
#[derive(Debug)]
struct HeatPumpCurve {
    base_cop: f64,
    temp_factor: f64,
}

/// Linear derating per 10°F step above the cooling rating temperature.
#[derive(Debug)]
struct CoolingCurve {
    base_cop: f64,
    temp_factor: f64,
}

#[derive(Debug)]
struct TierEfficiencies {
    /// electric resistance conversion ratio
    electric: f64,
    heat_pump: HeatPumpCurve,
    /// AFUE of a gas or propane furnace
    furnace: f64,
    /// AFUE of an oil boiler
    boiler: f64,
    cooling: CoolingCurve,
}

static STANDARD: TierEfficiencies = TierEfficiencies {
    electric: 0.95,
    heat_pump: HeatPumpCurve {
        base_cop: 1.8,
        temp_factor: -0.08,
    },
    furnace: 0.78,
    boiler: 0.80,
    cooling: CoolingCurve {
        base_cop: 2.3,
        temp_factor: -0.15,
    },
};

static HIGH: TierEfficiencies = TierEfficiencies {
    electric: 0.98,
    heat_pump: HeatPumpCurve {
        base_cop: 2.5,
        temp_factor: -0.09,
    },
    furnace: 0.90,
    boiler: 0.87,
    cooling: CoolingCurve {
        base_cop: 3.2,
        temp_factor: -0.12,
    },
};

static PREMIUM: TierEfficiencies = TierEfficiencies {
    electric: 0.99,
    heat_pump: HeatPumpCurve {
        base_cop: 3.2,
        temp_factor: -0.09,
    },
    furnace: 0.95,
    boiler: 0.92,
    cooling: CoolingCurve {
        base_cop: 4.5,
        temp_factor: -0.08,
    },
};

impl EfficiencyTier {
    fn efficiencies(&self) -> &'static TierEfficiencies {
        match self {
            EfficiencyTier::Standard => &STANDARD,
            EfficiencyTier::High => &HIGH,
            EfficiencyTier::Premium => &PREMIUM,
        }
    }

    /// Ratio of heat delivered to fuel energy bought for a heating system in
    /// this tier, evaluated at the climate's winter design temperature.
    ///
    /// Arguments:
    /// * `system` - the heating system type
    /// * `average_winter_temp` - winter design temperature, in °F
    pub fn heating_efficiency(&self, system: HeatingSystem, average_winter_temp: f64) -> f64 {
        let efficiencies = self.efficiencies();
        match system {
            HeatingSystem::Electric => efficiencies.electric,
            HeatingSystem::HeatPump => {
                let steps_below_rating = (HEAT_PUMP_RATING_TEMP - average_winter_temp) / 10.;
                max_of_2(
                    MIN_HEAT_PUMP_COP,
                    efficiencies.heat_pump.base_cop
                        + steps_below_rating * efficiencies.heat_pump.temp_factor,
                )
            }
            HeatingSystem::Furnace => efficiencies.furnace,
            HeatingSystem::Boiler => efficiencies.boiler,
        }
    }

    /// Cooling COP for this tier at the climate's summer design temperature, in °F.
    pub fn cooling_efficiency(&self, average_summer_temp: f64) -> f64 {
        let efficiencies = self.efficiencies();
        let steps_above_rating = max_of_2(0., (average_summer_temp - COOLING_RATING_TEMP) / 10.);
        max_of_2(
            MIN_COOLING_COP,
            efficiencies.cooling.base_cop
                + steps_above_rating * efficiencies.cooling.temp_factor,
        )
    }
}

impl HeatingSystem {
    /// The system implied by a fuel when none is given explicitly.
    pub fn default_for_fuel(fuel: FuelType) -> Self {
        match fuel {
            FuelType::Electricity => HeatingSystem::Electric,
            FuelType::NaturalGas | FuelType::Propane => HeatingSystem::Furnace,
            FuelType::FuelOil => HeatingSystem::Boiler,
        }
    }

    pub fn is_compatible_with(&self, fuel: FuelType) -> bool {
        match self {
            HeatingSystem::Electric | HeatingSystem::HeatPump => {
                matches!(fuel, FuelType::Electricity)
            }
            HeatingSystem::Furnace => matches!(fuel, FuelType::NaturalGas | FuelType::Propane),
            HeatingSystem::Boiler => matches!(fuel, FuelType::FuelOil),
        }
    }
}

impl DuctLocation {
    /// Fraction of delivered energy lost in distribution, applied as (1 + fraction).
    pub fn loss_fraction(&self) -> f64 {
        match self {
            DuctLocation::Conditioned => 0.08,
            DuctLocation::Unconditioned => 0.35,
            // some distribution loss remains even without ducts
            DuctLocation::Ductless => 0.03,
        }
    }
}
