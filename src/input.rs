use crate::core::envelope::WindowGlazing;
use crate::core::fuels::FuelType;
use crate::core::hvac::{DuctLocation, EfficiencyTier, HeatingSystem};
use crate::core::infiltration::InfiltrationLevel;
use crate::engine::BuildingSpec;
use crate::errors::LocationDataError;
use crate::locations::{assemble_zone_code, LocationSelection, StatePriceIndex};
use serde::Deserialize;
use serde_valid::Validate;
use std::io::{BufReader, Read};

pub fn ingest_for_assessment(json: impl Read) -> Result<AssessmentDocument, anyhow::Error> {
    AssessmentDocument::init_with_json(json)
}

/// A full assessment request as received from a caller: the home being
/// assessed plus, optionally, the location it sits in.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AssessmentDocument {
    pub location: Option<LocationInput>,
    #[validate]
    pub building: BuildingInput,
}

impl AssessmentDocument {
    pub fn init_with_json(json: impl Read) -> Result<Self, anyhow::Error> {
        let reader = BufReader::new(json);

        let document: AssessmentDocument = serde_json::from_reader(reader)?;
        document.validate()?;

        Ok(document)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationInput {
    pub county: String,
    pub state: String,
    pub climate_zone: Option<ClimateZoneInput>,
    /// overrides any state-level price when present, in cents per kWh
    pub electricity_price_cents_per_kwh: Option<f64>,
    pub state_prices: Option<StatePriceIndex>,
}

/// Either a complete zone code ("5A", "Hot-Humid") or the numeric zone and
/// moisture regime exactly as boundary data carries them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClimateZoneInput {
    Code(String),
    Parts { number: f64, moisture: Option<String> },
}

impl LocationInput {
    /// Resolve the raw location block to concrete values, or report what is
    /// missing from it.
    pub fn resolve(&self) -> Result<LocationSelection, LocationDataError> {
        let climate_zone_code = match &self.climate_zone {
            Some(ClimateZoneInput::Code(code)) => Some(code.clone()),
            Some(ClimateZoneInput::Parts { number, moisture }) => {
                assemble_zone_code(*number, moisture.as_deref())
            }
            None => None,
        }
        .ok_or_else(|| LocationDataError::MissingClimateZone {
            county: self.county.clone(),
            state: self.state.clone(),
        })?;

        let electricity_price_cents_per_kwh = self
            .electricity_price_cents_per_kwh
            .or_else(|| {
                self.state_prices
                    .as_ref()
                    .and_then(|prices| prices.resolve_price(&self.state))
            })
            .ok_or_else(|| LocationDataError::MissingElectricityPrice {
                state: self.state.clone(),
            })?;

        Ok(LocationSelection {
            county: self.county.clone(),
            state: self.state.clone(),
            climate_zone_code,
            electricity_price_cents_per_kwh,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BuildingInput {
    #[validate(exclusive_minimum = 0.)]
    pub square_footage: f64,
    #[validate(exclusive_minimum = 0.)]
    pub wall_r_value: f64,
    #[validate(exclusive_minimum = 0.)]
    pub ceiling_r_value: f64,
    pub window_glazing: WindowGlazing,
    pub infiltration: InfiltrationLevel,
    pub heating_fuel: FuelType,
    /// implied by the fuel when omitted
    pub heating_system: Option<HeatingSystem>,
    pub hvac_tier: EfficiencyTier,
    pub duct_location: DuctLocation,
}

impl BuildingInput {
    pub fn to_spec(&self) -> BuildingSpec {
        BuildingSpec {
            square_footage: self.square_footage,
            wall_r_value: self.wall_r_value,
            ceiling_r_value: self.ceiling_r_value,
            window_glazing: self.window_glazing,
            infiltration: self.infiltration,
            heating_fuel: self.heating_fuel,
            heating_system: self
                .heating_system
                .unwrap_or_else(|| HeatingSystem::default_for_fuel(self.heating_fuel)),
            efficiency_tier: self.hvac_tier,
            duct_location: self.duct_location,
        }
    }
}
