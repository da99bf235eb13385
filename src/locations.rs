use crate::core::climate::{resolve_climate_zone, ClimateProfile};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A location the caller has already resolved to concrete values. The engine
/// never reaches back into map or boundary data itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationSelection {
    pub county: String,
    pub state: String,
    pub climate_zone_code: String,
    /// in cents per kWh
    pub electricity_price_cents_per_kwh: f64,
}

impl LocationSelection {
    pub fn climate(&self) -> &'static ClimateProfile {
        resolve_climate_zone(&self.climate_zone_code)
    }
}

/// Combine an IECC numeric zone with its moisture-regime letter into a full
/// zone code. Zones from 7 upwards carry no moisture suffix; below that the
/// letter is required, so its absence yields `None`. Fractional zone numbers
/// are floored.
pub fn assemble_zone_code(zone_number: f64, moisture_regime: Option<&str>) -> Option<String> {
    let zone = zone_number.floor();
    if zone >= 7. {
        Some(format!("{zone}"))
    } else {
        moisture_regime.map(|regime| format!("{zone}{regime}"))
    }
}

/// Residential electricity prices keyed by state identifier, in cents per
/// kWh. Insertion order is preserved so containment matches resolve the same
/// way on every run.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StatePriceIndex(IndexMap<String, f64>);

impl StatePriceIndex {
    pub fn new(prices: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self(prices.into_iter().collect())
    }

    /// Exact lookup first, then case-insensitive containment in either
    /// direction, so abbreviations and qualified names both land on a price.
    pub fn resolve_price(&self, identifier: &str) -> Option<f64> {
        if let Some(price) = self.0.get(identifier) {
            return Some(*price);
        }

        let lowered = identifier.to_lowercase();
        self.0.iter().find_map(|(name, price)| {
            let name_lowered = name.to_lowercase();
            (lowered.contains(&name_lowered) || name_lowered.contains(&lowered)).then_some(*price)
        })
    }
}

impl From<IndexMap<String, f64>> for StatePriceIndex {
    fn from(prices: IndexMap<String, f64>) -> Self {
        Self(prices)
    }
}
