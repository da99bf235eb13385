use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Serialize;
use tracing::debug;

// Severity thresholds, in annual degree days (base 65°F)
const VERY_COLD_HDD: f64 = 6_000.;
const VERY_HOT_CDD: f64 = 3_000.;
const COLD_HDD: f64 = 4_000.;
const HOT_CDD: f64 = 2_000.;

/// Annual degree-day profile for a climate zone, with the severity
/// classifications the rest of the model keys off.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClimateProfile {
    pub display_name: &'static str,
    /// annual heating degree days, base 65°F
    pub heating_degree_days: f64,
    /// annual cooling degree days, base 65°F
    pub cooling_degree_days: f64,
}

impl ClimateProfile {
    pub fn is_very_cold(&self) -> bool {
        self.heating_degree_days > VERY_COLD_HDD
    }

    pub fn is_very_hot(&self) -> bool {
        self.cooling_degree_days > VERY_HOT_CDD
    }

    pub fn is_cold(&self) -> bool {
        self.heating_degree_days > COLD_HDD
    }

    pub fn is_hot(&self) -> bool {
        self.cooling_degree_days > HOT_CDD
    }

    pub fn is_moderate(&self) -> bool {
        !self.is_cold() && !self.is_hot()
    }

    /// Assumed outdoor temperature used to evaluate heating efficiency curves, in °F.
    pub fn average_winter_temp(&self) -> f64 {
        if self.is_very_cold() {
            10.
        } else if self.is_cold() {
            25.
        } else {
            35.
        }
    }

    /// Assumed outdoor temperature used to evaluate cooling efficiency curves, in °F.
    pub fn average_summer_temp(&self) -> f64 {
        if self.is_very_hot() {
            95.
        } else if self.is_hot() {
            90.
        } else {
            85.
        }
    }
}

const fn profile(
    display_name: &'static str,
    heating_degree_days: f64,
    cooling_degree_days: f64,
) -> ClimateProfile {
    ClimateProfile {
        display_name,
        heating_degree_days,
        cooling_degree_days,
    }
}

/// Used whenever a zone code is not in the library, so zone lookups stay total.
pub static DEFAULT_CLIMATE: ClimateProfile = profile("Average Climate", 4_000., 1_000.);

lazy_static! {
    /// Display names for the full IECC code range. Zones 0A and 0B can be
    /// named but carry no degree-day entry.
    pub static ref ZONE_DESCRIPTIONS: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("0A", "Extremely Hot - Humid"),
        ("0B", "Extremely Hot - Dry"),
        ("1A", "Very Hot - Humid"),
        ("1B", "Very Hot - Dry"),
        ("2A", "Hot - Humid"),
        ("2B", "Hot - Dry"),
        ("3A", "Warm - Humid"),
        ("3B", "Warm - Dry"),
        ("3C", "Warm - Marine"),
        ("4A", "Mixed - Humid"),
        ("4B", "Mixed - Dry"),
        ("4C", "Mixed - Marine"),
        ("5A", "Cool - Humid"),
        ("5B", "Cool - Dry"),
        ("5C", "Cool - Marine"),
        ("6A", "Cold - Humid"),
        ("6B", "Cold - Dry"),
        ("7", "Very Cold"),
        ("8", "Subarctic"),
    ]);

    /// Approximate annual degree days for the IECC climate zones and the
    /// Build America climate regions.
    pub static ref CLIMATE_ZONES: IndexMap<&'static str, ClimateProfile> = IndexMap::from([
        ("1A", profile("Very Hot - Humid", 200., 4_500.)),
        ("1B", profile("Very Hot - Dry", 200., 4_000.)),
        ("2A", profile("Hot - Humid", 750., 3_500.)),
        ("2B", profile("Hot - Dry", 750., 3_000.)),
        ("3A", profile("Warm - Humid", 1_800., 2_500.)),
        ("3B", profile("Warm - Dry", 1_800., 2_000.)),
        ("3C", profile("Warm - Marine", 2_000., 1_000.)),
        ("4A", profile("Mixed - Humid", 3_500., 1_500.)),
        ("4B", profile("Mixed - Dry", 3_500., 1_200.)),
        ("4C", profile("Mixed - Marine", 3_800., 500.)),
        ("5A", profile("Cool - Humid", 5_000., 800.)),
        ("5B", profile("Cool - Dry", 5_000., 600.)),
        ("5C", profile("Cool - Marine", 5_200., 300.)),
        ("6A", profile("Cold - Humid", 6_500., 400.)),
        ("6B", profile("Cold - Dry", 6_500., 300.)),
        ("7", profile("Very Cold", 8_000., 200.)),
        ("8", profile("Subarctic", 10_000., 100.)),
        ("Hot-Humid", profile("Hot-Humid", 500., 4_000.)),
        ("Hot-Dry", profile("Hot-Dry", 500., 3_500.)),
        ("Mixed-Humid", profile("Mixed-Humid", 3_000., 2_000.)),
        ("Mixed-Dry", profile("Mixed-Dry", 3_000., 1_500.)),
        ("Cold", profile("Cold", 5_500., 500.)),
        ("Very Cold", profile("Very Cold", 8_000., 250.)),
        ("Subarctic", profile("Subarctic", 10_000., 100.)),
        ("Marine", profile("Marine", 3_500., 600.)),
    ]);
}

/// Look up the degree-day profile for a zone code, falling back to the
/// average profile for codes outside the library (e.g. zones 0A/0B).
pub fn resolve_climate_zone(code: &str) -> &'static ClimateProfile {
    CLIMATE_ZONES.get(code).unwrap_or_else(|| {
        debug!("no degree-day data for climate zone {code}, using the average profile");
        &DEFAULT_CLIMATE
    })
}

/// Human-readable name for a zone code, covering the zones that can be named
/// but not calculated.
pub fn describe_zone(code: &str) -> &'static str {
    ZONE_DESCRIPTIONS
        .get(code)
        .copied()
        .unwrap_or_else(|| resolve_climate_zone(code).display_name)
}
