use crate::core::climate::ClimateProfile;
use crate::core::fuels::FuelType;
use crate::core::hvac::{EfficiencyTier, HeatingSystem};
use crate::core::infiltration::InfiltrationLevel;
use crate::core::envelope::WindowGlazing;
use crate::engine::CalculationResult;
use serde::Serialize;

// Heuristic savings, as fractions of the annual bill
const LEAKY_SEALING_FRACTION: f64 = 0.3;
const AVERAGE_SEALING_FRACTION: f64 = 0.15;
const SINGLE_GLAZING_FRACTION: f64 = 0.15;
const DUCT_UPGRADE_FRACTION: f64 = 0.15;
const STANDARD_TIER_FRACTION: f64 = 0.20;
const WALL_INSULATION_FRACTION: f64 = 0.10;

// Rule thresholds
const DUCT_LOSS_ADVICE_THRESHOLD: f64 = 0.1;
const DUCT_LOSS_SEVERE_THRESHOLD: f64 = 0.25;
const DUCT_LOSS_SAVINGS_THRESHOLD: f64 = 0.15;
const HIGH_ANNUAL_COST: f64 = 1_000.; // in dollars
const COLD_WALL_R_ADVICE: f64 = 21.;
const HOT_CEILING_R_ADVICE: f64 = 49.;
const COLD_WALL_R_SAVINGS: f64 = 19.;

// Emissions of an average passenger car, in lbs CO₂ per mile
const CO2_LBS_PER_MILE_DRIVEN: f64 = 22.;

/// Ordered, human-readable efficiency advice derived from one calculation,
/// plus an aggregate savings estimate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendations {
    pub lines: Vec<String>,
    /// rounded dollars per year; zero when no weighted upgrade applies
    pub estimated_annual_savings: f64,
}

/// Run the fixed advice rules over a calculation result. The rule order and
/// thresholds are part of the contract: callers rely on the summary and
/// emissions lines leading the list and on reproducible wording.
pub fn generate_recommendations(
    result: &CalculationResult,
    climate: &ClimateProfile,
) -> Recommendations {
    let building = &result.building;
    let costs = &result.costs;
    let mut lines: Vec<String> = vec![];

    let is_cold_climate = climate.is_cold();
    let is_hot_climate = climate.is_hot();
    let is_moderate_climate = climate.is_moderate();

    lines.push(format!(
        "Total annual energy cost: ${:.2} for {} sq ft home.",
        costs.total_cost, building.square_footage
    ));
    lines.push(format!(
        "Annual carbon emissions: {} pounds of CO₂ (equivalent to driving approximately {} miles in an average car).",
        result.emissions.total_lbs.round(),
        (result.emissions.total_lbs / CO2_LBS_PER_MILE_DRIVEN).round()
    ));

    match building.infiltration {
        InfiltrationLevel::Leaky => {
            let potential_savings = (costs.total_cost * LEAKY_SEALING_FRACTION).round();
            lines.push(format!(
                "High air leakage detected: Your home has very leaky construction ({} air changes per hour). Air sealing could save approximately ${} per year on heating and cooling costs.",
                InfiltrationLevel::Leaky.air_changes_per_hour(),
                potential_savings
            ));
            lines.push("Professional air sealing is strongly recommended. Focus on attic air sealing, weatherstripping doors/windows, sealing rim joists, and addressing leaks around vents and utility penetrations.".into());
            lines.push(
                "A blower door test would help identify the major sources of air leakage in your home.".into(),
            );
        }
        InfiltrationLevel::Average => {
            let potential_savings = (costs.total_cost * AVERAGE_SEALING_FRACTION).round();
            lines.push(format!(
                "Moderate air leakage: Your home has average air leakage ({} air changes per hour). Improving air sealing could save approximately ${} per year.",
                InfiltrationLevel::Average.air_changes_per_hour(),
                potential_savings
            ));
            lines.push("Focus on weatherstripping doors and windows, sealing obvious gaps around pipes and vents, and adding gaskets to electrical outlets on exterior walls.".into());
        }
        InfiltrationLevel::Tight => {
            lines.push(format!(
                "Good air sealing: Your home has tight construction ({} air changes per hour). Maintain this by addressing any new leaks promptly and ensuring proper ventilation for indoor air quality.",
                InfiltrationLevel::Tight.air_changes_per_hour()
            ));
        }
    }

    if result.duct_loss_fraction > DUCT_LOSS_ADVICE_THRESHOLD {
        lines.push("Sealing and insulating ductwork could reduce energy losses by up to 20%.".into());

        if result.duct_loss_fraction >= DUCT_LOSS_SEVERE_THRESHOLD {
            lines.push("Moving ducts into conditioned space or upgrading to a ductless system would significantly improve efficiency.".into());
        }
    }

    if building.heating_fuel == FuelType::Electricity
        && building.heating_system == HeatingSystem::Electric
        && is_cold_climate
    {
        lines.push("Consider upgrading to a heat pump which can be 2-3 times more efficient than electric resistance heating in your climate.".into());
    }

    if building.heating_system == HeatingSystem::HeatPump && is_cold_climate {
        lines.push("Consider a cold-climate heat pump designed to maintain efficiency at lower temperatures.".into());
    }

    if is_cold_climate {
        if building.heating_fuel == FuelType::Electricity
            && building.heating_system == HeatingSystem::Electric
        {
            lines.push("In your cold climate, a high-efficiency gas furnace might provide lower operating costs than electric resistance heating.".into());
        } else if building.heating_fuel == FuelType::FuelOil {
            lines.push("Switching from oil to natural gas or a high-efficiency heat pump could reduce both costs and emissions.".into());
        }
    } else if is_moderate_climate || is_hot_climate {
        if building.heating_fuel != FuelType::Electricity {
            lines.push("In your climate, a high-efficiency heat pump might provide both heating and cooling more efficiently than your current system.".into());
        }
    }

    if building.window_glazing == WindowGlazing::Single {
        lines.push("Upgrading from single-pane to double-pane windows could reduce heat loss through windows by up to 50%.".into());
    } else if building.window_glazing == WindowGlazing::Double && is_cold_climate {
        lines.push("In your cold climate, upgrading to Low-E or triple-pane windows could further reduce heat loss by 20-30%.".into());
    }

    if is_cold_climate && building.wall_r_value < COLD_WALL_R_ADVICE {
        lines.push("Increasing wall insulation to R-21+ would be very beneficial in your cold climate.".into());
    } else if is_hot_climate && building.ceiling_r_value < HOT_CEILING_R_ADVICE {
        lines.push("Increasing attic insulation to R-49+ is especially important in your hot climate to reduce cooling costs.".into());
    }

    if building.efficiency_tier == EfficiencyTier::Standard {
        lines.push("Upgrading to a high-efficiency HVAC system could reduce your energy consumption by 15-30%.".into());
    }

    if costs.heating_cost > costs.cooling_cost && costs.heating_cost > HIGH_ANNUAL_COST {
        lines.push("Your heating costs are high - focus on improving insulation, reducing air leakage, and upgrading heating equipment.".into());
    } else if costs.cooling_cost > costs.heating_cost && costs.cooling_cost > HIGH_ANNUAL_COST {
        lines.push("Your cooling costs are high - consider shade trees, cool roofing, and a more efficient air conditioning system.".into());
    }

    let mut savings_fraction = 0.;
    if building.infiltration == InfiltrationLevel::Leaky {
        savings_fraction += LEAKY_SEALING_FRACTION;
    }
    if result.duct_loss_fraction >= DUCT_LOSS_SAVINGS_THRESHOLD {
        savings_fraction += DUCT_UPGRADE_FRACTION;
    }
    if building.window_glazing == WindowGlazing::Single {
        savings_fraction += SINGLE_GLAZING_FRACTION;
    }
    if building.efficiency_tier == EfficiencyTier::Standard {
        savings_fraction += STANDARD_TIER_FRACTION;
    }
    if is_cold_climate && building.wall_r_value < COLD_WALL_R_SAVINGS {
        savings_fraction += WALL_INSULATION_FRACTION;
    }

    let estimated_annual_savings = if savings_fraction > 0. {
        let savings_estimate = (costs.total_cost * savings_fraction).round();
        lines.push(format!(
            "Potential savings: Making the recommended upgrades could save approximately ${} per year on energy costs.",
            savings_estimate
        ));
        savings_estimate
    } else {
        0.
    };

    Recommendations {
        lines,
        estimated_annual_savings,
    }
}
