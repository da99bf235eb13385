use crate::core::fuels::FuelType;
use crate::core::hvac::HeatingSystem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Assessment document was considered invalid due to error: {0}")]
    InvalidDocument(#[from] anyhow::Error),
    #[error("Error identified during HECM calculation: {0}")]
    FailureInCalculation(#[from] InputValidationError),
    #[error("Location data was insufficient to run a calculation: {0}")]
    IncompleteLocation(#[from] LocationDataError),
    #[error("Error writing out assessment results: {0}")]
    ErrorInOutput(#[source] anyhow::Error),
}

/// An error representing a building specification that failed validation ahead
/// of a calculation.
#[derive(Debug, Error, PartialEq)]
pub enum InputValidationError {
    #[error("Square footage must be a positive number of square feet, but was {0}")]
    InvalidSquareFootage(f64),
    #[error("Wall R-value must be a positive number, but was {0}")]
    InvalidWallRValue(f64),
    #[error("Ceiling R-value must be a positive number, but was {0}")]
    InvalidCeilingRValue(f64),
    #[error("Electricity price must be a positive number of cents per kWh, but was {0}")]
    InvalidElectricityPrice(f64),
    #[error("A {system} cannot run on {fuel}")]
    IncompatibleHeatingSystem {
        system: HeatingSystem,
        fuel: FuelType,
    },
}

/// An error representing a selected location that cannot supply the inputs a
/// calculation needs.
#[derive(Debug, Error, PartialEq)]
pub enum LocationDataError {
    #[error("No county has been selected")]
    NotSelected,
    #[error("No climate zone is on record for {county}, {state}")]
    MissingClimateZone { county: String, state: String },
    #[error("No residential electricity price is on record for {state}")]
    MissingElectricityPrice { state: String },
}
