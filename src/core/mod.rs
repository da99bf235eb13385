pub mod climate;
pub mod costs;
pub mod demand;
pub mod envelope;
pub mod fuels;
pub mod hvac;
pub mod infiltration;
pub mod recommendations;
pub mod units;
