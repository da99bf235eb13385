use serde::{Deserialize, Serialize};
use strum_macros::Display;

// Geometry assumptions for a home where only the floor area is known
const STOREY_HEIGHT: f64 = 9.; // in ft
const PERIMETER_SHAPE_FACTOR: f64 = 4.5;
const WINDOW_SHARE_OF_WALL: f64 = 0.20;

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "title_case")]
pub enum WindowGlazing {
    Single,
    Double,
    LowE,
    Triple,
}

impl WindowGlazing {
    /// Whole-window U-value, in BTU/h·ft²·°F.
    pub fn u_value(&self) -> f64 {
        match self {
            WindowGlazing::Single => 1.0,
            WindowGlazing::Double => 0.5,
            WindowGlazing::LowE => 0.35,
            WindowGlazing::Triple => 0.25,
        }
    }
}

/// Wall, ceiling and window conduction per °F of indoor-outdoor difference,
/// estimated from the floor area alone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnvelopeLoss {
    /// gross wall area, in ft²
    pub wall_area: f64,
    /// in ft²
    pub window_area: f64,
    /// in BTU/h·°F
    pub wall_loss: f64,
    /// in BTU/h·°F
    pub ceiling_loss: f64,
    /// in BTU/h·°F
    pub window_loss: f64,
}

impl EnvelopeLoss {
    pub fn total(&self) -> f64 {
        self.wall_loss + self.ceiling_loss + self.window_loss
    }
}

pub(crate) fn building_volume(square_footage: f64) -> f64 {
    square_footage * STOREY_HEIGHT
}

/// Conduction losses through the building shell.
///
/// Arguments:
/// * `square_footage` - conditioned floor area, in ft²
/// * `wall_r_value` - in h·ft²·°F/BTU
/// * `ceiling_r_value` - in h·ft²·°F/BTU
/// * `glazing` - window construction
pub fn envelope_loss(
    square_footage: f64,
    wall_r_value: f64,
    ceiling_r_value: f64,
    glazing: WindowGlazing,
) -> EnvelopeLoss {
    let ceiling_area = square_footage;
    // perimeter of a realistic rectangular footprint rather than a square one
    let estimated_perimeter = square_footage.sqrt() * PERIMETER_SHAPE_FACTOR;
    let wall_area = estimated_perimeter * STOREY_HEIGHT;
    let window_area = wall_area * WINDOW_SHARE_OF_WALL;
    let net_wall_area = wall_area - window_area;

    let wall_u = 1. / wall_r_value;
    let ceiling_u = 1. / ceiling_r_value;

    EnvelopeLoss {
        wall_area,
        window_area,
        wall_loss: net_wall_area * wall_u,
        ceiling_loss: ceiling_area * ceiling_u,
        window_loss: window_area * glazing.u_value(),
    }
}
