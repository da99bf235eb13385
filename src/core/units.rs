pub const BTU_PER_KILOWATT_HOUR: f64 = 3_412.;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;
pub const CENTS_PER_DOLLAR: f64 = 100.;

pub(crate) fn cents_to_dollars(cents: f64) -> f64 {
    cents / CENTS_PER_DOLLAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_convert_cents_to_dollars() {
        assert_eq!(cents_to_dollars(13.5), 0.135);
        assert_eq!(cents_to_dollars(0.), 0.);
    }
}
