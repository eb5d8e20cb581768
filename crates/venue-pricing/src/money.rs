use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every presented amount carries.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds to two decimal places, with halves rounded up (away from zero).
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::round_currency;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_currency(dec("416.665")), dec("416.67"));
        assert_eq!(round_currency(dec("416.664")), dec("416.66"));
        assert_eq!(round_currency(dec("0.005")), dec("0.01"));
    }

    #[test]
    fn always_carries_two_places() {
        assert_eq!(round_currency(dec("50000")).to_string(), "50000.00");
        assert_eq!(round_currency(dec("2500.0000001")).to_string(), "2500.00");
    }
}
