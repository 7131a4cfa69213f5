//! Currency rounding for reported figures.
//!
//! The simulation runs at full decimal precision; only values leaving the
//! engine are rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit.
///
/// Ties go to the even neighbour (banker's rounding).
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::round_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_currency(dec!(20130.677)), dec!(20131));
/// assert_eq!(round_currency(dec!(2.5)), dec!(2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_to_nearest_unit() {
        assert_eq!(round_currency(dec!(8791.5887)), dec!(8792));
        assert_eq!(round_currency(dec!(8791.4999)), dec!(8791));
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(round_currency(dec!(0.5)), dec!(0));
        assert_eq!(round_currency(dec!(1.5)), dec!(2));
        assert_eq!(round_currency(dec!(2.5)), dec!(2));
    }

    #[test]
    fn test_negative_dust_rounds_to_zero() {
        assert_eq!(round_currency(dec!(-0.0000000001)), Decimal::ZERO);
    }

    #[test]
    fn test_result_has_no_fractional_digits() {
        assert_eq!(round_currency(dec!(105499.0646)).scale(), 0);
    }
}
