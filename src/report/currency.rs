//! Currency and digit-grouping formatting.

use rust_decimal::Decimal;

use crate::config::{CurrencyConfig, DigitGrouping};

/// Formats a number with the given digit grouping and no currency symbol.
///
/// Fractional digits are kept as-is (after trimming trailing zeros); only the
/// integer part is grouped.
///
/// # Examples
///
/// ```
/// use amortization_engine::config::DigitGrouping;
/// use amortization_engine::report::group_digits;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(group_digits(dec!(2500000), DigitGrouping::Western), "2,500,000");
/// assert_eq!(group_digits(dec!(2500000), DigitGrouping::Indian), "25,00,000");
/// ```
pub fn group_digits(amount: Decimal, grouping: DigitGrouping) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let text = amount.abs().normalize().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let grouped = match grouping {
        DigitGrouping::Western => group(integer, 3, 3),
        DigitGrouping::Indian => group(integer, 3, 2),
    };

    let mut out = String::with_capacity(grouped.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats an amount with the configured currency symbol and grouping.
///
/// # Examples
///
/// ```
/// use amortization_engine::config::{CurrencyConfig, DigitGrouping};
/// use amortization_engine::report::format_currency;
/// use rust_decimal_macros::dec;
///
/// let inr = CurrencyConfig {
///     code: "INR".to_string(),
///     symbol: "₹".to_string(),
///     grouping: DigitGrouping::Indian,
/// };
/// assert_eq!(format_currency(dec!(20131), &inr), "₹ 20,131");
/// ```
pub fn format_currency(amount: Decimal, currency: &CurrencyConfig) -> String {
    let grouped = group_digits(amount, currency.grouping);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-{} {}", currency.symbol, magnitude),
        None => format!("{} {}", currency.symbol, grouped),
    }
}

/// Joins `digits` with commas: the last `first` digits, then groups of `rest`.
fn group(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    while head.len() > rest {
        let (h, t) = head.split_at(head.len() - rest);
        groups.push(t);
        head = h;
    }
    groups.push(head);
    groups.reverse();
    groups.join(",")
}
