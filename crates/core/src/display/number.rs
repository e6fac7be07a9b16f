//! Number, percentage and money display.

use rust_decimal::{Decimal, RoundingStrategy};
use venturehub_shared::types::Money;

use super::error::FormatError;

/// Fraction digits kept by [`group_thousands`].
const GROUPED_FRACTION_DIGITS: u32 = 3;

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats `value` with exactly `dp` decimals, rounding half away from zero.
#[must_use]
pub fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = round_half_up(value, dp);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Formats `value` without trailing zeros (`4.50` becomes `4.5`, `35.0` becomes `35`).
#[must_use]
pub fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Inserts en-US thousands separators into a plain decimal string.
fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Groups thousands the way en-US locale formatting does.
///
/// Keeps up to three fraction digits and drops trailing zeros:
/// `7500000` becomes `7,500,000`, `850` stays `850`, `1234.5` becomes `1,234.5`.
#[must_use]
pub fn group_thousands(value: Decimal) -> String {
    let rounded = round_half_up(value, GROUPED_FRACTION_DIGITS).normalize();
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    group_digits(&rounded.to_string())
}

/// Groups thousands on a value shown with exactly `dp` decimals (`1,000.0`).
#[must_use]
pub fn group_fixed(value: Decimal, dp: u32) -> String {
    group_digits(&fixed(value, dp))
}

/// Divides by one million and appends `M` (`25000000` with one decimal is `25.0M`).
#[must_use]
pub fn compact_millions(value: Decimal, dp: u32) -> String {
    format!("{}M", fixed(value / Decimal::from(1_000_000), dp))
}

/// Currency symbol plus grouped amount (`$7,500,000`).
#[must_use]
pub fn money(amount: &Money) -> String {
    format!("{}{}", amount.currency.symbol(), group_thousands(amount.amount))
}

/// Currency symbol plus compact millions (`$25.0M`).
#[must_use]
pub fn money_millions(amount: &Money, dp: u32) -> String {
    format!(
        "{}{}",
        amount.currency.symbol(),
        compact_millions(amount.amount, dp)
    )
}

/// Percentage with `dp` decimals (`75.0%`).
#[must_use]
pub fn percent(value: Decimal, dp: u32) -> String {
    format!("{}%", fixed(value, dp))
}

/// Percentage carrying an explicit sign for gains (`+18.5%`).
#[must_use]
pub fn signed_percent(value: Decimal, dp: u32) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        percent(value, dp)
    } else {
        format!("+{}", percent(value, dp))
    }
}

/// Share of the goal already raised, in percent.
///
/// # Errors
///
/// Returns `FormatError::ZeroGoal` when `goal` is zero or negative, and
/// `FormatError::Overflow` when the percentage leaves the decimal range.
pub fn funding_percentage(raised: Decimal, goal: Decimal) -> Result<Decimal, FormatError> {
    if goal <= Decimal::ZERO {
        return Err(FormatError::ZeroGoal);
    }
    raised
        .checked_div(goal)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(FormatError::Overflow("funding percentage"))
}
