//! Money type with decimal precision and currency.
//!
//! Display math on money never goes through floating point.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in whole currency units.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Currency,
}

/// ISO 4217 currency codes the dashboards display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
}

impl Currency {
    /// Symbol placed before a formatted amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a US dollar amount from whole dollars.
    #[must_use]
    pub fn usd(whole: i64) -> Self {
        Self::new(Decimal::from(whole), Currency::Usd)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Amount left after subtracting `other`, in this currency.
    ///
    /// Returns `None` when the difference overflows.
    #[must_use]
    pub fn remaining_after(&self, other: &Self) -> Option<Self> {
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.currency))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
