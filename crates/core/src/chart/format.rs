//! Value formats for chart ticks and tooltips.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display::{group_fixed, group_thousands, plain};

/// How a chart value is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// The number as is (`4.5`).
    Plain,
    /// Thousands grouped (`2,500`).
    Thousands,
    /// Number followed by `%` (`5.2%`).
    Percent,
    /// Dollar amount, grouped (`$7,500,000`).
    Usd,
    /// Value already in millions, shown as dollars with one decimal (`$25.0M`).
    UsdMillions,
    /// Value already in millions with an `M` suffix (`25M`).
    Millions,
}

impl ValueFormat {
    /// Formats a single value.
    #[must_use]
    pub fn apply(self, value: Decimal) -> String {
        match self {
            Self::Plain => plain(value),
            Self::Thousands => group_thousands(value),
            Self::Percent => format!("{}%", plain(value)),
            Self::Usd => format!("${}", group_thousands(value)),
            Self::UsdMillions => format!("${}M", group_fixed(value, 1)),
            Self::Millions => format!("{}M", plain(value)),
        }
    }

    /// Tooltip text: `"{label}: {value}"`, or just the value when the label is empty.
    #[must_use]
    pub fn tooltip(self, label: &str, value: Decimal) -> String {
        if label.is_empty() {
            self.apply(value)
        } else {
            format!("{label}: {}", self.apply(value))
        }
    }
}
