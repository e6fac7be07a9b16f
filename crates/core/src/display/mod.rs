//! Display formatting for dashboard figures.
//!
//! Every figure a view shows is formatted here, on `Decimal`:
//! - percentages with a fixed number of decimals
//! - compact millions (`25.0M`)
//! - en-US thousands grouping (`7,500,000`)
//! - short dates (`12/31/2025`)

pub mod date;
pub mod error;
pub mod number;

#[cfg(test)]
mod props;

pub use date::{parse_iso_date, short_date, short_date_from_iso};
pub use error::FormatError;
pub use number::{
    compact_millions, fixed, funding_percentage, group_fixed, group_thousands, money,
    money_millions, percent, plain, signed_percent,
};
