//! Property-based tests for display formatting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::number::{compact_millions, fixed, funding_percentage, group_thousands};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The one-decimal funding label never strays more than half a tenth from raised/goal*100.
    #[test]
    fn prop_funding_label_within_rounding(
        raised in 0i64..2_000_000_000,
        goal in 1i64..2_000_000_000,
    ) {
        let exact = Decimal::from(raised) * Decimal::ONE_HUNDRED / Decimal::from(goal);
        let pct = funding_percentage(Decimal::from(raised), Decimal::from(goal)).unwrap();
        let label = fixed(pct, 1);

        let shown: Decimal = label.parse().unwrap();
        prop_assert!((shown - exact).abs() <= Decimal::new(5, 2), "{} vs {}", label, exact);
        prop_assert_eq!(label.split_once('.').map(|(_, frac)| frac.len()), Some(1));
    }

    /// Grouping only inserts separators: removing them gives back the integer.
    #[test]
    fn prop_grouping_preserves_digits(value in any::<i64>()) {
        let grouped = group_thousands(Decimal::from(value));
        prop_assert_eq!(grouped.replace(',', ""), value.to_string());
        for chunk in grouped.trim_start_matches('-').split(',').skip(1) {
            prop_assert_eq!(chunk.len(), 3);
        }
    }

    /// Whole millions compact to `<n>.0M`.
    #[test]
    fn prop_whole_millions_compact(millions in 0i64..100_000) {
        let value = Decimal::from(millions) * Decimal::from(1_000_000);
        prop_assert_eq!(compact_millions(value, 1), format!("{millions}.0M"));
    }
}
