//! Property-based tests for chart rotation.

use proptest::prelude::*;

use super::variant::fixtures::Slide;
use super::variant::{ChartRotation, ChartVariant};

fn any_slide() -> impl Strategy<Value = Slide> {
    prop::sample::select(Slide::ALL.to_vec())
}

proptest! {
    /// After N firings from the first variant, the index is N mod the variant count.
    #[test]
    fn prop_index_after_n_firings(n in 0usize..1_000) {
        let mut rotation = ChartRotation::<Slide>::new();
        for _ in 0..n {
            rotation.advance();
        }
        prop_assert_eq!(rotation.index(), n % Slide::ALL.len());
    }

    /// A selection lands exactly on the chosen variant whatever came before, and
    /// later firings count from it.
    #[test]
    fn prop_selection_resets_the_cycle_origin(
        before in 0usize..50,
        chosen in any_slide(),
        after in 0usize..50,
    ) {
        let mut rotation = ChartRotation::<Slide>::new();
        for _ in 0..before {
            rotation.advance();
        }
        prop_assert_eq!(rotation.select(chosen), chosen);
        for _ in 0..after {
            rotation.advance();
        }
        prop_assert_eq!(
            rotation.index(),
            (chosen.position() + after) % Slide::ALL.len()
        );
    }
}
