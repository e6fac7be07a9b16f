//! Chart variants and the cyclic rotation over them.

use std::fmt::Debug;
use std::marker::PhantomData;

/// One of the alternative charts cycled through in a single display slot.
pub trait ChartVariant: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every variant in rotation order. Must not be empty.
    const ALL: &'static [Self];

    /// Stable key used on the wire (`pitchViews`).
    fn key(self) -> &'static str;

    /// Human label shown on selection controls.
    fn label(self) -> &'static str;

    /// Position of this variant in [`ChartVariant::ALL`].
    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Looks a variant up by its key.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.key() == key)
    }
}

/// Finite-state cycle over the variants of `V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRotation<V> {
    index: usize,
    _variant: PhantomData<V>,
}

impl<V: ChartVariant> ChartRotation<V> {
    /// Starts at the first variant.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: 0,
            _variant: PhantomData,
        }
    }

    /// Starts at `variant`.
    #[must_use]
    pub fn starting_at(variant: V) -> Self {
        Self {
            index: variant.position(),
            _variant: PhantomData,
        }
    }

    /// Number of variants in the cycle.
    #[must_use]
    pub const fn len(&self) -> usize {
        V::ALL.len()
    }

    /// Always false: a rotation has at least one variant.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the active variant.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The variant on display.
    #[must_use]
    pub fn active(&self) -> V {
        V::ALL[self.index]
    }

    /// Moves to the next variant, wrapping after the last one.
    pub fn advance(&mut self) -> V {
        self.index = (self.index + 1) % V::ALL.len();
        self.active()
    }

    /// Jumps straight to `variant`.
    pub fn select(&mut self, variant: V) -> V {
        self.index = variant.position();
        self.active()
    }
}

impl<V: ChartVariant> Default for ChartRotation<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ChartVariant;

    /// Three-variant chart set used by rotation tests.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Slide {
        First,
        Second,
        Third,
    }

    impl ChartVariant for Slide {
        const ALL: &'static [Self] = &[Self::First, Self::Second, Self::Third];

        fn key(self) -> &'static str {
            match self {
                Self::First => "first",
                Self::Second => "second",
                Self::Third => "third",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
                Self::Third => "Third",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::Slide;
    use super::*;

    #[test]
    fn test_starts_at_first_variant() {
        let rotation = ChartRotation::<Slide>::new();
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.active(), Slide::First);
        assert_eq!(rotation.len(), 3);
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotation = ChartRotation::<Slide>::new();
        assert_eq!(rotation.advance(), Slide::Second);
        assert_eq!(rotation.advance(), Slide::Third);
        assert_eq!(rotation.advance(), Slide::First);
    }

    #[test]
    fn test_select_jumps_directly() {
        let mut rotation = ChartRotation::<Slide>::new();
        assert_eq!(rotation.select(Slide::Third), Slide::Third);
        assert_eq!(rotation.index(), 2);
        assert_eq!(rotation.advance(), Slide::First);
    }

    #[test]
    fn test_starting_at() {
        let rotation = ChartRotation::starting_at(Slide::Second);
        assert_eq!(rotation.active(), Slide::Second);
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(Slide::from_key("third"), Some(Slide::Third));
        assert_eq!(Slide::from_key("Third"), None);
        assert_eq!(Slide::Second.position(), 1);
    }
}
