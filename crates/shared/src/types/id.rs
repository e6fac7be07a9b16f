//! Typed IDs for snapshot entities.
//!
//! Using typed IDs prevents accidentally passing a `CompanyId` where a `MeetingId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Creates an ID from a raw number.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the inner number.
            #[must_use]
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(ActivityId, "Identifier of a recent-activity entry.");
typed_id!(TeamMemberId, "Identifier of a founder team member.");
typed_id!(CompanyId, "Identifier of a portfolio company.");
typed_id!(MeetingId, "Identifier of an upcoming meeting.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_id_roundtrip_through_string() {
        let id = CompanyId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(CompanyId::from_str("42").unwrap(), id);
        assert!(CompanyId::from_str("forty-two").is_err());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&ActivityId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ActivityId = serde_json::from_str("3").unwrap();
        assert_eq!(back.into_inner(), 3);
    }

    #[test]
    fn test_ids_order_by_number() {
        assert!(MeetingId::from(1) < MeetingId::from(2));
    }
}
