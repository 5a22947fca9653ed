use super::MedalField;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The metric that decides the primary order of a ranked table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, AsRefStr, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Total,
    #[default]
    Gold,
    Silver,
    Bronze,
}

impl SortKey {
    /// Key used whenever the requested one is missing or unrecognized.
    pub const DEFAULT: Self = Self::Gold;

    /// Fields compared in order, each descending, before falling back to the code.
    #[must_use]
    pub const fn tie_break_fields(self) -> [MedalField; 3] {
        match self {
            Self::Total => [MedalField::Total, MedalField::Gold, MedalField::Silver],
            Self::Gold => [MedalField::Gold, MedalField::Silver, MedalField::Bronze],
            Self::Silver => [MedalField::Silver, MedalField::Gold, MedalField::Bronze],
            Self::Bronze => [MedalField::Bronze, MedalField::Gold, MedalField::Silver],
        }
    }

    /// The field a table highlights as the sorted column.
    #[must_use]
    pub const fn primary_field(self) -> MedalField {
        self.tie_break_fields()[0]
    }
}

/// Returns `true` if `value` is the exact string form of a sort key.
#[must_use]
pub fn is_sort_key(value: &str) -> bool {
    SortKey::from_str(value).is_ok()
}

/// Turns untrusted input into a sort key, defaulting to [`SortKey::Gold`].
///
/// Matching is exact and case-sensitive, so `"Gold"` is not accepted. This never
/// fails: whatever reaches the ranking engine through here is a valid key.
#[must_use]
pub fn determine_sort_key(candidate: Option<&str>) -> SortKey {
    candidate.and_then(|value| SortKey::from_str(value).ok()).unwrap_or(SortKey::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_determine_sort_key_absent() {
        assert_eq!(determine_sort_key(None), SortKey::Gold);
    }

    #[test]
    fn test_determine_sort_key_valid() {
        assert_eq!(determine_sort_key(Some("bronze")), SortKey::Bronze);
        assert_eq!(determine_sort_key(Some("silver")), SortKey::Silver);
        assert_eq!(determine_sort_key(Some("total")), SortKey::Total);
        assert_eq!(determine_sort_key(Some("gold")), SortKey::Gold);
    }

    #[test]
    fn test_determine_sort_key_invalid() {
        assert_eq!(determine_sort_key(Some("invalid")), SortKey::Gold);
        assert_eq!(determine_sort_key(Some("")), SortKey::Gold);
        assert_eq!(determine_sort_key(Some("Bronze")), SortKey::Gold);
        assert_eq!(determine_sort_key(Some(" total")), SortKey::Gold);
    }

    #[test]
    fn test_is_sort_key() {
        assert!(is_sort_key("total"));
        assert!(!is_sort_key("platinum"));
        assert!(!is_sort_key("TOTAL"));
    }

    #[test]
    fn test_string_forms_round_trip() {
        for key in SortKey::iter() {
            assert_eq!(determine_sort_key(Some(key.as_ref())), key);
            assert_eq!(key.to_string(), key.as_ref());
        }
    }

    #[test]
    fn test_default_is_gold() {
        assert_eq!(SortKey::default(), SortKey::DEFAULT);
    }

    #[test]
    fn test_tie_break_fields() {
        assert_eq!(
            SortKey::Total.tie_break_fields(),
            [MedalField::Total, MedalField::Gold, MedalField::Silver]
        );
        assert_eq!(
            SortKey::Gold.tie_break_fields(),
            [MedalField::Gold, MedalField::Silver, MedalField::Bronze]
        );
        assert_eq!(
            SortKey::Silver.tie_break_fields(),
            [MedalField::Silver, MedalField::Gold, MedalField::Bronze]
        );
        assert_eq!(
            SortKey::Bronze.tie_break_fields(),
            [MedalField::Bronze, MedalField::Gold, MedalField::Silver]
        );
    }

    #[test]
    fn test_primary_field_matches_key() {
        for key in SortKey::iter() {
            assert_eq!(key.primary_field().as_ref(), key.as_ref());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SortKey::Silver).unwrap();
        assert_eq!(json, "\"silver\"");
        let key: SortKey = serde_json::from_str("\"total\"").unwrap();
        assert_eq!(key, SortKey::Total);
    }
}
