use super::{MedalTally, SortKey};
use core::cmp::Ordering;

/// Compare two entries under `sort_key`.
///
/// Each field of the key's cascade is compared descending; the first difference
/// decides. When every field ties, codes are compared ascending, which makes this a
/// total order for collections with unique codes.
#[must_use]
pub fn compare<T: MedalTally + ?Sized>(sort_key: SortKey, a: &T, b: &T) -> Ordering {
    sort_key
        .tie_break_fields()
        .into_iter()
        .map(|field| b.count(field).cmp(&a.count(field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| compare_codes(a.code(), b.code()))
}

/// Ascending comparison of entry codes.
///
/// Letters are compared case-insensitively first. Codes that differ only in case
/// put the lowercase form first, so distinct codes never compare equal.
///
/// This matches locale collation for ASCII letters and digits, which covers country
/// codes. It is not a full collation: other characters order by code point after
/// lowercasing, so accented letters sort after `z`.
#[must_use]
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Return a newly ordered copy of `entries`; the input is left untouched.
#[must_use]
pub fn sort_by<T: MedalTally + Clone>(sort_key: SortKey, entries: &[T]) -> Vec<T> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| compare(sort_key, a, b));
    sorted
}
