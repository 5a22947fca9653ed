//! Ordering of medal tables
//!
//! A table is ranked by one [`SortKey`] at a time. Each key maps to a fixed cascade
//! of three [`MedalField`]s compared descending, followed by the entry code compared
//! ascending, so the resulting order is total and reproducible regardless of the input
//! order. Sorting is pure: [`sort_by`] returns a new vector and never touches its input.
//!
//! Untrusted input (command-line arguments, stored preferences) reaches the engine only
//! through [`determine_sort_key`], which maps anything unrecognized to the default key.

mod engine;
mod medal_field;
mod sort_key;

pub use engine::{compare, compare_codes, sort_by};
pub use medal_field::{MedalField, MedalTally};
pub use sort_key::{SortKey, determine_sort_key, is_sort_key};
