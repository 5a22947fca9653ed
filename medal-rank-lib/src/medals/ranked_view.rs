use super::{MedalCount, QueryState, RetrievalError};
use crate::ranking::{SortKey, sort_by};

/// Number of rows in a ranked view unless asked otherwise.
pub const DEFAULT_LIMIT: usize = 10;

/// The sorted, size-limited projection handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedView {
    /// At most `limit` entries in rank order; `None` while loading or after a failure.
    pub data: Option<Vec<MedalCount>>,
    pub is_loading: bool,
    /// Set only once retries are exhausted.
    pub error: Option<RetrievalError>,
}

/// Derive a ranked view from the current state of a locator.
///
/// This is recomputed on every call; changing only `sort_key` or `limit` never
/// requires another fetch.
#[must_use]
pub fn rank(state: &QueryState, sort_key: SortKey, limit: usize) -> RankedView {
    match state {
        QueryState::Idle => RankedView {
            data: None,
            is_loading: false,
            error: None,
        },
        QueryState::Loading => RankedView {
            data: None,
            is_loading: true,
            error: None,
        },
        QueryState::Ready(entries) => {
            let mut ranked = sort_by::<MedalCount>(sort_key, entries);
            ranked.truncate(limit);
            RankedView {
                data: Some(ranked),
                is_loading: false,
                error: None,
            }
        }
        QueryState::Failed(e) => RankedView {
            data: None,
            is_loading: false,
            error: Some(e.clone()),
        },
    }
}
