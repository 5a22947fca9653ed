use super::{MedalCount, RetrievalError};
use std::sync::Arc;

/// Outcome of a single fetch, shared by everyone who awaited it.
pub type FetchOutcome = Result<Arc<[MedalCount]>, RetrievalError>;

/// Where the data for one source locator stands.
///
/// Moves `Idle -> Loading -> Ready | Failed`. Both `Ready` and `Failed` go back to
/// `Loading` when a refetch is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    /// Nothing has been requested for this locator yet (or it was invalidated).
    Idle,

    /// A fetch, including its retries, is in flight.
    Loading,

    /// The latest fetch succeeded; totals are already derived.
    Ready(Arc<[MedalCount]>),

    /// The latest fetch failed and all retries were used up.
    Failed(RetrievalError),
}

impl QueryState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the collection if the state is `Ready`.
    #[must_use]
    pub fn data(&self) -> Option<&[MedalCount]> {
        match self {
            Self::Ready(data) => Some(data.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&RetrievalError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FetchOutcome> for QueryState {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed(e),
        }
    }
}
