//! Retrieval and caching of medal tables
//!
//! A [`MedalSource`] delivers raw per-country counts for a source locator (a URL).
//! The [`MedalService`] sits in front of it: it derives each entry's total, retries
//! failures according to a [`RetryPolicy`], keeps one cache entry per locator and
//! coalesces overlapping requests into a single fetch.
//!
//! Each cache entry is a small state machine, reported as a [`QueryState`]:
//! `Idle -> Loading -> Ready | Failed`, with refetches moving a settled entry back to
//! `Loading`. Every fetch is tagged with a generation number and holds only a weak
//! reference to the cache, so a response that arrives after its entry was invalidated
//! or after the service was dropped is discarded instead of being applied.
//!
//! Presentation code asks for a [`RankedView`]: the cached collection passed through the
//! ranking engine and truncated to a limit. The view is derived on every read, so
//! switching the sort key or limit never causes a fetch.

mod medal_count;
mod query_state;
mod ranked_view;
mod retrieval_error;
mod retry;
mod service;
mod source;

pub use medal_count::{MedalCount, RawMedalCount, derive_totals};
pub use query_state::{FetchOutcome, QueryState};
pub use ranked_view::{DEFAULT_LIMIT, RankedView, rank};
pub use retrieval_error::RetrievalError;
pub use retry::{DEFAULT_MAX_RETRIES, RetryPolicy, fetch_with_retry};
pub use service::MedalService;
pub use source::{DEFAULT_REQUEST_TIMEOUT, HttpSource, MedalSource};
