use super::{FetchOutcome, MedalCount, MedalSource, QueryState, RankedView, RetrievalError, RetryPolicy, derive_totals, fetch_with_retry, rank};
use crate::ranking::SortKey;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::task::AbortHandle;

const LOG_TARGET: &str = "    medals";

type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

enum Entry {
    Loading {
        /// Only the fetch carrying this generation may settle the entry.
        generation: u64,
        fetch: SharedFetch,
        abort: AbortHandle,
    },
    Ready(Arc<[MedalCount]>),
    Failed(RetrievalError),
}

impl Entry {
    fn state(&self) -> QueryState {
        match self {
            Self::Loading { .. } => QueryState::Loading,
            Self::Ready(data) => QueryState::Ready(Arc::clone(data)),
            Self::Failed(e) => QueryState::Failed(e.clone()),
        }
    }
}

#[derive(Default)]
struct Entries {
    map: HashMap<String, Entry>,
    next_generation: u64,
}

/// Fetches, caches and ranks medal tables, one cache entry per source locator.
///
/// Create one per application and hand clones to whatever needs it; clones share the
/// same cache. Overlapping requests for a locator are coalesced into a single fetch
/// whose outcome every caller observes. A response that lands after its entry was
/// invalidated, or after the last handle was dropped, is discarded.
pub struct MedalService<S> {
    source: Arc<S>,
    policy: RetryPolicy,
    entries: Arc<Mutex<Entries>>,
}

impl<S> Clone for MedalService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S> core::fmt::Debug for MedalService<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cached = lock(&self.entries).map.len();
        f.debug_struct("MedalService")
            .field("policy", &self.policy)
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}

impl<S: MedalSource> MedalService<S> {
    #[must_use]
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self {
            source: Arc::new(source),
            policy,
            entries: Arc::default(),
        }
    }

    /// Get the collection for `locator`, fetching it on a cache miss.
    ///
    /// A failed entry counts as a miss, so asking again after an outage fetches again.
    pub async fn load(&self, locator: &str) -> FetchOutcome {
        let fetch = {
            let mut entries = self.lock();
            match entries.map.get(locator) {
                Some(Entry::Ready(data)) => {
                    log::debug!(target: LOG_TARGET, "Cache hit for '{locator}'");
                    return Ok(Arc::clone(data));
                }
                Some(Entry::Loading { fetch, .. }) => {
                    log::debug!(target: LOG_TARGET, "Joining in-flight fetch of '{locator}'");
                    fetch.clone()
                }
                Some(Entry::Failed(_)) | None => self.start_fetch(&mut entries, locator),
            }
        };

        fetch.await
    }

    /// Fetch `locator` again regardless of what is cached.
    ///
    /// If a fetch is already in flight, this waits for it instead of issuing another.
    pub async fn refetch(&self, locator: &str) -> FetchOutcome {
        let fetch = {
            let mut entries = self.lock();
            if let Some(Entry::Loading { fetch, .. }) = entries.map.get(locator) {
                fetch.clone()
            } else {
                log::debug!(target: LOG_TARGET, "Refetching '{locator}'");
                self.start_fetch(&mut entries, locator)
            }
        };

        fetch.await
    }

    /// Start fetching `locator` in the background unless it is already cached or loading.
    ///
    /// Does nothing outside a Tokio runtime.
    pub fn prefetch(&self, locator: &str) {
        let mut entries = self.lock();
        if needs_fetch(entries.map.get(locator)) && can_spawn() {
            let _ = self.start_fetch(&mut entries, locator);
        }
    }

    /// Forget whatever is cached for `locator` and abandon any fetch in flight.
    pub fn invalidate(&self, locator: &str) {
        let removed = self.lock().map.remove(locator);
        if let Some(Entry::Loading { abort, .. }) = removed {
            log::debug!(target: LOG_TARGET, "Abandoning in-flight fetch of '{locator}'");
            abort.abort();
        }
    }

    /// Snapshot of where `locator` stands.
    #[must_use]
    pub fn state(&self, locator: &str) -> QueryState {
        self.lock().map.get(locator).map_or(QueryState::Idle, Entry::state)
    }

    /// Ranked view of whatever is currently cached for `locator`.
    ///
    /// Starts a background fetch when nothing has been requested yet, in which case
    /// the view reports loading. A failed entry is reported as such while a fresh
    /// fetch starts behind it. Outside a Tokio runtime nothing is fetched and an
    /// unrequested locator stays idle.
    #[must_use]
    pub fn ranked_view(&self, sort_key: SortKey, locator: &str, limit: usize) -> RankedView {
        let state = {
            let mut entries = self.lock();
            let current = entries.map.get(locator).map(Entry::state);
            if needs_fetch(entries.map.get(locator)) && can_spawn() {
                let _ = self.start_fetch(&mut entries, locator);
            }
            current.unwrap_or_else(|| entries.map.get(locator).map_or(QueryState::Idle, Entry::state))
        };

        rank(&state, sort_key, limit)
    }

    /// Ranked view of `locator` once its data has settled.
    pub async fn fetch_ranked_view(&self, sort_key: SortKey, locator: &str, limit: usize) -> RankedView {
        let outcome = self.load(locator).await;
        rank(&QueryState::from(outcome), sort_key, limit)
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        lock(&self.entries)
    }

    fn start_fetch(&self, entries: &mut Entries, locator: &str) -> SharedFetch {
        let generation = entries.next_generation;
        entries.next_generation += 1;

        log::debug!(target: LOG_TARGET, "Cache miss for '{locator}', starting fetch #{generation}");

        let task = tokio::spawn(run_fetch(
            Arc::clone(&self.source),
            self.policy,
            Arc::downgrade(&self.entries),
            locator.to_string(),
            generation,
        ));
        let abort = task.abort_handle();

        let aborted_locator = locator.to_string();
        let fetch = async move {
            task.await.unwrap_or_else(|e| {
                Err(RetrievalError::Aborted {
                    locator: aborted_locator,
                    reason: e.to_string(),
                })
            })
        }
        .boxed()
        .shared();

        let _ = entries.map.insert(
            locator.to_string(),
            Entry::Loading {
                generation,
                fetch: fetch.clone(),
                abort,
            },
        );

        fetch
    }
}

const fn needs_fetch(entry: Option<&Entry>) -> bool {
    matches!(entry, None | Some(Entry::Failed(_)))
}

fn can_spawn() -> bool {
    let available = tokio::runtime::Handle::try_current().is_ok();
    if !available {
        log::debug!(target: LOG_TARGET, "No Tokio runtime, not starting a fetch");
    }
    available
}

fn lock(entries: &Mutex<Entries>) -> MutexGuard<'_, Entries> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run_fetch<S: MedalSource>(
    source: Arc<S>,
    policy: RetryPolicy,
    entries: Weak<Mutex<Entries>>,
    locator: String,
    generation: u64,
) -> FetchOutcome {
    let outcome: FetchOutcome = fetch_with_retry(source.as_ref(), &locator, policy)
        .await
        .map(|records| Arc::from(derive_totals(records)));

    match entries.upgrade() {
        Some(entries) => commit(&entries, &locator, generation, &outcome),
        None => log::debug!(target: LOG_TARGET, "Discarding response for '{locator}': the cache is gone"),
    }

    outcome
}

fn commit(entries: &Mutex<Entries>, locator: &str, generation: u64, outcome: &FetchOutcome) {
    let mut entries = lock(entries);

    let current = matches!(
        entries.map.get(locator),
        Some(Entry::Loading { generation: pending, .. }) if *pending == generation
    );
    if !current {
        log::debug!(target: LOG_TARGET, "Discarding stale response #{generation} for '{locator}'");
        return;
    }

    let entry = match outcome {
        Ok(data) => {
            log::debug!(target: LOG_TARGET, "Cached {} medal entries for '{locator}'", data.len());
            Entry::Ready(Arc::clone(data))
        }
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Could not retrieve medal data: {e}");
            Entry::Failed(e.clone())
        }
    };

    let _ = entries.map.insert(locator.to_string(), entry);
}
