use super::{MedalSource, RawMedalCount, RetrievalError};
use core::time::Duration;

const LOG_TARGET: &str = "     retry";

/// Maximum retry attempts (on top of the original request).
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// How failed retrievals are retried.
///
/// Every failure is retried the same way; there is no backoff or jitter, only an
/// optional fixed pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// A policy that gives up after the first failure.
    #[must_use]
    pub const fn never() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }
}

/// Fetch from `source`, retrying failures according to `policy`.
///
/// Makes at most `1 + policy.max_retries` attempts and returns the last error once
/// they are exhausted.
pub async fn fetch_with_retry<S: MedalSource + ?Sized>(
    source: &S,
    locator: &str,
    policy: RetryPolicy,
) -> Result<Vec<RawMedalCount>, RetrievalError> {
    let mut attempt = 0;

    loop {
        match source.fetch(locator).await {
            Ok(records) => return Ok(records),
            Err(e) if attempt < policy.max_retries => {
                attempt += 1;
                log::debug!(
                    target: LOG_TARGET,
                    "retrying '{locator}' (attempt {attempt}/{}, delay {}ms): {e}",
                    policy.max_retries,
                    policy.delay.as_millis(),
                );

                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "giving up on '{locator}' after {} attempt(s): {e}", attempt + 1);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct FlakySource {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakySource {
        const fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl MedalSource for FlakySource {
        async fn fetch(&self, locator: &str) -> Result<Vec<RawMedalCount>, RetrievalError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(RetrievalError::Status {
                    locator: locator.to_string(),
                    status: 500 + u16::try_from(call).unwrap(),
                });
            }

            Ok(vec![RawMedalCount {
                code: "KEN".to_string(),
                gold: 4,
                silver: 2,
                bronze: 5,
            }])
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let source = FlakySource::new(0);
        let records = fetch_with_retry(&source, "src", RetryPolicy::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_success_after_two_failures() {
        let source = FlakySource::new(2);
        let records = fetch_with_retry(&source, "src", RetryPolicy::default()).await.unwrap();
        assert_eq!(records[0].code, "KEN");
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let source = FlakySource::new(10);
        let error = fetch_with_retry(&source, "src", RetryPolicy::default()).await.unwrap_err();

        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        // The error from the last attempt is surfaced.
        assert_eq!(
            error,
            RetrievalError::Status {
                locator: "src".to_string(),
                status: 502,
            }
        );
    }

    #[tokio::test]
    async fn test_never_retries() {
        let source = FlakySource::new(1);
        assert!(fetch_with_retry(&source, "src", RetryPolicy::never()).await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fixed_delay_between_attempts() {
        let source = FlakySource::new(2);
        let policy = RetryPolicy {
            max_retries: 2,
            delay: Duration::from_millis(20),
        };

        let start = tokio::time::Instant::now();
        let _ = fetch_with_retry(&source, "src", policy).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
