//! Retry policy for Tavily requests.
//!
//! Rate limiting (429), request timeouts and server errors clear up on their
//! own. Tavily's credit errors do not: 432 means the key or plan limit is
//! used up and 433 means the pay-as-you-go cap was hit. Those surface
//! immediately.

use std::time::Duration;

use backon::ExponentialBuilder;

/// Key or plan credit limit exceeded.
pub const STATUS_PLAN_LIMIT: u16 = 432;
/// Pay-as-you-go spending cap exceeded.
pub const STATUS_PAYGO_LIMIT: u16 = 433;

const FIRST_DELAY: Duration = Duration::from_millis(500);
const MAX_DELAY: Duration = Duration::from_secs(4);
const MAX_RETRIES: usize = 8;

/// Backoff used by a freshly built [`crate::Client`].
///
/// Delays double from 500ms up to 4s, with jitter, for at most eight retries.
#[must_use]
pub fn default_backoff() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(FIRST_DELAY)
        .with_max_delay(MAX_DELAY)
        .with_factor(2.0)
        .with_max_times(MAX_RETRIES)
        .with_jitter()
}

/// Whether a status reports exhausted Tavily credits.
#[must_use]
pub const fn is_plan_limit_status(code: u16) -> bool {
    matches!(code, STATUS_PLAN_LIMIT | STATUS_PAYGO_LIMIT)
}

/// Whether a failed request with this status is worth repeating.
#[must_use]
pub const fn is_retryable_status(code: u16) -> bool {
    if is_plan_limit_status(code) {
        return false;
    }
    matches!(code, 408 | 409 | 429 | 500..=599)
}
