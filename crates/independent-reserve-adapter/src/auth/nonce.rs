/*
[INPUT]:  Wall-clock time
[OUTPUT]: Per-request nonce values (seconds since epoch)
[POS]:    Auth layer - replay protection input for signed requests
[UPDATE]: When nonce resolution or source changes
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Produces nonces from the wall clock at one-second resolution.
///
/// Values never go backwards for a given generator, even if the system clock
/// does. Two calls within the same second share a nonce; callers that need
/// strictly increasing values must serialize their requests.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce, derived fresh from the current time.
    pub fn next(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        let previous = self.last.fetch_max(now, Ordering::AcqRel);
        previous.max(now)
    }
}
