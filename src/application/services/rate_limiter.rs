use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::domain::Admission;

/// Per-identity sliding-window rate limiter.
///
/// Each identity keeps the instants of its admitted requests inside the
/// trailing `window`. A request is admitted while fewer than `limit` of those
/// remain; rejected requests are not recorded. The prune-count-record sequence
/// runs under the identity's map entry lock.
pub struct SlidingWindowRateLimiter {
    clients: DashMap<String, VecDeque<Instant>>,
    limit: usize,
    window: Duration,
}

impl SlidingWindowRateLimiter {
    /// Bucket shared by every request without a usable identity.
    pub const ANONYMOUS: &'static str = "anonymous";

    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            clients: DashMap::new(),
            limit,
            window,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn check_and_record(&self, identity: &str) -> Admission {
        self.check_and_record_at(identity, Instant::now())
    }

    pub fn check_and_record_at(&self, identity: &str, now: Instant) -> Admission {
        let key = if identity.trim().is_empty() {
            Self::ANONYMOUS
        } else {
            identity
        };

        let mut timestamps = self.clients.entry(key.to_string()).or_default();
        prune(&mut timestamps, now, self.window);

        if timestamps.len() >= self.limit {
            return Admission::Rejected {
                retry_after: self.window,
            };
        }

        timestamps.push_back(now);
        Admission::Admitted
    }

    /// Drops identities with nothing left inside the window. Returns how many
    /// were removed.
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    pub fn evict_idle_at(&self, now: Instant) -> usize {
        let before = self.clients.len();
        self.clients.retain(|_, timestamps| {
            prune(timestamps, now, self.window);
            !timestamps.is_empty()
        });
        before.saturating_sub(self.clients.len())
    }

    pub fn tracked_identities(&self) -> usize {
        self.clients.len()
    }
}

fn prune(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = timestamps.front() {
        if now.saturating_duration_since(oldest) >= window {
            timestamps.pop_front();
        } else {
            break;
        }
    }
}
