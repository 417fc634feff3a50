use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// How long a claimed view id is remembered. Slack retries and double-sent
/// submissions arrive within seconds; anything older is stale.
const RETENTION_MINUTES: i64 = 10;

/// Remembers which view submissions have already been accepted, so a
/// double-delivered submission starts one execution instead of two.
///
/// The map is keyed by view id. Entries are evicted lazily on the next
/// claim attempt once they age out.
#[derive(Default)]
pub struct SubmitGuard {
    claimed: DashMap<String, DateTime<Utc>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a view id. Returns `false` if it was already claimed within
    /// the retention window.
    pub fn try_claim(&self, view_id: &str) -> bool {
        self.evict_expired();
        match self.claimed.entry(view_id.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Utc::now());
                true
            }
        }
    }

    fn evict_expired(&self) {
        let cutoff = Utc::now() - Duration::minutes(RETENTION_MINUTES);
        self.claimed.retain(|_, claimed_at| *claimed_at > cutoff);
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_first_claim_wins_and_repeat_claims_lose() {
            let guard = SubmitGuard::new();
            assert!(guard.try_claim("V1"));
            assert!(!guard.try_claim("V1"));
            assert!(guard.try_claim("V2"));
        }

        #[test]
        fn test_expired_claims_are_evicted() {
            let guard = SubmitGuard::new();
            let stale = Utc::now() - Duration::minutes(RETENTION_MINUTES + 1);
            guard.claimed.insert("V1".to_string(), stale);
            assert!(guard.try_claim("V1"));
        }
    }
}
