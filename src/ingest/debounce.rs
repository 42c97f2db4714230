use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

/// Per-key deadlines. Scheduling a key that is already pending replaces its deadline and
/// payload, so a burst of events for one file collapses into a single action.
#[derive(Debug)]
pub struct Debouncer<K, V> {
    pending: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash + Clone, V> Default for Debouncer<K, V> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Debouncer<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: K, value: V, at: Instant) {
        self.pending.insert(key, (at, value));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|(at, _)| *at).min()
    }

    /// Remove and return everything due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(K, V)> {
        let due_keys: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, (at, _))| *at <= now)
            .map(|(k, _)| k.clone())
            .collect();

        let mut due: Vec<(Instant, K, V)> = due_keys
            .into_iter()
            .filter_map(|k| self.pending.remove(&k).map(|(at, v)| (at, k, v)))
            .collect();
        due.sort_by_key(|(at, _, _)| *at);
        due.into_iter().map(|(_, k, v)| (k, v)).collect()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn repeated_events_collapse() {
        let t0 = Instant::now();
        let mut d = Debouncer::new();
        d.schedule("a", 1, t0 + Duration::from_secs(2));
        d.schedule("a", 2, t0 + Duration::from_secs(3));
        assert_eq!(d.next_deadline(), Some(t0 + Duration::from_secs(3)));

        // The first deadline no longer fires.
        assert!(d.take_due(t0 + Duration::from_secs(2)).is_empty());
        assert_eq!(d.take_due(t0 + Duration::from_secs(3)), vec![("a", 2)]);
        assert!(d.is_empty());
    }

    #[test]
    fn due_in_deadline_order() {
        let t0 = Instant::now();
        let mut d = Debouncer::new();
        d.schedule("late", (), t0 + Duration::from_millis(30));
        d.schedule("early", (), t0 + Duration::from_millis(10));
        d.schedule("future", (), t0 + Duration::from_secs(60));

        assert_eq!(d.next_deadline(), Some(t0 + Duration::from_millis(10)));
        let due: Vec<_> = d
            .take_due(t0 + Duration::from_millis(30))
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(due, vec!["early", "late"]);
        assert_eq!(d.next_deadline(), Some(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn taken_entries_are_gone() {
        let t0 = Instant::now();
        let mut d = Debouncer::new();
        d.schedule("a", 7, t0);
        assert_eq!(d.take_due(t0), vec![("a", 7)]);
        assert!(d.take_due(t0).is_empty());
        assert_eq!(d.next_deadline(), None);
    }
}
