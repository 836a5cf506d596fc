//! Bounded token → count map with deterministic top-K pruning.
//!
//! Counts are exact only for keys that survive every prune. A key dropped
//! early starts again from zero if it shows up later.

use std::{cmp::Ordering, collections::HashMap};

use log::debug;

/// Ranking used everywhere: count descending, then token ascending.
#[inline]
pub fn rank(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

#[derive(Debug, Clone)]
pub struct TallyStore {
    counts: HashMap<String, u64>,
    max_keys: usize,
    prune_interval: u64,
    since_prune: u64,
    prunes: u64,
}

impl TallyStore {
    #[must_use]
    pub fn new(max_keys: usize, prune_interval: u64) -> Self {
        Self {
            counts: HashMap::new(),
            max_keys,
            prune_interval,
            since_prune: 0,
            prunes: 0,
        }
    }

    /// Count one more occurrence of `token`. Empty tokens are ignored.
    #[inline]
    pub fn increment(&mut self, token: &str) {
        self.increment_by(token, 1);
    }

    /// Add a pre-aggregated `amount` to `token`. Empty tokens are ignored.
    pub fn increment_by(&mut self, token: &str, amount: u64) {
        if token.is_empty() {
            return;
        }
        match self.counts.get_mut(token) {
            Some(c) => *c = c.saturating_add(amount),
            None => {
                self.counts.insert(token.to_owned(), amount);
            }
        }
        self.since_prune += 1;
        if self.since_prune >= self.prune_interval {
            self.prune(self.max_keys);
        }
    }

    /// Keep only the `max_keys` best-ranked entries; the rest are gone for good.
    pub fn prune(&mut self, max_keys: usize) {
        self.since_prune = 0;
        self.prunes += 1;
        if self.counts.len() <= max_keys {
            return;
        }
        let before = self.counts.len();
        let mut entries: Vec<(String, u64)> = self.counts.drain().collect();
        if max_keys > 0 {
            // total order, so the retained set is the same on every run
            entries.select_nth_unstable_by(max_keys - 1, |a, b| {
                rank((a.0.as_str(), a.1), (b.0.as_str(), b.1))
            });
        }
        entries.truncate(max_keys);
        self.counts.extend(entries);
        debug!("pruned tally from {before} to {} keys", self.counts.len());
    }

    #[inline]
    #[must_use]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Prune passes performed so far, including the ones triggered automatically.
    #[inline]
    #[must_use]
    pub fn prunes(&self) -> u64 {
        self.prunes
    }

    /// The `n` best-ranked entries, in rank order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        if n == 0 {
            return Vec::new();
        }
        let mut entries: Vec<(&str, u64)> =
            self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        if entries.len() > n {
            entries.select_nth_unstable_by(n - 1, |a, b| rank(*a, *b));
            entries.truncate(n);
        }
        entries.sort_unstable_by(|a, b| rank(*a, *b));
        entries
    }

    /// Every entry, in rank order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        self.top(self.counts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TallyStore {
        TallyStore::new(usize::MAX, u64::MAX)
    }

    #[test]
    fn counts_are_exact_without_pruning() {
        let mut s = store();
        for t in ["a", "b", "a", "c", "a", "b"] {
            s.increment(t);
        }
        assert_eq!(s.get("a"), Some(3));
        assert_eq!(s.get("b"), Some(2));
        assert_eq!(s.get("c"), Some(1));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn empty_token_is_ignored() {
        let mut s = store();
        s.increment("");
        s.increment_by("", 10);
        assert!(s.is_empty());
    }

    #[test]
    fn increment_by_accumulates() {
        let mut s = store();
        s.increment_by("/etc", 40);
        s.increment_by("/etc", 2);
        assert_eq!(s.get("/etc"), Some(42));
    }

    #[test]
    fn prune_keeps_top_with_lexical_tiebreak() {
        let mut s = store();
        for (k, n) in [("d", 1), ("c", 2), ("b", 2), ("a", 2), ("e", 5)] {
            s.increment_by(k, n);
        }
        s.prune(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.ranked(), [("e", 5), ("a", 2), ("b", 2)]);
        assert_eq!(s.get("c"), None);
        assert_eq!(s.prunes(), 1);
    }

    #[test]
    fn prune_to_zero_empties() {
        let mut s = store();
        s.increment("x");
        s.prune(0);
        assert!(s.is_empty());
    }

    #[test]
    fn interval_triggers_prune() {
        let mut s = TallyStore::new(2, 4);
        for t in ["a", "a", "b", "c"] {
            s.increment(t);
        }
        // fourth increment crossed the interval
        assert_eq!(s.prunes(), 1);
        assert_eq!(s.ranked(), [("a", 2), ("b", 1)]);

        // a pruned key restarts from scratch
        s.increment("c");
        assert_eq!(s.get("c"), Some(1));
    }

    #[test]
    fn pruning_is_deterministic() {
        let tokens: Vec<String> = (0..500).map(|i| format!("k{}", i % 37)).collect();
        let run = || {
            let mut s = TallyStore::new(10, 50);
            for t in &tokens {
                s.increment(t);
            }
            s.ranked()
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn top_orders_and_limits() {
        let mut s = store();
        for (k, n) in [("x", 1), ("y", 9), ("z", 9)] {
            s.increment_by(k, n);
        }
        assert_eq!(s.top(2), [("y", 9), ("z", 9)]);
        assert!(s.top(0).is_empty());
        assert_eq!(s.top(10).len(), 3);
    }
}
