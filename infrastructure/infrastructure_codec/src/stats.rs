//! Tag Statistics Module
//!
//! Provides an optional per-tag occurrence counter for decode
//! diagnostics. The counter is an explicitly-owned object the caller
//! passes into the decoder; there is no process-wide state, so the
//! borrow checker serializes concurrent use.

/// Per-tag occurrence counts over the full tag byte range
#[derive(Clone)]
pub struct TagStats {
    counts: [u64; 256],
}

impl TagStats {
    /// Create a counter with all tags at zero
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Record one occurrence of a tag byte
    pub fn record(&mut self, tag: u8) {
        self.counts[usize::from(tag)] += 1;
    }

    /// Occurrence count for one tag byte
    pub fn count(&self, tag: u8) -> u64 {
        self.counts[usize::from(tag)]
    }

    /// Snapshot of all 256 counters, indexed by tag byte
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Iterate the tags seen at least once, with their counts
    pub fn occurrences(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(tag, &count)| (tag as u8, count))
    }

    /// Reset all counters to zero
    pub fn clear(&mut self) {
        self.counts = [0; 256];
    }
}

impl Default for TagStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TagStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.occurrences()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut stats = TagStats::new();
        stats.record(97);
        stats.record(97);
        stats.record(106);
        assert_eq!(stats.count(97), 2);
        assert_eq!(stats.count(106), 1);
        assert_eq!(stats.count(0), 0);
    }

    #[test]
    fn test_occurrences_skips_zero_counts() {
        let mut stats = TagStats::new();
        stats.record(116);
        stats.record(255);
        let seen: Vec<(u8, u64)> = stats.occurrences().collect();
        assert_eq!(seen, vec![(116, 1), (255, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut stats = TagStats::new();
        stats.record(70);
        stats.clear();
        assert_eq!(stats.count(70), 0);
        assert_eq!(stats.occurrences().count(), 0);
    }

    #[test]
    fn test_counts_snapshot_covers_full_range() {
        let stats = TagStats::default();
        assert_eq!(stats.counts().len(), 256);
    }
}
