use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;

use separator::Separatable;

/// Counters of one search, everything is indexed by depth (number of moves from the start).
///
/// Iterative deepening keeps only its last pass's counters,
/// the peaks and the number of passes are carried over.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created: Vec<u32>,
    expanded: Vec<u32>,
    duplicates: Vec<u32>,
    peak_frontier: usize,
    peak_memory: usize,
    passes: u32,
    duration: Duration,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created: vec![],
            expanded: vec![],
            duplicates: vec![],
            peak_frontier: 0,
            peak_memory: 0,
            passes: 1,
            duration: Duration::default(),
        }
    }

    pub fn total_created(&self) -> u32 {
        self.created.iter().sum()
    }

    /// States taken from the frontier and goal-tested.
    pub fn total_expanded(&self) -> u32 {
        self.expanded.iter().sum()
    }

    pub fn total_duplicates(&self) -> u32 {
        self.duplicates.iter().sum()
    }

    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    /// Bytes taken by the frontier and the search maps at their largest.
    pub fn peak_memory(&self) -> usize {
        self.peak_memory
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this is the first state created at `depth`.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: usize) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    fn add(counts: &mut Vec<u32>, depth: usize) -> bool {
        let mut ret = false;

        // while because depths can be skipped - DFS creates states deeper than it expands
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    pub(crate) fn observe(&mut self, frontier_len: usize, memory: usize) {
        self.peak_frontier = cmp::max(self.peak_frontier, frontier_len);
        self.peak_memory = cmp::max(self.peak_memory, memory);
    }

    /// Makes this the stats of the pass after `previous`.
    pub(crate) fn follow(&mut self, previous: &Stats) {
        self.passes = previous.passes + 1;
        self.peak_frontier = cmp::max(self.peak_frontier, previous.peak_frontier);
        self.peak_memory = cmp::max(self.peak_memory, previous.peak_memory);
    }

    pub(crate) fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn millis(&self) -> f64 {
        self.duration.as_secs() as f64 * 1000.0 + f64::from(self.duration.subsec_nanos()) / 1e6
    }

    pub fn kilobytes(&self) -> f64 {
        self.peak_memory as f64 / 1024.0
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "States created: {}", self.total_created().separated_string())?;
        writeln!(f, "Reached duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Peak frontier: {}", (self.peak_frontier as u64).separated_string())?;
        writeln!(f, "Peak memory (estimate): {:.2} KB", self.kilobytes())?;
        if self.passes > 1 {
            writeln!(f, "Passes: {}", self.passes)?;
        }
        writeln!(f, "Time: {:.3} ms", self.millis())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "peak frontier: {}", (self.peak_frontier as u64).separated_string())?;
        writeln!(f, "peak memory: {} B", (self.peak_memory as u64).separated_string())?;
        writeln!(f, "passes: {}", self.passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_expanded(0));
        assert!(stats.add_created(2));
        assert!(!stats.add_created(1));
        assert!(!stats.add_created(2));
        assert!(stats.add_duplicate(1));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_duplicates(), 1);
        assert_eq!(
            format!("{:?}", stats).lines().next().unwrap(),
            "created by depth: [1, 1, 2]"
        );
    }

    #[test]
    fn peaks_carry_over() {
        let mut first = Stats::new();
        first.observe(10, 2048);
        first.observe(3, 100);
        assert_eq!(first.peak_frontier(), 10);
        assert_eq!(first.peak_memory(), 2048);

        let mut second = Stats::new();
        second.observe(4, 4096);
        second.follow(&first);
        assert_eq!(second.passes(), 2);
        assert_eq!(second.peak_frontier(), 10);
        assert_eq!(second.peak_memory(), 4096);

        second.set_duration(Duration::from_millis(1500));
        let out = second.to_string();
        assert!(out.contains("Peak memory (estimate): 4.00 KB\n"));
        assert!(out.contains("Passes: 2\n"));
        assert!(out.ends_with("Time: 1500.000 ms\n"));
    }
}
