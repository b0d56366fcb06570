//! Search statistics collection.
//!
//! Counters are gathered per route search and summed per attempt and per
//! solve. They are informational only and never affect the search.

use std::ops::{Add, AddAssign};

/// Counters for one or more depth-first searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of search states entered, including the start state.
    pub nodes_expanded: u64,
    /// Moves or states discarded because the score exceeded the target.
    pub pruned_by_score: u64,
    /// Moves discarded because the destination was off-grid or already visited.
    pub rejected_moves: u64,
    /// Times the end cell was reached with a score other than the target.
    pub missed_arrivals: u64,
    /// Most cells on any path entered, the start cell included.
    pub max_depth: usize,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total moves or states cut off without being explored further.
    pub fn dead_ends(&self) -> u64 {
        self.pruned_by_score + self.rejected_moves + self.missed_arrivals
    }
}

impl Add for SearchStatistics {
    type Output = SearchStatistics;

    fn add(mut self, rhs: SearchStatistics) -> SearchStatistics {
        self += rhs;
        self
    }
}

impl AddAssign for SearchStatistics {
    fn add_assign(&mut self, rhs: SearchStatistics) {
        self.nodes_expanded += rhs.nodes_expanded;
        self.pruned_by_score += rhs.pruned_by_score;
        self.rejected_moves += rhs.rejected_moves;
        self.missed_arrivals += rhs.missed_arrivals;
        self.max_depth = self.max_depth.max(rhs.max_depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = SearchStatistics {
            nodes_expanded: 10,
            pruned_by_score: 2,
            rejected_moves: 3,
            missed_arrivals: 1,
            max_depth: 7,
        };
        let b = SearchStatistics {
            nodes_expanded: 5,
            pruned_by_score: 1,
            rejected_moves: 0,
            missed_arrivals: 4,
            max_depth: 12,
        };

        let sum = a + b;
        assert_eq!(sum.nodes_expanded, 15);
        assert_eq!(sum.pruned_by_score, 3);
        assert_eq!(sum.rejected_moves, 3);
        assert_eq!(sum.missed_arrivals, 5);
        assert_eq!(sum.dead_ends(), 11);
        assert_eq!(sum.max_depth, 12);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(SearchStatistics::new().dead_ends(), 0);
        assert_eq!(SearchStatistics::new().nodes_expanded, 0);
    }
}
