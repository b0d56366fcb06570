//! Weight assignment enumeration.

use knight_moves_core::WeightAssignment;

/// Iterates over every admissible weight assignment under a ceiling.
///
/// Candidates come from three nested loops, `a` outermost and `c` innermost,
/// each running over `1..ceiling`. Only assignments whose weights are
/// pairwise distinct and sum to at most `ceiling` are yielded, so the output
/// is in ascending lexicographic order of `(a, b, c)`.
///
/// # Example
///
/// ```
/// use knight_moves_core::WeightAssignment;
/// use knight_moves_solver::WeightEnumerator;
///
/// let first: Vec<WeightAssignment> = WeightEnumerator::new(7).take(3).collect();
/// assert_eq!(
///     first,
///     vec![
///         WeightAssignment::new(1, 2, 3),
///         WeightAssignment::new(1, 2, 4),
///         WeightAssignment::new(1, 3, 2),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WeightEnumerator {
    ceiling: u32,
    a: u32,
    b: u32,
    c: u32,
}

impl WeightEnumerator {
    /// Creates an enumerator for weights summing to at most `ceiling`.
    pub fn new(ceiling: u32) -> Self {
        Self {
            ceiling,
            a: 1,
            b: 1,
            c: 0,
        }
    }

    /// Returns the sum ceiling.
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }
}

impl Iterator for WeightEnumerator {
    type Item = WeightAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        while self.a < self.ceiling {
            while self.b < self.ceiling {
                self.c += 1;
                while self.c < self.ceiling {
                    let candidate = WeightAssignment::new(self.a, self.b, self.c);
                    if candidate.is_admissible(self.ceiling) {
                        return Some(candidate);
                    }
                    self.c += 1;
                }
                self.b += 1;
                self.c = 0;
            }
            self.a += 1;
            self.b = 1;
            self.c = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_candidates_admissible() {
        let ceiling = 50;
        let mut count = 0;
        for weights in WeightEnumerator::new(ceiling) {
            assert!(weights.is_admissible(ceiling), "{weights}");
            assert!(weights.a < ceiling && weights.b < ceiling && weights.c < ceiling);
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn test_matches_nested_loops() {
        let ceiling = 12;
        let mut expected = Vec::new();
        for a in 1..ceiling {
            for b in 1..ceiling {
                for c in 1..ceiling {
                    if a != b && a != c && b != c && a + b + c <= ceiling {
                        expected.push(WeightAssignment::new(a, b, c));
                    }
                }
            }
        }

        let actual: Vec<WeightAssignment> = WeightEnumerator::new(ceiling).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_strictly_ascending() {
        let all: Vec<WeightAssignment> = WeightEnumerator::new(20).collect();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_smallest_ceiling() {
        // 1 + 2 + 3 is the smallest admissible sum.
        assert_eq!(WeightEnumerator::new(5).count(), 0);
        assert_eq!(WeightEnumerator::new(6).count(), 6);
        assert_eq!(WeightEnumerator::new(0).next(), None);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut enumerator = WeightEnumerator::new(6);
        assert_eq!(enumerator.by_ref().count(), 6);
        assert_eq!(enumerator.next(), None);
    }
}
