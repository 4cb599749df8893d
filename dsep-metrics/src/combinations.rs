//! Exhaustive k-subset enumeration over an index range.
//!
//! Own generator instead of a combinatorics crate so enumeration order is
//! explicit: lexicographic over sorted index vectors, each subset exactly
//! once. The metric aggregation is order-independent, so any exhaustive
//! order would do.

/// Iterator over all k-element subsets of `0..n`, emitted as sorted index
/// vectors in lexicographic order.
pub struct Combinations {
    n: usize,
    k: usize,
    current: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            current: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();

        // Advance to the lexicographic successor: bump the rightmost index
        // that still has room, reset everything after it.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.current[i] < self.n - self.k + i {
                self.current[i] += 1;
                for j in i + 1..self.k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                break;
            }
        }
        Some(item)
    }
}

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
pub fn count(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result
            .saturating_mul((n - i) as u64)
            .checked_div((i + 1) as u64)
            .unwrap_or(u64::MAX);
    }
    result
}
