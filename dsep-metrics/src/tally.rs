//! Per-order integer tallies, mergeable for parallel reduction.

/// Triple counts for one conditioning-set order.
///
/// Integer-only so parallel merges are exact: summing tallies is associative
/// and commutative, and the derived scores come out bit-identical no matter
/// how the reduction tree was shaped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderTally {
    /// Triples where truth and estimate disagree on d-connection.
    pub disagreements: u64,
    /// Triples d-connected in truth.
    pub connected: u64,
    /// Triples d-separated in truth.
    pub separated: u64,
    /// d-connected in truth but d-separated in the estimate.
    pub missed: u64,
    /// d-separated in truth but d-connected in the estimate.
    pub spurious: u64,
}

impl OrderTally {
    /// Classify one (X, Y, S) observation.
    pub fn record(&mut self, truth_connected: bool, est_connected: bool) {
        if truth_connected != est_connected {
            self.disagreements += 1;
        }
        if truth_connected {
            self.connected += 1;
            if !est_connected {
                self.missed += 1;
            }
        } else {
            self.separated += 1;
            if est_connected {
                self.spurious += 1;
            }
        }
    }

    /// Sum two tallies.
    pub fn merge(self, other: OrderTally) -> OrderTally {
        OrderTally {
            disagreements: self.disagreements + other.disagreements,
            connected: self.connected + other.connected,
            separated: self.separated + other.separated,
            missed: self.missed + other.missed,
            spurious: self.spurious + other.spurious,
        }
    }

    /// Total triples examined at this order.
    pub fn total(&self) -> u64 {
        self.connected + self.separated
    }

    /// Spurious-connection rate at this order: spurious / separated.
    pub fn s_score(&self) -> f64 {
        ratio(self.spurious, self.separated)
    }

    /// Missed-connection rate at this order: missed / connected.
    pub fn c_score(&self) -> f64 {
        ratio(self.missed, self.connected)
    }

    /// Combined disagreement rate at this order.
    pub fn sc_score(&self) -> f64 {
        ratio(self.disagreements, self.total())
    }
}

/// Zero-denominator policy: an undefined ratio contributes 0.0 instead of
/// NaN, so a degenerate order drops out of the running sum.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
