use serde::{Deserialize, Serialize};

/// Scores and raw counts for one conditioning-set order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderScores {
    /// Conditioning-set size k.
    pub order: usize,
    /// Spurious-connection rate at this order.
    pub s_score: f64,
    /// Missed-connection rate at this order.
    pub c_score: f64,
    /// Combined disagreement rate at this order.
    pub sc_score: f64,
    /// Triples d-connected in truth.
    pub n_connected: u64,
    /// Triples d-separated in truth.
    pub n_separated: u64,
    /// Triples the two graphs disagree on.
    pub n_disagreements: u64,
}

/// Full breakdown of one metric computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReport {
    /// Number of nodes shared by the two graphs.
    pub node_count: usize,
    pub s_metric: f64,
    pub c_metric: f64,
    pub sc_metric: f64,
    /// Per-order breakdown, one entry per k in 1..=N-2.
    pub orders: Vec<OrderScores>,
}
