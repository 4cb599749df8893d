//! MetricEngine: order-by-order d-separation disagreement between two graphs.
//!
//! The engine consumes graphs only through [`GraphQuery`]; it never sees an
//! edge. All computation happens during construction, after which the engine
//! is immutable and only exposes the finished scalars and the per-order
//! report.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use dsep_graph::{GraphQuery, NodeId};

use crate::combinations::{self, Combinations};
use crate::errors::{MetricError, MetricResult};
use crate::report::{MetricReport, OrderScores};
use crate::tally::OrderTally;

/// Disagreement metrics between a ground-truth graph and an estimated graph
/// over the same named node set.
///
/// Construction walks every conditioning-set order k in 1..=N-2, every
/// k-subset of node names, and every ordered pair of distinct remaining
/// nodes, querying d-connection in both graphs. Exponential in N.
///
/// Boundary policy: fewer than 3 nodes leaves no valid order, which is
/// reported as [`MetricError::TooFewNodes`] rather than a silent zero.
/// A per-order score with a zero denominator contributes 0.0 to its running
/// sum; the final division by N-1 is unconditional.
#[derive(Debug, Clone)]
pub struct MetricEngine {
    node_count: usize,
    s_metric: f64,
    c_metric: f64,
    sc_metric: f64,
    orders: Vec<OrderScores>,
}

impl MetricEngine {
    /// Compute the metrics for a graph pair.
    ///
    /// Fails eagerly with [`MetricError::NodeSetMismatch`] before any
    /// d-connection query when the two name sets differ.
    pub fn new<G, H>(truth: &G, est: &H) -> MetricResult<Self>
    where
        G: GraphQuery,
        H: GraphQuery,
    {
        Self::compute(truth, est, None)
    }

    /// Like [`MetricEngine::new`], checking `cancel` between conditioning
    /// subsets. Returns [`MetricError::Cancelled`] once the flag is set;
    /// no partial result is produced.
    pub fn with_cancel<G, H>(truth: &G, est: &H, cancel: &AtomicBool) -> MetricResult<Self>
    where
        G: GraphQuery,
        H: GraphQuery,
    {
        Self::compute(truth, est, Some(cancel))
    }

    fn compute<G, H>(truth: &G, est: &H, cancel: Option<&AtomicBool>) -> MetricResult<Self>
    where
        G: GraphQuery,
        H: GraphQuery,
    {
        // Sorted shared name list: the enumeration base for every order.
        let mut names: Vec<String> = truth.node_names().iter().map(|s| s.to_string()).collect();
        names.sort_unstable();
        check_name_sets(&names, est)?;

        let n = names.len();
        if n < 3 {
            return Err(MetricError::TooFewNodes { nodes: n });
        }

        // Resolve every name once per graph. Handles are never shared across
        // the two graphs; each side gets its own table in shared name order.
        let truth_handles = resolve_all(truth, &names)?;
        let est_handles = resolve_all(est, &names)?;

        let mut s_sum = 0.0;
        let mut c_sum = 0.0;
        let mut sc_sum = 0.0;
        let mut orders = Vec::with_capacity(n - 2);

        for k in 1..=n - 2 {
            let tally = Combinations::new(n, k)
                .par_bridge()
                .map(|subset| {
                    if let Some(flag) = cancel {
                        if flag.load(Ordering::Relaxed) {
                            return OrderTally::default();
                        }
                    }
                    tally_subset(truth, est, &truth_handles, &est_handles, &subset)
                })
                .reduce(OrderTally::default, OrderTally::merge);

            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(MetricError::Cancelled);
                }
            }

            debug!(
                order = k,
                subsets = combinations::count(n, k),
                connected = tally.connected,
                separated = tally.separated,
                disagreements = tally.disagreements,
                "order tallied"
            );

            s_sum += tally.s_score();
            c_sum += tally.c_score();
            sc_sum += tally.sc_score();
            orders.push(OrderScores {
                order: k,
                s_score: tally.s_score(),
                c_score: tally.c_score(),
                sc_score: tally.sc_score(),
                n_connected: tally.connected,
                n_separated: tally.separated,
                n_disagreements: tally.disagreements,
            });
        }

        let norm = (n - 1) as f64;
        let engine = Self {
            node_count: n,
            s_metric: s_sum / norm,
            c_metric: c_sum / norm,
            sc_metric: sc_sum / norm,
            orders,
        };

        info!(
            nodes = n,
            s_metric = engine.s_metric,
            c_metric = engine.c_metric,
            sc_metric = engine.sc_metric,
            "metric computation complete"
        );

        Ok(engine)
    }

    /// Spurious-connection rate: how often the estimate is d-connected where
    /// truth is d-separated.
    pub fn s_metric(&self) -> f64 {
        self.s_metric
    }

    /// Missed-connection rate: how often the estimate is d-separated where
    /// truth is d-connected.
    pub fn c_metric(&self) -> f64 {
        self.c_metric
    }

    /// Combined disagreement rate, weighing both violation kinds equally.
    /// Invariant under swapping the two graphs.
    pub fn sc_metric(&self) -> f64 {
        self.sc_metric
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Full per-order breakdown.
    pub fn report(&self) -> MetricReport {
        MetricReport {
            node_count: self.node_count,
            s_metric: self.s_metric,
            c_metric: self.c_metric,
            sc_metric: self.sc_metric,
            orders: self.orders.clone(),
        }
    }
}

/// Tally every ordered pair (X, Y) of distinct nodes outside `subset`,
/// querying both graphs with their own handles for the same names.
fn tally_subset<G, H>(
    truth: &G,
    est: &H,
    truth_handles: &[NodeId],
    est_handles: &[NodeId],
    subset: &[usize],
) -> OrderTally
where
    G: GraphQuery,
    H: GraphQuery,
{
    let n = truth_handles.len();
    let truth_set: Vec<NodeId> = subset.iter().map(|&i| truth_handles[i]).collect();
    let est_set: Vec<NodeId> = subset.iter().map(|&i| est_handles[i]).collect();

    let mut tally = OrderTally::default();
    for x in 0..n {
        // `subset` is sorted, so membership is a binary search.
        if subset.binary_search(&x).is_ok() {
            continue;
        }
        for y in 0..n {
            if y == x || subset.binary_search(&y).is_ok() {
                continue;
            }
            let truth_connected =
                truth.is_d_connected(truth_handles[x], truth_handles[y], &truth_set);
            let est_connected = est.is_d_connected(est_handles[x], est_handles[y], &est_set);
            tally.record(truth_connected, est_connected);
        }
    }
    tally
}

fn check_name_sets<H: GraphQuery>(truth_names: &[String], est: &H) -> MetricResult<()> {
    let truth_set: BTreeSet<&str> = truth_names.iter().map(String::as_str).collect();
    let est_names = est.node_names();
    let est_set: BTreeSet<&str> = est_names.iter().copied().collect();
    if truth_set == est_set {
        return Ok(());
    }
    Err(MetricError::NodeSetMismatch {
        missing_in_truth: est_set
            .difference(&truth_set)
            .map(|s| s.to_string())
            .collect(),
        missing_in_est: truth_set
            .difference(&est_set)
            .map(|s| s.to_string())
            .collect(),
    })
}

fn resolve_all<G: GraphQuery>(graph: &G, names: &[String]) -> MetricResult<Vec<NodeId>> {
    names
        .iter()
        .map(|name| graph.resolve(name).map_err(MetricError::from))
        .collect()
}
