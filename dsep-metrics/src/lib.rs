//! # dsep-metrics
//!
//! Computes the s-metric (spurious-connection rate), c-metric
//! (missed-connection rate), and combined sc-metric between a ground-truth
//! causal graph and an estimated one over the same named node set.
//!
//! For every conditioning-set order k in 1..=N-2, every k-subset S of node
//! names, and every ordered pair of distinct remaining nodes, both graphs are
//! queried for d-connection and the disagreements are tallied, normalized per
//! order, and averaged. Exponential in N by construction; the contract is
//! correctness and reproducibility, not asymptotics.

pub mod combinations;
pub mod engine;
pub mod errors;
pub mod report;
pub mod tally;

// Re-export the most commonly used types at the crate root.
pub use engine::MetricEngine;
pub use errors::{MetricError, MetricResult};
pub use report::{MetricReport, OrderScores};
