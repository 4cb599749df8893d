//! # dsep-graph
//!
//! Named causal graphs and the d-separation decision procedure.
//! Defines the `GraphQuery` contract consumed by dsep-metrics, plus a
//! petgraph-backed DAG implementation with cycle enforcement on insert.

pub mod dag;
pub mod dsep;
pub mod errors;
pub mod query;

// Re-export the most commonly used types at the crate root.
pub use dag::Dag;
pub use errors::{DsepResult, GraphError};
pub use query::{GraphQuery, NodeId};
