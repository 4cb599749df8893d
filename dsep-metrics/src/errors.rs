use dsep_graph::GraphError;

/// Metric engine errors.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error(
        "graphs have different node sets: missing in truth {missing_in_truth:?}, \
         missing in estimate {missing_in_est:?}"
    )]
    NodeSetMismatch {
        missing_in_truth: Vec<String>,
        missing_in_est: Vec<String>,
    },

    #[error("no conditioning order exists for {nodes} nodes, need at least 3")]
    TooFewNodes { nodes: usize },

    #[error("metric computation cancelled")]
    Cancelled,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type MetricResult<T> = Result<T, MetricError>;
