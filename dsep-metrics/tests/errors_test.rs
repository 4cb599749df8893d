use dsep_graph::GraphError;
use dsep_metrics::MetricError;

#[test]
fn node_set_mismatch_carries_both_sides() {
    let err = MetricError::NodeSetMismatch {
        missing_in_truth: vec!["d".into()],
        missing_in_est: vec!["c".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("\"d\""));
    assert!(msg.contains("\"c\""));
}

#[test]
fn too_few_nodes_carries_count() {
    let err = MetricError::TooFewNodes { nodes: 2 };
    assert!(err.to_string().contains('2'));
}

#[test]
fn graph_error_converts_transparently() {
    let err: MetricError = GraphError::UnknownNode { name: "x7".into() }.into();
    assert!(matches!(err, MetricError::Graph(_)));
    assert!(err.to_string().contains("x7"));
}

#[test]
fn cancelled_mentions_cancellation() {
    assert!(MetricError::Cancelled.to_string().contains("cancelled"));
}
