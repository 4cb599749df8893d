//! Property tests for the d-separation predicate over random DAGs.

use proptest::prelude::*;

use dsep_graph::{Dag, GraphQuery, NodeId};

/// Build a random DAG with `n` nodes; cycle-closing edges are dropped.
fn build_random_dag(n: usize, edges: &[(usize, usize)]) -> Dag {
    let mut dag = Dag::new();
    for i in 0..n {
        dag.add_node(&format!("n{i}")).unwrap();
    }
    for &(src, tgt) in edges {
        if src < n && tgt < n && src != tgt {
            // Insertion rejects cycles; that is the point, not a failure.
            let _ = dag.add_edge(&format!("n{src}"), &format!("n{tgt}"));
        }
    }
    dag
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn resolve_set(dag: &Dag, indices: &[usize], exclude: (usize, usize)) -> Vec<NodeId> {
    indices
        .iter()
        .filter(|&&i| i != exclude.0 && i != exclude.1)
        .map(|&i| dag.resolve(&format!("n{i}")).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn d_connection_is_symmetric(
        edges in edge_strategy(8),
        z_indices in prop::collection::vec(0_usize..8, 0..4),
        x in 0_usize..8,
        y in 0_usize..8,
    ) {
        prop_assume!(x != y);
        let dag = build_random_dag(8, &edges);
        let set = resolve_set(&dag, &z_indices, (x, y));
        let xh = dag.resolve(&format!("n{x}")).unwrap();
        let yh = dag.resolve(&format!("n{y}")).unwrap();
        prop_assert_eq!(
            dag.is_d_connected(xh, yh, &set),
            dag.is_d_connected(yh, xh, &set),
            "active trails have no direction"
        );
    }
}

proptest! {
    #[test]
    fn edgeless_graph_separates_everything(
        z_indices in prop::collection::vec(0_usize..8, 0..4),
        x in 0_usize..8,
        y in 0_usize..8,
    ) {
        prop_assume!(x != y);
        let dag = build_random_dag(8, &[]);
        let set = resolve_set(&dag, &z_indices, (x, y));
        let xh = dag.resolve(&format!("n{x}")).unwrap();
        let yh = dag.resolve(&format!("n{y}")).unwrap();
        prop_assert!(!dag.is_d_connected(xh, yh, &set));
    }
}

proptest! {
    #[test]
    fn query_is_deterministic(
        edges in edge_strategy(8),
        z_indices in prop::collection::vec(0_usize..8, 0..4),
        x in 0_usize..8,
        y in 0_usize..8,
    ) {
        prop_assume!(x != y);
        let dag = build_random_dag(8, &edges);
        let set = resolve_set(&dag, &z_indices, (x, y));
        let xh = dag.resolve(&format!("n{x}")).unwrap();
        let yh = dag.resolve(&format!("n{y}")).unwrap();
        let first = dag.is_d_connected(xh, yh, &set);
        for _ in 0..3 {
            prop_assert_eq!(first, dag.is_d_connected(xh, yh, &set));
        }
    }
}
