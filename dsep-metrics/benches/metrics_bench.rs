use criterion::{criterion_group, criterion_main, Criterion};

use dsep_graph::Dag;
use dsep_metrics::MetricEngine;

/// Chain of n nodes with a shortcut edge every third node.
fn build_layered_dag(n: usize, with_shortcuts: bool) -> Dag {
    let mut dag = Dag::new();
    for i in 0..n {
        dag.add_node(&format!("n{i}")).unwrap();
    }
    for i in 0..n - 1 {
        dag.add_edge(&format!("n{i}"), &format!("n{}", i + 1)).unwrap();
    }
    if with_shortcuts {
        for i in (0..n - 3).step_by(3) {
            dag.add_edge(&format!("n{i}"), &format!("n{}", i + 3)).unwrap();
        }
    }
    dag
}

fn bench_metric_engine_8_nodes(c: &mut Criterion) {
    let truth = build_layered_dag(8, true);
    let est = build_layered_dag(8, false);

    c.bench_function("metric_engine_8_nodes", |b| {
        b.iter(|| MetricEngine::new(&truth, &est).unwrap());
    });
}

fn bench_metric_engine_10_nodes(c: &mut Criterion) {
    let truth = build_layered_dag(10, true);
    let est = build_layered_dag(10, false);

    c.bench_function("metric_engine_10_nodes", |b| {
        b.iter(|| MetricEngine::new(&truth, &est).unwrap());
    });
}

criterion_group!(benches, bench_metric_engine_8_nodes, bench_metric_engine_10_nodes);
criterion_main!(benches);
