//! Benchmarks for the active-trail reachability search.
//!
//! Run with:
//! - `cargo bench --bench reachability`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use baysep::{is_d_separated, BayesNet};

/// Layered DAG: `layers` ranks of `width` nodes, each node feeding two
/// nodes of the next rank.
fn layered_net(layers: usize, width: usize) -> BayesNet {
    let mut net = BayesNet::new();
    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in [i, (i + 1) % width] {
                net.add_edge(&format!("l{layer}_{i}"), &format!("l{}_{j}", layer + 1));
            }
        }
    }
    net
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_d_separated");

    let net = layered_net(20, 16);
    let cut: Vec<String> = (0..16).map(|i| format!("l10_{i}")).collect();
    let cut: Vec<&str> = cut.iter().map(String::as_str).collect();

    group.bench_function("layered_20x16_unblocked", |b| {
        b.iter(|| {
            black_box(is_d_separated(
                black_box(&net),
                "l0_0",
                "l19_15",
                black_box(&[]),
            ))
        });
    });

    group.bench_function("layered_20x16_full_cut", |b| {
        b.iter(|| {
            black_box(is_d_separated(
                black_box(&net),
                "l0_0",
                "l19_15",
                black_box(&cut),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reachability);
criterion_main!(benches);
