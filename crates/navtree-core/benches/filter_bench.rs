//! Benchmarks for catalog filtering and selection-path resolution.
//!
//! Run with: cargo bench -p navtree-core --bench filter_bench
//!
//! The synthetic catalog mimics a chart gallery: a handful of top-level
//! categories, each with chart families, each with a few dozen examples.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navtree_core::filter::filter_tree;
use navtree_core::matcher::{MatchMode, Matcher, SearchConfig};
use navtree_core::node::TreeNode;
use navtree_core::path::resolve_ancestors;
use std::hint::black_box;

const KINDS: [&str; 6] = ["Line", "Bar", "Pie", "Scatter", "Area", "Radar"];

fn catalog(categories: usize, families: usize, examples: usize) -> Vec<TreeNode> {
    (0..categories)
        .map(|c| {
            TreeNode::branch(format!("cat-{c}"))
                .with_title(format!("Category {c}"))
                .with_children(
                    (0..families)
                        .map(|f| {
                            let kind = KINDS[f % KINDS.len()];
                            TreeNode::branch(format!("cat-{c}-fam-{f}"))
                                .with_title(format!("{kind} Charts"))
                                .with_children(
                                    (0..examples)
                                        .map(|e| {
                                            TreeNode::leaf(format!("cat-{c}-fam-{f}-ex-{e}"))
                                                .with_title(format!("{kind} example {e}"))
                                        })
                                        .collect(),
                                )
                        })
                        .collect(),
                )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("navtree/filter");

    for (name, size) in [("small", (3, 6, 10)), ("medium", (8, 12, 30))] {
        let tree = catalog(size.0, size.1, size.2);
        for (query, mode) in [
            ("example 1", MatchMode::Literal),
            ("scatter", MatchMode::IgnoreAsciiCase),
            ("zzz", MatchMode::Literal),
        ] {
            let matcher = Matcher::new(query, &SearchConfig::default().with_mode(mode));
            group.bench_with_input(
                BenchmarkId::new(name, format!("{query}/{mode:?}")),
                &tree,
                |b, tree| b.iter(|| black_box(filter_tree(black_box(tree), &matcher))),
            );
        }
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("navtree/resolve");
    let tree = catalog(8, 12, 30);

    for target in ["cat-0-fam-0-ex-0", "cat-7-fam-11-ex-29", "missing"] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &tree, |b, tree| {
            b.iter(|| black_box(resolve_ancestors(black_box(tree), target)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_resolve);
criterion_main!(benches);
