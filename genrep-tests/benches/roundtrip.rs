use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use genrep::{PartiallyApplied, ProductRep, Representable, SumRep};
use genrep_tests::tree::Tree;
use pprof::criterion::{Output, PProfProfiler};

fn build_tree(depth: u32) -> Tree {
    if depth == 0 {
        Tree::Leaf(1)
    } else {
        Tree::Node(
            Box::new(build_tree(depth - 1)),
            Box::new(build_tree(depth - 1)),
        )
    }
}

fn naive_leaf_sum(tree: &Tree) -> i64 {
    match tree {
        Tree::Leaf(x) => *x,
        Tree::Node(left, right) => naive_leaf_sum(left) + naive_leaf_sum(right),
    }
}

// the same fold, routed through the structural encoding at every layer
fn rep_leaf_sum(tree: Tree) -> i64 {
    match tree.into_rep::<PartiallyApplied>().shape {
        SumRep::Left(leaf) => leaf.shape.shape.value,
        SumRep::Right(node) => {
            let ProductRep(left, right) = node.shape;
            rep_leaf_sum(*left.shape.value) + rep_leaf_sum(*right.shape.value)
        }
    }
}

fn bench_representation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold a binary tree");

    for depth in 14..15 {
        let tree = build_tree(depth);

        group.bench_with_input(
            BenchmarkId::new("direct match", depth),
            &tree,
            |b, tree| b.iter(|| naive_leaf_sum(tree)),
        );

        group.bench_with_input(
            BenchmarkId::new("through the representation", depth),
            &tree,
            |b, tree| b.iter(|| rep_leaf_sum(tree.clone())),
        );

        group.bench_with_input(
            BenchmarkId::new("encode and rebuild", depth),
            &tree,
            |b, tree| b.iter(|| Tree::from_rep(tree.clone().into_rep::<PartiallyApplied>())),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_representation
}
criterion_main!(benches);
