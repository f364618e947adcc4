//! Strategy builders for MST property-based tests.
//!
//! Graphs are generated from a seeded [`SmallRng`] so that proptest only has
//! to shrink a `(shape, seed)` pair. Edge orientation is randomised because
//! the builder must treat `(u, v)` and `(v, u)` identically.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphShape, MstFixture};

/// Minimum vertex count for non-tiny graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for sparse and tie-heavy graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;
/// Maximum vertex count for brute-force-checkable graphs.
pub(super) const TINY_MAX_VERTICES: usize = 6;
/// Maximum edge count for brute-force-checkable graphs (`2^12` subsets).
pub(super) const TINY_MAX_EDGES: usize = 12;

/// Generates fixtures covering every [`GraphShape`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates fixtures small enough for brute-force enumeration.
pub(super) fn tiny_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(GraphShape::Tiny, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match shape {
        GraphShape::Tiny => generate_tiny(rng),
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            let edges = random_pairs(0, vertex_count, probability, rng, |r| r.gen_range(0..1_000));
            (vertex_count, edges)
        }
        GraphShape::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.3..=0.7);
            let edges = random_pairs(0, vertex_count, probability, rng, |r| {
                pool.choose(r).copied().unwrap_or_default()
            });
            (vertex_count, edges)
        }
        GraphShape::Disconnected => generate_disconnected(rng),
    };

    MstFixture {
        vertex_count,
        edges,
        shape,
    }
}

fn generate_tiny(rng: &mut SmallRng) -> (usize, Vec<Edge<i64>>) {
    let vertex_count = rng.gen_range(0..=TINY_MAX_VERTICES);
    if vertex_count == 0 {
        return (0, Vec::new());
    }
    let edge_count = rng.gen_range(0..=TINY_MAX_EDGES);
    let edges = (0..edge_count)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..vertex_count),
                rng.gen_range(0..vertex_count),
                rng.gen_range(1..=9),
            )
        })
        .collect();
    (vertex_count, edges)
}

/// Builds a random spanning tree over a shuffled vertex order, then sprinkles
/// extra edges on top. Weights may be negative.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge<i64>>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge<i64>> = order
        .windows(2)
        .map(|pair| oriented(pair[0], pair[1], rng.gen_range(-50..=50), rng))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            edges.push(Edge::new(source, target, rng.gen_range(-50..=50)));
        }
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge<i64>>) {
    let block_sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &block_sizes {
        let probability = rng.gen_range(0.3..=0.9);
        edges.extend(random_pairs(offset, size, probability, rng, |r| {
            r.gen_range(1..=100)
        }));
        offset += size;
    }
    edges.shuffle(rng);
    (offset, edges)
}

/// Includes each pair of `offset..offset + size` with the given probability.
fn random_pairs(
    offset: usize,
    size: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<Edge<i64>> {
    let mut edges = Vec::new();
    for i in offset..offset + size {
        for j in (i + 1)..offset + size {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(i, j, w, rng));
            }
        }
    }
    edges
}

fn oriented(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> Edge<i64> {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}
