//! Result-set equivalence across union tie-break policies.
//!
//! Which root survives an equal-rank union changes root identities but never
//! the partition, so every edge must be accepted or rejected identically.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, compute_mst, sorted_by_weight};

use super::oracle::accepted_with_reversed_tie_break;
use super::types::MstFixture;

/// Compares the builder's accepted edges with those of the reversed
/// tie-break variant run over the same sorted order.
pub(super) fn run_tie_break_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = compute_mst(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!("compute_mst failed: {e} ({})", fixture.context()))
    })?;

    let sorted = sorted_by_weight(fixture.edges.clone());
    let variant = accepted_with_reversed_tie_break(fixture.vertex_count, &sorted);

    let actual = edge_set(forest.edges());
    let expected = edge_set(&variant);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "accepted edge sets differ: builder={actual:?}, variant={expected:?} ({})",
            fixture.context()
        )));
    }
    Ok(())
}

/// Orientation-free, order-free view of an edge list.
fn edge_set(edges: &[Edge<i64>]) -> Vec<(usize, usize, i64)> {
    let mut set: Vec<(usize, usize, i64)> = edges
        .iter()
        .map(|edge| {
            let (low, high) = edge.canonical_endpoints();
            (low, high, edge.weight())
        })
        .collect();
    set.sort_unstable();
    set
}
