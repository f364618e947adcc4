//! Reference implementations used as oracles by the property suites.
//!
//! Neither oracle shares code with the builder: the brute-force search
//! enumerates edge subsets directly, and the tie-break variant carries its own
//! parent and rank arrays.

use crate::Edge;
use crate::test_utils::count_components;

/// Returns the minimum total cost over every spanning forest of the graph,
/// found by enumerating all edge subsets of size `V - C`, where `C` is the
/// number of connected components of the input.
///
/// Only intended for graphs with a dozen edges or fewer.
pub(super) fn brute_force_minimum_cost(vertex_count: usize, edges: &[Edge<i64>]) -> Option<i64> {
    let required = vertex_count - count_components(vertex_count, edges);
    let mut best: Option<i64> = None;

    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != required {
            continue;
        }
        let chosen: Vec<Edge<i64>> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if !is_acyclic(vertex_count, &chosen) {
            continue;
        }
        let cost: i64 = chosen.iter().map(Edge::weight).sum();
        best = Some(best.map_or(cost, |current| current.min(cost)));
    }

    best
}

/// Returns `true` when `edges` contain no cycle (self-loops count as cycles).
pub(super) fn is_acyclic(vertex_count: usize, edges: &[Edge<i64>]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let a = root_of(&mut parent, edge.source());
        let b = root_of(&mut parent, edge.target());
        if a == b {
            return false;
        }
        parent[b] = a;
    }
    true
}

/// Runs the greedy loop over already sorted edges with a union that, on equal
/// ranks, attaches the first root beneath the second.
pub(super) fn accepted_with_reversed_tie_break(
    vertex_count: usize,
    sorted: &[Edge<i64>],
) -> Vec<Edge<i64>> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u32; vertex_count];
    let mut accepted = Vec::new();

    for edge in sorted {
        if accepted.len() == vertex_count.saturating_sub(1) {
            break;
        }
        let x = root_of(&mut parent, edge.source());
        let y = root_of(&mut parent, edge.target());
        if x == y {
            continue;
        }
        match rank[x].cmp(&rank[y]) {
            std::cmp::Ordering::Greater => parent[y] = x,
            std::cmp::Ordering::Less => parent[x] = y,
            std::cmp::Ordering::Equal => {
                parent[x] = y;
                rank[y] += 1;
            }
        }
        accepted.push(*edge);
    }

    accepted
}

/// Path-halving find.
fn root_of(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}
