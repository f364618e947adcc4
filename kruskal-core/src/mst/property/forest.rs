//! Disjoint-set invariants observed after the greedy loop.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MstBuilder;
use crate::test_utils::count_components;

use super::types::MstFixture;

/// Runs the builder to completion, then checks that:
///
/// - the number of distinct roots equals the component count of the accepted
///   subgraph,
/// - every root is self-parented,
/// - `find_root` returns the same root twice in a row.
pub(super) fn run_forest_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let mut builder = MstBuilder::new(fixture.vertex_count, fixture.edges.clone()).map_err(|e| {
        TestCaseError::fail(format!("builder rejected input: {e} ({})", fixture.context()))
    })?;
    builder.run();

    let accepted_components = count_components(fixture.vertex_count, builder.accepted());
    let mut forest = builder.forest().clone();

    let mut roots = BTreeSet::new();
    for vertex in 0..fixture.vertex_count {
        let first = forest.find_root(vertex);
        let second = forest.find_root(vertex);
        if first != second {
            return Err(TestCaseError::fail(format!(
                "find_root({vertex}) returned {first} then {second} ({})",
                fixture.context()
            )));
        }
        if forest.subset(first).map(|subset| subset.parent()) != Some(first) {
            return Err(TestCaseError::fail(format!(
                "root {first} of vertex {vertex} is not self-parented ({})",
                fixture.context()
            )));
        }
        roots.insert(first);
    }

    if roots.len() != accepted_components || forest.component_count() != accepted_components {
        return Err(TestCaseError::fail(format!(
            "{} distinct roots, forest reports {}, accepted subgraph has {accepted_components} ({})",
            roots.len(),
            forest.component_count(),
            fixture.context()
        )));
    }
    Ok(())
}
