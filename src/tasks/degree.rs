//! Degree queries — tasks 1 and 2.

use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::{require_directed, require_undirected};

/// Vertices whose out-degree exceeds that of `v`. Directed graphs only.
pub fn out_degree_dominators(graph: &Graph, v: &str) -> GraphResult<BTreeSet<String>> {
    require_directed(graph)?;

    let out_degree = graph.adjacent(v)?.len();
    let mut dominators = BTreeSet::new();
    for vertex in graph.vertices() {
        if graph.adjacent(&vertex)?.len() > out_degree {
            dominators.insert(vertex);
        }
    }
    Ok(dominators)
}

/// Vertices not adjacent to `v`, excluding `v` itself. Undirected graphs
/// only.
pub fn non_neighbors(graph: &Graph, v: &str) -> GraphResult<BTreeSet<String>> {
    require_undirected(graph)?;

    let row = graph.adjacent(v)?;
    let mut rest = graph.vertices();
    rest.remove(v);
    for neighbor in row.keys() {
        rest.remove(neighbor);
    }
    Ok(rest)
}
