//! Reciprocal-edge filter — task 3.

use crate::graph::Graph;
use crate::types::GraphResult;

use super::require_directed;

/// Build a new graph keeping only the edges `(x,y)` whose reverse `(y,x)`
/// also exists in the source. Directed graphs only.
///
/// The result starts as a deep copy, so isolated vertices survive the
/// filter. Reads go against the source while the copy is mutated; the
/// copy-returning read API makes that safe.
pub fn reciprocal_filter(graph: &Graph) -> GraphResult<Graph> {
    require_directed(graph)?;

    let mut filtered = graph.clone();
    for from in graph.vertices() {
        for to in graph.adjacent(&from)?.keys() {
            if !graph.exists_edge(to, &from) {
                filtered.remove_edge(&from, to)?;
            }
        }
    }
    Ok(filtered)
}
