//! Prim's minimum spanning tree — task 6.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::types::{
    GraphError, GraphResult, ATTR_NOT_DIRECTED, ATTR_WEIGHTED,
};

use super::{numeric_price, require_undirected, require_weighted};

/// An edge crossing the cut between the grown tree and the rest.
struct Crossing {
    weight: f64,
    from: String,
    to: String,
    token: String,
}

impl Crossing {
    /// Order by weight, then endpoints, so ties resolve deterministically.
    fn beats(&self, other: &Crossing) -> bool {
        match self.weight.total_cmp(&other.weight) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => (&self.from, &self.to) < (&other.from, &other.to),
        }
    }
}

/// Minimum spanning tree of a connected, undirected, weighted graph.
///
/// Grows from the lexicographically smallest vertex; each round scans the
/// edges with exactly one endpoint inside the tree and takes the cheapest,
/// breaking weight ties on the endpoint names. No crossing edge before
/// every vertex is covered means the graph is disconnected.
pub fn minimum_spanning_tree(graph: &Graph) -> GraphResult<Graph> {
    require_undirected(graph)?;
    require_weighted(graph)?;

    let vertices = graph.vertices();
    let mut tree = Graph::from_attributes(ATTR_NOT_DIRECTED, ATTR_WEIGHTED)?;
    let Some(start) = vertices.iter().next() else {
        return Ok(tree);
    };
    tree.add_vertex(start)?;

    let mut seen: BTreeSet<String> = BTreeSet::new();
    seen.insert(start.clone());

    while seen.len() != vertices.len() {
        let mut best: Option<Crossing> = None;
        for from in vertices.difference(&seen) {
            for (to, price) in graph.adjacent(from)? {
                if !seen.contains(&to) {
                    continue;
                }
                let candidate = Crossing {
                    weight: numeric_price(&price)?,
                    from: from.clone(),
                    to,
                    token: price.unwrap_or_default(),
                };
                if best.as_ref().map_or(true, |held| candidate.beats(held)) {
                    best = Some(candidate);
                }
            }
        }

        let Some(edge) = best else {
            return Err(GraphError::Disconnected);
        };
        log::trace!(
            "mst: taking {} -> {} at {}",
            edge.from,
            edge.to,
            edge.weight
        );
        seen.insert(edge.from.clone());
        tree.add_edge(&edge.from, &edge.to, Some(edge.token.as_str()))?;
    }
    Ok(tree)
}
