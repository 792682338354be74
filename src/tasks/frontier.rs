//! Equidistant frontier — task 5.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Vertices reachable from both sources at the same hop distance. Works on
/// any graph shape; the two sources must differ.
pub fn equidistant_frontier(graph: &Graph, u: &str, v: &str) -> GraphResult<BTreeSet<String>> {
    if u == v {
        return Err(GraphError::SameVertex(u.to_string()));
    }

    let from_u = hop_distances(graph, u)?;
    let from_v = hop_distances(graph, v)?;

    let mut frontier = BTreeSet::new();
    for (vertex, distance) in &from_u {
        if from_v.get(vertex) == Some(distance) {
            frontier.insert(vertex.clone());
        }
    }
    Ok(frontier)
}

/// Breadth-first hop distances from a single source.
fn hop_distances(graph: &Graph, source: &str) -> GraphResult<HashMap<String, usize>> {
    let mut distances: HashMap<String, usize> = HashMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    distances.insert(source.to_string(), 0);
    queue.push_back(source.to_string());

    while let Some(current) = queue.pop_front() {
        let hop = distances[&current];
        for next in graph.adjacent(&current)?.keys() {
            if !distances.contains_key(next) {
                distances.insert(next.clone(), hop + 1);
                queue.push_back(next.clone());
            }
        }
    }
    Ok(distances)
}
