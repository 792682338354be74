//! Single-source shortest paths — tasks 7 and 8.
//!
//! Both tasks relax edges into per-vertex predecessor sets: a strictly
//! better distance replaces the set, an exact tie extends it. Task 7 then
//! counts paths over the predecessor relation; task 8 enumerates them.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, VecDeque};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::{numeric_price, require_weighted};

/// Min-heap entry ordered by accumulated distance, then vertex name.
#[derive(Debug)]
struct HeapEntry {
    vertex: String,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Number of distinct shortest paths from `source` to every vertex it
/// reaches. Weighted graphs with non-negative weights only.
///
/// Dijkstra builds the predecessor sets; counts then flow from the source
/// outward, each vertex finalized only once every predecessor edge into it
/// has been accounted for.
pub fn shortest_path_counts(graph: &Graph, source: &str) -> GraphResult<BTreeMap<String, u64>> {
    require_weighted(graph)?;
    graph.adjacent(source)?;

    // reject negative weights up front, before any relaxation
    for from in graph.vertices() {
        for (to, price) in graph.adjacent(&from)? {
            let weight = numeric_price(&price)?;
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: from.clone(),
                    to,
                    weight,
                });
            }
        }
    }

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut predecessors: HashMap<String, BTreeSet<String>> = HashMap::new();
    let mut settled: BTreeSet<String> = BTreeSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distances.insert(source.to_string(), 0.0);
    heap.push(Reverse(HeapEntry {
        vertex: source.to_string(),
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        if !settled.insert(vertex.clone()) {
            continue;
        }
        for (next, price) in graph.adjacent(&vertex)? {
            let candidate = distance + numeric_price(&price)?;
            match distances.get(&next) {
                Some(&known) if candidate > known => {}
                Some(&known) if candidate == known => {
                    predecessors
                        .entry(next.clone())
                        .or_default()
                        .insert(vertex.clone());
                }
                _ => {
                    distances.insert(next.clone(), candidate);
                    predecessors.insert(next.clone(), BTreeSet::from([vertex.clone()]));
                    heap.push(Reverse(HeapEntry {
                        vertex: next,
                        distance: candidate,
                    }));
                }
            }
        }
    }

    Ok(propagate_counts(source, &predecessors))
}

/// Push counts outward over the predecessor relation, finalizing a vertex
/// only after all of its predecessors are final.
fn propagate_counts(
    source: &str,
    predecessors: &HashMap<String, BTreeSet<String>>,
) -> BTreeMap<String, u64> {
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut pending: HashMap<&str, usize> = HashMap::new();
    for (vertex, preds) in predecessors {
        pending.insert(vertex, preds.len());
        for pred in preds {
            successors.entry(pred).or_default().push(vertex);
        }
    }

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    counts.insert(source.to_string(), 1);

    let mut ready: VecDeque<&str> = VecDeque::new();
    ready.push_back(source);
    while let Some(vertex) = ready.pop_front() {
        let count = counts.get(vertex).copied().unwrap_or(0);
        let Some(nexts) = successors.get(vertex) else {
            continue;
        };
        for &next in nexts {
            *counts.entry(next.to_string()).or_insert(0) += count;
            if let Some(remaining) = pending.get_mut(next) {
                *remaining -= 1;
                if *remaining == 0 {
                    ready.push_back(next);
                }
            }
        }
    }
    counts
}

/// Up to `k` shortest paths from `from` to `to`, rendered as
/// `a -> b -> c` strings. Weighted graphs only; negative weights are fine
/// as long as no negative cycle is reachable.
///
/// Paths come out in predecessor-set enumeration order, which is not
/// guaranteed to be sorted by length once ties branch deeper in the
/// predecessor structure.
pub fn k_shortest_paths(graph: &Graph, from: &str, to: &str, k: usize) -> GraphResult<Vec<String>> {
    require_weighted(graph)?;
    graph.adjacent(from)?;
    graph.adjacent(to)?;

    let vertices = graph.vertices();
    let mut edges: Vec<(String, String, f64)> = Vec::new();
    for x in &vertices {
        for (y, price) in graph.adjacent(x)? {
            edges.push((x.clone(), y.clone(), numeric_price(&price)?));
        }
    }

    // Bellman-Ford: |V|-1 full passes, tie-aware predecessor sets
    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut predecessors: HashMap<String, BTreeSet<String>> = HashMap::new();
    distances.insert(from.to_string(), 0.0);

    for pass in 1..vertices.len() {
        let mut changed = false;
        for (x, y, weight) in &edges {
            let Some(&known_x) = distances.get(x) else {
                continue;
            };
            let candidate = known_x + weight;
            match distances.get(y) {
                Some(&known_y) if candidate > known_y => {}
                Some(&known_y) if candidate == known_y => {
                    predecessors
                        .entry(y.clone())
                        .or_default()
                        .insert(x.clone());
                }
                _ => {
                    distances.insert(y.clone(), candidate);
                    predecessors.insert(y.clone(), BTreeSet::from([x.clone()]));
                    changed = true;
                }
            }
        }
        if !changed {
            log::trace!("relaxation settled after pass {}", pass);
            break;
        }
    }

    // anything still strictly relaxable sits on a negative cycle
    for (x, y, weight) in &edges {
        if let Some(&known_x) = distances.get(x) {
            let still_better = distances
                .get(y)
                .map_or(true, |&known_y| known_x + weight < known_y);
            if still_better {
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    let mut paths: Vec<String> = Vec::new();
    if !distances.contains_key(to) || k == 0 {
        return Ok(paths);
    }

    // walk the predecessor sets backward from `to`, explicit stack, one
    // path per branch that reaches `from`
    let mut stack: Vec<(String, Vec<String>)> = vec![(to.to_string(), vec![to.to_string()])];
    while let Some((vertex, backward)) = stack.pop() {
        if vertex == from {
            let rendered: Vec<&str> = backward.iter().rev().map(String::as_str).collect();
            paths.push(rendered.join(" -> "));
            if paths.len() == k {
                break;
            }
            continue;
        }
        let Some(preds) = predecessors.get(&vertex) else {
            continue;
        };
        for pred in preds.iter().rev() {
            // keep paths simple: zero-weight ties can knot the
            // predecessor sets into cycles
            if backward.contains(pred) {
                continue;
            }
            let mut extended = backward.clone();
            extended.push(pred.clone());
            stack.push((pred.clone(), extended));
        }
    }
    Ok(paths)
}
