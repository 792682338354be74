//! All-pairs shortest paths — task 9.

use std::collections::{BTreeMap, HashMap};

use crate::graph::Graph;
use crate::types::GraphResult;

use super::{numeric_price, require_weighted};

/// Floyd–Warshall with path reconstruction. Weighted graphs only.
///
/// Returns the shortest vertex sequence for every ordered pair with a
/// finite distance; unreachable pairs are omitted. Each vertex pairs with
/// itself through the trivial one-vertex path.
pub fn all_pairs_shortest_paths(
    graph: &Graph,
) -> GraphResult<BTreeMap<(String, String), Vec<String>>> {
    require_weighted(graph)?;

    let vertices: Vec<String> = graph.vertices().into_iter().collect();
    let n = vertices.len();
    let index: HashMap<&str, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for (i, vertex) in vertices.iter().enumerate() {
        for (to, price) in graph.adjacent(vertex)? {
            let j = index[to.as_str()];
            dist[i][j] = numeric_price(&price)?;
            next[i][j] = Some(j);
        }
        // the diagonal wins over any self-loop price
        dist[i][i] = 0.0;
        next[i][i] = Some(i);
    }

    for x in 0..n {
        for y in 0..n {
            if dist[y][x].is_infinite() {
                continue;
            }
            for z in 0..n {
                let through = dist[y][x] + dist[x][z];
                if through < dist[y][z] {
                    dist[y][z] = through;
                    next[y][z] = next[y][x];
                }
            }
        }
    }

    let mut paths: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
    for y in 0..n {
        for z in 0..n {
            if next[y][z].is_none() {
                continue;
            }
            let mut sequence = vec![vertices[y].clone()];
            let mut current = y;
            while current != z {
                let Some(step) = next[current][z] else {
                    break;
                };
                current = step;
                sequence.push(vertices[current].clone());
            }
            paths.insert((vertices[y].clone(), vertices[z].clone()), sequence);
        }
    }
    log::debug!("all-pairs: {} reachable pairs of {}", paths.len(), n * n);
    Ok(paths)
}
