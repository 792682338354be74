//! The task suite — nine classical graph algorithms plus a fixed registry
//! for external command dispatchers.

pub mod all_pairs;
pub mod classify;
pub mod degree;
pub mod filter;
pub mod frontier;
pub mod mst;
pub mod paths;

pub use all_pairs::all_pairs_shortest_paths;
pub use classify::{classify, Topology};
pub use degree::{non_neighbors, out_degree_dominators};
pub use filter::reciprocal_filter;
pub use frontier::equidistant_frontier;
pub use mst::minimum_spanning_tree;
pub use paths::{k_shortest_paths, shortest_path_counts};

use std::collections::BTreeSet;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// One entry in the fixed task registry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskSpec {
    /// Short command-style name.
    pub name: &'static str,
    /// One-line description for menus.
    pub summary: &'static str,
    /// Names of the string parameters the task expects.
    pub params: &'static [&'static str],
}

/// The fixed, ordered task registry.
pub const TASKS: [TaskSpec; 9] = [
    TaskSpec {
        name: "out-degree-dominators",
        summary: "vertices with a larger out-degree than the given one",
        params: &["vertex"],
    },
    TaskSpec {
        name: "non-neighbors",
        summary: "vertices not adjacent to the given one",
        params: &["vertex"],
    },
    TaskSpec {
        name: "reciprocal-filter",
        summary: "keep only edges whose reverse edge also exists",
        params: &[],
    },
    TaskSpec {
        name: "classify",
        summary: "report whether the graph is a tree, a forest or neither",
        params: &[],
    },
    TaskSpec {
        name: "equidistant-frontier",
        summary: "vertices at equal hop distance from two sources",
        params: &["first", "second"],
    },
    TaskSpec {
        name: "minimum-spanning-tree",
        summary: "Prim's minimum spanning tree",
        params: &[],
    },
    TaskSpec {
        name: "shortest-path-counts",
        summary: "number of distinct shortest paths to every reached vertex",
        params: &["source"],
    },
    TaskSpec {
        name: "k-shortest-paths",
        summary: "up to k shortest paths between two vertices",
        params: &["from", "to", "count"],
    },
    TaskSpec {
        name: "all-pairs-shortest-paths",
        summary: "shortest path between every reachable pair",
        params: &[],
    },
];

/// What a task hands back: a printable report or a freshly built graph.
#[derive(Debug)]
pub enum TaskOutput {
    /// A displayable scalar or collection result.
    Report(String),
    /// A new graph, independent of the input graph.
    Graph(Graph),
}

/// Run the task at `index` (zero-based, registry order) with raw string
/// arguments from an external dispatcher.
pub fn run_task(index: usize, graph: &Graph, args: &[&str]) -> GraphResult<TaskOutput> {
    let spec = TASKS.get(index).ok_or(GraphError::UnknownTask(index))?;
    if args.len() != spec.params.len() {
        return Err(GraphError::BadTaskArguments {
            task: spec.name,
            expected: spec.params.len(),
            got: args.len(),
        });
    }

    log::debug!("running task {} ({})", index + 1, spec.name);
    let output = match index {
        0 => TaskOutput::Report(join_vertices(&out_degree_dominators(graph, args[0])?)),
        1 => TaskOutput::Report(join_vertices(&non_neighbors(graph, args[0])?)),
        2 => TaskOutput::Graph(reciprocal_filter(graph)?),
        3 => TaskOutput::Report(classify(graph)?.to_string()),
        4 => TaskOutput::Report(join_vertices(&equidistant_frontier(graph, args[0], args[1])?)),
        5 => TaskOutput::Graph(minimum_spanning_tree(graph)?),
        6 => {
            let counts = shortest_path_counts(graph, args[0])?;
            let lines: Vec<String> = counts
                .iter()
                .map(|(vertex, count)| format!("{}: {}", vertex, count))
                .collect();
            TaskOutput::Report(lines.join("\n"))
        }
        7 => {
            let k: usize = args[2]
                .parse()
                .map_err(|_| GraphError::InvalidCount(args[2].to_string()))?;
            TaskOutput::Report(k_shortest_paths(graph, args[0], args[1], k)?.join("\n"))
        }
        8 => {
            let pairs = all_pairs_shortest_paths(graph)?;
            let lines: Vec<String> = pairs
                .iter()
                .map(|((from, to), path)| format!("{} {}: {}", from, to, path.join(" -> ")))
                .collect();
            TaskOutput::Report(lines.join("\n"))
        }
        _ => return Err(GraphError::UnknownTask(index)),
    };
    Ok(output)
}

fn join_vertices(vertices: &BTreeSet<String>) -> String {
    vertices
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an edge price for arithmetic. Weighted graphs guarantee a token
/// is present; anything unparseable is reported at this boundary.
pub(crate) fn numeric_price(price: &Option<String>) -> GraphResult<f64> {
    let token = price.as_deref().unwrap_or_default();
    token
        .parse::<f64>()
        .map_err(|_| GraphError::NonNumericWeight(token.to_string()))
}

pub(crate) fn require_directed(graph: &Graph) -> GraphResult<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(GraphError::RequiresDirected)
    }
}

pub(crate) fn require_undirected(graph: &Graph) -> GraphResult<()> {
    if graph.is_directed() {
        Err(GraphError::RequiresUndirected)
    } else {
        Ok(())
    }
}

pub(crate) fn require_weighted(graph: &Graph) -> GraphResult<()> {
    if graph.is_weighted() {
        Ok(())
    } else {
        Err(GraphError::RequiresWeighted)
    }
}
