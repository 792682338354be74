//! Tree/forest classifier — task 4.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::require_directed;

/// Shape of a directed graph as reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topology {
    /// Acyclic, in-degrees at most 1, exactly one root.
    Tree,
    /// Acyclic, in-degrees at most 1, any other number of roots.
    Forest,
    /// Anything else.
    Neither,
}

impl Topology {
    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Forest => "forest",
            Self::Neither => "neither",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify a directed graph as a tree, a forest or neither.
///
/// A vertex with in-degree above 1 or any cycle rules both shapes out;
/// otherwise the number of in-degree-0 roots decides: exactly one is a
/// tree, anything else a forest.
pub fn classify(graph: &Graph) -> GraphResult<Topology> {
    require_directed(graph)?;

    let mut roots = 0usize;
    for vertex in graph.vertices() {
        let degree = graph.in_degree(&vertex)?;
        if degree > 1 {
            return Ok(Topology::Neither);
        }
        if degree == 0 {
            roots += 1;
        }
    }

    if has_cycle(graph)? {
        return Ok(Topology::Neither);
    }

    if roots == 1 {
        Ok(Topology::Tree)
    } else {
        Ok(Topology::Forest)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Three-color depth-first search over every component, with an explicit
/// stack so the depth is bounded by memory, not the call stack. An edge
/// into an in-progress vertex is a back edge, hence a cycle.
fn has_cycle(graph: &Graph) -> GraphResult<bool> {
    let mut color: HashMap<String, Color> = graph
        .vertices()
        .into_iter()
        .map(|v| (v, Color::Unvisited))
        .collect();

    for start in graph.vertices() {
        if color.get(&start) != Some(&Color::Unvisited) {
            continue;
        }
        color.insert(start.clone(), Color::InProgress);
        let mut stack: Vec<String> = vec![start];

        while let Some(top) = stack.last().cloned() {
            let mut advanced = false;
            for next in graph.adjacent(&top)?.keys() {
                match color.get(next) {
                    Some(Color::InProgress) => return Ok(true),
                    Some(Color::Unvisited) => {
                        color.insert(next.clone(), Color::InProgress);
                        stack.push(next.clone());
                        advanced = true;
                        break;
                    }
                    _ => {}
                }
            }
            if !advanced {
                color.insert(top, Color::Done);
                stack.pop();
            }
        }
    }
    Ok(false)
}
