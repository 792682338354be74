//! flatgraph — attributed graph store with a flat text format and a suite
//! of classical graph algorithms.
//!
//! A graph is directed or undirected, weighted or unweighted, fixed at
//! construction. Vertices are free-form string tokens; edge prices are
//! opaque tokens parsed as numbers only where an algorithm needs
//! arithmetic. Every read returns an independent copy, so algorithm code
//! can build a new graph while iterating an old one.

pub mod cli;
pub mod format;
pub mod graph;
pub mod tasks;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{TextReader, TextWriter};
pub use graph::{AdjacencyRow, Graph};
pub use tasks::{run_task, TaskOutput, TaskSpec, Topology, TASKS};
pub use types::{
    GraphError, GraphResult, ATTR_DIRECTED, ATTR_NOT_DIRECTED, ATTR_NOT_WEIGHTED, ATTR_WEIGHTED,
};
