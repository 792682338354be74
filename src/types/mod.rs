//! All data types for the flatgraph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Attribute token for a graph that carries edge prices.
pub const ATTR_WEIGHTED: &str = "weighted";

/// Attribute token for a graph without edge prices.
pub const ATTR_NOT_WEIGHTED: &str = "not_weighted";

/// Attribute token for a graph with one-way edges.
pub const ATTR_DIRECTED: &str = "directed";

/// Attribute token for a graph with mirrored edges.
pub const ATTR_NOT_DIRECTED: &str = "not_directed";
