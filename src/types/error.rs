//! Error types for the flatgraph library.

use thiserror::Error;

/// All errors that can occur in the flatgraph library.
///
/// Variants fall into three groups: format errors raised by the text
/// serializer (these carry the offending 1-based line number), operation
/// errors raised by the graph store, and precondition errors raised by the
/// task suite.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Attribute line did not contain exactly two tokens.
    #[error("line {line}: expected exactly two graph attributes, got {got}")]
    AttributeCount { line: usize, got: usize },

    /// An attribute token was not recognized.
    #[error("line {line}: unrecognized graph attribute `{token}`")]
    UnknownAttribute { line: usize, token: String },

    /// An attribute axis was given twice (duplicate or contradictory token).
    #[error("line {line}: attribute `{token}` conflicts with an earlier one")]
    DuplicateAttribute { line: usize, token: String },

    /// A body line had a token count other than 1, 2 or 3.
    #[error("line {line}: expected a vertex or an edge, got {tokens} tokens")]
    MalformedLine { line: usize, tokens: usize },

    /// Tried to add a vertex that is already present.
    #[error("vertex `{0}` already exists")]
    VertexExists(String),

    /// A named vertex is not in the graph.
    #[error("no such vertex `{0}`")]
    VertexNotFound(String),

    /// Tried to add an edge that is already present.
    #[error("edge `{0}` -> `{1}` already exists")]
    EdgeExists(String, String),

    /// A named edge is not in the graph.
    #[error("no such edge `{0}` -> `{1}`")]
    EdgeNotFound(String, String),

    /// Edge price disagrees with the graph's weightedness.
    #[error("edge `{from}` -> `{to}`: price {price:?} is not allowed on this graph")]
    PriceMismatch {
        from: String,
        to: String,
        price: Option<String>,
    },

    /// Task needs a directed graph.
    #[error("this task requires a directed graph")]
    RequiresDirected,

    /// Task needs an undirected graph.
    #[error("this task requires an undirected graph")]
    RequiresUndirected,

    /// Task needs a weighted graph.
    #[error("this task requires a weighted graph")]
    RequiresWeighted,

    /// The two query vertices must differ.
    #[error("both vertices were `{0}`")]
    SameVertex(String),

    /// Spanning tree requested on a disconnected graph.
    #[error("graph is not connected")]
    Disconnected,

    /// An edge weight is negative where only non-negative weights are allowed.
    #[error("edge `{from}` -> `{to}` has negative weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Relaxation never settled: a negative cycle is reachable.
    #[error("graph contains a negative cycle")]
    NegativeCycle,

    /// An edge price failed to parse as a number.
    #[error("edge price `{0}` is not numeric")]
    NonNumericWeight(String),

    /// Registry dispatch received the wrong number of arguments.
    #[error("task `{task}` takes {expected} argument(s), got {got}")]
    BadTaskArguments {
        task: &'static str,
        expected: usize,
        got: usize,
    },

    /// Registry dispatch index out of range.
    #[error("no task number {0}")]
    UnknownTask(usize),

    /// A count argument failed to parse.
    #[error("`{0}` is not a valid count")]
    InvalidCount(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for flatgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
