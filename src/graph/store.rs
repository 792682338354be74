//! Core graph structure — vertices + attributed adjacency rows.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::types::{
    GraphError, GraphResult, ATTR_DIRECTED, ATTR_NOT_DIRECTED, ATTR_NOT_WEIGHTED, ATTR_WEIGHTED,
};

/// One adjacency row: neighbor -> optional price token.
pub type AdjacencyRow = BTreeMap<String, Option<String>>;

/// An attributed graph over string-token vertices.
///
/// Directedness and weightedness are fixed at construction. Undirected
/// graphs keep the rows for `(x,y)` and `(y,x)` in lock-step; weighted
/// graphs store a price token on every edge, unweighted graphs store none.
/// All read methods return independent copies of internal state.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    /// Outgoing rows, keyed by vertex. Every neighbor key is itself a
    /// vertex with a row of its own.
    adjacency: BTreeMap<String, AdjacencyRow>,
}

impl Graph {
    /// Create a new empty graph with the default attributes
    /// (directed, weighted).
    pub fn new() -> Self {
        Self {
            directed: true,
            weighted: true,
            adjacency: BTreeMap::new(),
        }
    }

    /// Create a new empty graph from an attribute pair.
    ///
    /// The two tokens must cover both axes: one of
    /// `directed`/`not_directed` and one of `weighted`/`not_weighted`, in
    /// either order. Duplicate, contradictory or unrecognized tokens are
    /// rejected.
    pub fn from_attributes(first: &str, second: &str) -> GraphResult<Self> {
        let mut directed: Option<bool> = None;
        let mut weighted: Option<bool> = None;

        for token in [first, second] {
            let (axis, value) = match token {
                ATTR_DIRECTED => (&mut directed, true),
                ATTR_NOT_DIRECTED => (&mut directed, false),
                ATTR_WEIGHTED => (&mut weighted, true),
                ATTR_NOT_WEIGHTED => (&mut weighted, false),
                _ => {
                    return Err(GraphError::UnknownAttribute {
                        line: 1,
                        token: token.to_string(),
                    })
                }
            };
            if axis.is_some() {
                return Err(GraphError::DuplicateAttribute {
                    line: 1,
                    token: token.to_string(),
                });
            }
            *axis = Some(value);
        }

        match (directed, weighted) {
            (Some(directed), Some(weighted)) => Ok(Self {
                directed,
                weighted,
                adjacency: BTreeMap::new(),
            }),
            // two accepted tokens on distinct axes always fill both
            _ => unreachable!("attribute pair covers both axes"),
        }
    }

    /// Load a graph from a file in the flat text format.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        crate::format::TextReader::read_from_file(path)
    }

    /// Whether edges carry price tokens.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The attribute tokens describing this graph's shape.
    pub fn attributes(&self) -> (&'static str, &'static str) {
        let directedness = if self.directed {
            ATTR_DIRECTED
        } else {
            ATTR_NOT_DIRECTED
        };
        let weightedness = if self.weighted {
            ATTR_WEIGHTED
        } else {
            ATTR_NOT_WEIGHTED
        };
        (directedness, weightedness)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges. Mirrored pairs in an undirected graph
    /// count once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|row| row.len()).sum();
        if self.directed {
            entries
        } else {
            let loops = self
                .adjacency
                .iter()
                .filter(|(v, row)| row.contains_key(*v))
                .count();
            (entries + loops) / 2
        }
    }

    /// Snapshot of the current vertex set.
    pub fn vertices(&self) -> BTreeSet<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Defensive copy of `v`'s adjacency row.
    pub fn adjacent(&self, v: &str) -> GraphResult<AdjacencyRow> {
        self.adjacency
            .get(v)
            .cloned()
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }

    /// Number of edges pointing at `v`.
    pub fn in_degree(&self, v: &str) -> GraphResult<usize> {
        if !self.adjacency.contains_key(v) {
            return Err(GraphError::VertexNotFound(v.to_string()));
        }
        Ok(self
            .adjacency
            .values()
            .filter(|row| row.contains_key(v))
            .count())
    }

    /// True iff the edge `(x,y)` is present. Unknown endpoints yield
    /// `false`, never an error.
    pub fn exists_edge(&self, x: &str, y: &str) -> bool {
        self.adjacency
            .get(x)
            .map_or(false, |row| row.contains_key(y))
    }

    /// Price token of the edge `(x,y)`.
    pub fn edge_price(&self, x: &str, y: &str) -> GraphResult<Option<String>> {
        self.adjacency
            .get(x)
            .and_then(|row| row.get(y))
            .cloned()
            .ok_or_else(|| GraphError::EdgeNotFound(x.to_string(), y.to_string()))
    }

    /// Insert a vertex with an empty adjacency row.
    pub fn add_vertex(&mut self, id: &str) -> GraphResult<()> {
        if self.adjacency.contains_key(id) {
            return Err(GraphError::VertexExists(id.to_string()));
        }
        self.adjacency.insert(id.to_string(), AdjacencyRow::new());
        Ok(())
    }

    /// Remove a vertex and every edge incident to it, in both directions.
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<()> {
        if !self.adjacency.contains_key(id) {
            return Err(GraphError::VertexNotFound(id.to_string()));
        }
        for row in self.adjacency.values_mut() {
            row.remove(id);
        }
        self.adjacency.remove(id);
        Ok(())
    }

    /// Insert the edge `(x,y)`, auto-creating missing endpoints. The price
    /// must match the graph's weightedness; undirected graphs store the
    /// mirror row entry at the same time.
    pub fn add_edge(&mut self, x: &str, y: &str, price: Option<&str>) -> GraphResult<()> {
        if price.is_none() == self.weighted {
            return Err(GraphError::PriceMismatch {
                from: x.to_string(),
                to: y.to_string(),
                price: price.map(str::to_string),
            });
        }
        if !self.adjacency.contains_key(x) {
            self.add_vertex(x)?;
        }
        if !self.adjacency.contains_key(y) {
            self.add_vertex(y)?;
        }
        if self.exists_edge(x, y) {
            return Err(GraphError::EdgeExists(x.to_string(), y.to_string()));
        }

        let stored = price.map(str::to_string);
        if let Some(row) = self.adjacency.get_mut(x) {
            row.insert(y.to_string(), stored.clone());
        }
        if !self.directed {
            if let Some(row) = self.adjacency.get_mut(y) {
                row.insert(x.to_string(), stored);
            }
        }
        Ok(())
    }

    /// Remove the edge `(x,y)` and its mirror when undirected.
    pub fn remove_edge(&mut self, x: &str, y: &str) -> GraphResult<()> {
        if !self.exists_edge(x, y) {
            return Err(GraphError::EdgeNotFound(x.to_string(), y.to_string()));
        }
        if let Some(row) = self.adjacency.get_mut(x) {
            row.remove(y);
        }
        if !self.directed {
            if let Some(row) = self.adjacency.get_mut(y) {
                row.remove(x);
            }
        }
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
