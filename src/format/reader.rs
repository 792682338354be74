//! Reads the flat text format into a graph.

use std::io::BufRead;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Reader for the flat text graph format.
///
/// Line 1 is the attribute pair; every following non-blank line declares
/// an isolated vertex (1 token), an unweighted edge (2 tokens) or a
/// weighted edge (3 tokens). The first malformed line aborts the load and
/// the partially built graph is discarded.
pub struct TextReader;

impl TextReader {
    /// Read a graph from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read a graph from any buffered reader.
    pub fn read_from(reader: impl BufRead) -> GraphResult<Graph> {
        let mut lines = reader.lines();

        let attribute_line = match lines.next() {
            Some(line) => line?,
            None => return Err(GraphError::AttributeCount { line: 1, got: 0 }),
        };
        let attributes: Vec<&str> = attribute_line.split_whitespace().collect();
        if attributes.len() != 2 {
            return Err(GraphError::AttributeCount {
                line: 1,
                got: attributes.len(),
            });
        }
        let mut graph = Graph::from_attributes(attributes[0], attributes[1])?;

        // body lines are 1-based and start right after the attribute line
        for (i, line) in lines.enumerate() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => continue,
                [vertex] => graph.add_vertex(vertex)?,
                [from, to] => graph.add_edge(from, to, None)?,
                [from, to, price] => graph.add_edge(from, to, Some(*price))?,
                more => {
                    return Err(GraphError::MalformedLine {
                        line: i + 2,
                        tokens: more.len(),
                    })
                }
            }
        }

        log::debug!(
            "loaded graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
