//! Writes a graph in the flat text format.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for the flat text graph format.
///
/// Emits the attribute line, then every isolated vertex (no incident edges
/// in either direction), then every edge. An undirected edge is emitted
/// once, on its first discovery.
pub struct TextWriter;

impl TextWriter {
    /// Write a graph to a file.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let (directedness, weightedness) = graph.attributes();
        writeln!(writer, "{} {}", directedness, weightedness)?;

        let mut isolated = graph.vertices();
        let mut emitted: HashSet<(String, String)> = HashSet::new();
        let mut edge_lines: Vec<String> = Vec::new();

        for from in graph.vertices() {
            for (to, price) in graph.adjacent(&from)? {
                if !graph.is_directed() && emitted.contains(&(to.clone(), from.clone())) {
                    continue;
                }
                isolated.remove(&from);
                isolated.remove(&to);
                match &price {
                    Some(price) => edge_lines.push(format!("{} {} {}", from, to, price)),
                    None => edge_lines.push(format!("{} {}", from, to)),
                }
                emitted.insert((from.clone(), to));
            }
        }

        for vertex in &isolated {
            writeln!(writer, "{}", vertex)?;
        }
        for line in &edge_lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        log::debug!(
            "wrote graph: {} isolated vertices, {} edge lines",
            isolated.len(),
            edge_lines.len()
        );
        Ok(())
    }
}
