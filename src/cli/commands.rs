//! CLI command implementations.
//!
//! Every command is one load → operate → save round over a graph file;
//! the interactive multi-graph shell of older tooling is deliberately not
//! part of this crate.

use std::path::Path;

use crate::format::{TextReader, TextWriter};
use crate::graph::Graph;
use crate::tasks::{run_task, TaskOutput, TASKS};
use crate::types::GraphResult;

/// Create a new empty graph file with the given attributes.
pub fn cmd_create(path: &Path, directed: bool, weighted: bool, json: bool) -> GraphResult<()> {
    let (directedness, weightedness) = attribute_tokens(directed, weighted);
    let graph = Graph::from_attributes(directedness, weightedness)?;
    TextWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"created": path.display().to_string()})
        );
    } else {
        println!("Created {}", path.display());
    }
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = TextReader::read_from_file(path)?;
    let (directedness, weightedness) = graph.attributes();
    let mut isolated = 0usize;
    for vertex in graph.vertices() {
        let no_outgoing = graph
            .adjacent(&vertex)
            .map(|row| row.is_empty())
            .unwrap_or(false);
        if no_outgoing && graph.in_degree(&vertex).unwrap_or(0) == 0 {
            isolated += 1;
        }
    }

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "attributes": [directedness, weightedness],
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "isolated": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Attributes: {} {}", directedness, weightedness);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated vertices: {}", isolated);
    }
    Ok(())
}

/// Add a vertex to the graph file.
pub fn cmd_add_vertex(path: &Path, id: &str, json: bool) -> GraphResult<()> {
    let mut graph = TextReader::read_from_file(path)?;
    graph.add_vertex(id)?;
    TextWriter::write_to_file(&graph, path)?;
    report_mutation(path, &format!("added vertex {}", id), json);
    Ok(())
}

/// Remove a vertex and its incident edges from the graph file.
pub fn cmd_remove_vertex(path: &Path, id: &str, json: bool) -> GraphResult<()> {
    let mut graph = TextReader::read_from_file(path)?;
    graph.remove_vertex(id)?;
    TextWriter::write_to_file(&graph, path)?;
    report_mutation(path, &format!("removed vertex {}", id), json);
    Ok(())
}

/// Add an edge to the graph file.
pub fn cmd_add_edge(
    path: &Path,
    from: &str,
    to: &str,
    price: Option<&str>,
    json: bool,
) -> GraphResult<()> {
    let mut graph = TextReader::read_from_file(path)?;
    graph.add_edge(from, to, price)?;
    TextWriter::write_to_file(&graph, path)?;
    report_mutation(path, &format!("added edge {} -> {}", from, to), json);
    Ok(())
}

/// Remove an edge from the graph file.
pub fn cmd_remove_edge(path: &Path, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let mut graph = TextReader::read_from_file(path)?;
    graph.remove_edge(from, to)?;
    TextWriter::write_to_file(&graph, path)?;
    report_mutation(path, &format!("removed edge {} -> {}", from, to), json);
    Ok(())
}

/// List the task registry.
pub fn cmd_tasks(json: bool) -> GraphResult<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&TASKS).unwrap_or_default()
        );
    } else {
        for (i, task) in TASKS.iter().enumerate() {
            let params = task.params.join(" ");
            if params.is_empty() {
                println!("{}. {} — {}", i + 1, task.name, task.summary);
            } else {
                println!("{}. {} {} — {}", i + 1, task.name, params, task.summary);
            }
        }
    }
    Ok(())
}

/// Run a task (1-based registry number) against a graph file. Tasks that
/// build a graph write it to `out` when given, or render it to stdout.
pub fn cmd_run(
    path: &Path,
    number: usize,
    args: &[String],
    out: Option<&Path>,
    json: bool,
) -> GraphResult<()> {
    let graph = TextReader::read_from_file(path)?;
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let index = number.saturating_sub(1);

    match run_task(index, &graph, &arg_refs)? {
        TaskOutput::Report(report) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({"task": TASKS[index].name, "report": report})
                );
            } else {
                println!("{}", report);
            }
        }
        TaskOutput::Graph(result) => match out {
            Some(out) => {
                TextWriter::write_to_file(&result, out)?;
                if json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "task": TASKS[index].name,
                            "wrote": out.display().to_string(),
                            "vertices": result.vertex_count(),
                            "edges": result.edge_count(),
                        })
                    );
                } else {
                    println!("Wrote {}", out.display());
                }
            }
            None => {
                TextWriter::write_to(&result, &mut std::io::stdout())?;
            }
        },
    }
    Ok(())
}

fn attribute_tokens(directed: bool, weighted: bool) -> (&'static str, &'static str) {
    use crate::types::{ATTR_DIRECTED, ATTR_NOT_DIRECTED, ATTR_NOT_WEIGHTED, ATTR_WEIGHTED};
    (
        if directed { ATTR_DIRECTED } else { ATTR_NOT_DIRECTED },
        if weighted { ATTR_WEIGHTED } else { ATTR_NOT_WEIGHTED },
    )
}

fn report_mutation(path: &Path, action: &str, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({"file": path.display().to_string(), "action": action})
        );
    } else {
        println!("{} in {}", action, path.display());
    }
}
