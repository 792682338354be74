//! CLI entry point for the `fgr` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use flatgraph::cli::commands;

#[derive(Parser)]
#[command(
    name = "fgr",
    about = "flatgraph CLI — attributed graphs in a flat text format"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Make the graph undirected (default: directed)
        #[arg(long)]
        not_directed: bool,
        /// Make the graph unweighted (default: weighted)
        #[arg(long)]
        not_weighted: bool,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex token
        vertex: String,
    },
    /// Remove a vertex and its incident edges
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex token
        vertex: String,
    },
    /// Add an edge (endpoints are created as needed)
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
        /// Price token (required on weighted graphs)
        #[arg(long)]
        price: Option<String>,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// List the task registry
    Tasks,
    /// Run a task by its registry number (1-9)
    Run {
        /// Path to the graph file
        file: PathBuf,
        /// Task number as shown by `tasks`
        number: usize,
        /// Task arguments, in registry order
        args: Vec<String>,
        /// Where to write a graph-producing task's result
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Create {
            file,
            not_directed,
            not_weighted,
        } => commands::cmd_create(&file, !not_directed, !not_weighted, json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, &vertex, json),
        Commands::RemoveVertex { file, vertex } => {
            commands::cmd_remove_vertex(&file, &vertex, json)
        }
        Commands::AddEdge {
            file,
            from,
            to,
            price,
        } => commands::cmd_add_edge(&file, &from, &to, price.as_deref(), json),
        Commands::RemoveEdge { file, from, to } => {
            commands::cmd_remove_edge(&file, &from, &to, json)
        }
        Commands::Tasks => commands::cmd_tasks(json),
        Commands::Run {
            file,
            number,
            args,
            out,
        } => commands::cmd_run(&file, number, &args, out.as_deref(), json),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
