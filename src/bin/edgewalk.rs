//! CLI entry point for the `edgewalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use edgewalk::cli::commands;

#[derive(Parser)]
#[command(
    name = "edgewalk",
    about = "edgewalk CLI — adjacency-list graph algorithms over text graph files"
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
    /// Print the adjacency structure of a graph
    Show {
        /// Path to the graph description file
        file: PathBuf,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// BFS discovery order from a start vertex
    Bfs {
        /// Path to the graph description file
        file: PathBuf,
        /// Start vertex
        start: usize,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// DFS discovery order from a start vertex
    Dfs {
        /// Path to the graph description file
        file: PathBuf,
        /// Start vertex
        start: usize,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Find a vertex from which every vertex is reachable
    Mother {
        /// Path to the graph description file
        file: PathBuf,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Print the transitive closure matrix
    Closure {
        /// Path to the graph description file
        file: PathBuf,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Extract the k-core of the graph
    Kcore {
        /// Path to the graph description file
        file: PathBuf,
        /// Minimum degree to keep
        k: usize,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Hop-count distances from a source vertex
    Distances {
        /// Path to the graph description file
        file: PathBuf,
        /// Source vertex
        source: usize,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Enumerate all simple paths between two vertices
    Paths {
        /// Path to the graph description file
        file: PathBuf,
        /// Source vertex
        source: usize,
        /// Target vertex
        target: usize,
        /// Which graph in the file to use
        #[arg(long, default_value = "0")]
        index: usize,
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
        Commands::Show { file, index } => commands::cmd_show(&file, index, json),
        Commands::Bfs { file, start, index } => commands::cmd_bfs(&file, index, start, json),
        Commands::Dfs { file, start, index } => commands::cmd_dfs(&file, index, start, json),
        Commands::Mother { file, index } => commands::cmd_mother(&file, index, json),
        Commands::Closure { file, index } => commands::cmd_closure(&file, index, json),
        Commands::Kcore { file, k, index } => commands::cmd_kcore(&file, index, k, json),
        Commands::Distances {
            file,
            source,
            index,
        } => commands::cmd_distances(&file, index, source, json),
        Commands::Paths {
            file,
            source,
            target,
            index,
        } => commands::cmd_paths(&file, index, source, target, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            edgewalk::GraphError::Io(_) => 1,
            edgewalk::GraphError::Parse(_)
            | edgewalk::GraphError::UnexpectedEof
            | edgewalk::GraphError::RaggedMatrix { .. } => 2,
            edgewalk::GraphError::VertexOutOfRange { .. }
            | edgewalk::GraphError::GraphIndexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
