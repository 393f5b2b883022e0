use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use multigraph_paths::{
    answer_query,
    graphs::reader::{read_query, read_query_from_file},
    search::path::ShortestPathRequest,
    OutputFormat,
};

/// Finds the shortest path between two vertices of an undirected multigraph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query file, stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print distance, predecessor and edge cost of every vertex
    #[arg(short, long)]
    tables: bool,

    /// Source vertex, overrides the one given in the query
    #[arg(short, long)]
    source: Option<u32>,

    /// Target vertex, overrides the one given in the query
    #[arg(short = 'd', long)]
    target: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let query = match &args.input {
        Some(path) => read_query_from_file(path)
            .with_context(|| format!("could not read query from {}", path.display()))?,
        None => read_query(io::stdin().lock()).context("could not read query from stdin")?,
    };

    let request = ShortestPathRequest::new(
        args.source.unwrap_or(query.request.source()),
        args.target.unwrap_or(query.request.target()),
    )
    .context("vertex id 0 is reserved")?;

    let mut result = answer_query(&query.edges, &request)?;
    if !args.tables {
        result.table = None;
    }

    match args.format {
        OutputFormat::Text => print!("{}", result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
