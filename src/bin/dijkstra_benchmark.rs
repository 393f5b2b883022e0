use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressIterator;
use itertools::Itertools;
use multigraph_paths::{
    error::Error,
    graphs::multi_graph::MultiGraph,
    search::{dijkstra::Dijkstra, PathFinding},
    utility::{get_progressbar, random_edges, random_requests},
};
use rand::{rngs::StdRng, SeedableRng};

/// Measures the average query time on a random multigraph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 1_000)]
    vertices: u32,

    /// Number of edges, parallel edges included
    #[arg(short = 'm', long, default_value_t = 5_000)]
    edges: u32,

    /// Largest edge cost
    #[arg(short = 'c', long, default_value_t = 100)]
    max_cost: u32,

    /// Number of queries
    #[arg(short, long, default_value_t = 100)]
    queries: u32,

    /// Seed of the random number generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let edges = random_edges(&mut rng, args.vertices, args.edges, args.max_cost);
    let graph = MultiGraph::from_edges(&edges);
    let vertices = graph.vertices().collect_vec();
    let requests = random_requests(&mut rng, &vertices, args.queries);

    let dijkstra = Dijkstra { graph: &graph };
    let mut unreachable = 0;
    let start = Instant::now();
    for &(source, target) in requests
        .iter()
        .progress_with(get_progressbar("querying", requests.len() as u64))
    {
        match dijkstra.shortest_path_distance(source, target) {
            Ok(_) => {}
            Err(Error::UnreachableTarget { .. }) => unreachable += 1,
            Err(error) => return Err(error.into()),
        }
    }
    let duration = start.elapsed();

    println!(
        "Value over {} sequential searches, {} unreachable",
        requests.len(),
        unreachable
    );
    println!(
        "Average dijkstra duration is {:?}",
        duration / requests.len().max(1) as u32
    );

    Ok(())
}
