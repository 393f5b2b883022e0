use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;

use crate::graphs::{edge::WeightedEdge, Cost, Vertex};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Generates `number_of_edges` random edges between the vertices
/// `1..=number_of_vertices`. Parallel edges and loops are allowed.
pub fn random_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: Vertex,
    number_of_edges: u32,
    max_cost: Cost,
) -> Vec<WeightedEdge> {
    let number_of_vertices = number_of_vertices.max(1);
    (0..number_of_edges)
        .filter_map(|_| {
            let tail = rng.gen_range(1..=number_of_vertices);
            let head = rng.gen_range(1..=number_of_vertices);
            let cost = rng.gen_range(0..=max_cost);
            WeightedEdge::new(tail, head, cost)
        })
        .collect()
}

/// Draws `m` random (source, target) pairs from the given vertices.
pub fn random_requests<R: Rng>(rng: &mut R, vertices: &[Vertex], m: u32) -> Vec<(Vertex, Vertex)> {
    if vertices.is_empty() {
        return Vec::new();
    }

    (0..m)
        .filter_map(|_| {
            let source = *vertices.choose(rng)?;
            let target = *vertices.choose(rng)?;
            Some((source, target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_edges_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = random_edges(&mut rng, 10, 200, 5);
        assert_eq!(edges.len(), 200);
        assert!(edges.iter().all(|edge| (1..=10).contains(&edge.tail())
            && (1..=10).contains(&edge.head())
            && edge.cost() <= 5));
    }

    #[test]
    fn random_requests_of_empty_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_requests(&mut rng, &[], 10).is_empty());
        assert_eq!(random_requests(&mut rng, &[1, 2], 10).len(), 10);
    }
}
