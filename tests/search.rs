use ahash::{HashMap, HashMapExt};
use multigraph_paths::{
    error::Error,
    graphs::{edge::WeightedEdge, multi_graph::MultiGraph, Distance, Vertex},
    search::{
        dijkstra::dijkstra_single_source,
        path::{get_path, validate_path},
    },
    utility::random_edges,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Reference distances computed by repeatedly relaxing every edge.
fn bellman_ford(edges: &[WeightedEdge], source: Vertex) -> HashMap<Vertex, Distance> {
    let mut distances = HashMap::new();
    distances.insert(source, 0);

    loop {
        let mut changed = false;
        for edge in edges {
            for (tail, head) in [(edge.tail(), edge.head()), (edge.head(), edge.tail())] {
                let Some(&distance_tail) = distances.get(&tail) else {
                    continue;
                };
                let alternative = distance_tail + Distance::from(edge.cost());
                if distances
                    .get(&head)
                    .map_or(true, |&current| alternative < current)
                {
                    distances.insert(head, alternative);
                    changed = true;
                }
            }
        }
        if !changed {
            return distances;
        }
    }
}

fn check_search(edges: &[WeightedEdge], source: Vertex) -> Result<(), TestCaseError> {
    let graph = MultiGraph::from_edges(edges);
    if !graph.contains_vertex(source) {
        prop_assert!(matches!(
            dijkstra_single_source(&graph, source),
            Err(Error::UnknownVertex(_))
        ));
        return Ok(());
    }

    let data = dijkstra_single_source(&graph, source).unwrap();
    let expected = bellman_ford(edges, source);

    prop_assert_eq!(data.get_distance(source), Some(0));
    prop_assert_eq!(data.get_predecessor(source), None);

    for vertex in graph.vertices() {
        prop_assert_eq!(data.get_distance(vertex), expected.get(&vertex).copied());

        match data.get_distance(vertex) {
            Some(distance) => {
                let path = get_path(&data, vertex).unwrap();
                prop_assert_eq!(path.distance, distance);
                prop_assert_eq!(validate_path(&graph, &path), Ok(()));
            }
            None => {
                let is_unreachable =
                    matches!(get_path(&data, vertex), Err(Error::UnreachableTarget { .. }));
                prop_assert!(is_unreachable);
            }
        }
    }

    // triangle property
    for edge in edges {
        for (tail, head) in [(edge.tail(), edge.head()), (edge.head(), edge.tail())] {
            if let Some(distance_tail) = data.get_distance(tail) {
                let distance_head = data.get_distance(head);
                prop_assert!(distance_head.is_some());
                prop_assert!(
                    distance_head.unwrap() <= distance_tail + Distance::from(edge.cost())
                );
            }
        }
    }

    Ok(())
}

fn edge_strategy() -> impl Strategy<Value = WeightedEdge> {
    (1u32..=8, 1u32..=8, 0u32..20)
        .prop_map(|(tail, head, cost)| WeightedEdge::new(tail, head, cost).unwrap())
}

proptest! {
    #[test]
    fn proptest_dijkstra_matches_bellman_ford(
        edges in prop::collection::vec(edge_strategy(), 0..30),
        source in 1u32..=8
    ) {
        check_search(&edges, source)?;
    }
}

#[test]
fn dijkstra_on_random_multigraphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let edges = random_edges(&mut rng, 60, 150, 30);
        for source in [1, 17, 42] {
            check_search(&edges, source).unwrap();
        }
    }
}
