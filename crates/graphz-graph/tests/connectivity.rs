use std::collections::BTreeSet;

use graphz_core::rng::RngHandle;
use graphz_core::{Position, VertexId};
use graphz_graph::{
    canonical_hash, cycle_graph, gen_random_undirected, isolated_vertices, Graph, GraphConfig,
};
use proptest::prelude::*;

#[test]
fn directed_reachability_follows_arrows() {
    let mut graph = Graph::default();
    for _ in 0..3 {
        graph.add_vertex(Position::default()).unwrap();
    }
    graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
    graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();

    let from_zero = graph.reachable_from(VertexId::new(0)).unwrap();
    assert_eq!(from_zero.len(), 3);
    let from_two = graph.reachable_from(VertexId::new(2)).unwrap();
    assert_eq!(from_two, BTreeSet::from([VertexId::new(2)]));
    assert!(!graph.is_connected());
}

#[test]
fn connectivity_edge_cases() {
    let config = GraphConfig::default();
    assert!(isolated_vertices(0, config).unwrap().is_connected());
    assert!(isolated_vertices(1, config).unwrap().is_connected());
    assert!(!isolated_vertices(2, config).unwrap().is_connected());
    assert!(cycle_graph(6, config).unwrap().is_connected());
}

proptest! {
    #[test]
    fn random_generation_is_seed_deterministic(seed in any::<u64>(), n in 0usize..12, m in 0usize..20) {
        let mut rng_a = RngHandle::from_seed(seed);
        let mut rng_b = RngHandle::from_seed(seed);
        let a = gen_random_undirected(n, m, GraphConfig::default(), &mut rng_a).unwrap();
        let b = gen_random_undirected(n, m, GraphConfig::default(), &mut rng_b).unwrap();
        prop_assert_eq!(canonical_hash(&a), canonical_hash(&b));
        prop_assert_eq!(a.vertex_count(), n);
    }

    #[test]
    fn random_graphs_are_symmetric_and_bounded(seed in any::<u64>(), n in 2usize..10, m in 0usize..40) {
        let config = GraphConfig { max_vertices: 10, max_degree: 4 };
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_random_undirected(n, m, config, &mut rng).unwrap();
        for v in graph.vertices() {
            let neighbors = graph.neighbors(v).unwrap();
            prop_assert!(neighbors.len() <= 4);
            for u in neighbors {
                let forward = neighbors.iter().filter(|w| *w == u).count();
                let backward = graph.neighbors(*u).unwrap().iter().filter(|w| **w == v).count();
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
