use graphz_core::errors::GraphzError;
use graphz_core::{Color, Position, VertexId};
use graphz_graph::{Graph, GraphConfig};

fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

#[test]
fn vertex_cap_enforced() {
    let mut graph = Graph::new(GraphConfig::with_capacity(2));
    graph.add_vertex(Position::default()).unwrap();
    graph.add_vertex(Position::default()).unwrap();

    let before = graph.clone();
    let err = graph.add_vertex(Position::new(1.0, 1.0)).unwrap_err();
    match err {
        GraphzError::CapacityExceeded(info) => {
            assert_eq!(info.code, "vertex-capacity");
            assert_eq!(info.context.get("cap"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(graph, before);
}

#[test]
fn degree_cap_enforced() {
    let mut graph = Graph::new(GraphConfig {
        max_vertices: 3,
        max_degree: 2,
    });
    for _ in 0..3 {
        graph.add_vertex(Position::default()).unwrap();
    }
    graph.add_edge(v(0), v(1)).unwrap();
    graph.add_edge(v(0), v(2)).unwrap();
    let err = graph.add_edge(v(0), v(1)).unwrap_err();
    match err {
        GraphzError::CapacityExceeded(info) => {
            assert_eq!(info.code, "degree-capacity");
            assert_eq!(info.context.get("vertex"), Some(&"0".to_string()));
            assert_eq!(info.context.get("cap"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(graph.neighbors(v(0)).unwrap(), &[v(1), v(2)]);
}

#[test]
fn out_of_range_endpoints_rejected() {
    let mut graph = Graph::default();
    graph.add_vertex(Position::default()).unwrap();

    let err = graph.add_edge(v(0), v(1)).unwrap_err();
    assert!(matches!(&err, GraphzError::InvalidVertex(info) if info.code == "invalid-vertex"));
    assert_eq!(err.info().context.get("vertex"), Some(&"1".to_string()));

    assert!(graph.add_edge(v(5), v(0)).unwrap_err().is_invalid_vertex());
    assert!(graph.color(v(1)).unwrap_err().is_invalid_vertex());
    assert!(graph.set_color(v(1), Color::Done).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn duplicates_and_self_loops_are_kept() {
    let mut graph = Graph::default();
    graph.add_vertex(Position::default()).unwrap();
    graph.add_vertex(Position::default()).unwrap();
    graph.add_edge(v(0), v(1)).unwrap();
    graph.add_edge(v(0), v(1)).unwrap();
    graph.add_edge(v(1), v(1)).unwrap();
    assert_eq!(graph.neighbors(v(0)).unwrap(), &[v(1), v(1)]);
    assert_eq!(graph.neighbors(v(1)).unwrap(), &[v(1)]);
}

#[test]
fn reset_colors_paints_every_vertex() {
    let mut graph = Graph::default();
    for _ in 0..3 {
        graph.add_vertex(Position::default()).unwrap();
    }
    graph.set_color(v(1), Color::Done).unwrap();
    graph.reset_colors(Color::MarkB);
    assert_eq!(graph.colors(), vec![Color::MarkB; 3]);
    graph.reset_colors(Color::Unvisited);
    assert!(graph.colors().iter().all(|c| *c == Color::Unvisited));
}

#[test]
fn positions_pass_through_untouched() {
    let mut graph = Graph::default();
    let id = graph.add_vertex(Position::new(12.5, -3.0)).unwrap();
    assert_eq!(graph.position(id).unwrap(), Position::new(12.5, -3.0));
    graph.set_position(id, Position::new(400.0, 300.0)).unwrap();
    assert_eq!(graph.position(id).unwrap(), Position::new(400.0, 300.0));
}
