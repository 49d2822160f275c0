use graphz_core::{Color, VertexId};
use graphz_graph::{demo_graph, GraphConfig};

#[test]
fn graph_config_round_trip_json() {
    let config = GraphConfig {
        max_vertices: 12,
        max_degree: 4,
    };
    let json = serde_json::to_string_pretty(&config).expect("serialize");
    let decoded: GraphConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn graph_config_fields_default_to_vertex_limit() {
    let decoded: GraphConfig = serde_json::from_str(r#"{"max_degree": 3}"#).expect("deserialize");
    assert_eq!(decoded.max_vertices, 30);
    assert_eq!(decoded.max_degree, 3);
    assert_eq!(serde_json::from_str::<GraphConfig>("{}").expect("deserialize"), GraphConfig::default());
}

#[test]
fn graph_serializes_vertices_in_index_order() {
    let mut graph = demo_graph().expect("demo graph");
    graph.set_color(VertexId::new(2), Color::MarkB).expect("colour");
    let value = serde_json::to_value(&graph).expect("serialize");

    assert_eq!(value["config"]["max_vertices"], 30);
    let vertices = value["vertices"].as_array().expect("vertex array");
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[0]["adjacency"], serde_json::json!([1, 2, 3]));
    assert_eq!(vertices[1]["position"]["y"], 100.0);
    assert_eq!(vertices[2]["color"], "mark-b");
    assert_eq!(vertices[3]["color"], "unvisited");
}
