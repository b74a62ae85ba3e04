mod common;
use crate::common::{init_tracing, TestResult};

use project_tracker::{Graph, TrackerError};

#[test]
fn removing_vertex_drops_incoming_and_outgoing_edges() -> TestResult {
    init_tracing();

    let mut g = Graph::from_parts([1, 2, 3, 4], [(1, 2), (2, 3), (4, 2), (3, 1)], true)?;
    let removed = g.remove_vertex(&2)?;

    assert_eq!(removed, 2);
    assert_eq!(g.vertices(), &[1, 3, 4]);
    assert!(g.neighbors(&2).is_none());
    for (_, neighbors) in g.adjacency() {
        assert!(!neighbors.contains(&2));
    }
    assert!(g.has_edge(&3, &1));
    assert_eq!(g.edge_count(), 1);
    Ok(())
}

#[test]
fn removing_vertex_from_undirected_graph_keeps_symmetry() -> TestResult {
    init_tracing();

    let mut g = Graph::from_parts(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "c")], false)?;
    g.remove_vertex(&"c")?;

    assert_eq!(g.vertices(), &["a", "b"]);
    assert!(g.has_edge(&"a", &"b"));
    assert!(g.has_edge(&"b", &"a"));
    assert_eq!(g.neighbors(&"b").map(|n| n.len()), Some(1));
    assert_eq!(g.edge_count(), 1);
    Ok(())
}

#[test]
fn removing_unknown_vertex_fails() {
    init_tracing();

    let mut g = Graph::with_vertices([1, 2], false);

    assert_eq!(
        g.remove_vertex(&3),
        Err(TrackerError::VertexNotFound("3".to_string()))
    );
    assert_eq!(g.len(), 2);
}

#[test]
fn removed_vertex_can_be_added_again_at_the_end() -> TestResult {
    init_tracing();

    let mut g = Graph::from_parts([1, 2, 3], [(1, 2)], true)?;
    g.remove_vertex(&1)?;
    assert!(g.add_vertex(1));

    assert_eq!(g.vertices(), &[2, 3, 1]);
    assert_eq!(g.neighbors(&1).map(|n| n.len()), Some(0));
    Ok(())
}
