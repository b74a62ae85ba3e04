use std::collections::HashSet;

use proptest::prelude::*;
use project_tracker::{Graph, TrackerError};

// Small vertex domain so that generated edges hit existing vertices, missing
// vertices, duplicates and self-loops often enough.
fn vertices_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..12, 0..10)
}

fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..12, 0u8..12), 0..30)
}

/// Add every edge whose endpoints exist; returns the accepted edges.
fn populate(g: &mut Graph<u8>, edges: &[(u8, u8)]) -> Vec<(u8, u8)> {
    edges
        .iter()
        .copied()
        .filter(|&edge| g.add_edge(edge).is_ok())
        .collect()
}

fn assert_no_dangling(g: &Graph<u8>) -> Result<(), TestCaseError> {
    let present: HashSet<u8> = g.vertices().iter().copied().collect();
    prop_assert_eq!(present.len(), g.len());
    for (vertex, neighbors) in g.adjacency() {
        prop_assert!(present.contains(vertex));
        for n in neighbors {
            prop_assert!(present.contains(n), "dangling neighbor {} of {}", n, vertex);
        }
    }
    Ok(())
}

fn assert_symmetric(g: &Graph<u8>) -> Result<(), TestCaseError> {
    for (vertex, neighbors) in g.adjacency() {
        for n in neighbors {
            prop_assert!(g.has_edge(n, vertex), "{} -> {} has no back-link", vertex, n);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn duplicate_vertices_are_ignored(vertices in vertices_strategy()) {
        let mut g = Graph::new(false);
        g.add_vertices(vertices.iter().copied());
        g.add_vertices(vertices.iter().copied());

        let mut seen = HashSet::new();
        let expected: Vec<u8> = vertices.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(g.vertices(), expected.as_slice());
    }

    #[test]
    fn edges_require_existing_endpoints(
        vertices in vertices_strategy(),
        edges in edges_strategy(),
        directed in any::<bool>(),
    ) {
        let mut g = Graph::with_vertices(vertices, directed);
        for (a, b) in edges {
            let known = g.contains(&a) && g.contains(&b);
            match g.add_edge((a, b)) {
                Ok(_) => {
                    prop_assert!(known);
                    prop_assert!(g.has_edge(&a, &b));
                    if !directed {
                        prop_assert!(g.has_edge(&b, &a));
                    }
                }
                Err(TrackerError::VertexNotFound(_)) => {
                    prop_assert!(!known);
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error {:?}", other);
                }
            }
        }
        if !directed {
            assert_symmetric(&g)?;
        }
    }

    #[test]
    fn removing_a_vertex_leaves_no_references(
        vertices in vertices_strategy(),
        edges in edges_strategy(),
        directed in any::<bool>(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!vertices.is_empty());
        let mut g = Graph::with_vertices(vertices, directed);
        populate(&mut g, &edges);

        let victim = g.vertices()[pick.index(g.len())];
        let before = g.len();
        g.remove_vertex(&victim)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(g.len(), before - 1);
        prop_assert!(!g.contains(&victim));
        prop_assert!(g.neighbors(&victim).is_none());
        for (_, neighbors) in g.adjacency() {
            prop_assert!(!neighbors.contains(&victim));
        }
        assert_no_dangling(&g)?;
        if !directed {
            assert_symmetric(&g)?;
        }
    }

    #[test]
    fn removing_every_added_edge_empties_adjacency(
        vertices in vertices_strategy(),
        edges in edges_strategy(),
        directed in any::<bool>(),
    ) {
        let mut g = Graph::with_vertices(vertices, directed);
        let accepted = populate(&mut g, &edges);
        let order = g.vertices().to_vec();

        let mut removed = HashSet::new();
        for (a, b) in accepted {
            let key = if directed { (a, b) } else { (a.min(b), a.max(b)) };
            if removed.insert(key) {
                g.remove_edge((a, b))
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
            } else {
                let is_missing = matches!(
                    g.remove_edge((a, b)),
                    Err(TrackerError::EdgeNotFound { .. })
                );
                prop_assert!(is_missing);
            }
        }

        prop_assert_eq!(g.vertices(), order.as_slice());
        prop_assert_eq!(g.edge_count(), 0);
        for (_, neighbors) in g.adjacency() {
            prop_assert!(neighbors.is_empty());
        }
    }
}
