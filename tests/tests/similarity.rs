//! Jaccard similarity through the session.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tabula_similarity::{Direction, SimilarityOptions};
use tabula_tests::prelude::*;

/// Neighborhood of `id` read straight off the edge table.
fn neighborhood(graph: &Graph, id: NodeId, direction: Direction) -> HashSet<NodeId> {
    let direction = if graph.is_directed() {
        direction
    } else {
        Direction::All
    };
    let mut out = HashSet::new();
    for edge in graph.edges().rows() {
        let (from, to) = (edge.from(), edge.to());
        if matches!(direction, Direction::Out | Direction::All) && from == id {
            out.insert(to);
        }
        if matches!(direction, Direction::In | Direction::All) && to == id {
            out.insert(from);
        }
    }
    out.remove(&id);
    out
}

fn brute_force(graph: &Graph, a: NodeId, b: NodeId, direction: Direction) -> f64 {
    if a == b {
        return 1.0;
    }
    let na = neighborhood(graph, a, direction);
    let nb = neighborhood(graph, b, direction);
    let union = na.union(&nb).count();
    if union == 0 {
        0.0
    } else {
        na.intersection(&nb).count() as f64 / union as f64
    }
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    init_tracing();

    for seed in 0..10 {
        for config in [GraphConfig::directed(), GraphConfig::undirected()] {
            let session = Session::with_graph(1, gnm_graph(7, 14, seed, config));
            for direction in [Direction::All, Direction::Out, Direction::In] {
                let options = SimilarityOptions::new()
                    .with_direction(direction)
                    .with_round_to(6);
                let m = session.jaccard_similarity_with(None, &options).unwrap();

                for (i, &a) in m.labels().iter().enumerate() {
                    for (j, &b) in m.labels().iter().enumerate() {
                        let expected = brute_force(session.graph(), a, b, direction);
                        let got = m.get(i, j).unwrap();
                        assert!(
                            (got - expected).abs() < 1e-6,
                            "seed {seed} {direction} ({a}, {b}): {got} vs {expected}"
                        );
                    }
                }
            }
        }
    }
}

/// Star around 1 with leaves 2, 3, 4, plus 5 hanging off 2.
fn star() -> Graph {
    let mut graph = Graph::with_config(GraphConfig::undirected());
    let n: Vec<NodeId> = (0..5).map(|_| graph.add_node(attrs!()).unwrap()).collect();
    for (a, b) in [(0, 1), (0, 2), (0, 3), (4, 1)] {
        graph.add_edge(n[a], n[b], attrs!()).unwrap();
    }
    graph
}

#[test]
fn test_path_graph_labels_and_values() {
    // GIVEN: a path 1 - 2 - 3 - 4
    let session = Session::with_graph(1, path_graph(4, GraphConfig::undirected()));

    // WHEN
    let m = session.jaccard_similarity(None, None, None).unwrap();

    // THEN: N(1) = {2}, N(2) = {1, 3}, N(3) = {2, 4}, N(4) = {3}
    assert_eq!(
        m.labels(),
        &[NodeId::new(1), NodeId::new(2), NodeId::new(3), NodeId::new(4)]
    );
    assert_eq!(
        m.values(),
        &[
            vec![1.0, 0.0, 0.5, 0.0],
            vec![0.0, 1.0, 0.0, 0.5],
            vec![0.5, 0.0, 1.0, 0.0],
            vec![0.0, 0.5, 0.0, 1.0],
        ]
    );
}

#[test]
fn test_default_rounds_to_three_places() {
    let session = Session::with_graph(1, star());

    let m = session.jaccard_similarity(None, None, None).unwrap();

    // N(1) = {2, 3, 4}, N(5) = {2}
    assert_eq!(m.get_by_id(NodeId::new(1), NodeId::new(5)), Some(0.333));
}

#[test]
fn test_subset_keeps_caller_order() {
    let session = Session::with_graph(1, star());
    let subset = [NodeId::new(5), NodeId::new(1)];

    let m = session
        .jaccard_similarity(Some(&subset[..]), Some("all"), Some(2))
        .unwrap();

    assert_eq!(m.labels(), &subset);
    assert_eq!(m.values(), &[vec![1.0, 0.33], vec![0.33, 1.0]]);
}

#[test]
fn test_rejects_unknown_node_and_direction() {
    let session = Session::with_graph(1, path_graph(3, GraphConfig::default()));

    let missing = session
        .jaccard_similarity(Some(&[NodeId::new(1), NodeId::new(8)][..]), None, None)
        .unwrap_err();
    let direction = session
        .jaccard_similarity(None, Some("both"), None)
        .unwrap_err();

    for err in [missing, direction] {
        assert!(matches!(
            err.as_validation(),
            Some(tabula_core::ValidationError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_matrix_serializes_with_labels() {
    let session = Session::with_graph(1, path_graph(2, GraphConfig::default()));

    let m = session.jaccard_similarity(None, None, None).unwrap();
    let json = serde_json::to_value(&m).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "labels": [1, 2], "values": [[1.0, 0.0], [0.0, 1.0]] })
    );
}

#[test]
fn test_similarity_does_not_touch_the_graph() {
    let mut session = Session::with_graph(1, roads());
    session.select_nodes([NodeId::new(1)]).unwrap();

    session.jaccard_similarity(None, Some("in"), None).unwrap();

    assert_eq!(session.graph().selection_members(), Some(vec![1]));
    assert!(session.log().is_empty());
}
