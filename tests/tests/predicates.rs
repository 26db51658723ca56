//! Edge predicates checked against a brute-force scan of the edge table.

use tabula_core::Row;
use tabula_tests::prelude::*;

fn brute_force_mutual(graph: &Graph, id: EdgeId) -> bool {
    let Some(edge) = graph.edge(id) else {
        return false;
    };
    graph
        .edges()
        .rows()
        .iter()
        .any(|other| other.id() != id && other.from() == edge.to() && other.to() == edge.from())
}

#[test]
fn test_predicates_agree_with_table_scan() {
    init_tracing();

    for seed in 0..20 {
        // GIVEN
        let graph = gnm_graph(6, 18, seed, GraphConfig::default());
        let session = Session::with_graph(seed, graph);

        // WHEN/THEN
        for edge in session.graph().edges().rows() {
            let id = edge.id();
            assert_eq!(
                session.is_edge_mutual(id).unwrap(),
                brute_force_mutual(session.graph(), id),
                "seed {seed}, edge {id}"
            );
            assert_eq!(session.is_edge_loop(id).unwrap(), edge.from() == edge.to());
        }
    }
}

#[test]
fn test_mutual_and_loop_on_small_graph() {
    // e1: 1 -> 2, e2: 2 -> 3, e3: 2 -> 1, e4: 3 -> 3
    let mut graph = path_graph(3, GraphConfig::default());
    graph.add_edge(NodeId::new(2), NodeId::new(1), attrs!()).unwrap();
    graph.add_edge(NodeId::new(3), NodeId::new(3), attrs!()).unwrap();
    let session = Session::with_graph(1, graph);

    assert!(session.is_edge_mutual(EdgeId::new(1)).unwrap());
    assert!(!session.is_edge_mutual(EdgeId::new(2)).unwrap());
    assert!(session.is_edge_mutual(EdgeId::new(3)).unwrap());
    assert!(session.is_edge_loop(EdgeId::new(4)).unwrap());
    assert!(!session.is_edge_mutual(EdgeId::new(4)).unwrap());
}

#[test]
fn test_identifier_arguments() {
    let session = Session::with_graph(1, roads());

    assert!(!session.is_edge_loop_value(&Value::Int(1)).unwrap());
    assert!(!session.is_edge_mutual_value(&Value::Float(2.0)).unwrap());

    for bad in [
        Value::Null,
        Value::Bool(true),
        Value::String("1".into()),
        Value::Float(1.25),
        Value::Int(0),
        Value::Int(-3),
        Value::Int(99),
    ] {
        let err = session.is_edge_loop_value(&bad).unwrap_err();
        assert!(
            matches!(
                err.as_validation(),
                Some(tabula_core::ValidationError::InvalidArgument { .. })
            ),
            "{bad:?} gave {err}"
        );
    }
}

#[test]
fn test_predicates_need_edges() {
    let session = Session::with_graph(1, path_graph(1, GraphConfig::default()));

    let err = session.is_edge_mutual(EdgeId::new(1)).unwrap_err();

    assert_eq!(
        err.as_validation(),
        Some(&tabula_core::ValidationError::empty_table(EntityKind::Edge))
    );
}

#[test]
fn test_predicates_leave_graph_untouched() {
    let mut session = Session::with_graph(1, roads());
    session.select_edges([EdgeId::new(1)]).unwrap();

    session.is_edge_mutual(EdgeId::new(1)).unwrap();
    session.is_edge_loop(EdgeId::new(2)).unwrap();

    assert_eq!(session.graph().selection_members(), Some(vec![1]));
    assert!(session.log().is_empty());
}
