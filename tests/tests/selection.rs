//! Selection commands and their interaction with mutation.

use tabula_mutation::Assignment;
use tabula_tests::prelude::*;

mod selection_lifecycle {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("selection_lifecycle")
            .graph(roads())
            .step(
                "select_unknown_edge",
                |s| Ok(s.select_edges([EdgeId::new(1), EdgeId::new(9)])?),
                |e| e.error("edge e9 does not exist").selection(None),
            )
            .step(
                "select_then_invert",
                |s| {
                    s.select_edges([EdgeId::new(2)])?;
                    Ok(s.invert_selection()?)
                },
                |e| e.selection(Some(vec![1, 3])),
            )
            .step(
                "flag_inverted",
                |s| {
                    s.mutate(EntityKind::Edge, &[Assignment::constant("flag", true)])?;
                    Ok(())
                },
                |e| {
                    e.edge_column(
                        "flag",
                        vec![Value::Bool(true), Value::Null, Value::Bool(true)],
                    )
                },
            )
            .step(
                "remove_selected_edge",
                |s| {
                    s.graph_mut().remove_edge(EdgeId::new(3))?;
                    Ok(())
                },
                |e| e.selection(Some(vec![1])).valid(),
            )
            .step(
                "clear",
                |s| {
                    s.clear_selection();
                    Ok(())
                },
                |e| e.selection(Some(vec![])),
            )
            .step(
                "invert_cleared",
                |s| Ok(s.invert_selection()?),
                |e| e.selection(Some(vec![1, 2])),
            )
            .step(
                "drop_then_invert",
                |s| {
                    s.drop_selection();
                    Ok(s.invert_selection()?)
                },
                |e| e.error("no selection to invert").selection(None),
            )
    }

    #[test]
    fn test_selection_lifecycle() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_removing_a_node_prunes_node_selection_and_edges() {
    // GIVEN
    let mut session = Session::with_graph(1, roads());
    session.select_nodes([NodeId::new(1), NodeId::new(2)]).unwrap();

    // WHEN
    session.graph_mut().remove_node(NodeId::new(1)).unwrap();

    // THEN
    assert_eq!(session.graph().selection_members(), Some(vec![2]));
    assert_eq!(
        session.graph().all_edge_ids(),
        vec![EdgeId::new(2), EdgeId::new(3)]
    );
    assert!(session.graph().is_valid());
}
