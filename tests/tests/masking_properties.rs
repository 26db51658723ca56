//! Property tests for selection masking on random graphs.

use proptest::prelude::*;
use tabula_core::Row;
use tabula_mutation::Assignment;
use tabula_tests::prelude::*;

fn graph_with_selection(n: usize, m: usize, seed: u64, mask: &[bool]) -> (Session, Vec<EdgeId>) {
    let graph = gnm_graph(n, m, seed, GraphConfig::default());
    let selected: Vec<EdgeId> = graph
        .all_edge_ids()
        .into_iter()
        .zip(mask.iter().cycle())
        .filter(|(_, keep)| **keep)
        .map(|(id, _)| id)
        .collect();
    let mut session = Session::with_graph(1, graph);
    session.select_edges(selected.iter().copied()).unwrap();
    (session, selected)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_existing_attribute_changes_only_selection(
        n in 1usize..12,
        m in 1usize..30,
        seed in any::<u64>(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let (mut session, selected) = graph_with_selection(n, m, seed, &mask);
        let before = session.graph().edges().column("weight").unwrap();

        session
            .mutate(
                EntityKind::Edge,
                &[Assignment::new("weight", |row| row.get("weight")?.mul(&Value::Int(3)))],
            )
            .unwrap();

        let edges = session.graph().edges();
        let after = edges.column("weight").unwrap();
        for ((row, old), new) in edges.rows().iter().zip(&before).zip(&after) {
            if selected.contains(&row.id()) {
                prop_assert_eq!(new, &old.mul(&Value::Int(3)).unwrap());
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn prop_new_attribute_is_null_outside_selection(
        n in 1usize..12,
        m in 1usize..30,
        seed in any::<u64>(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let (mut session, selected) = graph_with_selection(n, m, seed, &mask);

        session
            .mutate(EntityKind::Edge, &[Assignment::copy_of("source", "from")])
            .unwrap();

        let edges = session.graph().edges();
        prop_assert!(edges.is_rectangular());
        for row in edges.rows() {
            let value = row.get_attr("source").cloned();
            if selected.contains(&row.id()) {
                prop_assert_eq!(value, Some(Value::Int(row.from().raw() as i64)));
            } else {
                prop_assert_eq!(value, Some(Value::Null));
            }
        }
        prop_assert!(session.graph().is_valid());
    }

    #[test]
    fn prop_rejected_batch_leaves_graph_identical(
        n in 1usize..12,
        m in 1usize..30,
        seed in any::<u64>(),
    ) {
        let (mut session, _) = graph_with_selection(n, m, seed, &[true]);
        let columns = session.graph().edges().columns().to_vec();
        let weights = session.graph().edges().column("weight");

        let result = session.mutate(
            EntityKind::Edge,
            &[Assignment::constant("weight", 0.0), Assignment::constant("id", 0)],
        );

        prop_assert!(result.is_err());
        prop_assert_eq!(session.graph().edges().columns(), columns.as_slice());
        prop_assert_eq!(session.graph().edges().column("weight"), weights);
        prop_assert!(session.log().is_empty());
    }
}
