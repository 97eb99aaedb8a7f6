use crate::tree::{StateTree, UniqueStateIndex, error::TreeError, value::Evaluation};

#[test]
fn index_building_requires_an_evaluated_tree() {
    let tree = StateTree::build().expect("tree builds");
    match UniqueStateIndex::build(&tree) {
        Err(TreeError::Unevaluated { .. }) => {}
        other => panic!("expected Unevaluated, got {other:?}"),
    }
}

#[test]
fn transposed_nodes_with_diverging_values_are_fatal() {
    let mut tree = StateTree::evaluated().expect("tree builds");

    // The board X-O...X... is reached both by 1,2,3 and by 3,2,1, so
    // corrupting the node at one of the two paths breaks the invariant.
    let root = tree.root_id();
    let after_1 = tree.node(root).expect("root").child(1).expect("child 1");
    let after_12 = tree.node(after_1).expect("node").child(2).expect("child 2");
    let after_123 = tree.node(after_12).expect("node").child(3).expect("child 3");
    tree.node_mut(after_123)
        .expect("node")
        .set_value(Evaluation { for_x: 55, for_o: -55 });

    match UniqueStateIndex::build(&tree) {
        Err(TreeError::EvaluationMismatch { board, first, second }) => {
            assert_eq!(board.to_string(), "XOX------");
            assert_ne!(first, second);
        }
        other => panic!("expected EvaluationMismatch, got {other:?}"),
    }
}

#[test]
fn every_transposition_resolves_to_one_representative() {
    let tree = StateTree::evaluated().expect("tree builds");
    let index = UniqueStateIndex::build(&tree).expect("consistent tree");

    // Far fewer unique boards than tree nodes.
    assert!(index.len() < tree.node_count());

    // Every node's board resolves, and the representative agrees on value.
    for (_, node) in tree.nodes() {
        let representative = index.get(node.board()).expect("board indexed");
        let indexed = tree.node(representative).expect("node exists");
        assert_eq!(indexed.value(), node.value());
    }
}
