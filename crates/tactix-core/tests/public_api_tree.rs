use tactix_core::{Board, Evaluation, GameState, Outcome, Side, StateTree, UniqueStateIndex};

/// Distinct complete games of Tic-Tac-Toe.
const COMPLETE_GAMES: usize = 255_168;
/// Nodes in the full game tree, expansion stopping at decided states.
const TREE_NODES: usize = 549_946;
/// Distinct reachable boards, the empty board included.
const UNIQUE_BOARDS: usize = 5_478;

#[test]
fn tree_totals_are_exact() {
    let tree = StateTree::build().expect("tree builds");
    assert_eq!(tree.node_count(), TREE_NODES);
    assert_eq!(tree.leaf_count(), COMPLETE_GAMES);
}

#[test]
fn root_expands_to_nine_children() {
    let tree = StateTree::build().expect("tree builds");
    let root = tree.node(tree.root_id()).expect("root exists");
    let children: Vec<u8> = root.children().map(|(field, _)| field).collect();
    assert_eq!(children, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn unique_board_total_is_exact() {
    let tree = StateTree::evaluated().expect("tree builds");
    let index = UniqueStateIndex::build(&tree).expect("consistent tree");
    assert_eq!(index.len(), UNIQUE_BOARDS);
}

#[test]
fn empty_board_lookup_returns_the_tie_value() {
    let tree = StateTree::evaluated().expect("tree builds");
    let index = UniqueStateIndex::build(&tree).expect("consistent tree");
    let value = index
        .value_of(&tree, &Board::empty())
        .expect("empty board is reachable");
    assert_eq!(value, Evaluation { for_x: 0, for_o: 0 });
}

#[test]
fn a_completed_line_ends_the_game_with_no_children() {
    // X takes the top row while O replies on the middle row.
    let state = GameState::new()
        .play(1)
        .and_then(|s| s.play(4))
        .and_then(|s| s.play(2))
        .and_then(|s| s.play(5))
        .and_then(|s| s.play(3))
        .expect("legal moves");
    assert_eq!(state.winner(), Some(Outcome::Win(Side::X)));

    // The tree reaches the same position through fields 1,4,2,5,3 and
    // stops there.
    let tree = StateTree::build().expect("tree builds");
    let mut node_id = tree.root_id();
    for field in [1, 4, 2, 5, 3] {
        node_id = tree
            .node(node_id)
            .expect("node exists")
            .child(field)
            .expect("move exists");
    }
    let node = tree.node(node_id).expect("node exists");
    assert_eq!(node.state().winner(), Some(Outcome::Win(Side::X)));
    assert!(node.is_leaf());
}

#[test]
fn terminal_values_are_antisymmetric() {
    let tree = StateTree::evaluated().expect("tree builds");
    for (_, node) in tree.nodes().filter(|(_, node)| node.is_leaf()) {
        let value = node.value().expect("evaluated");
        assert_eq!(value.for_x, -value.for_o);
        assert!(matches!(value.for_x, -100 | 0 | 100));
    }
}
