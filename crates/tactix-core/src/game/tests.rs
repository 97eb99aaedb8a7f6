use crate::game::{Board, Coords, GameError, GameState, Outcome, Side};

#[test]
fn coords_round_trip_all_fields() {
    for field in 1..=9 {
        let coords = Coords::from_field(field).expect("field in range");
        assert_eq!(coords.field(), field);
        assert!(coords.row() <= 2);
        assert!(coords.column() <= 2);
    }
}

#[test]
fn coords_reject_out_of_range_fields() {
    for field in [0, 10, 255] {
        assert_eq!(
            Coords::from_field(field),
            Err(GameError::FieldOutOfRange { field })
        );
    }
}

#[test]
fn apply_leaves_original_board_untouched() {
    let board = Board::empty();
    let next = board.apply(Side::X, 5).expect("legal move");
    assert_eq!(board.at(5).expect("in range"), None);
    assert_eq!(next.at(5).expect("in range"), Some(Side::X));
}

#[test]
fn apply_to_occupied_field_fails_and_changes_nothing() {
    let board = Board::empty().apply(Side::X, 5).expect("legal move");
    let result = board.apply(Side::O, 5);
    assert_eq!(
        result,
        Err(GameError::FieldOccupied {
            field: 5,
            mark: Side::X
        })
    );
    // The failed attempt must not have altered the board.
    assert_eq!(board.at(5).expect("in range"), Some(Side::X));
    assert_eq!(board.free_fields().len(), 8);
}

#[test]
fn free_fields_are_ascending() {
    let board = Board::empty()
        .apply(Side::X, 5)
        .and_then(|b| b.apply(Side::O, 1))
        .and_then(|b| b.apply(Side::X, 9))
        .expect("legal moves");
    assert_eq!(board.free_fields(), vec![2, 3, 4, 6, 7, 8]);
}

#[test]
fn winner_detects_rows_columns_and_diagonals() {
    let lines: [[u8; 3]; 8] = [
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        [1, 5, 9],
        [3, 5, 7],
    ];
    for line in lines {
        let mut board = Board::empty();
        for field in line {
            board = board.apply(Side::O, field).expect("legal move");
        }
        assert_eq!(board.winner(), Some(Outcome::Win(Side::O)), "line {line:?}");
    }
}

#[test]
fn full_board_without_line_is_a_tie() {
    // X O X / X O O / O X X
    let marks = [
        (1, Side::X),
        (2, Side::O),
        (3, Side::X),
        (4, Side::X),
        (5, Side::O),
        (6, Side::O),
        (7, Side::O),
        (8, Side::X),
        (9, Side::X),
    ];
    let mut board = Board::empty();
    for (field, side) in marks {
        board = board.apply(side, field).expect("legal move");
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), Some(Outcome::Tie));
}

#[test]
fn in_progress_board_has_no_winner() {
    let board = Board::empty().apply(Side::X, 1).expect("legal move");
    assert_eq!(board.winner(), None);
}

#[test]
fn board_identity_ignores_move_order() {
    let one = Board::empty()
        .apply(Side::X, 1)
        .and_then(|b| b.apply(Side::O, 2))
        .expect("legal moves");
    let other = Board::empty()
        .apply(Side::O, 2)
        .and_then(|b| b.apply(Side::X, 1))
        .expect("legal moves");
    assert_eq!(one, other);
    assert_eq!(one.key(), other.key());
}

#[test]
fn key_and_display_match_cell_contents() {
    let board = Board::empty()
        .apply(Side::X, 1)
        .and_then(|b| b.apply(Side::O, 2))
        .and_then(|b| b.apply(Side::X, 9))
        .expect("legal moves");
    assert_eq!(board.key(), 120_000_001);
    assert_eq!(board.to_string(), "XO------X");
}

#[test]
fn board_ordering_matches_numeric_key() {
    let a = Board::empty().apply(Side::X, 9).expect("legal move");
    let b = Board::empty().apply(Side::O, 9).expect("legal move");
    let c = Board::empty().apply(Side::X, 1).expect("legal move");
    assert!(a < b, "X sorts before O at the same field");
    assert!(b < c, "earlier fields are more significant");
    assert!(a.key() < b.key() && b.key() < c.key());
}

#[test]
fn turns_strictly_alternate() {
    let state = GameState::new();
    assert_eq!(state.turn(), Side::X);
    let state = state.play(1).expect("legal move");
    assert_eq!(state.turn(), Side::O);
    let state = state.play(2).expect("legal move");
    assert_eq!(state.turn(), Side::X);
}

#[test]
fn play_as_rejects_wrong_side() {
    let state = GameState::new();
    assert_eq!(
        state.play_as(Side::O, 1),
        Err(GameError::WrongTurn {
            side: Side::O,
            turn: Side::X
        })
    );
    assert!(state.play_as(Side::X, 1).is_ok());
}

#[test]
fn finished_state_rejects_further_moves() {
    // X takes the top row; O answers on the middle row.
    let state = GameState::new()
        .play(1)
        .and_then(|s| s.play(4))
        .and_then(|s| s.play(2))
        .and_then(|s| s.play(5))
        .and_then(|s| s.play(3))
        .expect("legal moves");
    assert_eq!(state.winner(), Some(Outcome::Win(Side::X)));
    assert!(state.is_finished());
    assert_eq!(state.play(6), Err(GameError::GameOver));
}

#[test]
fn derived_state_does_not_mutate_parent() {
    let parent = GameState::new();
    let child = parent.play(5).expect("legal move");
    assert_eq!(parent.board().at(5).expect("in range"), None);
    assert_eq!(child.board().at(5).expect("in range"), Some(Side::X));
}
