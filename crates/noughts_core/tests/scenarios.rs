//! End-to-end game scenarios.

use noughts_core::{
    analyze_position, best_move, derive_board, derive_checked, evaluate, parse_moves, Board,
    GameMode, GameSession, History, IntegrityWarning, InvalidInteraction, Mark, Move, Outcome,
    Square, WIN_SCORE,
};

fn history(moves: &[(usize, usize, Mark)]) -> History {
    moves
        .iter()
        .map(|&(row, col, mark)| Move::new(Square::new(row, col), mark))
        .collect()
}

#[test]
fn test_top_row_win_for_x() {
    let history = history(&[
        (0, 0, Mark::X),
        (1, 1, Mark::O),
        (0, 1, Mark::X),
        (2, 2, Mark::O),
        (0, 2, Mark::X),
    ]);
    assert_eq!(evaluate(&derive_board(&history)), Outcome::Win(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let history = history(&[
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (0, 2, Mark::X),
        (1, 1, Mark::O),
        (1, 0, Mark::X),
        (1, 2, Mark::O),
        (2, 1, Mark::X),
        (2, 0, Mark::O),
        (2, 2, Mark::X),
    ]);
    let board = derive_board(&history);
    assert!(board.is_full());
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_off_board_entry_is_skipped() {
    let malformed = history(&[(0, 0, Mark::X), (5, 5, Mark::O), (1, 1, Mark::O)]);
    let cleaned = history(&[(0, 0, Mark::X), (1, 1, Mark::O)]);

    let derivation = derive_checked(&malformed);
    assert_eq!(derivation.board, derive_board(&cleaned));
    assert!(matches!(
        derivation.warnings.as_slice(),
        [IntegrityWarning::OutOfBounds { index: 1, .. }]
    ));
}

#[test]
fn test_parsed_notation_feeds_deriver() {
    let history = parse_moves("0:0 5:5 1:1").expect("parse");
    let derivation = derive_checked(&history);
    assert_eq!(derivation.warnings.len(), 1);
    assert_eq!(derivation.board.occupied(), 2);
}

#[test]
fn test_occupied_square_keeps_history_identical() {
    let mut session = GameSession::default();
    session.record_move(Square::new(0, 0)).expect("X moves");
    session.record_move(Square::new(1, 1)).expect("O moves");
    let before = session.history().clone();

    assert_eq!(
        session.record_move(Square::new(0, 0)),
        Err(InvalidInteraction::SquareOccupied(Square::new(0, 0)))
    );
    assert_eq!(session.history(), &before);
}

#[test]
fn test_o_never_loses_from_mid_game_positions() {
    // From every position after X's first two moves and O's optimal reply,
    // O's search value is never a loss.
    for first in Square::ALL {
        let mut session = GameSession::with_mode(GameMode::Ai);
        session.record_move(first).expect("X moves");
        let after_reply = session.board();
        assert_eq!(after_reply.occupied(), 2);

        for second in after_reply.empty_squares().collect::<Vec<_>>() {
            let mut line = session.clone();
            line.record_move(second).expect("X moves");
            if line.outcome().is_terminal() {
                assert_ne!(line.outcome(), Outcome::Win(Mark::X));
                continue;
            }
            let report = analyze_position(&line.board(), Mark::X);
            assert!(report.evaluation.score < WIN_SCORE, "X can force a win after {:?}", line.history());
        }
    }
}

#[test]
fn test_full_game_between_two_searchers_is_a_draw() {
    let mut moves: Vec<Move> = Vec::new();
    let mut board = Board::new();
    while evaluate(&board) == Outcome::InProgress {
        let to_move = Mark::for_turn(moves.len());
        let square = best_move(&board, to_move).expect("move available");
        moves.push(Move::new(square, to_move));
        board = derive_board(&History::from_moves(moves.clone()));
    }
    assert_eq!(evaluate(&board), Outcome::Draw);
    assert_eq!(moves.len(), 9);
}
