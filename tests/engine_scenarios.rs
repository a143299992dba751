//! End-to-end games against the public engine API

use gomoku::rules::{check_winner, find_five_at};
use gomoku::search::{candidate_moves, in_fallback_region};
use gomoku::{Board, Engine, EngineConfig, EngineError, EvaluatorKind, Pos, SearchType, Stone};

#[test]
fn empty_board_opens_in_centre() {
    let mut engine = Engine::with_seed(EngineConfig::new(15, 2), 2024).unwrap();
    let mut board = Board::new();

    let result = engine.choose_move_with_stats(&mut board, Stone::Black).unwrap();
    assert_eq!(result.search_type, SearchType::Fallback);
    let pos = result.best_move;
    assert!((5..=8).contains(&pos.row) && (5..=8).contains(&pos.col), "{:?}", pos);
    assert!(board.is_board_empty());
}

#[test]
fn reply_is_adjacent_to_lone_stone() {
    let mut engine = Engine::with_seed(EngineConfig::new(15, 2), 7).unwrap();
    let mut board = Board::new();
    let centre = Pos::new(7, 7);
    board.place_stone(centre, Stone::Black);

    let result = engine.choose_move_with_stats(&mut board, Stone::White).unwrap();
    assert_eq!(result.search_type, SearchType::AlphaBeta);
    assert_eq!(result.best_move.distance(centre), 1);
    assert!(result.nodes > 0);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn scripted_tie_returns_later_move() {
    let mut board = Board::from_rows(&["......", "......", "XX..XX", "......", "......", "......"]);
    let mut engine = Engine::with_seed(EngineConfig::new(6, 1), 0).unwrap();
    assert_eq!(
        engine.choose_move(&mut board, Stone::Black).unwrap(),
        Pos::new(2, 3)
    );
}

#[test]
fn seeded_engines_play_identical_games() {
    let config = EngineConfig::new(9, 2).with_evaluator(EvaluatorKind::Counting);
    let play = |seed| {
        let mut engine = Engine::with_seed(config, seed).unwrap();
        let mut board = Board::with_size(9);
        let mut moves = Vec::new();
        let mut side = Stone::Black;
        for _ in 0..6 {
            let pos = engine.choose_move(&mut board, side).unwrap();
            board.place_stone(pos, side);
            moves.push(pos);
            side = side.opponent();
        }
        moves
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn self_play_moves_stay_legal() {
    for kind in [EvaluatorKind::Patterns, EvaluatorKind::Counting] {
        let config = EngineConfig::new(7, 2).with_evaluator(kind);
        let mut engine = Engine::with_seed(config, 3).unwrap();
        let mut board = Board::with_size(7);
        let mut side = Stone::Black;

        for turn in 0..49 {
            let legal = candidate_moves(&board);
            let pos = match engine.choose_move(&mut board, side) {
                Ok(pos) => pos,
                Err(EngineError::BoardFull) => break,
                Err(e) => panic!("unexpected error {e}"),
            };
            if turn == 0 {
                assert!(in_fallback_region(7, pos));
            } else {
                assert!(legal.contains(&pos), "{:?} not a candidate on\n{}", pos, board);
            }

            board.place_stone(pos, side);
            if find_five_at(&board, pos, side).is_some() {
                assert_eq!(check_winner(&board), Some(side));
                break;
            }
            side = side.opponent();
        }
    }
}

#[test]
fn precondition_errors() {
    let mut engine = Engine::with_seed(EngineConfig::new(8, 1), 0).unwrap();
    assert_eq!(
        engine.choose_move(&mut Board::with_size(10), Stone::Black),
        Err(EngineError::BoardSizeMismatch { expected: 8, found: 10 })
    );
    assert_eq!(
        engine.choose_move(&mut Board::with_size(8), Stone::Empty),
        Err(EngineError::InvalidSide)
    );
    assert!(matches!(
        Engine::new(EngineConfig::new(40, 2)),
        Err(EngineError::InvalidBoardSize(40))
    ));
}
