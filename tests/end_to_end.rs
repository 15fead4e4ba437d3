//! Cross-module scenarios: a full game played out, both search engines
//! exercised to completion, and the two symmetry modes checked against
//! each other.

use std::time::Duration;

use quarto_engine::alphabeta::{alphabeta, mtdf, TranspositionTable};
use quarto_engine::mcts::{uct, BatchRollout, MaxIters, Mcts, SampleExpand, SerialExecutor};
use quarto_engine::symmetry::SymmetryMode;
use quarto_engine::value::Value;
use quarto_engine::{Move, Side, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Plays a whole game taking the first legal move every time, under
/// both symmetry modes, and checks each reaches a well-formed terminal
/// state within the ply limit.
#[test]
fn a_full_game_always_terminates_under_either_symmetry_mode() {
    for symmetry in [SymmetryMode::Folded, SymmetryMode::Unfolded] {
        let mut state = State::new();
        let mut plies = 0;
        while !state.is_over() {
            let mv = symmetry.legal_moves(&state)[0];
            state = symmetry.play(&state, mv).unwrap();
            plies += 1;
            assert!(plies <= 32, "game did not terminate within the ply limit");
        }
        let decisive = state.winner().is_some();
        assert_eq!(decisive, state.payoffs()[Side::Player1] != 0.0);
    }
}

/// MCTS with a fixed seed and an iteration-count stop (not a wall-clock
/// one) picks the same move on the same position every time.
#[test]
fn mcts_is_deterministic_given_a_seed_and_an_iteration_budget() {
    let state = State::new();
    let choose = || {
        let mut search = Mcts {
            select: Box::new(uct(1.0)),
            expand: Box::new(SampleExpand { k: 1 }),
            simulate: Box::new(BatchRollout { n: 1 }),
            stop: Box::new(MaxIters { max: 200 }),
            executor: Box::new(SerialExecutor),
            symmetry: SymmetryMode::Unfolded,
        };
        let mut rng = StdRng::seed_from_u64(42);
        search.search(state.clone(), &mut rng).unwrap()
    };
    let first = choose();
    let second = choose();
    assert_eq!(first, second);
}

/// Iterative-deepening MTD(f) finds the forced win one ply from the end
/// of a contrived position, and a direct full-window alpha-beta search
/// of the same position agrees on the value.
#[test]
fn mtdf_and_alphabeta_agree_on_a_near_terminal_position() {
    // Three placed pieces share attribute bit 0; the fourth matching
    // piece is about to be handed over, and whoever places it wins.
    let mut state = State::new();
    let setup = [(0b0001u8, 0), (0b0011, 1), (0b0101, 2)];
    for (bits, col) in setup {
        state = state.play(Move::Give(quarto_engine::Piece::new(bits))).unwrap();
        state = state.play(Move::Put(quarto_engine::Square::new(0, col))).unwrap();
    }
    state = state.play(Move::Give(quarto_engine::Piece::new(0b0111))).unwrap();

    let mut tt_direct = TranspositionTable::new();
    let (direct_value, _) = alphabeta(
        &mut tt_direct,
        SymmetryMode::Unfolded,
        &state,
        4,
        Value::NEG_INFINITY,
        Value::INFINITY,
        true,
    )
    .unwrap();

    let mut tt_mtdf = TranspositionTable::new();
    let mtdf_value = mtdf(&mut tt_mtdf, SymmetryMode::Unfolded, &state, 0.0, 4, true).unwrap();

    assert_eq!(direct_value, 1.0);
    assert_eq!(direct_value, mtdf_value);
}

/// Folding through the symmetry engine must not change a position's
/// game-theoretic value, only the size of the tree searched to find it.
#[test]
fn symmetry_folding_does_not_change_a_position_s_value() {
    let state = State::new();

    let mut tt_unfolded = TranspositionTable::new();
    let (unfolded_value, _) = alphabeta(
        &mut tt_unfolded,
        SymmetryMode::Unfolded,
        &state,
        4,
        Value::NEG_INFINITY,
        Value::INFINITY,
        true,
    )
    .unwrap();

    let mut tt_folded = TranspositionTable::new();
    let (folded_value, _) = alphabeta(
        &mut tt_folded,
        SymmetryMode::Folded,
        &state,
        4,
        Value::NEG_INFINITY,
        Value::INFINITY,
        true,
    )
    .unwrap();

    assert_eq!(unfolded_value, folded_value);
    assert!(tt_folded.len() <= tt_unfolded.len());
}

/// An MTD(f) player backed by a shared transposition table never
/// exceeds its time budget by more than a generous margin, exercising
/// [`quarto_engine::players::MtdfPlayer`] end to end.
#[test]
fn mtdf_player_respects_its_time_budget() {
    use quarto_engine::players::{MtdfConfig, MtdfPlayer, Player};

    let mut player = MtdfPlayer::new(MtdfConfig {
        max_time: Duration::from_millis(50),
        ..MtdfConfig::default()
    });
    let start = std::time::Instant::now();
    let mv = player.choose_move(&State::new()).unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(matches!(mv, Move::Give(_)));
}
