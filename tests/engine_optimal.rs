//! Test suite for the decision engine
//! Validates the three-tier structure, optimality, and search discipline

use std::collections::HashSet;

use tictacbot::{
    board::{Board, Cell, Player},
    engine::{choose_move, minimax, Tier},
};

mod shortcut_tiers {
    use super::*;

    #[test]
    fn test_immediate_win_skips_search() {
        // O O .
        // X . X
        // . . .
        let board = Board::from_string("OO. X.X ...").unwrap();
        let decision = choose_move(&board).unwrap();
        assert_eq!(decision.position, 2);
        assert_eq!(decision.tier, Tier::ImmediateWin);
    }

    #[test]
    fn test_immediate_win_takes_first_in_row_major_order() {
        // Two winning completions exist (positions 2 and 6); the scan
        // returns the earlier one.
        // O O .
        // O X .
        // . X .
        let board = Board::from_string("OO. OX. .X.").unwrap();
        let decision = choose_move(&board).unwrap();
        assert_eq!(decision.position, 2);
        assert_eq!(decision.tier, Tier::ImmediateWin);
    }

    #[test]
    fn test_block_when_no_win_available() {
        // X . .
        // . X .
        // O O .      human threatens the diagonal at 8... and so does the
        //            bot threaten the bottom row there; win tier fires first.
        let board = Board::from_string("X.. .X. OO.").unwrap();
        let decision = choose_move(&board).unwrap();
        assert_eq!(decision.position, 8);
        assert_eq!(decision.tier, Tier::ImmediateWin);

        // Remove the bot's own threat; now the same cell is a block.
        // X . .
        // . X .
        // O . .
        let board = Board::from_string("X.. .X. O..").unwrap();
        let decision = choose_move(&board).unwrap();
        assert_eq!(decision.position, 8);
        assert_eq!(decision.tier, Tier::ImmediateBlock);
    }

    #[test]
    fn test_forced_block_in_middle_row() {
        // O X O
        // X X .
        // O . X      the human threatens the middle row at position 5
        let board = Board::from_string("OXO XX. O.X").unwrap();
        let decision = choose_move(&board).unwrap();
        assert_eq!(decision.position, 5);
        assert_eq!(decision.tier, Tier::ImmediateBlock);
    }

    #[test]
    fn test_full_board_is_never_searched() {
        let board = Board::from_string("OXO XXO OOX").unwrap();
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert!(choose_move(&board).is_none());
    }
}

mod search_discipline {
    use super::*;

    #[test]
    fn test_choose_move_leaves_board_identical() {
        let fixtures = [
            ".........",
            "O...X....",
            "OX.OX....",
            "OXO XX. O.X",
            "X...O...X",
        ];
        for fixture in fixtures {
            let board = Board::from_string(fixture).unwrap();
            let before = board;
            let _ = choose_move(&board);
            assert_eq!(board, before, "board mutated for fixture '{fixture}'");
        }
    }

    #[test]
    fn test_minimax_restores_board_on_every_path() {
        // Positions chosen so pruning fires somewhere in the tree.
        let fixtures = ["O...X....", "OX..X...O", "....X...."];
        for fixture in fixtures {
            let mut board = Board::from_string(fixture).unwrap();
            let before = board;
            let _ = minimax(&mut board, 0, true, i32::MIN, i32::MAX);
            assert_eq!(board, before, "board mutated for fixture '{fixture}'");
            let _ = minimax(&mut board, 0, false, i32::MIN, i32::MAX);
            assert_eq!(board, before, "board mutated for fixture '{fixture}'");
        }
    }
}

mod optimal_play {
    use super::*;

    /// Apply the optimal reply for the human by flipping the board
    /// perspective and asking the engine.
    fn best_human_reply(board: &Board) -> Option<usize> {
        choose_move(&board.swapped()).map(|decision| decision.position)
    }

    fn play_out(bot_starts: bool) -> Board {
        let mut board = Board::new();
        let mut bot_to_move = bot_starts;
        while !board.is_terminal() {
            let position = if bot_to_move {
                choose_move(&board).expect("non-terminal board must yield a move").position
            } else {
                best_human_reply(&board).expect("non-terminal board must yield a move")
            };
            assert!(board.is_empty(position));
            board.set(
                position,
                if bot_to_move { Cell::Bot } else { Cell::Human },
            );
            bot_to_move = !bot_to_move;
        }
        board
    }

    #[test]
    fn test_optimal_self_play_always_draws() {
        for game in 0..100 {
            let bot_starts = game % 2 == 0;
            let final_board = play_out(bot_starts);
            assert!(final_board.is_full(), "game {game} ended early");
            assert_eq!(
                final_board.winner(),
                None,
                "game {game} had a winner:\n{final_board}"
            );
        }
    }
}

mod pruning_soundness {
    use super::*;

    /// Plain minimax with no pruning, used as the oracle.
    fn unpruned(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        if board.has_won(Player::Human) {
            return -10 + depth;
        }
        if board.has_won(Player::Bot) {
            return 10 - depth;
        }
        if board.is_full() {
            return 0;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in 0..9 {
            if board.is_empty(pos) {
                board.set(
                    pos,
                    if maximizing { Cell::Bot } else { Cell::Human },
                );
                let value = unpruned(board, depth + 1, !maximizing);
                board.set(pos, Cell::Empty);
                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
        }
        best
    }

    /// Every state reachable by alternating play from an empty board, with
    /// either side opening, keyed by position and side to move.
    fn reachable_states(
        board: &mut Board,
        bot_to_move: bool,
        seen: &mut HashSet<(Board, bool)>,
    ) {
        if !seen.insert((*board, bot_to_move)) || board.is_terminal() {
            return;
        }
        for pos in 0..9 {
            if board.is_empty(pos) {
                board.set(pos, if bot_to_move { Cell::Bot } else { Cell::Human });
                reachable_states(board, !bot_to_move, seen);
                board.set(pos, Cell::Empty);
            }
        }
    }

    #[test]
    fn test_alpha_beta_matches_unpruned_oracle() {
        let mut seen = HashSet::new();
        let mut board = Board::new();
        reachable_states(&mut board, true, &mut seen);
        reachable_states(&mut board, false, &mut seen);

        let mut compared = 0usize;
        for &(state, bot_to_move) in &seen {
            if !bot_to_move || state.is_terminal() {
                continue;
            }
            let mut work = state;
            for pos in 0..9 {
                if work.is_empty(pos) {
                    work.set(pos, Cell::Bot);
                    let pruned = minimax(&mut work, 0, false, i32::MIN, i32::MAX);
                    let exact = unpruned(&mut work, 0, false);
                    work.set(pos, Cell::Empty);
                    assert_eq!(
                        pruned, exact,
                        "divergence at position {pos} of state:\n{state}"
                    );
                    compared += 1;
                }
            }
        }
        assert!(compared > 5_000, "only {compared} evaluations compared");
    }
}
