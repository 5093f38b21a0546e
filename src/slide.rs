//! Moving pieces.
//!
//! A piece keeps going in one direction until the next cell is outside the board,
//! a wall or another piece - or until it lands on its own goal.
//! A piece that reached its goal never moves again.

use crate::data::{Dir, Pos};
use crate::map::Board;
use crate::state::State;

/// All states reachable by sliding exactly one piece in `dir`.
///
/// At most one state per piece (in piece order), pieces that can't move produce nothing.
/// Each piece is moved independently from the same parent state.
pub fn expand(board: &Board, state: &State, dir: Dir) -> Vec<State> {
    (0..state.piece_count())
        .filter_map(|piece| slide_piece(board, state, piece, dir))
        .collect()
}

/// Slide one piece, `None` if it's frozen on its goal or immediately blocked.
pub fn slide_piece(board: &Board, state: &State, piece: usize, dir: Dir) -> Option<State> {
    let (pos, reached) = slide_target(board, state, piece, dir)?;
    trace!(
        "piece {} slid {} from {} to {}",
        piece,
        dir,
        state.players()[piece],
        pos
    );
    Some(state.with_piece_moved(piece, pos, reached))
}

/// Where a piece would stop and whether that's its goal, without building a new state.
pub(crate) fn slide_target(
    board: &Board,
    state: &State,
    piece: usize,
    dir: Dir,
) -> Option<(Pos, bool)> {
    if state.reached()[piece] {
        return None;
    }

    let start = state.players()[piece];
    let goal = board.goals()[piece];
    let mut cur = start;
    let mut reached = false;
    loop {
        let next = cur + dir;
        if !can_enter(board, state, piece, next) {
            break;
        }
        cur = next;
        if cur == goal {
            reached = true;
            break;
        }
    }

    if cur == start {
        None
    } else {
        Some((cur, reached))
    }
}

/// Other pieces block whether they are on their goal or not.
fn can_enter(board: &Board, state: &State, piece: usize, pos: Pos) -> bool {
    !board.is_wall(pos)
        && state
            .players()
            .iter()
            .enumerate()
            .all(|(other, &other_pos)| other == piece || other_pos != pos)
}
