use crate::moves::{Move, Moves};
use crate::solver::SearchNode;
use crate::state::State;

/// States from the initial one to `final_node`, following prev links.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<State> {
    let mut states = Vec::with_capacity(final_node.dist + 1);
    let mut cur = Some(final_node);
    while let Some(node) = cur {
        states.push(node.state.clone());
        cur = node.prev;
    }
    states.reverse();
    states
}

/// Which piece slid where between each pair of consecutive states.
///
/// Panics if two consecutive states don't differ in exactly one piece.
pub fn reconstruct_moves(path: &[State]) -> Moves {
    let mut moves = Moves::default();
    for pair in path.windows(2) {
        moves.add(move_between_states(&pair[0], &pair[1]));
    }
    moves
}

fn move_between_states(old: &State, new: &State) -> Move {
    let mut changed = old
        .players()
        .iter()
        .zip(new.players())
        .enumerate()
        .filter(|(_, (old_pos, new_pos))| old_pos != new_pos);

    let (piece, (&old_pos, &new_pos)) = changed
        .next()
        .expect("There must be exactly one slide between states");
    assert!(
        changed.next().is_none(),
        "Only one piece can change its position at a time"
    );

    Move::new(piece, old_pos.dir_to(new_pos))
}
