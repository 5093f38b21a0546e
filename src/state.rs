use crate::data::Pos;

/// Positions of all pieces plus which of them already reached their goal.
///
/// Walls and goals never change so they live in `Board`, not here.
/// States are never modified after creation, moving a piece produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    players: Vec<Pos>,
    reached: Vec<bool>,
}

/// Identity of a state for detecting revisits.
///
/// Borrows from the state so states allocated for the whole search can be looked up without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint<'a> {
    players: &'a [Pos],
    reached: &'a [bool],
}

impl State {
    /// Initial state - no piece counts as reached even if it starts on its goal.
    pub(crate) fn new(players: Vec<Pos>) -> State {
        let reached = vec![false; players.len()];
        State { players, reached }
    }

    pub fn players(&self) -> &[Pos] {
        &self.players
    }

    pub fn reached(&self) -> &[bool] {
        &self.reached
    }

    pub fn piece_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_solved(&self) -> bool {
        self.reached.iter().all(|&r| r)
    }

    pub fn fingerprint(&self) -> Fingerprint<'_> {
        Fingerprint {
            players: &self.players,
            reached: &self.reached,
        }
    }

    pub fn piece_at(&self, pos: Pos) -> Option<usize> {
        self.players.iter().position(|&p| p == pos)
    }

    /// Copy with one piece moved. The reached flag is never cleared.
    pub(crate) fn with_piece_moved(&self, piece: usize, pos: Pos, reached: bool) -> State {
        let mut new_state = self.clone();
        new_state.players[piece] = pos;
        new_state.reached[piece] |= reached;
        new_state
    }
}
