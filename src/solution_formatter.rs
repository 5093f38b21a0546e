use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::Board;
use crate::moves::Moves;
use crate::state::State;

/// Every state of a solution, each labeled with the slide that led to it.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    states: &'a [State],
    moves: &'a Moves,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    /// `moves` has to be reconstructed from `states`.
    pub fn new(board: &'a Board, states: &'a [State], moves: &'a Moves, format: Format) -> Self {
        assert_eq!(states.len(), moves.move_cnt() + 1);
        Self {
            board,
            states,
            moves,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial:")?;
        writeln!(f, "{}", self.board.format_with_state(self.format, &self.states[0]))?;
        for (i, (mov, state)) in self.moves.iter().zip(&self.states[1..]).enumerate() {
            writeln!(f, "{}: {}", i + 1, mov)?;
            writeln!(f, "{}", self.board.format_with_state(self.format, state))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
