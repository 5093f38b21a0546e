use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Cell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The part of a puzzle that never changes: bounds, walls and goals.
///
/// Goal `i` belongs to piece `i`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    walls: Vec2d<bool>,
    goals: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(walls: Vec2d<bool>, goals: Vec<Pos>) -> Self {
        Board { walls, goals }
    }

    pub fn rows(&self) -> usize {
        self.walls.rows()
    }

    pub fn cols(&self) -> usize {
        self.walls.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.walls.contains(pos)
    }

    /// Out of bounds counts as a wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        !self.walls.contains(pos) || self.walls[pos]
    }

    pub fn goal_at(&self, pos: Pos) -> Option<usize> {
        self.goals.iter().position(|&g| g == pos)
    }

    /// Walls hide goals and goals hide pieces.
    pub fn cell(&self, pos: Pos, state: Option<&State>) -> Cell {
        if self.is_wall(pos) {
            return Cell::Wall;
        }
        if let Some(goal) = self.goal_at(pos) {
            return Cell::Goal(goal);
        }
        match state.and_then(|state| state.piece_at(pos)) {
            Some(piece) => Cell::Piece(piece),
            None => Cell::Empty,
        }
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(self, None, format)
    }

    pub fn format_with_state<'a>(&'a self, format: Format, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state), format)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Letters))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn cells() {
        let level: Level = r"
#A.a
.B#b
"
        .parse()
        .unwrap();
        let board = &level.board;
        let state = &level.state;

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.cell(Pos::new(0, 0), Some(state)), Cell::Wall);
        assert_eq!(board.cell(Pos::new(0, 1), Some(state)), Cell::Piece(0));
        assert_eq!(board.cell(Pos::new(0, 1), None), Cell::Empty);
        assert_eq!(board.cell(Pos::new(0, 2), Some(state)), Cell::Empty);
        assert_eq!(board.cell(Pos::new(0, 3), Some(state)), Cell::Goal(0));
        assert_eq!(board.cell(Pos::new(1, 1), Some(state)), Cell::Piece(1));
        assert_eq!(board.cell(Pos::new(1, 2), Some(state)), Cell::Wall);
        assert_eq!(board.cell(Pos::new(1, 3), Some(state)), Cell::Goal(1));
        assert_eq!(board.cell(Pos::new(5, 5), Some(state)), Cell::Wall);

        assert!(board.is_wall(Pos::new(-1, 0)));
        assert!(!board.is_wall(Pos::new(1, 0)));
    }

    #[test]
    fn goal_hides_piece() {
        use crate::data::Dir;
        use crate::slide::slide_piece;

        // a piece standing on a goal can only be created by moving there
        let level: Level = "A.b\n..a\nB..".parse().unwrap();
        let state = slide_piece(&level.board, &level.state, 0, Dir::Right).unwrap();
        assert_eq!(state.players()[0], Pos::new(0, 2));
        assert_eq!(level.board.cell(Pos::new(0, 0), Some(&state)), Cell::Empty);
        assert_eq!(level.board.cell(Pos::new(0, 2), Some(&state)), Cell::Goal(1));
    }
}
