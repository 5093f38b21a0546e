use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::config::Format;
use crate::data::{Pos, MAX_PIECES};
use crate::map::Board;
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    Empty,
    PiecesGoals(usize, usize),
    TooMany(usize),
    OutOfBounds(Pos),
    OnWall(Pos),
    SharedCell(Pos),
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::Empty => write!(f, "Level has no rows or no columns"),
            LevelErr::PiecesGoals(pieces, goals) => {
                write!(f, "Different number of pieces ({}) and goals ({})", pieces, goals)
            }
            LevelErr::TooMany(pieces) => {
                write!(f, "{} pieces - at most {} are supported", pieces, MAX_PIECES)
            }
            LevelErr::OutOfBounds(pos) => write!(f, "Position {} is outside the level", pos),
            LevelErr::OnWall(pos) => write!(f, "Piece or goal on a wall at {}", pos),
            LevelErr::SharedCell(pos) => write!(f, "Multiple pieces at {}", pos),
        }
    }
}

impl Error for LevelErr {}

/// A validated puzzle - the board and the initial state.
#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    /// Checks everything the simulator relies on so it never has to:
    /// pieces and goals pair up, are inside the grid, not on walls and pieces don't share cells.
    ///
    /// Goals may share a cell, such a level just has no solution.
    pub fn new(
        rows: usize,
        cols: usize,
        walls: &[Pos],
        players: &[Pos],
        goals: &[Pos],
    ) -> Result<Level, LevelErr> {
        if rows == 0 || cols == 0 {
            return Err(LevelErr::Empty);
        }
        if players.len() != goals.len() {
            return Err(LevelErr::PiecesGoals(players.len(), goals.len()));
        }
        if players.len() > MAX_PIECES {
            return Err(LevelErr::TooMany(players.len()));
        }

        let mut grid = Vec2d::new(rows, cols, false);
        for &wall in walls {
            if !grid.contains(wall) {
                return Err(LevelErr::OutOfBounds(wall));
            }
            grid[wall] = true;
        }

        let mut occupied = FnvHashSet::default();
        for &pos in players {
            check_free(&grid, pos)?;
            if !occupied.insert(pos) {
                return Err(LevelErr::SharedCell(pos));
            }
        }
        for &pos in goals {
            check_free(&grid, pos)?;
        }

        debug!(
            "Level {}x{}, {} walls, {} pieces",
            rows,
            cols,
            walls.len(),
            players.len()
        );
        Ok(Level {
            board: Board::new(grid, goals.to_vec()),
            state: State::new(players.to_vec()),
        })
    }

    pub fn letters(&self) -> MapFormatter<'_> {
        self.format(Format::Letters)
    }

    pub fn classic(&self) -> MapFormatter<'_> {
        self.format(Format::Classic)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        self.board.format_with_state(format, &self.state)
    }
}

fn check_free(grid: &Vec2d<bool>, pos: Pos) -> Result<(), LevelErr> {
    if !grid.contains(pos) {
        Err(LevelErr::OutOfBounds(pos))
    } else if grid[pos] {
        Err(LevelErr::OnWall(pos))
    } else {
        Ok(())
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Solve;

    fn p(r: i32, c: i32) -> Pos {
        Pos::new(r, c)
    }

    #[test]
    fn valid() {
        let level = Level::new(3, 3, &[p(1, 1)], &[p(0, 0)], &[p(2, 2)]).unwrap();
        assert_eq!(level.board.rows(), 3);
        assert_eq!(level.board.cols(), 3);
        assert_eq!(level.board.goals(), &[p(2, 2)]);
        assert_eq!(level.state.players(), &[p(0, 0)]);
        assert_eq!(level.state.reached(), &[false]);
    }

    #[test]
    fn piece_starting_on_goal_is_not_reached() {
        let level = Level::new(1, 3, &[], &[p(0, 1)], &[p(0, 1)]).unwrap();
        assert_eq!(level.state.reached(), &[false]);
        assert!(!level.state.is_solved());
    }

    #[test]
    fn invalid() {
        assert_eq!(Level::new(0, 3, &[], &[], &[]).unwrap_err(), LevelErr::Empty);
        assert_eq!(Level::new(3, 0, &[], &[], &[]).unwrap_err(), LevelErr::Empty);
        assert_eq!(
            Level::new(3, 3, &[], &[p(0, 0), p(0, 1)], &[p(2, 2)]).unwrap_err(),
            LevelErr::PiecesGoals(2, 1)
        );
        assert_eq!(
            Level::new(3, 3, &[p(3, 0)], &[], &[]).unwrap_err(),
            LevelErr::OutOfBounds(p(3, 0))
        );
        assert_eq!(
            Level::new(3, 3, &[], &[p(0, -1)], &[p(2, 2)]).unwrap_err(),
            LevelErr::OutOfBounds(p(0, -1))
        );
        assert_eq!(
            Level::new(3, 3, &[], &[p(0, 0)], &[p(2, 3)]).unwrap_err(),
            LevelErr::OutOfBounds(p(2, 3))
        );
        assert_eq!(
            Level::new(3, 3, &[p(1, 1)], &[p(1, 1)], &[p(2, 2)]).unwrap_err(),
            LevelErr::OnWall(p(1, 1))
        );
        assert_eq!(
            Level::new(3, 3, &[p(1, 1)], &[p(0, 0)], &[p(1, 1)]).unwrap_err(),
            LevelErr::OnWall(p(1, 1))
        );
        assert_eq!(
            Level::new(3, 3, &[], &[p(0, 0), p(0, 0)], &[p(2, 2), p(2, 1)]).unwrap_err(),
            LevelErr::SharedCell(p(0, 0))
        );
    }

    #[test]
    fn shared_goal_is_unsolvable() {
        // whichever piece gets to the goal first blocks the other
        let level = Level::new(1, 3, &[], &[p(0, 0), p(0, 2)], &[p(0, 1), p(0, 1)]).unwrap();
        assert_eq!(level.board.goals(), &[p(0, 1), p(0, 1)]);
        assert_eq!(level.to_string(), "AaB\n");

        let output = level.solve(false);
        assert!(output.path_states.is_none());
        assert!(output.trace.iter().all(|state| !state.is_solved()));
    }

    #[test]
    fn too_many_pieces() {
        let players: Vec<_> = (0..27).map(|c| p(0, c)).collect();
        let goals: Vec<_> = (0..27).map(|c| p(1, c)).collect();
        assert_eq!(
            Level::new(2, 27, &[], &players, &goals).unwrap_err(),
            LevelErr::TooMany(27)
        );
    }

    #[test]
    fn formatting_level() {
        let letters = "\
#A.a
.B#b
";
        let classic = "\
X P . G
. P X G
";
        let level: Level = letters.parse().unwrap();
        assert_eq!(level.to_string(), letters);
        assert_eq!(format!("{:?}", level), letters);
        assert_eq!(level.letters().to_string(), letters);
        assert_eq!(level.classic().to_string(), classic);
        assert_eq!(level.format(Format::Classic).to_string(), classic);
    }
}
