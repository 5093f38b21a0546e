use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{goal_letter, piece_letter, Cell, Pos};
use crate::map::Board;
use crate::state::State;

pub struct MapFormatter<'a> {
    board: &'a Board,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: Option<&'a State>, format: Format) -> Self {
        Self {
            board,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                let cell = self.board.cell(Pos::new(r as i32, c as i32), self.state);
                match self.format {
                    Format::Letters => Self::write_cell_letters(cell, f)?,
                    Format::Classic => {
                        if c > 0 {
                            write!(f, " ")?;
                        }
                        Self::write_cell_classic(cell, f)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_letters(cell: Cell, f: &mut Formatter<'_>) -> fmt::Result {
        match cell {
            Cell::Wall => write!(f, "#"),
            Cell::Goal(i) => write!(f, "{}", goal_letter(i)),
            Cell::Piece(i) => write!(f, "{}", piece_letter(i)),
            Cell::Empty => write!(f, "."),
        }
    }

    fn write_cell_classic(cell: Cell, f: &mut Formatter<'_>) -> fmt::Result {
        match cell {
            Cell::Wall => write!(f, "X"),
            Cell::Goal(_) => write!(f, "G"),
            Cell::Piece(_) => write!(f, "P"),
            Cell::Empty => write!(f, "."),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
