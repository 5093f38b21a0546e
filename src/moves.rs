use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{piece_letter, Dir};

/// One slide - which piece and where to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: usize,
    pub dir: Dir,
}

impl Move {
    pub fn new(piece: usize, dir: Dir) -> Self {
        Move { piece, dir }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", piece_letter(self.piece), self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    /// Number of distinct pieces that moved at least once.
    pub fn piece_cnt(&self) -> usize {
        let mut pieces: Vec<_> = self.0.iter().map(|m| m.piece).collect();
        pieces.sort();
        pieces.dedup();
        pieces.len()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
