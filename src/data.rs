use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Pieces and goals are named by letters so this is also the most pieces a level can have.
pub const MAX_PIECES: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Direction of a straight line from `self` to `other`.
    ///
    /// Panics if they're the same or not in the same row or column.
    pub(crate) fn dir_to(self, other: Pos) -> Dir {
        match ((other.r - self.r).signum(), (other.c - self.c).signum()) {
            (-1, 0) => Dir::Up,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            (0, 1) => Dir::Right,
            _ => panic!("{} and {} are not in a straight line", self, other),
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Expansion order - the search pushes successors in this order so the last one is explored first.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// Row and column offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn from_delta(dr: i32, dc: i32) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|dir| dir.delta() == (dr, dc))
    }

    /// WASD, case insensitive.
    pub fn from_key(key: char) -> Option<Dir> {
        match key.to_ascii_uppercase() {
            'W' => Some(Dir::Up),
            'S' => Some(Dir::Down),
            'A' => Some(Dir::Left),
            'D' => Some(Dir::Right),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        };
        write!(f, "{}", c)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

/// What a cell looks like when drawn - earlier variants hide later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Goal(usize),
    Piece(usize),
    Empty,
}

pub(crate) fn piece_letter(index: usize) -> char {
    debug_assert!(index < MAX_PIECES);
    (b'A' + index as u8) as char
}

pub(crate) fn goal_letter(index: usize) -> char {
    debug_assert!(index < MAX_PIECES);
    (b'a' + index as u8) as char
}
