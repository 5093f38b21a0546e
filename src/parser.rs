use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{goal_letter, piece_letter, Pos, MAX_PIECES};
use crate::level::{Level, LevelErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    DuplicatePiece(char),
    DuplicateGoal(char),
    MissingPiece(char),
    MissingGoal(char),
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::DuplicatePiece(letter) => write!(f, "Piece {} appears more than once", letter),
            ParserErr::DuplicateGoal(letter) => write!(f, "Goal {} appears more than once", letter),
            ParserErr::MissingPiece(letter) => write!(f, "Missing piece {}", letter),
            ParserErr::MissingGoal(letter) => write!(f, "Missing goal {}", letter),
            ParserErr::Level(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Format:
/// `#` is a wall, `.` or space is empty,
/// `A`-`Z` are pieces, `a`-`z` their goals (piece `A` belongs to goal `a`).
///
/// Lines can have different lengths, missing cells are empty.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n');

    let mut rows = 0;
    let mut cols = 0;
    let mut walls = Vec::new();
    let mut pieces = [None; MAX_PIECES];
    let mut goals = [None; MAX_PIECES];

    for (r, line) in level.lines().enumerate() {
        rows += 1;
        for (c, cur_char) in line.chars().enumerate() {
            cols = cols.max(c + 1);
            let pos = Pos::new(r as i32, c as i32);

            match cur_char {
                '#' => walls.push(pos),
                '.' | ' ' => {}
                'A'..='Z' => {
                    let slot = &mut pieces[(cur_char as u8 - b'A') as usize];
                    if slot.is_some() {
                        return Err(ParserErr::DuplicatePiece(cur_char));
                    }
                    *slot = Some(pos);
                }
                'a'..='z' => {
                    let slot = &mut goals[(cur_char as u8 - b'a') as usize];
                    if slot.is_some() {
                        return Err(ParserErr::DuplicateGoal(cur_char));
                    }
                    *slot = Some(pos);
                }
                _ => return Err(ParserErr::Pos(r, c)),
            }
        }
    }

    // letters have to be used in order without gaps
    let count = (0..MAX_PIECES)
        .rev()
        .find(|&i| pieces[i].is_some() || goals[i].is_some())
        .map_or(0, |last| last + 1);
    let mut players = Vec::with_capacity(count);
    let mut goal_positions = Vec::with_capacity(count);
    for i in 0..count {
        players.push(pieces[i].ok_or_else(|| ParserErr::MissingPiece(piece_letter(i)))?);
        goal_positions.push(goals[i].ok_or_else(|| ParserErr::MissingGoal(goal_letter(i)))?);
    }

    Ok(Level::new(rows, cols, &walls, &players, &goal_positions)?)
}
