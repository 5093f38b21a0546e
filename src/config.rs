use std::fmt::{self, Display, Formatter};

/// How long interactive mode waits between replayed states.
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Same characters as level files: `#` wall, `A`-`Z` pieces, `a`-`z` goals, `.` empty.
    Letters,
    /// `X` wall, `G` goal, `P` piece, `.` empty - cells separated by spaces.
    Classic,
}

impl Default for Format {
    fn default() -> Self {
        Format::Letters
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Letters => write!(f, "letters"),
            Format::Classic => write!(f, "classic"),
        }
    }
}
