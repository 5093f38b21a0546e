//! Playing a level by hand.
//!
//! Every keypress slides all pieces that can move in piece order. Whether and how far a piece
//! moves is decided by the board as it was before the keypress, the moves themselves add up
//! and each one becomes a step of the history, which is then replayed.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::Format;
use crate::data::Dir;
use crate::level::Level;
use crate::slide::slide_target;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Length of the replay log - one entry per piece that moved.
    pub steps: usize,
    pub won: bool,
}

pub fn play<R: BufRead, W: Write>(
    level: &Level,
    format: Format,
    delay: Duration,
    input: R,
    output: &mut W,
) -> io::Result<PlayOutcome> {
    let board = &level.board;
    let mut state = level.state.clone();
    let mut history: Vec<State> = Vec::new();
    let mut lines = input.lines();

    loop {
        writeln!(output, "{}", board.format_with_state(format, &state))?;
        write!(output, "Enter your move (WASD): ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("Input ended after {} steps", history.len());
                writeln!(output)?;
                return Ok(PlayOutcome {
                    steps: history.len(),
                    won: false,
                });
            }
        };

        let dir = match parse_move(&line) {
            Some(dir) => dir,
            None => {
                writeln!(output, "Wrong! Please enter W, A, S, or D.")?;
                continue;
            }
        };

        let before = state.clone();
        for piece in 0..before.piece_count() {
            if let Some((pos, reached)) = slide_target(board, &before, piece, dir) {
                state = state.with_piece_moved(piece, pos, reached);
                history.push(state.clone());
            }
        }

        for (i, past_state) in history.iter().enumerate() {
            writeln!(output, "Step {}:", i + 1)?;
            writeln!(output, "{}", board.format_with_state(format, past_state))?;
            output.flush()?;
            if delay > Duration::from_millis(0) {
                thread::sleep(delay);
            }
        }

        if state.is_solved() {
            writeln!(output, "You Won!")?;
            return Ok(PlayOutcome {
                steps: history.len(),
                won: true,
            });
        }
    }
}

fn parse_move(line: &str) -> Option<Dir> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Dir::from_key(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run(level: &str, input: &str) -> (PlayOutcome, String) {
        let level: Level = level.parse().unwrap();
        let mut output = Vec::new();
        let outcome = play(
            &level,
            Format::Letters,
            Duration::from_millis(0),
            Cursor::new(input),
            &mut output,
        )
        .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parsing_moves() {
        assert_eq!(parse_move("w"), Some(Dir::Up));
        assert_eq!(parse_move(" D \r"), Some(Dir::Right));
        assert_eq!(parse_move("ww"), None);
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("q"), None);
    }

    #[test]
    fn winning() {
        let (outcome, output) = run("A\n.\na", "s\n");
        assert_eq!(outcome, PlayOutcome { steps: 1, won: true });
        let expected = "\
A
.
a

Enter your move (WASD): Step 1:
.
.
a

You Won!
";
        assert_eq!(output, expected);
    }

    #[test]
    fn wrong_keys_and_eof() {
        let (outcome, output) = run("A\n.\na", "x\nw\n");
        assert_eq!(outcome, PlayOutcome { steps: 0, won: false });
        assert!(output.contains("Wrong! Please enter W, A, S, or D.\n"));
        assert!(!output.contains("Step"));
        assert!(!output.contains("You Won!"));
    }

    #[test]
    fn replays_whole_history() {
        let level = r"
#####
#A.b#
#...#
#B.a#
#####
";
        // right moves both, up only B (A is in the corner), down only B (B is in A's way)
        let (outcome, output) = run(level, "d\nw\ns\n");
        assert_eq!(outcome, PlayOutcome { steps: 4, won: false });
        assert_eq!(output.matches("Step 1:").count(), 3);
        assert_eq!(output.matches("Step 2:").count(), 3);
        assert_eq!(output.matches("Step 3:").count(), 2);
        assert_eq!(output.matches("Step 4:").count(), 1);
    }

    #[test]
    fn pieces_are_blocked_by_cells_before_the_keypress() {
        // A leaves, but B still sees it where it was
        let (outcome, output) = run("BA...\n...ba", "d\n");
        assert_eq!(outcome, PlayOutcome { steps: 1, won: false });
        assert!(output.contains("Step 1:\nB...A\n...ba\n"));
        assert!(!output.contains("Step 2:"));

        // next keypress B can follow
        let (outcome, output) = run("BA...\n...ba", "d\nd\n");
        assert_eq!(outcome, PlayOutcome { steps: 2, won: false });
        assert!(output.contains("Step 2:\n...BA\n...ba\n"));
    }

    #[test]
    fn moves_add_up() {
        // both pieces move on one keypress, the second step shows both moved
        let (outcome, output) = run("A..\nB..\n.ab", "d\n");
        assert_eq!(outcome, PlayOutcome { steps: 2, won: false });
        assert!(output.contains("Step 1:\n..A\nB..\n.ab\n"));
        assert!(output.contains("Step 2:\n..A\n..B\n.ab\n"));
    }
}
