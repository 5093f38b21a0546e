// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod play;
pub mod slide;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::level::Level;
use crate::solver::SolverOutput;

pub use crate::parser::ParserErr;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, print_status: bool) -> SolverOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_levels() {
        let levels = [
            ("levels/one-way.txt", Some(2), 2),
            ("levels/enclosed.txt", None, 1),
            ("levels/two-pieces.txt", Some(8), 11),
            ("levels/original.txt", Some(212), 592),
        ];
        for &(path, expected_path_states, expected_visited) in levels.iter() {
            test_level(path, expected_path_states, expected_visited);
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_level(level_path: &str, expected_path_states: Option<usize>, visited: usize) {
        let level = level_path.load_level().unwrap();
        let output = level.solve(false);

        println!("{}", level_path);
        println!("{:?}", output);
        assert_eq!(
            output.path_states.as_ref().map(|states| states.len()),
            expected_path_states
        );
        assert_eq!(output.nodes_visited(), visited);

        if let Some(ref states) = output.path_states {
            assert_eq!(states[0], level.state);
            assert!(states.last().unwrap().is_solved());
            let moves = output.moves().unwrap();
            assert_eq!(moves.move_cnt(), states.len() - 1);
        }
    }

    #[test]
    fn missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}
