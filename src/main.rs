// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]

use std::env;
use std::io;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgGroup};
use log::debug;

use slide_solver::config::{Format, DEFAULT_DELAY_MS};
use slide_solver::play::play;
use slide_solver::solution_formatter::SolutionFormatter;
use slide_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("slide-solver")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("letters")
                .short("l")
                .long("letters")
                .help("print boards using the level file format (default)"),
        )
        .arg(
            Arg::with_name("classic")
                .short("c")
                .long("classic")
                .help("print boards as X (wall), G (goal), P (piece) and . (empty)"),
        )
        .group(ArgGroup::with_name("format").arg("letters").arg("classic"))
        .arg(
            Arg::with_name("play")
                .short("p")
                .long("play")
                .help("play the level using WASD instead of solving it"),
        )
        .arg(
            Arg::with_name("delay")
                .short("d")
                .long("delay")
                .takes_value(true)
                .value_name("MS")
                .requires("play")
                .help("pause between replayed states when playing"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .conflicts_with("play")
                .help("print every visited state after solving"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print progress while solving"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("classic") {
        Format::Classic
    } else {
        Format::Letters
    };
    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => println!(
                "Can't load level {} in {}: {}",
                path,
                current_dir.display(),
                err
            ),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });
    debug!("Loaded level:\n{}", level);

    if matches.is_present("play") {
        let delay = match matches.value_of("delay") {
            None => DEFAULT_DELAY_MS,
            Some(delay) => delay.parse().unwrap_or_else(|err| {
                println!("Invalid delay {}: {}", delay, err);
                process::exit(1);
            }),
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let outcome = play(
            &level,
            format,
            Duration::from_millis(delay),
            stdin.lock(),
            &mut stdout.lock(),
        );
        if let Err(err) = outcome {
            println!("Failed to play: {}", err);
            process::exit(1);
        }
        return;
    }

    println!("Solving {}...", path);
    let output = level.solve(!matches.is_present("quiet"));
    println!("{}", output.stats);

    match output.path_states {
        Some(ref states) => {
            let moves = output.moves().unwrap();
            println!("Found solution:");
            print!(
                "{}",
                SolutionFormatter::new(&level.board, states, &moves, format)
            );
            println!("{} steps", moves.move_cnt());
            println!("Moves: {}", moves);
            println!("Pieces moved: {}", moves.piece_cnt());
        }
        None => println!("No solution"),
    }

    if matches.is_present("trace") {
        println!("Visited states ({}):", output.nodes_visited());
        for state in &output.trace {
            println!("{}", level.board.format_with_state(format, state));
        }
    }
}
