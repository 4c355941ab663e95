//! Line-oriented chess front-end.
//!
//! Reads coordinate moves (`e2e4`, `e7e8n`) and commands from stdin. One side
//! can be handed to a UCI engine (`--engine <path>`) or to the random mover
//! (`--random`).

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use log::error;

use chess_rules::board::{Color, Square};
use chess_rules::engine::{
    BackgroundSuggester, EngineConfig, EngineError, MoveSuggester, RandomMover, UciEngine,
};
use chess_rules::Game;

/// How often the loop checks on a thinking engine
const THINK_POLL_MS: u64 = 50;

const HELP: &str = "\
commands:
  <move>        play a move in coordinate form, e.g. e2e4 or e7e8n
  moves [sq]    list legal moves, optionally only from one square
  undo          take back the last move (a full turn against an engine)
  go            let the engine move for the side to move
  fen           print the position as FEN
  board         print the board
  new           start a new game
  quit          exit";

struct Options {
    engine: Option<EngineConfig>,
    random: bool,
    engine_plays: Color,
    verbose: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        engine: None,
        random: false,
        engine_plays: Color::Black,
        verbose: false,
    };
    let mut movetime = None;
    let mut engine_args = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--engine" => {
                let path = args.next().ok_or("--engine needs a path")?;
                options.engine = Some(EngineConfig::new(path));
            }
            "--engine-arg" => {
                engine_args.push(args.next().ok_or("--engine-arg needs a value")?);
            }
            "--movetime" => {
                let ms = args.next().ok_or("--movetime needs milliseconds")?;
                movetime = Some(ms.parse::<u64>().map_err(|e| format!("--movetime: {e}"))?);
            }
            "--engine-plays" => {
                options.engine_plays = match args.next().as_deref() {
                    Some("white") => Color::White,
                    Some("black") => Color::Black,
                    _ => return Err("--engine-plays takes white or black".to_string()),
                };
            }
            "--random" => options.random = true,
            "--verbose" => options.verbose = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    if movetime.is_some() || !engine_args.is_empty() {
        let mut config = options
            .engine
            .take()
            .ok_or("--movetime and --engine-arg need --engine")?;
        for arg in engine_args {
            config = config.with_arg(arg);
        }
        if let Some(ms) = movetime {
            config = config.with_movetime_ms(ms);
        }
        options.engine = Some(config);
    }
    Ok(options)
}

fn build_suggester(
    options: &Options,
) -> Result<Option<BackgroundSuggester<Box<dyn MoveSuggester + Send>>>, EngineError> {
    let suggester: Box<dyn MoveSuggester + Send> = match (&options.engine, options.random) {
        (Some(config), _) => Box::new(UciEngine::spawn(config.clone())?),
        (None, true) => Box::new(RandomMover::new()),
        (None, false) => return Ok(None),
    };
    Ok(Some(BackgroundSuggester::new(suggester)))
}

fn print_board(game: &Game) {
    println!("{}", game.board());
    println!("{} to move", game.side_to_move());
}

fn report_status(game: &Game) {
    let status = game.status();
    if status.is_over() {
        println!("{status}");
    } else if game.is_in_check() {
        println!("check");
    }
}

/// Ask the suggester for a move and play it. Prints dots while it thinks.
fn engine_move(game: &mut Game, suggester: &BackgroundSuggester<Box<dyn MoveSuggester + Send>>) {
    let mut pending = match suggester.request(game.fen()) {
        Ok(pending) => pending,
        Err(e) => {
            error!("could not start {}: {e}", suggester.name());
            return;
        }
    };

    eprint!("{} thinking", suggester.name());
    let answer = loop {
        if let Some(answer) = pending.poll() {
            break answer;
        }
        eprint!(".");
        let _ = io::stderr().flush();
        thread::sleep(Duration::from_millis(THINK_POLL_MS));
    };
    eprintln!();

    match answer {
        Ok(mv) => match game.play(mv) {
            Ok(()) => println!("{} plays {mv}", suggester.name()),
            Err(e) => error!("{} suggested {e}", suggester.name()),
        },
        Err(e) => error!("{}: {e}", suggester.name()),
    }
}

fn list_moves(game: &Game, square: Option<&str>) {
    let moves = match square {
        Some(text) => match text.parse::<Square>() {
            Ok(from) => game.legal_moves_from(from),
            Err(e) => {
                println!("error: {e}");
                return;
            }
        },
        None => game.legal_moves(),
    };
    let text: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("{} legal: {}", moves.len(), text.join(" "));
}

fn run(options: &Options) -> Result<(), EngineError> {
    let suggester = build_suggester(options)?;
    let engine_side = suggester.as_ref().map(|_| options.engine_plays);
    let mut game = Game::new();

    print_board(&game);
    if engine_side == Some(game.side_to_move()) {
        if let Some(s) = &suggester {
            engine_move(&mut game, s);
            print_board(&game);
        }
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => print_board(&game),
            "fen" => println!("{}", game.fen()),
            "moves" => list_moves(&game, words.next()),
            "new" => {
                game.reset();
                if let (Some(s), Some(side)) = (&suggester, engine_side) {
                    if side == game.side_to_move() {
                        engine_move(&mut game, s);
                    }
                }
                print_board(&game);
            }
            "undo" => {
                if !game.undo() {
                    println!("nothing to undo");
                    continue;
                }
                // Skip back past the engine's reply so the player is on move again.
                if engine_side == Some(game.side_to_move()) {
                    game.undo();
                }
                print_board(&game);
            }
            "go" => match &suggester {
                Some(s) if !game.status().is_over() => {
                    engine_move(&mut game, s);
                    print_board(&game);
                    report_status(&game);
                }
                Some(_) => report_status(&game),
                None => println!("no engine configured"),
            },
            text => {
                if game.status().is_over() {
                    println!("game over: {}", game.status());
                    continue;
                }
                if let Err(e) = game.play_uci(text) {
                    println!("error: {e}");
                    continue;
                }
                if let Some(s) = &suggester {
                    if engine_side == Some(game.side_to_move()) && !game.status().is_over() {
                        engine_move(&mut game, s);
                    }
                }
                print_board(&game);
                report_status(&game);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!(
                "usage: chess_rules [--engine <path>] [--movetime <ms>] \
                 [--engine-arg <arg>]... [--engine-plays white|black] [--random] [--verbose]"
            );
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
