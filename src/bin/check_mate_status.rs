use std::env;
use std::process::ExitCode;

use chess_rules::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        if let Err(e) = game.play_uci(text) {
            eprintln!("{text}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("in_check: {}", game.is_in_check());
    println!("legal_moves: {}", legal_moves.len());
    println!("fen: {}", game.fen());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
