//! Towers of Hanoi Solver
//!
//! Solves the classic three-peg puzzle: N disks stacked on the left peg,
//! largest at the bottom, migrate to a target peg one legal move at a time.
//! Prints the board before and after solving, and can replay the full move
//! sequence step by step.

use clap::{Parser, Subcommand};

use hanoi::peg::PegId;
use hanoi::puzzle::Puzzle;
use hanoi::render;

/// Solves the Towers of Hanoi puzzle and prints the board.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of disks to play with.
    #[arg(
        long,
        short = 'n',
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=20)
    )]
    disks: u32,

    /// Peg the tower should end up on (left, center, or right).
    #[arg(long, default_value = "right")]
    target: PegId,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the final board and move count.
    Solve,
    /// Solve the puzzle, then replay it printing the board after every move.
    Trace,
    /// Print only the number of moves the solution takes.
    Count,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve) | None => run_solve(cli.disks, cli.target),
        Some(Command::Trace) => run_trace(cli.disks, cli.target),
        Some(Command::Count) => run_count(cli.disks, cli.target),
    }
}

/// Solves the puzzle and prints the board before and after.
fn run_solve(disks: u32, target: PegId) {
    let mut puzzle = Puzzle::new(disks);
    print!("{}", render::format_board(&puzzle));
    if let Err(e) = puzzle.relocate(disks, target) {
        eprintln!("solve failed: {e}");
        return;
    }
    println!();
    print!("{}", render::format_board(&puzzle));
    println!();
    println!("Solved in {} moves", puzzle.move_count());
}

/// Solves the puzzle, then replays the move log step by step.
fn run_trace(disks: u32, target: PegId) {
    let mut puzzle = Puzzle::new(disks);
    if let Err(e) = puzzle.relocate(disks, target) {
        eprintln!("solve failed: {e}");
        return;
    }

    let mut replay = Puzzle::new(disks);
    print!("{}", render::format_board(&replay));
    for (number, record) in puzzle.moves().iter().enumerate() {
        if let Err(e) = replay.move_disk(record.from, record.to) {
            eprintln!("replay failed at move {}: {e}", number + 1);
            return;
        }
        println!();
        println!("move {}: {record}", number + 1);
        print!("{}", render::format_board(&replay));
    }
    println!();
    println!("Solved in {} moves", puzzle.move_count());
}

/// Prints the number of moves without showing the board.
fn run_count(disks: u32, target: PegId) {
    let mut puzzle = Puzzle::new(disks);
    if let Err(e) = puzzle.relocate(disks, target) {
        eprintln!("solve failed: {e}");
        return;
    }
    println!("{} moves", puzzle.move_count());
}
