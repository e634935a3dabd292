//! Reckon command-line game.
//!
//! Set `RUST_LOG` to see generator and game diagnostics, e.g.
//! `RUST_LOG=debug reckon play`.

use std::{
    io::{self, Write as _},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as _;
use reckon_cli::{
    CliError,
    args::{Cli, Command, SeedArgs},
    play::Session,
};
use reckon_core::Difficulty;
use reckon_game::{Game, GameMode};
use reckon_generator::{GeneratedPuzzle, PuzzleGenerator};
use reckon_solver::SearchSolver;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            difficulty,
            seed,
            show_solution,
        } => generate(difficulty, &seed, show_solution),
        Command::Solve {
            numbers,
            target,
            ops,
        } => solve(numbers, target, &SearchSolver::new(ops.operations())),
        Command::Play {
            difficulty,
            mode,
            seed,
        } => play(difficulty, mode, &seed),
    }
}

fn generate_puzzle(difficulty: Difficulty, seed: &SeedArgs) -> GeneratedPuzzle {
    let generator = PuzzleGenerator::new(difficulty);
    match seed.resolve() {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    }
}

fn generate(
    difficulty: Difficulty,
    seed: &SeedArgs,
    show_solution: bool,
) -> Result<(), CliError> {
    let puzzle = generate_puzzle(difficulty, seed);
    let mut out = io::stdout().lock();
    writeln!(out, "Difficulty: {}", puzzle.difficulty)?;
    writeln!(out, "Seed: {}", puzzle.seed)?;
    writeln!(out, "Target: {}", puzzle.target)?;
    let numbers = puzzle
        .numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    writeln!(out, "Numbers: {}", numbers.join(" "))?;
    if show_solution {
        writeln!(out, "Solution:")?;
        for step in &puzzle.solution {
            writeln!(out, "  {step}")?;
        }
    }
    Ok(())
}

fn solve(numbers: Vec<i64>, target: i64, solver: &SearchSolver) -> Result<(), CliError> {
    let mut stats = solver.new_stats();
    let Some(solution) = solver.solve_with_stats(&numbers, target, &mut stats) else {
        return Err(CliError::Unsolvable { numbers, target });
    };
    log::debug!(
        "expanded {} state(s), visited {}",
        stats.expanded_states(),
        stats.visited_states()
    );

    let mut out = io::stdout().lock();
    if solution.is_empty() {
        writeln!(out, "{target} is already among the numbers.")?;
    } else {
        writeln!(out, "{solution}")?;
    }
    Ok(())
}

fn play(difficulty: Difficulty, mode: GameMode, seed: &SeedArgs) -> Result<(), CliError> {
    let now = Instant::now();
    let game = Game::new(generate_puzzle(difficulty, seed), mode, now);
    let mut session = Session::new(game);
    session.run(io::stdin().lock(), io::stdout().lock(), Instant::now)?;
    Ok(())
}
