//! The interactive `play` loop.

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use reckon_game::{Game, GameStatus, MoveOutcome};
use reckon_generator::PuzzleGenerator;

use crate::command::PlayCommand;

const HELP: &str = "\
Commands:
  1 + 3    combine the 1st and 3rd numbers (+ - * / x)
  2        select or deselect the 2nd number
  *        arm or disarm an operation
  u        undo the last move
  r        restart the puzzle
  n        next puzzle (skips the current one in challenge mode)
  h        hint
  s        show a shortest solution
  ?        this help
  q        quit";

/// An interactive session over one or more puzzles.
#[derive(Debug)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Creates a session starting with `game`.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Returns the current game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands from `input` until `q` or end of input.
    ///
    /// `now` is consulted before and after every command to drive the
    /// countdown of timed modes.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run<R, W, C>(&mut self, mut input: R, mut output: W, mut now: C) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        C: FnMut() -> Instant,
    {
        writeln!(
            output,
            "Reckon: {} / {}. Type ? for help.",
            self.game.difficulty(),
            self.game.mode()
        )?;
        if let Some(seed) = self.game.seed() {
            writeln!(output, "Seed: {seed}")?;
        }

        let mut line = String::new();
        loop {
            self.tick(now(), &mut output)?;
            write!(output, "{}", render(&self.game))?;
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            self.tick(now(), &mut output)?;

            let command = match line.trim().parse::<PlayCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{e}")?;
                    continue;
                }
            };
            log::trace!("command: {command:?}");
            if command == PlayCommand::Quit {
                break;
            }
            self.execute(command, now(), &mut output)?;
        }
        Ok(())
    }

    fn tick<W: Write>(&mut self, now: Instant, output: &mut W) -> io::Result<()> {
        let was_playing = self.game.status().is_playing();
        self.game.tick(now);
        if was_playing && self.game.status() == GameStatus::Timeout {
            writeln!(output, "Time's up! The target was {}.", self.game.target())?;
            if let Some(stats) = self.game.challenge_stats() {
                writeln!(
                    output,
                    "Challenge over: {} solved, {} skipped.",
                    stats.puzzles_solved, stats.puzzles_skipped
                )?;
            }
            writeln!(output, "Type n to play again.")?;
        }
        Ok(())
    }

    fn execute<W: Write>(
        &mut self,
        command: PlayCommand,
        now: Instant,
        output: &mut W,
    ) -> io::Result<()> {
        let game = &mut self.game;
        match command {
            PlayCommand::Move {
                first,
                operation,
                second,
            } => {
                if !game.status().is_playing() {
                    writeln!(output, "The game is over. Type n for a new puzzle.")?;
                } else if first == second || !game.set_selection(&[first, second]) {
                    writeln!(output, "Pick two different numbers from the list.")?;
                } else {
                    game.set_operation(Some(operation));
                    let outcome = game.execute_move();
                    self.report(outcome, output)?;
                }
            }
            PlayCommand::Pick(index) => {
                let outcome = game.toggle_number(index);
                if outcome.is_no_op() {
                    if game.status().is_playing() {
                        writeln!(output, "No number at position {}.", index + 1)?;
                    } else {
                        writeln!(output, "The game is over. Type n for a new puzzle.")?;
                    }
                }
                self.report(outcome, output)?;
            }
            PlayCommand::Arm(operation) => {
                let outcome = game.toggle_operation(operation);
                self.report(outcome, output)?;
            }
            PlayCommand::Undo => {
                if !game.undo() {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            PlayCommand::Restart => game.restart(),
            PlayCommand::Next => self.next_puzzle(now, output)?,
            PlayCommand::Hint => match game.hint() {
                Some(step) => writeln!(output, "Hint: {step}")?,
                None => writeln!(output, "No hint available.")?,
            },
            PlayCommand::Solution => {
                let solution = game.solution();
                if solution.is_empty() {
                    writeln!(output, "No moves needed.")?;
                } else {
                    writeln!(output, "Solution from the starting numbers:")?;
                    for step in solution {
                        writeln!(output, "  {step}")?;
                    }
                }
            }
            PlayCommand::Help => writeln!(output, "{HELP}")?,
            PlayCommand::Quit => {}
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: MoveOutcome, output: &mut W) -> io::Result<()> {
        match outcome {
            MoveOutcome::Won(step) => {
                writeln!(output, "{step}")?;
                writeln!(
                    output,
                    "Solved in {} move(s)! Type n for the next puzzle.",
                    self.game.move_count()
                )?;
            }
            MoveOutcome::Applied(_) | MoveOutcome::Rejected => {
                if let Some(message) = self.game.message() {
                    writeln!(output, "{message}")?;
                }
            }
            MoveOutcome::NoOp | MoveOutcome::Selected => {}
        }
        Ok(())
    }

    fn next_puzzle<W: Write>(&mut self, now: Instant, output: &mut W) -> io::Result<()> {
        let game = &mut self.game;
        let difficulty = game.difficulty();
        if game.mode().is_challenge() && !game.status().is_timeout() {
            let puzzle = PuzzleGenerator::new(difficulty).generate();
            if game.status().is_won() {
                game.next_challenge_puzzle(puzzle);
            } else {
                game.skip_challenge_puzzle(puzzle);
                writeln!(output, "Skipped.")?;
            }
        } else if game.mode().is_classic() {
            game.regenerate();
        } else {
            *game = Game::generate(difficulty, game.mode(), now);
        }
        Ok(())
    }
}

/// Renders the target, the numbers with their positions, and the status line.
#[must_use]
pub fn render(game: &Game) -> String {
    let mut out = format!("Target: {}  Moves: {}", game.target(), game.move_count());
    if let Some(countdown) = game.countdown() {
        out.push_str(&format!("  Time: {}s", countdown.remaining().as_secs()));
    }
    if let Some(stats) = game.challenge_stats() {
        out.push_str(&format!(
            "  Solved: {}  Skipped: {}",
            stats.puzzles_solved, stats.puzzles_skipped
        ));
    }
    out.push('\n');

    for (index, number) in game.numbers().iter().enumerate() {
        let mark = if game.selection().contains(index) {
            "*"
        } else {
            ""
        };
        out.push_str(&format!(" [{}] {mark}{number}", index + 1));
    }
    if let Some(operation) = game.operation() {
        out.push_str(&format!("   op: {operation}"));
    }
    out.push('\n');
    out
}
