use std::time::{Duration, Instant};

use reckon_core::{Difficulty, Operation, Step};
use reckon_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use reckon_solver::{SearchSolver, Solution};

use crate::{
    ChallengeStats, Countdown, GameMode, GameStatus, HistoryEntry, Message, MoveOutcome,
    Selection, TIME_LIMIT,
};

/// A target-number game session.
///
/// Holds the numbers in play, the player's selection and armed operation, the
/// move history, and the mode-specific countdown and challenge counters. The
/// stored [`Solution`] describes a path from the starting numbers and does not
/// change as the player moves.
///
/// Invariants:
///
/// - the selection holds at most two distinct, in-range positions
/// - [`move_count`](Self::move_count) equals the history length
///
/// # Example
///
/// ```
/// use std::time::Instant;
///
/// use reckon_core::Difficulty;
/// use reckon_game::{Game, GameMode, GameStatus};
/// use reckon_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let game = Game::new(puzzle, GameMode::Timer, Instant::now());
///
/// assert_eq!(game.status(), GameStatus::Playing);
/// assert_eq!(game.move_count(), 0);
/// assert!(game.countdown().is_some());
/// assert!(!game.numbers().contains(&game.target()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    difficulty: Difficulty,
    mode: GameMode,
    seed: Option<PuzzleSeed>,
    target: i64,
    numbers: Vec<i64>,
    initial_numbers: Vec<i64>,
    selection: Selection,
    operation: Option<Operation>,
    history: Vec<HistoryEntry>,
    status: GameStatus,
    message: Option<Message>,
    countdown: Option<Countdown>,
    challenge: Option<ChallengeStats>,
    solution: Solution,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// Timed modes start their countdown at `now`; challenge mode also starts
    /// with zeroed counters.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle, mode: GameMode, now: Instant) -> Self {
        let countdown = mode.is_timed().then(|| Countdown::start(now, TIME_LIMIT));
        let challenge = mode.is_challenge().then(ChallengeStats::default);
        Self::from_puzzle(puzzle, mode, countdown, challenge)
    }

    fn from_puzzle(
        puzzle: GeneratedPuzzle,
        mode: GameMode,
        countdown: Option<Countdown>,
        challenge: Option<ChallengeStats>,
    ) -> Self {
        let GeneratedPuzzle {
            seed,
            difficulty,
            numbers,
            initial_numbers,
            target,
            solution,
            attempts: _,
            relaxed: _,
        } = puzzle;
        Self {
            difficulty,
            mode,
            seed: Some(seed),
            target,
            numbers,
            initial_numbers,
            selection: Selection::default(),
            operation: None,
            history: Vec::new(),
            status: GameStatus::Playing,
            message: None,
            countdown,
            challenge,
            solution,
        }
    }

    /// Generates a fresh puzzle and starts a game with it.
    #[must_use]
    pub fn generate(difficulty: Difficulty, mode: GameMode, now: Instant) -> Self {
        Self::new(PuzzleGenerator::new(difficulty).generate(), mode, now)
    }

    /// Creates a classic game with the given numbers and target.
    ///
    /// The numbers are also the restart baseline, and a shortest solution is
    /// searched with the tier's operations. If the target cannot be reached,
    /// the stored solution is empty.
    #[must_use]
    pub fn with_numbers(difficulty: Difficulty, target: i64, numbers: Vec<i64>) -> Self {
        let solution = SearchSolver::for_difficulty(difficulty)
            .solve(&numbers, target)
            .unwrap_or_default();
        let status = if numbers.contains(&target) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        Self {
            difficulty,
            mode: GameMode::Classic,
            seed: None,
            target,
            initial_numbers: numbers.clone(),
            numbers,
            selection: Selection::default(),
            operation: None,
            history: Vec::new(),
            status,
            message: None,
            countdown: None,
            challenge: None,
            solution,
        }
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the seed of the current puzzle, if it was generated.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the number to reach.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Returns the numbers in play, in display order.
    #[must_use]
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    /// Returns the starting numbers that a restart returns to.
    #[must_use]
    pub fn initial_numbers(&self) -> &[i64] {
        &self.initial_numbers
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the armed operation.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns the executed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the number of executed moves.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the message describing the last move, if any.
    #[must_use]
    pub fn message(&self) -> Option<Message> {
        self.message
    }

    /// Returns the countdown of a timed mode.
    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Returns the challenge counters in challenge mode.
    #[must_use]
    pub fn challenge_stats(&self) -> Option<&ChallengeStats> {
        self.challenge.as_ref()
    }

    /// Returns a shortest solution from the starting numbers.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Replaces the selection.
    ///
    /// Returns `false` and leaves the game unchanged if there are more than
    /// two indices, a duplicate, or an index out of range.
    pub fn set_selection(&mut self, indices: &[usize]) -> bool {
        if indices.iter().any(|&index| index >= self.numbers.len()) {
            return false;
        }
        let Some(selection) = Selection::from_indices(indices) else {
            return false;
        };
        self.selection = selection;
        true
    }

    /// Arms an operation, or disarms it with `None`.
    pub fn set_operation(&mut self, operation: Option<Operation>) {
        self.operation = operation;
    }

    /// Selects or deselects the number at `index`.
    ///
    /// A selected number is deselected. Otherwise the number becomes the first
    /// or second selection, replacing the second one if two are selected. When
    /// two numbers end up selected and an operation is armed, the move is
    /// executed.
    ///
    /// Ignored unless the game is [`GameStatus::Playing`] and `index` is in
    /// range.
    pub fn toggle_number(&mut self, index: usize) -> MoveOutcome {
        if !self.status.is_playing() || index >= self.numbers.len() {
            return MoveOutcome::NoOp;
        }
        self.message = None;
        self.selection.toggle(index);
        if self.selection.pair().is_some() && self.operation.is_some() {
            return self.execute_move();
        }
        MoveOutcome::Selected
    }

    /// Arms `operation`, or disarms it if it is already armed.
    ///
    /// When two numbers are selected, arming an operation executes the move.
    ///
    /// Ignored unless the game is [`GameStatus::Playing`].
    pub fn toggle_operation(&mut self, operation: Operation) -> MoveOutcome {
        if !self.status.is_playing() {
            return MoveOutcome::NoOp;
        }
        self.message = None;
        if self.operation == Some(operation) {
            self.operation = None;
            return MoveOutcome::Selected;
        }
        self.operation = Some(operation);
        if self.selection.pair().is_some() {
            return self.execute_move();
        }
        MoveOutcome::Selected
    }

    /// Executes the armed operation on the two selected numbers.
    ///
    /// Does nothing unless exactly two numbers are selected and an operation is
    /// armed. The operation is tried in selection order and, for subtraction
    /// and division, in reverse order if that fails.
    ///
    /// - If neither order is valid, the selection and operation are cleared and
    ///   [`Message::InvalidMove`] is set; history is untouched.
    /// - Otherwise the move is recorded, both numbers are replaced by the
    ///   result, and the numbers are sorted ascending. The game is won if the
    ///   target is now present; a won game whose target was consumed goes back
    ///   to [`GameStatus::Playing`], and a timed-out game stays timed out.
    pub fn execute_move(&mut self) -> MoveOutcome {
        let (Some((i, j)), Some(operation)) = (self.selection.pair(), self.operation) else {
            return MoveOutcome::NoOp;
        };
        let (a, b) = (self.numbers[i], self.numbers[j]);

        self.selection.clear();
        self.operation = None;

        let step = Step::new(operation, a, b).or_else(|| {
            if operation.is_commutative() {
                None
            } else {
                Step::new(operation, b, a)
            }
        });
        let Some(step) = step else {
            self.message = Some(Message::InvalidMove);
            return MoveOutcome::Rejected;
        };

        let mut next: Vec<i64> = self
            .numbers
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, &n)| n)
            .collect();
        next.push(step.result);
        next.sort_unstable();

        let before = std::mem::replace(&mut self.numbers, next);
        self.history.push(HistoryEntry {
            numbers: before,
            step,
        });

        if self.numbers.contains(&self.target) && !self.status.is_timeout() {
            log::debug!(
                "reached target {} in {} move(s)",
                self.target,
                self.move_count()
            );
            self.status = GameStatus::Won;
            self.message = None;
            MoveOutcome::Won(step)
        } else {
            if self.status.is_won() {
                self.status = GameStatus::Playing;
            }
            self.message = Some(Message::Applied(step));
            MoveOutcome::Applied(step)
        }
    }

    /// Reverts the last move.
    ///
    /// Restores the numbers recorded before it, clears the selection,
    /// operation, and message, and puts the game back into
    /// [`GameStatus::Playing`], even after a win.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.numbers = entry.numbers;
        self.selection.clear();
        self.operation = None;
        self.message = None;
        self.status = GameStatus::Playing;
        true
    }

    /// Returns to the starting numbers and clears all moves.
    ///
    /// Difficulty, mode, target, countdown, and challenge counters are kept.
    pub fn restart(&mut self) {
        self.numbers.clone_from(&self.initial_numbers);
        self.history.clear();
        self.selection.clear();
        self.operation = None;
        self.message = None;
        self.status = GameStatus::Playing;
    }

    /// Updates the countdown of a timed mode as of `now`.
    ///
    /// A game still [`GameStatus::Playing`] when the countdown reaches zero
    /// times out. Returns the remaining time, or `None` in classic mode.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let remaining = self.countdown.as_mut()?.update(now);
        if remaining.is_zero() && self.status.is_playing() {
            log::debug!("countdown expired after {} move(s)", self.move_count());
            self.status = GameStatus::Timeout;
            self.selection.clear();
            self.operation = None;
        }
        Some(remaining)
    }

    /// Loads a new puzzle while keeping the mode, countdown, and challenge
    /// counters.
    ///
    /// Everything else is reset as for a new game.
    pub fn replace_puzzle(&mut self, puzzle: GeneratedPuzzle) {
        *self = Self::from_puzzle(puzzle, self.mode, self.countdown, self.challenge);
    }

    /// Loads a freshly generated puzzle of the same difficulty, keeping the
    /// countdown and challenge counters.
    pub fn regenerate(&mut self) {
        self.replace_puzzle(PuzzleGenerator::new(self.difficulty).generate());
    }

    /// Counts the current puzzle as solved and moves on to `puzzle`.
    ///
    /// Only applies in challenge mode after a win; returns `false` and does
    /// nothing otherwise.
    pub fn next_challenge_puzzle(&mut self, puzzle: GeneratedPuzzle) -> bool {
        if !self.status.is_won() {
            return false;
        }
        let Some(stats) = self.challenge.as_mut() else {
            return false;
        };
        stats.puzzles_solved += 1;
        log::debug!("challenge: {} solved", stats.puzzles_solved);
        self.replace_puzzle(puzzle);
        true
    }

    /// Counts the current puzzle as skipped and moves on to `puzzle`.
    ///
    /// Only applies in challenge mode while playing; returns `false` and does
    /// nothing otherwise.
    pub fn skip_challenge_puzzle(&mut self, puzzle: GeneratedPuzzle) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(stats) = self.challenge.as_mut() else {
            return false;
        };
        stats.puzzles_skipped += 1;
        log::debug!("challenge: {} skipped", stats.puzzles_skipped);
        self.replace_puzzle(puzzle);
        true
    }

    /// Suggests the next move of a shortest path from the current numbers.
    ///
    /// The stored [`solution`](Self::solution) is unaffected. Returns `None`
    /// unless the game is [`GameStatus::Playing`] and the target is reachable.
    #[must_use]
    pub fn hint(&self) -> Option<Step> {
        if !self.status.is_playing() {
            return None;
        }
        SearchSolver::for_difficulty(self.difficulty)
            .solve(&self.numbers, self.target)?
            .first()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_MOVE: &str = "That operation doesn't work! Try another one.";

    fn game(numbers: &[i64], target: i64) -> Game {
        Game::with_numbers(Difficulty::Hard, target, numbers.to_vec())
    }

    fn seeded(phrase: &str, difficulty: Difficulty) -> GeneratedPuzzle {
        PuzzleGenerator::new(difficulty).generate_with_seed(PuzzleSeed::from_phrase(phrase))
    }

    fn play_step(game: &mut Game, step: Step) -> MoveOutcome {
        let numbers = game.numbers();
        let i = numbers.iter().position(|&n| n == step.operand1).unwrap();
        let j = numbers
            .iter()
            .enumerate()
            .position(|(k, &n)| k != i && n == step.operand2)
            .unwrap();
        assert!(game.set_selection(&[i, j]));
        game.set_operation(Some(step.operation));
        game.execute_move()
    }

    #[test]
    fn test_execute_move_requires_two_numbers_and_operation() {
        let mut game = game(&[5, 10, 15, 20], 25);
        let before = game.clone();
        assert_eq!(game.execute_move(), MoveOutcome::NoOp);
        assert_eq!(game, before);

        assert!(game.set_selection(&[0]));
        game.set_operation(Some(Operation::Add));
        let before = game.clone();
        assert_eq!(game.execute_move(), MoveOutcome::NoOp);
        assert_eq!(game, before);

        assert!(game.set_selection(&[0, 1]));
        game.set_operation(None);
        let before = game.clone();
        assert_eq!(game.execute_move(), MoveOutcome::NoOp);
        assert_eq!(game, before);
    }

    #[test]
    fn test_execute_addition() {
        let mut game = game(&[5, 10, 15, 20], 99);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        let outcome = game.execute_move();

        let step = Step::new(Operation::Add, 5, 10).unwrap();
        assert_eq!(outcome, MoveOutcome::Applied(step));
        assert_eq!(game.numbers(), &[15, 15, 20]);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.history().len(), 1);
        assert!(game.selection().is_empty());
        assert_eq!(game.operation(), None);
        assert_eq!(game.message().map(|m| m.to_string()), Some("5 + 10 = 15".to_owned()));
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_non_commutative_retry_in_reverse_order() {
        let mut game = game(&[5, 10], 99);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Subtract));
        game.execute_move();

        assert_eq!(game.numbers(), &[5]);
        let entry = &game.history()[0];
        assert_eq!(entry.step.operand1, 10);
        assert_eq!(entry.step.operand2, 5);
        assert_eq!(entry.step.result, 5);
        assert_eq!(entry.numbers, vec![5, 10]);
        assert_eq!(game.message().map(|m| m.to_string()), Some("10 - 5 = 5".to_owned()));
    }

    #[test]
    fn test_selection_order_is_respected_when_valid() {
        let mut game = game(&[5, 20, 4], 99);
        assert!(game.set_selection(&[1, 0]));
        game.set_operation(Some(Operation::Divide));
        game.execute_move();
        assert_eq!(game.history()[0].step, Step::new(Operation::Divide, 20, 5).unwrap());
        assert_eq!(game.numbers(), &[4, 4]);
    }

    #[test]
    fn test_invalid_move_sets_message() {
        let mut game = game(&[5, 7, 20, 3], 99);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Divide));
        assert_eq!(game.execute_move(), MoveOutcome::Rejected);

        assert_eq!(game.message().map(|m| m.to_string()), Some(INVALID_MOVE.to_owned()));
        assert!(game.selection().is_empty());
        assert_eq!(game.operation(), None);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.numbers(), &[5, 7, 20, 3]);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_win_detection() {
        let mut game = game(&[10, 15, 5], 25);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        assert!(game.execute_move().is_won());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.numbers().contains(&25));
        assert_eq!(game.message(), None);
    }

    #[test]
    fn test_move_after_win_consuming_target_resumes_play() {
        let mut game = game(&[10, 15, 5], 25);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        assert!(game.execute_move().is_won());
        assert_eq!(game.numbers(), &[5, 25]);

        assert!(game.set_selection(&[1, 0]));
        game.set_operation(Some(Operation::Subtract));
        assert_eq!(
            game.execute_move(),
            MoveOutcome::Applied(Step::new(Operation::Subtract, 25, 5).unwrap())
        );
        assert_eq!(game.numbers(), &[20]);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_move_after_timeout_keeps_timeout() {
        let start = Instant::now();
        let mut game = Game::new(seeded("expired", Difficulty::Hard), GameMode::Timer, start);
        game.tick(start + TIME_LIMIT);
        assert_eq!(game.status(), GameStatus::Timeout);

        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        assert!(game.execute_move().is_applied());
        assert_eq!(game.status(), GameStatus::Timeout);
    }

    #[test]
    fn test_history_entry_records_values() {
        let mut game = game(&[5, 10, 15], 99);
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Multiply));
        game.execute_move();

        let entry = &game.history()[0];
        assert_eq!(entry.numbers, vec![5, 10, 15]);
        assert_eq!(entry.step, Step::new(Operation::Multiply, 5, 10).unwrap());
        assert_eq!(entry.step.result, 50);
    }

    #[test]
    fn test_undo() {
        let mut game = game(&[5, 10, 15], 99);
        let before = game.clone();
        assert!(!game.undo());
        assert_eq!(game, before);

        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        game.execute_move();
        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Add));
        game.execute_move();
        assert_eq!(game.numbers(), &[30]);
        assert_eq!(game.move_count(), 2);

        assert!(game.undo());
        assert_eq!(game.numbers(), &[15, 15]);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.message(), None);

        assert!(game.undo());
        assert_eq!(game.numbers(), &[5, 10, 15]);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_after_win_resumes_play() {
        let mut game = game(&[10, 15, 5], 25);
        game.toggle_number(0);
        game.toggle_number(1);
        assert!(game.toggle_operation(Operation::Add).is_won());

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.numbers(), &[10, 15, 5]);
    }

    #[test]
    fn test_restart() {
        let puzzle = seeded("restart", Difficulty::Medium);
        let mut game = Game::new(puzzle, GameMode::Challenge, Instant::now());
        let target = game.target();
        let countdown = game.countdown().copied();
        let step = *game.solution().first().unwrap();
        play_step(&mut game, step);
        game.toggle_number(0);
        game.toggle_operation(Operation::Add);

        game.restart();
        assert_eq!(game.numbers(), game.initial_numbers());
        assert!(game.history().is_empty());
        assert_eq!(game.move_count(), 0);
        assert!(game.selection().is_empty());
        assert_eq!(game.operation(), None);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.message(), None);
        assert_eq!(game.target(), target);
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(game.mode(), GameMode::Challenge);
        assert_eq!(game.countdown().copied(), countdown);
        assert_eq!(game.challenge_stats(), Some(&ChallengeStats::default()));
    }

    #[test]
    fn test_toggle_number_and_operation() {
        let mut game = game(&[5, 10, 15, 20], 99);
        assert_eq!(game.toggle_number(9), MoveOutcome::NoOp);
        assert_eq!(game.toggle_number(1), MoveOutcome::Selected);
        assert_eq!(game.toggle_number(1), MoveOutcome::Selected);
        assert!(game.selection().is_empty());

        assert_eq!(game.toggle_operation(Operation::Multiply), MoveOutcome::Selected);
        assert_eq!(game.toggle_operation(Operation::Multiply), MoveOutcome::Selected);
        assert_eq!(game.operation(), None);

        game.toggle_operation(Operation::Subtract);
        game.toggle_number(0);
        let outcome = game.toggle_number(3);
        assert_eq!(
            outcome,
            MoveOutcome::Applied(Step::new(Operation::Subtract, 20, 5).unwrap())
        );
        assert_eq!(game.numbers(), &[10, 15, 15]);
    }

    #[test]
    fn test_toggle_clears_message() {
        let mut game = game(&[5, 7, 20, 3], 99);
        game.toggle_number(0);
        game.toggle_number(1);
        assert_eq!(game.toggle_operation(Operation::Divide), MoveOutcome::Rejected);
        assert_eq!(game.message(), Some(Message::InvalidMove));
        game.toggle_number(2);
        assert_eq!(game.message(), None);
    }

    #[test]
    fn test_input_ignored_after_win() {
        let mut game = game(&[10, 15, 5], 25);
        game.toggle_number(0);
        game.toggle_number(1);
        game.toggle_operation(Operation::Add);
        let before = game.clone();
        assert_eq!(game.toggle_number(0), MoveOutcome::NoOp);
        assert_eq!(game.toggle_operation(Operation::Add), MoveOutcome::NoOp);
        assert_eq!(game, before);
    }

    #[test]
    fn test_set_selection_validation() {
        let mut game = game(&[5, 10, 15], 99);
        assert!(!game.set_selection(&[0, 3]));
        assert!(!game.set_selection(&[1, 1]));
        assert!(!game.set_selection(&[0, 1, 2]));
        assert!(game.selection().is_empty());
        assert!(game.set_selection(&[2, 0]));
        assert_eq!(game.selection().pair(), Some((2, 0)));
    }

    #[test]
    fn test_stored_solution_wins_generated_puzzle() {
        for difficulty in Difficulty::ALL {
            for i in 0..10 {
                let puzzle = seeded(&format!("play{i}"), difficulty);
                let mut game = Game::new(puzzle, GameMode::Classic, Instant::now());
                let steps = game.solution().steps().to_vec();
                assert!(!steps.is_empty());
                for step in &steps[..steps.len() - 1] {
                    assert!(play_step(&mut game, *step).is_applied());
                }
                assert!(play_step(&mut game, steps[steps.len() - 1]).is_won());
                assert_eq!(game.move_count(), steps.len());
            }
        }
    }

    #[test]
    fn test_solution_is_unchanged_by_moves() {
        let puzzle = seeded("fixed", Difficulty::Hard);
        let mut game = Game::new(puzzle, GameMode::Classic, Instant::now());
        let solution = game.solution().clone();
        let step = *solution.first().unwrap();
        play_step(&mut game, step);
        assert_eq!(game.solution(), &solution);
    }

    #[test]
    fn test_new_game_initialization() {
        let now = Instant::now();
        let puzzle = seeded("init", Difficulty::Easy);
        let classic = Game::new(puzzle.clone(), GameMode::Classic, now);
        assert_eq!(classic.countdown(), None);
        assert_eq!(classic.challenge_stats(), None);
        assert_eq!(classic.seed(), Some(puzzle.seed));
        assert_eq!(classic.numbers(), puzzle.numbers.as_slice());
        assert_eq!(classic.initial_numbers(), puzzle.initial_numbers.as_slice());
        assert_eq!(classic.message(), None);
        assert!(classic.selection().is_empty());

        let timer = Game::new(puzzle.clone(), GameMode::Timer, now);
        assert_eq!(timer.countdown().map(Countdown::remaining), Some(TIME_LIMIT));
        assert_eq!(timer.countdown().map(Countdown::started_at), Some(now));
        assert_eq!(timer.challenge_stats(), None);

        let challenge = Game::new(puzzle, GameMode::Challenge, now);
        assert!(challenge.countdown().is_some());
        assert_eq!(challenge.challenge_stats(), Some(&ChallengeStats::default()));
    }

    #[test]
    fn test_tick_times_out() {
        let start = Instant::now();
        let mut game = Game::new(seeded("tick", Difficulty::Easy), GameMode::Timer, start);
        assert_eq!(game.tick(start + Duration::from_secs(20)), Some(Duration::from_secs(40)));
        assert_eq!(game.status(), GameStatus::Playing);

        assert_eq!(game.tick(start + Duration::from_secs(61)), Some(Duration::ZERO));
        assert_eq!(game.status(), GameStatus::Timeout);
        assert_eq!(game.toggle_number(0), MoveOutcome::NoOp);
        assert_eq!(game.hint(), None);

        let mut classic = game.clone();
        classic.mode = GameMode::Classic;
        classic.countdown = None;
        assert_eq!(classic.tick(start), None);
    }

    #[test]
    fn test_tick_keeps_win() {
        let start = Instant::now();
        let mut game = Game::new(seeded("keep", Difficulty::Easy), GameMode::Timer, start);
        let steps = game.solution().steps().to_vec();
        for step in steps {
            play_step(&mut game, step);
        }
        assert_eq!(game.status(), GameStatus::Won);
        game.tick(start + Duration::from_secs(120));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_challenge_skip_and_solve() {
        let start = Instant::now();
        let mut game = Game::new(seeded("c0", Difficulty::Easy), GameMode::Challenge, start);
        let countdown = game.countdown().copied();

        assert!(!game.next_challenge_puzzle(seeded("c1", Difficulty::Easy)));

        let next = seeded("c1", Difficulty::Easy);
        assert!(game.skip_challenge_puzzle(next.clone()));
        assert_eq!(game.target(), next.target);
        assert_eq!(game.seed(), Some(next.seed));
        assert_eq!(game.countdown().copied(), countdown);
        assert_eq!(
            game.challenge_stats(),
            Some(&ChallengeStats {
                puzzles_solved: 0,
                puzzles_skipped: 1,
            })
        );

        let steps = game.solution().steps().to_vec();
        for step in steps {
            play_step(&mut game, step);
        }
        assert!(!game.skip_challenge_puzzle(seeded("c2", Difficulty::Easy)));
        assert!(game.next_challenge_puzzle(seeded("c2", Difficulty::Easy)));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.countdown().copied(), countdown);
        assert_eq!(
            game.challenge_stats(),
            Some(&ChallengeStats {
                puzzles_solved: 1,
                puzzles_skipped: 1,
            })
        );
    }

    #[test]
    fn test_challenge_flow_requires_challenge_mode() {
        let mut game = Game::new(seeded("t0", Difficulty::Easy), GameMode::Timer, Instant::now());
        let before = game.clone();
        assert!(!game.skip_challenge_puzzle(seeded("t1", Difficulty::Easy)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_replace_puzzle_resets_play_state() {
        let mut game = Game::new(seeded("r0", Difficulty::Hard), GameMode::Timer, Instant::now());
        let countdown = game.countdown().copied();
        let step = *game.solution().first().unwrap();
        play_step(&mut game, step);

        let next = seeded("r1", Difficulty::Hard);
        game.replace_puzzle(next.clone());
        assert_eq!(game.numbers(), next.numbers.as_slice());
        assert_eq!(game.target(), next.target);
        assert_eq!(game.solution(), &next.solution);
        assert!(game.history().is_empty());
        assert_eq!(game.countdown().copied(), countdown);
        assert_eq!(game.mode(), GameMode::Timer);
    }

    #[test]
    fn test_replace_puzzle_does_not_restart_countdown() {
        let start = Instant::now();
        let mut game = Game::new(seeded("clock0", Difficulty::Easy), GameMode::Challenge, start);
        game.tick(start + Duration::from_secs(30));

        game.replace_puzzle(seeded("clock1", Difficulty::Easy));
        let countdown = game.countdown().unwrap();
        assert_eq!(countdown.started_at(), start);
        assert_eq!(countdown.remaining(), Duration::from_secs(30));
    }

    #[test]
    fn test_regenerate_keeps_timer_and_counters() {
        let start = Instant::now();
        let mut game = Game::new(seeded("regen", Difficulty::Medium), GameMode::Challenge, start);
        assert!(game.skip_challenge_puzzle(seeded("regen1", Difficulty::Medium)));
        let step = *game.solution().first().unwrap();
        play_step(&mut game, step);
        game.toggle_number(0);
        let countdown = game.countdown().copied();
        let stats = game.challenge_stats().copied();
        let seed = game.seed();

        game.regenerate();
        assert_ne!(game.seed(), seed);
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(game.mode(), GameMode::Challenge);
        assert_eq!(game.countdown().copied(), countdown);
        assert_eq!(game.challenge_stats().copied(), stats);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.history().is_empty());
        assert!(game.selection().is_empty());
        assert_eq!(game.numbers().len(), Difficulty::Medium.config().number_count);
        assert!(!game.numbers().contains(&game.target()));
        let last = game.solution().replay(game.initial_numbers()).unwrap();
        assert!(last.contains(&game.target()));
    }

    #[test]
    fn test_hint_follows_live_numbers() {
        let mut game = game(&[2, 3, 7], 13);
        // 2 * 3 = 6, 6 + 7 = 13
        let hint = game.hint().unwrap();
        assert_eq!(hint, Step::new(Operation::Multiply, 2, 3).unwrap());

        assert!(game.set_selection(&[0, 1]));
        game.set_operation(Some(Operation::Multiply));
        game.execute_move();
        assert_eq!(game.hint(), Some(Step::new(Operation::Add, 6, 7).unwrap()));
    }

    #[test]
    fn test_with_numbers_already_containing_target() {
        let game = game(&[4, 9], 9);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.solution().is_empty());
    }
}
