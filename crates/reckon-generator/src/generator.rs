use rand::{
    Rng, RngExt as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use reckon_core::{Difficulty, DifficultyConfig, Numbers, Operation};
use reckon_solver::{SearchSolver, Solution, find_valid_moves};

use crate::PuzzleSeed;

/// Number of attempts made under all constraints before relaxing the target
/// range.
pub const MAX_ATTEMPTS: usize = 100;

/// Maximum number of random moves simulated to synthesize a target.
pub const SIMULATION_STEPS: usize = 2;

/// A generated puzzle.
///
/// `numbers` is the display order (a shuffle of `initial_numbers`), and
/// `initial_numbers` is the order the numbers were drawn in, kept as the
/// restart baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Starting numbers in display order.
    pub numbers: Vec<i64>,
    /// Starting numbers in draw order.
    pub initial_numbers: Vec<i64>,
    /// The number to reach.
    pub target: i64,
    /// A shortest solution from `initial_numbers` to `target`.
    pub solution: Solution,
    /// How many candidate puzzles were drawn, including the accepted one.
    pub attempts: usize,
    /// `true` if the target-range check was skipped to guarantee termination.
    pub relaxed: bool,
}

/// Generates guaranteed-solvable puzzles for a difficulty tier.
///
/// # Examples
///
/// ```
/// use reckon_core::Difficulty;
/// use reckon_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Hard);
/// let puzzle = generator.generate();
///
/// let config = Difficulty::Hard.config();
/// assert_eq!(puzzle.numbers.len(), config.number_count);
/// assert!(!puzzle.numbers.contains(&puzzle.target));
///
/// let last = puzzle.solution.replay(&puzzle.initial_numbers).expect("solution applies");
/// assert!(last.contains(&puzzle.target));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
    solver: SearchSolver,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty tier.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            solver: SearchSolver::for_difficulty(difficulty),
        }
    }

    /// Returns the difficulty tier this generator produces.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let candidate = find_candidate(self.difficulty.config(), &mut rng);

        let solution = self
            .solver
            .solve(&candidate.numbers, candidate.target)
            .unwrap_or_else(|| {
                log::error!(
                    "no solution found for generated puzzle {:?} -> {} (seed {seed})",
                    candidate.numbers,
                    candidate.target,
                );
                Solution::default()
            });

        let mut numbers = candidate.numbers.clone();
        numbers.shuffle(&mut rng);

        log::debug!(
            "generated {} puzzle {numbers:?} -> {} after {} attempt(s), {}-step solution",
            self.difficulty,
            candidate.target,
            candidate.attempts,
            solution.len(),
        );

        GeneratedPuzzle {
            seed,
            difficulty: self.difficulty,
            numbers,
            initial_numbers: candidate.numbers,
            target: candidate.target,
            solution,
            attempts: candidate.attempts,
            relaxed: candidate.relaxed,
        }
    }
}

#[derive(Debug)]
struct Candidate {
    numbers: Vec<i64>,
    target: i64,
    attempts: usize,
    relaxed: bool,
}

fn find_candidate<R>(config: &DifficultyConfig, rng: &mut R) -> Candidate
where
    R: Rng + ?Sized,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let numbers = draw_starting_numbers(config, rng);
        let Some(target) = synthesize_target(&numbers, config.operations, rng) else {
            continue;
        };
        if config.target_range.contains(&target) && !numbers.contains(&target) {
            return Candidate {
                numbers,
                target,
                attempts: attempt,
                relaxed: false,
            };
        }
        log::trace!("rejected target {target} for {numbers:?}");
    }

    log::warn!(
        "no {} target within {:?} after {MAX_ATTEMPTS} attempts, ignoring the target range",
        config.label,
        config.target_range,
    );
    for attempt in 1..=MAX_ATTEMPTS {
        let numbers = draw_starting_numbers(config, rng);
        let simulated = simulate(&numbers, config.operations, rng);
        let fresh: Vec<i64> = simulated
            .iter()
            .copied()
            .filter(|value| !numbers.contains(value))
            .collect();
        if let Some(&target) = fresh.choose(rng) {
            return Candidate {
                numbers,
                target,
                attempts: MAX_ATTEMPTS + attempt,
                relaxed: true,
            };
        }
    }

    let numbers = draw_starting_numbers(config, rng);
    let target = forced_target(&numbers);
    log::warn!("forcing target {target} (sum of {numbers:?})");
    Candidate {
        numbers,
        target,
        attempts: 2 * MAX_ATTEMPTS + 1,
        relaxed: true,
    }
}

/// The sum of all starting numbers.
///
/// Reachable with additions alone, which every tier allows, and larger than
/// every starting number as long as there are at least two positive ones.
fn forced_target(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Draws the starting numbers for a puzzle.
///
/// Every slot is drawn uniformly from `number_range`, redrawing values already
/// present. If the configuration has a `large_number_range`, the last slot is
/// drawn from it instead and is exempt from the duplicate check.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use reckon_core::Difficulty;
/// use reckon_generator::draw_starting_numbers;
///
/// let mut rng = Pcg64::seed_from_u64(7);
/// let config = Difficulty::Easy.config();
/// let numbers = draw_starting_numbers(config, &mut rng);
///
/// assert_eq!(numbers.len(), 4);
/// assert!(numbers.iter().all(|n| config.number_range.contains(n)));
/// ```
pub fn draw_starting_numbers<R>(config: &DifficultyConfig, rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let mut numbers = Vec::with_capacity(config.number_count);
    for slot in 0..config.number_count {
        if slot + 1 == config.number_count
            && let Some(range) = &config.large_number_range
        {
            numbers.push(rng.random_range(range.clone()));
            continue;
        }
        loop {
            let value = rng.random_range(config.number_range.clone());
            if !numbers.contains(&value) {
                numbers.push(value);
                break;
            }
        }
    }
    numbers
}

/// Plays up to [`SIMULATION_STEPS`] random valid moves on `numbers`.
///
/// Fewer moves are made if the numbers run out or no valid move exists. Each
/// move is picked uniformly from [`find_valid_moves`], consumes its operands by
/// value, and appends its result.
pub fn simulate<R>(numbers: &[i64], operations: &[Operation], rng: &mut R) -> Numbers
where
    R: Rng + ?Sized,
{
    let mut current: Numbers = numbers.iter().copied().collect();
    let steps = SIMULATION_STEPS.min(numbers.len().saturating_sub(1));
    for _ in 0..steps {
        let moves = find_valid_moves(&current, operations);
        let Some(next) = moves.choose(rng).and_then(|step| step.reduce(&current)) else {
            break;
        };
        current = next;
    }
    current
}

/// Simulates random moves on `numbers` and picks one resulting value as the
/// target.
///
/// The target is reachable from `numbers` by construction. Returns `None` only
/// if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use reckon_core::Operation;
/// use reckon_generator::synthesize_target;
///
/// let mut rng = Pcg64::seed_from_u64(1);
/// // With addition only, two moves on three numbers always sum them all.
/// assert_eq!(synthesize_target(&[2, 3, 4], &[Operation::Add], &mut rng), Some(9));
/// ```
pub fn synthesize_target<R>(numbers: &[i64], operations: &[Operation], rng: &mut R) -> Option<i64>
where
    R: Rng + ?Sized,
{
    simulate(numbers, operations, rng).choose(rng).copied()
}
