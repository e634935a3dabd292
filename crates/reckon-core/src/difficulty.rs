//! Difficulty tiers and their fixed configuration.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use crate::Operation;

/// A named difficulty tier.
///
/// Each tier maps to one immutable [`DifficultyConfig`]. Allowed operations grow
/// monotonically: every operation of an easier tier is available in harder ones.
///
/// # Examples
///
/// ```
/// use reckon_core::{Difficulty, Operation};
///
/// let config = Difficulty::Hard.config();
/// assert_eq!(config.number_count, 6);
/// assert!(config.operations.contains(&Operation::Divide));
///
/// let difficulty: Difficulty = "medium".parse()?;
/// assert_eq!(difficulty, Difficulty::Medium);
/// assert_eq!(difficulty.to_string(), "Medium");
/// # Ok::<(), reckon_core::ParseDifficultyError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Difficulty {
    /// Four small numbers, addition and subtraction.
    #[default]
    Easy,
    /// Five numbers, multiplication enabled.
    Medium,
    /// Six numbers including one large one, all four operations.
    Hard,
}

/// Configuration of a difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyConfig {
    /// Human-readable name of the tier.
    pub label: &'static str,
    /// Accepted targets.
    pub target_range: RangeInclusive<i64>,
    /// How many starting numbers a puzzle has.
    pub number_count: usize,
    /// Allowed operations, in enumeration order.
    pub operations: &'static [Operation],
    /// Range of ordinary starting numbers.
    pub number_range: RangeInclusive<i64>,
    /// Range of the one large starting number, if the tier has one.
    ///
    /// The large number is the last number drawn and is exempt from the
    /// duplicate check.
    pub large_number_range: Option<RangeInclusive<i64>>,
}

static EASY: DifficultyConfig = DifficultyConfig {
    label: "Easy",
    target_range: 1..=50,
    number_count: 4,
    operations: &[Operation::Add, Operation::Subtract],
    number_range: 1..=15,
    large_number_range: None,
};

static MEDIUM: DifficultyConfig = DifficultyConfig {
    label: "Medium",
    target_range: 20..=150,
    number_count: 5,
    operations: &[Operation::Add, Operation::Subtract, Operation::Multiply],
    number_range: 1..=25,
    large_number_range: None,
};

static HARD: DifficultyConfig = DifficultyConfig {
    label: "Hard",
    target_range: 50..=300,
    number_count: 6,
    operations: &[
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ],
    number_range: 1..=25,
    large_number_range: Some(10..=50),
};

impl Difficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the configuration of this tier.
    #[must_use]
    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Self::Easy => &EASY,
            Self::Medium => &MEDIUM,
            Self::Hard => &HARD,
        }
    }

    /// Returns the lowercase identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().label)
    }
}

/// Error returned when parsing an unknown [`Difficulty`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {input:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError {
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}
