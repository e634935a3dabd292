use reckon_core::Step;

/// Lifecycle status of a game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The target has not been reached yet.
    #[default]
    Playing,
    /// The target is among the numbers in play.
    Won,
    /// The countdown of a timed mode ran out.
    Timeout,
}

/// A user-facing message describing the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Message {
    /// Neither operand order was valid for the armed operation.
    #[display("That operation doesn't work! Try another one.")]
    InvalidMove,
    /// A move was applied without reaching the target.
    #[display("{_0}")]
    Applied(Step),
}

/// What a game operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// Nothing changed.
    NoOp,
    /// The selection or the armed operation changed; no move was attempted.
    Selected,
    /// A move was attempted and rejected; selection and operation were cleared.
    Rejected,
    /// A move was applied.
    Applied(Step),
    /// A move was applied and produced the target.
    Won(Step),
}

/// One executed move, with the numbers as they were before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Numbers in play before the move, in display order.
    pub numbers: Vec<i64>,
    /// The move, with operands in the order they were applied.
    pub step: Step,
}
