use reckon_core::{Operation, Step};

/// Enumerates every valid move over `numbers` using the `operations` allowed.
///
/// Each unordered pair of positions `(i, j)` with `i < j` is tried with every
/// operation, first as `numbers[i] op numbers[j]` and then, for subtraction and
/// division only, as `numbers[j] op numbers[i]`. Every ordering the operation
/// accepts yields one [`Step`].
///
/// The order is: `i` ascending, then `j` ascending, then operations in the
/// order given, forward orientation before reverse. Picking from this list with
/// a seeded random source is therefore reproducible.
///
/// # Examples
///
/// ```
/// use reckon_core::Operation;
/// use reckon_solver::find_valid_moves;
///
/// let moves = find_valid_moves(&[5, 10], &[Operation::Add, Operation::Subtract]);
/// let rendered: Vec<_> = moves.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["5 + 10 = 15", "10 - 5 = 5"]);
/// ```
#[must_use]
pub fn find_valid_moves(numbers: &[i64], operations: &[Operation]) -> Vec<Step> {
    let mut moves = Vec::new();
    for (i, &a) in numbers.iter().enumerate() {
        for &b in &numbers[i + 1..] {
            for &operation in operations {
                if let Some(step) = Step::new(operation, a, b) {
                    moves.push(step);
                }
                if !operation.is_commutative()
                    && let Some(step) = Step::new(operation, b, a)
                {
                    moves.push(step);
                }
            }
        }
    }
    moves
}
