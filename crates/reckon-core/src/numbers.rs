//! Small multisets of numbers in play.

use tinyvec::TinyVec;

/// An ordered sequence of numbers treated as a multiset.
///
/// Up to eight values are stored inline, which covers every difficulty tier,
/// so search states rarely allocate.
pub type Numbers = TinyVec<[i64; 8]>;

/// Removes the first occurrence of `value`.
///
/// Returns `false` if `value` is not present.
pub fn remove_first(numbers: &mut Numbers, value: i64) -> bool {
    match numbers.iter().position(|&n| n == value) {
        Some(index) => {
            numbers.remove(index);
            true
        }
        None => false,
    }
}

/// Returns the values sorted ascending.
///
/// Two sequences with the same values in a different order share this key,
/// which makes it the identity of a search state.
#[must_use]
pub fn canonical(numbers: &[i64]) -> Numbers {
    let mut key: Numbers = numbers.iter().copied().collect();
    key.sort_unstable();
    key
}
