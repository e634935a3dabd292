use tinyvec::ArrayVec;

/// Up to two selected positions in the numbers in play, in selection order.
///
/// The first selected number is the left-hand operand the player intends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: ArrayVec<[usize; 2]>,
}

impl Selection {
    /// Returns the selected positions in selection order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns how many numbers are selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns both positions if exactly two are selected.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match *self.indices.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Creates a selection, or `None` if there are more than two indices or a
    /// duplicate.
    pub(crate) fn from_indices(indices: &[usize]) -> Option<Self> {
        match *indices {
            [] => Some(Self::default()),
            [index] => Some(Self::from_iter_unchecked([index])),
            [first, second] if first != second => Some(Self::from_iter_unchecked([first, second])),
            _ => None,
        }
    }

    fn from_iter_unchecked<const N: usize>(indices: [usize; N]) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }

    /// Deselects `index` if selected; otherwise selects it as the first or
    /// second number, replacing the second one if two are already selected.
    pub(crate) fn toggle(&mut self, index: usize) {
        if let Some(position) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(position);
        } else if self.indices.len() < 2 {
            self.indices.push(index);
        } else {
            self.indices[1] = index;
        }
    }
}
