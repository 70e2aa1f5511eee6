use indexmap::IndexMap;

/// Forward-only view over generated rows, one `Vec<E>` per row with values
/// in parameter order. Finite and not resettable; call
/// [`PairwiseGenerator::rows`](crate::PairwiseGenerator::rows) again for a
/// fresh pass.
#[derive(Debug)]
pub struct Rows<'a, C, E> {
    cases: &'a IndexMap<C, Vec<E>>,
    current: usize,
    total: usize,
}

impl<'a, C, E> Rows<'a, C, E> {
    pub(crate) fn new(cases: &'a IndexMap<C, Vec<E>>, total: usize) -> Self {
        Self {
            cases,
            current: 0,
            total,
        }
    }
}

impl<C, E: Clone> Iterator for Rows<'_, C, E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.total {
            return None;
        }
        let row = self
            .cases
            .values()
            .map(|column| column[self.current].clone())
            .collect();
        self.current += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.current;
        (remaining, Some(remaining))
    }
}

impl<C, E: Clone> ExactSizeIterator for Rows<'_, C, E> {}
