use std::collections::BTreeMap;

/// An unordered pair of columns, stored with `first < second` in sorted
/// column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnPair {
    pub first: usize,
    pub second: usize,
}

impl ColumnPair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// A pair of value indices belonging to one [`ColumnPair`]: `first` comes
/// from the pair's first column, `second` from its second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValuePair {
    pub first: usize,
    pub second: usize,
}

impl ValuePair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// All column pairs over `columns` columns, without repetition: for columns
/// 0,1,2 this is (0,1), (0,2), (1,2).
pub fn column_pairs(columns: usize) -> Vec<ColumnPair> {
    let mut pairs = Vec::with_capacity(columns * columns.saturating_sub(1) / 2);
    for first in 0..columns {
        for second in (first + 1)..columns {
            pairs.push(ColumnPair::new(first, second));
        }
    }
    pairs
}

/// The fixed coverage universe: for every column pair, the full cartesian
/// product of the two columns' value indices. Computed once at construction
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PairUniverse {
    pairs: BTreeMap<ColumnPair, Vec<ValuePair>>,
    total: usize,
}

impl PairUniverse {
    /// Build the universe from per-column domain sizes (columns already
    /// sorted, value indices dense 0..size).
    pub fn new(sizes: &[usize]) -> Self {
        let mut pairs = BTreeMap::new();
        let mut total = 0;
        for columns in column_pairs(sizes.len()) {
            let mut product = Vec::with_capacity(sizes[columns.first] * sizes[columns.second]);
            for first in 0..sizes[columns.first] {
                for second in 0..sizes[columns.second] {
                    product.push(ValuePair::new(first, second));
                }
            }
            total += product.len();
            pairs.insert(columns, product);
        }
        Self { pairs, total }
    }

    /// Every value pair a column pair must eventually cover.
    pub fn pairs_of(&self, columns: ColumnPair) -> &[ValuePair] {
        self.pairs.get(&columns).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Size of the whole universe across all column pairs.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnPair, &Vec<ValuePair>)> {
        self.pairs.iter()
    }
}
