use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::pairs::{ColumnPair, PairUniverse, ValuePair, column_pairs};
use crate::table::{Cell, Table};

/// Integer-indexed model of the parameter domains plus the covering array
/// under construction.
///
/// Columns are the parameters sorted descending by domain size (stable, so
/// ties keep the caller's key order); values are dense indices into each
/// domain. The index owns the fixed pair universe, tracks which value pairs
/// are already represented by some row, and exposes the growth primitives
/// the generator drives.
#[derive(Debug)]
pub struct DomainIndex {
    /// Domain size per sorted column.
    sizes: Vec<usize>,
    /// Sorted column -> original parameter position.
    source_order: Vec<usize>,
    universe: PairUniverse,
    /// Value pairs already covered, per column pair. Grows monotonically.
    removed: BTreeMap<ColumnPair, BTreeSet<ValuePair>>,
    removed_count: usize,
    /// Column pairs restricted to columns already placed in the table.
    active_pairs: Vec<ColumnPair>,
    table: Table,
}

impl DomainIndex {
    /// Builds the index from the caller's domain map. The map's iteration
    /// order is the tie-break order for the size sort and the identity used
    /// by [`DomainIndex::map`] later.
    pub fn new<C, E>(domains: &IndexMap<C, Vec<E>>) -> Result<Self>
    where
        C: Hash + Eq + fmt::Debug,
    {
        info!(parameters = domains.len(), "building domain index");
        for (key, values) in domains {
            if values.is_empty() {
                return Err(Error::EmptyDomain {
                    parameter: format!("{key:?}"),
                });
            }
        }

        let mut source_order: Vec<usize> = (0..domains.len()).collect();
        source_order.sort_by_key(|&position| std::cmp::Reverse(domains[position].len()));
        let sizes: Vec<usize> = source_order
            .iter()
            .map(|&position| domains[position].len())
            .collect();

        let universe = PairUniverse::new(&sizes);
        debug!(
            columns = sizes.len(),
            universe = universe.total(),
            "pair universe computed"
        );

        Ok(Self {
            sizes,
            source_order,
            universe,
            removed: BTreeMap::new(),
            removed_count: 0,
            active_pairs: Vec::new(),
            table: Table::new(),
        })
    }

    /// Size of the full coverage obligation across all column pairs.
    pub fn universe_size(&self) -> usize {
        self.universe.total()
    }

    /// Number of value pairs covered so far.
    pub fn covered_count(&self) -> usize {
        self.removed_count
    }

    /// Places the next unused column (in sorted order) as the new rightmost
    /// column and refreshes the active column-pair set.
    pub fn add_column_to_right(&mut self) -> Result<usize> {
        let next = self.table.columns();
        if next >= self.sizes.len() {
            return Err(Error::ExhaustedColumns {
                added: next,
                total: self.sizes.len(),
            });
        }
        if self.sizes[next] == 0 {
            return Err(Error::EmptyDomain {
                parameter: format!("column {next}"),
            });
        }
        self.table.push_column();
        self.active_pairs = column_pairs(self.table.columns());
        trace!(column = next, "column placed");
        Ok(next)
    }

    /// The domain of the current rightmost column.
    pub fn candidates_to_right(&self) -> std::ops::Range<usize> {
        0..self.sizes[self.right()]
    }

    /// Appends one value to the rightmost column and marks every pair it
    /// forms with the other columns of that row as covered.
    pub fn add_value_to_right(&mut self, value: usize) -> Result<()> {
        let right = self.right();
        let rows = self.table.max_len();
        if self.table.len(right) >= rows {
            return Err(Error::ColumnCapacity {
                column: right,
                rows,
            });
        }
        self.table.push(right, Cell::Set(value));
        let row = self.table.len(right) - 1;
        self.mark_row_pairs(right, row);
        Ok(())
    }

    /// Ranks two candidate values for the next rightmost-column slot: the
    /// one covering more still-open pairs wins; on a tie the one leaving
    /// fewer open pairs in the touched column pairs wins.
    pub fn compare_candidates(&self, a: usize, b: usize) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let (covered_a, open_a) = self.removal_potential(a);
        let (covered_b, open_b) = self.removal_potential(b);
        covered_a.cmp(&covered_b).then(open_b.cmp(&open_a))
    }

    /// True while the columns placed so far still have uncovered pairs, i.e.
    /// vertical growth is required before the next column.
    pub fn is_need_rows(&self) -> bool {
        let touched: usize = self
            .universe
            .iter()
            .filter(|(columns, _)| self.removed.contains_key(columns))
            .map(|(_, pairs)| pairs.len())
            .sum();
        self.removed_count != touched
    }

    /// True once the entire universe is covered.
    pub fn is_removed_all(&self) -> bool {
        self.removed_count == self.universe.total()
    }

    /// The residual obligation: per touched column pair, the value pairs not
    /// yet represented by any row, in universe order.
    pub fn not_removed_pairs(&self) -> BTreeMap<ColumnPair, Vec<ValuePair>> {
        let mut open = BTreeMap::new();
        for (columns, covered) in &self.removed {
            let pending: Vec<ValuePair> = self
                .universe
                .pairs_of(*columns)
                .iter()
                .copied()
                .filter(|pair| !covered.contains(pair))
                .collect();
            if !pending.is_empty() {
                open.insert(*columns, pending);
            }
        }
        open
    }

    /// Appends a brand-new row carrying the given pair in its two columns
    /// and unset slots everywhere else, then marks the pair covered.
    pub fn add_pair_to_row(&mut self, columns: ColumnPair, values: ValuePair) {
        for column in 0..self.table.columns() {
            let cell = if column == columns.first {
                Cell::Set(values.first)
            } else if column == columns.second {
                Cell::Set(values.second)
            } else {
                Cell::Unset
            };
            self.table.push(column, cell);
        }
        let row = self.table.len(columns.second) - 1;
        self.mark_row_pairs(columns.second, row);
    }

    /// Bootstraps the table: places the two largest-domain columns and emits
    /// one row per value pair between them, so they start fully covered
    /// against each other.
    pub fn fill_start(&mut self) -> Result<()> {
        info!("seeding table with the two largest columns");
        let first = self.add_column_to_right()?;
        let second = self.add_column_to_right()?;
        let columns = ColumnPair::new(first, second);
        for values in self.universe.pairs_of(columns).to_vec() {
            self.add_pair_to_row(columns, values);
        }
        debug!(rows = self.table.max_len(), "seed rows emitted");
        Ok(())
    }

    /// Horizontal growth. First pass appends every value of the new column
    /// once, in domain order. Second pass tops the column up to the current
    /// row count with the greedy best candidate, recycling the pool once it
    /// empties; this diversifies value usage beyond what coverage requires.
    pub fn add_column(&mut self) -> Result<()> {
        let right = self.add_column_to_right()?;
        let candidates: Vec<usize> = self.candidates_to_right().collect();

        for &value in &candidates {
            self.add_value_to_right(value)?;
        }

        let mut pool = candidates.clone();
        while self.table.len(right) < self.table.max_len() {
            if pool.is_empty() {
                pool = candidates.clone();
            }
            let mut best = pool[0];
            for &candidate in &pool[1..] {
                if self.compare_candidates(candidate, best) == Ordering::Greater {
                    best = candidate;
                }
            }
            pool.retain(|&value| value != best);
            self.add_value_to_right(best)?;
        }

        trace!(column = right, rows = self.table.max_len(), "column grown");
        Ok(())
    }

    /// Vertical growth. For every still-open value pair, reuses an existing
    /// row whose slots can take it (second slot already matching and first
    /// unset, or both unset) before appending a fresh row.
    pub fn add_row(&mut self) {
        let open = self.not_removed_pairs();
        for (columns, pending) in open {
            for values in pending {
                if self.backfill_pair(columns, values) {
                    self.insert_removed(columns, values);
                } else {
                    self.add_pair_to_row(columns, values);
                }
            }
        }
        trace!(rows = self.table.max_len(), "row growth pass finished");
    }

    /// Final pass: every remaining unset slot takes value index 0, the first
    /// value of column 0. All coverage obligations are met by now, so the
    /// choice is coverage-irrelevant; index 0 is valid in every column.
    pub fn fill_unset(&mut self) {
        info!("padding undecided slots");
        self.table.pad_unset(0);
    }

    /// Translates the finished table back into caller domain values, one
    /// output list per parameter, in the caller's key order.
    pub fn map<C, E>(&self, domains: &IndexMap<C, Vec<E>>) -> Result<IndexMap<C, Vec<E>>>
    where
        C: Clone + Eq + Hash,
        E: Clone,
    {
        if !self.is_removed_all() {
            return Err(Error::IncompleteCoverage {
                remaining: self.universe.total() - self.removed_count,
            });
        }
        if self.table.columns() != self.sizes.len() {
            return Err(Error::CorruptTable(format!(
                "{} of {} columns placed",
                self.table.columns(),
                self.sizes.len()
            )));
        }

        let rows = self.table.max_len();
        let mut sorted_of = vec![0; self.source_order.len()];
        for (column, &source) in self.source_order.iter().enumerate() {
            sorted_of[source] = column;
        }

        let mut cases = IndexMap::with_capacity(domains.len());
        for (position, (key, values)) in domains.iter().enumerate() {
            let column = sorted_of[position];
            let cells = self.table.column(column);
            if cells.len() != rows {
                return Err(Error::CorruptTable(format!(
                    "column {column} has {} rows, expected {rows}",
                    cells.len()
                )));
            }
            let mut out = Vec::with_capacity(rows);
            for cell in cells {
                let index = cell.value().ok_or_else(|| {
                    Error::CorruptTable(format!("column {column} still has undecided slots"))
                })?;
                let value = values.get(index).ok_or_else(|| {
                    Error::CorruptTable(format!(
                        "value index {index} out of range for column {column}"
                    ))
                })?;
                out.push(value.clone());
            }
            cases.insert(key.clone(), out);
        }

        info!(rows, "index mapped back to domain values");
        Ok(cases)
    }

    fn right(&self) -> usize {
        self.table.columns() - 1
    }

    fn cell_value(&self, column: usize, row: usize) -> Option<usize> {
        self.table
            .column(column)
            .get(row)
            .and_then(|cell| cell.value())
    }

    /// Marks every pair the given row forms between `column` and the columns
    /// left of it, skipping slots that are still unset.
    fn mark_row_pairs(&mut self, column: usize, row: usize) {
        let pairs: Vec<ColumnPair> = self
            .active_pairs
            .iter()
            .copied()
            .filter(|pair| pair.second == column)
            .collect();
        for columns in pairs {
            let first = self.cell_value(columns.first, row);
            let second = self.cell_value(columns.second, row);
            if let (Some(first), Some(second)) = (first, second) {
                self.insert_removed(columns, ValuePair::new(first, second));
            }
        }
    }

    fn insert_removed(&mut self, columns: ColumnPair, pair: ValuePair) -> bool {
        if self.removed.entry(columns).or_default().insert(pair) {
            self.removed_count += 1;
            true
        } else {
            false
        }
    }

    fn is_removed(&self, columns: ColumnPair, pair: ValuePair) -> bool {
        self.removed
            .get(&columns)
            .is_some_and(|covered| covered.contains(&pair))
    }

    fn count_not_removed(&self, columns: ColumnPair) -> usize {
        let covered = self.removed.get(&columns).map_or(0, BTreeSet::len);
        self.universe.pairs_of(columns).len() - covered
    }

    /// For a candidate landing in the next rightmost-column slot: how many
    /// open pairs it would cover against the partner slots of that row, and
    /// the total open pairs in those same column pairs. Unset partners
    /// contribute nothing.
    fn removal_potential(&self, value: usize) -> (usize, usize) {
        let right = self.right();
        let row = self.table.len(right);
        let mut newly_covered = 0;
        let mut open = 0;
        for columns in self.active_pairs.iter().filter(|pair| pair.second == right) {
            let Some(partner) = self.cell_value(columns.first, row) else {
                continue;
            };
            if !self.is_removed(*columns, ValuePair::new(partner, value)) {
                newly_covered += 1;
                open += self.count_not_removed(*columns);
            }
        }
        (newly_covered, open)
    }

    /// Scans existing rows for a slot pair that can absorb `values`: the
    /// second column already holding the pair's second value with the first
    /// slot unset, or both slots unset. Returns false when no row fits.
    fn backfill_pair(&mut self, columns: ColumnPair, values: ValuePair) -> bool {
        for row in 0..self.table.len(columns.second) {
            let first = self.table.cell(columns.first, row);
            let second = self.table.cell(columns.second, row);
            if second.value() == Some(values.second) && first.is_unset() {
                self.table.set(columns.first, row, Cell::Set(values.first));
                return true;
            }
            if first.is_unset() && second.is_unset() {
                self.table.set(columns.first, row, Cell::Set(values.first));
                self.table.set(columns.second, row, Cell::Set(values.second));
                return true;
            }
        }
        false
    }
}
