/// One slot of the in-progress covering array.
///
/// `Unset` means the slot is not decided yet and may still be claimed by
/// vertical growth; `Padded` means it was filled with the coverage-irrelevant
/// default after all pairs were covered. Keeping the two apart makes the
/// final rectangularity check unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unset,
    Set(usize),
    Padded(usize),
}

impl Cell {
    /// The decided value index, if any.
    pub fn value(self) -> Option<usize> {
        match self {
            Cell::Unset => None,
            Cell::Set(value) | Cell::Padded(value) => Some(value),
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Cell::Unset)
    }
}

/// The covering array under construction, column-major. Columns are appended
/// as horizontal growth places them; mid-construction they may have different
/// lengths, and only [`Table::max_len`] counts as the current row budget.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns placed so far.
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Appends a new empty column and returns its position.
    pub fn push_column(&mut self) -> usize {
        self.columns.push(Vec::new());
        self.columns.len() - 1
    }

    pub fn len(&self, column: usize) -> usize {
        self.columns[column].len()
    }

    /// Length of the longest column, i.e. the current row count.
    pub fn max_len(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.columns[column][row]
    }

    pub fn set(&mut self, column: usize, row: usize, cell: Cell) {
        self.columns[column][row] = cell;
    }

    pub fn push(&mut self, column: usize, cell: Cell) {
        self.columns[column].push(cell);
    }

    pub fn column(&self, column: usize) -> &[Cell] {
        &self.columns[column]
    }

    /// Replaces every remaining unset slot in every column with `value`.
    pub fn pad_unset(&mut self, value: usize) {
        for column in &mut self.columns {
            for cell in column.iter_mut() {
                if cell.is_unset() {
                    *cell = Cell::Padded(value);
                }
            }
        }
    }

    /// True when every column has exactly `rows` decided entries.
    pub fn is_rectangular(&self, rows: usize) -> bool {
        self.columns
            .iter()
            .all(|c| c.len() == rows && c.iter().all(|cell| !cell.is_unset()))
    }
}
