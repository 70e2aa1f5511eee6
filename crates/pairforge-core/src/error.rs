use thiserror::Error;

/// Errors emitted by the covering-array index.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was declared with no possible values.
    #[error("parameter {parameter} has an empty domain")]
    EmptyDomain { parameter: String },
    /// Horizontal growth was requested but every column is already placed.
    #[error("no columns left to add ({added} of {total} already placed)")]
    ExhaustedColumns { added: usize, total: usize },
    /// A value was appended to a column that already reached the table's row count.
    #[error("column {column} is full at {rows} rows")]
    ColumnCapacity { column: usize, rows: usize },
    /// The table was mapped back to domain values before coverage completed.
    #[error("coverage incomplete: {remaining} value pairs still uncovered")]
    IncompleteCoverage { remaining: usize },
    /// The finished table is not rectangular or references an unknown value.
    #[error("corrupt generated table: {0}")]
    CorruptTable(String),
}

/// Convenience alias for results returned by the index layer.
pub type Result<T> = std::result::Result<T, Error>;
