use thiserror::Error;

/// Errors emitted by the covering-array generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A parameter was declared with no possible values.
    #[error("parameter {parameter} has an empty domain")]
    EmptyDomain { parameter: String },
    /// Invariant violation inside the index layer.
    #[error(transparent)]
    Index(#[from] pairforge_core::Error),
    /// A row index beyond the generated row count was requested.
    #[error("no generated row {index}, only {rows} rows exist")]
    OutOfRange { index: usize, rows: usize },
}
