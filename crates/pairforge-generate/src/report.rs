use serde::{Deserialize, Serialize};

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Number of input parameters.
    pub parameters: usize,
    /// Number of generated test rows.
    pub rows: usize,
    /// Size of the pair universe (all value pairs across all column pairs).
    pub pair_universe: usize,
    /// Value pairs covered; equals `pair_universe` after a successful run.
    pub pairs_covered: usize,
}

impl CoverageReport {
    pub(crate) fn degenerate(parameters: usize, rows: usize) -> Self {
        Self {
            parameters,
            rows,
            pair_universe: 0,
            pairs_covered: 0,
        }
    }
}
