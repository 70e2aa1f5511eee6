use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, info};

use pairforge_core::DomainIndex;

use crate::errors::GenerateError;
use crate::report::CoverageReport;
use crate::rows::Rows;

/// Pairwise (2-wise) covering-array generator.
///
/// Construction validates the input and runs the whole greedy growth
/// protocol; the finished row set is immutable afterwards and exposed
/// through [`cases`](Self::cases), [`row_at`](Self::row_at), and
/// [`rows`](Self::rows).
#[derive(Debug, Clone)]
pub struct PairwiseGenerator<C, E> {
    cases: IndexMap<C, Vec<E>>,
    row_count: usize,
    report: CoverageReport,
}

impl<C, E> PairwiseGenerator<C, E>
where
    C: Clone + Eq + Hash + fmt::Debug,
    E: Clone,
{
    /// Generates the covering array for the given parameter domains. The
    /// map's iteration order fixes tie-breaks and output ordering, so the
    /// same input always produces the same output.
    pub fn new(domains: IndexMap<C, Vec<E>>) -> Result<Self, GenerateError> {
        for (key, values) in &domains {
            if values.is_empty() {
                return Err(GenerateError::EmptyDomain {
                    parameter: format!("{key:?}"),
                });
            }
        }

        info!(parameters = domains.len(), "pairwise generation started");

        if domains.is_empty() {
            debug!("no parameters, empty result");
            return Ok(Self {
                cases: domains,
                row_count: 0,
                report: CoverageReport::degenerate(0, 0),
            });
        }

        if domains.len() == 1 {
            // A single parameter has nothing to pair with; its domain is the
            // result verbatim.
            let row_count = domains[0].len();
            debug!(rows = row_count, "single parameter, domain passed through");
            return Ok(Self {
                report: CoverageReport::degenerate(1, row_count),
                cases: domains,
                row_count,
            });
        }

        let mut index = DomainIndex::new(&domains)?;
        index.fill_start()?;
        while !index.is_removed_all() {
            debug!("horizontal growth");
            index.add_column()?;
            while index.is_need_rows() {
                debug!("vertical growth");
                index.add_row();
            }
        }
        index.fill_unset();

        let cases = index.map(&domains)?;
        let row_count = cases.first().map_or(0, |(_, column)| column.len());
        let report = CoverageReport {
            parameters: domains.len(),
            rows: row_count,
            pair_universe: index.universe_size(),
            pairs_covered: index.covered_count(),
        };

        info!(
            rows = row_count,
            pairs = report.pairs_covered,
            "pairwise generation finished"
        );

        Ok(Self {
            cases,
            row_count,
            report,
        })
    }

    /// Number of generated test rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The generated columns, keyed by parameter in input order. All columns
    /// have [`row_count`](Self::row_count) entries.
    pub fn cases(&self) -> &IndexMap<C, Vec<E>> {
        &self.cases
    }

    /// The `index`-th full test case.
    pub fn row_at(&self, index: usize) -> Result<IndexMap<C, E>, GenerateError> {
        if index >= self.row_count {
            return Err(GenerateError::OutOfRange {
                index,
                rows: self.row_count,
            });
        }
        Ok(self
            .cases
            .iter()
            .map(|(key, column)| (key.clone(), column[index].clone()))
            .collect())
    }

    /// A fresh forward-only pass over all rows, in insertion order.
    pub fn rows(&self) -> Rows<'_, C, E> {
        Rows::new(&self.cases, self.row_count)
    }

    /// Summary of the finished run.
    pub fn report(&self) -> &CoverageReport {
        &self.report
    }
}
