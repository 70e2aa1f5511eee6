//! Pairwise covering-array generation for test-case design.
//!
//! This crate turns a map of parameter domains into the minimal-ish set of
//! test rows in which every value pair of any two parameters co-occurs at
//! least once. The index bookkeeping lives in `pairforge-core`.

pub mod errors;
pub mod generator;
pub mod report;
pub mod rows;

pub use errors::GenerateError;
pub use generator::PairwiseGenerator;
pub use report::CoverageReport;
pub use rows::Rows;
