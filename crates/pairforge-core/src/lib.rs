//! Index/model layer for pairwise covering-array generation.
//!
//! This crate owns the integer-indexed view of the parameter domains, the
//! fixed pair universe, and the greedy two-phase growth primitives that the
//! generator crate drives.

pub mod error;
pub mod index;
pub mod pairs;
pub mod table;

pub use error::{Error, Result};
pub use index::DomainIndex;
pub use pairs::{ColumnPair, PairUniverse, ValuePair, column_pairs};
pub use table::{Cell, Table};
