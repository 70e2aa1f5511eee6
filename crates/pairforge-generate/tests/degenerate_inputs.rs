use indexmap::IndexMap;

use pairforge_generate::{GenerateError, PairwiseGenerator};

#[test]
fn zero_parameters_produce_zero_rows() {
    let input: IndexMap<&str, Vec<&str>> = IndexMap::new();
    let generator = PairwiseGenerator::new(input).unwrap();

    assert_eq!(generator.row_count(), 0);
    assert!(generator.cases().is_empty());
    assert_eq!(generator.rows().count(), 0);
}

#[test]
fn one_parameter_passes_its_domain_through() {
    let mut input: IndexMap<&str, Vec<i32>> = IndexMap::new();
    input.insert("level", vec![1, 2, 3]);
    let generator = PairwiseGenerator::new(input).unwrap();

    assert_eq!(generator.row_count(), 3);
    assert_eq!(generator.cases()["level"], vec![1, 2, 3]);
}

#[test]
fn one_parameter_with_one_value_yields_one_row() {
    let mut input: IndexMap<&str, Vec<i32>> = IndexMap::new();
    input.insert("A", vec![1]);
    let generator = PairwiseGenerator::new(input).unwrap();

    assert_eq!(generator.row_count(), 1);
    let row = generator.row_at(0).unwrap();
    assert_eq!(row["A"], 1);
}

#[test]
fn empty_domain_fails_construction() {
    let mut input: IndexMap<&str, Vec<i32>> = IndexMap::new();
    input.insert("A", Vec::new());
    let err = PairwiseGenerator::new(input).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyDomain { .. }));

    // Also when other parameters are fine.
    let mut input: IndexMap<&str, Vec<i32>> = IndexMap::new();
    input.insert("A", vec![1, 2]);
    input.insert("B", Vec::new());
    let err = PairwiseGenerator::new(input).unwrap_err();
    assert!(matches!(err, GenerateError::EmptyDomain { .. }));
}

#[test]
fn row_at_rejects_out_of_range_indices() {
    let mut input: IndexMap<&str, Vec<i32>> = IndexMap::new();
    input.insert("a", vec![1, 2]);
    input.insert("b", vec![3, 4]);
    let generator = PairwiseGenerator::new(input).unwrap();

    assert!(generator.row_at(generator.row_count() - 1).is_ok());
    let err = generator.row_at(generator.row_count()).unwrap_err();
    assert!(matches!(err, GenerateError::OutOfRange { .. }));
}

#[test]
fn rows_view_yields_every_row_once_in_order() {
    let mut input: IndexMap<&str, Vec<&str>> = IndexMap::new();
    input.insert("a", vec!["1", "2"]);
    input.insert("b", vec!["x", "y"]);
    let generator = PairwiseGenerator::new(input).unwrap();

    let mut rows = generator.rows();
    assert_eq!(rows.len(), generator.row_count());

    let collected: Vec<Vec<&str>> = rows.by_ref().collect();
    assert_eq!(collected.len(), generator.row_count());
    // Consumed; the same iterator yields nothing more.
    assert!(rows.next().is_none());

    for (index, row) in collected.iter().enumerate() {
        let by_index = generator.row_at(index).unwrap();
        let expected: Vec<&str> = by_index.values().copied().collect();
        assert_eq!(*row, expected);
    }

    // A fresh view restarts from the first row.
    assert_eq!(generator.rows().count(), generator.row_count());
}
