use indexmap::IndexMap;

use pairforge_generate::PairwiseGenerator;

fn domains(entries: &[(&'static str, &[&'static str])]) -> IndexMap<&'static str, Vec<&'static str>> {
    entries.iter()
        .map(|&(key, values)| (key, values.to_vec()))
        .collect()
}

/// Every value pair of every parameter pair must co-occur in some row.
fn assert_pairwise_complete(
    input: &IndexMap<&str, Vec<&str>>,
    generator: &PairwiseGenerator<&str, &str>,
) {
    let cases = generator.cases();
    for (p, (_, domain_p)) in input.iter().enumerate() {
        for (q, (_, domain_q)) in input.iter().enumerate().skip(p + 1) {
            for v in domain_p {
                for w in domain_q {
                    let covered = (0..generator.row_count())
                        .any(|row| cases[p][row] == *v && cases[q][row] == *w);
                    assert!(covered, "pair ({v}, {w}) of parameters {p} and {q} missing");
                }
            }
        }
    }
}

#[test]
fn three_parameters_cover_all_pairs() {
    let input = domains(&[
        ("A", &["1", "2"]),
        ("B", &["x", "y"]),
        ("C", &["p", "q"]),
    ]);
    let generator = PairwiseGenerator::new(input.clone()).unwrap();

    assert_pairwise_complete(&input, &generator);
    // Lower bound is the largest domain-pair product.
    assert!(generator.row_count() >= 4);
    assert_eq!(generator.report().pair_universe, 12);
    assert_eq!(generator.report().pairs_covered, 12);
}

#[test]
fn uneven_domains_cover_all_pairs() {
    let input = domains(&[
        ("browser", &["firefox", "chrome", "safari", "edge"]),
        ("os", &["linux", "macos", "windows"]),
        ("locale", &["en", "de", "pt"]),
        ("network", &["wifi", "offline"]),
        ("dark_mode", &["on", "off"]),
    ]);
    let generator = PairwiseGenerator::new(input.clone()).unwrap();

    assert_pairwise_complete(&input, &generator);
}

#[test]
fn output_is_rectangular_in_input_key_order() {
    let input = domains(&[
        ("last", &["a", "b"]),
        ("biggest", &["1", "2", "3", "4"]),
        ("mid", &["x", "y", "z"]),
    ]);
    let generator = PairwiseGenerator::new(input).unwrap();
    let cases = generator.cases();

    let keys: Vec<_> = cases.keys().copied().collect();
    assert_eq!(keys, vec!["last", "biggest", "mid"]);
    assert!(
        cases
            .values()
            .all(|column| column.len() == generator.row_count())
    );
}

#[test]
fn row_count_stays_within_the_trivial_worst_case() {
    let input = domains(&[
        ("a", &["1", "2", "3", "4", "5"]),
        ("b", &["x", "y", "z", "w"]),
        ("c", &["p", "q", "r"]),
        ("d", &["m", "n"]),
    ]);
    let generator = PairwiseGenerator::new(input).unwrap();

    // Never worse than the full product of the two largest domains.
    assert!(generator.row_count() <= 5 * 4);
    assert!(generator.row_count() >= 5);
}

#[test]
fn generation_is_deterministic() {
    let input = domains(&[
        ("a", &["1", "2", "3"]),
        ("b", &["x", "y", "z"]),
        ("c", &["p", "q"]),
        ("d", &["m", "n"]),
    ]);

    let first = PairwiseGenerator::new(input.clone()).unwrap();
    let second = PairwiseGenerator::new(input).unwrap();

    assert_eq!(first.row_count(), second.row_count());
    assert_eq!(first.cases(), second.cases());
    assert_eq!(first.report(), second.report());
}

#[test]
fn generated_values_come_from_the_declared_domains() {
    let input = domains(&[
        ("a", &["1", "2", "3"]),
        ("b", &["x", "y"]),
        ("c", &["p", "q"]),
    ]);
    let generator = PairwiseGenerator::new(input.clone()).unwrap();

    for (key, column) in generator.cases() {
        let domain = &input[key];
        assert!(column.iter().all(|value| domain.contains(value)));
    }
}

#[test]
fn two_parameters_need_the_full_product() {
    let input = domains(&[("a", &["1", "2", "3"]), ("b", &["x", "y"])]);
    let generator = PairwiseGenerator::new(input.clone()).unwrap();

    assert_pairwise_complete(&input, &generator);
    // With exactly two parameters every combination is its own pair.
    assert_eq!(generator.row_count(), 6);
}
