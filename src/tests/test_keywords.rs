use approx::assert_relative_eq;

use crate::keywords::{KeywordVocabulary, ENERGY_KEYWORDS, VISUAL_DIMS};

#[test]
fn test_energy_vocabulary() {
    let vocab = KeywordVocabulary::default();
    assert_eq!(vocab.len(), ENERGY_KEYWORDS.len());
    assert_eq!(vocab.terms()[7], "FERC");
}

#[test]
fn test_encode_flags_case_insensitively() {
    let vocab = KeywordVocabulary::energy();
    let v = vocab.encode("Energy, ferc , GRID");

    assert_eq!(v.len(), 14);
    let hits: Vec<usize> = v
        .iter()
        .enumerate()
        .filter(|&(_, &f)| f == 1.0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hits, vec![0, 4, 7]);
    assert_relative_eq!(vocab.relevance(&v), 3.0 / 14.0);
}

#[test]
fn test_encode_requires_whole_keyword() {
    let vocab = KeywordVocabulary::energy();
    assert!(vocab.encode("energy policy, smart-grid").iter().all(|&f| f == 0.0));
    assert!(vocab.encode("").iter().all(|&f| f == 0.0));
}

#[test]
fn test_posting_item_truncates_for_plotting() {
    let vocab = KeywordVocabulary::energy();
    let item = vocab.posting_item("Grid Planner", "MISO", "hydrogen, grid, energy", VISUAL_DIMS);

    assert_eq!(item.label, "Grid Planner - MISO");
    assert_eq!(item.vector, vec![1.0, 0.0, 1.0]);
}

#[test]
fn test_custom_vocabulary() {
    let vocab = KeywordVocabulary::new(["solar", "wind"]);
    assert_eq!(vocab.encode("wind"), vec![0.0, 1.0]);

    let empty = KeywordVocabulary::new(Vec::<String>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.relevance(&[]), 0.0);
}
