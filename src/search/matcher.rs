// file: src/search/matcher.rs
// description: all-terms matching and term-frequency scoring of a document
// reference: https://doc.rust-lang.org/std/primitive.str.html#method.matches

use crate::parser::TermSet;

/// Scores `content` against every term, or returns `None` when any term is
/// missing. Matching is plain substring containment on the lowercased content.
///
/// Each term contributes its own non-overlapping occurrence count, so
/// positionally overlapping hits of different terms are all counted.
/// An empty term set scores `Some(0)`.
pub fn evaluate(content: &str, terms: &TermSet) -> Option<usize> {
    let normalized = content.to_lowercase();
    let mut score = 0;

    for term in terms.iter() {
        if !normalized.contains(term) {
            return None;
        }
        score += count_occurrences(&normalized, term);
    }

    Some(score)
}

/// Non-overlapping, left-to-right occurrences of `term` in `text`.
pub fn count_occurrences(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    text.matches(term).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::QueryTokenizer;
    use proptest::prelude::*;

    fn terms(query: &str) -> TermSet {
        QueryTokenizer::new().tokenize(query)
    }

    #[test]
    fn test_all_terms_required() {
        let content = "The rover crossed the crater.";

        assert_eq!(evaluate(content, &terms("rover crater")), Some(2));
        assert_eq!(evaluate(content, &terms("rover volcano")), None);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(evaluate("MARS Mars mars", &terms("mars")), Some(3));
    }

    #[test]
    fn test_substring_without_word_boundary() {
        assert_eq!(evaluate("Marsupials are not Martian.", &terms("mars")), Some(1));
    }

    #[test]
    fn test_overlapping_occurrences_of_one_term_counted_once() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
    }

    #[test]
    fn test_distinct_terms_may_overlap() {
        // "mars" and "marsh" both count the same span; this is expected.
        assert_eq!(evaluate("marsh", &terms("mars marsh")), Some(2));
    }

    #[test]
    fn test_empty_term_set_scores_zero() {
        assert_eq!(evaluate("anything", &TermSet::default()), Some(0));
    }

    proptest! {
        #[test]
        fn prop_and_semantics(content in "[a-e ]{0,40}", query in "[a-e]{1,3}( [a-e]{1,3}){0,2}") {
            let term_set = terms(&query);
            let lowered = content.to_lowercase();
            let expected = term_set.iter().all(|term| lowered.contains(term));

            prop_assert_eq!(evaluate(&content, &term_set).is_some(), expected);
        }

        #[test]
        fn prop_score_monotonic(content in "[a-e ]{0,40}", query in "[a-e]{1,3}( [a-e]{1,3}){0,2}", extra in 0usize..3) {
            let term_set = terms(&query);
            if let Some(base) = evaluate(&content, &term_set) {
                let term = term_set.iter().nth(extra % term_set.len()).unwrap_or_default();
                let extended = format!("{} {}", content, term);

                prop_assert!(evaluate(&extended, &term_set).unwrap_or(0) >= base);
            }
        }
    }
}
