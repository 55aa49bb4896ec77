// file: src/search/engine.rs
// description: sequential scan of a document store with ranking of matching documents
// reference: tokenizes the query, scores each document, parses headers of matches

use crate::models::{SearchResult, SearchResults};
use crate::parser::{HeaderParser, QueryTokenizer, TermSet};
use crate::repository::DocumentStore;
use crate::search::matcher::evaluate;
use crate::utils::OperationTimer;
use tracing::{debug, info, warn};

pub struct SearchEngine<S> {
    store: S,
    tokenizer: QueryTokenizer,
    parser: HeaderParser,
}

impl<S: DocumentStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_parser(store, HeaderParser::new())
    }

    pub fn with_parser(store: S, parser: HeaderParser) -> Self {
        Self {
            store,
            tokenizer: QueryTokenizer::new(),
            parser,
        }
    }

    /// Runs a full scan for `query`. Never fails: an empty term set or a
    /// missing store yields an empty result list.
    pub fn search(&self, query: &str) -> SearchResults {
        let timer = OperationTimer::new("search");

        let terms = self.tokenizer.tokenize(query);
        if terms.is_empty() {
            debug!("Query {:?} has no terms", query);
            return SearchResults::empty(query, timer.finish());
        }

        if !self.store.is_available() {
            warn!("Document store unavailable, returning no results");
            return SearchResults::empty(query, timer.finish());
        }

        let ids = match self.store.document_ids() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to enumerate documents: {}", e);
                return SearchResults::empty(query, timer.finish());
            }
        };

        let scanned = ids.len();
        let mut results: Vec<SearchResult> = ids
            .iter()
            .filter_map(|id| self.evaluate_document(id, &terms))
            .collect();

        let duration = timer.finish_with_count(scanned);
        rank(&mut results);

        info!(
            "Query {:?}: {} of {} documents matched",
            query,
            results.len(),
            scanned
        );

        SearchResults {
            query: query.to_string(),
            results,
            duration,
        }
    }

    fn evaluate_document(&self, id: &S::Id, terms: &TermSet) -> Option<SearchResult> {
        let document = match self.store.load(id) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping unreadable document: {}", e);
                return None;
            }
        };

        let Some(score) = evaluate(&document.content, terms) else {
            debug!("Excluded {}", document.name);
            return None;
        };

        let header = self.parser.parse(&document.content);
        let snippet = header.snippet(&document.content).to_string();
        debug!("Matched {} with score {}", document.name, score);

        Some(SearchResult::new(
            document.name,
            header.title,
            header.description,
            score,
            snippet,
        ))
    }
}

/// Descending by score; the sort is stable so ties keep enumeration order.
pub fn rank(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn names(results: &SearchResults) -> Vec<&str> {
        results.results.iter().map(|r| r.filename.as_str()).collect()
    }

    #[test]
    fn test_search_ranks_by_score() {
        let store = MemoryStore::new()
            .with_document("one.txt", "rover")
            .with_document("three.txt", "rover rover rover")
            .with_document("none.txt", "lander")
            .with_document("two.txt", "Rover ROVER");

        let results = SearchEngine::new(store).search("rover");

        assert_eq!(names(&results), vec!["three.txt", "two.txt", "one.txt"]);
        assert_eq!(results.results[0].score, 3);
    }

    #[test]
    fn test_search_builds_result_from_header() {
        let store = MemoryStore::new().with_document(
            "a.txt",
            "title: Mars\n\nRed planet.\nDusty surface.\n\nFull body text here about mars mars rover.",
        );

        let results = SearchEngine::new(store).search("mars");

        assert_eq!(results.len(), 1);
        let hit = &results.results[0];
        assert_eq!(hit.filename, "a.txt");
        assert_eq!(hit.title, "Mars");
        assert_eq!(hit.description, "Red planet. / Dusty surface.");
        assert_eq!(hit.score, 3);
        assert!(hit.snippet.starts_with("Full body text here"));
    }

    #[test]
    fn test_search_requires_every_term() {
        let store = MemoryStore::new()
            .with_document("both.txt", "mars rover")
            .with_document("only.txt", "mars lander");

        let results = SearchEngine::new(store).search("mars rover");

        assert_eq!(names(&results), vec!["both.txt"]);
    }

    #[test]
    fn test_tab_stays_inside_a_term() {
        let store = MemoryStore::new()
            .with_document("spaced.txt", "mars and rover, no tab")
            .with_document("tabbed.txt", "log: mars\trover");

        let results = SearchEngine::new(store).search("Mars\tRover");

        assert_eq!(names(&results), vec!["tabbed.txt"]);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let store = MemoryStore::new().with_document("a.txt", "anything");

        let results = SearchEngine::new(store).search(" ,. ");

        assert!(results.is_empty());
        assert_eq!(results.query, " ,. ");
    }

    #[test]
    fn test_unavailable_store_returns_nothing() {
        let results = SearchEngine::new(MemoryStore::unavailable()).search("mars");

        assert!(results.is_empty());
        assert_eq!(results.query, "mars");
    }

    #[test]
    fn test_rank_is_stable() {
        let mut results: Vec<SearchResult> = [("a", 1), ("b", 2), ("c", 1), ("d", 2)]
            .into_iter()
            .map(|(name, score)| {
                SearchResult::new(
                    name.to_string(),
                    String::new(),
                    String::new(),
                    score,
                    String::new(),
                )
            })
            .collect();

        rank(&mut results);

        let order: Vec<_> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    proptest! {
        #[test]
        fn prop_ranking_descending_and_stable(counts in prop::collection::vec(0usize..4, 0..8)) {
            let store: MemoryStore = counts
                .iter()
                .enumerate()
                .map(|(i, n)| {
                    crate::models::Document::new(format!("doc{}.txt", i), "rover ".repeat(*n))
                })
                .collect();

            let results = SearchEngine::new(store).search("rover");

            for pair in results.results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    let a: usize = pair[0].filename[3..pair[0].filename.len() - 4].parse().unwrap();
                    let b: usize = pair[1].filename[3..pair[1].filename.len() - 4].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
            prop_assert_eq!(results.len(), counts.iter().filter(|n| **n > 0).count());
        }
    }
}
