// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use core::index::reader::{LeafReader, LeafReaderContext};
use core::search::explanation::Explanation;
use core::search::query::{ScoringConfig, SearchType};
use core::search::scorer::{CountScorer, DocScorer, PhraseCountScorer, TermCountScorer};
use core::search::PostingIteratorFlags;
use core::util::DocId;

use error::Result;

pub const TERM_COUNT: &str = "term_count";

/// Builds the per-segment counting scorers of one compiled `ScoringConfig`.
///
/// The weight holds no segment state: every call to `create_scorer` returns a
/// fresh, unbound scorer owning its own postings, so segments can be scored
/// on different threads.
#[derive(Clone, Debug)]
pub struct TermCountWeight {
    config: ScoringConfig,
}

impl TermCountWeight {
    pub fn new(config: ScoringConfig) -> TermCountWeight {
        debug!("compiled term count weight {}", config);
        TermCountWeight { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn query_type(&self) -> &'static str {
        TERM_COUNT
    }

    /// Counts are read straight from the postings and never depend on the
    /// score of another query.
    pub fn needs_scores(&self) -> bool {
        false
    }

    pub fn create_scorer<R: LeafReader>(
        &self,
        reader: &LeafReaderContext<'_, R>,
    ) -> Result<DocScorer<R::Postings>> {
        match self.config.search_type() {
            SearchType::Term => self.create_term_scorer(reader).map(DocScorer::from),
            SearchType::Match => self.create_phrase_scorer(reader).map(DocScorer::from),
        }
    }

    fn create_term_scorer<R: LeafReader>(
        &self,
        reader: &LeafReaderContext<'_, R>,
    ) -> Result<TermCountScorer<R::Postings>> {
        let term = self.config.term();
        let postings = reader.reader.postings(&term, PostingIteratorFlags::FREQS)?;
        if postings.is_none() {
            debug!(
                "term '{}' not found in segment {} ({}, doc base {}), every doc counts 0",
                term,
                reader.ord,
                reader.reader.name(),
                reader.doc_base
            );
        }
        Ok(TermCountScorer::new(postings))
    }

    fn create_phrase_scorer<R: LeafReader>(
        &self,
        reader: &LeafReaderContext<'_, R>,
    ) -> Result<PhraseCountScorer<R::Postings>> {
        let terms = self.config.sub_terms();
        if terms.len() < 2 {
            debug!(
                "phrase '{}' has less than two terms, every doc counts 0",
                self.config.term_text()
            );
            return Ok(PhraseCountScorer::empty());
        }

        let mut postings = Vec::with_capacity(terms.len());
        for term in &terms {
            match reader.reader.postings(term, PostingIteratorFlags::POSITIONS)? {
                Some(p) => postings.push(p),
                None => {
                    debug!(
                        "phrase term '{}' not found in segment {} ({}, doc base {}), every doc \
                         counts 0",
                        term,
                        reader.ord,
                        reader.reader.name(),
                        reader.doc_base
                    );
                    return Ok(PhraseCountScorer::empty());
                }
            }
        }
        Ok(PhraseCountScorer::new(postings))
    }

    /// Explains the count of `doc` in the given segment.
    ///
    /// A scorer of its own is used, so explaining never consumes positions
    /// of the scorer the host is scoring with.
    pub fn explain<R: LeafReader>(
        &self,
        reader: &LeafReaderContext<'_, R>,
        doc: DocId,
    ) -> Result<Explanation> {
        let mut scorer = self.create_scorer(reader)?;
        scorer.seek(doc)?;
        let count = scorer.read()?;

        let details = match scorer {
            DocScorer::Term(_) => vec![],
            DocScorer::Phrase(ref phrase) => {
                let terms = self.config.sub_terms();
                let freqs = phrase.term_freqs()?;
                terms
                    .iter()
                    .zip(freqs.iter())
                    .map(|(term, freq)| {
                        Explanation::new(
                            *freq > 0,
                            *freq as f32,
                            format!("termFreq={} of {}", freq, term),
                            vec![],
                        )
                    })
                    .collect()
            }
        };

        let description = match self.config.search_type() {
            SearchType::Term => format!("termFreq={}", count),
            SearchType::Match => format!("phraseFreq={}", count),
        };
        Ok(Explanation::new(
            count > 0,
            count as f32,
            format!(
                "{}({} in {}) [{}], result of: {}",
                TERM_COUNT,
                self.config,
                doc,
                reader.reader.name(),
                description
            ),
            details,
        ))
    }
}

impl fmt::Display for TermCountWeight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TermCountWeight({})", self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::search::tests::MockLeafReader;
    use core::search::NO_MORE_DOCS;
    use core::util::VariantValue;

    use std::collections::HashMap;

    fn create_weight(field: &str, term: &str, search_type: &str) -> TermCountWeight {
        let mut params: HashMap<String, VariantValue> = HashMap::new();
        params.insert("field".into(), field.into());
        params.insert("term".into(), term.into());
        params.insert("type".into(), search_type.into());
        TermCountWeight::new(ScoringConfig::new(&params).unwrap())
    }

    fn counts<R: LeafReader>(weight: &TermCountWeight, reader: &R) -> Vec<i32> {
        let ctx = LeafReaderContext::new(reader, 0, 0);
        let mut scorer = weight.create_scorer(&ctx).unwrap();
        (0..reader.max_doc())
            .map(|doc| {
                scorer.seek(doc).unwrap();
                scorer.read().unwrap()
            })
            .collect()
    }

    fn create_reader() -> MockLeafReader {
        MockLeafReader::from_docs(
            "body",
            &[
                "the quick brown fox jumps over the lazy dog",
                "quick quick brown brown",
                "a lazy dog",
                "the quick brown fox and the quick brown fox",
                "fox brown quick",
            ],
        )
    }

    #[test]
    fn test_term_counts() {
        let reader = create_reader();
        let weight = create_weight("body", "quick", "term");
        assert!(!weight.needs_scores());
        assert_eq!(weight.query_type(), TERM_COUNT);
        assert_eq!(counts(&weight, &reader), vec![1, 2, 0, 2, 1]);

        let weight = create_weight("body", "the", "term");
        assert_eq!(counts(&weight, &reader), vec![2, 0, 0, 2, 0]);
    }

    #[test]
    fn test_term_missing_from_segment() {
        let reader = create_reader();
        let ctx = LeafReaderContext::new(&reader, 2, 1000);
        for (term, search_type) in &[("cat", "term"), ("quick cat", "match"), ("body", "term")] {
            let weight = create_weight("body", term, search_type);
            let scorer = weight.create_scorer(&ctx).unwrap();
            assert!(scorer.is_empty());
            assert_eq!(counts(&weight, &reader), vec![0; 5]);
        }

        // wrong field
        let weight = create_weight("title", "quick", "term");
        assert_eq!(counts(&weight, &reader), vec![0; 5]);
    }

    #[test]
    fn test_term_type_keeps_whitespace() {
        // in term mode the whole text is a single term
        let reader = create_reader();
        let weight = create_weight("body", "quick brown", "term");
        assert_eq!(counts(&weight, &reader), vec![0; 5]);
    }

    #[test]
    fn test_phrase_counts() {
        let reader = create_reader();
        let weight = create_weight("body", "quick brown", "match");
        assert_eq!(counts(&weight, &reader), vec![1, 1, 0, 2, 0]);

        let weight = create_weight("body", "the quick brown fox", "match");
        assert_eq!(counts(&weight, &reader), vec![1, 0, 0, 2, 0]);

        let weight = create_weight("body", "brown quick", "match");
        assert_eq!(counts(&weight, &reader), vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_phrase_from_explicit_postings() {
        let reader = MockLeafReader::new("body")
            .with_postings("a", vec![(0, vec![1, 4, 7]), (2, vec![1, 2])])
            .with_postings("b", vec![(0, vec![2, 5, 8]), (1, vec![0]), (2, vec![2])])
            .with_postings("c", vec![(0, vec![3, 6, 9]), (2, vec![3])]);

        let weight = create_weight("body", "a b c", "match");
        assert_eq!(counts(&weight, &reader), vec![3, 0, 1]);

        let weight = create_weight("body", "a b", "match");
        assert_eq!(counts(&weight, &reader), vec![3, 0, 1]);
    }

    #[test]
    fn test_single_term_phrase_is_zero() {
        let reader = create_reader();
        let weight = create_weight("body", "  quick ", "match");
        assert_eq!(counts(&weight, &reader), vec![0; 5]);
    }

    #[test]
    fn test_sparse_candidates() {
        let reader = create_reader();
        let ctx = LeafReaderContext::new(&reader, 0, 0);
        let weight = create_weight("body", "quick brown", "match");
        let mut scorer = weight.create_scorer(&ctx).unwrap();

        scorer.seek(3).unwrap();
        assert_eq!(scorer.read().unwrap(), 2);
        assert_eq!(scorer.read().unwrap(), 2);
        scorer.seek(4).unwrap();
        assert_eq!(scorer.read().unwrap(), 0);
        scorer.seek(NO_MORE_DOCS).unwrap();
        assert_eq!(scorer.read().unwrap(), 0);
    }

    #[test]
    fn test_segments_are_independent() {
        let first = MockLeafReader::from_docs("body", &["quick brown", "brown"]);
        let second = MockLeafReader::from_docs("body", &["fox", "quick brown quick brown"]);
        let weight = create_weight("body", "quick brown", "match");

        assert_eq!(counts(&weight, &first), vec![1, 0]);
        assert_eq!(counts(&weight, &second), vec![0, 2]);
    }

    #[test]
    fn test_index_failure_propagates() {
        let reader = create_reader().failing_on(3);
        let ctx = LeafReaderContext::new(&reader, 0, 0);
        let weight = create_weight("body", "quick", "term");
        let mut scorer = weight.create_scorer(&ctx).unwrap();

        scorer.seek(1).unwrap();
        assert_eq!(scorer.read().unwrap(), 2);
        assert!(scorer.seek(2).is_err());
    }

    #[test]
    fn test_explain() {
        let reader = create_reader();
        let ctx = LeafReaderContext::new(&reader, 0, 0);

        let weight = create_weight("body", "quick", "term");
        let expl = weight.explain(&ctx, 1).unwrap();
        assert!(expl.is_match());
        assert!((expl.value() - 2.0).abs() < ::std::f32::EPSILON);
        assert!(expl.description().ends_with("termFreq=2"));
        assert!(expl.details().is_empty());

        let weight = create_weight("body", "quick brown", "match");
        let mut scorer = weight.create_scorer(&ctx).unwrap();
        scorer.seek(3).unwrap();
        assert_eq!(scorer.read().unwrap(), 2);

        let expl = weight.explain(&ctx, 3).unwrap();
        assert!((expl.value() - 2.0).abs() < ::std::f32::EPSILON);
        assert!(expl.description().ends_with("phraseFreq=2"));
        assert_eq!(expl.details().len(), 2);
        assert!(expl.details()[0].description().contains("body:quick"));

        // explaining did not disturb the scorer
        assert_eq!(scorer.read().unwrap(), 2);

        let expl = weight.explain(&ctx, 2).unwrap();
        assert!(!expl.is_match());
        assert!(expl.details().iter().all(|d| !d.is_match()));
    }
}
