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

use core::search::scorer::{CountScorer, PhraseCountScorer, TermCountScorer};
use core::search::PostingIterator;
use core::util::DocId;
use error::Result;

/// The per-segment scorer handed to the host, chosen once when the segment
/// is opened.
pub enum DocScorer<T: PostingIterator> {
    Term(TermCountScorer<T>),
    Phrase(PhraseCountScorer<T>),
}

impl<T: PostingIterator> DocScorer<T> {
    /// Whether every document of the segment reads as `0`.
    pub fn is_empty(&self) -> bool {
        match self {
            DocScorer::Term(s) => s.is_empty(),
            DocScorer::Phrase(s) => s.is_empty(),
        }
    }
}

impl<T: PostingIterator> CountScorer for DocScorer<T> {
    fn seek(&mut self, doc: DocId) -> Result<()> {
        match self {
            DocScorer::Term(s) => s.seek(doc),
            DocScorer::Phrase(s) => s.seek(doc),
        }
    }

    fn read(&mut self) -> Result<i32> {
        match self {
            DocScorer::Term(s) => s.read(),
            DocScorer::Phrase(s) => s.read(),
        }
    }

    fn doc_id(&self) -> DocId {
        match self {
            DocScorer::Term(s) => s.doc_id(),
            DocScorer::Phrase(s) => s.doc_id(),
        }
    }
}

impl<T: PostingIterator> From<TermCountScorer<T>> for DocScorer<T> {
    fn from(scorer: TermCountScorer<T>) -> Self {
        DocScorer::Term(scorer)
    }
}

impl<T: PostingIterator> From<PhraseCountScorer<T>> for DocScorer<T> {
    fn from(scorer: PhraseCountScorer<T>) -> Self {
        DocScorer::Phrase(scorer)
    }
}
