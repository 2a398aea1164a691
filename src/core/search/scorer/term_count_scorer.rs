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

use core::search::scorer::{is_positioned, CountScorer};
use core::search::PostingIterator;
use core::util::DocId;
use error::Result;

/// Counts the occurrences of a single term in the bound document.
///
/// `postings_iterator` is `None` when the term never occurs in the segment, in which
/// case every document reads as `0`.
pub struct TermCountScorer<T: PostingIterator> {
    postings_iterator: Option<T>,
    doc: DocId,
}

impl<T: PostingIterator> TermCountScorer<T> {
    pub fn new(postings_iterator: Option<T>) -> Self {
        TermCountScorer {
            postings_iterator,
            doc: -1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.postings_iterator.is_none()
    }
}

impl<T: PostingIterator> CountScorer for TermCountScorer<T> {
    fn seek(&mut self, doc: DocId) -> Result<()> {
        if let Some(ref mut postings) = self.postings_iterator {
            // advance is undefined for a target <= the current doc
            if postings.doc_id() < doc {
                postings.advance(doc)?;
            }
        }
        self.doc = doc;
        Ok(())
    }

    fn read(&mut self) -> Result<i32> {
        match self.postings_iterator {
            Some(ref postings) if is_positioned(self.doc) && postings.doc_id() == self.doc => {
                postings.freq()
            }
            // either the term is missing from the segment, or advance moved
            // past the bound doc, so it has no occurrence of the term
            _ => Ok(0),
        }
    }

    fn doc_id(&self) -> DocId {
        self.doc
    }
}
