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

use core::doc::Term;
use core::search::PostingIterator;
use core::util::DocId;

use error::Result;

/// `LeafReader` is the view of one segment the counting scorers need: the
/// positional postings of a term.
///
/// Doc ids handed out by a `LeafReader` are local to the segment. Each
/// segment is searched independently, so nothing obtained from one reader is
/// ever shared with another.
pub trait LeafReader {
    type Postings: PostingIterator;

    fn name(&self) -> &str;

    /// Returns one greater than the largest possible document number.
    fn max_doc(&self) -> DocId;

    /// Returns the postings of `term`, or `None` if the field or the term does
    /// not exist in this segment. `flags` is a combination of
    /// `PostingIteratorFlags`.
    fn postings(&self, term: &Term, flags: u16) -> Result<Option<Self::Postings>>;
}

/// A segment together with its position in the parent reader.
pub struct LeafReaderContext<'a, R: LeafReader + 'a> {
    /// ord in parent
    pub ord: usize,
    /// doc base in parent
    pub doc_base: DocId,
    pub reader: &'a R,
}

impl<'a, R: LeafReader + 'a> LeafReaderContext<'a, R> {
    pub fn new(reader: &'a R, ord: usize, doc_base: DocId) -> Self {
        LeafReaderContext {
            ord,
            doc_base,
            reader,
        }
    }
}
