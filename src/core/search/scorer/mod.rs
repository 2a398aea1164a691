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

mod term_count_scorer;

pub use self::term_count_scorer::*;

mod phrase_count_scorer;

pub use self::phrase_count_scorer::*;

mod doc_scorer;

pub use self::doc_scorer::*;

use core::search::NO_MORE_DOCS;
use core::util::DocId;
use error::Result;

/// Expert: per-segment counting over postings, driven in two phases.
///
/// For every candidate document, in increasing doc id order, the caller first
/// binds the scorer with `seek()` and then calls `read()` zero or more times.
/// Seeking never moves an underlying `PostingIterator` backwards, and seeking
/// the doc the iterator already sits on does not touch it at all.
///
/// A scorer is private to one segment; it may be moved to another thread but
/// is never driven concurrently.
pub trait CountScorer: Send {
    /// Binds the scorer to `doc`. Doc ids must be non-decreasing across calls.
    fn seek(&mut self, doc: DocId) -> Result<()>;

    /// Returns the count for the bound document, `0` when the term (or one of
    /// the phrase terms) does not occur in it.
    fn read(&mut self) -> Result<i32>;

    /// The bound document, `-1` before the first `seek()`.
    fn doc_id(&self) -> DocId;

    fn score(&mut self) -> Result<f32> {
        Ok(self.read()? as f32)
    }
}

impl CountScorer for Box<dyn CountScorer> {
    fn seek(&mut self, doc: DocId) -> Result<()> {
        (**self).seek(doc)
    }

    fn read(&mut self) -> Result<i32> {
        (**self).read()
    }

    fn doc_id(&self) -> DocId {
        (**self).doc_id()
    }

    fn score(&mut self) -> Result<f32> {
        (**self).score()
    }
}

#[inline]
fn is_positioned(doc: DocId) -> bool {
    doc >= 0 && doc != NO_MORE_DOCS
}
