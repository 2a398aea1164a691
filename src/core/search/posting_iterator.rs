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

use core::search::DocIterator;
use error::Result;

pub struct PostingIteratorFlags;

/// flags constants and helper function defined for `LeafReader::postings()`.
impl PostingIteratorFlags {
    /// Flag to pass to `LeafReader::postings` if you don't
    /// require per-document postings in the returned iterator.
    pub const NONE: u16 = 0;

    /// Flag to pass to `LeafReader::postings`
    /// if you require term frequencies in the returned iterator.
    pub const FREQS: u16 = 1 << 3;

    /// Flag to pass to `LeafReader::postings`
    /// if you require term positions in the returned iterator.
    pub const POSITIONS: u16 = Self::FREQS | 1 << 4;

    pub fn feature_requested(flags: u16, feature: u16) -> bool {
        (flags & feature) == feature
    }
}

/// Iterates through the postings of one term inside one segment.
///
/// NOTE: you must first call `next()` or `advance()` before using any of the
/// per-doc methods.
pub trait PostingIterator: DocIterator {
    /// Returns term frequency in the current document. Do not call this before
    /// the iterator is positioned, nor after it returned `NO_MORE_DOCS`.
    fn freq(&self) -> Result<i32>;

    /// Returns the next position, or -1 if positions were not indexed.
    /// Calling this more than `freq()` times is undefined.
    fn next_position(&mut self) -> Result<i32>;
}
