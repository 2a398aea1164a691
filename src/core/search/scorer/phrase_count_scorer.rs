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

use smallvec::SmallVec;

use core::search::scorer::{is_positioned, CountScorer};
use core::search::PostingIterator;
use core::util::DocId;
use error::Result;

/// Position cursors of every phrase term inside one document.
///
/// `remaining[i]` starts at the term frequency and is decremented before each
/// further position is read, so a stream is never read past its `freq()`.
struct PhraseMergeState {
    remaining: SmallVec<[i32; 4]>,
    positions: SmallVec<[i32; 4]>,
}

impl PhraseMergeState {
    /// Reads the first position of every term. Returns `None` if any term
    /// has no usable position in the current doc.
    fn init<T: PostingIterator>(postings: &mut [T]) -> Result<Option<PhraseMergeState>> {
        let mut remaining = SmallVec::with_capacity(postings.len());
        let mut positions = SmallVec::with_capacity(postings.len());
        for posting in postings.iter_mut() {
            let freq = posting.freq()?;
            if freq <= 0 {
                return Ok(None);
            }
            let position = posting.next_position()?;
            if position < 0 {
                return Ok(None);
            }
            remaining.push(freq);
            positions.push(position);
        }
        Ok(Some(PhraseMergeState {
            remaining,
            positions,
        }))
    }

    #[inline]
    fn distance(&self, pair: usize) -> i32 {
        self.positions[pair + 1] - self.positions[pair]
    }

    /// Moves term `idx` to its next position, returns `false` once its
    /// stream is exhausted.
    fn next_position<T: PostingIterator>(&mut self, idx: usize, posting: &mut T) -> Result<bool> {
        self.remaining[idx] -= 1;
        if self.remaining[idx] <= 0 {
            return Ok(false);
        }
        self.positions[idx] = posting.next_position()?;
        Ok(true)
    }
}

/// Counts the exact occurrences of a phrase in the bound document by merging
/// the position streams of its terms, e.g. for `a b c`:
///
/// ```text
/// a: 1 4 7
/// b: 2 5 8
/// c: 3 6 9
/// ```
///
/// counts `3`, one per run of consecutive positions `1 2 3`, `4 5 6`, `7 8 9`.
///
/// A scorer built from fewer than two iterators can never match and reads
/// `0` for every document.
///
/// Whenever the left term of a later pair moves, the merge steps back one
/// pair instead of re-examining the same pair, since the pair before it may
/// no longer be adjacent. For `a: 1 10`, `b: 2 11`, `c: 5 12` this counts `1`
/// where re-examining the same pair would count `2`.
///
/// Reading consumes positions, so the count of the bound document is
/// computed once and returned again by further reads until `seek()` moves to
/// another document.
pub struct PhraseCountScorer<T: PostingIterator> {
    postings: Vec<T>,
    doc: DocId,
    freq: Option<i32>,
}

impl<T: PostingIterator> PhraseCountScorer<T> {
    pub fn new(postings: Vec<T>) -> Self {
        PhraseCountScorer {
            postings,
            doc: -1,
            freq: None,
        }
    }

    /// A scorer for a phrase that cannot occur in this segment.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.postings.len() < 2
    }

    /// Frequency of every phrase term in the bound document, `0` for terms
    /// the document lacks.
    pub fn term_freqs(&self) -> Result<Vec<i32>> {
        let mut freqs = Vec::with_capacity(self.postings.len());
        for posting in &self.postings {
            if is_positioned(self.doc) && posting.doc_id() == self.doc {
                freqs.push(posting.freq()?);
            } else {
                freqs.push(0);
            }
        }
        Ok(freqs)
    }

    fn phrase_freq(&mut self) -> Result<i32> {
        if !is_positioned(self.doc) {
            return Ok(0);
        }
        let doc = self.doc;
        if self.postings.iter().any(|p| p.doc_id() != doc) {
            // at least one term was skipped past this doc
            return Ok(0);
        }

        let mut state = match PhraseMergeState::init(&mut self.postings)? {
            Some(state) => state,
            None => return Ok(0),
        };

        let last_pair = self.postings.len() - 2;
        let mut freq = 0;
        let mut pair = 0;
        loop {
            let distance = state.distance(pair);
            if distance < 1 {
                if !state.next_position(pair + 1, &mut self.postings[pair + 1])? {
                    return Ok(freq);
                }
            } else if distance > 1 {
                if !state.next_position(pair, &mut self.postings[pair])? {
                    return Ok(freq);
                }
                // the left term moved, so its own left neighbour must be
                // checked again before the chain can go on
                pair = pair.saturating_sub(1);
            } else if pair < last_pair {
                pair += 1;
            } else {
                freq += 1;
                // start a new chain from the first term
                if !state.next_position(0, &mut self.postings[0])? {
                    return Ok(freq);
                }
                pair = 0;
            }
        }
    }
}

impl<T: PostingIterator> CountScorer for PhraseCountScorer<T> {
    fn seek(&mut self, doc: DocId) -> Result<()> {
        if doc != self.doc {
            self.freq = None;
        }
        for postings in &mut self.postings {
            if postings.doc_id() < doc {
                postings.advance(doc)?;
            }
        }
        self.doc = doc;
        Ok(())
    }

    fn read(&mut self) -> Result<i32> {
        if self.is_empty() {
            return Ok(0);
        }
        if let Some(freq) = self.freq {
            return Ok(freq);
        }
        let freq = self.phrase_freq()?;
        self.freq = Some(freq);
        Ok(freq)
    }

    fn doc_id(&self) -> DocId {
        self.doc
    }
}
