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

//! Exact term statistics read straight from positional postings.
//!
//! Two counting modes are supported: the raw frequency of a single term in a
//! document, and the number of exact adjacent-phrase occurrences of a
//! whitespace separated sequence of terms, found by merging the position
//! streams of every sub-term.
//!
//! The index itself is not part of this crate: it is consumed through the
//! [`LeafReader`](core/index/reader/trait.LeafReader.html) and
//! [`PostingIterator`](core/search/trait.PostingIterator.html) traits.

#![recursion_limit = "1024"]
#![allow(clippy::cast_lossless)]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate smallvec;

#[cfg(test)]
extern crate rand;

pub mod core;
pub mod error;
