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

use error::Result;
use std::cmp::Ordering;
use std::fmt;

/// A Term represents a word from text. It is composed of the text of the word
/// and the name of the field that the text occurred in.
#[derive(Clone, Debug, PartialEq, Hash, Eq)]
pub struct Term {
    pub field: String,
    pub bytes: Vec<u8>,
}

impl Term {
    pub fn new(field: String, bytes: Vec<u8>) -> Term {
        Term { field, bytes }
    }

    /// Returns the field of this term.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the text of this term.
    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.bytes.clone())?)
    }

    /// Builds one term per whitespace separated token of `text`, all of them
    /// on `field`, keeping the token order.
    pub fn split_whitespace(field: &str, text: &str) -> Vec<Term> {
        text.split_whitespace()
            .map(|t| Term::new(field.to_string(), t.as_bytes().to_vec()))
            .collect()
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        let res = self.field.cmp(&other.field);
        if res == Ordering::Equal {
            self.bytes.cmp(&other.bytes)
        } else {
            res
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.field, String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_whitespace() {
        let terms = Term::split_whitespace("body", "  quick \t brown\nfox ");
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].field(), "body");
        assert_eq!(terms[0].text().unwrap(), "quick");
        assert_eq!(terms[1].text().unwrap(), "brown");
        assert_eq!(terms[2].text().unwrap(), "fox");

        assert!(Term::split_whitespace("body", "   ").is_empty());
    }

    #[test]
    fn test_term_order() {
        let a = Term::new("a".into(), b"z".to_vec());
        let b = Term::new("b".into(), b"a".to_vec());
        let c = Term::new("b".into(), b"b".to_vec());
        assert!(a < b);
        assert!(b < c);
        assert_eq!(format!("{}", c), "b:b");
    }
}
