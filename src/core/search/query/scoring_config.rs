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

use std::collections::HashMap;
use std::fmt;

use serde_json;

use core::doc::Term;
use core::util::VariantValue;
use error::{ErrorKind::IllegalArgument, Result};

pub const FIELD_PARAM: &str = "field";
pub const TERM_PARAM: &str = "term";
pub const TYPE_PARAM: &str = "type";

/// How the configured text is counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// raw frequency of a single term
    Term,
    /// exact occurrences of a whitespace separated phrase
    Match,
}

impl SearchType {
    pub fn parse(value: &str) -> Option<SearchType> {
        match value {
            "term" => Some(SearchType::Term),
            "match" => Some(SearchType::Match),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Term => "term",
            SearchType::Match => "match",
        }
    }
}

impl Default for SearchType {
    fn default() -> Self {
        SearchType::Term
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn param_text(value: &VariantValue) -> String {
    match value.get_string() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Validated parameters of a term count script.
///
/// Built once per compiled query, then shared read-only by every segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoringConfig {
    field: String,
    term: String,
    #[serde(rename = "type")]
    search_type: SearchType,
}

impl ScoringConfig {
    /// Validates the raw script params.
    ///
    /// `field` and `term` are required, `type` defaults to `term`. Values are
    /// taken by their textual form, so `{"term": 42}` counts the term `42`.
    pub fn new(params: &HashMap<String, VariantValue>) -> Result<ScoringConfig> {
        let field = match params.get(FIELD_PARAM) {
            Some(v) => param_text(v),
            None => bail!(IllegalArgument("Missing parameter [field]".into())),
        };
        let term = match params.get(TERM_PARAM) {
            Some(v) => param_text(v),
            None => bail!(IllegalArgument("Missing parameter [term]".into())),
        };
        let search_type = match params.get(TYPE_PARAM) {
            Some(v) => {
                let name = param_text(v);
                match SearchType::parse(&name) {
                    Some(t) => t,
                    None => bail!(IllegalArgument(format!(
                        "Error parameter [type]: unknown search type '{}'",
                        name
                    ))),
                }
            }
            None => SearchType::default(),
        };
        Self::build(field, term, search_type)
    }

    /// Parses the params from a JSON object, e.g.
    /// `{"field": "body", "term": "quick fox", "type": "match"}`.
    pub fn from_json(json: &str) -> Result<ScoringConfig> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let params = VariantValue::from_json(&value);
        match params.as_ref().and_then(VariantValue::get_map) {
            Some(params) => Self::new(params),
            _ => bail!(IllegalArgument(format!(
                "script params must be a JSON object, got: {}",
                json
            ))),
        }
    }

    pub fn build(field: String, term: String, search_type: SearchType) -> Result<ScoringConfig> {
        if term.trim().is_empty() {
            bail!(IllegalArgument("Empty parameter [term]".into()));
        }
        if field.is_empty() {
            bail!(IllegalArgument("Empty parameter [field]".into()));
        }
        Ok(ScoringConfig {
            field,
            term,
            search_type,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn term_text(&self) -> &str {
        &self.term
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// The whole text as one term.
    pub fn term(&self) -> Term {
        Term::new(self.field.clone(), self.term.as_bytes().to_vec())
    }

    /// The text split on whitespace, one term per token.
    pub fn sub_terms(&self) -> Vec<Term> {
        Term::split_whitespace(&self.field, &self.term)
    }
}

impl fmt::Display for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({}:\"{}\")", self.search_type, self.field, self.term)
    }
}
