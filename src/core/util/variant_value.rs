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

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A loosely typed parameter value, as handed over by the host together with
/// a compiled script.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    VString(String),
    Vec(Vec<VariantValue>),
    Map(HashMap<String, VariantValue>),
}

impl VariantValue {
    pub fn get_string(&self) -> Option<&str> {
        match self {
            VariantValue::VString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_map(&self) -> Option<&HashMap<String, VariantValue>> {
        match self {
            VariantValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Converts a parsed JSON value. `null` has no counterpart and yields `None`,
    /// inside containers null entries are dropped.
    pub fn from_json(value: &Value) -> Option<VariantValue> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(VariantValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(l) = n.as_i64() {
                    Some(VariantValue::Long(l))
                } else {
                    n.as_f64().map(VariantValue::Double)
                }
            }
            Value::String(s) => Some(VariantValue::VString(s.clone())),
            Value::Array(arr) => Some(VariantValue::Vec(
                arr.iter().filter_map(VariantValue::from_json).collect(),
            )),
            Value::Object(obj) => Some(VariantValue::Map(
                obj.iter()
                    .filter_map(|(k, v)| VariantValue::from_json(v).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VariantValue::Bool(b) => write!(f, "{}", b),
            VariantValue::Int(ival) => write!(f, "{}", ival),
            VariantValue::Long(lval) => write!(f, "{}", lval),
            VariantValue::Double(d) => write!(f, "{}", d),
            VariantValue::VString(ref s) => write!(f, "{}", s),
            VariantValue::Vec(ref v) => write!(f, "{:?}", v),
            VariantValue::Map(ref m) => write!(f, "{:?}", m),
        }
    }
}

impl<'a> From<&'a str> for VariantValue {
    fn from(val: &'a str) -> Self {
        VariantValue::VString(String::from(val))
    }
}

impl From<String> for VariantValue {
    fn from(val: String) -> Self {
        VariantValue::VString(val)
    }
}
