//! Feature attributes as handed over by the conversion host.
//!
//! Lookups go through [`Field`], which keeps "the key is missing" apart from
//! "the key holds an empty value". Both collapse to "not usable" when a rule
//! asks for text or a number.

use crate::error::AttributeError;
use crate::strings::trim_spaces;

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::iter::FromIterator;

/// A single attribute or tag value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    /// Loose truthiness: null, `false`, zero, NaN and empty text are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A numeric attribute value, kept in the representation it arrived in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Value::Integer(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// Attributes of one source feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up `key`, remembering whether it was present at all.
    pub fn field<'a>(&'a self, key: &'a str) -> Field<'a> {
        Field {
            key,
            value: self.0.get(key),
        }
    }
}

impl From<BTreeMap<String, Value>> for Attributes {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Result of looking up a single attribute.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    key: &'a str,
    value: Option<&'a Value>,
}

impl<'a> Field<'a> {
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The key exists, whatever its value.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The key exists and holds a truthy value.
    pub fn is_usable(&self) -> bool {
        self.value.map_or(false, Value::is_truthy)
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// Returns the text if it is non-empty once padding spaces are removed.
    ///
    /// Falsy values of any kind read as `None`; truthy non-text values are
    /// malformed.
    pub fn text(&self) -> Result<Option<&'a str>, AttributeError> {
        match self.value {
            Some(Value::Text(s)) if !trim_spaces(s).is_empty() => Ok(Some(s.as_str())),
            Some(v) if v.is_truthy() && v.as_str().is_none() => {
                Err(AttributeError::ExpectedText {
                    key: self.key.into(),
                    found: v.kind(),
                })
            }
            _ => Ok(None),
        }
    }

    /// Returns the number if it is non-zero.
    ///
    /// Falsy values of any kind read as `None`; truthy non-numeric values are
    /// malformed.
    pub fn number(&self) -> Result<Option<Number>, AttributeError> {
        match self.value {
            Some(Value::Integer(i)) if *i != 0 => Ok(Some(Number::Integer(*i))),
            Some(Value::Float(f)) if *f != 0.0 && !f.is_nan() => Ok(Some(Number::Float(*f))),
            Some(v @ Value::Text(_)) | Some(v @ Value::Bool(_)) if v.is_truthy() => {
                Err(AttributeError::ExpectedNumber {
                    key: self.key.into(),
                    found: v.kind(),
                })
            }
            _ => Ok(None),
        }
    }
}
