//! The ordered parameter bag that queries and result requests write into.

use serde::ser::{Serialize, Serializer};
use url::Url;

/// Implemented by every query and result request: the namespaced slice of
/// request parameters this value contributes to the final request.
pub trait ContributesParameters {
    fn to_parameter_map(&self) -> ParameterMap;
}

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Serialized as the same key repeated once per element.
    List(Vec<String>),
}

impl ParamValue {
    /// The wire representation, one entry per repeated key.
    pub fn to_wire(&self) -> Vec<String> {
        match self {
            ParamValue::Str(s) => vec![s.clone()],
            // The service parses Python-style booleans.
            ParamValue::Bool(true) => vec!["True".to_string()],
            ParamValue::Bool(false) => vec!["False".to_string()],
            ParamValue::Int(i) => vec![i.to_string()],
            ParamValue::Float(f) => vec![f.to_string()],
            ParamValue::List(items) => items.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}
impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}
impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}
impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}
impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}
impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}
impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}
impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}
impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}
impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Float(f) => serializer.serialize_f64(*f),
            ParamValue::List(items) => items.serialize(serializer),
        }
    }
}

/// Insertion-ordered mapping from parameter name to value.
///
/// Re-inserting an existing key replaces the value in place, so the first
/// insertion decides where the key appears in the encoded request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Sets `key` only when `value` differs from the documented `default`,
    /// leaving the server to apply its own default otherwise.
    pub fn set_if_not_default<V>(&mut self, key: impl Into<String>, value: V, default: V)
    where
        V: Into<ParamValue> + PartialEq,
    {
        if value != default {
            self.insert(key, value);
        }
    }

    /// Appends `value` to the list stored at `key`, creating the list on
    /// first use. A scalar string already stored at `key` becomes the
    /// first element of the list.
    pub fn push_to_list(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, ParamValue::List(items))) => items.push(value),
            Some(entry) => {
                let mut items = entry.1.to_wire();
                items.push(value);
                entry.1 = ParamValue::List(items);
            }
            None => self.entries.push((key, ParamValue::List(vec![value]))),
        }
    }

    /// Merges `other` into `self`; keys present in both take `other`'s value.
    pub fn merge(&mut self, other: ParameterMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Flattens into `(key, value)` pairs, repeating the key for list values.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(k, v)| v.to_wire().into_iter().map(move |w| (k.clone(), w)))
            .collect()
    }

    /// Encodes as an `application/x-www-form-urlencoded` string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }

    /// Appends the parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.is_empty() {
            url.query_pairs_mut().extend_pairs(self.to_query_pairs());
        }
        url
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterMap::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Joins a namespace prefix and a camelCase option name:
/// `("articles", "includeArticleBody")` becomes `articlesIncludeArticleBody`.
pub(crate) fn prefixed(prefix: &str, name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !prefix.is_empty() => {
            format!("{}{}{}", prefix, first.to_ascii_uppercase(), chars.as_str())
        }
        _ => name.to_string(),
    }
}
