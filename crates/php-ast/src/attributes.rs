//! Per-node side-channel attributes
//!
//! Every node owns an [`AttributeBag`] holding metadata that is not part of
//! the grammar: source positions, preceding comments, and whatever analysis
//! passes want to hang off a node (resolved names, inferred types, ...).
//!
//! The bag has two access paths over one storage:
//!
//! - explicit methods (`set`, `get`, `get_or`, `has`, `is_set`, `remove`)
//! - index sugar (`bag["startLine"]`, `bag["startLine"] = 3.into()`)
//!
//! Reading a missing key through the index yields [`AttrValue::Null`];
//! writing through the index inserts the key first. `get_mut` and
//! `entry_or` hand out live references into the storage so stored
//! collections can be edited in place.

use crate::comment::Comment;
use crate::name::Name;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Comments(Vec<Comment>),
    List(Vec<AttrValue>),
    /// Written by name resolution passes (`resolvedName`, `namespacedName`)
    Name(Box<Name>),
}

static NULL: AttrValue = AttrValue::Null;

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Integer value if it fits a `usize` (positions are never negative)
    pub fn as_usize(&self) -> Option<usize> {
        self.as_int().and_then(|n| usize::try_from(n).ok())
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(x) => Some(*x),
            AttrValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_comments(&self) -> Option<&[Comment]> {
        match self {
            AttrValue::Comments(comments) => Some(comments),
            _ => None,
        }
    }

    pub fn as_comments_mut(&mut self) -> Option<&mut Vec<Comment>> {
        match self {
            AttrValue::Comments(comments) => Some(comments),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&Name> {
        match self {
            AttrValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(i64::from(n))
    }
}

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        AttrValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<Vec<Comment>> for AttrValue {
    fn from(comments: Vec<Comment>) -> Self {
        AttrValue::Comments(comments)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(items: Vec<AttrValue>) -> Self {
        AttrValue::List(items)
    }
}

impl From<Name> for AttrValue {
    fn from(name: Name) -> Self {
        AttrValue::Name(Box::new(name))
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

/// Key/value store attached to every node
///
/// Cloning a bag copies every value; a clone never aliases the original.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: BTreeMap<String, AttrValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Stored value, or `default` when `key` is absent
    pub fn get_or(&self, key: &str, default: impl Into<AttrValue>) -> AttrValue {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Live reference to the stored value
    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.entries.get_mut(key)
    }

    /// Live reference to the stored value, inserting `default` first when absent
    pub fn entry_or(&mut self, key: impl Into<String>, default: impl Into<AttrValue>) -> &mut AttrValue {
        self.entries.entry(key.into()).or_insert_with(|| default.into())
    }

    /// True iff `key` is present, even when its value is Null
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True iff `key` is present and its value is not Null
    pub fn is_set(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|value| !value.is_null())
    }

    /// Deletes `key`; absent keys are ignored
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    /// Every key/value pair, ordered by key
    pub fn all(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = AttributeBag::new();
        bag.extend(iter);
        bag
    }
}

impl<K: Into<String>, V: Into<AttrValue>> Extend<(K, V)> for AttributeBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl Index<&str> for AttributeBag {
    type Output = AttrValue;

    fn index(&self, key: &str) -> &AttrValue {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for AttributeBag {
    fn index_mut(&mut self, key: &str) -> &mut AttrValue {
        self.entries.entry(key.to_string()).or_insert(AttrValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_value_is_present_but_not_set() {
        let mut bag = AttributeBag::new();
        bag.set("kind", AttrValue::Null);
        assert!(bag.has("kind"));
        assert!(!bag.is_set("kind"));
    }

    #[test]
    fn test_index_reads_null_for_missing_key_without_inserting() {
        let bag = AttributeBag::new();
        assert!(bag["missing"].is_null());
        assert!(!bag.has("missing"));
    }

    #[test]
    fn test_index_mut_inserts_key() {
        let mut bag = AttributeBag::new();
        bag["startLine"] = AttrValue::Int(4);
        assert_eq!(bag.get("startLine"), Some(&AttrValue::Int(4)));
    }

    #[test]
    fn test_option_converts_to_null() {
        assert_eq!(AttrValue::from(None::<i64>), AttrValue::Null);
        assert_eq!(AttrValue::from(Some(3i64)), AttrValue::Int(3));
    }

    #[test]
    fn test_as_usize_rejects_negative() {
        assert_eq!(AttrValue::Int(-1).as_usize(), None);
        assert_eq!(AttrValue::Int(7).as_usize(), Some(7));
    }
}
