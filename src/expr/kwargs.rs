use std::{
    hash::{Hash, Hasher},
    iter::FromIterator,
};

use itertools::Itertools;

use super::Value;

/// Keyword arguments of an expression node.
///
/// Keys are unique. Iteration follows insertion order, while equality and
/// hashing ignore it.
#[derive(Clone, Default)]
pub struct KwArgs(Vec<(String, Value)>);

impl KwArgs {
    pub fn new() -> KwArgs {
        KwArgs(vec![])
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts `value` under `key`. An existing entry keeps its position
    /// and its old value is returned.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (String, Value)> + '_ {
        self.0.drain(..)
    }
}

impl PartialEq for KwArgs {
    fn eq(&self, other: &KwArgs) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for KwArgs {}

impl Hash for KwArgs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (k, v) in self.0.iter().sorted_by(|a, b| a.0.cmp(&b.0)) {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl std::fmt::Debug for KwArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter().map(|(k, v)| format!("{}: {:?}", k, v)).join(", ")
        )
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for KwArgs {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut kw = KwArgs::new();
        for (k, v) in iter {
            kw.insert(k, v);
        }
        kw
    }
}

impl IntoIterator for KwArgs {
    type Item = (String, Value);

    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
