//! Query-string parameters and partial updates to them.
//!
//! [`QueryParams`] is an ordered multimap over `application/x-www-form-urlencoded`
//! pairs. Pairs that are never rewritten keep their original raw text, so
//! serializing a parsed query string after an unrelated update leaves foreign
//! keys untouched byte-for-byte.

use std::fmt;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    /// Raw segment as it appeared in the parsed input. `None` once rewritten.
    raw: Option<String>,
}

impl Pair {
    fn encoded(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.key, &self.value)
            .finish()
    }
}

/// Ordered set of query-string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<Pair>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is ignored; empty segments are skipped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = form_urlencoded::parse(segment.as_bytes())
                    .next()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .unwrap_or_default();
                Pair {
                    key,
                    value,
                    raw: Some(segment.to_string()),
                }
            })
            .collect();
        Self { pairs }
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|p| p.key == key)
    }

    /// Set `key` to `value`.
    ///
    /// The first occurrence is rewritten in place and later duplicates are
    /// dropped; an absent key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|p| p.key == key) {
            Some(idx) => {
                let pair = &mut self.pairs[idx];
                if pair.value != value {
                    pair.value = value;
                    pair.raw = None;
                }
                let mut seen = 0usize;
                self.pairs.retain(|p| {
                    if p.key != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push(Pair {
                key,
                value,
                raw: None,
            }),
        }
    }

    /// Remove every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|p| p.key != key);
    }

    /// Apply a delta in order.
    pub fn apply(&mut self, delta: &ParamDelta) {
        for change in delta.changes() {
            match change {
                ParamChange::Set { key, value } => self.set(key.clone(), value.clone()),
                ParamChange::Remove { key } => self.remove(key),
            }
        }
    }

    /// Iterate decoded `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|p| (p.key.as_str(), p.value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back into a query string without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(Pair::encoded)
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<&str> for QueryParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

/// A single change to a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamChange {
    Set { key: String, value: String },
    Remove { key: String },
}

impl ParamChange {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Set { key, .. } | Self::Remove { key } => key,
        }
    }
}

/// Ordered set of parameter changes applied as one unit.
///
/// Holds at most one change per key: recording a second change for a key
/// replaces the first and moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDelta {
    changes: Vec<ParamChange>,
}

impl ParamDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change, replacing any earlier change to the same key.
    pub fn push(&mut self, change: ParamChange) -> &mut Self {
        self.changes.retain(|c| c.key() != change.key());
        self.changes.push(change);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(ParamChange::Set {
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn remove(&mut self, key: impl Into<String>) -> &mut Self {
        self.push(ParamChange::Remove { key: key.into() })
    }

    /// Builder form of [`ParamDelta::set`].
    #[must_use]
    pub fn with_set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder form of [`ParamDelta::remove`].
    #[must_use]
    pub fn with_remove(mut self, key: impl Into<String>) -> Self {
        self.remove(key);
        self
    }

    /// Fold `other` into this delta; its changes win over existing ones.
    pub fn merge(&mut self, other: Self) {
        for change in other.changes {
            self.push(change);
        }
    }

    #[must_use]
    pub fn changes(&self) -> &[ParamChange] {
        &self.changes
    }

    /// Change recorded for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamChange> {
        self.changes.iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Keys touched by this delta, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(ParamChange::key)
    }
}
