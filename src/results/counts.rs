//! Outcome count storage and decoding

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ResultsError;

/// Insertion-ordered mapping from outcome label to occurrence count.
///
/// Iteration yields labels in the order they were first inserted, which is
/// what ties are broken by when results are ranked. Re-inserting a label
/// updates its count in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OutcomeCounts {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode counts from JSON text.
    ///
    /// The text must be a JSON object whose values are non-negative integers.
    /// Whole-valued floats (`50.0`) are accepted; anything else is
    /// [`ResultsError::MalformedInput`].
    ///
    /// # Examples
    ///
    /// ```
    /// use qdoc_kit::results::OutcomeCounts;
    ///
    /// let counts = OutcomeCounts::parse(r#"{"0": 3, "1": 1.0}"#).unwrap();
    /// assert_eq!(counts.total(), 4);
    ///
    /// assert!(OutcomeCounts::parse(r#"{"0": -1}"#).is_err());
    /// assert!(OutcomeCounts::parse("[1, 2]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ResultsError> {
        let counts: Self = serde_json::from_str(text).map_err(ResultsError::MalformedInput)?;
        log::debug!("decoded {} outcome labels", counts.len());
        Ok(counts)
    }

    /// Set the count for `label`, returning the previous count if present
    pub fn insert(&mut self, label: impl Into<String>, count: u64) -> Option<u64> {
        let label = label.into();
        match self.index.get(&label) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, count)),
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, count));
                None
            }
        }
    }

    /// Look up the count for `label`
    pub fn get(&self, label: &str) -> Option<u64> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no labels are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, count)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    /// Sum of all counts.
    ///
    /// Widened to `u128` so the sum stays exact even when individual counts
    /// are near `u64::MAX`.
    pub fn total(&self) -> u128 {
        self.entries
            .iter()
            .map(|(_, count)| u128::from(*count))
            .sum()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for OutcomeCounts {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (label, count) in iter {
            counts.insert(label, count);
        }
        counts
    }
}

impl Serialize for OutcomeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OutcomeCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CountsVisitor)
    }
}

struct CountsVisitor;

impl<'de> Visitor<'de> for CountsVisitor {
    type Value = OutcomeCounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of outcome labels to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = OutcomeCounts::new();
        while let Some((label, Count(count))) = access.next_entry::<String, Count>()? {
            // Last value wins, first position is kept
            counts.insert(label, count);
        }
        Ok(counts)
    }
}

/// A single count value; integers or whole-valued floats, never negative
struct Count(u64);

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = Count;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer count")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Count, E> {
        Ok(Count(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Count, E> {
        u64::try_from(v)
            .map(Count)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Count, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 {
            Ok(Count(v as u64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

/// Outcome counts as handed to the formatter: raw JSON text or a decoded map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountsInput {
    /// JSON text still to be decoded
    Serialized(String),
    /// Already-structured counts
    Structured(OutcomeCounts),
}

impl CountsInput {
    /// Resolve into structured counts, decoding serialized text if needed
    pub fn decode(self) -> Result<OutcomeCounts, ResultsError> {
        match self {
            Self::Serialized(text) => OutcomeCounts::parse(&text),
            Self::Structured(counts) => Ok(counts),
        }
    }
}

impl From<&str> for CountsInput {
    fn from(text: &str) -> Self {
        Self::Serialized(text.to_string())
    }
}

impl From<String> for CountsInput {
    fn from(text: String) -> Self {
        Self::Serialized(text)
    }
}

impl From<OutcomeCounts> for CountsInput {
    fn from(counts: OutcomeCounts) -> Self {
        Self::Structured(counts)
    }
}
