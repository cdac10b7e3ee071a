//! Tagged statistic values and ordered statistic sets

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Text used when a statistic has no value (e.g. a sample without a mode)
pub const MISSING_TEXT: &str = "no mode";

/// A single reported statistic
///
/// Most statistics are plain numbers, but the mode of ungrouped data can be
/// a list of tied values or absent altogether, and the grouped median/modal
/// class are reported as text.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// A numeric statistic
    Number(f64),
    /// A formatted description
    Text(String),
    /// Several numbers (tied modes)
    NumberList(Vec<f64>),
    /// No value exists
    Missing,
}

impl StatValue {
    /// The number, if this is a numeric statistic
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The text, if this is a textual statistic
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The list, if this is a list of numbers
    pub fn as_number_list(&self) -> Option<&[f64]> {
        match self {
            Self::NumberList(values) => Some(values),
            _ => None,
        }
    }

    /// Check if this is the missing marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for StatValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<f64>> for StatValue {
    fn from(values: Vec<f64>) -> Self {
        Self::NumberList(values)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::NumberList(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::Missing => f.write_str(MISSING_TEXT),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::NumberList(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Self::Missing => serializer.serialize_str(MISSING_TEXT),
        }
    }
}

/// Named statistics in reporting order
///
/// Serializes as a map whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticSet {
    entries: Vec<(&'static str, StatValue)>,
}

impl StatisticSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statistic, replacing any earlier value with the same name
    pub fn insert(&mut self, name: &'static str, value: impl Into<StatValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: &'static str, value: impl Into<StatValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a statistic by name
    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Look up a numeric statistic by name
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(StatValue::as_number)
    }

    /// Iterate over `(name, value)` pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Statistic names in reporting order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatisticSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(StatValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(StatValue::Text("x".into()).as_number(), None);
        assert_eq!(StatValue::Text("x".into()).as_text(), Some("x"));
        assert_eq!(
            StatValue::NumberList(vec![1.0, 2.0]).as_number_list(),
            Some(&[1.0, 2.0][..])
        );
        assert!(StatValue::Missing.is_missing());
        assert!(!StatValue::Number(0.0).is_missing());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatValue::Number(7.5).to_string(), "7.5");
        assert_eq!(StatValue::NumberList(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(StatValue::Missing.to_string(), "no mode");
        assert_eq!(StatValue::Text("Modal class: 0-10".into()).to_string(), "Modal class: 0-10");
    }

    #[test]
    fn test_serialize_values() {
        assert_eq!(serde_json::to_string(&StatValue::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&StatValue::NumberList(vec![1.0, 2.0])).unwrap(),
            "[1.0,2.0]"
        );
        assert_eq!(serde_json::to_string(&StatValue::Missing).unwrap(), "\"no mode\"");
    }

    #[test]
    fn test_set_preserves_order() {
        let set = StatisticSet::new()
            .with("media", 3.0)
            .with("moda", StatValue::Missing)
            .with("rango", 4.0);

        assert_eq!(set.names(), vec!["media", "moda", "rango"]);
        assert_eq!(set.number("rango"), Some(4.0));
        assert_eq!(set.number("moda"), None);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"media":3.0,"moda":"no mode","rango":4.0}"#);
    }

    #[test]
    fn test_set_insert_replaces() {
        let mut set = StatisticSet::new();
        set.insert("media", 1.0);
        set.insert("media", 2.0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.number("media"), Some(2.0));
    }
}
