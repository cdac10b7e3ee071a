//! Analyze operation payload and its decoding
//!
//! Payload entries arrive as loosely typed JSON values. Decoding turns them
//! into `f64` observations, class labels and `u64` frequencies, rejecting
//! anything that is not unambiguously numeric.

use descriptive_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Analyze operation payload
///
/// Only the fields relevant to the session's current layout are read:
/// `values` for ungrouped data, `classes` and `frequencies` for grouped data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw observations
    #[serde(default, alias = "datos")]
    pub values: Vec<Value>,
    /// Class labels such as `"0-10"`
    #[serde(default, alias = "clases")]
    pub classes: Vec<Value>,
    /// Frequency of each class
    #[serde(default, alias = "frecuencias")]
    pub frequencies: Vec<Value>,
}

impl AnalyzeRequest {
    /// Build an ungrouped payload from numeric observations
    pub fn ungrouped(values: &[f64]) -> Self {
        Self {
            values: values.iter().map(|&v| Value::from(v)).collect(),
            ..Self::default()
        }
    }

    /// Build a grouped payload from labels and frequencies
    pub fn grouped<S: AsRef<str>>(classes: &[S], frequencies: &[u64]) -> Self {
        Self {
            classes: classes
                .iter()
                .map(|label| Value::from(label.as_ref()))
                .collect(),
            frequencies: frequencies.iter().map(|&f| Value::from(f)).collect(),
            ..Self::default()
        }
    }

    /// Decode `values` into finite observations
    pub fn observations(&self) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| decode_observation(index, value))
            .collect()
    }

    /// Decode `classes` into label strings
    pub fn class_labels(&self) -> Result<Vec<String>> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(label) => Ok(label.clone()),
                other => Err(Error::MalformedClass(format!(
                    "class at position {index} is not a label: {other}"
                ))),
            })
            .collect()
    }

    /// Decode `frequencies` into non-negative counts
    pub fn class_frequencies(&self) -> Result<Vec<u64>> {
        self.frequencies
            .iter()
            .enumerate()
            .map(|(index, value)| decode_frequency(index, value))
            .collect()
    }
}

fn decode_observation(index: usize, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        Some(_) => Err(Error::non_finite("values", index)),
        None => Err(Error::InvalidValue(format!(
            "value at position {index} is not numeric: {value}"
        ))),
    }
}

fn decode_frequency(index: usize, value: &Value) -> Result<u64> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        Error::InvalidValue(format!(
            "frequency at position {index} is not a non-negative integer: {value}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use descriptive_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_observations_accept_numbers_and_numeric_strings() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"values": [1, 2.5, "3", " 4.25 "]})).unwrap();
        assert_eq!(request.observations().unwrap(), vec![1.0, 2.5, 3.0, 4.25]);
    }

    #[test]
    fn test_observations_reject_non_numeric() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"values": [1, "abc"]})).unwrap();
        let err = request.observations().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains("position 1"));

        let request: AnalyzeRequest =
            serde_json::from_value(json!({"values": [true]})).unwrap();
        assert_eq!(request.observations().unwrap_err().kind(), ErrorKind::InvalidValue);

        let request: AnalyzeRequest =
            serde_json::from_value(json!({"values": ["NaN"]})).unwrap();
        assert_eq!(request.observations().unwrap_err().kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_aliases() {
        let request: AnalyzeRequest = serde_json::from_value(json!({
            "datos": [1.0],
            "clases": ["0-10"],
            "frecuencias": [3]
        }))
        .unwrap();
        assert_eq!(request.observations().unwrap(), vec![1.0]);
        assert_eq!(request.class_labels().unwrap(), vec!["0-10".to_string()]);
        assert_eq!(request.class_frequencies().unwrap(), vec![3]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: AnalyzeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.observations().unwrap().is_empty());
        assert!(request.class_labels().unwrap().is_empty());
    }

    #[test]
    fn test_class_labels_must_be_strings() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"classes": ["0-10", 5]})).unwrap();
        assert_eq!(request.class_labels().unwrap_err().kind(), ErrorKind::MalformedClass);
    }

    #[test]
    fn test_frequencies() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"frequencies": [3, 2.0, "7"]})).unwrap();
        assert_eq!(request.class_frequencies().unwrap(), vec![3, 2, 7]);

        for bad in [json!(-1), json!(1.5), json!("x"), json!(null)] {
            let request = AnalyzeRequest {
                frequencies: vec![bad],
                ..AnalyzeRequest::default()
            };
            assert_eq!(
                request.class_frequencies().unwrap_err().kind(),
                ErrorKind::InvalidValue
            );
        }
    }

    #[test]
    fn test_builders() {
        let request = AnalyzeRequest::ungrouped(&[1.0, 2.0]);
        assert_eq!(request.observations().unwrap(), vec![1.0, 2.0]);

        let request = AnalyzeRequest::grouped(&["0-10", "10-20"], &[3, 1]);
        assert_eq!(request.class_labels().unwrap().len(), 2);
        assert_eq!(request.class_frequencies().unwrap(), vec![3, 1]);
    }
}
