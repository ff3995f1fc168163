//! Typed attribute sets used as request bodies.
//!
//! Resource attributes are an insertion-ordered mapping from field name to a
//! small closed set of value kinds. Encoding to JSON is explicit: decimals go
//! through [`decimal_to_number`], dates are rendered as `YYYY-MM-DD`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use crate::error::{CoreError, Result};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// JSON `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating point number. Must be finite.
    Float(f64),
    /// Exact decimal, coerced to a JSON float on the wire.
    Decimal(Decimal),
    /// Free text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Nested mapping.
    Map(Attributes),
    /// Sequence of mappings, e.g. invoice or voucher rows.
    List(Vec<Attributes>),
    /// Sequence of scalar values.
    Values(Vec<AttrValue>),
}

impl AttrValue {
    /// Encode this value as JSON. `key` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if a float is not finite or a decimal cannot be
    /// represented as a JSON number.
    pub fn to_json(&self, key: &str) -> Result<Value> {
        Ok(match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::Number((*i).into()),
            Self::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or_else(|| CoreError::NonFiniteFloat {
                    key: key.to_string(),
                })?,
            Self::Decimal(d) => Value::Number(decimal_to_number(*d)?),
            Self::Text(s) => Value::String(s.clone()),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::Map(attrs) => attrs.to_json()?,
            Self::List(rows) => Value::Array(
                rows.iter()
                    .map(Attributes::to_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Self::Values(values) => Value::Array(
                values
                    .iter()
                    .map(|v| v.to_json(key))
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }
}

/// Convert a decimal to the nearest binary64 JSON number.
///
/// JSON has no decimal type. The conversion parses the decimal's canonical
/// string form as `f64`, which yields the nearest representable value
/// (ties to even). Values with more than 15 significant digits may lose
/// precision.
///
/// # Errors
///
/// Returns [`CoreError::DecimalOutOfRange`] if the value has no finite `f64`
/// representation.
pub fn decimal_to_number(value: Decimal) -> Result<Number> {
    let text = value.normalize().to_string();
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or(CoreError::DecimalOutOfRange { value: text })
}

/// Insertion-ordered attribute mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove a value by name, returning it.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only keys in `allowed`, returning the names that were dropped.
    pub fn retain_keys(&mut self, allowed: &[&str]) -> Vec<String> {
        let mut dropped = Vec::new();
        self.entries.retain(|(k, _)| {
            let keep = allowed.contains(&k.as_str());
            if !keep {
                dropped.push(k.clone());
            }
            keep
        });
        dropped
    }

    /// Encode as a JSON object, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if any value cannot be encoded.
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json(key)?);
        }
        Ok(Value::Object(map))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for AttrValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for AttrValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<Attributes>> for AttrValue {
    fn from(value: Vec<Attributes>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn insert_keeps_position_on_replace() {
        let mut attrs = Attributes::new();
        attrs.insert("Name", "Acme");
        attrs.insert("City", "Stockholm");
        attrs.insert("Name", "Acme AB");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Name", "City"]);
        assert_eq!(attrs.get("Name"), Some(&AttrValue::Text("Acme AB".into())));
    }

    #[test]
    fn retain_keys_reports_dropped() {
        let mut attrs = Attributes::from([("Name", "Acme"), ("Bogus", "x"), ("Other", "y")]);
        let dropped = attrs.retain_keys(&["Name"]);
        assert_eq!(dropped, vec!["Bogus".to_string(), "Other".to_string()]);
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains_key("Name"));
    }

    #[test]
    fn to_json_preserves_order_and_kinds() {
        let row = Attributes::new().with("Account", 1930).with("Debit", 1500);
        let attrs = Attributes::new()
            .with("Description", "Cash")
            .with("TransactionDate", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with("VoucherRows", vec![row])
            .with("Active", true)
            .with("CostCenter", None::<String>);

        let json = attrs.to_json().unwrap();
        assert_eq!(
            serde_json::to_string(&json).unwrap(),
            r#"{"Description":"Cash","TransactionDate":"2024-03-01","VoucherRows":[{"Account":1930,"Debit":1500}],"Active":true,"CostCenter":null}"#
        );
    }

    #[test]
    fn decimal_becomes_nearest_float() {
        let price = Decimal::from_str("1234.56").unwrap();
        let number = decimal_to_number(price).unwrap();
        assert_eq!(number.as_f64(), Some(1234.56));

        let tenth = Decimal::from_str("0.10").unwrap();
        assert_eq!(decimal_to_number(tenth).unwrap().as_f64(), Some(0.1));
    }

    #[test]
    fn decimal_precision_is_lossy_beyond_f64() {
        let precise = Decimal::from_str("1234567890.123456789012").unwrap();
        let number = decimal_to_number(precise).unwrap();
        assert_ne!(number.to_string(), "1234567890.123456789012");
        assert!((number.as_f64().unwrap() - 1_234_567_890.123_456_8).abs() < 1e-6);
    }

    #[test]
    fn non_finite_float_is_rejected() {
        let attrs = Attributes::new().with("Total", f64::NAN);
        let err = attrs.to_json().unwrap_err();
        assert!(matches!(err, CoreError::NonFiniteFloat { key } if key == "Total"));
    }
}
