//! Permissive serde field adapters for the submission payload.
//!
//! Capture clients are loose about scalar types (`"1250.50"` vs `1250.5`,
//! `"true"` vs `true`, `NaN` serialised as `null`). Each adapter accepts any
//! JSON value and maps what it cannot use to `None` instead of rejecting the
//! whole document.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

use super::dates;

/// A missing or `null` group deserializes as its empty default
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| text_value(&v))
}

pub fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| decimal_value(&v))
}

pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| bool_value(&v))
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| int_value(&v))
}

pub fn date<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| dates::parse_date(&v))
}

pub fn datetime<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| dates::parse_datetime(&v))
}

/// Strings pass through untouched; other scalars keep their JSON text
pub(crate) fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn decimal_value(value: &Value) -> Option<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    if raw.is_empty() {
        return None;
    }

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

pub(crate) fn bool_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn int_value(value: &Value) -> Option<i32> {
    let wide = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;

    i32::try_from(wide).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_value_keeps_strings_and_stringifies_scalars() {
        assert_eq!(text_value(&json!("AST-001")), Some("AST-001".to_string()));
        assert_eq!(text_value(&json!("")), Some(String::new()));
        assert_eq!(text_value(&json!(42)), Some("42".to_string()));
        assert_eq!(text_value(&json!(true)), Some("true".to_string()));
        assert_eq!(text_value(&Value::Null), None);
    }

    #[test]
    fn test_decimal_value_numbers_and_numeric_strings() {
        assert_eq!(decimal_value(&json!(1250.5)), Some(Decimal::new(12505, 1)));
        assert_eq!(decimal_value(&json!("1250.50")), Some(Decimal::new(125050, 2)));
        assert_eq!(decimal_value(&json!(" 77 ")), Some(Decimal::from(77)));
        assert_eq!(decimal_value(&json!(-12.25)), Some(Decimal::new(-1225, 2)));
        assert_eq!(decimal_value(&json!("1.5e3")), Some(Decimal::from(1500)));
    }

    #[test]
    fn test_decimal_value_unusable_inputs_are_none() {
        assert_eq!(decimal_value(&json!("")), None);
        assert_eq!(decimal_value(&json!("abc")), None);
        assert_eq!(decimal_value(&json!(true)), None);
        assert_eq!(decimal_value(&Value::Null), None);
        assert_eq!(decimal_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_bool_value_variants() {
        assert_eq!(bool_value(&json!(true)), Some(true));
        assert_eq!(bool_value(&json!(false)), Some(false));
        assert_eq!(bool_value(&json!("Yes")), Some(true));
        assert_eq!(bool_value(&json!("off")), Some(false));
        assert_eq!(bool_value(&json!(1)), Some(true));
        assert_eq!(bool_value(&json!(0)), Some(false));
        assert_eq!(bool_value(&json!(2)), None);
        assert_eq!(bool_value(&json!("maybe")), None);
        assert_eq!(bool_value(&Value::Null), None);
    }

    #[test]
    fn test_int_value_variants() {
        assert_eq!(int_value(&json!(3)), Some(3));
        assert_eq!(int_value(&json!(2.0)), Some(2));
        assert_eq!(int_value(&json!("4")), Some(4));
        assert_eq!(int_value(&json!(2.5)), None);
        assert_eq!(int_value(&json!("two")), None);
        assert_eq!(int_value(&json!(i64::MAX)), None);
        assert_eq!(int_value(&Value::Null), None);
    }
}
