//! JSON encoding and lenient decoding of sequences.
//!
//! Both sequence types serialize as a plain JSON array. Strict decoding goes through serde,
//! [`Seq::unmarshal_value`] and friends accept loosely typed input and coerce every element
//! through [`FromValue`].

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::compare;
use crate::error::Result;
use crate::mode::AccessMode;
use crate::seq::Seq;
use crate::sorted::SortedSeq;

/// Best-effort conversion from a dynamically typed JSON value.
///
/// Returns `None` when the value has no sensible representation as `Self`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! numeric_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => n
                            .as_i64()
                            .and_then(|x| <$t>::try_from(x).ok())
                            .or_else(|| n.as_u64().and_then(|x| <$t>::try_from(x).ok()))
                            .or_else(|| n.as_f64().map(|x| x as $t)),
                        Value::String(s) => {
                            let s = s.trim();
                            s.parse::<$t>()
                                .ok()
                                .or_else(|| s.parse::<f64>().ok().map(|x| x as $t))
                        }
                        Value::Bool(b) => Some(if *b { 1 as $t } else { 0 as $t }),
                        _ => None,
                    }
                }
            }
        )*
    };
}

numeric_from_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => n.as_f64().map(|x| x as $t),
                        Value::String(s) => s.trim().parse::<$t>().ok(),
                        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                        _ => None,
                    }
                }
            }
        )*
    };
}

float_from_value!(f32, f64);

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|x| x != 0.0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Some(true),
                "false" | "0" | "off" | "no" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// Accepts an array, a JSON document holding an array, or a single value.
fn into_items(value: Value) -> Result<Vec<Value>> {
    let items = match value {
        Value::Array(items) => items,
        Value::String(s) => match serde_json::from_str::<Value>(&s)? {
            Value::Array(items) => items,
            other => vec![other],
        },
        Value::Null => Vec::new(),
        other => vec![other],
    };

    Ok(items)
}

/// Coerces every item, substituting `T::default()` so length and order are kept.
fn coerce_lenient<T: FromValue + Default>(items: &[Value]) -> Vec<T> {
    let mut substituted = 0;
    let values: Vec<T> = items
        .iter()
        .map(|item| {
            T::from_value(item).unwrap_or_else(|| {
                substituted += 1;
                T::default()
            })
        })
        .collect();

    if substituted > 0 {
        log::warn!(
            "{substituted} of {} values could not be decoded, replaced by defaults",
            items.len()
        );
    }

    values
}

/// Coerces every item, dropping the ones that don't convert.
fn coerce_dropping<T: FromValue>(items: &[Value]) -> Vec<T> {
    let values: Vec<T> = items.iter().filter_map(T::from_value).collect();

    if values.len() < items.len() {
        log::debug!(
            "merge dropped {} of {} values that could not be converted",
            items.len() - values.len(),
            items.len()
        );
    }

    values
}

impl<T: Serialize, M: AccessMode> Serialize for Seq<T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.read(|v| v.serialize(serializer))
    }
}

impl<'de, T: Deserialize<'de>, M: AccessMode> Deserialize<'de> for Seq<T, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

impl<T: Serialize, M: AccessMode> Serialize for SortedSeq<T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.read_buf(|v| v.serialize(serializer))
    }
}

/// Decoded values are ordered naturally.
impl<'de, T, M> Deserialize<'de> for SortedSeq<T, M>
where
    T: Deserialize<'de> + Ord + 'static,
    M: AccessMode,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|v| Self::from_vec(v, compare::natural()))
    }
}

impl<T, M: AccessMode> Seq<T, M> {
    /// Encodes the values as a JSON array.
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON array with the strict element type.
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes loosely typed input, replacing unconvertible elements with `T::default()`.
    ///
    /// `value` may be an array, a string holding a JSON document, or a single value.
    pub fn unmarshal_value(value: Value) -> Result<Self>
    where
        T: FromValue + Default,
    {
        Ok(Self::from_vec(coerce_lenient(&into_items(value)?)))
    }

    /// Appends every value that converts to `T`, dropping the others.
    pub fn merge_values(&self, values: &[Value]) -> &Self
    where
        T: FromValue,
    {
        let values = coerce_dropping(values);
        self.write(|v| v.extend(values));
        self
    }
}

impl<T, M: AccessMode> SortedSeq<T, M> {
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a JSON array with the strict element type, ordered naturally.
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned + Ord + 'static,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes loosely typed input into a sequence ordered by `comparator`.
    pub fn unmarshal_value(value: Value, comparator: compare::Comparator<T>) -> Result<Self>
    where
        T: FromValue + Default,
    {
        Ok(Self::from_vec(
            coerce_lenient(&into_items(value)?),
            comparator,
        ))
    }

    /// Inserts every value that converts to `T`, dropping the others.
    pub fn merge_values(&self, values: &[Value]) -> &Self
    where
        T: FromValue,
    {
        self.add(coerce_dropping::<T>(values))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_from_strings_and_floats() {
        assert_eq!(i64::from_value(&json!(" 42 ")), Some(42));
        assert_eq!(i64::from_value(&json!("3.9")), Some(3));
        assert_eq!(u8::from_value(&json!(300)), Some(255));
        assert_eq!(i32::from_value(&json!(true)), Some(1));
        assert_eq!(i32::from_value(&json!("abc")), None);
        assert_eq!(i32::from_value(&json!(null)), None);
        assert_eq!(f64::from_value(&json!("1.5")), Some(1.5));
    }

    #[test]
    fn strings_and_bools() {
        assert_eq!(String::from_value(&json!(12)), Some("12".to_string()));
        assert_eq!(String::from_value(&json!("x")), Some("x".to_string()));
        assert_eq!(String::from_value(&json!([1, 2])), Some("[1,2]".to_string()));
        assert_eq!(bool::from_value(&json!("off")), Some(false));
        assert_eq!(bool::from_value(&json!(2)), Some(true));
        assert_eq!(bool::from_value(&json!("maybe")), None);
    }

    #[test]
    fn items_from_document_string() {
        let items = into_items(json!("[1, \"a\"]")).unwrap();
        assert_eq!(items, vec![json!(1), json!("a")]);
        assert!(into_items(json!(null)).unwrap().is_empty());
        assert!(into_items(json!("not json")).is_err());
    }

    #[test]
    fn lenient_keeps_length() {
        let values: Vec<i64> = coerce_lenient(&[json!(1), json!("x"), json!(3)]);
        assert_eq!(values, [1, 0, 3]);

        let values: Vec<i64> = coerce_dropping(&[json!(1), json!("x"), json!(3)]);
        assert_eq!(values, [1, 3]);
    }
}
