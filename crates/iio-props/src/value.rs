//! Untyped property values exchanged with the image I/O engine.
//!
//! [`RawValue`] is the universal currency of the metadata store. The engine
//! hands out dictionaries whose values are loosely typed numbers, strings,
//! blobs, small arrays and nested dictionaries; typed records in this crate
//! are decoded from and encoded to these values.
//!
//! # Type Categories
//!
//! ## Numeric boxes
//! - `Bool`, `Int`, `Double`
//!
//! All three are "numbers" from the engine's point of view: a boolean is a
//! width-1 number, and an integer field may arrive as a double. The
//! `as_*` accessors widen between them where that is lossless or where the
//! engine itself would truncate.
//!
//! ## Payloads
//! - `Str(String)` - identifiers, references, date stamps
//! - `Bytes(Vec<u8>)` - opaque blobs (color maps, maker notes)
//!
//! ## Collections
//! - `List(Vec<RawValue>)` - small arrays (GPS version, color components)
//! - `Map(RawMap)` - nested dictionary (one per metadata namespace)
//!
//! # Example
//!
//! ```rust
//! use iio_props::RawValue;
//!
//! let exposure = RawValue::Double(0.008);
//! assert_eq!(exposure.as_f64(), Some(0.008));
//!
//! // Integers widen to doubles, doubles truncate to integers
//! assert_eq!(RawValue::Int(3).as_f64(), Some(3.0));
//! assert_eq!(RawValue::Double(2.9).as_i64(), Some(2));
//! ```

use crate::RawMap;

/// Loosely typed metadata value.
///
/// Mirrors the shapes the engine can store in a property dictionary.
/// Conversion into strongly typed fields lives in [`crate::convert`].
///
/// # Equality
///
/// Doubles compare by bit pattern so that a value always equals itself
/// (including NaN) after a round trip through a dictionary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum RawValue {
    /// Width-1 number.
    Bool(bool),

    /// Integral number.
    Int(i64),

    /// Floating point number.
    ///
    /// Used for: exposure time, GPS coordinates, frame delays.
    ///
    /// Non-finite values serialize as `"NaN"`, `"inf"` or `"-inf"`.
    Double(
        #[cfg_attr(
            feature = "serde",
            serde(serialize_with = "serialize_double", deserialize_with = "deserialize_double")
        )]
        f64,
    ),

    /// UTF-8 string.
    ///
    /// Used for: reference directions, date and time stamps, map datum.
    Str(String),

    /// Opaque byte blob, never reinterpreted.
    Bytes(Vec<u8>),

    /// Ordered list of values.
    List(Vec<RawValue>),

    /// Nested dictionary.
    Map(RawMap),
}

impl RawValue {
    /// Returns the type name for diagnostics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iio_props::RawValue;
    ///
    /// assert_eq!(RawValue::Str("N".into()).type_name(), "string");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Double(_) => "double",
            RawValue::Str(_) => "string",
            RawValue::Bytes(_) => "bytes",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
        }
    }

    /// Returns true for `Bool`, `Int` and `Double`.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, RawValue::Bool(_) | RawValue::Int(_) | RawValue::Double(_))
    }

    /// Tries to get as string reference.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Tries to get as i64.
    ///
    /// Accepts any numeric: `Bool` maps to 0/1, a finite `Double` is
    /// truncated toward zero. Non-finite doubles and doubles outside the
    /// `i64` range are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawValue::Int(v) => Some(*v),
            RawValue::Bool(v) => Some(i64::from(*v)),
            RawValue::Double(v) if v.is_finite() => {
                let t = v.trunc();
                (t >= -I64_BOUND && t < I64_BOUND).then_some(t as i64)
            }
            _ => None,
        }
    }

    /// Like [`as_i64`](Self::as_i64), but a `Double` must have no
    /// fractional part.
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            RawValue::Double(v) if v.fract() != 0.0 => None,
            _ => self.as_i64(),
        }
    }

    /// Tries to get as f64, widening any numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Double(v) => Some(*v),
            RawValue::Int(v) => Some(*v as f64),
            RawValue::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Tries to get as bool.
    ///
    /// Any nonzero numeric is `true`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(v) => Some(*v),
            RawValue::Int(v) => Some(*v != 0),
            RawValue::Double(v) => Some(*v != 0.0),
            _ => None,
        }
    }

    /// Tries to get as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RawValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// Tries to get as list reference.
    #[inline]
    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Tries to get as nested dictionary.
    #[inline]
    pub fn as_map(&self) -> Option<&RawMap> {
        match self {
            RawValue::Map(v) => Some(v),
            _ => None,
        }
    }
}

/// 2^63, the first double past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// JSON has no NaN or infinity, so those travel as names.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum DoubleRepr {
    Number(f64),
    Named(String),
}

#[cfg(feature = "serde")]
fn serialize_double<S>(v: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;

    let repr = if v.is_finite() {
        DoubleRepr::Number(*v)
    } else if v.is_nan() {
        DoubleRepr::Named("NaN".into())
    } else if v.is_sign_positive() {
        DoubleRepr::Named("inf".into())
    } else {
        DoubleRepr::Named("-inf".into())
    };
    repr.serialize(serializer)
}

#[cfg(feature = "serde")]
fn deserialize_double<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde::de::Error;

    match DoubleRepr::deserialize(deserializer)? {
        DoubleRepr::Number(v) => Ok(v),
        DoubleRepr::Named(name) => match name.as_str() {
            "NaN" => Ok(f64::NAN),
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            _ => Err(D::Error::custom(format!(
                "invalid double '{}'. Must be a number or one of: NaN, inf, -inf",
                name
            ))),
        },
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        use RawValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Bool(v) => write!(f, "{}", v),
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::Double(v) => write!(f, "{}", v),
            RawValue::Str(v) => write!(f, "{}", v),
            RawValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            RawValue::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            RawValue::Map(v) => write!(f, "{{{} entries}}", v.len()),
        }
    }
}

// === From implementations for convenience ===

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Int(i64::from(v))
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Int(i64::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Double(v)
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Str(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Str(v.to_string())
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(v: Vec<u8>) -> Self {
        RawValue::Bytes(v)
    }
}

impl From<RawMap> for RawValue {
    fn from(v: RawMap) -> Self {
        RawValue::Map(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_widening() {
        assert_eq!(RawValue::Int(10).as_f64(), Some(10.0));
        assert_eq!(RawValue::Bool(true).as_i64(), Some(1));
        assert_eq!(RawValue::Double(-2.7).as_i64(), Some(-2));
        assert_eq!(RawValue::Double(f64::NAN).as_i64(), None);
        assert_eq!(RawValue::Str("1".into()).as_f64(), None);
    }

    #[test]
    fn test_bool_from_any_nonzero() {
        assert_eq!(RawValue::Int(0).as_bool(), Some(false));
        assert_eq!(RawValue::Int(7).as_bool(), Some(true));
        assert_eq!(RawValue::Double(0.5).as_bool(), Some(true));
        assert_eq!(RawValue::Bytes(vec![1]).as_bool(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::Bytes(vec![0; 768]).to_string(), "<768 bytes>");
        assert_eq!(
            RawValue::List(vec![RawValue::Int(2), RawValue::Int(2), RawValue::Int(0)]).to_string(),
            "[2, 2, 0]"
        );
        assert_eq!(RawValue::Str("N".into()).to_string(), "N");
    }

    #[test]
    fn test_out_of_range_double_is_not_an_integer() {
        assert_eq!(RawValue::Double(1e300).as_i64(), None);
        assert_eq!(RawValue::Double(-1e300).as_i64(), None);
        assert_eq!(RawValue::Double(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(RawValue::Double(-9_223_372_036_854_775_808.0).as_i64(), Some(i64::MIN));
        assert_eq!(RawValue::Double(1e18).as_i64(), Some(1_000_000_000_000_000_000));
    }

    #[test]
    fn test_integral_rejects_fraction() {
        assert_eq!(RawValue::Double(2.0).as_integral(), Some(2));
        assert_eq!(RawValue::Double(2.5).as_integral(), None);
        assert_eq!(RawValue::Bool(true).as_integral(), Some(1));
        assert_eq!(RawValue::Double(f64::INFINITY).as_integral(), None);
    }

    #[test]
    fn test_nan_equals_itself() {
        let v = RawValue::Double(f64::NAN);
        assert_eq!(v, v.clone());
        assert_ne!(RawValue::Int(1), RawValue::Double(1.0));
    }
}
