//! Typed value conversion.
//!
//! [`RawRepr`] maps a concrete Rust type to and from its [`RawValue`]
//! representation. Encoding is total. Decoding checks the runtime shape of
//! the raw value and returns `None` on mismatch, so a malformed entry in a
//! dictionary can never abort the decoding of a whole record.
//!
//! Enumerations backed by a fixed set of strings or integers implement
//! [`StrEnum`] / [`IntEnum`]; their decoders only accept one of the defined
//! member representations.
//!
//! # Example
//!
//! ```rust
//! use iio_props::{RawRepr, RawValue};
//!
//! assert_eq!(f64::from_raw(&RawValue::Int(10)), Some(10.0));
//! assert_eq!(f64::from_raw(&RawValue::Str("10".into())), None);
//! assert_eq!(bool::from_raw(&RawValue::Int(2)), Some(true));
//! ```

use crate::{RawMap, RawValue};

/// Bidirectional conversion between a typed value and a [`RawValue`].
pub trait RawRepr: Sized {
    /// Encodes the value. Never fails.
    fn to_raw(&self) -> RawValue;

    /// Decodes a raw value, returning `None` if its shape doesn't match.
    fn from_raw(raw: &RawValue) -> Option<Self>;
}

/// Enumeration with a fixed set of string representations.
///
/// Implementors list every member in [`StrEnum::MEMBERS`]; parsing is an
/// exact, case-sensitive match against [`StrEnum::as_str`].
pub trait StrEnum: Sized + Copy + 'static {
    /// All members of the enumeration.
    const MEMBERS: &'static [Self];

    /// External string for this member.
    fn as_str(&self) -> &'static str;

    /// Looks up the member whose external string is `s`.
    fn parse(s: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.as_str() == s)
    }

    /// Encodes this member as `RawValue::Str`.
    fn to_raw_str(&self) -> RawValue {
        RawValue::Str(self.as_str().to_string())
    }

    /// Decodes a `RawValue::Str` holding one of the member strings.
    fn from_raw_str(raw: &RawValue) -> Option<Self> {
        raw.as_str().and_then(Self::parse)
    }
}

/// Enumeration with a fixed set of integer representations.
pub trait IntEnum: Sized + Copy + 'static {
    /// All members of the enumeration.
    const MEMBERS: &'static [Self];

    /// External integer for this member.
    fn as_i64(&self) -> i64;

    /// Looks up the member whose external integer is `v`.
    fn parse(v: i64) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.as_i64() == v)
    }

    /// Encodes this member as `RawValue::Int`.
    fn to_raw_int(&self) -> RawValue {
        RawValue::Int(self.as_i64())
    }

    /// Decodes any numeric whose integer value is a member.
    fn from_raw_int(raw: &RawValue) -> Option<Self> {
        raw.as_i64().and_then(Self::parse)
    }
}

impl RawRepr for f64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Double(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_f64()
    }
}

impl RawRepr for i64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Int(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_i64()
    }
}

impl RawRepr for u32 {
    fn to_raw(&self) -> RawValue {
        RawValue::Int(i64::from(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_i64().and_then(|v| u32::try_from(v).ok())
    }
}

impl RawRepr for usize {
    fn to_raw(&self) -> RawValue {
        RawValue::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_i64().and_then(|v| usize::try_from(v).ok())
    }
}

impl RawRepr for bool {
    fn to_raw(&self) -> RawValue {
        RawValue::Bool(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_bool()
    }
}

impl RawRepr for String {
    fn to_raw(&self) -> RawValue {
        RawValue::Str(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_str().map(str::to_string)
    }
}

impl RawRepr for Vec<u8> {
    fn to_raw(&self) -> RawValue {
        RawValue::Bytes(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_bytes().map(<[u8]>::to_vec)
    }
}

/// Small integer arrays (e.g. GPS version `[2, 2, 0, 0]`).
///
/// Every element must be an integral numeric; a single non-numeric or
/// fractional element makes the whole array absent.
impl RawRepr for Vec<i64> {
    fn to_raw(&self) -> RawValue {
        RawValue::List(self.iter().map(|v| RawValue::Int(*v)).collect())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_list()?.iter().map(RawValue::as_integral).collect()
    }
}

impl RawRepr for RawMap {
    fn to_raw(&self) -> RawValue {
        RawValue::Map(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_map().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Cardinal {
        North,
        South,
    }

    impl StrEnum for Cardinal {
        const MEMBERS: &'static [Self] = &[Cardinal::North, Cardinal::South];

        fn as_str(&self) -> &'static str {
            match self {
                Cardinal::North => "N",
                Cardinal::South => "S",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Level {
        Low,
        High,
    }

    impl IntEnum for Level {
        const MEMBERS: &'static [Self] = &[Level::Low, Level::High];

        fn as_i64(&self) -> i64 {
            match self {
                Level::Low => 0,
                Level::High => 1,
            }
        }
    }

    #[test]
    fn test_str_enum_exact_match() {
        assert_eq!(Cardinal::from_raw_str(&RawValue::Str("N".into())), Some(Cardinal::North));
        assert_eq!(Cardinal::from_raw_str(&RawValue::Str("n".into())), None);
        assert_eq!(Cardinal::from_raw_str(&RawValue::Str("North".into())), None);
        assert_eq!(Cardinal::from_raw_str(&RawValue::Int(0)), None);
        assert_eq!(Cardinal::South.to_raw_str(), RawValue::Str("S".into()));
    }

    #[test]
    fn test_int_enum_members_only() {
        assert_eq!(Level::from_raw_int(&RawValue::Int(1)), Some(Level::High));
        assert_eq!(Level::from_raw_int(&RawValue::Double(0.0)), Some(Level::Low));
        assert_eq!(Level::from_raw_int(&RawValue::Int(2)), None);
        assert_eq!(Level::from_raw_int(&RawValue::Str("1".into())), None);
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(u32::from_raw(&RawValue::Int(-1)), None);
        assert_eq!(u32::from_raw(&RawValue::Int(256)), Some(256));
        assert_eq!(i64::from_raw(&RawValue::Bool(true)), Some(1));
    }

    #[test]
    fn test_int_array_rejects_mixed() {
        let good = RawValue::List(vec![RawValue::Int(2), RawValue::Int(2), RawValue::Int(0)]);
        assert_eq!(Vec::<i64>::from_raw(&good), Some(vec![2, 2, 0]));

        let bad = RawValue::List(vec![RawValue::Int(2), RawValue::Str("x".into())]);
        assert_eq!(Vec::<i64>::from_raw(&bad), None);
        assert_eq!(Vec::<i64>::from_raw(&RawValue::Int(2)), None);
    }

    #[test]
    fn test_int_array_rejects_fractional() {
        let whole = RawValue::List(vec![RawValue::Double(2.0), RawValue::Int(2)]);
        assert_eq!(Vec::<i64>::from_raw(&whole), Some(vec![2, 2]));

        let fractional = RawValue::List(vec![RawValue::Double(2.5), RawValue::Int(2)]);
        assert_eq!(Vec::<i64>::from_raw(&fractional), None);
    }

    #[test]
    fn test_bytes_pass_through() {
        let blob = vec![0u8, 255, 17];
        assert_eq!(Vec::<u8>::from_raw(&blob.to_raw()), Some(blob));
        assert_eq!(Vec::<u8>::from_raw(&RawValue::Str("abc".into())), None);
    }
}
