//! Scalar values handed over by the evaluation engine.
//!
//! This module provides the two value types content formats know how to print:
//!
//! - [`Number`]: integers, floats and arbitrary precision integers
//! - [`Scalar`]: null, booleans, numbers and strings
//!
//! Anything else an engine produces (lists, hashes, dates, ...) has to be turned into
//! one of these, or rejected, before it reaches a [`ContentFormat`](crate::ContentFormat).
//!
//! ## Creating Values
//!
//! ```rust
//! use cformat::{Number, Scalar};
//!
//! let null = Scalar::Null;
//! let boolean = Scalar::from(true);
//! let number = Scalar::from(42);
//! let text = Scalar::from("hello");
//! let missing = Scalar::from(None::<i32>);
//!
//! assert!(number.is_number());
//! assert!(missing.is_null());
//! assert_eq!(Number::from(2.5).to_string(), "2.5");
//! ```

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// Newtype struct name the literal serializer recognizes as "digits of a big integer".
pub(crate) const BIGINT_TOKEN: &str = "$cformat::private::BigInt";

/// A numeric value.
///
/// The [`Display`](fmt::Display) output is the literal token used by every content
/// format, since JSON and JavaScript agree on number syntax:
///
/// - integers are printed in plain decimal, at any magnitude
/// - finite floats use the shortest representation that reads back to the same value,
///   in exponent form when the magnitude is at least `1e21` or below `1e-6`
/// - negative zero is printed as `0`
/// - non-finite floats are printed as `Infinity`, `-Infinity` and `NaN`
///
/// # Examples
///
/// ```rust
/// use cformat::Number;
///
/// assert_eq!(Number::from(42).to_string(), "42");
/// assert_eq!(Number::from(3.0).to_string(), "3");
/// assert_eq!(Number::from(1e21).to_string(), "1e21");
/// assert_eq!(Number::from(-0.0).to_string(), "0");
/// assert_eq!(Number::from(f64::NEG_INFINITY).to_string(), "-Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    BigInt(BigInt),
}

impl Number {
    /// Returns `true` if this is an integer value of any width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::Number;
    ///
    /// assert!(Number::Integer(42).is_integer());
    /// assert!(Number::from(u64::MAX).is_integer());
    /// assert!(!Number::Float(3.5).is_integer());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for NaN and the infinities.
    ///
    /// Those print as JavaScript tokens, which strict JSON parsers reject.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::Number;
    ///
    /// assert!(Number::from(f64::NAN).is_non_finite());
    /// assert!(!Number::from(1.5).is_non_finite());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        match self {
            Number::Float(f) => !f.is_finite(),
            _ => false,
        }
    }

    /// Returns the value as an `i64` if it fits without loss.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Unsigned(u) => i64::try_from(*u).ok(),
            Number::BigInt(b) => i64::try_from(b).ok(),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::BigInt(b) => write!(f, "{}", b),
            Number::Float(fl) => write_float(f, *fl),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}

macro_rules! number_from {
    ($variant:ident: $target:ty => $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(value as $target)
                }
            }
        )+
    };
}

number_from!(Integer: i64 => i8, i16, i32, i64, isize);
number_from!(Unsigned: u64 => u8, u16, u32, u64, usize);

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match u64::try_from(value) {
            Ok(u) => Number::Unsigned(u),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        // Go through the shortest f32 decimal so 0.1f32 prints as 0.1, not 0.10000000149011612.
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Number::Float(widened)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            Number::Unsigned(u) => serializer.serialize_u64(*u),
            Number::Float(f) => serializer.serialize_f64(*f),
            Number::BigInt(b) => serializer.serialize_newtype_struct(BIGINT_TOKEN, &b.to_string()),
        }
    }
}

/// A scalar value produced during template evaluation.
///
/// # Examples
///
/// ```rust
/// use cformat::{ContentFormat, Scalar};
///
/// let values = [Scalar::Null, Scalar::from(false), Scalar::from(7), Scalar::from("a/b")];
/// let rendered: Vec<String> = values
///     .iter()
///     .map(|v| ContentFormat::JavaScriptOrJson.format_scalar(v))
///     .collect();
/// assert_eq!(rendered, ["null", "false", "7", r#""a\/b""#]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Scalar::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }

    /// Returns the string contents, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Scalar::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<char> for Scalar {
    fn from(value: char) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<Number> for Scalar {
    fn from(value: Number) -> Self {
        Scalar::Number(value)
    }
}

macro_rules! scalar_from_number {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Scalar {
                fn from(value: $source) -> Self {
                    Scalar::Number(Number::from(value))
                }
            }
        )+
    };
}

scalar_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt);

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}
