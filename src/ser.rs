//! Scalar literal serialization.
//!
//! This module provides the [`LiteralSerializer`], a `serde` serializer that turns any
//! scalar `T: Serialize` into a literal of a [`ContentFormat`]. It is what an engine
//! uses when the values it renders are ordinary Rust types rather than [`Scalar`]s.
//!
//! ## What is a scalar
//!
//! | Serde data model | Literal |
//! |------------------|---------|
//! | `bool` | `true` / `false` |
//! | integers, floats | number token, see [`Number`] |
//! | `char`, `str` | quoted, escaped string |
//! | `()`, `None`, unit struct | `null` |
//! | `Some(x)`, newtype struct | literal of `x` |
//! | unit enum variant | quoted variant name |
//!
//! Byte arrays, sequences, tuples, maps, structs and data-carrying enum variants have
//! no scalar literal and fail with [`Error::UnsupportedType`].
//!
//! ## Usage
//!
//! ```rust
//! use cformat::{to_literal, ContentFormat};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! enum Level { Debug, Info }
//!
//! let format = ContentFormat::JavaScriptOrJson;
//! assert_eq!(to_literal(&Level::Info, format).unwrap(), "\"Info\"");
//! assert_eq!(to_literal(&Some(3u8), format).unwrap(), "3");
//! assert_eq!(to_literal(&None::<String>, format).unwrap(), "null");
//! assert!(to_literal(&vec![1, 2], format).is_err());
//! ```
//!
//! [`Scalar`]: crate::Scalar

use crate::value::{Number, BIGINT_TOKEN};
use crate::{ContentFormat, EscapeOptions, Error, Result};
use serde::ser::{self, Impossible, Serialize};

/// Serializes one scalar value into a literal string.
///
/// Created via [`LiteralSerializer::new`] or [`LiteralSerializer::with_options`].
#[derive(Clone, Copy, Debug)]
pub struct LiteralSerializer {
    format: ContentFormat,
    options: EscapeOptions,
    /// Emit strings verbatim; set only while writing big integer digits.
    raw_str: bool,
}

impl LiteralSerializer {
    /// Creates a serializer that escapes with the grammar defaults of `format`.
    pub fn new(format: ContentFormat) -> Self {
        LiteralSerializer::with_options(format, EscapeOptions::for_grammar(format.grammar()))
    }

    /// Creates a serializer that escapes with explicit options.
    pub fn with_options(format: ContentFormat, options: EscapeOptions) -> Self {
        LiteralSerializer {
            format,
            options,
            raw_str: false,
        }
    }

    fn number(self, n: impl Into<Number>) -> Result<String> {
        Ok(self.format.format_number(n))
    }

    fn unsupported(kind: &str) -> Error {
        Error::unsupported_type(kind)
    }
}

impl ser::Serializer for LiteralSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(self.format.format_bool(v).to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        self.number(v)
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        self.number(v)
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        self.number(v)
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        self.number(v)
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        self.number(v)
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        self.number(v)
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        self.number(v)
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        self.number(v)
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        self.number(v)
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        self.number(v)
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        self.number(v)
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        self.number(v)
    }

    fn serialize_char(self, v: char) -> Result<String> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        if self.raw_str {
            return Ok(v.to_string());
        }
        Ok(self.format.format_string_with(v, &self.options))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Self::unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(self.format.format_null().to_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        if name == BIGINT_TOKEN {
            return value.serialize(LiteralSerializer {
                raw_str: true,
                ..self
            });
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Self::unsupported("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Self::unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Self::unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Self::unsupported("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Self::unsupported("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Self::unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Self::unsupported("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Self::unsupported("struct variant"))
    }
}
