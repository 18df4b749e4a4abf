//! Error types for content format selection and literal serialization.
//!
//! Escaping itself never fails: every string, number, boolean and null has a
//! literal in every format. Errors only come from three places:
//!
//! - **Configuration**: a format name that is not registered
//! - **Serde bridge**: a value handed to [`to_literal`](crate::to_literal) that
//!   is not a scalar (sequences, maps, structs, ...)
//! - **I/O**: the writer given to [`write_literal`](crate::write_literal) failed
//!
//! ## Examples
//!
//! ```rust
//! use cformat::{ContentFormat, Error};
//!
//! let err = ContentFormat::from_name("YAML").unwrap_err();
//! assert!(matches!(err, Error::UnknownFormat { .. }));
//! assert!(err.to_string().contains("\"YAML\""));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors this crate can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while writing a literal
    #[error("IO error: {0}")]
    Io(String),

    /// A configuration named a content format that is not registered.
    #[error("unknown content format {name:?}; valid names are {}", QuotedList(.valid))]
    UnknownFormat {
        name: String,
        valid: Vec<&'static str>,
    },

    /// The value is not a scalar and has no literal form.
    #[error("Unsupported type: {0} cannot be formatted as a scalar literal")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a configuration error for an unrecognized format name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::Error;
    ///
    /// let err = Error::unknown_format("XML", &["JSON", "JavaScript"]);
    /// assert_eq!(
    ///     err.to_string(),
    ///     r#"unknown content format "XML"; valid names are "JSON", "JavaScript""#
    /// );
    /// ```
    pub fn unknown_format(name: &str, valid: &[&'static str]) -> Self {
        Error::UnknownFormat {
            name: name.to_string(),
            valid: valid.to_vec(),
        }
    }

    /// Creates an unsupported type error for values that are not scalars.
    pub fn unsupported_type(kind: &str) -> Self {
        Error::UnsupportedType(kind.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

/// Renders `["a", "b"]` as `"a", "b"`.
struct QuotedList<'a>(&'a [&'static str]);

impl fmt::Display for QuotedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", name)?;
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_message_lists_valid_names() {
        let err = Error::unknown_format("YAML", &["JSON", "JavaScript", "JavaScript or JSON"]);
        assert_eq!(
            err.to_string(),
            r#"unknown content format "YAML"; valid names are "JSON", "JavaScript", "JavaScript or JSON""#
        );
    }

    #[test]
    fn test_unknown_format_name_is_debug_quoted() {
        let err = Error::unknown_format("a\"b", &["JSON"]);
        assert!(err.to_string().starts_with(r#"unknown content format "a\"b""#));
    }

    #[test]
    fn test_serializer_custom_error() {
        let err = <Error as serde::ser::Error>::custom("bad value");
        assert_eq!(err, Error::Custom("bad value".to_string()));
        assert_eq!(err.to_string(), "Error: bad value");
    }

    #[test]
    fn test_unsupported_type_message() {
        let err = Error::unsupported_type("sequence");
        assert!(err.to_string().contains("sequence"));
    }
}
