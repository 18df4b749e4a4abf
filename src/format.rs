//! Content formats: named policies for printing scalars as literals.
//!
//! A [`ContentFormat`] decides how a value computed by a template is written into the
//! output when the output is source code in some language. Each variant is a fixed,
//! stateless choice of [`EscapeGrammar`]; all of them share the same escaper and the
//! same number, boolean and null tokens.
//!
//! | Format | Name | Use when the output is |
//! |--------|------|------------------------|
//! | [`Json`](ContentFormat::Json) | `"JSON"` | a JSON document |
//! | [`JavaScript`](ContentFormat::JavaScript) | `"JavaScript"` | JavaScript source |
//! | [`JavaScriptOrJson`](ContentFormat::JavaScriptOrJson) | `"JavaScript or JSON"` | either of them |
//!
//! The combined format is the default. A template that is included both from an inline
//! `<script>` block and from a JSON response body stays correct in both places; the
//! price is a few extra backslashes.
//!
//! ## Examples
//!
//! ```rust
//! use cformat::ContentFormat;
//!
//! let format = ContentFormat::default();
//! assert_eq!(format.name(), "JavaScript or JSON");
//! assert_eq!(format.format_string("a\"b\\c\nd/e"), r#""a\"b\\c\nd\/e""#);
//! assert_eq!(format.format_number(1.5), "1.5");
//! assert_eq!(format.format_bool(true), "true");
//! assert_eq!(format.format_null(), "null");
//! ```

use crate::escape::{self, EscapeGrammar, QuoteStyle};
use crate::options::EscapeOptions;
use crate::registry::FormatRegistry;
use crate::value::{Number, Scalar};
use crate::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A named output format for scalar literals.
///
/// Every variant exists exactly once and carries no state, so formats can be compared
/// with `==`, copied freely and shared across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContentFormat {
    Json,
    JavaScript,
    #[default]
    JavaScriptOrJson,
}

impl ContentFormat {
    /// Every format, in registration order.
    pub const ALL: [ContentFormat; 3] = [
        ContentFormat::Json,
        ContentFormat::JavaScript,
        ContentFormat::JavaScriptOrJson,
    ];

    /// Returns the stable name used in configuration files and diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::ContentFormat;
    ///
    /// assert_eq!(ContentFormat::Json.name(), "JSON");
    /// assert_eq!(ContentFormat::JavaScript.name(), "JavaScript");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ContentFormat::Json => "JSON",
            ContentFormat::JavaScript => "JavaScript",
            ContentFormat::JavaScriptOrJson => "JavaScript or JSON",
        }
    }

    /// Returns the grammar string literals are escaped for.
    #[must_use]
    pub const fn grammar(self) -> EscapeGrammar {
        match self {
            ContentFormat::Json => EscapeGrammar::Json,
            ContentFormat::JavaScript => EscapeGrammar::JavaScript,
            ContentFormat::JavaScriptOrJson => EscapeGrammar::JavaScriptOrJson,
        }
    }

    /// Returns `true` for the format used when nothing was configured.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, ContentFormat::JavaScriptOrJson)
    }

    /// Looks up a format by its name in the global registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] if no format has this name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::ContentFormat;
    ///
    /// assert_eq!(ContentFormat::from_name("JSON").unwrap(), ContentFormat::Json);
    /// assert!(ContentFormat::from_name("json").is_err());
    /// ```
    pub fn from_name(name: &str) -> crate::Result<Self> {
        FormatRegistry::global().get(name)
    }

    /// Prints a string as a double-quoted literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::ContentFormat;
    ///
    /// assert_eq!(ContentFormat::Json.format_string("</script>"), "\"</script>\"");
    /// assert_eq!(ContentFormat::JavaScript.format_string("</script>"), r#""<\/script>""#);
    /// ```
    #[must_use]
    pub fn format_string(self, s: &str) -> String {
        if !escape::needs_escaping(s, self.grammar()) {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            out.push_str(s);
            out.push('"');
            return out;
        }
        escape::quote(s, self.grammar(), QuoteStyle::Double)
    }

    /// Prints a string as a double-quoted literal with explicit escape options.
    #[must_use]
    pub fn format_string_with(self, s: &str, options: &EscapeOptions) -> String {
        escape::quote_with_options(s, self.grammar(), QuoteStyle::Double, options)
    }

    /// Returns a value that writes the string literal when displayed.
    ///
    /// Lets template writers stream the literal straight into their output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::ContentFormat;
    /// use std::fmt::Write;
    ///
    /// let mut out = String::new();
    /// write!(out, "var name = {};", ContentFormat::JavaScript.string_literal("O'Neil")).unwrap();
    /// assert_eq!(out, r#"var name = "O'Neil";"#);
    /// ```
    #[must_use]
    pub fn string_literal(self, s: &str) -> StringLiteral<'_> {
        StringLiteral { format: self, raw: s }
    }

    /// Prints a number token.
    ///
    /// Numbers print the same in every format; see [`Number`] for the exact rules.
    ///
    /// # JSON and non-finite floats
    ///
    /// NaN and the infinities print as `NaN`, `Infinity` and `-Infinity` in *every*
    /// format. Those are JavaScript tokens: strict JSON parsers reject them, so under
    /// [`Json`](ContentFormat::Json) and [`JavaScriptOrJson`](ContentFormat::JavaScriptOrJson)
    /// the output is no longer valid JSON. Check [`Number::is_non_finite`] first when
    /// the value may be non-finite and the output must parse as JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::{ContentFormat, Number};
    ///
    /// let format = ContentFormat::JavaScriptOrJson;
    /// assert_eq!(format.format_number(12), "12");
    /// assert_eq!(format.format_number(f64::NAN), "NaN");
    /// assert!(Number::from(f64::NAN).is_non_finite());
    /// ```
    #[must_use]
    pub fn format_number(self, n: impl Into<Number>) -> String {
        n.into().to_string()
    }

    /// Prints `true` or `false`.
    #[must_use]
    pub const fn format_bool(self, b: bool) -> &'static str {
        if b {
            self.true_str()
        } else {
            self.false_str()
        }
    }

    /// Prints `null`.
    #[must_use]
    pub const fn format_null(self) -> &'static str {
        self.null_str()
    }

    #[must_use]
    pub const fn true_str(self) -> &'static str {
        "true"
    }

    #[must_use]
    pub const fn false_str(self) -> &'static str {
        "false"
    }

    #[must_use]
    pub const fn null_str(self) -> &'static str {
        "null"
    }

    /// Prints any scalar.
    #[must_use]
    pub fn format_scalar(self, value: &Scalar) -> String {
        match value {
            Scalar::Null => self.format_null().to_string(),
            Scalar::Bool(b) => self.format_bool(*b).to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => self.format_string(s),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentFormat::from_name(s)
    }
}

impl Serialize for ContentFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ContentFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl<'de> de::Visitor<'de> for NameVisitor {
            type Value = ContentFormat;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a content format name")
            }

            fn visit_str<E>(self, value: &str) -> Result<ContentFormat, E>
            where
                E: de::Error,
            {
                ContentFormat::from_name(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

/// A string literal that is escaped while it is being written.
///
/// Created by [`ContentFormat::string_literal`].
#[derive(Clone, Copy, Debug)]
pub struct StringLiteral<'a> {
    format: ContentFormat,
    raw: &'a str,
}

impl fmt::Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grammar = self.format.grammar();
        f.write_str("\"")?;
        escape::write_encoded(
            &mut *f,
            self.raw,
            grammar,
            QuoteStyle::Double,
            &EscapeOptions::for_grammar(grammar),
        )?;
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_grammars() {
        assert_eq!(ContentFormat::Json.grammar(), EscapeGrammar::Json);
        assert_eq!(ContentFormat::JavaScript.grammar(), EscapeGrammar::JavaScript);
        assert_eq!(
            ContentFormat::JavaScriptOrJson.grammar(),
            EscapeGrammar::JavaScriptOrJson
        );
        assert_eq!(ContentFormat::JavaScriptOrJson.to_string(), "JavaScript or JSON");
    }

    #[test]
    fn test_default_is_combined() {
        assert_eq!(ContentFormat::default(), ContentFormat::JavaScriptOrJson);
        assert!(ContentFormat::default().is_default());
        assert!(!ContentFormat::Json.is_default());
    }

    #[test]
    fn test_format_string_without_escapes() {
        for format in ContentFormat::ALL {
            assert_eq!(format.format_string("hello world"), "\"hello world\"");
            assert_eq!(format.format_string(""), "\"\"");
        }
    }

    #[test]
    fn test_format_string_scenario() {
        let raw = "a\"b\\c\nd/e";
        assert_eq!(
            ContentFormat::JavaScriptOrJson.format_string(raw),
            r#""a\"b\\c\nd\/e""#
        );
        assert_eq!(ContentFormat::JavaScript.format_string(raw), r#""a\"b\\c\nd\/e""#);
        assert_eq!(ContentFormat::Json.format_string(raw), r#""a\"b\\c\nd/e""#);
    }

    #[test]
    fn test_scalar_tokens_do_not_depend_on_format() {
        for format in ContentFormat::ALL {
            assert_eq!(format.format_bool(true), "true");
            assert_eq!(format.format_bool(false), "false");
            assert_eq!(format.format_null(), "null");
            assert_eq!(format.format_number(-12), "-12");
            assert_eq!(format.format_number(0.25), "0.25");
        }
    }

    #[test]
    fn test_format_scalar_dispatch() {
        let format = ContentFormat::Json;
        assert_eq!(format.format_scalar(&Scalar::Null), "null");
        assert_eq!(format.format_scalar(&Scalar::from(true)), "true");
        assert_eq!(format.format_scalar(&Scalar::from(1e21)), "1e21");
        assert_eq!(format.format_scalar(&Scalar::from("x\ty")), r#""x\ty""#);
    }

    #[test]
    fn test_string_literal_matches_format_string() {
        let raw = "line\u{2028}sep </script>";
        for format in ContentFormat::ALL {
            assert_eq!(format.string_literal(raw).to_string(), format.format_string(raw));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("JavaScript".parse::<ContentFormat>().unwrap(), ContentFormat::JavaScript);
        assert!("javascript".parse::<ContentFormat>().is_err());
    }
}
