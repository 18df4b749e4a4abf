//! # cformat
//!
//! Literal formatting for template engines that generate JSON or JavaScript.
//!
//! ## What is a content format?
//!
//! When a template produces source code, a value computed by the template has to be
//! written as a *literal* of the target language: a string must be quoted and escaped,
//! a boolean written as `true`/`false`, a missing value as `null`. A [`ContentFormat`]
//! is a named policy that does exactly that for one target grammar.
//!
//! ## Key Features
//!
//! - **Dual-safe default**: [`ContentFormat::JavaScriptOrJson`] produces literals that
//!   are valid JSON *and* valid JavaScript, so templates stay correct no matter where
//!   their output is embedded
//! - **One escaper**: every format shares [`encode`], parameterized by an
//!   [`EscapeGrammar`]; adding a format means adding an enum variant
//! - **Stable names**: formats are selected from configuration by name
//!   (`"JSON"`, `"JavaScript"`, `"JavaScript or JSON"`), see [`select`]
//! - **Serde bridge**: [`to_literal`] prints any scalar `T: Serialize`
//! - **Total**: escaping never fails; the only error is an unknown format name
//!
//! ## Quick Start
//!
//! ```rust
//! use cformat::{select, ContentFormat};
//!
//! let format = select(Some("JavaScript or JSON")).unwrap();
//! assert_eq!(format, ContentFormat::default());
//!
//! // The quote, backslash, newline and slash are all escaped
//! assert_eq!(format.format_string("a\"b\\c\nd/e"), r#""a\"b\\c\nd\/e""#);
//! assert_eq!(format.format_number(42), "42");
//! assert_eq!(format.format_bool(false), "false");
//! ```
//!
//! ### Picking a format
//!
//! ```rust
//! use cformat::ContentFormat;
//!
//! let raw = "</script>\u{2028}";
//!
//! // Pure JSON leaves both the slash and the line separator alone
//! assert_eq!(ContentFormat::Json.format_string(raw), "\"</script>\u{2028}\"");
//!
//! // JavaScript (and the combined default) escapes them
//! assert_eq!(
//!     ContentFormat::JavaScript.format_string(raw),
//!     ContentFormat::JavaScriptOrJson.format_string(raw),
//! );
//! ```
//!
//! ### Serde values
//!
//! ```rust
//! use cformat::{to_literal, ContentFormat};
//!
//! let format = ContentFormat::Json;
//! assert_eq!(to_literal("it's", format).unwrap(), "\"it's\"");
//! assert_eq!(to_literal(&Some(0.5), format).unwrap(), "0.5");
//! assert_eq!(to_literal(&None::<u8>, format).unwrap(), "null");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All types are immutable and `Send + Sync`; formatting takes no locks
//! - The format registry is built once and never mutated
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, registry construction and format selection emit
//! `debug` events. Escaping itself never logs.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Formatting scalars with each format
//! - **`config.rs`** - Selecting a format from a configuration file
//! - **`script_embedding.rs`** - Writing values into an inline `<script>` block
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod escape;
pub mod format;
pub mod options;
pub mod registry;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use escape::{
    encode, encode_utf16, encode_with_options, needs_escaping, quote, quote_with_options,
    write_encoded, EscapeGrammar, QuoteStyle,
};
pub use format::{ContentFormat, StringLiteral};
pub use options::{EscapeOptions, LoneSurrogate, SlashEscape};
pub use registry::{select, FormatConfig, FormatRegistry};
pub use ser::LiteralSerializer;
pub use value::{Number, Scalar};

use serde::Serialize;
use std::io;

#[cfg(feature = "tracing")]
pub(crate) use tracing::debug;

/// Forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use debug;

/// Print any scalar `T: Serialize` as a literal of `format`.
///
/// # Examples
///
/// ```rust
/// use cformat::{to_literal, ContentFormat};
///
/// assert_eq!(to_literal("a/b", ContentFormat::JavaScript).unwrap(), r#""a\/b""#);
/// assert_eq!(to_literal(&u64::MAX, ContentFormat::Json).unwrap(), "18446744073709551615");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not a scalar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_literal<T>(value: &T, format: ContentFormat) -> Result<String>
where
    T: ?Sized + Serialize,
{
    value.serialize(LiteralSerializer::new(format))
}

/// Print any scalar `T: Serialize` as a literal of `format` with explicit escape options.
///
/// # Examples
///
/// ```rust
/// use cformat::{to_literal_with_options, ContentFormat, EscapeOptions, SlashEscape};
///
/// let options = EscapeOptions::new().with_slash(SlashEscape::Never);
/// let literal = to_literal_with_options("a/b", ContentFormat::JavaScript, options).unwrap();
/// assert_eq!(literal, "\"a/b\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not a scalar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_literal_with_options<T>(
    value: &T,
    format: ContentFormat,
    options: EscapeOptions,
) -> Result<String>
where
    T: ?Sized + Serialize,
{
    value.serialize(LiteralSerializer::with_options(format, options))
}

/// Print any scalar `T: Serialize` as a literal of `format` into a writer.
///
/// # Examples
///
/// ```rust
/// use cformat::{write_literal, ContentFormat};
///
/// let mut buffer = Vec::new();
/// write_literal(&mut buffer, &true, ContentFormat::Json).unwrap();
/// assert_eq!(buffer, b"true");
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a scalar or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_literal<W, T>(mut writer: W, value: &T, format: ContentFormat) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let literal = to_literal(value, format)?;
    writer
        .write_all(literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
