//! Format selection by name.
//!
//! Configuration refers to content formats by their stable names. The
//! [`FormatRegistry`] maps those names to [`ContentFormat`] values; it is built once,
//! on first use, and never changes afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use cformat::{select, ContentFormat, FormatRegistry};
//!
//! // Nothing configured
//! assert_eq!(select(None).unwrap(), ContentFormat::JavaScriptOrJson);
//! assert_eq!(select(Some("JSON")).unwrap(), ContentFormat::Json);
//!
//! let names: Vec<_> = FormatRegistry::global().names().collect();
//! assert_eq!(names, ["JSON", "JavaScript", "JavaScript or JSON"]);
//!
//! let err = select(Some("YAML")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"unknown content format "YAML"; valid names are "JSON", "JavaScript", "JavaScript or JSON""#
//! );
//! ```

use crate::format::ContentFormat;
use crate::options::EscapeOptions;
use crate::{debug, Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static GLOBAL: OnceLock<FormatRegistry> = OnceLock::new();

/// Read-only mapping from format names to formats.
#[derive(Debug)]
pub struct FormatRegistry {
    formats: IndexMap<&'static str, ContentFormat>,
}

impl FormatRegistry {
    /// Returns the process-wide registry of built-in formats.
    pub fn global() -> &'static FormatRegistry {
        GLOBAL.get_or_init(FormatRegistry::builtin)
    }

    fn builtin() -> Self {
        let formats: IndexMap<_, _> = ContentFormat::ALL
            .iter()
            .map(|format| (format.name(), *format))
            .collect();
        debug!(count = formats.len(), "content format registry built");
        FormatRegistry { formats }
    }

    /// Looks up a format by exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] naming `name` and listing every registered name.
    pub fn get(&self, name: &str) -> Result<ContentFormat> {
        match self.formats.get(name) {
            Some(format) => Ok(*format),
            None => {
                debug!(name, "rejected unknown content format");
                let valid: Vec<_> = self.names().collect();
                Err(Error::unknown_format(name, &valid))
            }
        }
    }

    /// Returns `true` if a format is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Registered formats, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = ContentFormat> + '_ {
        self.formats.values().copied()
    }
}

/// Resolves an optional configured name to a format.
///
/// `None` selects the default, [`ContentFormat::JavaScriptOrJson`].
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] if `name` is not registered.
pub fn select(name: Option<&str>) -> Result<ContentFormat> {
    let format = match name {
        Some(name) => FormatRegistry::global().get(name)?,
        None => ContentFormat::default(),
    };
    debug!(format = format.name(), "content format selected");
    Ok(format)
}

/// Format settings as they appear in a rendering configuration.
///
/// Both fields are optional. Without `escape`, the format's own defaults apply; an
/// explicit `escape` table replaces them, with missing keys taking
/// [`EscapeOptions::default`].
///
/// # Examples
///
/// ```rust
/// use cformat::{ContentFormat, FormatConfig, SlashEscape};
///
/// let config: FormatConfig = serde_json::from_str(r#"{ "format": "JavaScript" }"#).unwrap();
/// assert_eq!(config.format, ContentFormat::JavaScript);
/// assert_eq!(config.options().slash, SlashEscape::Always);
///
/// let config: FormatConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.format, ContentFormat::JavaScriptOrJson);
///
/// let err = serde_json::from_str::<FormatConfig>(r#"{ "format": "YAML" }"#).unwrap_err();
/// assert!(err.to_string().contains(r#""YAML""#));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub format: ContentFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape: Option<EscapeOptions>,
}

impl FormatConfig {
    /// Creates a configuration for `format` with its default escape options.
    #[must_use]
    pub fn new(format: ContentFormat) -> Self {
        FormatConfig {
            format,
            escape: None,
        }
    }

    /// Overrides the escape options.
    #[must_use]
    pub fn with_escape(mut self, options: EscapeOptions) -> Self {
        self.escape = Some(options);
        self
    }

    /// Returns the escape options in effect.
    #[must_use]
    pub fn options(&self) -> EscapeOptions {
        self.escape
            .unwrap_or_else(|| EscapeOptions::for_grammar(self.format.grammar()))
    }

    /// Prints a string literal with the configured format and options.
    #[must_use]
    pub fn format_string(&self, s: &str) -> String {
        self.format.format_string_with(s, &self.options())
    }
}
