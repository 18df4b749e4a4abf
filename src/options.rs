//! Configuration options for string escaping.
//!
//! This module provides the knobs the escaper exposes beyond the grammar itself:
//!
//! - [`EscapeOptions`]: Main configuration struct
//! - [`SlashEscape`]: When `/` is written as `\/`
//! - [`LoneSurrogate`]: What happens to unpaired UTF-16 surrogates
//!
//! Every grammar has its own defaults, see [`EscapeOptions::for_grammar`].
//!
//! ## Examples
//!
//! ```rust
//! use cformat::{ContentFormat, EscapeOptions, SlashEscape};
//!
//! // Only break up `</`, leave other slashes alone
//! let options = EscapeOptions::new().with_slash(SlashEscape::AfterLessThan);
//! let literal = ContentFormat::JavaScript.format_string_with("a/b</script>", &options);
//! assert_eq!(literal, r#""a/b<\/script>""#);
//! ```

use crate::escape::EscapeGrammar;
use serde::{Deserialize, Serialize};

/// Policy for escaping the forward slash.
///
/// Both grammars accept `\/` as an escape of `/`, so every policy keeps the output
/// valid; they only differ in how much of a `</script>` guard they provide.
///
/// # Examples
///
/// ```rust
/// use cformat::{encode_with_options, EscapeGrammar, EscapeOptions, QuoteStyle, SlashEscape};
///
/// let encode = |slash| {
///     let options = EscapeOptions::new().with_slash(slash);
///     encode_with_options("1/2 </b>", EscapeGrammar::JavaScript, QuoteStyle::Double, &options)
/// };
/// assert_eq!(encode(SlashEscape::Always), r"1\/2 <\/b>");
/// assert_eq!(encode(SlashEscape::AfterLessThan), r"1/2 <\/b>");
/// assert_eq!(encode(SlashEscape::Never), "1/2 </b>");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashEscape {
    /// Escape every `/`.
    #[default]
    Always,
    /// Escape `/` only when it directly follows `<`.
    AfterLessThan,
    /// Never escape `/`.
    Never,
}

/// Policy for unpaired surrogate halves in UTF-16 input.
///
/// Only reachable through [`encode_utf16`](crate::encode_utf16); a Rust `str` cannot
/// contain lone surrogates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoneSurrogate {
    /// Write the code unit as a `\uXXXX` escape, preserving it for JavaScript consumers.
    #[default]
    Escape,
    /// Replace the code unit with U+FFFD REPLACEMENT CHARACTER.
    Replace,
}

/// Configuration options for string escaping.
///
/// # Examples
///
/// ```rust
/// use cformat::{EscapeGrammar, EscapeOptions, LoneSurrogate, SlashEscape};
///
/// // Defaults of the combined grammar
/// let options = EscapeOptions::for_grammar(EscapeGrammar::JavaScriptOrJson);
/// assert_eq!(options.slash, SlashEscape::Always);
///
/// // Custom configuration
/// let options = EscapeOptions::new()
///     .with_slash(SlashEscape::AfterLessThan)
///     .with_lone_surrogate(LoneSurrogate::Replace)
///     .with_html_comment_guard(true);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeOptions {
    pub slash: SlashEscape,
    pub lone_surrogate: LoneSurrogate,
    /// Escape the `<` of `<!` and the `>` of `-->` / `]]>`.
    pub html_comment_guard: bool,
    /// Escape U+007F..=U+009F.
    pub escape_c1_controls: bool,
}

impl EscapeOptions {
    /// Creates default options (escape all slashes, escape lone surrogates, no guards).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::{EscapeOptions, SlashEscape};
    ///
    /// let options = EscapeOptions::new();
    /// assert_eq!(options.slash, SlashEscape::Always);
    /// assert!(!options.html_comment_guard);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the options a grammar uses when none are given.
    ///
    /// Pure JSON leaves `/` alone; the JavaScript-compatible grammars escape it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::{EscapeGrammar, EscapeOptions, SlashEscape};
    ///
    /// assert_eq!(EscapeOptions::for_grammar(EscapeGrammar::Json).slash, SlashEscape::Never);
    /// assert_eq!(EscapeOptions::for_grammar(EscapeGrammar::JavaScript).slash, SlashEscape::Always);
    /// ```
    #[must_use]
    pub fn for_grammar(grammar: EscapeGrammar) -> Self {
        let slash = if grammar.is_javascript_compatible() {
            SlashEscape::Always
        } else {
            SlashEscape::Never
        };
        EscapeOptions {
            slash,
            ..Default::default()
        }
    }

    /// Sets the forward slash policy.
    #[must_use]
    pub fn with_slash(mut self, slash: SlashEscape) -> Self {
        self.slash = slash;
        self
    }

    /// Sets the unpaired surrogate policy.
    #[must_use]
    pub fn with_lone_surrogate(mut self, policy: LoneSurrogate) -> Self {
        self.lone_surrogate = policy;
        self
    }

    /// Enables or disables escaping of `<!`, `-->` and `]]>`.
    ///
    /// Useful when the literal ends up inside an HTML `<script>` block or a CDATA
    /// section, where those sequences would end the surrounding construct.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cformat::{ContentFormat, EscapeOptions};
    ///
    /// let options = EscapeOptions::new().with_html_comment_guard(true);
    /// let literal = ContentFormat::JavaScriptOrJson.format_string_with("<!-- x -->", &options);
    /// assert_eq!(literal, r#""\u003C!-- x --\u003E""#);
    /// ```
    #[must_use]
    pub fn with_html_comment_guard(mut self, enabled: bool) -> Self {
        self.html_comment_guard = enabled;
        self
    }

    /// Enables or disables escaping of the DEL and C1 control characters.
    #[must_use]
    pub fn with_c1_controls(mut self, enabled: bool) -> Self {
        self.escape_c1_controls = enabled;
        self
    }
}
