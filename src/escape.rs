//! String literal escaping for JSON and JavaScript.
//!
//! This module holds the single escaping routine every [`ContentFormat`](crate::ContentFormat)
//! delegates to. The routine is parameterized by an [`EscapeGrammar`], so formats differ
//! only in the data they pass in.
//!
//! ## Rules
//!
//! Characters are examined one at a time, first matching rule wins:
//!
//! | Input | Output | Grammars |
//! |-------|--------|----------|
//! | active quote, `\` | `\"` / `\'`, `\\` | all |
//! | U+0008, U+000C, `\n`, `\r`, `\t` | `\b`, `\f`, `\n`, `\r`, `\t` | all |
//! | `/` | `\/` | per [`SlashEscape`] |
//! | other U+0000..=U+001F | `\u00XX` | all |
//! | U+2028, U+2029 | `\u2028`, `\u2029` | JavaScript-compatible |
//! | `<!`, `-->`, `]]>` | `\u003C`, `\u003E` | with `html_comment_guard` |
//! | U+007F..=U+009F | `\u00XX` | with `escape_c1_controls` |
//!
//! Everything else is copied through. Numeric escapes always use four uppercase hex
//! digits; no `\x` or `\0` short forms are written, so every escape is valid in both
//! grammars.
//!
//! ## Examples
//!
//! ```rust
//! use cformat::{encode, quote, EscapeGrammar, QuoteStyle};
//!
//! let raw = "a\"b\\c\nd/e";
//! assert_eq!(encode(raw, EscapeGrammar::Json, QuoteStyle::Double), r#"a\"b\\c\nd/e"#);
//! assert_eq!(
//!     quote(raw, EscapeGrammar::JavaScriptOrJson, QuoteStyle::Double),
//!     r#""a\"b\\c\nd\/e""#
//! );
//! ```

use crate::options::{EscapeOptions, LoneSurrogate, SlashEscape};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::iter::Peekable;
use std::str::CharIndices;

/// The string literal grammar escaped output must satisfy.
///
/// [`JavaScriptOrJson`](EscapeGrammar::JavaScriptOrJson) is the intersection of the
/// other two: wherever JSON and JavaScript disagree about a character, it takes the
/// stricter rule, so its output is a valid literal in both languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EscapeGrammar {
    JavaScript,
    Json,
    JavaScriptOrJson,
}

impl EscapeGrammar {
    /// Returns `true` if output must be a valid JSON string.
    #[inline]
    #[must_use]
    pub const fn is_json_compatible(self) -> bool {
        matches!(self, EscapeGrammar::Json | EscapeGrammar::JavaScriptOrJson)
    }

    /// Returns `true` if output must be a valid JavaScript string literal.
    #[inline]
    #[must_use]
    pub const fn is_javascript_compatible(self) -> bool {
        matches!(
            self,
            EscapeGrammar::JavaScript | EscapeGrammar::JavaScriptOrJson
        )
    }
}

/// The delimiter wrapped around an escaped string.
///
/// JSON only knows double quotes, so [`Single`](QuoteStyle::Single) falls back to
/// [`Double`](QuoteStyle::Double) for every JSON-compatible grammar.
///
/// # Examples
///
/// ```rust
/// use cformat::{quote, EscapeGrammar, QuoteStyle};
///
/// assert_eq!(quote("it's", EscapeGrammar::JavaScript, QuoteStyle::Single), r"'it\'s'");
/// assert_eq!(quote("it's", EscapeGrammar::Json, QuoteStyle::Single), "\"it's\"");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }

    /// Returns the style actually used for `grammar`.
    #[must_use]
    pub const fn resolve(self, grammar: EscapeGrammar) -> Self {
        if grammar.is_json_compatible() {
            QuoteStyle::Double
        } else {
            self
        }
    }
}

/// Escapes `raw` for `grammar` using the grammar's default options.
///
/// The result does not include the surrounding quotes; see [`quote`] for that.
///
/// # Examples
///
/// ```rust
/// use cformat::{encode, EscapeGrammar, QuoteStyle};
///
/// assert_eq!(encode("tab\there", EscapeGrammar::Json, QuoteStyle::Double), r"tab\there");
/// assert_eq!(encode("\u{2028}", EscapeGrammar::JavaScript, QuoteStyle::Double), r"\u2028");
/// assert_eq!(encode("\u{2028}", EscapeGrammar::Json, QuoteStyle::Double), "\u{2028}");
/// ```
#[must_use]
pub fn encode(raw: &str, grammar: EscapeGrammar, style: QuoteStyle) -> String {
    encode_with_options(raw, grammar, style, &EscapeOptions::for_grammar(grammar))
}

/// Escapes `raw` for `grammar` with explicit options.
#[must_use]
pub fn encode_with_options(
    raw: &str,
    grammar: EscapeGrammar,
    style: QuoteStyle,
    options: &EscapeOptions,
) -> String {
    let mut out = String::with_capacity(raw.len());
    // Writing into a String cannot fail.
    let _ = write_encoded(&mut out, raw, grammar, style, options);
    out
}

/// Escapes `raw` and wraps it in the quote character.
///
/// # Examples
///
/// ```rust
/// use cformat::{quote, EscapeGrammar, QuoteStyle};
///
/// assert_eq!(quote("", EscapeGrammar::Json, QuoteStyle::Double), "\"\"");
/// assert_eq!(quote("a/b", EscapeGrammar::JavaScript, QuoteStyle::Double), r#""a\/b""#);
/// ```
#[must_use]
pub fn quote(raw: &str, grammar: EscapeGrammar, style: QuoteStyle) -> String {
    quote_with_options(raw, grammar, style, &EscapeOptions::for_grammar(grammar))
}

/// Escapes `raw` with explicit options and wraps it in the quote character.
#[must_use]
pub fn quote_with_options(
    raw: &str,
    grammar: EscapeGrammar,
    style: QuoteStyle,
    options: &EscapeOptions,
) -> String {
    let delimiter = style.resolve(grammar).as_char();
    let mut out = String::with_capacity(raw.len() + 2);
    out.push(delimiter);
    let _ = write_encoded(&mut out, raw, grammar, style, options);
    out.push(delimiter);
    out
}

/// Writes the escaped form of `raw` into `dest`, without quotes.
///
/// Runs of characters that need no escaping are written as whole slices.
///
/// # Errors
///
/// Only propagates errors from `dest`.
pub fn write_encoded<W: Write>(
    mut dest: W,
    raw: &str,
    grammar: EscapeGrammar,
    style: QuoteStyle,
    options: &EscapeOptions,
) -> fmt::Result {
    let mut clean_start = 0;
    for (index, ch, escape) in Escapes::new(raw, Rules::new(grammar, style, options)) {
        dest.write_str(&raw[clean_start..index])?;
        escape.write_to(&mut dest)?;
        clean_start = index + ch.len_utf8();
    }
    dest.write_str(&raw[clean_start..])
}

/// Returns `true` if [`encode`] with [`QuoteStyle::Double`] would change `raw`.
///
/// Content formats always quote with double quotes. A single quote inside `raw` is
/// not reported, even though [`QuoteStyle::Single`] would escape it.
///
/// # Examples
///
/// ```rust
/// use cformat::{needs_escaping, EscapeGrammar};
///
/// assert!(!needs_escaping("plain text", EscapeGrammar::JavaScriptOrJson));
/// assert!(needs_escaping("a/b", EscapeGrammar::JavaScriptOrJson));
/// assert!(!needs_escaping("a/b", EscapeGrammar::Json));
/// assert!(!needs_escaping("it's", EscapeGrammar::JavaScript));
/// ```
#[must_use]
pub fn needs_escaping(raw: &str, grammar: EscapeGrammar) -> bool {
    let options = EscapeOptions::for_grammar(grammar);
    Escapes::new(raw, Rules::new(grammar, QuoteStyle::Double, &options))
        .next()
        .is_some()
}

/// Escapes UTF-16 text that may contain unpaired surrogates.
///
/// Well-formed surrogate pairs are decoded and treated like any other character.
/// Unpaired halves are handled according to [`EscapeOptions::lone_surrogate`].
///
/// # Examples
///
/// ```rust
/// use cformat::{encode_utf16, EscapeGrammar, EscapeOptions, LoneSurrogate, QuoteStyle};
///
/// let units = [0x0061, 0xD800, 0x0062];
/// let grammar = EscapeGrammar::JavaScriptOrJson;
///
/// let options = EscapeOptions::for_grammar(grammar);
/// assert_eq!(encode_utf16(&units, grammar, QuoteStyle::Double, &options), r"a\uD800b");
///
/// let options = options.with_lone_surrogate(LoneSurrogate::Replace);
/// assert_eq!(encode_utf16(&units, grammar, QuoteStyle::Double, &options), "a\u{FFFD}b");
/// ```
#[must_use]
pub fn encode_utf16(
    units: &[u16],
    grammar: EscapeGrammar,
    style: QuoteStyle,
    options: &EscapeOptions,
) -> String {
    let rules = Rules::new(grammar, style, options);
    let replace = options.lone_surrogate == LoneSurrogate::Replace;

    let mut decoded = char::decode_utf16(units.iter().copied())
        .map(|unit| match unit {
            Ok(ch) => Unit::Char(ch),
            Err(_) if replace => Unit::Char(char::REPLACEMENT_CHARACTER),
            Err(err) => Unit::Lone(err.unpaired_surrogate()),
        })
        .peekable();

    let mut out = String::with_capacity(units.len());
    let mut prev = (None, None);
    while let Some(unit) = decoded.next() {
        match unit {
            Unit::Char(ch) => {
                let next = match decoded.peek() {
                    Some(Unit::Char(next)) => Some(*next),
                    _ => None,
                };
                match rules.classify(ch, prev, next) {
                    Some(escape) => {
                        let _ = escape.write_to(&mut out);
                    }
                    None => out.push(ch),
                }
                prev = (prev.1, Some(ch));
            }
            Unit::Lone(code_unit) => {
                let _ = Escape::Unicode(code_unit).write_to(&mut out);
                prev = (prev.1, None);
            }
        }
    }
    out
}

enum Unit {
    Char(char),
    Lone(u16),
}

/// How a single character is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Escape {
    /// A backslash followed by this character.
    Backslash(char),
    /// `\uXXXX`
    Unicode(u16),
}

impl Escape {
    fn write_to<W: Write>(self, dest: &mut W) -> fmt::Result {
        match self {
            Escape::Backslash(ch) => {
                dest.write_char('\\')?;
                dest.write_char(ch)
            }
            Escape::Unicode(code_unit) => write!(dest, "\\u{:04X}", code_unit),
        }
    }
}

/// Grammar and options flattened into the decisions `classify` needs.
#[derive(Clone, Copy, Debug)]
struct Rules {
    quote: char,
    slash: SlashEscape,
    line_separators: bool,
    html_comment_guard: bool,
    c1_controls: bool,
}

impl Rules {
    fn new(grammar: EscapeGrammar, style: QuoteStyle, options: &EscapeOptions) -> Self {
        Rules {
            quote: style.resolve(grammar).as_char(),
            slash: options.slash,
            line_separators: grammar.is_javascript_compatible(),
            html_comment_guard: options.html_comment_guard,
            c1_controls: options.escape_c1_controls,
        }
    }

    /// `prev` holds the two characters before `ch`, oldest first.
    #[inline]
    fn classify(
        &self,
        ch: char,
        prev: (Option<char>, Option<char>),
        next: Option<char>,
    ) -> Option<Escape> {
        let escape = match ch {
            '\\' => Escape::Backslash('\\'),
            '"' | '\'' if ch == self.quote => Escape::Backslash(ch),
            '\u{08}' => Escape::Backslash('b'),
            '\u{0C}' => Escape::Backslash('f'),
            '\n' => Escape::Backslash('n'),
            '\r' => Escape::Backslash('r'),
            '\t' => Escape::Backslash('t'),
            '\u{00}'..='\u{1F}' => Escape::Unicode(ch as u16),
            '/' => match self.slash {
                SlashEscape::Always => Escape::Backslash('/'),
                SlashEscape::AfterLessThan if prev.1 == Some('<') => Escape::Backslash('/'),
                _ => return None,
            },
            '\u{2028}' | '\u{2029}' if self.line_separators => Escape::Unicode(ch as u16),
            '<' if self.html_comment_guard && next == Some('!') => Escape::Unicode(ch as u16),
            '>' if self.html_comment_guard
                && matches!(prev, (Some('-'), Some('-')) | (Some(']'), Some(']'))) =>
            {
                Escape::Unicode(ch as u16)
            }
            '\u{7F}'..='\u{9F}' if self.c1_controls => Escape::Unicode(ch as u16),
            _ => return None,
        };
        Some(escape)
    }
}

/// Iterator over the characters of a `str` that need escaping.
struct Escapes<'a> {
    chars: Peekable<CharIndices<'a>>,
    prev: (Option<char>, Option<char>),
    rules: Rules,
}

impl<'a> Escapes<'a> {
    fn new(raw: &'a str, rules: Rules) -> Self {
        Escapes {
            chars: raw.char_indices().peekable(),
            prev: (None, None),
            rules,
        }
    }
}

impl Iterator for Escapes<'_> {
    type Item = (usize, char, Escape);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, ch)) = self.chars.next() {
            let next = self.chars.peek().map(|&(_, next)| next);
            let escape = self.rules.classify(ch, self.prev, next);
            self.prev = (self.prev.1, Some(ch));
            if let Some(escape) = escape {
                return Some((index, ch, escape));
            }
        }
        None
    }
}
