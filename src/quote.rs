//! String quoting and number formatting for JavaScript literals.
//!
//! String literals are wrapped in one of the two quote characters and
//! escaped so that the result is safe both as JavaScript source and when
//! embedded inside an HTML `<script>` element:
//!
//! - the chosen quote character and the backslash
//! - `\n`, `\r`, `\t`, `\b`, `\f`
//! - `<` and `>`, which would otherwise let `</script>` close the element
//! - every other control character and the line/paragraph separators, as
//!   `\uXXXX`
//!
//! # Examples
//!
//! ```
//! use jsemit::quote::{find_best_quote_char, quote, quote_string, QuoteChar};
//!
//! assert_eq!(quote_string("<html>"), r"'\u003chtml\u003e'");
//! assert_eq!(quote("it's", QuoteChar::Double), r#""it's""#);
//! assert_eq!(find_best_quote_char(r#"say "hi""#), QuoteChar::Single);
//! ```

use std::fmt::Write;

use crate::ast::BuildError;

/// One of the two characters that may delimit a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteChar {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl QuoteChar {
    pub fn as_char(self) -> char {
        match self {
            QuoteChar::Single => '\'',
            QuoteChar::Double => '"',
        }
    }
}

impl TryFrom<char> for QuoteChar {
    type Error = BuildError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '\'' => Ok(QuoteChar::Single),
            '"' => Ok(QuoteChar::Double),
            other => Err(BuildError::InvalidQuoteChar(other)),
        }
    }
}

/// Quotes `text` with `quote_char`, escaping as described in the module docs.
pub fn quote(text: &str, quote_char: QuoteChar) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    quote_into(&mut out, text, quote_char);
    out
}

/// Quotes `text` with single quotes.
pub fn quote_string(text: &str) -> String {
    quote(text, QuoteChar::Single)
}

/// Appends the quoted form of `text` to `out`.
pub fn quote_into(out: &mut String, text: &str, quote_char: QuoteChar) {
    let delimiter = quote_char.as_char();
    out.push(delimiter);
    for c in text.chars() {
        match c {
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '<' | '>' | '\u{2028}' | '\u{2029}' => push_unicode_escape(out, c),
            c if c.is_control() => push_unicode_escape(out, c),
            c => out.push(c),
        }
    }
    out.push(delimiter);
}

fn push_unicode_escape(out: &mut String, c: char) {
    // Writing to a String cannot fail
    let _ = write!(out, "\\u{:04x}", c as u32);
}

/// Picks the quote character occurring less often in `text`, so fewer
/// characters need escaping. Ties go to double quotes.
pub fn find_best_quote_char(text: &str) -> QuoteChar {
    best_quote_char(text, QuoteChar::Double)
}

/// Like [`find_best_quote_char`], with ties going to `preferred`.
pub fn best_quote_char(text: &str, preferred: QuoteChar) -> QuoteChar {
    let (single, double) = text.chars().fold((0usize, 0usize), |(s, d), c| match c {
        '\'' => (s + 1, d),
        '"' => (s, d + 1),
        _ => (s, d),
    });

    if single < double {
        QuoteChar::Single
    } else if double < single {
        QuoteChar::Double
    } else {
        preferred
    }
}

/// Formats a number as a JavaScript numeric literal.
///
/// Output never depends on the process locale: the decimal separator is
/// always `.`. Very large and very small magnitudes use exponent notation;
/// non-finite values use the global names `NaN` and `Infinity`.
///
/// # Examples
///
/// ```
/// use jsemit::quote::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(1e21), "1e21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}
