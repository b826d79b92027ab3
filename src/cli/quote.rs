//! Quote text as a JavaScript string literal

use crate::quote::{QuoteChar, find_best_quote_char, quote};

/// How the quote character is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Whichever quote occurs less often in the text
    #[default]
    Auto,
    /// Always this character
    Fixed(QuoteChar),
}

/// Options for the quote command
#[derive(Debug, Clone, Default)]
pub struct QuoteOptions {
    /// Text to quote
    pub text: String,
    /// Quote character selection
    pub mode: QuoteMode,
}

/// Execute a quote operation
pub fn execute_quote(options: &QuoteOptions) -> String {
    let quote_char = match options.mode {
        QuoteMode::Auto => find_best_quote_char(&options.text),
        QuoteMode::Fixed(quote_char) => quote_char,
    };
    quote(&options.text, quote_char)
}
