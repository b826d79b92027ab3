use jsemit::ast::BuildError;
use jsemit::quote::{
    QuoteChar, best_quote_char, find_best_quote_char, format_number, quote, quote_string,
};

#[test]
fn test_quote_string_escapes_angle_brackets() {
    assert_eq!(quote_string("<html>"), r"'\u003chtml\u003e'");
    assert_eq!(quote("</script>", QuoteChar::Double), r#""\u003c/script\u003e""#);
}

#[test]
fn test_common_escapes() {
    assert_eq!(quote("a\\b", QuoteChar::Single), r"'a\\b'");
    assert_eq!(quote("line\nnext\r\ttab", QuoteChar::Single), r"'line\nnext\r\ttab'");
}

#[test]
fn test_control_characters_escaped_with_either_quote() {
    for quote_char in [QuoteChar::Single, QuoteChar::Double] {
        let quoted = quote("\u{1}<", quote_char);
        assert!(quoted.contains(r"\u0001"));
        assert!(quoted.contains(r"\u003c"));
    }
}

#[test]
fn test_non_ascii_passes_through() {
    assert_eq!(quote("caf\u{e9} \u{1f600}", QuoteChar::Double), "\"caf\u{e9} \u{1f600}\"");
}

#[test]
fn test_best_quote_char_prefers_less_frequent() {
    assert_eq!(find_best_quote_char("it's"), QuoteChar::Double);
    assert_eq!(find_best_quote_char(r#"say "hi""#), QuoteChar::Single);
    assert_eq!(find_best_quote_char(r#"'a' "b" 'c'"#), QuoteChar::Double);
}

#[test]
fn test_best_quote_char_tie() {
    assert_eq!(find_best_quote_char("plain"), QuoteChar::Double);
    assert_eq!(find_best_quote_char(r#"'""'"#), QuoteChar::Double);
    assert_eq!(best_quote_char("plain", QuoteChar::Single), QuoteChar::Single);
}

#[test]
fn test_quote_char_from_char() {
    assert_eq!(QuoteChar::try_from('\''), Ok(QuoteChar::Single));
    assert_eq!(QuoteChar::try_from('"'), Ok(QuoteChar::Double));
    assert_eq!(QuoteChar::try_from('`'), Err(BuildError::InvalidQuoteChar('`')));
}

#[test]
fn test_format_number_is_locale_invariant() {
    assert_eq!(format_number(1234.5), "1234.5");
    assert_eq!(format_number(-0.001), "-0.001");
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(f64::NAN), "NaN");
}
