//! String literal encoding.

use mooring_language::escape;
use mooring_language::literal::{decode, literal_len};
use proptest::prelude::*;

#[test]
fn plain_text_is_quoted() {
    assert_eq!(escape("look lamp"), r#""look lamp""#);
    assert_eq!(escape(""), r#""""#);
}

#[test]
fn quotes_and_backslashes() {
    assert_eq!(escape(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
}

#[test]
fn control_characters() {
    assert_eq!(escape("a\nb\tc\r"), r#""a\nb\tc\r""#);
    assert_eq!(escape("\u{7}"), r#""\u0007""#);
}

#[test]
fn non_ascii_is_kept() {
    assert_eq!(escape("café ☕"), "\"café ☕\"");
}

#[test]
fn escaped_text_is_valid_json() {
    let text = "line\none \"two\" \\ \u{1b}[0m";
    let json: String = serde_json::from_str(&escape(text)).unwrap();
    assert_eq!(json, text);
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode("not quoted").is_err());
    assert!(decode(r#""unterminated"#).is_err());
}

#[test]
fn literal_len_finds_the_closing_quote() {
    let text = r#""a \"b\"", rest"#;
    assert_eq!(literal_len(text), Some(9));
    assert_eq!(literal_len("no literal"), None);
    assert_eq!(literal_len(r#""open"#), None);
}

proptest! {
    #[test]
    fn decode_recovers_escaped_text(text in any::<String>()) {
        prop_assert_eq!(decode(&escape(&text)).unwrap(), text);
    }

    #[test]
    fn literal_len_spans_whole_escape(text in any::<String>()) {
        let literal = escape(&text);
        prop_assert_eq!(literal_len(&literal), Some(literal.len()));
    }
}
