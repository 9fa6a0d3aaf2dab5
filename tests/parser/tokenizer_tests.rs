//! Tokenizer integration tests.

use mooring_parser::tokenizer::InputTokenizer;

#[test]
fn splits_on_whitespace() {
    assert_eq!(
        InputTokenizer::words("  take\tthe   lamp "),
        vec!["take", "the", "lamp"]
    );
}

#[test]
fn quotes_group_words() {
    assert_eq!(
        InputTokenizer::words(r#"name lamp "old brass lamp""#),
        vec!["name", "lamp", "old brass lamp"]
    );
}

#[test]
fn quotes_can_join_mid_word() {
    assert_eq!(InputTokenizer::words(r#"ab"c d"e"#), vec!["abc de"]);
}

#[test]
fn unterminated_quote_runs_to_end() {
    assert_eq!(
        InputTokenizer::words(r#"say "hello there"#),
        vec!["say", "hello there"]
    );
}

#[test]
fn trailing_backslash_is_dropped() {
    assert_eq!(InputTokenizer::words(r"look\"), vec!["look"]);
}

#[test]
fn empty_quotes_make_an_empty_word() {
    assert_eq!(InputTokenizer::words(r#""" x"#), vec!["", "x"]);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize("   ").is_empty());
}

#[test]
fn spans_cover_quotes() {
    let input = r#"say "a b" c"#;
    let tokens = InputTokenizer::tokenize(input);
    assert_eq!(&input[tokens[1].start..tokens[1].end], r#""a b""#);
    assert_eq!(tokens[2].end, input.len());
}

#[test]
fn spans_respect_multibyte_text() {
    let input = "poke café now";
    let tokens = InputTokenizer::tokenize(input);
    assert_eq!(tokens[1].text, "café");
    assert_eq!(&input[tokens[2].start..tokens[2].end], "now");
}
