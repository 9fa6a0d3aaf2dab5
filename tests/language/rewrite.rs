//! Eval rewriting.

use mooring_foundation::EntityId;
use mooring_language::{eval_label, rewrite_eval};
use proptest::prelude::*;

const WIZARD: EntityId = EntityId::new(2);

#[test]
fn label_names_player() {
    assert_eq!(eval_label(WIZARD), "Eval::#2");
}

#[test]
fn expression_is_returned() {
    assert_eq!(
        rewrite_eval("player.name", WIZARD),
        "(function (player) {\n  return (player.name);\n})(#2)"
    );
}

#[test]
fn statements_then_expression() {
    assert_eq!(
        rewrite_eval("let n = player.name; const m = n; m.length", WIZARD),
        "(function (player) {\n  let n = player.name;\n  const m = n;\n  return (m.length);\n})(#2)"
    );
}

#[test]
fn trailing_semicolon_ignored() {
    assert_eq!(
        rewrite_eval("1;", WIZARD),
        rewrite_eval("1", WIZARD)
    );
}

#[test]
fn keyword_statement_is_not_returned() {
    for source in ["return 1", "throw new Error('x')", "for (;;) {}", "let x = 1"] {
        let code = rewrite_eval(source, WIZARD);
        assert!(!code.contains("return ("), "{source:?} -> {code}");
    }
}

#[test]
fn block_is_not_returned() {
    let code = rewrite_eval("{ a: 1 }", WIZARD);
    assert_eq!(code, "(function (player) {\n  { a: 1 };\n})(#2)");
}

#[test]
fn identifier_starting_with_keyword_is_an_expression() {
    let code = rewrite_eval("letters", WIZARD);
    assert!(code.contains("return (letters);"));
}

#[test]
fn for_loop_header_semicolons_do_not_split() {
    let code = rewrite_eval("for (let i = 0; i < 3; i++) { f(i); }; done", WIZARD);
    assert_eq!(
        code,
        "(function (player) {\n  for (let i = 0; i < 3; i++) { f(i); };\n  return (done);\n})(#2)"
    );
}

#[test]
fn template_literals_do_not_split() {
    let code = rewrite_eval("`a;${b}`", WIZARD);
    assert!(code.contains("return (`a;${b}`);"));
}

proptest! {
    #[test]
    fn always_wrapped(source in any::<String>()) {
        let code = rewrite_eval(&source, WIZARD);
        prop_assert!(code.starts_with("(function (player) {\n"), "{}", code);
        prop_assert!(code.ends_with("})(#2)"), "{}", code);
    }
}
