//! Routing of parsed commands: eval, quit, resolution, and fallback.

use mooring_foundation::{EntityId, Value};
use mooring_language::{VerbCall, eval_label, rewrite_eval};
use mooring_parser::{ResolutionResult, VerbBinding, parse};

use crate::support::{Harness, PLAYER, ROOM};

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn unmatched_command_is_not_understood_once() {
    let mut h = Harness::new(false);
    h.input("dance");
    assert_eq!(h.outputs(), vec!["I didn't understand that.".to_string()]);
    assert!(h.world.runs().is_empty());
}

#[test]
fn not_understood_is_muted_when_colored() {
    let mut h = Harness::colored(false);
    h.input("dance");
    assert_eq!(h.outputs(), vec!["\x1b[90mI didn't understand that.\x1b[0m".to_string()]);
}

#[test]
fn matched_verb_is_invoked() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(EntityId::new(12), "look"));
    h.input("look");

    let runs = h.world.runs();
    assert_eq!(runs.len(), 1);
    let (code, label) = &runs[0];
    assert_eq!(
        code,
        r#"#12["look"](#7, void 0, void 0, "look", "", "", "", "")"#
    );
    assert_eq!(label, "Verb::#12.look");
    assert!(h.outputs().is_empty());
}

#[test]
fn verb_return_value_is_discarded() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(ROOM, "look"));
    h.world.return_value(Value::from("ignored"));
    h.input("look");
    assert!(h.outputs().is_empty());
}

#[test]
fn argument_order_with_absent_dobj() {
    let mut h = Harness::new(false);
    h.world.set_objects(ResolutionResult::none().with_iobj(EntityId::new(42)));
    h.world.set_verb(VerbBinding::matched(ROOM, "look"));
    h.input("look at #42");

    let (code, _) = &h.world.runs()[0];
    let call = VerbCall::decode(code).unwrap();
    let args = call.arguments();
    assert_eq!(&args[..3], &["#7", "void 0", "#42"]);
    assert_eq!(call.command, parse("look at #42"));
}

#[test]
fn command_strings_survive_generation() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(ROOM, "say"));
    let input = r#"say she said "hi" \ then left"#;
    h.input(input);

    let (code, _) = &h.world.runs()[0];
    assert_eq!(VerbCall::decode(code).unwrap().command, parse(input));
}

#[test]
fn empty_input_does_not_crash() {
    let mut h = Harness::new(false);
    h.input("");
    h.input("   ");
    assert_eq!(h.world.matched_commands()[0].verb, "");
    assert_eq!(h.outputs().len(), 2);
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn fallback_when_location_handles_missing_verbs() {
    let mut h = Harness::with_verb_missing(false);
    h.input("xyzzy now");

    let runs = h.world.runs();
    assert_eq!(runs.len(), 1);
    let (code, label) = &runs[0];
    assert!(code.starts_with(r#"#1["verbMissing"](#7, void 0, void 0, "xyzzy", "now""#));
    assert_eq!(label, "Verb::#1.verbMissing");
    assert!(h.outputs().is_empty());
}

#[test]
fn matched_verb_wins_over_fallback() {
    let mut h = Harness::with_verb_missing(false);
    h.world.set_verb(VerbBinding::matched(PLAYER, "wave"));
    h.input("wave");
    assert_eq!(h.world.labels(), vec!["Verb::#7.wave".to_string()]);
}

#[test]
fn no_fallback_without_location() {
    let mut h = Harness::with_verb_missing(false);
    h.world.put(mooring_foundation::Entity::new(PLAYER));
    h.input("xyzzy");
    assert!(h.world.runs().is_empty());
    assert_eq!(h.outputs(), vec!["I didn't understand that.".to_string()]);
}

#[test]
fn missing_location_entity_is_contained() {
    let mut h = Harness::with_verb_missing(false);
    h.world.forget(ROOM);
    h.input("xyzzy");
    assert_eq!(h.outputs(), vec!["An internal error occurred.".to_string()]);
    assert!(h.world.runs().is_empty());
}

// =============================================================================
// Eval
// =============================================================================

#[test]
fn programmer_eval_runs_rewritten_code() {
    let mut h = Harness::new(true);
    h.world.return_value(Value::Int(2));
    h.input("eval 1 + 1");

    let runs = h.world.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].0, rewrite_eval("1 + 1", PLAYER));
    assert_eq!(runs[0].1, eval_label(PLAYER));
    assert_eq!(runs[0].1, "Eval::#7");
    assert_eq!(h.outputs(), vec!["2".to_string()]);
    assert!(h.world.matched_commands().is_empty());
}

#[test]
fn eval_shortcut() {
    let mut h = Harness::new(true);
    h.input(";player");
    assert_eq!(h.world.labels(), vec!["Eval::#7".to_string()]);
    assert_eq!(h.outputs(), vec!["nil".to_string()]);
}

#[test]
fn eval_result_uses_display_depth() {
    let mut h = Harness::new(true);
    let inner: Value = vec![1].into_iter().collect();
    let middle: Value = vec![inner].into_iter().collect();
    let nested: Value = vec![Value::from("a"), middle].into_iter().collect();
    h.world.return_value(nested);
    h.input("eval x");
    assert_eq!(h.outputs(), vec![r#"["a", [[List]]]"#.to_string()]);
}

#[test]
fn non_programmer_eval_falls_through_to_resolution() {
    let mut h = Harness::new(false);
    h.input("eval 1 + 1");
    assert!(h.world.runs().is_empty());
    assert_eq!(h.world.matched_commands()[0].verb, "eval");
    assert_eq!(h.outputs(), vec!["I didn't understand that.".to_string()]);
}

#[test]
fn non_programmer_eval_can_reach_a_real_verb() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(ROOM, "eval"));
    h.input("eval 1 + 1");
    assert_eq!(h.world.labels(), vec!["Verb::#1.eval".to_string()]);
}
