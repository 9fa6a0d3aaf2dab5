//! The failure boundary: privilege-gated disclosure, styling, containment.

use mooring_foundation::EntityId;
use mooring_parser::VerbBinding;
use mooring_runtime::INTERNAL_ERROR_NOTICE;
use proptest::prelude::*;

use crate::support::{Harness, HookReply, PLAYER, ROOM};

#[test]
fn notice_text_is_exact() {
    assert_eq!(INTERNAL_ERROR_NOTICE, "An internal error occurred.");
}

#[test]
fn verb_failure_hidden_from_non_programmer() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(ROOM, "look"));
    h.world.fail_runs("secret internals at /srv/world.js");
    h.input("look");
    assert_eq!(h.outputs(), vec!["An internal error occurred.".to_string()]);
}

#[test]
fn verb_failure_shown_to_programmer() {
    let mut h = Harness::new(true);
    h.world.set_verb(VerbBinding::matched(ROOM, "look"));
    h.world.fail_runs("lamp is undefined");
    h.input("look");

    let outputs = h.outputs();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].contains("lamp is undefined"));
    assert!(outputs[0].contains("Verb::#1.look"));
    assert!(outputs[0].contains(":1:1"));
}

#[test]
fn matching_failure_hidden_from_non_programmer() {
    let mut h = Harness::new(false);
    h.world.fail_matching("inconsistent contents of #1");
    h.input("get lamp");
    assert_eq!(h.outputs(), vec!["An internal error occurred.".to_string()]);
    assert!(h.world.runs().is_empty());
}

#[test]
fn matching_failure_shown_to_programmer() {
    let mut h = Harness::new(true);
    h.world.fail_matching("inconsistent contents of #1");
    h.input("get lamp");
    assert!(h.outputs()[0].contains("inconsistent contents of #1"));
}

#[test]
fn eval_failure_always_shows_detail() {
    let mut h = Harness::new(true);
    h.world.fail_runs("SyntaxError: unexpected token");
    h.input(";1 +");
    let outputs = h.outputs();
    assert!(outputs[0].contains("SyntaxError: unexpected token"));
    assert!(outputs[0].contains("Eval::#7"));
}

#[test]
fn errors_are_styled_when_colored() {
    let mut h = Harness::colored(false);
    h.world.set_verb(VerbBinding::matched(ROOM, "look"));
    h.world.fail_runs("boom");
    h.input("look");
    assert_eq!(
        h.outputs(),
        vec!["\x1b[41mAn internal error occurred.\x1b[0m".to_string()]
    );
}

#[test]
fn missing_player_is_contained() {
    let mut h = Harness::new(true);
    h.world.forget(PLAYER);
    h.input("look");
    // Privilege cannot be known without the entity.
    assert_eq!(h.outputs(), vec!["An internal error occurred.".to_string()]);
    assert!(h.world.matched_commands().is_empty());
}

#[test]
fn preprocess_failure_is_contained() {
    let mut h = Harness::new(false);
    h.world.set_hook("preprocessCommand", HookReply::Fails("hook exploded".into()));
    h.input("look");
    assert_eq!(h.outputs(), vec!["An internal error occurred.".to_string()]);
    assert!(h.world.matched_commands().is_empty());
}

#[test]
fn session_keeps_working_after_a_failure() {
    let mut h = Harness::new(false);
    h.world.set_verb(VerbBinding::matched(EntityId::new(3), "look"));
    h.world.fail_runs("first");
    h.input("look");
    *h.world.run_result.lock().unwrap() = None;
    h.input("look");
    assert_eq!(h.world.runs().len(), 2);
    assert_eq!(h.outputs().len(), 1);
    assert!(!h.session.is_retired());
}

proptest! {
    #[test]
    fn non_programmer_always_sees_notice(message in ".*") {
        let mut h = Harness::new(false);
        h.world.set_verb(VerbBinding::matched(ROOM, "look"));
        h.world.fail_runs(&message);
        h.input("look");
        prop_assert_eq!(h.outputs(), vec![INTERNAL_ERROR_NOTICE.to_string()]);
    }

    #[test]
    fn programmer_always_sees_detail(message in "[a-zA-Z0-9 ]{1,40}") {
        let mut h = Harness::new(true);
        h.world.fail_matching(&message);
        h.input("look");
        let outputs = h.outputs();
        prop_assert_eq!(outputs.len(), 1);
        prop_assert!(outputs[0].contains(&message));
    }
}
