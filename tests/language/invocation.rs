//! Verb invocation fragments.

use mooring_foundation::EntityId;
use mooring_language::invocation::VOID;
use mooring_language::{ObjectArg, VerbCall};
use mooring_parser::{ResolutionResult, VerbBinding, parse};
use proptest::prelude::*;

fn call(input: &str, objects: ResolutionResult) -> VerbCall {
    VerbCall::new(
        &VerbBinding::matched(EntityId::new(12), "look"),
        EntityId::new(7),
        &objects,
        &parse(input),
    )
}

#[test]
fn renders_bound_objects() {
    let objects = ResolutionResult::none().with_iobj(EntityId::new(42));
    assert_eq!(
        call("look at #42", objects).to_code(),
        r##"#12["look"](#7, void 0, #42, "look", "at #42", "", "at", "#42")"##
    );
}

#[test]
fn renders_both_objects() {
    let objects = ResolutionResult::none()
        .with_dobj(EntityId::new(3))
        .with_iobj(EntityId::new(4));
    let code = call("put lamp in chest", objects).to_code();
    assert!(code.starts_with("#12[\"look\"](#7, #3, #4, "));
}

#[test]
fn arguments_in_order() {
    let args = call("look", ResolutionResult::none()).arguments();
    assert_eq!(args.len(), 8);
    assert_eq!(args[0], "#7");
    assert_eq!(args[1], VOID);
    assert_eq!(args[2], VOID);
    assert_eq!(args[3], r#""look""#);
}

#[test]
fn verb_name_is_escaped() {
    let call = VerbCall::new(
        &VerbBinding::matched(EntityId::new(1), "odd\"verb"),
        EntityId::new(7),
        &ResolutionResult::none(),
        &parse("x"),
    );
    assert!(call.to_code().starts_with(r#"#1["odd\"verb"]("#));
    assert_eq!(VerbCall::decode(&call.to_code()).unwrap(), call);
}

#[test]
fn label() {
    assert_eq!(call("look", ResolutionResult::none()).label(), "Verb::#12.look");
    let fallback = VerbCall::new(
        &VerbBinding::verb_missing(EntityId::new(1)),
        EntityId::new(7),
        &ResolutionResult::none(),
        &parse("xyzzy"),
    );
    assert_eq!(fallback.label(), "Verb::#1.verbMissing");
}

#[test]
fn object_arg_conversions() {
    assert_eq!(ObjectArg::from(None), ObjectArg::Void);
    assert_eq!(
        Option::<EntityId>::from(ObjectArg::Entity(EntityId::new(2))),
        Some(EntityId::new(2))
    );
    assert_eq!(ObjectArg::Void.to_string(), "void 0");
}

#[test]
fn decode_rejects_other_code() {
    for code in [
        "",
        "1 + 1",
        "(function (player) {\n})(#7)",
        r#"#1["look"](#7)"#,
        r#"#1["look"](#7, void 0, void 0, "a", "b", "c", "d", "e") + 1"#,
        r#"#1["look"](#7, void 1, void 0, "a", "b", "c", "d", "e")"#,
    ] {
        assert!(VerbCall::decode(code).is_err(), "{code:?} decoded");
    }
}

#[test]
fn decode_tolerates_surrounding_whitespace() {
    let original = call("look", ResolutionResult::none());
    let code = format!("  {}\n", original.to_code());
    assert_eq!(VerbCall::decode(&code).unwrap(), original);
}

proptest! {
    #[test]
    fn command_strings_survive(input in any::<String>(), dobj in any::<bool>()) {
        let objects = if dobj {
            ResolutionResult::none().with_dobj(EntityId::new(5))
        } else {
            ResolutionResult::none()
        };
        let original = call(&input, objects);
        let decoded = VerbCall::decode(&original.to_code()).unwrap();
        prop_assert_eq!(decoded, original);
    }
}
