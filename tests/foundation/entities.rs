//! Integration tests for entity ids and the entity capability view.

use mooring_foundation::{Entity, EntityId, ErrorKind};
use proptest::prelude::*;

#[test]
fn id_renders_with_hash() {
    assert_eq!(EntityId::new(42).to_string(), "#42");
    assert_eq!(format!("{:?}", EntityId::new(42)), "EntityId(#42)");
}

#[test]
fn id_parses() {
    assert_eq!("#0".parse::<EntityId>().unwrap(), EntityId::new(0));
    assert_eq!("#1234".parse::<EntityId>().unwrap().number(), 1234);
}

#[test]
fn id_rejects_malformed_text() {
    for text in ["", "#", "42", "#-1", "#1a", " #1", "#99999999999999999999999"] {
        let err = text.parse::<EntityId>().unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidEntityId(_)),
            "{text:?} gave {err}"
        );
    }
}

#[test]
fn entity_defaults() {
    let e = Entity::new(EntityId::new(3));
    assert!(!e.programmer);
    assert_eq!(e.location, None);
    assert!(!e.verb_missing);
}

#[test]
fn entity_builders() {
    let e = Entity::new(EntityId::new(3))
        .with_programmer(true)
        .with_location(EntityId::new(1))
        .with_verb_missing(true);
    assert!(e.programmer);
    assert_eq!(e.location, Some(EntityId::new(1)));
    assert!(e.verb_missing);
}

#[test]
fn entity_serializes() {
    let e = Entity::new(EntityId::new(7)).with_location(EntityId::new(1));
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 7,
            "programmer": false,
            "location": 1,
            "verb_missing": false,
        })
    );
    let back: Entity = serde_json::from_value(json).unwrap();
    assert_eq!(back, e);
}

proptest! {
    #[test]
    fn display_then_parse(n in any::<u64>()) {
        let id = EntityId::new(n);
        prop_assert_eq!(id.to_string().parse::<EntityId>().unwrap(), id);
    }
}
