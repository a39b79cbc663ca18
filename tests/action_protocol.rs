//! Wire-format checks for the action vocabulary.

mod common;

use common::Queue;
use refold::{CombineAction, IndexSelection, ListAction, MapAction, ReducerError, Replacement};
use serde_json::json;

type Combined = CombineAction<String, Queue>;

#[test]
fn tagged_wire_form_decodes_list_actions() {
    let action = Combined::from_value(json!({
        "type": "insert",
        "index": 1,
        "payload": "deploy"
    }))
    .unwrap();
    match action {
        CombineAction::List(ListAction::Insert { index, payload }) => {
            assert_eq!(index, 1);
            assert_eq!(payload, "deploy");
        }
        other => panic!("expected insert, got `{}`", other.kind()),
    }
}

#[test]
fn payload_free_actions_decode_from_the_tag_alone() {
    let action = Combined::from_value(json!({"type": "shift"})).unwrap();
    assert!(matches!(action, CombineAction::List(ListAction::Shift)));
}

#[test]
fn replace_payload_uses_camel_case_field_names() {
    let action = Combined::from_value(json!({
        "type": "replace",
        "payload": {"oldValue": "a", "newValue": "b"}
    }))
    .unwrap();
    match action {
        CombineAction::List(ListAction::Replace { payload }) => {
            assert_eq!(payload.old_value, "a");
            assert_eq!(payload.new_value, "b");
        }
        other => panic!("expected replace, got `{}`", other.kind()),
    }

    let encoded = serde_json::to_value(ListAction::Replace {
        payload: Replacement {
            old_value: "a".to_string(),
            new_value: "b".to_string(),
        },
    })
    .unwrap();
    assert_eq!(
        encoded,
        json!({"type": "replace", "payload": {"oldValue": "a", "newValue": "b"}})
    );
}

#[test]
fn remove_at_accepts_a_single_index_or_a_sequence() {
    let single = Combined::from_value(json!({"type": "removeAt", "index": 3})).unwrap();
    assert!(matches!(
        single,
        CombineAction::List(ListAction::RemoveAt {
            index: IndexSelection::One(3)
        })
    ));

    let several = Combined::from_value(json!({"type": "removeAt", "index": [0, 2]})).unwrap();
    match several {
        CombineAction::List(ListAction::RemoveAt {
            index: IndexSelection::Many(positions),
        }) => assert_eq!(positions, [0, 2]),
        other => panic!("expected removeAt, got `{}`", other.kind()),
    }
}

#[test]
fn remove_at_encodes_each_shape_back_to_its_wire_form() {
    let single = serde_json::to_value(ListAction::<String>::RemoveAt {
        index: IndexSelection::from(3),
    })
    .unwrap();
    assert_eq!(single, json!({"type": "removeAt", "index": 3}));

    let several = serde_json::to_value(ListAction::<String>::RemoveAt {
        index: IndexSelection::from(vec![0, 2]),
    })
    .unwrap();
    assert_eq!(several, json!({"type": "removeAt", "index": [0, 2]}));
}

#[test]
fn multi_word_tags_are_camel_cased() {
    let encoded = serde_json::to_value(ListAction::AddAll {
        payload: vec!["a".to_string()],
    })
    .unwrap();
    assert_eq!(encoded, json!({"type": "addAll", "payload": ["a"]}));
}

#[test]
fn map_actions_decode_through_the_combined_vocabulary() {
    let action = Combined::from_value(json!({
        "type": "merge",
        "payload": {"revision": 9}
    }))
    .unwrap();
    match action {
        CombineAction::Map(MapAction::Merge { payload }) => {
            assert_eq!(payload, json!({"revision": 9}));
        }
        other => panic!("expected merge, got `{}`", other.kind()),
    }
}

#[test]
fn unknown_tags_are_rejected_by_both_vocabularies() {
    let map_err = MapAction::<Queue>::from_value(json!({"type": "sort"})).unwrap_err();
    let combined_err = Combined::from_value(json!({"type": "sort"})).unwrap_err();
    assert!(matches!(map_err, ReducerError::UnrecognizedAction));
    assert!(matches!(combined_err, ReducerError::UnrecognizedAction));
}

#[test]
fn recognized_tag_with_undecodable_payload_reports_the_action() {
    let err = Combined::from_value(json!({"type": "addAll", "payload": "oops"})).unwrap_err();
    match err {
        ReducerError::MalformedPayload { kind, .. } => assert_eq!(kind, "addAll"),
        other => panic!("expected malformed payload, got {other}"),
    }
}
