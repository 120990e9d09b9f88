//! Decoding tests for records as the remote store returns them.

use pretty_assertions::assert_eq;
use serde_json::json;
use xpl_core::entities::*;

#[test]
fn tag_decodes_with_classifier_ids() {
    let tag: Tag =
        serde_json::from_value(json!({"id": 7, "name": "T1", "type": 2, "status": 3})).unwrap();
    assert_eq!(
        tag,
        Tag {
            id: 7,
            name: "T1".into(),
            type_id: Some(2),
            status_id: Some(3),
        }
    );
}

#[test]
fn tag_decodes_without_classifier_ids() {
    let tag: Tag = serde_json::from_value(json!({"id": 1, "name": "T1"})).unwrap();
    assert_eq!(tag.type_id, None);
    assert_eq!(tag.status_id, None);
}

#[test]
fn tag_with_named_classifiers_still_decodes() {
    let tag: Tag = serde_json::from_value(
        json!({"id": 1, "name": "T1", "type": "test", "status": "unlocked"}),
    )
    .unwrap();
    assert_eq!(tag.id, 1);
    assert_eq!(tag.name, "T1");
    assert_eq!(tag.type_id, None);
    assert_eq!(tag.status_id, None);
}

#[test]
fn tag_with_numeric_string_classifier_keeps_it() {
    let tag: Tag =
        serde_json::from_value(json!({"id": 1, "name": "T1", "type": "4", "status": null}))
            .unwrap();
    assert_eq!(tag.type_id, Some(4));
    assert_eq!(tag.status_id, None);
}

#[test]
fn domain_list_uses_wire_names() {
    let list: DomainList =
        serde_json::from_value(json!({"id": 4, "global_tag": 5, "payload_type": 6})).unwrap();
    assert_eq!(list.tag_id, 5);
    assert_eq!(list.domain_id, 6);
    assert!(list.binds(5, 6));
    assert!(!list.binds(6, 5));
}

#[test]
fn domain_list_missing_binding_is_rejected() {
    let result = serde_json::from_value::<DomainList>(json!({"id": 4, "global_tag": 5}));
    assert!(result.is_err());
}

#[test]
fn payload_identity_ignores_interval() {
    let payload: Payload = serde_json::from_value(json!({
        "id": 11,
        "payload_url": "p1.txt",
        "payload_list": 2,
        "major_iov": 0,
        "minor_iov": 0
    }))
    .unwrap();
    assert_eq!(payload.minor_iov, Some(0));
    assert!(payload.matches("p1.txt", 2));
    assert!(!payload.matches("p1.txt", 3));
    assert!(!payload.matches("p2.txt", 2));
}

#[test]
fn entry_keeps_unknown_fields() {
    let raw = json!({"id": 3, "name": "calib", "payload_type": 9, "extra": [1, 2]});
    let entry: Entry = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(entry.id, 3);
    assert_eq!(entry.name.as_deref(), Some("calib"));
    assert_eq!(entry.field("payload_type"), Some(&json!(9)));
    assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
}

#[test]
fn entry_without_name_serializes_without_name() {
    let entry: Entry = serde_json::from_value(json!({"id": 3, "payload_url": "a"})).unwrap();
    assert_eq!(entry.name, None);
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({"id": 3, "payload_url": "a"})
    );
}

#[test]
fn payload_with_unusable_interval_still_decodes() {
    let payload: Payload = serde_json::from_value(json!({
        "id": 12,
        "payload_url": "p1.txt",
        "payload_list": 2,
        "major_iov": -1,
        "minor_iov": null
    }))
    .unwrap();
    assert_eq!(payload.major_iov, None);
    assert_eq!(payload.minor_iov, None);
    assert!(payload.matches("p1.txt", 2));
}

#[test]
fn payload_missing_url_is_rejected() {
    let result = serde_json::from_value::<Payload>(json!({"id": 12, "payload_list": 2}));
    assert!(result.is_err());
}
