mod common;

use common::{DATASET, every_kind, stored_host};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use starintel_doc::{
    AnyDocument, DEFAULT_DATASET, DocError, DocType, Document, Domain, Geo, Host, Meta, Person,
    SCHEMA_VERSION, Service, SocialMediaPost, Target, new_host, new_person,
};

// ── Envelope shape ───────────────────────────────────────────────

#[test]
fn envelope_keys_are_camel_case() {
    let host = new_host("net-scan", "gw", "10.0.0.1").unwrap();
    let value = host.to_value().unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "_id",
        "type",
        "sources",
        "schemaVersion",
        "dataset",
        "dateAdded",
        "dateUpdated",
        "hostname",
        "ip",
        "ports",
        "os",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(object.len(), 11);
}

#[test]
fn new_envelope_defaults() {
    let meta = Meta::new(DocType::Geo);
    assert_eq!(meta.id, "");
    assert_eq!(meta.rev(), None);
    assert_eq!(meta.doc_type(), DocType::Geo);
    assert_eq!(meta.dataset, DEFAULT_DATASET);
    assert_eq!(meta.schema_version, SCHEMA_VERSION);
    assert!(meta.sources.is_empty());
    assert_eq!(meta.date_added, meta.date_updated);
    assert!(meta.is_current_schema());
}

#[test]
fn unset_rev_is_omitted() {
    let person = new_person("people", "Jane", "Doe", "").unwrap();
    let value = person.to_value().unwrap();
    assert!(value.get("_rev").is_none());
}

#[test]
fn set_rev_is_emitted() {
    let mut person = new_person("people", "Jane", "Doe", "").unwrap();
    person.meta.set_rev(Some("1-abc".into()));
    let value = person.to_value().unwrap();
    assert_eq!(value["_rev"], "1-abc");
}

#[test]
fn empty_rev_is_treated_as_unset() {
    let mut person = Person::new("Jane", "Doe");
    person.meta.set_rev(Some(String::new()));
    assert_eq!(person.meta.rev(), None);
    assert!(person.to_value().unwrap().get("_rev").is_none());
}

#[test]
fn decoded_empty_rev_is_unset() {
    let mut raw = stored_host();
    raw["_rev"] = json!("");
    let host = Host::from_value(raw).unwrap();
    assert_eq!(host.meta.rev(), None);
}

#[test]
fn type_tags_are_exact() {
    let post = SocialMediaPost::new("alice", "hi");
    assert_eq!(post.to_value().unwrap()["type"], "socialmediapost");
    let manifest = starintel_doc::ActorManifest::new("dns");
    assert_eq!(manifest.to_value().unwrap()["type"], "actor-manifest");
}

#[test]
fn fresh_documents_emit_empty_lists() {
    let post = SocialMediaPost::new("alice", "hi");
    let value = post.to_value().unwrap();
    for key in ["sources", "replies", "media", "links", "tags"] {
        assert_eq!(value[key], json!([]), "{key}");
    }

    let person = Person::new("Jane", "Doe");
    assert_eq!(person.to_value().unwrap()["misc"], json!([]));

    let target = Target::new("example.com", "dns");
    assert_eq!(target.to_value().unwrap()["options"], json!([]));
}

#[test]
fn to_json_sorts_keys() {
    let geo = Geo::new(1.0, 2.0, 3.0).finalized("maps").unwrap();
    let text = geo.to_json().unwrap();
    assert!(text.starts_with("{\"_id\":"));
    let alt = text.find("\"alt\"").unwrap();
    let lat = text.find("\"lat\"").unwrap();
    let kind = text.find("\"type\"").unwrap();
    assert!(alt < lat && lat < kind);
}

#[test]
fn pretty_json_parses_back() {
    let host = new_host("net-scan", "gw", "10.0.0.1").unwrap();
    let pretty = host.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(Host::from_json(&pretty).unwrap(), host);
}

#[test]
fn renamed_email_fields() {
    let msg = starintel_doc::EmailMessage::new("a@x.io", "b@x.io", "hi", "body");
    let value = msg.to_value().unwrap();
    assert_eq!(value["from"], "a@x.io");
    assert_eq!(value["to"], "b@x.io");
    assert!(value.get("sender").is_none());
}

#[test]
fn host_services_nest() {
    let mut host = Host::new("gw", "10.0.0.1");
    host.add_service(Service::new(22, "ssh"));
    host.add_service(Service::new(443, "https"));
    let mut ssh = Service::new(22, "ssh");
    ssh.version = "OpenSSH_9.6".into();
    host.add_service(ssh);

    let value = host.to_value().unwrap();
    assert_eq!(
        value["ports"],
        json!([
            {"port": 443, "name": "https", "version": ""},
            {"port": 22, "name": "ssh", "version": "OpenSSH_9.6"},
        ])
    );
}

// ── Round trips ──────────────────────────────────────────────────

#[test]
fn every_kind_round_trips() {
    for doc in every_kind() {
        let value = doc.to_value().unwrap();
        let back = AnyDocument::from_value(value.clone()).unwrap();
        assert_eq!(back, doc, "{}", doc.doc_type());
        assert_eq!(back.to_value().unwrap(), value);
    }
}

#[test]
fn every_kind_round_trips_with_rev() {
    for doc in every_kind() {
        let mut value = doc.to_value().unwrap();
        value["_rev"] = json!("2-def");
        let back = AnyDocument::from_value(value.clone()).unwrap();
        assert_eq!(back.to_value().unwrap(), value, "{}", doc.doc_type());
    }
}

#[test]
fn every_kind_is_finalized_in_fixture() {
    for doc in every_kind() {
        assert!(!doc.id().is_empty(), "{}", doc.doc_type());
        let value = doc.to_value().unwrap();
        assert_eq!(value["type"], doc.doc_type().tag());
        if doc.doc_type() != DocType::ActorManifest {
            assert_eq!(value["dataset"], DATASET);
        }
    }
}

#[test]
fn stored_document_decodes_verbatim() {
    let raw = stored_host();
    let host = Host::from_value(raw.clone()).unwrap();
    assert_eq!(host.id(), "190dafab69706a67221c1226360de7dc");
    assert_eq!(host.meta.rev(), Some("3-abc"));
    assert_eq!(host.meta.sources, ["masscan"]);
    assert_eq!(host.meta.date_added, 1_700_000_000);
    assert_eq!(host.ports[0].version, "OpenSSH_9.6");
    assert_eq!(host.to_value().unwrap(), raw);
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn absent_optional_keys_default() {
    let domain = Domain::from_value(json!({"record": "example.com", "recordType": "A"})).unwrap();
    assert_eq!(domain.doc_type(), DocType::Domain);
    assert_eq!(domain.meta.doc_type(), DocType::Domain);
    assert_eq!(domain.id(), "");
    assert_eq!(domain.meta.dataset, DEFAULT_DATASET);
    assert_eq!(domain.meta.schema_version, SCHEMA_VERSION);
    assert!(domain.resolved_addresses.is_empty());
    assert!(domain.meta.date_added > 0);
}

#[test]
fn missing_required_field_is_rejected() {
    let err = Domain::from_value(json!({"record": "example.com"})).unwrap_err();
    assert!(matches!(
        err,
        DocError::MissingRequiredField {
            kind: DocType::Domain,
            field: "recordType"
        }
    ));
}

#[test]
fn wrong_type_tag_is_rejected() {
    let mut raw = stored_host();
    raw["type"] = json!("person");
    let err = Host::from_value(raw).unwrap_err();
    match err {
        DocError::TypeTagMismatch { expected, found } => {
            assert_eq!(expected, Some(DocType::Host));
            assert_eq!(found.as_deref(), Some("person"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_object_is_rejected() {
    let err = Host::from_value(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(
        err,
        DocError::TypeTagMismatch {
            expected: Some(DocType::Host),
            found: None
        }
    ));
}

#[test]
fn wrongly_typed_field_is_serialization_error() {
    let mut raw = stored_host();
    raw["ports"] = json!("22,443");
    let err = Host::from_value(raw).unwrap_err();
    assert!(matches!(err, DocError::Serialization(_)));
}

#[test]
fn malformed_json_is_serialization_error() {
    let err = Host::from_json("{not json").unwrap_err();
    assert!(matches!(err, DocError::Serialization(_)));
}

#[test]
fn integral_coordinates_decode_as_floats() {
    let geo = Geo::from_value(json!({"lat": 1, "long": -2, "alt": 0})).unwrap();
    assert_eq!(geo.lat, 1.0);
    assert_eq!(geo.long, -2.0);
}

#[test]
fn old_schema_is_detected() {
    let mut raw = stored_host();
    raw["schemaVersion"] = json!("0.6.0");
    let host = Host::from_value(raw).unwrap();
    assert!(!host.meta.is_current_schema());
}

// ── Timestamps ───────────────────────────────────────────────────

#[test]
fn touch_never_precedes_date_added() {
    let mut host = new_host("net-scan", "gw", "10.0.0.1").unwrap();
    host.meta.date_added = i64::MAX / 2;
    host.touch_updated();
    assert_eq!(host.meta.date_updated, host.meta.date_added);
}

#[test]
fn touch_advances_date_updated() {
    let mut host = new_host("net-scan", "gw", "10.0.0.1").unwrap();
    host.meta.date_added = 100;
    host.meta.date_updated = 100;
    host.touch_updated();
    assert!(host.meta.date_updated > 100);
}

#[test]
fn timestamp_backfills_zeroes() {
    let mut raw = stored_host();
    raw["dateAdded"] = json!(0);
    raw["dateUpdated"] = json!(0);
    let mut host = Host::from_value(raw).unwrap();
    host.timestamp();
    assert!(host.meta.date_added > 0);
    assert!(host.meta.date_updated >= host.meta.date_added);
}

#[test]
fn timestamp_keeps_existing_values() {
    let mut host = Host::from_value(stored_host()).unwrap();
    host.timestamp();
    assert_eq!(host.meta.date_added, 1_700_000_000);
    assert_eq!(host.meta.date_updated, 1_700_000_500);
}

// ── Provenance ───────────────────────────────────────────────────

#[test]
fn sources_keep_insertion_order() {
    let mut person = Person::new("Jane", "Doe");
    person.meta.add_source("court records");
    person.meta.add_source("linkedin");
    let value: Value = person.to_value().unwrap();
    assert_eq!(value["sources"], json!(["court records", "linkedin"]));
}

#[test]
fn sources_do_not_affect_identity() {
    let a = new_host("net-scan", "gw", "10.0.0.1").unwrap();
    let mut b = Host::new("gw", "10.0.0.1");
    b.meta.add_source("shodan");
    b.finalize("net-scan").unwrap();
    assert_eq!(a.id(), b.id());
}
