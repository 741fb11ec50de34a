//! Shared fixtures for document tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use starintel_doc::{
    ActorManifest, Address, AnyDocument, Document, Domain, Email, EmailMessage, Geo, Host,
    Message, Network, Org, Person, Phone, Relation, Scope, Service, SocialMediaPost, Target, Url,
    User,
};

pub const DATASET: &str = "test-ops";

/// One finalized, populated document of every kind.
pub fn every_kind() -> Vec<AnyDocument> {
    let mut person = Person::new("Jane", "Doe");
    person.dob = "1990-01-01".into();
    person.misc.push("left-handed".into());

    let mut org = Org::new("Acme Corp");
    org.reg = "HRB 12345".into();
    org.country = "DE".into();

    let mut domain = Domain::new("example.com", "A");
    domain.resolved_addresses.push("93.184.216.34".into());

    let mut network = Network::new(64512, "10.0.0.0/8");
    network.org = "Example Networks".into();

    let mut host = Host::new("gw.example", "10.0.0.1");
    host.add_service(Service::new(22, "ssh"));
    host.os = "linux".into();

    let mut url = Url::new("https://example.com/login?next=/");
    url.path = "/login".into();
    url.query = "next=/".into();

    let address = Address::new("1 Main St", "Springfield", "IL", "62701", "US").at(
        39.7817, -89.6501, 0.0,
    );

    let mut phone = Phone::new("+15555550100");
    phone.phone_type = "mobile".into();

    let mut message = Message::new("discord.gg", "alice", "hello");
    message.channel = "general".into();
    message.mentions.push("bob".into());

    let mut post = SocialMediaPost::new("alice", "first post");
    post.tags.push("intro".into());
    post.replies.push(json!({"user": "bob", "content": "welcome"}));

    let mut target = Target::new("example.com", "dns-resolver");
    let mut scope = Scope::new("corp domains");
    scope.add_inscope("example.com");
    target.add_scope(&scope).unwrap();

    let mut email = Email::new("alice", "example.com");
    email.password = "hunter2".into();

    let mut email_message =
        EmailMessage::new("alice@example.com", "bob@example.com", "hi", "body text");
    email_message.cc.push("carol@example.com".into());

    let mut user = User::new("alice", "https://social.example/@alice", "social.example");
    user.misc.push(json!({"followers": 10}));

    let mut manifest = ActorManifest::new("dns-resolver");
    manifest.consumer_path = "targets.dns".into();
    manifest.target_options.push(json!({"recordTypes": ["A", "MX"]}));

    vec![
        person.finalized(DATASET).unwrap().into(),
        org.finalized(DATASET).unwrap().into(),
        domain.finalized(DATASET).unwrap().into(),
        network.finalized(DATASET).unwrap().into(),
        host.finalized(DATASET).unwrap().into(),
        url.finalized(DATASET).unwrap().into(),
        Geo::new(1.5, 2.0, 0.0).finalized(DATASET).unwrap().into(),
        address.finalized(DATASET).unwrap().into(),
        phone.finalized(DATASET).unwrap().into(),
        Relation::new("person:123", "org:456", "employee of")
            .finalized(DATASET)
            .unwrap()
            .into(),
        message.finalized(DATASET).unwrap().into(),
        post.finalized(DATASET).unwrap().into(),
        target.finalized(DATASET).unwrap().into(),
        email.finalized(DATASET).unwrap().into(),
        email_message.finalized(DATASET).unwrap().into(),
        user.finalized(DATASET).unwrap().into(),
        manifest.finalized().unwrap().into(),
    ]
}

/// A minimal stored host as another collector would write it.
pub fn stored_host() -> Value {
    json!({
        "_id": "190dafab69706a67221c1226360de7dc",
        "_rev": "3-abc",
        "type": "host",
        "sources": ["masscan"],
        "schemaVersion": "0.7.3",
        "dataset": "net-scan",
        "dateAdded": 1_700_000_000,
        "dateUpdated": 1_700_000_500,
        "hostname": "gw.example",
        "ip": "10.0.0.1",
        "ports": [{"port": 22, "name": "ssh", "version": "OpenSSH_9.6"}],
        "os": "linux"
    })
}
