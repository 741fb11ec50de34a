//! Concrete document kinds and their construction helpers.
//!
//! Each kind is a flat struct embedding a [`crate::Meta`] envelope. Fields a
//! kind cannot exist without are constructor arguments; everything else is a
//! public field with an empty default. Every `new_*` helper returns a
//! finalized document ready for storage.

mod comms;
mod contact;
mod geo;
mod infra;
mod people;
mod relation;
mod target;

pub use comms::{
    EmailMessage, Message, SocialMediaPost, new_email_message, new_message, new_social_media_post,
};
pub use contact::{Email, Phone, User, new_email, new_email_from_string, new_phone, new_user};
pub use geo::{Address, Geo, new_address, new_geo};
pub use infra::{Domain, Host, Network, Service, Url, new_domain, new_host, new_network, new_url};
pub use people::{Org, Person, new_org, new_person};
pub use relation::{Relation, new_relation};
pub use target::{Scope, Target, new_target};
