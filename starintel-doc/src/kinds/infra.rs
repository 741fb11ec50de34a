//! Network infrastructure: DNS records, address blocks, hosts, and URLs.

use serde::{Deserialize, Serialize};

use crate::document::impl_document;
use crate::{DocResult, DocType, Document, Meta};

/// A DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(flatten)]
    pub meta: Meta,
    /// Record type, e.g. "A", "MX", "CNAME".
    pub record_type: String,
    /// Record value as queried.
    pub record: String,
    #[serde(default)]
    pub resolved_addresses: Vec<String>,
}

impl Domain {
    /// Creates an unidentified record.
    pub fn new(record: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Domain),
            record_type: record_type.into(),
            record: record.into(),
            resolved_addresses: Vec::new(),
        }
    }
}

impl_document!(Domain, DocType::Domain, ["recordType", "record"]);

/// A service listening on a host port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub port: u16,
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Service {
    /// A service with no version.
    pub fn new(port: u16, name: impl Into<String>) -> Self {
        Self {
            port,
            name: name.into(),
            version: String::new(),
        }
    }
}

/// An announced address block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(flatten)]
    pub meta: Meta,
    /// Owning organization, free text.
    #[serde(default)]
    pub org: String,
    /// Autonomous system number.
    pub asn: i64,
    /// CIDR notation.
    pub subnet: String,
}

impl Network {
    /// Creates an unidentified network with no owner.
    pub fn new(asn: i64, subnet: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Network),
            org: String::new(),
            asn,
            subnet: subnet.into(),
        }
    }
}

impl_document!(Network, DocType::Network, ["asn", "subnet"]);

/// A machine reachable at an IP address. Identified by the address alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(flatten)]
    pub meta: Meta,
    pub hostname: String,
    pub ip: String,
    #[serde(default)]
    pub ports: Vec<Service>,
    #[serde(default)]
    pub os: String,
}

impl Host {
    /// Creates an unidentified host with no open ports.
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Host),
            hostname: hostname.into(),
            ip: ip.into(),
            ports: Vec::new(),
            os: String::new(),
        }
    }

    /// Records an open port, replacing any earlier entry for the same port.
    pub fn add_service(&mut self, service: Service) {
        self.ports.retain(|s| s.port != service.port);
        self.ports.push(service);
    }
}

impl_document!(Host, DocType::Host, ["hostname", "ip"]);

/// A fetched URL and, optionally, its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Url {
    #[serde(flatten)]
    pub meta: Meta,
    pub url: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub query: String,
}

impl Url {
    /// Creates an unidentified URL with no content.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Url),
            url: url.into(),
            path: String::new(),
            content: String::new(),
            query: String::new(),
        }
    }
}

impl_document!(Url, DocType::Url, ["url"]);

/// Creates a finalized [`Domain`] in `dataset`, identified by record and record type.
pub fn new_domain(
    dataset: impl Into<String>,
    record: impl Into<String>,
    record_type: impl Into<String>,
) -> DocResult<Domain> {
    Domain::new(record, record_type).finalized(dataset)
}

/// Creates a finalized [`Network`] in `dataset`, identified by owner, ASN, and subnet.
pub fn new_network(
    dataset: impl Into<String>,
    asn: i64,
    subnet: impl Into<String>,
) -> DocResult<Network> {
    Network::new(asn, subnet).finalized(dataset)
}

/// Creates a finalized [`Host`] in `dataset`, identified by `ip` alone.
pub fn new_host(
    dataset: impl Into<String>,
    hostname: impl Into<String>,
    ip: impl Into<String>,
) -> DocResult<Host> {
    Host::new(hostname, ip).finalized(dataset)
}

/// Creates a finalized [`Url`] in `dataset`, identified by URL and content.
pub fn new_url(dataset: impl Into<String>, url: impl Into<String>) -> DocResult<Url> {
    Url::new(url).finalized(dataset)
}
