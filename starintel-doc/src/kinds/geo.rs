use serde::{Deserialize, Serialize};

use crate::document::impl_document;
use crate::{DocResult, DocType, Document, Meta};

/// A point on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
    #[serde(default)]
    pub alt: f64,
}

impl Geo {
    /// Creates an unidentified point. Coordinates must be finite to be identified.
    pub fn new(lat: f64, long: f64, alt: f64) -> Self {
        Self {
            meta: Meta::new(DocType::Geo),
            lat,
            long,
            alt,
        }
    }
}

impl Default for Geo {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl_document!(Geo, DocType::Geo, []);

/// A postal address, optionally pinned to coordinates.
///
/// Identified by coordinates and every address line together, so the same
/// street address geocoded differently yields two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
    #[serde(default)]
    pub alt: f64,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub country: String,
    pub street: String,
    #[serde(default)]
    pub street2: String,
}

impl Address {
    /// Creates an unidentified address at coordinates `(0, 0, 0)`.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            meta: Meta::new(DocType::Address),
            lat: 0.0,
            long: 0.0,
            alt: 0.0,
            city: city.into(),
            state: state.into(),
            postal: postal.into(),
            country: country.into(),
            street: street.into(),
            street2: String::new(),
        }
    }

    /// Sets the coordinates.
    #[must_use]
    pub fn at(mut self, lat: f64, long: f64, alt: f64) -> Self {
        self.lat = lat;
        self.long = long;
        self.alt = alt;
        self
    }
}

impl_document!(
    Address,
    DocType::Address,
    ["city", "state", "postal", "country", "street"]
);

/// Creates a finalized [`Geo`] in `dataset`. Fails on a non-finite coordinate.
pub fn new_geo(dataset: impl Into<String>, lat: f64, long: f64, alt: f64) -> DocResult<Geo> {
    Geo::new(lat, long, alt).finalized(dataset)
}

/// Creates a finalized [`Address`] in `dataset`, without coordinates.
pub fn new_address(
    dataset: impl Into<String>,
    street: impl Into<String>,
    city: impl Into<String>,
    state: impl Into<String>,
    postal: impl Into<String>,
    country: impl Into<String>,
) -> DocResult<Address> {
    Address::new(street, city, state, postal, country).finalized(dataset)
}
