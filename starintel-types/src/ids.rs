//! Identifier primitives for Star Intel documents.
//!
//! Two identity schemes exist:
//! - [`RandomId`]: time-ordered random identifiers. The value is a UUID v7
//!   (48-bit millisecond timestamp in the high bits, random low bits) rendered
//!   as 26-character Crockford base32, i.e. ULID text. Ids created later sort
//!   after ids created earlier, both numerically and as strings.
//! - [`content_hash`]: deterministic identifiers derived from an ordered list
//!   of field renderings, so equal facts converge on one id.

use crate::{Error, Result};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the textual form of a [`RandomId`].
pub const RANDOM_ID_LEN: usize = 26;

const CROCKFORD: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Time-ordered random identifier with ULID text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RandomId(Uuid);

impl RandomId {
    /// Creates a new identifier stamped with the current time.
    ///
    /// Identifiers created within the same millisecond in one process are
    /// still strictly increasing.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates an identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Milliseconds since the Unix epoch encoded in the high 48 bits.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        (self.0.as_u128() >> 80) as u64
    }

    /// Parses the 26-character Crockford base32 form.
    ///
    /// Decoding is case-insensitive and accepts the Crockford aliases
    /// `I`/`L` for `1` and `O` for `0`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != RANDOM_ID_LEN {
            return Err(Error::InvalidId(format!(
                "expected {RANDOM_ID_LEN} characters, got {}",
                s.len()
            )));
        }

        let mut value: u128 = 0;
        for (idx, byte) in s.bytes().enumerate() {
            let digit = crockford_digit(byte)
                .ok_or_else(|| Error::InvalidId(format!("invalid character {:?}", byte as char)))?;
            // 26 * 5 = 130 bits, so the leading digit only carries 3.
            if idx == 0 && digit > 7 {
                return Err(Error::InvalidId("value exceeds 128 bits".into()));
            }
            value = (value << 5) | u128::from(digit);
        }

        Ok(Self(Uuid::from_u128(value)))
    }
}

impl Default for RandomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RandomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; RANDOM_ID_LEN];
        let mut value = self.0.as_u128();
        for slot in buf.iter_mut().rev() {
            *slot = CROCKFORD[(value & 0x1f) as usize];
            value >>= 5;
        }
        for byte in buf {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}

impl FromStr for RandomId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<RandomId> for String {
    fn from(id: RandomId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RandomId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

fn crockford_digit(byte: u8) -> Option<u8> {
    match byte.to_ascii_uppercase() {
        b'O' => Some(0),
        b'I' | b'L' => Some(1),
        upper => CROCKFORD
            .iter()
            .position(|&c| c == upper)
            .map(|pos| pos as u8),
    }
}

/// Digests the concatenation of `parts` into a lowercase hex string.
///
/// Order matters: `["a", "bc"]` and `["ab", "c"]` hash identically because
/// only the concatenation is digested, while `["bc", "a"]` does not.
pub fn content_hash<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Returns true if `s` looks like a [`content_hash`] output.
pub fn is_content_hash(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
