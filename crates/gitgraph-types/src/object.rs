use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of hex characters shown in abbreviated hashes.
pub const ABBREV_LEN: usize = 6;

/// Content-addressed identifier for any object in the repository.
///
/// An `ObjectId` is a 20-byte hash of an object's content. It is produced by
/// the store that owns the object and is never recomputed by the graph walker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId([u8; 20]);

impl ObjectId {
    /// Width of an object ID in bytes.
    pub const LEN: usize = 20;

    /// Create an `ObjectId` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 20]) -> Self {
        Self(hash)
    }

    /// Create an `ObjectId` from a byte slice of exactly [`Self::LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != Self::LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated hex representation (first 6 characters), as used in
    /// graph labels.
    pub fn short_hex(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(ABBREV_LEN);
        s
    }

    /// Parse from a full-length hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.short_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for ObjectId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for [u8; 20] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_BLOB: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

    fn sample() -> ObjectId {
        ObjectId::from_hash([0xab; 20])
    }

    #[test]
    fn from_hash_keeps_bytes() {
        let id = ObjectId::from_hash([7; 20]);
        assert_eq!(id.as_bytes(), &[7u8; 20]);
        assert_eq!(<[u8; 20]>::from(id), [7u8; 20]);
        assert_eq!(ObjectId::from([7u8; 20]), id);
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(ObjectId::from_slice(&[1; 20]).unwrap(), ObjectId::from_hash([1; 20]));
        assert_eq!(
            ObjectId::from_slice(&[1; 32]).unwrap_err(),
            TypeError::InvalidLength {
                expected: 20,
                actual: 32
            }
        );
    }

    #[test]
    fn hex_roundtrip() {
        let id = sample();
        let parsed = ObjectId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parses_git_style_hash() {
        let id: ObjectId = EMPTY_BLOB.parse().unwrap();
        assert_eq!(id.short_hex(), "e69de2");
        assert_eq!(id.to_hex(), EMPTY_BLOB);
    }

    #[test]
    fn short_hex_is_6_chars() {
        let id = sample();
        assert_eq!(id.short_hex().len(), ABBREV_LEN);
        assert!(id.to_hex().starts_with(&id.short_hex()));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = ObjectId::from_hex("abcdef").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 20,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_non_hex() {
        let err = ObjectId::from_hex("main").unwrap_err();
        assert!(matches!(err, TypeError::InvalidHex(_)));
    }

    #[test]
    fn display_is_full_hex() {
        let id = sample();
        let display = format!("{id}");
        assert_eq!(display.len(), 40);
        assert_eq!(display, id.to_hex());
    }

    #[test]
    fn serde_roundtrip() {
        let id = EMPTY_BLOB.parse::<ObjectId>().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn ordering_is_consistent() {
        let id1 = ObjectId::from_hash([0; 20]);
        let id2 = ObjectId::from_hash([1; 20]);
        assert!(id1 < id2);
    }
}
