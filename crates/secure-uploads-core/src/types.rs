//! Identifiers shared by the sealer and the opener.
//!
//! Artifact sets are addressed purely by naming convention: the base
//! identifier plus a per-part suffix. No index is ever consulted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte artifact identifier, computed as Blake3(sealed payload blob).
///
/// The hash covers the *encrypted* payload, so sealing the same file twice
/// yields two different identifiers (fresh session keys and nonces).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(pub [u8; 32]);

impl ArtifactId {
    /// Derive the identifier from the sealed payload bytes.
    pub fn derive(sealed_payload: &[u8]) -> Self {
        Self(*blake3::hash(sealed_payload).as_bytes())
    }

    /// Create a new ArtifactId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string. This is the on-disk base name.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtifactId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for ArtifactId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ArtifactId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// The role of a blob within an artifact set.
///
/// Each part has its own session key. The part is also bound into the
/// key-wrap derivation, so a wrapped key only opens the blob it was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactPart {
    /// The compressed file payload.
    Data,
    /// The compressed metadata record.
    Info,
}

impl ArtifactPart {
    /// Suffix of the sealed blob file (`H.data`, `H.info`).
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Info => "info",
        }
    }

    /// Suffix of the wrapped key file (`H.data.key`, `H.info.key`).
    pub const fn key_extension(self) -> &'static str {
        match self {
            Self::Data => "data.key",
            Self::Info => "info.key",
        }
    }

    /// Context string mixed into the key-wrap derivation.
    pub(crate) const fn wrap_context(self) -> &'static [u8] {
        match self {
            Self::Data => b"part:data",
            Self::Info => b"part:info",
        }
    }
}

impl fmt::Display for ArtifactPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_id_hex_roundtrip() {
        let id = ArtifactId::from_bytes([0x42; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        let recovered = ArtifactId::from_hex(&hex).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_artifact_id_known_vector() {
        // BLAKE3 of the empty input.
        let id = ArtifactId::derive(b"");
        assert_eq!(
            id.to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_artifact_id_depends_only_on_bytes() {
        let a = ArtifactId::derive(b"sealed bytes");
        let b = ArtifactId::derive(b"sealed bytes");
        let c = ArtifactId::derive(b"sealed bytez");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_artifact_id_display_is_full_hex() {
        let id = ArtifactId::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", id), "ab".repeat(32));
        assert!(format!("{:?}", id).starts_with("ArtifactId("));
    }

    #[test]
    fn test_from_hex_rejects_short_input() {
        assert!(ArtifactId::from_hex("abcd").is_err());
    }

    #[test]
    fn test_part_suffixes() {
        assert_eq!(ArtifactPart::Data.extension(), "data");
        assert_eq!(ArtifactPart::Info.key_extension(), "info.key");
        assert_ne!(
            ArtifactPart::Data.wrap_context(),
            ArtifactPart::Info.wrap_context()
        );
    }
}
