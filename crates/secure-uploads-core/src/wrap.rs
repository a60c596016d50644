//! Session key wrapping via X25519 key agreement.
//!
//! Each sealed blob gets its own session key. The session key is encrypted
//! for the recipient with an ephemeral X25519 exchange, and the result is the
//! `.key` file stored next to the blob.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::crypto::{
    EncryptionKey, EncryptionNonce, EphemeralKeyPair, X25519PublicKey, X25519SecretKey, KEY_LEN,
};
use crate::error::{EnvelopeError, Result};
use crate::types::ArtifactPart;

/// A session key encrypted for a single recipient.
///
/// The wrap key is derived from ECDH(ephemeral, recipient) and the artifact
/// part, then the session key is sealed with ChaCha20-Poly1305.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedKey {
    /// Ephemeral X25519 public key (sender's side of ECDH).
    pub ephemeral_public: X25519PublicKey,

    /// Nonce used for encryption.
    pub nonce: EncryptionNonce,

    /// The session key, encrypted with the derived wrap key.
    pub encrypted_key: Bytes,
}

impl WrappedKey {
    /// Wrap a session key for a recipient.
    ///
    /// # Arguments
    /// * `session_key` - The key that encrypts the blob
    /// * `part` - Which blob of the artifact set the key belongs to
    /// * `recipient_public` - Recipient's X25519 public key
    pub fn create(
        session_key: &EncryptionKey,
        part: ArtifactPart,
        recipient_public: &X25519PublicKey,
    ) -> Result<Self> {
        let ephemeral = EphemeralKeyPair::generate();
        let ephemeral_public = ephemeral.public_key();

        let shared = ephemeral.diffie_hellman(recipient_public);
        let wrap_key = shared.derive_wrap_key(part.wrap_context());

        let nonce = EncryptionNonce::generate();
        let encrypted_key = wrap_key.encrypt(session_key.as_bytes(), &nonce)?;

        Ok(Self {
            ephemeral_public,
            nonce,
            encrypted_key: Bytes::from(encrypted_key),
        })
    }

    /// Recover the session key with the recipient's secret key.
    ///
    /// Fails with [`EnvelopeError::DecryptionError`] for the wrong secret, a
    /// tampered wrapped key, or a key wrapped for a different part.
    pub fn decrypt(
        &self,
        part: ArtifactPart,
        recipient_secret: &X25519SecretKey,
    ) -> Result<EncryptionKey> {
        let shared = recipient_secret.diffie_hellman(&self.ephemeral_public);
        let wrap_key = shared.derive_wrap_key(part.wrap_context());

        let key_bytes = Zeroizing::new(wrap_key.decrypt(&self.encrypted_key, &self.nonce)?);

        if key_bytes.len() != KEY_LEN {
            return Err(EnvelopeError::DecryptionError(format!(
                "invalid key length: expected {}, got {}",
                KEY_LEN,
                key_bytes.len()
            )));
        }

        let mut arr = Zeroizing::new([0u8; KEY_LEN]);
        arr.copy_from_slice(&key_bytes);
        Ok(EncryptionKey::from_bytes(*arr))
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| EnvelopeError::SerializationError(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| EnvelopeError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_roundtrip() {
        let recipient = X25519SecretKey::generate();
        let session_key = EncryptionKey::generate();

        let wrapped = WrappedKey::create(&session_key, ArtifactPart::Data, &recipient.public_key())
            .unwrap();
        let recovered = wrapped.decrypt(ArtifactPart::Data, &recipient).unwrap();

        assert_eq!(session_key.as_bytes(), recovered.as_bytes());
    }

    #[test]
    fn test_wrong_recipient_fails() {
        let recipient = X25519SecretKey::generate();
        let wrong = X25519SecretKey::generate();
        let session_key = EncryptionKey::generate();

        let wrapped = WrappedKey::create(&session_key, ArtifactPart::Data, &recipient.public_key())
            .unwrap();

        let err = wrapped.decrypt(ArtifactPart::Data, &wrong).unwrap_err();
        assert!(err.is_crypto_failure());
    }

    #[test]
    fn test_part_is_bound() {
        let recipient = X25519SecretKey::generate();
        let session_key = EncryptionKey::generate();

        let wrapped = WrappedKey::create(&session_key, ArtifactPart::Info, &recipient.public_key())
            .unwrap();

        assert!(wrapped.decrypt(ArtifactPart::Data, &recipient).is_err());
        assert!(wrapped.decrypt(ArtifactPart::Info, &recipient).is_ok());
    }

    #[test]
    fn test_cbor_roundtrip() {
        let recipient = X25519SecretKey::generate();
        let wrapped = WrappedKey::create(
            &EncryptionKey::generate(),
            ArtifactPart::Data,
            &recipient.public_key(),
        )
        .unwrap();

        let bytes = wrapped.to_bytes().unwrap();
        let recovered = WrappedKey::from_bytes(&bytes).unwrap();

        assert_eq!(wrapped, recovered);
    }

    #[test]
    fn test_tampered_wrapped_key_fails() {
        let recipient = X25519SecretKey::generate();
        let wrapped = WrappedKey::create(
            &EncryptionKey::generate(),
            ArtifactPart::Data,
            &recipient.public_key(),
        )
        .unwrap();

        let mut bytes = wrapped.to_bytes().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let tampered = WrappedKey::from_bytes(&bytes).unwrap();
        assert!(tampered.decrypt(ArtifactPart::Data, &recipient).is_err());
    }

    #[test]
    fn test_garbage_does_not_decode() {
        let err = WrappedKey::from_bytes(b"\xff\x00garbage").unwrap_err();
        assert!(err.is_crypto_failure());
    }
}
