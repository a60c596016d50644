//! Hybrid envelopes.
//!
//! Sealing compresses a blob, encrypts it under a fresh session key, and
//! wraps that key for the recipient. The two outputs travel separately
//! (`H.data` / `H.data.key`) and both are needed to open.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::compress::{compress, decompress, DEFAULT_COMPRESSION_LEVEL};
use crate::crypto::{EncryptionKey, EncryptionNonce, X25519PublicKey, X25519SecretKey};
use crate::error::{EnvelopeError, Result};
use crate::types::ArtifactPart;
use crate::wrap::WrappedKey;

/// Format identifier for sealed payloads, stored by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionFormat {
    /// ChaCha20-Poly1305 with 256-bit key over a zstd frame.
    ChaCha20Poly1305,
}

/// A sealed blob as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedPayload {
    /// Encryption algorithm used.
    pub format: EncryptionFormat,

    /// Nonce used for encryption (unique per encryption).
    pub nonce: EncryptionNonce,

    /// The encrypted data (includes authentication tag).
    pub ciphertext: Bytes,
}

impl SealedPayload {
    /// Encrypt plaintext with the given key.
    pub fn encrypt(plaintext: &[u8], key: &EncryptionKey) -> Result<Self> {
        let nonce = EncryptionNonce::generate();
        let ciphertext = key.encrypt(plaintext, &nonce)?;

        Ok(Self {
            format: EncryptionFormat::ChaCha20Poly1305,
            nonce,
            ciphertext: Bytes::from(ciphertext),
        })
    }

    /// Decrypt with the given key.
    pub fn decrypt(&self, key: &EncryptionKey) -> Result<Vec<u8>> {
        match self.format {
            EncryptionFormat::ChaCha20Poly1305 => key.decrypt(&self.ciphertext, &self.nonce),
        }
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.ciphertext.len() + 64);
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| EnvelopeError::SerializationError(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| EnvelopeError::SerializationError(e.to_string()))
    }
}

/// The output of [`seal`]: the blob and its wrapped session key.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedEnvelope {
    /// CBOR-encoded [`SealedPayload`].
    pub cipher_blob: Vec<u8>,
    /// CBOR-encoded [`WrappedKey`].
    pub wrapped_key: Vec<u8>,
}

impl std::fmt::Debug for SealedEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedEnvelope")
            .field("cipher_blob_len", &self.cipher_blob.len())
            .field("wrapped_key_len", &self.wrapped_key.len())
            .finish()
    }
}

/// Seal `plaintext` for a recipient at the default compression level.
pub fn seal(
    plaintext: &[u8],
    part: ArtifactPart,
    recipient_public: &X25519PublicKey,
) -> Result<SealedEnvelope> {
    seal_with_level(plaintext, part, recipient_public, DEFAULT_COMPRESSION_LEVEL)
}

/// Seal `plaintext` for a recipient.
///
/// A fresh session key is generated on every call and never reused.
pub fn seal_with_level(
    plaintext: &[u8],
    part: ArtifactPart,
    recipient_public: &X25519PublicKey,
    level: i32,
) -> Result<SealedEnvelope> {
    let compressed = Zeroizing::new(compress(plaintext, level)?);

    let session_key = EncryptionKey::generate();
    let payload = SealedPayload::encrypt(&compressed, &session_key)?;
    let wrapped = WrappedKey::create(&session_key, part, recipient_public)?;

    Ok(SealedEnvelope {
        cipher_blob: payload.to_bytes()?,
        wrapped_key: wrapped.to_bytes()?,
    })
}

/// Open a sealed blob with the recipient's secret key.
///
/// Cryptographic failures (undecodable blobs, wrong key, tampering, part
/// mismatch) report [`EnvelopeError::is_crypto_failure`]; a blob that
/// decrypts but does not decompress reports
/// [`EnvelopeError::is_decompression_failure`].
pub fn open(
    cipher_blob: &[u8],
    wrapped_key: &[u8],
    part: ArtifactPart,
    recipient_secret: &X25519SecretKey,
) -> Result<Vec<u8>> {
    let wrapped = WrappedKey::from_bytes(wrapped_key)?;
    let session_key = wrapped.decrypt(part, recipient_secret)?;

    let payload = SealedPayload::from_bytes(cipher_blob)?;
    let compressed = Zeroizing::new(payload.decrypt(&session_key)?);

    decompress(&compressed)
}
