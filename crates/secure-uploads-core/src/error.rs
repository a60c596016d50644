//! Error types for the envelope primitives.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while sealing or opening an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Key file could not be read.
    #[error("failed to read key file {}: {source}", path.display())]
    KeyReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key material is not a well-formed X25519 PEM key.
    #[error("malformed key: {0}")]
    KeyFormatError(String),

    /// Encryption error.
    #[error("encryption error: {0}")]
    EncryptionError(String),

    /// Decryption error (wrong key, tampered ciphertext, mismatched part).
    #[error("decryption error: {0}")]
    DecryptionError(String),

    /// A sealed blob or wrapped key did not decode.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Compression error.
    #[error("compression error: {0}")]
    CompressionError(String),

    /// Decrypted bytes are not a valid compressed stream.
    #[error("decompression error: {0}")]
    DecompressionError(String),
}

impl EnvelopeError {
    /// True when the failure is cryptographic: the key did not unwrap, the
    /// ciphertext did not authenticate, or a blob was not decodable at all.
    pub fn is_crypto_failure(&self) -> bool {
        matches!(
            self,
            EnvelopeError::DecryptionError(_) | EnvelopeError::SerializationError(_)
        )
    }

    /// True when decryption succeeded but the recovered bytes did not decompress.
    pub fn is_decompression_failure(&self) -> bool {
        matches!(self, EnvelopeError::DecompressionError(_))
    }

    /// True for failures loading or parsing key material.
    pub fn is_key_failure(&self) -> bool {
        matches!(
            self,
            EnvelopeError::KeyReadError { .. } | EnvelopeError::KeyFormatError(_)
        )
    }
}

/// Result type for envelope operations.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
