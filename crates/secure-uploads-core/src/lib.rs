//! # Secure Uploads Core
//!
//! Envelope primitives for Secure Uploads: hybrid encryption of a blob for a
//! single recipient.
//!
//! This crate does no filesystem I/O beyond reading key files. Naming and
//! writing artifact sets lives in the `secure-uploads` crate.
//!
//! ## Encryption Model
//!
//! Each blob is sealed with a two-layer key model:
//!
//! 1. **Session Key**: a fresh ChaCha20-Poly1305 key encrypts the zstd-compressed blob
//! 2. **Wrapped Key**: the session key is encrypted for the recipient via
//!    ephemeral X25519 ECDH, with the wrap key derived by BLAKE3 from the
//!    shared secret and the [`ArtifactPart`]
//!
//! Payload size is bounded only by memory; the asymmetric step only ever
//! touches a 32-byte key.
//!
//! ## Usage
//!
//! ```rust
//! use secure_uploads_core::{open, seal, ArtifactPart, X25519SecretKey};
//!
//! let recipient = X25519SecretKey::generate();
//!
//! let sealed = seal(b"file contents", ArtifactPart::Data, &recipient.public_key()).unwrap();
//! let opened = open(
//!     &sealed.cipher_blob,
//!     &sealed.wrapped_key,
//!     ArtifactPart::Data,
//!     &recipient,
//! )
//! .unwrap();
//!
//! assert_eq!(opened, b"file contents");
//! ```

pub mod compress;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod types;
pub mod wrap;

pub use compress::DEFAULT_COMPRESSION_LEVEL;
pub use crypto::{
    EncryptionKey, EncryptionNonce, EphemeralKeyPair, SharedKey, X25519PublicKey, X25519SecretKey,
};
pub use envelope::{open, seal, seal_with_level, EncryptionFormat, SealedEnvelope, SealedPayload};
pub use error::{EnvelopeError, Result};
pub use types::{ArtifactId, ArtifactPart};
pub use wrap::WrappedKey;
