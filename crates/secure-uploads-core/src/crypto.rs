//! Cryptographic building blocks for envelopes.
//!
//! Provides X25519 key agreement and ChaCha20-Poly1305 encryption. Secret
//! material (static secrets, shared secrets, session keys) is zeroized on drop.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{EnvelopeError, Result};

/// Length of X25519 keys and session keys in bytes.
pub const KEY_LEN: usize = 32;
/// Length of a ChaCha20-Poly1305 nonce.
pub const NONCE_LEN: usize = 12;
/// Length of the Poly1305 authentication tag.
pub const TAG_LEN: usize = 16;

/// BLAKE3 derive-key context for wrap keys.
const WRAP_KEY_DOMAIN: &str = "secure-uploads v1 session-key wrap";

/// A recipient's X25519 public key, as loaded from `public.pem`.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct X25519PublicKey(pub [u8; KEY_LEN]);

impl X25519PublicKey {
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex of the key bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn to_dalek(self) -> PublicKey {
        PublicKey::from(self.0)
    }
}

impl fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X25519Pub({})", &self.to_hex()[..16])
    }
}

impl From<PublicKey> for X25519PublicKey {
    fn from(point: PublicKey) -> Self {
        Self(point.to_bytes())
    }
}

/// A recipient's X25519 static secret. Zeroized on drop.
#[derive(Clone)]
pub struct X25519SecretKey(StaticSecret);

impl X25519SecretKey {
    /// Fresh recipient secret from the thread RNG.
    pub fn generate() -> Self {
        Self(StaticSecret::random_from_rng(rand::thread_rng()))
    }

    /// Create from raw scalar bytes. Clamping happens at use.
    pub fn from_bytes(scalar: [u8; KEY_LEN]) -> Self {
        Self(scalar.into())
    }

    /// Raw scalar bytes. The caller owns zeroizing the copy.
    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        self.0.to_bytes()
    }

    pub fn public_key(&self) -> X25519PublicKey {
        PublicKey::from(&self.0).into()
    }

    /// X25519 with the ephemeral public key stored in a wrapped key.
    pub fn diffie_hellman(&self, ephemeral_public: &X25519PublicKey) -> SharedKey {
        SharedKey(self.0.diffie_hellman(&ephemeral_public.to_dalek()).to_bytes())
    }
}

impl fmt::Debug for X25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X25519Secret({:?})", self.public_key())
    }
}

/// Raw X25519 output. Only ever used as input to [`Self::derive_wrap_key`].
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; KEY_LEN]);

impl SharedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Derive the key that wraps a session key.
    ///
    /// `context` separates wrap keys for different artifact parts.
    pub fn derive_wrap_key(&self, context: &[u8]) -> EncryptionKey {
        let mut hasher = blake3::Hasher::new_derive_key(WRAP_KEY_DOMAIN);
        hasher.update(&self.0);
        hasher.update(context);
        EncryptionKey(*hasher.finalize().as_bytes())
    }
}

/// A 256-bit ChaCha20-Poly1305 key: a per-blob session key or a wrap key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey([u8; KEY_LEN]);

impl EncryptionKey {
    /// Fresh session key from the thread RNG.
    pub fn generate() -> Self {
        let mut key = Self([0u8; KEY_LEN]);
        rand::thread_rng().fill_bytes(&mut key.0);
        key
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    fn aead(&self) -> ChaCha20Poly1305 {
        ChaCha20Poly1305::new(Key::from_slice(&self.0))
    }

    /// Encrypt and append the 16-byte tag.
    pub fn encrypt(&self, plaintext: &[u8], nonce: &EncryptionNonce) -> Result<Vec<u8>> {
        self.aead()
            .encrypt(Nonce::from_slice(nonce.as_bytes()), plaintext)
            .map_err(|e| EnvelopeError::EncryptionError(e.to_string()))
    }

    /// Verify the tag and decrypt. Any mismatch is reported the same way.
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &EncryptionNonce) -> Result<Vec<u8>> {
        self.aead()
            .decrypt(Nonce::from_slice(nonce.as_bytes()), ciphertext)
            .map_err(|_| EnvelopeError::DecryptionError("authentication failed".into()))
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

/// A 96-bit ChaCha20-Poly1305 nonce, stored beside each ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionNonce(pub [u8; NONCE_LEN]);

impl EncryptionNonce {
    /// Random nonce. Each key encrypts once.
    pub fn generate() -> Self {
        let mut nonce = Self([0u8; NONCE_LEN]);
        rand::thread_rng().fill_bytes(&mut nonce.0);
        nonce
    }

    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// The sender half of a key wrap. One per wrapped key.
pub struct EphemeralKeyPair {
    secret: EphemeralSecret,
    public: X25519PublicKey,
}

impl EphemeralKeyPair {
    pub fn generate() -> Self {
        let secret = EphemeralSecret::random_from_rng(rand::thread_rng());
        let public = PublicKey::from(&secret).into();
        Self { secret, public }
    }

    /// The half stored in the wrapped key.
    pub fn public_key(&self) -> X25519PublicKey {
        self.public
    }

    /// Agree with the recipient's static key. Consumes the secret.
    pub fn diffie_hellman(self, recipient_public: &X25519PublicKey) -> SharedKey {
        SharedKey(self.secret.diffie_hellman(&recipient_public.to_dalek()).to_bytes())
    }
}
