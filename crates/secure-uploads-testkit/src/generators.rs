//! Proptest generators for property-based testing.

use proptest::prelude::*;

use secure_uploads_core::{ArtifactPart, EncryptionKey, X25519SecretKey};

/// Generate a random recipient secret key.
pub fn secret_key() -> impl Strategy<Value = X25519SecretKey> {
    any::<[u8; 32]>().prop_map(X25519SecretKey::from_bytes)
}

/// Generate a random session key.
pub fn session_key() -> impl Strategy<Value = EncryptionKey> {
    any::<[u8; 32]>().prop_map(EncryptionKey::from_bytes)
}

/// Generate an artifact part.
pub fn artifact_part() -> impl Strategy<Value = ArtifactPart> {
    prop_oneof![Just(ArtifactPart::Data), Just(ArtifactPart::Info)]
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a payload that compresses well: a short pattern repeated.
pub fn repetitive_payload(max_repeats: usize) -> impl Strategy<Value = Vec<u8>> {
    (payload(16), 1..=max_repeats).prop_map(|(pattern, repeats)| pattern.repeat(repeats))
}

/// Generate a file name that sanitizes to itself: a whitelisted stem, one
/// dot, and a possibly empty whitelisted extension.
pub fn safe_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}\\.[A-Za-z0-9]{0,5}".prop_map(String::from)
}

/// Generate a file name as a browser might submit it: spaces, punctuation,
/// non-ASCII, and directory prefixes from either platform.
pub fn upload_name() -> impl Strategy<Value = String> {
    prop_oneof![
        safe_name(),
        "[ -~]{0,32}".prop_map(String::from),
        "(C:\\\\Users\\\\[a-z]{1,8}\\\\)?[a-z ]{1,12}\\.[a-z]{1,4}".prop_map(String::from),
        "(\\.\\./){0,3}[a-z]{1,12}".prop_map(String::from),
        any::<String>(),
    ]
}

/// Parameters for one seal and open.
#[derive(Debug, Clone)]
pub struct SealParams {
    pub secret: X25519SecretKey,
    pub name: String,
    pub payload: Vec<u8>,
    pub compression_level: i32,
}

impl Arbitrary for SealParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            secret_key(),
            safe_name(),
            prop_oneof![payload(2048), repetitive_payload(256)],
            1i32..=19i32, // compression level
        )
            .prop_map(|(secret, name, payload, compression_level)| SealParams {
                secret,
                name,
                payload,
                compression_level,
            })
            .boxed()
    }
}
