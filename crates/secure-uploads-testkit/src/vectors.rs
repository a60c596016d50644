//! Golden test vectors for deterministic verification.
//!
//! These pin the parts of the format that are deterministic: recovered file
//! names, X25519 key agreement, and the artifact identifier hash. Sealed
//! output itself is randomized and has no vectors.

use secure_uploads::sanitize;
use secure_uploads_core::{ArtifactId, X25519PublicKey, X25519SecretKey};

/// A golden file name vector.
#[derive(Debug, Clone)]
pub struct NameVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Name as submitted with the upload.
    pub submitted: &'static str,
    /// Expected recovered file name.
    pub expected: &'static str,
}

/// A golden X25519 key agreement vector (RFC 7748 section 6.1).
#[derive(Debug, Clone)]
pub struct KeyAgreementVector {
    pub alice_secret: &'static str,
    pub alice_public: &'static str,
    pub bob_secret: &'static str,
    pub bob_public: &'static str,
    pub shared: &'static str,
}

/// A golden artifact identifier vector.
#[derive(Debug, Clone)]
pub struct IdentifierVector {
    pub name: &'static str,
    /// Bytes of a `.data` file.
    pub sealed_payload: &'static [u8],
    /// Expected base identifier `H`.
    pub expected: &'static str,
}

/// Get all golden file name vectors.
pub fn name_vectors() -> Vec<NameVector> {
    vec![
        NameVector {
            name: "spaces and punctuation",
            submitted: "report final!!.PDF",
            expected: "report_final__.PDF",
        },
        NameVector {
            name: "already safe",
            submitted: "notes_2024-01.txt",
            expected: "notes_2024-01.txt",
        },
        NameVector {
            name: "unix traversal",
            submitted: "../../etc/passwd",
            expected: "passwd.",
        },
        NameVector {
            name: "windows path",
            submitted: "C:\\Users\\me\\My Scan.jpeg",
            expected: "My_Scan.jpeg",
        },
        NameVector {
            name: "only the last dot separates",
            submitted: "archive.tar.gz",
            expected: "archive_tar.gz",
        },
        NameVector {
            name: "no extension keeps the separator",
            submitted: "Makefile",
            expected: "Makefile.",
        },
        NameVector {
            name: "hidden file",
            submitted: ".bashrc",
            expected: ".bashrc",
        },
        NameVector {
            name: "trailing dot",
            submitted: "draft.",
            expected: "draft.",
        },
        NameVector {
            name: "non-ascii replaced per character",
            submitted: "résumé.pdf",
            expected: "r_sum_.pdf",
        },
        NameVector {
            name: "ampersand is replaced, not entity-expanded",
            submitted: "a&b.txt",
            expected: "a_b.txt",
        },
        NameVector {
            name: "slash inside markup separates",
            submitted: "<b>bold</b>.html",
            expected: "b_.html",
        },
        NameVector {
            name: "directory only",
            submitted: "uploads/",
            expected: ".",
        },
    ]
}

/// The RFC 7748 X25519 test vector.
pub fn key_agreement_vector() -> KeyAgreementVector {
    KeyAgreementVector {
        alice_secret: "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
        alice_public: "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
        bob_secret: "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
        bob_public: "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
        shared: "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
    }
}

/// Get all golden identifier vectors.
pub fn identifier_vectors() -> Vec<IdentifierVector> {
    vec![IdentifierVector {
        name: "empty payload",
        sealed_payload: b"",
        expected: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
    }]
}

fn secret_from_hex(hex_str: &str) -> Option<X25519SecretKey> {
    let bytes: [u8; 32] = hex::decode(hex_str).ok()?.try_into().ok()?;
    Some(X25519SecretKey::from_bytes(bytes))
}

fn verify_key_agreement(v: &KeyAgreementVector) -> (bool, String) {
    let (Some(alice), Some(bob)) = (secret_from_hex(v.alice_secret), secret_from_hex(v.bob_secret))
    else {
        return (false, "bad vector hex".to_string());
    };

    let alice_public = alice.public_key();
    let bob_public: X25519PublicKey = bob.public_key();
    let shared_a = hex::encode(alice.diffie_hellman(&bob_public).as_bytes());
    let shared_b = hex::encode(bob.diffie_hellman(&alice_public).as_bytes());

    let matches = alice_public.to_hex() == v.alice_public
        && bob_public.to_hex() == v.bob_public
        && shared_a == v.shared
        && shared_b == v.shared;

    (matches, shared_a)
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let mut results: Vec<(String, bool, String)> = name_vectors()
        .iter()
        .map(|v| {
            let actual = sanitize(v.submitted);
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect();

    results.extend(identifier_vectors().iter().map(|v| {
        let actual = ArtifactId::derive(v.sealed_payload).to_hex();
        (v.name.to_string(), actual == v.expected, actual)
    }));

    let (matches, actual) = verify_key_agreement(&key_agreement_vector());
    results.push(("RFC 7748 key agreement".to_string(), matches, actual));

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_uploads::is_usable;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, actual) in verify_all_vectors() {
            assert!(matches, "Vector '{}' produced {}", name, actual);
        }
    }

    #[test]
    fn test_name_vectors_are_stable() {
        // Recovered names must survive a second pass unchanged.
        for vector in name_vectors() {
            assert_eq!(
                sanitize(vector.expected),
                vector.expected,
                "Vector '{}' is not a fixed point",
                vector.name
            );
        }
    }

    #[test]
    fn test_directory_only_vector_is_unusable() {
        let unusable: Vec<_> = name_vectors()
            .into_iter()
            .filter(|v| !is_usable(v.expected))
            .map(|v| v.name)
            .collect();

        assert_eq!(unusable, vec!["directory only"]);
    }
}
