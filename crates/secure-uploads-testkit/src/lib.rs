//! # Secure Uploads Testkit
//!
//! Testing utilities for Secure Uploads.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Recovered file names, X25519 key agreement, and artifact identifiers
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A key pair on disk plus scratch directories for seal/open scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use secure_uploads_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use secure_uploads_testkit::generators::SealParams;
//!
//! proptest! {
//!     #[test]
//!     fn sealed_files_open(params: SealParams) {
//!         // seal params.payload for params.secret.public_key(), then open
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use secure_uploads_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new().unwrap();
//! let data_path = fixture.seal("notes.txt", b"hello").unwrap();
//! let recovered = fixture.open(&data_path).unwrap();
//! assert!(recovered.ends_with("notes.txt"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{recipients, TestFixture};
pub use generators::SealParams;
pub use vectors::{
    identifier_vectors, key_agreement_vector, name_vectors, verify_all_vectors, NameVector,
};
