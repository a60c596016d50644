//! # Secure Uploads
//!
//! Hybrid encryption of uploaded files for a single recipient.
//!
//! ## Overview
//!
//! - **Sealing** compresses and encrypts a file and its metadata under two
//!   fresh session keys, wraps both keys for the recipient's X25519 public
//!   key, and writes four files named after the BLAKE3 hash of the sealed
//!   payload.
//! - **Opening** derives the three siblings from the `.data` path, unwraps
//!   both keys with the private key, decrypts, and writes the payload under
//!   its original name after [`sanitize`].
//!
//! ## Key Concepts
//!
//! - **Artifact set**: `H.data`, `H.info`, `H.data.key`, `H.info.key` in one
//!   directory. See [`ArtifactSet`].
//! - **Base identifier `H`**: hex BLAKE3 of the sealed payload bytes. Sealing
//!   the same file twice gives two different identifiers.
//! - **Partial sets**: a failed seal may leave up to three files behind and a
//!   failed open writes nothing. Nothing is ever cleaned up automatically;
//!   see [`ArtifactSet::remove`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use secure_uploads::{open_file, seal_file};
//!
//! let sealed = seal_file(
//!     "report final!!.PDF",
//!     "/tmp/upload-1234",
//!     "/srv/sealed",
//!     "/etc/uploads/public.pem",
//! )
//! .unwrap();
//!
//! let recovered = open_file(&sealed, "/srv/recovered", "/etc/uploads/private.pem").unwrap();
//! assert!(recovered.ends_with("report_final__.PDF"));
//! ```
//!
//! ## Re-exports
//!
//! - `secure_uploads::core` - Envelope primitives and key types

pub mod artifact;
pub mod cipher;
pub mod config;
pub mod error;
pub mod metadata;
pub mod sanitize;

mod opener;
mod sealer;

pub use secure_uploads_core as core;

pub use artifact::ArtifactSet;
pub use cipher::{open_file, seal_file, FileCipher};
pub use config::CipherConfig;
pub use error::{ErrorKind, Result, UploadError};
pub use metadata::FileInfo;
pub use sanitize::{is_usable, sanitize};

pub use secure_uploads_core::{ArtifactId, ArtifactPart, X25519PublicKey, X25519SecretKey};
