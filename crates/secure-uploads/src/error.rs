//! Error types for sealing and opening files.

use std::path::PathBuf;

use secure_uploads_core::{ArtifactPart, EnvelopeError};
use thiserror::Error;

/// Coarse classification of an [`UploadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key file unreadable or malformed.
    KeyLoad,
    /// Source, artifact or destination file could not be read or written.
    Io,
    /// Key unwrap or symmetric decryption failed.
    Crypto,
    /// Decrypted bytes did not decompress.
    Decompression,
    /// Metadata missing, malformed, or inconsistent with the payload.
    MetadataFormat,
}

/// Errors that can occur during seal and open operations.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Key material could not be loaded.
    #[error("failed to load key {}: {source}", path.display())]
    KeyLoad {
        path: PathBuf,
        #[source]
        source: EnvelopeError,
    },

    /// Filesystem error on a source, artifact or output file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path does not name a `.data` artifact.
    #[error("not a sealed data artifact: {}", .0.display())]
    InvalidDataPath(PathBuf),

    /// Sealing one part of the artifact set failed.
    #[error("failed to seal {part}: {source}")]
    Seal {
        part: ArtifactPart,
        #[source]
        source: EnvelopeError,
    },

    /// Opening one part of the artifact set failed.
    #[error("failed to decrypt {part}: {source}")]
    Decrypt {
        part: ArtifactPart,
        #[source]
        source: EnvelopeError,
    },

    /// Recovered metadata is malformed or incomplete.
    #[error("malformed metadata: {0}")]
    Metadata(String),

    /// Recovered payload length disagrees with the metadata.
    #[error("payload size mismatch: metadata records {expected} bytes, recovered {actual}")]
    SizeMismatch { expected: u64, actual: u64 },
}

impl UploadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyLoad { .. } => ErrorKind::KeyLoad,
            Self::Io { .. } | Self::InvalidDataPath(_) => ErrorKind::Io,
            Self::Seal { .. } => ErrorKind::Crypto,
            Self::Decrypt { source, .. } if source.is_decompression_failure() => {
                ErrorKind::Decompression
            }
            Self::Decrypt { .. } => ErrorKind::Crypto,
            Self::Metadata(_) | Self::SizeMismatch { .. } => ErrorKind::MetadataFormat,
        }
    }

    /// The artifact part that failed, for seal and decrypt failures.
    pub fn failed_part(&self) -> Option<ArtifactPart> {
        match self {
            Self::Seal { part, .. } | Self::Decrypt { part, .. } => Some(*part),
            _ => None,
        }
    }
}

/// Result type for seal and open operations.
pub type Result<T> = std::result::Result<T, UploadError>;
