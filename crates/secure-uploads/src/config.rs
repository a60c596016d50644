//! Configuration for [`FileCipher`](crate::FileCipher).

use secure_uploads_core::DEFAULT_COMPRESSION_LEVEL;

/// Configuration for sealing and opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    /// zstd level applied to payload and metadata before encryption.
    pub compression_level: i32,
    /// Whether opening checks the recovered length against the metadata.
    pub verify_size: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            verify_size: true,
        }
    }
}

impl CipherConfig {
    /// Set the zstd compression level.
    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level;
        self
    }

    /// Enable or disable the payload length check on open.
    pub fn with_verify_size(mut self, verify: bool) -> Self {
        self.verify_size = verify;
        self
    }
}
