//! The FileCipher: entry point for sealing and opening files.

use std::path::{Path, PathBuf};

use crate::config::CipherConfig;
use crate::error::Result;
use crate::{opener, sealer};

/// Seals files for a recipient public key and opens them with the matching
/// private key.
///
/// Holds only configuration. Keys are loaded from disk on every call and
/// dropped (zeroized) before the call returns.
#[derive(Debug, Clone, Default)]
pub struct FileCipher {
    config: CipherConfig,
}

impl FileCipher {
    /// Create a cipher with the given configuration.
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Seal the file at `source` under `name`.
    ///
    /// Writes `H.data`, `H.info`, `H.data.key` and `H.info.key` into
    /// `destination` and returns the path of `H.data`. A failure part-way
    /// through the writes leaves the files already written in place.
    pub fn seal_file(
        &self,
        name: &str,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        sealer::seal_file(
            &self.config,
            name,
            source.as_ref(),
            destination.as_ref(),
            public_key_path.as_ref(),
        )
    }

    /// Seal in-memory bytes under `name`. Same output as [`Self::seal_file`].
    pub fn seal_bytes(
        &self,
        name: &str,
        payload: &[u8],
        destination: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        sealer::seal_bytes(
            &self.config,
            name,
            payload,
            destination.as_ref(),
            public_key_path.as_ref(),
        )
    }

    /// Open the artifact set whose `.data` file is `data_path`.
    ///
    /// Writes the payload to `destination/<sanitized name>`, replacing any
    /// existing file, and returns that path. Artifacts are never deleted.
    pub fn open_file(
        &self,
        data_path: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        private_key_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        opener::open_file(
            &self.config,
            data_path.as_ref(),
            destination.as_ref(),
            private_key_path.as_ref(),
        )
    }
}

/// Seal a file with the default configuration.
pub fn seal_file(
    name: &str,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    public_key_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    FileCipher::default().seal_file(name, source, destination, public_key_path)
}

/// Open a sealed file with the default configuration.
pub fn open_file(
    data_path: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    private_key_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    FileCipher::default().open_file(data_path, destination, private_key_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cipher_uses_default_config() {
        let cipher = FileCipher::default();
        assert_eq!(cipher.config(), &CipherConfig::default());
        assert_eq!(cipher.config().compression_level, 3);
        assert!(cipher.config().verify_size);
    }

    #[test]
    fn test_cipher_keeps_its_config() {
        let config = CipherConfig::default()
            .with_compression_level(19)
            .with_verify_size(false);
        let cipher = FileCipher::new(config.clone());

        assert_eq!(cipher.config(), &config);
        assert_eq!(cipher.clone().config(), &config);
    }
}
