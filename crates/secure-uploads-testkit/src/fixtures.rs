//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secure_uploads::{FileCipher, Result};
use secure_uploads_core::{X25519PublicKey, X25519SecretKey};
use tempfile::TempDir;

/// A recipient key pair written to PEM files inside a temporary directory,
/// with `sealed/` and `out/` subdirectories for artifacts and recovered files.
///
/// Everything is removed when the fixture is dropped.
pub struct TestFixture {
    pub secret: X25519SecretKey,
    pub cipher: FileCipher,
    dir: TempDir,
}

impl TestFixture {
    /// Create a new fixture with a random key pair.
    pub fn new() -> io::Result<Self> {
        Self::with_secret(X25519SecretKey::generate())
    }

    /// Create with a deterministic key pair from seed.
    pub fn with_seed(seed: [u8; 32]) -> io::Result<Self> {
        Self::with_secret(X25519SecretKey::from_bytes(seed))
    }

    fn with_secret(secret: X25519SecretKey) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("public.pem"), secret.public_key().to_pem())?;
        fs::write(dir.path().join("private.pem"), secret.to_pem())?;
        fs::create_dir(dir.path().join("sealed"))?;
        fs::create_dir(dir.path().join("out"))?;

        Ok(Self {
            secret,
            cipher: FileCipher::default(),
            dir,
        })
    }

    /// Use a different cipher configuration for [`Self::seal`] and [`Self::open`].
    pub fn with_cipher(mut self, cipher: FileCipher) -> Self {
        self.cipher = cipher;
        self
    }

    /// Get the recipient's public key.
    pub fn public_key(&self) -> X25519PublicKey {
        self.secret.public_key()
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn public_key_path(&self) -> PathBuf {
        self.root().join("public.pem")
    }

    pub fn private_key_path(&self) -> PathBuf {
        self.root().join("private.pem")
    }

    /// Directory the artifacts are sealed into.
    pub fn sealed_dir(&self) -> PathBuf {
        self.root().join("sealed")
    }

    /// Directory recovered files are opened into.
    pub fn out_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Write `bytes` to a scratch file standing in for an upload.
    pub fn write_source(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.root().join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Seal `bytes` under `name`. Returns the `.data` path.
    pub fn seal(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.cipher
            .seal_bytes(name, bytes, self.sealed_dir(), self.public_key_path())
    }

    /// Open a sealed `.data` path into [`Self::out_dir`].
    pub fn open(&self, data_path: &Path) -> Result<PathBuf> {
        self.cipher
            .open_file(data_path, self.out_dir(), self.private_key_path())
    }

    /// Names of the files currently in [`Self::sealed_dir`], sorted.
    pub fn sealed_files(&self) -> io::Result<Vec<String>> {
        list(&self.sealed_dir())
    }

    /// Names of the files currently in [`Self::out_dir`], sorted.
    pub fn recovered_files(&self) -> io::Result<Vec<String>> {
        list(&self.out_dir())
    }
}

fn list(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Create fixtures for several independent recipients.
pub fn recipients(count: usize) -> io::Result<Vec<TestFixture>> {
    (0..count as u64).map(|i| TestFixture::with_seed(recipient_seed(i))).collect()
}

/// Clamping clears the low bits of byte 0 and the high bit of byte 31, so
/// the index goes into bytes 1..9.
fn recipient_seed(index: u64) -> [u8; 32] {
    let mut seed = [0x5a; 32];
    seed[1..9].copy_from_slice(&index.to_le_bytes());
    seed
}
