//! Sealing: payload + name in, four artifact files out.

use std::path::{Path, PathBuf};

use secure_uploads_core::{seal_with_level, ArtifactId, ArtifactPart, X25519PublicKey};
use zeroize::Zeroizing;

use crate::artifact::{read_file, write_file, ArtifactSet};
use crate::config::CipherConfig;
use crate::error::{Result, UploadError};
use crate::metadata::FileInfo;

/// Seal the file at `source` into `destination`.
pub(crate) fn seal_file(
    config: &CipherConfig,
    name: &str,
    source: &Path,
    destination: &Path,
    public_key_path: &Path,
) -> Result<PathBuf> {
    let recipient = load_public_key(public_key_path)?;
    let payload = Zeroizing::new(read_file(source)?);
    seal_payload(config, name, &payload, destination, &recipient)
}

/// Seal in-memory bytes into `destination`.
pub(crate) fn seal_bytes(
    config: &CipherConfig,
    name: &str,
    payload: &[u8],
    destination: &Path,
    public_key_path: &Path,
) -> Result<PathBuf> {
    let recipient = load_public_key(public_key_path)?;
    seal_payload(config, name, payload, destination, &recipient)
}

fn load_public_key(path: &Path) -> Result<X25519PublicKey> {
    X25519PublicKey::load(path).map_err(|source| UploadError::KeyLoad {
        path: path.to_path_buf(),
        source,
    })
}

fn seal_payload(
    config: &CipherConfig,
    name: &str,
    payload: &[u8],
    destination: &Path,
    recipient: &X25519PublicKey,
) -> Result<PathBuf> {
    let info = Zeroizing::new(FileInfo::new(name, payload.len() as u64).to_bytes()?);

    // Independent session keys per part.
    let data = seal_with_level(payload, ArtifactPart::Data, recipient, config.compression_level)
        .map_err(|source| UploadError::Seal {
            part: ArtifactPart::Data,
            source,
        })?;
    let meta = seal_with_level(&info, ArtifactPart::Info, recipient, config.compression_level)
        .map_err(|source| UploadError::Seal {
            part: ArtifactPart::Info,
            source,
        })?;

    let id = ArtifactId::derive(&data.cipher_blob);
    let set = ArtifactSet::new(destination, &id);

    // No rollback: a failure part-way leaves the earlier files behind.
    write_file(&set.blob_path(ArtifactPart::Data), &data.cipher_blob)?;
    write_file(&set.blob_path(ArtifactPart::Info), &meta.cipher_blob)?;
    write_file(&set.key_path(ArtifactPart::Data), &data.wrapped_key)?;
    write_file(&set.key_path(ArtifactPart::Info), &meta.wrapped_key)?;

    tracing::info!(
        artifact = %id,
        payload_bytes = payload.len(),
        sealed_bytes = data.cipher_blob.len(),
        "sealed file"
    );

    Ok(set.data_path())
}
