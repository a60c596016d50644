//! Opening: a `.data` path in, one recovered file out.

use std::path::{Path, PathBuf};

use secure_uploads_core::{envelope, ArtifactPart, X25519SecretKey};
use zeroize::Zeroizing;

use crate::artifact::{read_file, write_file, ArtifactSet};
use crate::config::CipherConfig;
use crate::error::{Result, UploadError};
use crate::metadata::FileInfo;
use crate::sanitize::{is_usable, sanitize};

/// The raw contents of a complete artifact set.
struct SealedBlobs {
    data: Vec<u8>,
    info: Vec<u8>,
    data_key: Vec<u8>,
    info_key: Vec<u8>,
}

impl SealedBlobs {
    fn read(set: &ArtifactSet) -> Result<Self> {
        Ok(Self {
            data: read_file(&set.blob_path(ArtifactPart::Data))?,
            info: read_file(&set.blob_path(ArtifactPart::Info))?,
            data_key: read_file(&set.key_path(ArtifactPart::Data))?,
            info_key: read_file(&set.key_path(ArtifactPart::Info))?,
        })
    }
}

/// Open the artifact set named by `data_path` into `destination`.
///
/// Nothing is written unless both parts open and the metadata is valid.
pub(crate) fn open_file(
    config: &CipherConfig,
    data_path: &Path,
    destination: &Path,
    private_key_path: &Path,
) -> Result<PathBuf> {
    let set = ArtifactSet::from_data_path(data_path)?;

    let recipient =
        X25519SecretKey::load(private_key_path).map_err(|source| UploadError::KeyLoad {
            path: private_key_path.to_path_buf(),
            source,
        })?;

    let blobs = SealedBlobs::read(&set)?;

    let payload = open_part(&blobs.data, &blobs.data_key, ArtifactPart::Data, &recipient, &set)?;
    let info = open_part(&blobs.info, &blobs.info_key, ArtifactPart::Info, &recipient, &set)?;

    let info = FileInfo::from_bytes(&info)?;

    if config.verify_size {
        if let Some(expected) = info.size {
            let actual = payload.len() as u64;
            if expected != actual {
                return Err(UploadError::SizeMismatch { expected, actual });
            }
        }
    }

    let file_name = sanitize(&info.name);
    if !is_usable(&file_name) {
        return Err(UploadError::Metadata(format!(
            "name does not yield a usable file name: {:?}",
            file_name
        )));
    }

    let recovered = destination.join(file_name);
    write_file(&recovered, &payload)?;

    tracing::info!(
        artifact = set.base(),
        payload_bytes = payload.len(),
        "opened file"
    );

    Ok(recovered)
}

fn open_part(
    blob: &[u8],
    wrapped_key: &[u8],
    part: ArtifactPart,
    recipient: &X25519SecretKey,
    set: &ArtifactSet,
) -> Result<Zeroizing<Vec<u8>>> {
    envelope::open(blob, wrapped_key, part, recipient)
        .map(Zeroizing::new)
        .map_err(|source| {
            tracing::warn!(artifact = set.base(), %part, "failed to open artifact part: {}", source);
            UploadError::Decrypt { part, source }
        })
}
