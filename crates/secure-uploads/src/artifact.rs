//! Artifact set naming and addressing.
//!
//! A sealed file is four siblings sharing a base identifier `H`:
//!
//! | File         | Contents                          |
//! |--------------|-----------------------------------|
//! | `H.data`     | sealed, compressed payload        |
//! | `H.info`     | sealed, compressed metadata       |
//! | `H.data.key` | wrapped payload session key       |
//! | `H.info.key` | wrapped metadata session key      |
//!
//! Every path is derived from `H` by string manipulation alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secure_uploads_core::{ArtifactId, ArtifactPart};

use crate::error::{Result, UploadError};

const DATA_SUFFIX: &str = ".data";

/// The four file paths belonging to one sealed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    dir: PathBuf,
    base: String,
}

impl ArtifactSet {
    /// The artifact set for `id` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>, id: &ArtifactId) -> Self {
        Self {
            dir: dir.into(),
            base: id.to_hex(),
        }
    }

    /// Recover the artifact set from the path of its `.data` file.
    ///
    /// The base name is taken verbatim; it is not required to be valid hex.
    pub fn from_data_path(data_path: impl AsRef<Path>) -> Result<Self> {
        let path = data_path.as_ref();
        let invalid = || UploadError::InvalidDataPath(path.to_path_buf());

        let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let base = file_name
            .strip_suffix(DATA_SUFFIX)
            .filter(|b| !b.is_empty())
            .ok_or_else(invalid)?;

        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(Self {
            dir,
            base: base.to_string(),
        })
    }

    /// Directory holding the set.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The shared base name `H`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The base name parsed as an [`ArtifactId`], if it is one.
    pub fn id(&self) -> Option<ArtifactId> {
        ArtifactId::from_hex(&self.base).ok()
    }

    /// Path of the sealed blob for `part`.
    pub fn blob_path(&self, part: ArtifactPart) -> PathBuf {
        self.dir.join(format!("{}.{}", self.base, part.extension()))
    }

    /// Path of the wrapped key for `part`.
    pub fn key_path(&self, part: ArtifactPart) -> PathBuf {
        self.dir.join(format!("{}.{}", self.base, part.key_extension()))
    }

    /// Path of `H.data`, the caller's handle on the set.
    pub fn data_path(&self) -> PathBuf {
        self.blob_path(ArtifactPart::Data)
    }

    /// All four paths: data, info, data key, info key.
    pub fn paths(&self) -> [PathBuf; 4] {
        [
            self.blob_path(ArtifactPart::Data),
            self.blob_path(ArtifactPart::Info),
            self.key_path(ArtifactPart::Data),
            self.key_path(ArtifactPart::Info),
        ]
    }

    /// True when all four files exist.
    pub fn is_complete(&self) -> bool {
        self.paths().iter().all(|p| p.is_file())
    }

    /// Delete whichever of the four files exist.
    ///
    /// Neither sealing nor opening ever removes artifacts; this is for callers
    /// discarding a set, including a partial one left by a failed seal.
    /// Returns the number of files removed.
    pub fn remove(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.paths() {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(UploadError::io(path, e)),
            }
        }
        Ok(removed)
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| UploadError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

pub(crate) fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| UploadError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_id() {
        let id = ArtifactId::from_bytes([0x0f; 32]);
        let set = ArtifactSet::new("/srv/uploads", &id);
        let hex = "0f".repeat(32);

        assert_eq!(
            set.data_path(),
            PathBuf::from(format!("/srv/uploads/{hex}.data"))
        );
        assert_eq!(
            set.key_path(ArtifactPart::Info),
            PathBuf::from(format!("/srv/uploads/{hex}.info.key"))
        );
        assert_eq!(set.id(), Some(id));
    }

    #[test]
    fn test_from_data_path_derives_siblings() {
        let set = ArtifactSet::from_data_path("/srv/uploads/abc123.data").unwrap();
        assert_eq!(set.base(), "abc123");
        assert_eq!(set.dir(), Path::new("/srv/uploads"));

        let paths = set.paths();
        assert_eq!(paths[1], PathBuf::from("/srv/uploads/abc123.info"));
        assert_eq!(paths[2], PathBuf::from("/srv/uploads/abc123.data.key"));
        assert_eq!(paths[3], PathBuf::from("/srv/uploads/abc123.info.key"));
        assert!(set.id().is_none());
    }

    #[test]
    fn test_relative_data_path() {
        let set = ArtifactSet::from_data_path("abc.data").unwrap();
        assert_eq!(set.blob_path(ArtifactPart::Info), PathBuf::from("abc.info"));
    }

    #[test]
    fn test_rejects_non_data_paths() {
        for bad in ["/srv/abc.info", "/srv/abc.data.key", "/srv/.data", "/srv/abc", "/"] {
            let err = ArtifactSet::from_data_path(bad).unwrap_err();
            assert!(matches!(err, UploadError::InvalidDataPath(_)), "{bad}");
        }
    }

    #[test]
    fn test_remove_tolerates_partial_sets() {
        let dir = tempfile::tempdir().unwrap();
        let set = ArtifactSet::new(dir.path(), &ArtifactId::derive(b"x"));

        fs::write(set.data_path(), b"d").unwrap();
        fs::write(set.key_path(ArtifactPart::Data), b"k").unwrap();
        assert!(!set.is_complete());

        assert_eq!(set.remove().unwrap(), 2);
        assert_eq!(set.remove().unwrap(), 0);
    }

    #[test]
    fn test_read_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, UploadError::Io { .. }));
    }
}
