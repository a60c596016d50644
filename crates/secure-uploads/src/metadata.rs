//! The metadata record sealed alongside each payload.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UploadError};

/// Metadata sealed in `H.info`, serialized as compact JSON.
///
/// Unknown fields are ignored on parse so the record can grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Original file name as supplied by the uploader (unsanitized).
    pub name: String,

    /// Payload length in bytes before compression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileInfo {
    /// Build the record for a payload.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| UploadError::Metadata(e.to_string()))
    }

    /// Parse from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| UploadError::Metadata(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let info = FileInfo::new("report.pdf", 42);
        let json = String::from_utf8(info.to_bytes().unwrap()).unwrap();
        assert_eq!(json, r#"{"name":"report.pdf","size":42}"#);
    }

    #[test]
    fn test_name_only_record_parses() {
        let info = FileInfo::from_bytes(br#"{"name":"a.txt"}"#).unwrap();
        assert_eq!(info.name, "a.txt");
        assert_eq!(info.size, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let info = FileInfo::from_bytes(br#"{"name":"a.txt","uploader":"x","size":3}"#).unwrap();
        assert_eq!(info, FileInfo::new("a.txt", 3));
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = FileInfo::from_bytes(br#"{"size":3}"#).unwrap_err();
        assert!(matches!(err, UploadError::Metadata(_)));
    }

    #[test]
    fn test_non_json_rejected() {
        assert!(FileInfo::from_bytes(b"name=a.txt").is_err());
        assert!(FileInfo::from_bytes(br#"{"name":null}"#).is_err());
    }
}
