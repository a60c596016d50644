//! zstd compression applied before encryption.
//!
//! Ciphertext is incompressible, so compression has to happen first.

use crate::error::{EnvelopeError, Result};

/// zstd level used when the caller does not choose one.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Compress `data` at the given zstd level.
pub fn compress(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level).map_err(|e| EnvelopeError::CompressionError(e.to_string()))
}

/// Decompress a zstd frame.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| EnvelopeError::DecompressionError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compresses_repetitive_input() {
        let data = b"abcdef".repeat(1000);
        let compressed = compress(&data, DEFAULT_COMPRESSION_LEVEL).unwrap();
        assert!(compressed.len() < data.len() / 10);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_empty_input_is_a_valid_frame() {
        let compressed = compress(b"", DEFAULT_COMPRESSION_LEVEL).unwrap();
        assert!(!compressed.is_empty());
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_zstd_input() {
        let err = decompress(b"definitely not a zstd frame").unwrap_err();
        assert!(err.is_decompression_failure());
    }

    #[test]
    fn test_rejects_truncated_frame() {
        let compressed = compress(&b"x".repeat(4096), 19).unwrap();
        let err = decompress(&compressed[..compressed.len() / 2]).unwrap_err();
        assert!(err.is_decompression_failure());
    }

    proptest! {
        #[test]
        fn compression_is_lossless(data in prop::collection::vec(any::<u8>(), 0..4096), level in 1i32..=9) {
            let compressed = compress(&data, level).unwrap();
            prop_assert_eq!(decompress(&compressed).unwrap(), data);
        }
    }
}
