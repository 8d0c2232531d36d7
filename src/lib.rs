//! # BRLE (Byte Run-Length Encoding)
//!
//! A lossless byte codec that collapses runs of identical bytes into
//! `(value, length)` records and reverses the transform exactly.
//!
//! ## Features
//!
//! - **Round-trip exact**: every byte buffer, including bytes with the high
//!   bit set, decodes back to itself
//! - **Unbounded runs**: run lengths above 127 spill into `0xFF`
//!   continuation bytes
//! - **Safe decoding**: truncated streams fail with `MalformedStream`
//!   instead of reading past the end
//! - **Framed files**: optional container with size and CRC32/SHA-256
//!   checksum for data at rest
//!
//! ## Quick Start
//!
//! ```rust
//! use brle::{decode, encode};
//!
//! let original = [0x03, 0x74, 0x04, 0x04, 0x04, 0x35, 0x35];
//! let encoded = encode(&original);
//! assert_eq!(encoded, vec![0x03, 0x74, 0x84, 0x03, 0xB5, 0x02]);
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, original.to_vec());
//! ```
//!
//! ### Framed Data
//!
//! ```rust
//! use brle::{compress_data, decompress_data, BrleConfig};
//!
//! let data = vec![0u8; 1000];
//! let config = BrleConfig::default();
//! let compressed = compress_data(&data, &config).unwrap();
//! let restored = decompress_data(&compressed, &config).unwrap();
//! assert_eq!(data, restored);
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod display;
pub mod error;
pub mod inspect;
pub mod pipeline;
pub mod rle;

// Re-export commonly used types for convenience
pub use config::{BrleConfig, ChecksumType, StreamFormat};
pub use error::{BrleError, Result};
pub use inspect::{summarize, StreamSummary};
pub use pipeline::{CompressionStats, DecompressionStats};
pub use rle::{decode, decoded_len, encode, encoded_len, run_length, runs, Record, Records};

use std::io::Cursor;

/// Compress data in memory, raw or framed according to `config.format`.
///
/// # Example
///
/// ```rust
/// use brle::{compress_data, BrleConfig, StreamFormat};
///
/// let config = BrleConfig::default().with_format(StreamFormat::Raw);
/// let compressed = compress_data(b"aaaab", &config).unwrap();
/// assert_eq!(compressed, vec![0xE1, 0x04, b'b']);
/// ```
pub fn compress_data(data: &[u8], config: &BrleConfig) -> Result<Vec<u8>> {
    let mut input = Cursor::new(data);
    let mut output = Vec::new();

    pipeline::compress(&mut input, &mut output, config)?;
    Ok(output)
}

/// Decompress data produced by [`compress_data`] with the same format.
pub fn decompress_data(compressed_data: &[u8], config: &BrleConfig) -> Result<Vec<u8>> {
    let mut input = Cursor::new(compressed_data);
    let mut output = Vec::new();

    pipeline::decompress(&mut input, &mut output, config.format)?;
    Ok(output)
}

/// Ratio the raw encoding would achieve, computed without allocating it.
///
/// Values above 1.0 mean the encoded stream is smaller than the input;
/// empty input reports 1.0.
pub fn estimate_compression_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 1.0;
    }
    data.len() as f64 / encoded_len(data) as f64
}

/// BRLE library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        authors: AUTHORS,
        description: DESCRIPTION,
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress_data() {
        let original = b"Hello, world! This is a test of the BRLE library API.";
        let config = BrleConfig::default();

        let compressed = compress_data(original, &config).unwrap();
        assert!(!compressed.is_empty());

        let decompressed = decompress_data(&compressed, &config).unwrap();
        assert_eq!(original.to_vec(), decompressed);
    }

    #[test]
    fn test_empty_data() {
        for format in [StreamFormat::Raw, StreamFormat::Framed] {
            let config = BrleConfig::default().with_format(format);
            let compressed = compress_data(b"", &config).unwrap();
            let decompressed = decompress_data(&compressed, &config).unwrap();
            assert!(decompressed.is_empty());
        }
    }

    #[test]
    fn test_large_data() {
        let original = vec![42u8; 10000];
        let config = BrleConfig::default().with_format(StreamFormat::Raw);

        let compressed = compress_data(&original, &config).unwrap();
        assert!(compressed.len() < 100);

        let decompressed = decompress_data(&compressed, &config).unwrap();
        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_corrupted_frame() {
        let config = BrleConfig::default();
        let mut compressed = compress_data(b"Test data for validation", &config).unwrap();
        let len = compressed.len();
        compressed[len - 1] ^= 0x01;
        assert!(decompress_data(&compressed, &config).is_err());
    }

    #[test]
    fn test_estimation() {
        let compressible = vec![0u8; 1000];
        let literal_only: Vec<u8> = (0..1000).map(|i| (i % 100) as u8).collect();

        let ratio1 = estimate_compression_ratio(&compressible);
        let ratio2 = estimate_compression_ratio(&literal_only);

        assert!(ratio1 > ratio2);
        assert_eq!(ratio2, 1.0);
        assert_eq!(estimate_compression_ratio(&[]), 1.0);
    }

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }
}
