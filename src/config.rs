use crate::error::BrleError;
use std::str::FromStr;

/// On-disk layout produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// Bare record stream, no header.
    Raw,
    /// Record stream wrapped in the checksummed container.
    Framed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumType {
    CRC32,
    SHA256,
}

#[derive(Debug, Clone)]
pub struct BrleConfig {
    pub format: StreamFormat,
    pub checksum: ChecksumType,
    pub threads: usize,
}

impl Default for BrleConfig {
    fn default() -> Self {
        Self {
            format: StreamFormat::Framed,
            checksum: ChecksumType::CRC32,
            threads: num_cpus::get(),
        }
    }
}

impl BrleConfig {
    pub fn with_format(mut self, format: StreamFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_checksum(mut self, checksum: ChecksumType) -> Self {
        self.checksum = checksum;
        self
    }

    /// Zero falls back to the number of available cores.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = if threads == 0 { num_cpus::get() } else { threads };
        self
    }
}

impl FromStr for StreamFormat {
    type Err = BrleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(StreamFormat::Raw),
            "framed" => Ok(StreamFormat::Framed),
            _ => Err(BrleError::ConfigError(format!("Invalid format: {}", s))),
        }
    }
}

impl FromStr for ChecksumType {
    type Err = BrleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crc32" => Ok(ChecksumType::CRC32),
            "sha256" => Ok(ChecksumType::SHA256),
            _ => Err(BrleError::ConfigError(format!("Invalid checksum: {}", s))),
        }
    }
}
