use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Malformed stream at offset {offset}: {reason}")]
	MalformedStream { offset: usize, reason: &'static str },

	#[error("Data integrity check failed: checksum mismatch")]
	ChecksumMismatch,

	#[error("Invalid BRLE container format: {0}")]
	InvalidFormat(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

impl BrleError {
	pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
		BrleError::MalformedStream { offset, reason }
	}
}

pub type Result<T> = std::result::Result<T, BrleError>;
