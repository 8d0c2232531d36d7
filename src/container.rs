use crate::config::ChecksumType;
use crate::error::{BrleError, Result};
use crate::rle;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, warn};
use sha2::{Digest, Sha256};
use std::io::{Read, Write};

const MAGIC_NUMBER: &[u8; 4] = b"BRLE";
const VERSION: u8 = 1;

/// magic + version + checksum id + original len + payload len + checksum
pub const HEADER_LEN: u64 = 4 + 1 + 1 + 8 + 8 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
	pub checksum_type: ChecksumType,
	pub original_len: u64,
	pub payload_len: u64,
	pub checksum: u64,
}

/// Checksum of the decoded bytes. SHA-256 is truncated to its first 8 bytes.
pub fn calculate_checksum(data: &[u8], checksum_type: ChecksumType) -> u64 {
	match checksum_type {
		ChecksumType::CRC32 => crc32fast::hash(data) as u64,
		ChecksumType::SHA256 => {
			let digest = Sha256::digest(data);
			let mut head = [0u8; 8];
			head.copy_from_slice(&digest[..8]);
			u64::from_le_bytes(head)
		}
	}
}

fn checksum_id(checksum_type: ChecksumType) -> u8 {
	match checksum_type { ChecksumType::CRC32 => 0, ChecksumType::SHA256 => 1 }
}

/// Write `payload` (the encoded form of `original`) with its header.
/// Returns the number of bytes written.
pub fn write_frame<W: Write>(
	writer: &mut W,
	original: &[u8],
	payload: &[u8],
	checksum_type: ChecksumType,
) -> Result<u64> {
	let checksum = calculate_checksum(original, checksum_type);

	writer.write_all(MAGIC_NUMBER)?;
	writer.write_u8(VERSION)?;
	writer.write_u8(checksum_id(checksum_type))?;
	writer.write_u64::<LittleEndian>(original.len() as u64)?;
	writer.write_u64::<LittleEndian>(payload.len() as u64)?;
	writer.write_u64::<LittleEndian>(checksum)?;
	writer.write_all(payload)?;

	debug!("wrote frame: {} original bytes, {} payload bytes", original.len(), payload.len());
	Ok(HEADER_LEN + payload.len() as u64)
}

pub fn read_header<R: Read>(reader: &mut R) -> Result<FrameHeader> {
	let mut magic = [0u8; 4];
	reader.read_exact(&mut magic)?;
	if magic != *MAGIC_NUMBER { return Err(BrleError::InvalidFormat("Invalid magic number".to_string())); }

	let version = reader.read_u8()?;
	if version != VERSION { return Err(BrleError::InvalidFormat(format!("Unsupported version: {}", version))); }

	let checksum_type = match reader.read_u8()? {
		0 => ChecksumType::CRC32,
		1 => ChecksumType::SHA256,
		other => return Err(BrleError::InvalidFormat(format!("Unknown checksum type: {}", other))),
	};

	let original_len = reader.read_u64::<LittleEndian>()?;
	let payload_len = reader.read_u64::<LittleEndian>()?;
	let checksum = reader.read_u64::<LittleEndian>()?;

	Ok(FrameHeader { checksum_type, original_len, payload_len, checksum })
}

/// Read a whole frame: header plus exactly `payload_len` payload bytes.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<(FrameHeader, Vec<u8>)> {
	let header = read_header(reader)?;

	let mut payload = Vec::new();
	reader.by_ref().take(header.payload_len).read_to_end(&mut payload)?;
	if (payload.len() as u64) < header.payload_len {
		return Err(BrleError::Io(std::io::Error::new(
			std::io::ErrorKind::UnexpectedEof,
			format!("payload truncated: expected {} bytes, found {}", header.payload_len, payload.len()),
		)));
	}

	let mut probe = [0u8; 1];
	if reader.read(&mut probe)? != 0 {
		return Err(BrleError::InvalidFormat("Trailing data after payload".to_string()));
	}

	Ok((header, payload))
}

/// Decode a frame payload and verify it against the header.
pub fn unpack(header: &FrameHeader, payload: &[u8]) -> Result<Vec<u8>> {
	let data = rle::decode(payload)?;

	if data.len() as u64 != header.original_len {
		return Err(BrleError::InvalidFormat(format!(
			"Decoded size {} does not match recorded size {}",
			data.len(),
			header.original_len
		)));
	}

	if calculate_checksum(&data, header.checksum_type) != header.checksum {
		warn!("checksum mismatch for {} decoded bytes", data.len());
		return Err(BrleError::ChecksumMismatch);
	}

	Ok(data)
}
