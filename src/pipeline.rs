use crate::config::{BrleConfig, StreamFormat};
use crate::container;
use crate::error::{BrleError, Result};
use crate::rle;
use log::debug;
use rayon::prelude::*;
use std::io::{Read, Write};

#[derive(Debug)]
pub struct CompressionStats {
	pub original_size: u64,
	pub compressed_size: u64,
	pub ratio: f64,
}

#[derive(Debug)]
pub struct DecompressionStats {
	pub compressed_size: u64,
	pub decompressed_size: u64,
}

/// Read all of `reader`, encode it and write it in `config.format`.
pub fn compress<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	config: &BrleConfig,
) -> Result<CompressionStats> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	let original_size = buffer.len() as u64;

	let encoded = rle::encode(&buffer);

	let compressed_size = match config.format {
		StreamFormat::Raw => {
			writer.write_all(&encoded)?;
			encoded.len() as u64
		}
		StreamFormat::Framed => container::write_frame(writer, &buffer, &encoded, config.checksum)?,
	};
	writer.flush()?;

	let ratio = if compressed_size > 0 { original_size as f64 / compressed_size as f64 } else { 0.0 };
	debug!("compressed {} -> {} bytes ({:?})", original_size, compressed_size, config.format);

	Ok(CompressionStats { original_size, compressed_size, ratio })
}

/// Read a stream in `format` from `reader` and write the decoded bytes.
/// Nothing is written when decoding fails.
pub fn decompress<R: Read, W: Write>(
	reader: &mut R,
	writer: &mut W,
	format: StreamFormat,
) -> Result<DecompressionStats> {
	let (compressed_size, data) = match format {
		StreamFormat::Raw => {
			let mut stream = Vec::new();
			reader.read_to_end(&mut stream)?;
			(stream.len() as u64, rle::decode(&stream)?)
		}
		StreamFormat::Framed => {
			let (header, payload) = container::read_frame(reader)?;
			(container::HEADER_LEN + payload.len() as u64, container::unpack(&header, &payload)?)
		}
	};

	writer.write_all(&data)?;
	writer.flush()?;

	debug!("decompressed {} -> {} bytes ({:?})", compressed_size, data.len(), format);
	Ok(DecompressionStats { compressed_size, decompressed_size: data.len() as u64 })
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
	rayon::ThreadPoolBuilder::new()
		.num_threads(threads)
		.build()
		.map_err(|e| BrleError::ConfigError(format!("Failed to build thread pool: {}", e)))
}

/// Encode independent buffers in parallel. Output order matches input order.
pub fn encode_batch<T>(buffers: &[T], config: &BrleConfig) -> Result<Vec<Vec<u8>>>
where
	T: AsRef<[u8]> + Sync,
{
	let pool = build_pool(config.threads)?;
	debug!("encoding {} buffers on {} threads", buffers.len(), config.threads);
	Ok(pool.install(|| buffers.par_iter().map(|b| rle::encode(b.as_ref())).collect()))
}

/// Decode independent streams in parallel. Fails if any stream is malformed.
pub fn decode_batch<T>(streams: &[T], config: &BrleConfig) -> Result<Vec<Vec<u8>>>
where
	T: AsRef<[u8]> + Sync,
{
	let pool = build_pool(config.threads)?;
	debug!("decoding {} streams on {} threads", streams.len(), config.threads);
	pool.install(|| {
		streams
			.par_iter()
			.map(|s| rle::decode(s.as_ref()))
			.collect::<Result<Vec<_>>>()
	})
}
